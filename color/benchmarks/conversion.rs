use brunch::Bench;

use hsv_color::{Color, FromColor, Hsva16, Hsva8, HsvaF64, Rgba64};

#[derive(Debug, Clone, Copy)]
struct Sample {
    name: &'static str,
    rgba: Rgba64,
}

const SAMPLES: [Sample; 3] = [
    Sample {
        name: "gray",
        rgba: Rgba64 { r: 0x8080, g: 0x8080, b: 0x8080, a: 0xffff },
    },
    Sample {
        name: "chromatic",
        rgba: Rgba64 { r: 0x1234, g: 0xcafe, b: 0x0042, a: 0xffff },
    },
    Sample {
        name: "translucent",
        rgba: Rgba64 { r: 0x0a0a, g: 0x2020, b: 0x3030, a: 0x4040 },
    },
];

fn main() {
    let mut benches = brunch::Benches::default();

    benches.extend(SAMPLES.into_iter().flat_map(|sample| {
        let rgba = sample.rgba;
        let back = Hsva16::from_color(&rgba);
        [
            Bench::new(format!("hsv_color::Hsva8::from_color({})", sample.name))
                .run(move || Hsva8::from_color(&rgba)),
            Bench::new(format!("hsv_color::Hsva16::from_color({})", sample.name))
                .run(move || Hsva16::from_color(&rgba)),
            Bench::new(format!("hsv_color::HsvaF64::from_color({})", sample.name))
                .run(move || HsvaF64::from_color(&rgba)),
            Bench::new(format!("hsv_color::Hsva16::rgba64({})", sample.name))
                .run(move || back.rgba64()),
        ]
    }));

    benches.finish();
}
