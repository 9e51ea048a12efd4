use hsv_color::{Color, FromColor, Hsva16, Hsva8, HsvaF64};

/// An HSV+alpha color that can be stored as four flat channel samples.
///
/// This links a color type to the sample representation a [`Pixmap`]
/// stores it in: one sample per channel, in H, S, V, A order. The samples
/// are plain old data, so whole buffers can be viewed as raw bytes through
/// `bytemuck` when handing them to the rest of a pipeline.
///
/// [`Pixmap`]: crate::Pixmap
pub trait Pixel: Color + FromColor + Copy + Default {
    /// The representation of a single channel sample.
    type Sample: bytemuck::Pod + Copy + Default + PartialEq;

    /// The alpha sample denoting full opacity.
    const OPAQUE: Self::Sample;

    /// Assemble a pixel from its samples in H, S, V, A order.
    fn from_samples(samples: [Self::Sample; 4]) -> Self;

    /// The pixel's samples in H, S, V, A order.
    fn into_samples(self) -> [Self::Sample; 4];
}

impl Pixel for Hsva8 {
    type Sample = u8;

    const OPAQUE: u8 = 0xff;

    fn from_samples([h, s, v, a]: [u8; 4]) -> Self {
        Hsva8 { h, s, v, a }
    }

    fn into_samples(self) -> [u8; 4] {
        [self.h, self.s, self.v, self.a]
    }
}

impl Pixel for Hsva16 {
    type Sample = u16;

    const OPAQUE: u16 = 0xffff;

    fn from_samples([h, s, v, a]: [u16; 4]) -> Self {
        Hsva16 { h, s, v, a }
    }

    fn into_samples(self) -> [u16; 4] {
        [self.h, self.s, self.v, self.a]
    }
}

impl Pixel for HsvaF64 {
    type Sample = f64;

    const OPAQUE: f64 = 1.0;

    fn from_samples([h, s, v, a]: [f64; 4]) -> Self {
        HsvaF64 { h, s, v, a }
    }

    fn into_samples(self) -> [f64; 4] {
        [self.h, self.s, self.v, self.a]
    }
}
