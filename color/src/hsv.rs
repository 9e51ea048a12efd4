//! The three HSV+alpha representations and the conversion core.
//!
//! All three share one geometric algorithm. The integer types are a
//! faithful quantization of the floating-point path, not an independent
//! approximation: their `rgba64` conversions normalize the channels to
//! reals and run the same sector formula, and the 8-bit decomposition is
//! derived from the 16-bit one by linear rescaling.
use bytemuck::{Pod, Zeroable};

use crate::math;
use crate::rgba::{Color, FromColor, Rgba64};

/// A non-premultiplied HSV color with alpha, 8 bits per channel.
///
/// All channels range over `0..=255`; in particular hue does, instead of
/// the conventional `[0, 360)`. The scaling is linear with 360 degrees
/// mapping to one past the channel maximum, so `h = 255` reads as just
/// below a full turn. The zero value is canonical fully transparent black.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
pub struct Hsva8 {
    pub h: u8,
    pub s: u8,
    pub v: u8,
    pub a: u8,
}

/// A non-premultiplied HSV color with alpha, 16 bits per channel.
///
/// Channel semantics are as in [`Hsva8`] with `65535` taking the place of
/// `255`. This is the reference integer precision: the 8-bit conversions
/// are defined by rescaling this one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
pub struct Hsva16 {
    pub h: u16,
    pub s: u16,
    pub v: u16,
    pub a: u16,
}

/// A non-premultiplied HSV color with alpha, one `f64` per channel.
///
/// Hue is measured in degrees, canonically `[0, 360)`; saturation, value,
/// and alpha lie in `[0, 1]`. Conversion to RGBA tolerates out-of-range
/// channels by wrapping the hue modulo 360 and clamping the rest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct HsvaF64 {
    pub h: f64,
    pub s: f64,
    pub v: f64,
    pub a: f64,
}

/// Narrow a 16-bit channel to 8 bits, rounding to nearest.
#[inline]
fn q8(n: u16) -> u8 {
    ((u32::from(n) * 255 + 32768) / 65535) as u8
}

/// The textbook HSV sector formula over normalized real channels.
///
/// Expects `h` in `[0, 360]` degrees and `s`, `v`, `a` in `[0, 1]`; the
/// callers normalize before handing values in. The closed upper bound
/// matters: an integer hue at the channel maximum scales to exactly 360,
/// one ulp short of wrapping. Returns the premultiplied result quantized
/// to the 16-bit interchange range.
fn sector_rgba64(h: f64, s: f64, v: f64, a: f64) -> Rgba64 {
    debug_assert!((0.0..=360.0).contains(&h), "hue not normalized: {}", h);

    let c = v * s;
    let h6 = h / 60.0;
    let x = c * (1.0 - math::fabs(math::fmod(h6, 2.0) - 1.0));

    let (r, g, b) = match h6 as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        // At `h6 == 6.0` exactly, `x` is zero and the last sector closes
        // back onto red, so the full turn shares this arm.
        5 | 6 => (c, 0.0, x),
        // Ending up here means the normalization above is broken; a
        // silently substituted color would corrupt image data, so fail
        // loudly instead.
        _ => unreachable!("hue sector out of range"),
    };

    let m = v - c;
    let quant = |channel: f64| ((channel + m) * a * 65535.0) as u16;
    Rgba64 {
        r: quant(r),
        g: quant(g),
        b: quant(b),
        a: (a * 65535.0) as u16,
    }
}

impl Hsva16 {
    /// Decompose a premultiplied RGBA color into HSV channels.
    ///
    /// A fully transparent input collapses to the zero value; no hue or
    /// saturation survives the round trip through alpha zero.
    pub fn from_rgba64(p: Rgba64) -> Self {
        if p.a == 0 {
            return Hsva16::default();
        }

        // Un-premultiply at 16-bit scale. All products stay below 2^32.
        let a = u32::from(p.a);
        let r = u32::from(p.r) * 65535 / a;
        let g = u32::from(p.g) * 65535 / a;
        let b = u32::from(p.b) * 65535 / a;

        let c_max = r.max(g).max(b);
        let c_min = r.min(g).min(b);
        let delta = c_max - c_min;

        let v = c_max as u16;
        let s = if c_max > 0 {
            (65535 * delta / c_max) as u16
        } else {
            0
        };

        if delta == 0 {
            // Gray plus alpha. Hue is undefined and the sector formula
            // below would divide by zero.
            return Hsva16 { h: 0, s: 0, v, a: p.a };
        }

        let (ri, gi, bi) = (r as i32, g as i32, b as i32);
        let di = delta as i32;
        let h360 = if c_max == r {
            60 * (gi - bi) / di
        } else if c_max == g {
            60 * (bi - ri) / di + 120
        } else {
            60 * (ri - gi) / di + 240
        };
        // Make positive, then rescale [0, 360) onto the channel range.
        let h360 = (h360 + 360) % 360;
        let h = ((h360 * 65535 + 180) / 360) as u16;

        Hsva16 { h, s, v, a: p.a }
    }
}

impl Hsva8 {
    /// Decompose a premultiplied RGBA color into HSV channels.
    ///
    /// Defined as the 16-bit decomposition rescaled to 8 bits, so both
    /// integer precisions quantize the same geometry.
    pub fn from_rgba64(p: Rgba64) -> Self {
        Hsva16::from_rgba64(p).into()
    }
}

impl HsvaF64 {
    /// Decompose a premultiplied RGBA color into HSV channels.
    pub fn from_rgba64(p: Rgba64) -> Self {
        if p.a == 0 {
            return HsvaF64::default();
        }

        let a = f64::from(p.a) / 65535.0;
        let r = f64::from(p.r) / 65535.0 / a;
        let g = f64::from(p.g) / 65535.0 / a;
        let b = f64::from(p.b) / 65535.0 / a;

        let c_max = r.max(g).max(b);
        let c_min = r.min(g).min(b);
        let delta = c_max - c_min;

        let v = c_max;
        let s = if c_max > 0.0 { delta / c_max } else { 0.0 };

        if delta == 0.0 {
            return HsvaF64 { h: 0.0, s: 0.0, v, a };
        }

        let h = if c_max == r {
            (g - b) / delta
        } else if c_max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };
        let h = math::fmod(h * 60.0 + 360.0, 360.0);

        HsvaF64 { h, s, v, a }
    }
}

impl Color for Hsva8 {
    fn rgba64(&self) -> Rgba64 {
        let v16 = u32::from(self.v) * 0x101;
        let a16 = u32::from(self.a) * 0x101;
        if self.s == 0 {
            // Achromatic fast path. Round so that full value at full
            // alpha lands exactly on the channel maximum.
            let v = ((v16 * a16 + 32768) / 65535) as u16;
            return Rgba64 { r: v, g: v, b: v, a: a16 as u16 };
        }

        sector_rgba64(
            f64::from(self.h) * 360.0 / 255.0,
            f64::from(self.s) / 255.0,
            f64::from(self.v) / 255.0,
            f64::from(self.a) / 255.0,
        )
    }
}

impl Color for Hsva16 {
    fn rgba64(&self) -> Rgba64 {
        let a16 = u32::from(self.a);
        if self.s == 0 {
            let v = ((u32::from(self.v) * a16 + 32768) / 65535) as u16;
            return Rgba64 { r: v, g: v, b: v, a: self.a };
        }

        sector_rgba64(
            f64::from(self.h) * 360.0 / 65535.0,
            f64::from(self.s) / 65535.0,
            f64::from(self.v) / 65535.0,
            f64::from(self.a) / 65535.0,
        )
    }
}

impl Color for HsvaF64 {
    fn rgba64(&self) -> Rgba64 {
        // Force the channels into their domains: wraparound for hue,
        // clamping for everything else.
        let h = math::fmod(math::fmod(self.h, 360.0) + 360.0, 360.0);
        let s = self.s.clamp(0.0, 1.0);
        let v = self.v.clamp(0.0, 1.0);
        let a = self.a.clamp(0.0, 1.0);

        if s == 0.0 {
            let vq = (v * a * 65535.0) as u16;
            return Rgba64 {
                r: vq,
                g: vq,
                b: vq,
                a: (a * 65535.0) as u16,
            };
        }

        sector_rgba64(h, s, v, a)
    }
}

impl FromColor for Hsva8 {
    fn from_color<C: Color>(color: &C) -> Self {
        Self::from_rgba64(color.rgba64())
    }
}

impl FromColor for Hsva16 {
    fn from_color<C: Color>(color: &C) -> Self {
        Self::from_rgba64(color.rgba64())
    }
}

impl FromColor for HsvaF64 {
    fn from_color<C: Color>(color: &C) -> Self {
        Self::from_rgba64(color.rgba64())
    }
}

impl From<Hsva16> for Hsva8 {
    fn from(c: Hsva16) -> Self {
        Hsva8 {
            h: q8(c.h),
            s: q8(c.s),
            v: q8(c.v),
            a: q8(c.a),
        }
    }
}

impl From<Hsva8> for Hsva16 {
    fn from(c: Hsva8) -> Self {
        Hsva16 {
            h: u16::from(c.h) * 0x101,
            s: u16::from(c.s) * 0x101,
            v: u16::from(c.v) * 0x101,
            a: u16::from(c.a) * 0x101,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray64(v: u16, a: u16) -> Rgba64 {
        let pm = ((u32::from(v) * u32::from(a) + 32768) / 65535) as u16;
        Rgba64 { r: pm, g: pm, b: pm, a }
    }

    #[track_caller]
    fn assert_close(lhs: Rgba64, rhs: Rgba64, tolerance: u16) {
        for (l, r) in [
            (lhs.r, rhs.r),
            (lhs.g, rhs.g),
            (lhs.b, rhs.b),
            (lhs.a, rhs.a),
        ] {
            assert!(
                l.abs_diff(r) <= tolerance,
                "{:?} and {:?} differ by more than {}",
                lhs,
                rhs,
                tolerance
            );
        }
    }

    #[test]
    fn gray_to_rgba_is_exact() {
        for v in 0..=255u8 {
            let hsv = Hsva8 { h: 0, s: 0, v, a: 255 };
            let expect = u16::from(v) * 0x101;
            assert_eq!(
                hsv.rgba64(),
                Rgba64 { r: expect, g: expect, b: expect, a: 0xffff },
                "at value {}",
                v
            );
        }
    }

    #[test]
    fn gray_to_rgba_premultiplies() {
        for a in (0..=255u8).step_by(15) {
            for v in (0..=255u8).step_by(15) {
                let got = Hsva8 { h: 0, s: 0, v, a }.rgba64();
                let expect = gray64(u16::from(v) * 0x101, u16::from(a) * 0x101);
                assert_eq!(got, expect, "at value {} alpha {}", v, a);
            }
        }
    }

    #[test]
    fn gray_round_trip_is_exact() {
        for v in 0..=255u8 {
            let hsv = Hsva8::from_rgba64(gray64(u16::from(v) * 0x101, 0xffff));
            assert_eq!(hsv, Hsva8 { h: 0, s: 0, v, a: 255 }, "at value {}", v);
        }

        for v in [0u16, 1, 0xff, 0x100, 0x8000, 0xfffe, 0xffff] {
            let hsv = Hsva16::from_rgba64(gray64(v, 0xffff));
            assert_eq!(hsv, Hsva16 { h: 0, s: 0, v, a: 0xffff }, "at value {}", v);
            assert_eq!(hsv.rgba64(), gray64(v, 0xffff), "back at value {}", v);
        }
    }

    #[test]
    fn transparent_collapses_to_zero() {
        // A premultiplied color with alpha zero has zero r, g, b as well,
        // but decomposition must not rely on that.
        let ghost = Rgba64 { r: 17, g: 4, b: 200, a: 0 };
        assert_eq!(Hsva8::from_rgba64(ghost), Hsva8::default());
        assert_eq!(Hsva16::from_rgba64(ghost), Hsva16::default());
        assert_eq!(HsvaF64::from_rgba64(ghost), HsvaF64::default());

        assert_eq!(Hsva8::default().rgba64(), Rgba64::default());
        assert_eq!(Hsva16::default().rgba64(), Rgba64::default());
        assert_eq!(HsvaF64::default().rgba64(), Rgba64::default());
    }

    #[test]
    fn named_colors_decompose() {
        let cases = [
            // (premultiplied rgba at 8 bit, expected hsva at 8 bit)
            ([0, 0, 0, 255], Hsva8 { h: 0, s: 0, v: 0, a: 255 }),
            ([255, 255, 255, 255], Hsva8 { h: 0, s: 0, v: 255, a: 255 }),
            ([255, 0, 0, 255], Hsva8 { h: 0, s: 255, v: 255, a: 255 }),
            ([0, 255, 0, 255], Hsva8 { h: 85, s: 255, v: 255, a: 255 }),
            ([0, 0, 255, 255], Hsva8 { h: 170, s: 255, v: 255, a: 255 }),
            ([0, 0, 128, 255], Hsva8 { h: 170, s: 255, v: 128, a: 255 }),
        ];

        for ([r, g, b, a], expect) in cases {
            let rgba = Rgba64 {
                r: r * 0x101,
                g: g * 0x101,
                b: b * 0x101,
                a: a * 0x101,
            };
            assert_eq!(Hsva8::from_rgba64(rgba), expect, "from {:?}", rgba);
        }
    }

    #[test]
    fn named_colors_compose() {
        let cases = [
            (Hsva8 { h: 0, s: 0, v: 0, a: 255 }, [0u16, 0, 0, 255]),
            (Hsva8 { h: 0, s: 0, v: 255, a: 255 }, [255, 255, 255, 255]),
            (Hsva8 { h: 0, s: 255, v: 255, a: 255 }, [255, 0, 0, 255]),
            (Hsva8 { h: 85, s: 255, v: 255, a: 255 }, [0, 255, 0, 255]),
            (Hsva8 { h: 170, s: 255, v: 255, a: 255 }, [0, 0, 255, 255]),
            (Hsva8 { h: 170, s: 255, v: 128, a: 255 }, [0, 0, 128, 255]),
        ];

        for (hsv, [r, g, b, a]) in cases {
            let expect = Rgba64 {
                r: r * 0x101,
                g: g * 0x101,
                b: b * 0x101,
                a: a * 0x101,
            };
            assert_eq!(hsv.rgba64(), expect, "from {:?}", hsv);
        }
    }

    #[test]
    fn max_hue_closes_the_circle() {
        // The hue maximum sits one quantum below a full turn; composing
        // it must land back on red instead of falling off the sector
        // table.
        let red = Rgba64 { r: 0xffff, g: 0, b: 0, a: 0xffff };
        assert_eq!(Hsva8 { h: 255, s: 255, v: 255, a: 255 }.rgba64(), red);
        assert_eq!(
            Hsva16 { h: 0xffff, s: 0xffff, v: 0xffff, a: 0xffff }.rgba64(),
            red
        );
    }

    #[test]
    fn sector_boundaries_agree_across_precisions() {
        // Hues straddling each 60 degree sector edge, plus the channel
        // maximum where the float path wraps to zero and the integer
        // paths do not.
        for h in [42u8, 43, 85, 127, 128, 170, 212, 213, 255] {
            let c8 = Hsva8 { h, s: 255, v: 255, a: 255 };
            let c16 = Hsva16::from(c8);
            let cf = HsvaF64 {
                h: f64::from(h) * 360.0 / 255.0,
                s: 1.0,
                v: 1.0,
                a: 1.0,
            };

            assert_close(c8.rgba64(), cf.rgba64(), 2);
            assert_close(c16.rgba64(), cf.rgba64(), 2);
        }
    }

    #[test]
    fn yellow_ties_resolve_towards_red() {
        // Red and green share the maximum; the red sector formula wins,
        // which puts yellow at 60 degrees exactly.
        let rgba = Rgba64 { r: 0xffff, g: 0xffff, b: 0, a: 0xffff };
        let hsv = HsvaF64::from_rgba64(rgba);
        assert_eq!(hsv.h, 60.0);
        assert_eq!(hsv.s, 1.0);
        assert_eq!(hsv.v, 1.0);
    }

    #[test]
    fn float_hue_wraps_and_channels_clamp() {
        let base = HsvaF64 { h: 240.0, s: 1.0, v: 1.0, a: 1.0 };
        let wrapped = HsvaF64 { h: -120.0, s: 1.0, v: 1.0, a: 1.0 };
        let spun = HsvaF64 { h: 240.0 + 720.0, s: 1.0, v: 1.0, a: 1.0 };
        assert_eq!(base.rgba64(), wrapped.rgba64());
        assert_eq!(base.rgba64(), spun.rgba64());

        let loud = HsvaF64 { h: 240.0, s: 1.5, v: 2.0, a: 7.0 };
        assert_eq!(base.rgba64(), loud.rgba64());
    }

    #[test]
    fn precisions_agree() {
        let cases: [[u8; 4]; 8] = [
            [0, 0, 0, 0],
            [0, 0, 255, 255],
            [12, 255, 255, 255],
            [85, 200, 90, 128],
            [170, 255, 128, 255],
            [200, 30, 220, 64],
            [255, 255, 255, 255],
            [254, 1, 254, 3],
        ];

        for [h, s, v, a] in cases {
            let c8 = Hsva8 { h, s, v, a };
            let c16 = Hsva16::from(c8);
            let cf = HsvaF64 {
                h: f64::from(h) * 360.0 / 255.0,
                s: f64::from(s) / 255.0,
                v: f64::from(v) / 255.0,
                a: f64::from(a) / 255.0,
            };

            // The integer paths are quantizations of the float path, so
            // a couple of representable units cover the rounding slack.
            assert_close(c8.rgba64(), cf.rgba64(), 2);
            assert_close(c16.rgba64(), cf.rgba64(), 2);
        }
    }

    #[test]
    fn widening_and_narrowing_are_inverse() {
        for n in 0..=255u8 {
            let wide = Hsva16::from(Hsva8 { h: n, s: n, v: n, a: n });
            assert_eq!(Hsva8::from(wide), Hsva8 { h: n, s: n, v: n, a: n });
        }
    }
}
