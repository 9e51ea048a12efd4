use bytemuck::{Pod, Zeroable};

/// An alpha-premultiplied RGBA color at 16 bits per channel.
///
/// This is the canonical interchange representation: every color type in the
/// pipeline can produce one, regardless of its own channel precision. The
/// red, green, and blue channels have already been scaled by the alpha
/// fraction, so a half-transparent white is `{0x8000, 0x8000, 0x8000,
/// 0x8000}` and the all-zero value is fully transparent black.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
pub struct Rgba64 {
    pub r: u16,
    pub g: u16,
    pub b: u16,
    pub a: u16,
}

/// A color that can present itself as premultiplied 16-bit RGBA.
///
/// This is the capability through which conversions absorb colors of
/// arbitrary concrete type. Implementations must premultiply: the returned
/// `r`, `g`, and `b` never exceed the returned `a`.
pub trait Color {
    /// The premultiplied RGBA equivalent of this color.
    fn rgba64(&self) -> Rgba64;
}

/// A color representation that can be produced from any [`Color`].
///
/// Converting through this trait goes by way of [`Color::rgba64`]. Callers
/// that already hold a value of the target type should use it directly
/// instead of funneling it through the premultiplied form, which would
/// re-quantize the channels. [`crate::Hsva::into_model`] does exactly that
/// for the dynamically chosen precisions.
pub trait FromColor: Sized {
    /// Convert an arbitrary color into this representation.
    fn from_color<C: Color>(color: &C) -> Self;
}

impl Color for Rgba64 {
    fn rgba64(&self) -> Rgba64 {
        *self
    }
}

impl FromColor for Rgba64 {
    fn from_color<C: Color>(color: &C) -> Self {
        color.rgba64()
    }
}
