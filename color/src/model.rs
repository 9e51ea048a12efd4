use crate::hsv::{Hsva16, Hsva8, HsvaF64};
use crate::rgba::{Color, FromColor, Rgba64};

/// Selects one of the supported HSV channel precisions.
///
/// This is the explicit dispatch table standing in for a runtime model
/// registry: each variant knows how to absorb an arbitrary [`Color`] into
/// its representation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HsvModel {
    /// 8 bits per channel, [`Hsva8`].
    U8,
    /// 16 bits per channel, [`Hsva16`].
    U16,
    /// One `f64` per channel, [`HsvaF64`].
    F64,
}

/// An HSV+alpha color at any of the supported precisions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Hsva {
    U8(Hsva8),
    U16(Hsva16),
    F64(HsvaF64),
}

impl HsvModel {
    /// Convert an arbitrary color into this precision.
    pub fn convert<C: Color>(self, color: &C) -> Hsva {
        match self {
            HsvModel::U8 => Hsva::U8(Hsva8::from_color(color)),
            HsvModel::U16 => Hsva::U16(Hsva16::from_color(color)),
            HsvModel::F64 => Hsva::F64(HsvaF64::from_color(color)),
        }
    }
}

impl Hsva {
    /// The precision this color is stored at.
    pub fn model(&self) -> HsvModel {
        match self {
            Hsva::U8(_) => HsvModel::U8,
            Hsva::U16(_) => HsvModel::U16,
            Hsva::F64(_) => HsvModel::F64,
        }
    }

    /// Re-express the color at another precision.
    ///
    /// A color already stored at the requested precision is returned
    /// unchanged; in particular it does not round-trip through the
    /// premultiplied form.
    pub fn into_model(self, model: HsvModel) -> Hsva {
        if self.model() == model {
            self
        } else {
            model.convert(&self)
        }
    }
}

impl Color for Hsva {
    fn rgba64(&self) -> Rgba64 {
        match self {
            Hsva::U8(c) => c.rgba64(),
            Hsva::U16(c) => c.rgba64(),
            Hsva::F64(c) => c.rgba64(),
        }
    }
}

impl From<Hsva8> for Hsva {
    fn from(c: Hsva8) -> Self {
        Hsva::U8(c)
    }
}

impl From<Hsva16> for Hsva {
    fn from(c: Hsva16) -> Self {
        Hsva::U16(c)
    }
}

impl From<HsvaF64> for Hsva {
    fn from(c: HsvaF64) -> Self {
        Hsva::F64(c)
    }
}
