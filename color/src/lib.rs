//! Non-premultiplied HSV color types with alpha.
//!
//! The color types here store hue, saturation, value, and an alpha channel
//! that has *not* been multiplied into the other three. Three channel
//! precisions are available: [`Hsva8`], [`Hsva16`], and [`HsvaF64`]. The
//! integer types scale hue linearly over the whole channel range, so `255`
//! (respectively `65535`) sits just below 360 degrees. The float type keeps
//! hue in conventional degrees.
//!
//! All of them interchange with the rest of an image pipeline through
//! [`Rgba64`], an alpha-premultiplied RGBA value at 16 bits per channel.
//!
//! # Usage
//!
//! Turning a premultiplied RGBA sample into HSV and back:
//!
//! ```
//! use hsv_color::{Color, FromColor, Hsva8, Rgba64};
//!
//! let red = Rgba64 { r: 0xffff, g: 0, b: 0, a: 0xffff };
//! let hsv = Hsva8::from_color(&red);
//! assert_eq!(hsv, Hsva8 { h: 0, s: 255, v: 255, a: 255 });
//! assert_eq!(hsv.rgba64(), red);
//! ```
//!
//! Choosing a precision at runtime goes through the [`HsvModel`] table:
//!
//! ```
//! use hsv_color::{Hsva, HsvModel, Rgba64};
//!
//! let gray = Rgba64 { r: 0x8080, g: 0x8080, b: 0x8080, a: 0xffff };
//! match HsvModel::U16.convert(&gray) {
//!     Hsva::U16(c) => assert_eq!(c.s, 0),
//!     _ => unreachable!(),
//! }
//! ```
#![no_std]
// Deny, not forbid: the `bytemuck` derives expand to unsafe impls on our
// behalf, everything hand-written stays safe.
#![deny(unsafe_code)]

/// The three HSV+alpha representations and their conversion math.
mod hsv;
mod math;
/// Precision dispatch over the HSV types.
mod model;
/// The premultiplied interchange type and the color capability traits.
mod rgba;

pub use self::hsv::{Hsva16, Hsva8, HsvaF64};
pub use self::model::{Hsva, HsvModel};
pub use self::rgba::{Color, FromColor, Rgba64};
