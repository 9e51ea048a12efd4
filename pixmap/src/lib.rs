// Distributed under The MIT License (MIT)
//! In-memory HSV+alpha pixel buffers.
//!
//! A [`Pixmap`] is a rectangular buffer of HSV+alpha pixels at one of three
//! channel precisions, stored as a flat sequence of channel samples. The
//! backing allocation is shared: [`Pixmap::sub_image`] returns a new handle
//! onto the *same* samples, restricted to a smaller rectangle, and writes
//! through any handle are visible through all of them. Sharing is
//! unsynchronized (`Cell`-based), which also makes the handles `!Sync`;
//! cross-thread mutation is ruled out by the type system rather than by
//! locks.
//!
//! Pixel access follows the permissive image contract: reads outside the
//! bounds return the fully transparent zero color and writes outside the
//! bounds are silently dropped. Neither is an error.
//!
//! # Usage
//!
//! ```
//! use hsv_color::Hsva8;
//! use hsv_pixmap::{Pixmap8, Rect};
//!
//! let pix = Pixmap8::new(Rect::from_size(10, 10))?;
//! pix.set_pixel(6, 3, Hsva8 { h: 85, s: 255, v: 255, a: 255 });
//!
//! let view = pix.sub_image(Rect::new(3, 2, 9, 8));
//! assert_eq!(view.pixel(6, 3).h, 85);
//! # Ok::<(), hsv_pixmap::LayoutError>(())
//! ```
#![no_std]
#![forbid(unsafe_code)]
extern crate alloc;

/// The sample-storage contract tying HSV colors to flat channels.
mod pixel;
/// The buffer type and the generic image contract.
mod pixmap;
mod rect;

pub use self::pixel::Pixel;
pub use self::pixmap::{Image, LayoutError, Pixmap, Pixmap16, Pixmap8, PixmapF64};
pub use self::rect::Rect;
