// Distributed under The MIT License (MIT)
//! The pixel buffer and its shared sub-image model.
//!
//! A buffer owns (a share of) one flat allocation of channel samples. The
//! pixel at `(x, y)` inside the bounding rectangle starts at sample
//! `offset + (y - min_y) * stride + (x - min_x) * 4`. Sub-images point
//! into the same allocation with an adjusted offset and the parent's
//! stride, so a sub-image's rows are generally not contiguous.
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::Cell;
use core::fmt;

use hsv_color::{Color, FromColor, Hsva16, Hsva8, HsvaF64, Rgba64};

use crate::pixel::Pixel;
use crate::rect::Rect;

/// Samples per pixel: one each for hue, saturation, value, alpha.
const CHANNELS: usize = 4;

/// Error that occurs when constructing a pixmap.
///
/// Raised when a rectangle describes more samples than can be addressed in
/// memory, or when initial contents do not match the rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutError {
    inner: (),
}

impl LayoutError {
    const BAD: Self = LayoutError { inner: () };
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid pixmap layout")
    }
}

/// A rectangular buffer of HSV+alpha pixels with shared storage.
///
/// Cloning, and [`Pixmap::sub_image`], yield aliasing handles onto the
/// same sample allocation; a write through one handle is visible through
/// every other. The sharing is unsynchronized which keeps the type
/// `!Sync` — partition buffers into disjoint copies before threading.
///
/// Reads outside the bounding rectangle return the transparent zero
/// pixel and writes outside of it are dropped.
#[derive(Clone)]
pub struct Pixmap<P: Pixel> {
    pix: Rc<[Cell<P::Sample>]>,
    offset: usize,
    stride: usize,
    rect: Rect,
}

/// An 8-bit-per-channel HSV+alpha buffer.
pub type Pixmap8 = Pixmap<Hsva8>;
/// A 16-bit-per-channel HSV+alpha buffer.
pub type Pixmap16 = Pixmap<Hsva16>;
/// An `f64`-per-channel HSV+alpha buffer.
pub type PixmapF64 = Pixmap<HsvaF64>;

/// The number of samples a rectangle requires, or an error if that count
/// overflows the address space.
fn sample_len(rect: &Rect) -> Result<usize, LayoutError> {
    (rect.width() as usize)
        .checked_mul(rect.height() as usize)
        .and_then(|pixels| pixels.checked_mul(CHANNELS))
        .ok_or(LayoutError::BAD)
}

impl<P: Pixel> Pixmap<P> {
    /// Allocate a buffer for the given bounds, fully transparent.
    ///
    /// All samples start out zeroed, which is the canonical transparent
    /// black at every precision.
    pub fn new(rect: Rect) -> Result<Self, LayoutError> {
        let len = sample_len(&rect)?;
        let pix: Vec<_> = alloc::vec![Cell::new(P::Sample::default()); len];
        Ok(Pixmap {
            pix: pix.into(),
            offset: 0,
            stride: CHANNELS * rect.width() as usize,
            rect,
        })
    }

    /// Build a buffer from tightly packed samples in H, S, V, A order.
    ///
    /// The slice length must be exactly four samples per pixel of `rect`.
    pub fn with_samples(rect: Rect, samples: &[P::Sample]) -> Result<Self, LayoutError> {
        if samples.len() != sample_len(&rect)? {
            return Err(LayoutError::BAD);
        }
        let pix: Vec<_> = samples.iter().copied().map(Cell::new).collect();
        Ok(Pixmap {
            pix: pix.into(),
            offset: 0,
            stride: CHANNELS * rect.width() as usize,
            rect,
        })
    }

    /// Build a buffer by reinterpreting raw bytes as channel samples.
    ///
    /// Fails when the bytes are not aligned to the sample type or do not
    /// divide into exactly four samples per pixel of `rect`.
    pub fn with_bytes(rect: Rect, bytes: &[u8]) -> Result<Self, LayoutError> {
        let samples = bytemuck::try_cast_slice(bytes).map_err(|_| LayoutError::BAD)?;
        Self::with_samples(rect, samples)
    }

    /// The bounding rectangle.
    pub fn bounds(&self) -> Rect {
        self.rect
    }

    /// The sample count between vertically adjacent pixels.
    ///
    /// Equals four times the width for a freshly allocated buffer; a
    /// sub-image keeps its parent's, larger, stride.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// First sample of the pixel at `(x, y)`, which must be in bounds.
    fn sample_offset(&self, x: i32, y: i32) -> usize {
        debug_assert!(self.rect.contains(x, y));
        let dx = x.wrapping_sub(self.rect.min_x) as usize;
        let dy = y.wrapping_sub(self.rect.min_y) as usize;
        self.offset + dy * self.stride + dx * CHANNELS
    }

    /// The pixel at `(x, y)` in its native representation.
    ///
    /// Out-of-bounds coordinates read as the transparent zero pixel.
    pub fn pixel(&self, x: i32, y: i32) -> P {
        if !self.rect.contains(x, y) {
            return P::default();
        }
        let i = self.sample_offset(x, y);
        P::from_samples([
            self.pix[i].get(),
            self.pix[i + 1].get(),
            self.pix[i + 2].get(),
            self.pix[i + 3].get(),
        ])
    }

    /// Write a pixel in its native representation, no conversion involved.
    ///
    /// Out-of-bounds coordinates are silently dropped.
    pub fn set_pixel(&self, x: i32, y: i32, pixel: P) {
        if !self.rect.contains(x, y) {
            return;
        }
        let i = self.sample_offset(x, y);
        for (cell, sample) in self.pix[i..i + CHANNELS].iter().zip(pixel.into_samples()) {
            cell.set(sample);
        }
    }

    /// Convert an arbitrary color to the native precision and write it.
    pub fn set_color<C: Color>(&self, x: i32, y: i32, color: &C) {
        if !self.rect.contains(x, y) {
            return;
        }
        self.set_pixel(x, y, P::from_color(color));
    }

    /// The premultiplied RGBA color at `(x, y)`.
    pub fn color_at(&self, x: i32, y: i32) -> Rgba64 {
        self.pixel(x, y).rgba64()
    }

    /// A view of the portion of the buffer visible through `rect`.
    ///
    /// The view shares samples with `self`: writes through either handle
    /// are observable through the other at the same absolute coordinates.
    pub fn sub_image(&self, rect: Rect) -> Self {
        let rect = self.rect.intersect(&rect);
        // An empty intersection owns no storage at all. Its corner need
        // not lie inside the parent, so computing a sample offset from it
        // could index past the allocation.
        if rect.is_empty() {
            return Pixmap {
                pix: Vec::new().into(),
                offset: 0,
                stride: 0,
                rect: Rect::default(),
            };
        }
        Pixmap {
            pix: Rc::clone(&self.pix),
            offset: self.sample_offset(rect.min_x, rect.min_y),
            stride: self.stride,
            rect,
        }
    }

    /// Scan the whole buffer and report whether it is fully opaque.
    ///
    /// An empty buffer is vacuously opaque.
    pub fn is_opaque(&self) -> bool {
        let width = self.rect.width() as usize;
        let mut row = self.offset;
        for _ in 0..self.rect.height() {
            for px in 0..width {
                if self.pix[row + px * CHANNELS + 3].get() != P::OPAQUE {
                    return false;
                }
            }
            row += self.stride;
        }
        true
    }

    /// Whether two handles share one backing allocation.
    pub fn aliases(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.pix, &other.pix)
    }

    /// Copy the visible rectangle out into tightly packed samples.
    ///
    /// The result is row-major with four samples per pixel, suitable for
    /// [`Pixmap::with_samples`] with the same bounds.
    pub fn to_samples(&self) -> Vec<P::Sample> {
        let row_len = self.rect.width() as usize * CHANNELS;
        let mut out = Vec::with_capacity(row_len * self.rect.height() as usize);
        let mut row = self.offset;
        for _ in 0..self.rect.height() {
            out.extend(self.pix[row..row + row_len].iter().map(Cell::get));
            row += self.stride;
        }
        out
    }
}

impl<P: Pixel> fmt::Debug for Pixmap<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pixmap")
            .field("rect", &self.rect)
            .field("stride", &self.stride)
            .finish_non_exhaustive()
    }
}

/// The access contract shared by all pixmap precisions.
///
/// Generic image-processing code can speak to any buffer through this:
/// bounds, point-wise access in the native pixel representation, and
/// sub-rectangle views that also satisfy the contract. The provided
/// methods add color-generic access routed through the conversions in
/// `hsv-color`.
pub trait Image {
    /// The native pixel representation of this image.
    type Pixel: Color + FromColor + Copy;

    /// The bounding rectangle.
    fn bounds(&self) -> Rect;

    /// The pixel at `(x, y)`; the zero pixel if out of bounds.
    fn pixel(&self, x: i32, y: i32) -> Self::Pixel;

    /// Write a native pixel; dropped if out of bounds.
    fn set_pixel(&self, x: i32, y: i32, pixel: Self::Pixel);

    /// A shared view of the part of this image visible through `rect`.
    fn sub_image(&self, rect: Rect) -> Self
    where
        Self: Sized;

    /// The premultiplied RGBA color at `(x, y)`.
    fn color_at(&self, x: i32, y: i32) -> Rgba64 {
        self.pixel(x, y).rgba64()
    }

    /// Convert an arbitrary color to the native precision and write it.
    fn set_color<C: Color>(&self, x: i32, y: i32, color: &C)
    where
        Self: Sized,
    {
        self.set_pixel(x, y, Self::Pixel::from_color(color));
    }
}

impl<P: Pixel> Image for Pixmap<P> {
    type Pixel = P;

    fn bounds(&self) -> Rect {
        Pixmap::bounds(self)
    }

    fn pixel(&self, x: i32, y: i32) -> P {
        Pixmap::pixel(self, x, y)
    }

    fn set_pixel(&self, x: i32, y: i32, pixel: P) {
        Pixmap::set_pixel(self, x, y, pixel)
    }

    fn sub_image(&self, rect: Rect) -> Self {
        Pixmap::sub_image(self, rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_follow_the_stride() {
        let map = Pixmap8::new(Rect::new(2, 3, 12, 13)).unwrap();
        assert_eq!(map.stride(), 40);
        assert_eq!(map.sample_offset(2, 3), 0);
        assert_eq!(map.sample_offset(3, 3), 4);
        assert_eq!(map.sample_offset(2, 4), 40);
        assert_eq!(map.sample_offset(11, 12), 9 * 40 + 9 * 4);
    }

    #[test]
    fn mismatched_contents_are_an_error() {
        let err = Pixmap8::with_samples(Rect::from_size(2, 2), &[0u8; 15]).unwrap_err();
        assert_eq!(err, LayoutError::BAD);
        assert_eq!(alloc::format!("{}", err), "invalid pixmap layout");
    }
}
