/// A half-open rectangle on the integer pixel grid.
///
/// Contains the points `(x, y)` with `min_x <= x < max_x` and
/// `min_y <= y < max_y`. Any rectangle with `min >= max` on either axis is
/// empty; the all-zero rectangle is the canonical empty value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl Rect {
    /// A rectangle from its corner coordinates.
    pub const fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Rect { min_x, min_y, max_x, max_y }
    }

    /// A rectangle of the given size with its minimum corner at the origin.
    pub const fn from_size(width: u32, height: u32) -> Self {
        Rect {
            min_x: 0,
            min_y: 0,
            max_x: width as i32,
            max_y: height as i32,
        }
    }

    /// The number of pixels along the x axis.
    pub fn width(&self) -> u32 {
        if self.max_x > self.min_x {
            self.max_x.wrapping_sub(self.min_x) as u32
        } else {
            0
        }
    }

    /// The number of pixels along the y axis.
    pub fn height(&self) -> u32 {
        if self.max_y > self.min_y {
            self.max_y.wrapping_sub(self.min_y) as u32
        } else {
            0
        }
    }

    /// Whether the rectangle contains no pixels.
    pub fn is_empty(&self) -> bool {
        self.min_x >= self.max_x || self.min_y >= self.max_y
    }

    /// Whether the point `(x, y)` lies inside the rectangle.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.min_x <= x && x < self.max_x && self.min_y <= y && y < self.max_y
    }

    /// The largest rectangle contained in both `self` and `other`.
    ///
    /// A raw corner-wise intersection of disjoint rectangles yields min
    /// and max coordinates that lie in neither input; those are normalized
    /// to the canonical empty rectangle so callers never observe them.
    pub fn intersect(&self, other: &Rect) -> Rect {
        let candidate = Rect {
            min_x: self.min_x.max(other.min_x),
            min_y: self.min_y.max(other.min_y),
            max_x: self.max_x.min(other.max_x),
            max_y: self.max_y.min(other.max_y),
        };
        if candidate.is_empty() {
            Rect::default()
        } else {
            candidate
        }
    }
}
