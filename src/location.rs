use serde::{Deserialize, Serialize};

/// A screen coordinate, in whatever units the token producer measured in (usually pixels).
pub type Coord = f64;

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
/// A point `(x, y)` on screen. The top left corner is `Point(0.0, 0.0)`.
pub struct Point(pub Coord, pub Coord);

impl Point {
    pub(crate) fn offset_to(self, other: Point) -> (Coord, Coord) {
        (other.0 - self.0, other.1 - self.1)
    }

    /// Straight-line distance to `other`.
    pub fn euclidean_to(self, other: Point) -> Coord {
        let (dx, dy) = self.offset_to(other);
        dx.hypot(dy)
    }

    /// Taxicab distance to `other`.
    pub fn manhattan_to(self, other: Point) -> Coord {
        let (dx, dy) = self.offset_to(other);
        dx.abs() + dy.abs()
    }
}

/// An axis-aligned bounding box, `(x0, y0)` being the top left and `(x1, y1)` the bottom right corner.
///
/// Well-formed boxes have `x0 <= x1` and `y0 <= y1`; see [`Self::is_well_formed`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge.
    pub x0: Coord,
    /// Top edge.
    pub y0: Coord,
    /// Right edge.
    pub x1: Coord,
    /// Bottom edge.
    pub y1: Coord,
}

impl BoundingBox {
    /// Construct a box from its two corners.
    pub fn new(x0: Coord, y0: Coord, x1: Coord, y1: Coord) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// A `size` by `size` square whose top left corner is `(x, y)`.
    pub fn square(x: Coord, y: Coord, size: Coord) -> Self {
        Self::new(x, y, x + size, y + size)
    }

    /// The midpoint of this box.
    pub fn center(&self) -> Point {
        Point((self.x0 + self.x1) / 2.0, (self.y0 + self.y1) / 2.0)
    }

    /// `x1 - x0`; negative for an inverted box.
    pub fn width(&self) -> Coord {
        self.x1 - self.x0
    }

    /// `y1 - y0`.
    pub fn height(&self) -> Coord {
        self.y1 - self.y0
    }

    pub(crate) fn is_finite(&self) -> bool {
        [self.x0, self.y0, self.x1, self.y1].iter().all(|c| c.is_finite())
    }

    /// Whether the corners are ordered, i.e. `x0 <= x1` and `y0 <= y1`.
    pub fn is_well_formed(&self) -> bool {
        self.x0 <= self.x1 && self.y0 <= self.y1
    }
}
