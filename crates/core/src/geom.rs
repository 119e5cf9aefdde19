//! Plain geometry types used throughout rendering. Everything lives in screen
//! space unless stated otherwise: the origin is the top-left corner, x grows
//! to the right and y grows downward.
//!
//! Integer rectangles follow the usual raster convention where a rect covers
//! whole pixels, so [Rect::right] and [Rect::bottom] are the *last* pixel
//! inside the rect, i.e. `x + width - 1`. Floating point rects ([RectF]) have
//! no such offset; their right edge is simply `x + width`.

use derive_more::{Add, AddAssign, Display, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};

/// An integer point. Depending on context this is either a pixel position
/// or a tile index in the hex lattice.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    Eq,
    Hash,
    Add,
    Sub,
    AddAssign,
    SubAssign,
    Neg,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", x, y)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Swap the two components. Handy when comparing stagger-X and stagger-Y
    /// layouts, which are transposes of each other.
    pub const fn transposed(self) -> Self {
        Self::new(self.y, self.x)
    }
}

/// A floating point position. Coordinate conversions take and return these,
/// even though the hex renderer never produces sub-tile precision.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    Add,
    Sub,
    AddAssign,
    SubAssign,
    Neg,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", x, y)]
pub struct PointF {
    pub x: f64,
    pub y: f64,
}

impl PointF {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Round both components to the nearest integer
    pub fn to_point(self) -> Point {
        Point::new(self.x.round() as i32, self.y.round() as i32)
    }
}

impl From<Point> for PointF {
    fn from(point: Point) -> Self {
        Self::new(point.x.into(), point.y.into())
    }
}

/// A width/height pair, in pixels
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[display(fmt = "{}x{}", width, height)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Swap width and height
    pub const fn transposed(self) -> Self {
        Self::new(self.height, self.width)
    }
}

/// An integer rectangle. See the module docs for the meaning of
/// [Self::right] and [Self::bottom].
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[display(fmt = "[{}, {} {}x{}]", x, y, width, height)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn left(&self) -> i32 {
        self.x
    }

    pub const fn top(&self) -> i32 {
        self.y
    }

    /// The last column of pixels covered by this rect
    pub const fn right(&self) -> i32 {
        self.x + self.width - 1
    }

    /// The last row of pixels covered by this rect
    pub const fn bottom(&self) -> i32 {
        self.y + self.height - 1
    }

    pub const fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// A null rect has zero width *and* zero height. This is different from
    /// [Self::is_empty], which is true if *either* dimension is non-positive.
    pub const fn is_null(&self) -> bool {
        self.width == 0 && self.height == 0
    }

    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Move each edge independently: `dx1`/`dy1` are added to the left/top
    /// edge, `dx2`/`dy2` to the right/bottom edge.
    pub const fn adjusted(
        &self,
        dx1: i32,
        dy1: i32,
        dx2: i32,
        dy2: i32,
    ) -> Self {
        Self::new(
            self.x + dx1,
            self.y + dy1,
            self.width + dx2 - dx1,
            self.height + dy2 - dy1,
        )
    }

    pub const fn contains(&self, point: Point) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    pub const fn transposed(&self) -> Self {
        Self::new(self.y, self.x, self.height, self.width)
    }
}

/// A floating point rectangle, mostly used for exposed (dirty) areas handed
/// to the draw routines.
#[derive(
    Copy, Clone, Debug, Default, Display, PartialEq, Serialize, Deserialize,
)]
#[display(fmt = "[{}, {} {}x{}]", x, y, width, height)]
pub struct RectF {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl RectF {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn is_null(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// The smallest integer rect that fully contains this one
    pub fn to_aligned_rect(&self) -> Rect {
        let left = self.x.floor() as i32;
        let top = self.y.floor() as i32;
        let right = self.right().ceil() as i32;
        let bottom = self.bottom().ceil() as i32;
        Rect::new(left, top, right - left, bottom - top)
    }

    /// Do these rects overlap with a positive area? A rect with a zero width
    /// or height never intersects anything, and rects that only share an
    /// edge don't count either.
    pub fn intersects(&self, other: &RectF) -> bool {
        fn span(start: f64, len: f64) -> (f64, f64) {
            if len < 0.0 {
                (start + len, start)
            } else {
                (start, start + len)
            }
        }

        let (l1, r1) = span(self.x, self.width);
        let (l2, r2) = span(other.x, other.width);
        if l1 == r1 || l2 == r2 || l1 >= r2 || l2 >= r1 {
            return false;
        }

        let (t1, b1) = span(self.y, self.height);
        let (t2, b2) = span(other.y, other.height);
        !(t1 == b1 || t2 == b2 || t1 >= b2 || t2 >= b1)
    }
}

impl From<Rect> for RectF {
    fn from(rect: Rect) -> Self {
        Self::new(
            rect.x.into(),
            rect.y.into(),
            rect.width.into(),
            rect.height.into(),
        )
    }
}

/// Extra space around a rect, one value per side
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub struct Margins {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Margins {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }
}

/// A straight line segment between two pixel positions
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash)]
#[display(fmt = "{} -> {}", p1, p2)]
pub struct Line {
    pub p1: Point,
    pub p2: Point,
}

impl Line {
    pub const fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    /// A line of zero length, i.e. both ends are the same point
    pub fn is_degenerate(&self) -> bool {
        self.p1 == self.p2
    }
}

/// A closed polygon. The last point implicitly connects back to the first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    points: Vec<PointF>,
}

impl Polygon {
    pub fn new(points: Vec<PointF>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[PointF] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The smallest rect containing every point. An empty polygon has an
    /// empty (default) bounding rect.
    pub fn bounding_rect(&self) -> RectF {
        let mut points = self.points.iter();
        let first = match points.next() {
            Some(first) => *first,
            None => return RectF::default(),
        };

        let (min, max) = points.fold((first, first), |(min, max), p| {
            (
                PointF::new(min.x.min(p.x), min.y.min(p.y)),
                PointF::new(max.x.max(p.x), max.y.max(p.y)),
            )
        });
        RectF::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(2, 3, 10, 5);
        assert_eq!(rect.right(), 11);
        assert_eq!(rect.bottom(), 7);
        assert!(rect.contains(Point::new(11, 7)));
        assert!(!rect.contains(Point::new(12, 7)));
        assert_eq!(rect.adjusted(-1, -2, 3, 4), Rect::new(1, 1, 14, 11));
    }

    #[test]
    fn test_null_vs_empty() {
        assert!(Rect::default().is_null());
        assert!(Rect::new(0, 0, 5, 0).is_empty());
        assert!(!Rect::new(0, 0, 5, 0).is_null());
    }

    #[test]
    fn test_aligned_rect() {
        let rect = RectF::new(-0.5, 1.25, 3.0, 2.0);
        assert_eq!(rect.to_aligned_rect(), Rect::new(-1, 1, 4, 3));
        assert_eq!(RectF::default().to_aligned_rect(), Rect::default());
    }

    #[test]
    fn test_intersects() {
        let a = RectF::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&RectF::new(5.0, 5.0, 10.0, 10.0)));
        // Touching edges don't count
        assert!(!a.intersects(&RectF::new(10.0, 0.0, 5.0, 5.0)));
        // Neither do flat rects
        assert!(!a.intersects(&RectF::new(2.0, 2.0, 0.0, 5.0)));
        // Negative sizes get normalized
        assert!(a.intersects(&RectF::new(12.0, 12.0, -5.0, -5.0)));
    }

    #[test]
    fn test_polygon_bounding_rect() {
        let polygon = Polygon::new(vec![
            PointF::new(1.0, 4.0),
            PointF::new(-2.0, 0.0),
            PointF::new(3.0, 1.0),
        ]);
        assert_eq!(polygon.bounding_rect(), RectF::new(-2.0, 0.0, 5.0, 4.0));
        assert_eq!(Polygon::default().bounding_rect(), RectF::default());
    }
}
