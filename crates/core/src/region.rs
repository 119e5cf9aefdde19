use crate::geom::{Point, Rect};
use fnv::FnvBuildHasher;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// An ORDERED set of tile points. Keeps insertion order so iteration is
/// deterministic, which matters for anything that ends up drawn.
pub type TilePointIndexSet = IndexSet<Point, FnvBuildHasher>;

/// A set of tiles described by a list of rectangles, in tile coordinates.
/// This is what a tile selection looks like. The rects may overlap; every
/// covered tile is still only yielded once by [Region::tiles].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Region {
    rects: Vec<Rect>,
}

impl Region {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rect to the region. Empty rects are dropped.
    pub fn add_rect(&mut self, rect: Rect) {
        if !rect.is_empty() {
            self.rects.push(rect);
        }
    }

    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    pub fn is_empty(&self) -> bool {
        self.rects.iter().all(Rect::is_empty)
    }

    pub fn contains(&self, point: Point) -> bool {
        self.rects.iter().any(|rect| rect.contains(point))
    }

    /// Every tile covered by the region, exactly once. Tiles come out in rect
    /// order, and row-major within each rect.
    pub fn tiles(&self) -> TilePointIndexSet {
        let mut tiles = TilePointIndexSet::default();
        for rect in &self.rects {
            for y in rect.top()..=rect.bottom() {
                for x in rect.left()..=rect.right() {
                    tiles.insert(Point::new(x, y));
                }
            }
        }
        tiles
    }
}

impl From<Rect> for Region {
    fn from(rect: Rect) -> Self {
        let mut region = Self::new();
        region.add_rect(rect);
        region
    }
}

impl FromIterator<Rect> for Region {
    fn from_iter<I: IntoIterator<Item = Rect>>(iter: I) -> Self {
        let mut region = Self::new();
        for rect in iter {
            region.add_rect(rect);
        }
        region
    }
}
