use crate::geom::Size;
use serde::{Deserialize, Serialize};

/// The extent of a tile grid plus the pixel size of one of its tiles. Every
/// renderer operation is parametrized by one of these, because a single map
/// can hold layers with different grid and tile sizes.
///
/// Workspaces are plain values. Build a new one rather than mutating an
/// existing one; the renderer never holds onto them past a single call.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
pub struct Workspace {
    width: i32,
    height: i32,
    tile_width: i32,
    tile_height: i32,
}

impl Workspace {
    pub const fn new(
        width: i32,
        height: i32,
        tile_width: i32,
        tile_height: i32,
    ) -> Self {
        Self {
            width,
            height,
            tile_width,
            tile_height,
        }
    }

    /// Width of the grid, in tiles
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Height of the grid, in tiles
    pub const fn height(&self) -> i32 {
        self.height
    }

    pub const fn tile_width(&self) -> i32 {
        self.tile_width
    }

    pub const fn tile_height(&self) -> i32 {
        self.tile_height
    }

    /// Pixel size of a single tile
    pub const fn tile_size(&self) -> Size {
        Size::new(self.tile_width, self.tile_height)
    }

    /// Does this workspace cover no tiles at all?
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// The same workspace with the two axes swapped
    pub const fn transposed(&self) -> Self {
        Self::new(self.height, self.width, self.tile_height, self.tile_width)
    }
}
