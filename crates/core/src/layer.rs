//! The subset of the map's layer model that the renderer depends on. Layers
//! are a closed set of kinds, so they're modelled as an enum rather than
//! anything dynamic. Only tile layers carry data the hex renderer draws; the
//! other kinds exist so callers can hand a whole layer tree to
//! [crate::HexagonalRenderer::draw_layer].

use crate::{
    geom::{Margins, Point, Rect, Size},
    Workspace,
};
use anyhow::bail;
use derive_more::Display;
use serde::{Deserialize, Serialize};

pub const FLIP_H: u32 = 0x8000_0000; // bit 31
pub const FLIP_V: u32 = 0x4000_0000; // bit 30
pub const FLIP_D: u32 = 0x2000_0000; // bit 29
pub const GID_MASK: u32 = 0x1FFF_FFFF;

/// A global tile id as stored in map data. The top three bits are flip flags;
/// the rest identifies the tile. An id of zero means "no tile".
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
#[serde(transparent)]
pub struct TileId(pub u32);

impl TileId {
    #[inline]
    pub fn clean(self) -> u32 {
        self.0 & GID_MASK
    }

    #[inline]
    pub fn flip_h(self) -> bool {
        (self.0 & FLIP_H) != 0
    }

    #[inline]
    pub fn flip_v(self) -> bool {
        (self.0 & FLIP_V) != 0
    }

    #[inline]
    pub fn flip_d(self) -> bool {
        (self.0 & FLIP_D) != 0
    }
}

/// One grid cell of a tile layer
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    tile: TileId,
    /// Intrinsic size of the tile's image, if known. When it isn't, the
    /// renderer falls back to the tile size of the layer's workspace.
    image_size: Option<Size>,
}

impl Cell {
    pub const EMPTY: Self = Self {
        tile: TileId(0),
        image_size: None,
    };

    pub const fn new(tile: TileId) -> Self {
        Self {
            tile,
            image_size: None,
        }
    }

    pub const fn with_image_size(self, image_size: Size) -> Self {
        Self {
            image_size: Some(image_size),
            ..self
        }
    }

    pub const fn tile(&self) -> TileId {
        self.tile
    }

    pub const fn image_size(&self) -> Option<Size> {
        self.image_size
    }

    pub fn is_empty(&self) -> bool {
        self.tile.clean() == 0
    }
}

/// A rectangular grid of cells
#[derive(Clone, Debug, PartialEq)]
pub struct TileLayer {
    name: String,
    visible: bool,
    /// Offset of the layer within the map, in tiles
    position: Point,
    width: i32,
    height: i32,
    tile_width: i32,
    tile_height: i32,
    /// Row-major
    cells: Vec<Cell>,
    /// Largest image size of any cell, used for draw margins
    max_image_size: Size,
}

impl TileLayer {
    /// Create a layer full of empty cells
    pub fn new(
        name: impl Into<String>,
        width: i32,
        height: i32,
        tile_size: Size,
    ) -> Self {
        let len = (width.max(0) * height.max(0)) as usize;
        Self {
            name: name.into(),
            visible: true,
            position: Point::default(),
            width,
            height,
            tile_width: tile_size.width,
            tile_height: tile_size.height,
            cells: vec![Cell::EMPTY; len],
            max_image_size: tile_size,
        }
    }

    /// Build a layer from raw row-major tile ids. Fails if the data length
    /// doesn't match the layer dimensions.
    pub fn from_gids(
        name: impl Into<String>,
        width: i32,
        height: i32,
        tile_size: Size,
        gids: &[u32],
    ) -> anyhow::Result<Self> {
        let mut layer = Self::new(name, width, height, tile_size);
        if gids.len() != layer.cells.len() {
            bail!(
                "layer '{}' has {} tiles of data, expected {}x{}",
                layer.name,
                gids.len(),
                width,
                height
            );
        }
        for (cell, gid) in layer.cells.iter_mut().zip(gids) {
            *cell = Cell::new(TileId(*gid));
        }
        Ok(layer)
    }

    pub fn with_position(self, position: Point) -> Self {
        Self { position, ..self }
    }

    pub fn with_visible(self, visible: bool) -> Self {
        Self { visible, ..self }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn x(&self) -> i32 {
        self.position.x
    }

    pub fn y(&self) -> i32 {
        self.position.y
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn tile_size(&self) -> Size {
        Size::new(self.tile_width, self.tile_height)
    }

    /// The area this layer covers in the map, in tiles
    pub fn bounds(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.width, self.height)
    }

    /// The grid this layer's cells live on
    pub fn workspace(&self) -> Workspace {
        Workspace::new(
            self.width,
            self.height,
            self.tile_width,
            self.tile_height,
        )
    }

    /// How far cell images can reach from the bottom-left corner they're
    /// anchored at: up by the tallest image and right by the widest one.
    pub fn draw_margins(&self) -> Margins {
        Margins::new(
            0,
            self.max_image_size.height,
            self.max_image_size.width,
            0,
        )
    }

    /// Is the given point (relative to the layer) inside the layer?
    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && point.x < self.width
            && point.y < self.height
    }

    /// Get the cell at a point relative to the layer, or `None` if the point
    /// is outside the layer.
    pub fn cell_at(&self, point: Point) -> Option<&Cell> {
        self.index(point).map(|index| &self.cells[index])
    }

    /// Replace the cell at a point. Points outside the layer are ignored.
    pub fn set_cell(&mut self, point: Point, cell: Cell) {
        if let Some(index) = self.index(point) {
            if let Some(size) = cell.image_size() {
                self.max_image_size = Size::new(
                    self.max_image_size.width.max(size.width),
                    self.max_image_size.height.max(size.height),
                );
            }
            self.cells[index] = cell;
        }
    }

    /// Set the image size of every cell referencing the given tile
    pub fn set_image_size(&mut self, tile: u32, size: Size) {
        for y in 0..self.height {
            for x in 0..self.width {
                let point = Point::new(x, y);
                if let Some(cell) = self.cell_at(point).copied() {
                    if !cell.is_empty() && cell.tile().clean() == tile {
                        self.set_cell(point, cell.with_image_size(size));
                    }
                }
            }
        }
    }

    fn index(&self, point: Point) -> Option<usize> {
        if self.contains(point) {
            Some((point.y * self.width + point.x) as usize)
        } else {
            None
        }
    }
}

/// A layer of free-floating objects. The hex renderer doesn't draw these.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObjectGroup {
    pub name: String,
    #[serde(default = "default_true")]
    pub visible: bool,
}

/// A layer showing a single image. The hex renderer doesn't draw these.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageLayer {
    pub name: String,
    #[serde(default = "default_true")]
    pub visible: bool,
    pub image: String,
}

/// A named, ordered collection of child layers
#[derive(Clone, Debug, PartialEq)]
pub struct GroupLayer {
    pub name: String,
    pub visible: bool,
    pub layers: Vec<Layer>,
}

fn default_true() -> bool {
    true
}

/// Any map layer
#[derive(Clone, Debug, PartialEq)]
pub enum Layer {
    Tile(TileLayer),
    Object(ObjectGroup),
    Image(ImageLayer),
    Group(GroupLayer),
}

impl Layer {
    pub fn name(&self) -> &str {
        match self {
            Self::Tile(layer) => layer.name(),
            Self::Object(layer) => &layer.name,
            Self::Image(layer) => &layer.name,
            Self::Group(layer) => &layer.name,
        }
    }

    pub fn visible(&self) -> bool {
        match self {
            Self::Tile(layer) => layer.visible(),
            Self::Object(layer) => layer.visible,
            Self::Image(layer) => layer.visible,
            Self::Group(layer) => layer.visible,
        }
    }

    pub fn as_tile_layer(&self) -> Option<&TileLayer> {
        match self {
            Self::Tile(layer) => Some(layer),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_id_flags() {
        let id = TileId(5 | FLIP_H | FLIP_D);
        assert_eq!(id.clean(), 5);
        assert!(id.flip_h());
        assert!(!id.flip_v());
        assert!(id.flip_d());
        // A flipped zero is still empty
        assert!(Cell::new(TileId(FLIP_V)).is_empty());
    }

    #[test]
    fn test_from_gids() {
        let gids = [0, 1, 2, 3];
        let layer =
            TileLayer::from_gids("ground", 2, 2, Size::new(32, 32), &gids)
                .unwrap();
        assert!(layer.cell_at(Point::new(0, 0)).unwrap().is_empty());
        assert_eq!(layer.cell_at(Point::new(1, 1)).unwrap().tile(), TileId(3));
        assert_eq!(layer.cell_at(Point::new(2, 0)), None);
        assert_eq!(layer.cell_at(Point::new(-1, 0)), None);
    }

    #[test]
    fn test_from_gids_size_mismatch() {
        let err =
            TileLayer::from_gids("oops", 2, 2, Size::new(8, 8), &[1, 2, 3])
                .unwrap_err();
        assert!(err.to_string().contains("oops"), "{}", err);
    }

    #[test]
    fn test_draw_margins() {
        let mut layer = TileLayer::new("l", 3, 3, Size::new(32, 32));
        assert_eq!(layer.draw_margins(), Margins::new(0, 32, 32, 0));

        layer.set_cell(
            Point::new(1, 1),
            Cell::new(TileId(1)).with_image_size(Size::new(40, 64)),
        );
        assert_eq!(layer.draw_margins(), Margins::new(0, 64, 40, 0));
    }

    #[test]
    fn test_bounds() {
        let layer = TileLayer::new("l", 4, 5, Size::new(16, 16))
            .with_position(Point::new(2, -1));
        assert_eq!(layer.bounds(), Rect::new(2, -1, 4, 5));
        assert_eq!(layer.workspace(), Workspace::new(4, 5, 16, 16));
    }
}
