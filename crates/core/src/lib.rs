//! Hexrender maps between tile coordinates and screen coordinates on
//! staggered hexagonal tile grids, and rasterizes grids, tile layers and
//! selections for them. Actual pixel pushing is left to a [Painter]
//! implementation, so the same renderer can feed an SVG document, a test
//! recorder or anything else that can draw lines and polygons.
//!
//! ```
//! use hexrender::{HexagonalRenderer, MapConfig, Point, Workspace};
//!
//! let renderer = HexagonalRenderer::new(MapConfig::default()).unwrap();
//! let workspace = Workspace::new(10, 10, 32, 32);
//! let pixel = renderer.tile_to_screen(Point::new(3, 4), &workspace);
//! let center = pixel + Point::new(16, 16);
//! assert_eq!(renderer.screen_to_tile(center, &workspace), Point::new(3, 4));
//! ```
//!
//! See [MapConfig] for details on how the grid geometry can be customized.

mod config;
mod geom;
mod layer;
mod region;
mod render;
mod util;
mod workspace;

pub use crate::{
    config::{MapConfig, Orientation, StaggerAxis, StaggerIndex},
    geom::{Line, Margins, Point, PointF, Polygon, Rect, RectF, Size},
    layer::{
        Cell, GroupLayer, ImageLayer, Layer, ObjectGroup, TileId, TileLayer,
        FLIP_D, FLIP_H, FLIP_V, GID_MASK,
    },
    region::{Region, TilePointIndexSet},
    render::{
        cell::CellRenderer,
        painter::{Painter, Pen, PenStyle, TileDraw},
        params::RenderParams,
        record::{PaintCommand, PaintRecorder},
        unit::Color3,
        HexagonalRenderer,
    },
    workspace::Workspace,
};

#[cfg(feature = "svg")]
pub use crate::render::svg::SvgPainter;
