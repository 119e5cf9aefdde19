pub mod cell;
mod coords;
mod grid;
pub mod painter;
pub mod params;
pub mod record;
mod selection;
#[cfg(feature = "svg")]
pub mod svg;
mod tile_layer;
pub mod unit;

use crate::{
    config::{MapConfig, StaggerAxis},
    geom::{Point, PointF, Polygon, Rect, RectF, Size},
    layer::Layer,
    render::{painter::Painter, params::RenderParams},
    Workspace,
};
use anyhow::Context;
use log::trace;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A hexagonal renderer maps between tile coordinates and screen coordinates
/// on a staggered hex grid, and draws grids, tile layers and selections onto
/// a [Painter]. A renderer is created from a particular [MapConfig], and from
/// there can be used to render any number of workspaces any number of times.
///
/// The renderer doesn't hold onto anything but the map config. Every call
/// takes the [Workspace] it should operate on, and derives a fresh set of
/// [RenderParams] from it, so the same renderer works for layers with
/// different grid or tile sizes.
///
/// Config options cannot be changed after creating a renderer, but renderers
/// are very cheap to create so if you need to change the config, just create
/// a new renderer.
///
/// ## Staggering
/// With stagger axis Y, every other row is pushed right by half a tile. With
/// stagger axis X, every other column is pushed down by half a tile. The
/// stagger index picks whether the odd or the even rows/columns get pushed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexagonalRenderer {
    config: MapConfig,
}

impl HexagonalRenderer {
    /// Initialize a new renderer with the given map settings. Returns an
    /// error if the config is invalid.
    pub fn new(config: MapConfig) -> anyhow::Result<Self> {
        config.validate().context("invalid map config")?;
        Ok(Self { config })
    }

    /// Get a reference to the config that this renderer uses
    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// Derive the geometric constants for a workspace
    pub fn render_params(&self, workspace: &Workspace) -> RenderParams {
        RenderParams::new(&self.config, workspace)
    }

    /// Total pixel size of a workspace's grid
    pub fn work_size(&self, workspace: &Workspace) -> Size {
        if workspace.is_empty() {
            return Size::default();
        }
        let p = self.render_params(workspace);
        let (width, height) = (workspace.width(), workspace.height());

        if p.stagger_x {
            let mut size = Size::new(
                width * p.column_width + p.side_offset_x,
                height * (p.tile_height + p.side_length_y),
            );
            // Staggered columns stick out below the last row
            if width > 1 {
                size.height += p.row_height;
            }
            size
        } else {
            let mut size = Size::new(
                width * (p.tile_width + p.side_length_x),
                height * p.row_height + p.side_offset_y,
            );
            if height > 1 {
                size.width += p.column_width;
            }
            size
        }
    }

    /// Pixel bounds of a rectangle of tiles. An empty tile rect has empty
    /// bounds.
    pub fn bounding_rect(&self, rect: Rect, workspace: &Workspace) -> Rect {
        if rect.is_empty() {
            return Rect::default();
        }
        let p = self.render_params(workspace);
        let mut top_left = coords::tile_to_screen(&p, rect.top_left());

        let size = if p.stagger_x {
            let mut size = Size::new(
                rect.width * p.column_width + p.side_offset_x,
                rect.height * (p.tile_height + p.side_length_y),
            );
            if rect.width > 1 {
                size.height += p.row_height;
                // The first column is pushed down, so the second one pokes
                // out above it
                if p.do_stagger_x(rect.x) {
                    top_left.y -= p.row_height;
                }
            }
            size
        } else {
            let mut size = Size::new(
                rect.width * (p.tile_width + p.side_length_x),
                rect.height * p.row_height + p.side_offset_y,
            );
            if rect.height > 1 {
                size.width += p.column_width;
                if p.do_stagger_y(rect.y) {
                    top_left.x -= p.column_width;
                }
            }
            size
        };

        Rect::new(top_left.x, top_left.y, size.width, size.height)
    }

    /// Get the outline of a single tile, in screen coordinates. The polygon
    /// always has 8 points, two of which coincide with their neighbors (the
    /// corners along the non-staggered axis are not cut).
    pub fn tile_to_screen_polygon(
        &self,
        x: i32,
        y: i32,
        workspace: &Workspace,
    ) -> Polygon {
        let p = self.render_params(workspace);
        let origin = coords::tile_to_screen(&p, Point::new(x, y));
        Polygon::new(
            p.octagon()
                .iter()
                .map(|&corner| PointF::from(origin) + PointF::from(corner))
                .collect(),
        )
    }

    /// The neighbor up and to the left of a tile
    pub fn top_left(&self, x: i32, y: i32) -> Point {
        let index = self.config.stagger_index;
        if self.stagger_y() {
            if index.is_staggered(y) {
                Point::new(x, y - 1)
            } else {
                Point::new(x - 1, y - 1)
            }
        } else if index.is_staggered(x) {
            Point::new(x - 1, y)
        } else {
            Point::new(x - 1, y - 1)
        }
    }

    /// The neighbor up and to the right of a tile
    pub fn top_right(&self, x: i32, y: i32) -> Point {
        let index = self.config.stagger_index;
        if self.stagger_y() {
            if index.is_staggered(y) {
                Point::new(x + 1, y - 1)
            } else {
                Point::new(x, y - 1)
            }
        } else if index.is_staggered(x) {
            Point::new(x + 1, y)
        } else {
            Point::new(x + 1, y - 1)
        }
    }

    /// The neighbor down and to the left of a tile
    pub fn bottom_left(&self, x: i32, y: i32) -> Point {
        let index = self.config.stagger_index;
        if self.stagger_y() {
            if index.is_staggered(y) {
                Point::new(x, y + 1)
            } else {
                Point::new(x - 1, y + 1)
            }
        } else if index.is_staggered(x) {
            Point::new(x - 1, y + 1)
        } else {
            Point::new(x - 1, y)
        }
    }

    /// The neighbor down and to the right of a tile
    pub fn bottom_right(&self, x: i32, y: i32) -> Point {
        let index = self.config.stagger_index;
        if self.stagger_y() {
            if index.is_staggered(y) {
                Point::new(x + 1, y + 1)
            } else {
                Point::new(x, y + 1)
            }
        } else if index.is_staggered(x) {
            Point::new(x + 1, y + 1)
        } else {
            Point::new(x + 1, y)
        }
    }

    /// Draw any kind of layer. Tile layers are drawn, groups are drawn child
    /// by child, and everything else is skipped because it has no hex-specific
    /// rendering. Returns the number of cells drawn.
    pub fn draw_layer<P: Painter + ?Sized>(
        &self,
        painter: &mut P,
        layer: &Layer,
        exposed: RectF,
    ) -> usize {
        if !layer.visible() {
            trace!("Skipping hidden layer '{}'", layer.name());
            return 0;
        }

        match layer {
            Layer::Tile(tile_layer) => {
                self.draw_tile_layer(painter, tile_layer, exposed)
            }
            Layer::Group(group) => group
                .layers
                .iter()
                .map(|child| self.draw_layer(painter, child, exposed))
                .sum(),
            Layer::Object(_) | Layer::Image(_) => {
                trace!("Nothing to draw for layer '{}'", layer.name());
                0
            }
        }
    }

    fn stagger_y(&self) -> bool {
        self.config.stagger_axis == StaggerAxis::Y
    }
}
