use crate::{
    geom::{Line, Polygon, RectF},
    layer::TileId,
    render::unit::Color3,
};

/// A 2D drawing surface. The renderer computes *what* to draw and hands the
/// primitives to a painter; how they end up as pixels (or SVG nodes, or a
/// test log) is up to the implementation.
///
/// A painter is borrowed mutably for the whole of one draw call, so a draw
/// routine always has exclusive use of it. Draw routines never call back into
/// the renderer while holding the painter.
pub trait Painter {
    /// Set the pen used to stroke lines and polygon outlines
    fn set_pen(&mut self, pen: Pen);

    /// Set the fill color for polygons. `None` disables filling.
    fn set_brush(&mut self, brush: Option<Color3>);

    /// Stroke a batch of independent line segments with the current pen
    fn draw_lines(&mut self, lines: &[Line]);

    /// Fill (with the current brush) and stroke (with the current pen) a
    /// convex polygon
    fn draw_convex_polygon(&mut self, polygon: &Polygon);

    /// Draw a single tile image
    fn draw_tile(&mut self, tile: &TileDraw);
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PenStyle {
    /// Don't stroke anything
    None,
    Solid,
    Dashed,
}

/// How lines get stroked
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pen {
    pub color: Color3,
    /// Stroke width, in device pixels
    pub width: f64,
    pub style: PenStyle,
}

impl Pen {
    /// A pen that doesn't draw
    pub const NONE: Self = Self {
        color: Color3::BLACK,
        width: 0.0,
        style: PenStyle::None,
    };

    /// The pen used for grid lines: a one pixel dashed line
    pub const fn grid(color: Color3) -> Self {
        Self {
            color,
            width: 1.0,
            style: PenStyle::Dashed,
        }
    }
}

/// A tile image placed on the surface. `target` is where the (possibly
/// flipped) image should land, in pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TileDraw {
    /// Tile id, with flip flags stripped
    pub tile: u32,
    pub target: RectF,
    pub flip_h: bool,
    pub flip_v: bool,
    pub flip_d: bool,
}

impl TileDraw {
    pub fn new(tile: TileId, target: RectF) -> Self {
        Self {
            tile: tile.clean(),
            target,
            flip_h: tile.flip_h(),
            flip_v: tile.flip_v(),
            flip_d: tile.flip_d(),
        }
    }
}
