use crate::{
    geom::{Line, Polygon},
    render::{
        painter::{Painter, Pen, TileDraw},
        unit::Color3,
    },
};

/// A single call made against a [PaintRecorder]
#[derive(Clone, Debug, PartialEq)]
pub enum PaintCommand {
    SetPen(Pen),
    SetBrush(Option<Color3>),
    Lines(Vec<Line>),
    ConvexPolygon(Polygon),
    Tile(TileDraw),
}

/// A painter that doesn't paint anything, it just remembers what it was
/// asked to do. Useful for testing, and for callers that want to inspect or
/// post-process draw output (e.g. hit testing against drawn cells).
#[derive(Clone, Debug, Default)]
pub struct PaintRecorder {
    commands: Vec<PaintCommand>,
}

impl PaintRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    /// Every line drawn, flattened out of their batches
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.commands.iter().flat_map(|command| match command {
            PaintCommand::Lines(lines) => lines.as_slice(),
            _ => &[][..],
        })
    }

    pub fn polygons(&self) -> impl Iterator<Item = &Polygon> {
        self.commands.iter().filter_map(|command| match command {
            PaintCommand::ConvexPolygon(polygon) => Some(polygon),
            _ => None,
        })
    }

    pub fn tiles(&self) -> impl Iterator<Item = &TileDraw> {
        self.commands.iter().filter_map(|command| match command {
            PaintCommand::Tile(tile) => Some(tile),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Painter for PaintRecorder {
    fn set_pen(&mut self, pen: Pen) {
        self.commands.push(PaintCommand::SetPen(pen));
    }

    fn set_brush(&mut self, brush: Option<Color3>) {
        self.commands.push(PaintCommand::SetBrush(brush));
    }

    fn draw_lines(&mut self, lines: &[Line]) {
        self.commands.push(PaintCommand::Lines(lines.to_vec()));
    }

    fn draw_convex_polygon(&mut self, polygon: &Polygon) {
        self.commands.push(PaintCommand::ConvexPolygon(polygon.clone()));
    }

    fn draw_tile(&mut self, tile: &TileDraw) {
        self.commands.push(PaintCommand::Tile(*tile));
    }
}
