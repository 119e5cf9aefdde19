use crate::{
    geom::{Point, RectF, Size},
    layer::Cell,
    render::painter::{Painter, TileDraw},
};

/// Feeds tile layer cells to a painter. Cells are positioned by their
/// bottom-left corner, which is what lets tiles taller than the grid stick
/// out upwards instead of overlapping the row below.
pub struct CellRenderer<'p, P: Painter + ?Sized> {
    painter: &'p mut P,
    rendered: usize,
}

impl<'p, P: Painter + ?Sized> CellRenderer<'p, P> {
    pub fn new(painter: &'p mut P) -> Self {
        Self {
            painter,
            rendered: 0,
        }
    }

    /// Draw a cell whose image has the given size, with its bottom-left
    /// corner at `pos`. Empty cells are skipped.
    pub fn render(&mut self, cell: &Cell, pos: Point, size: Size) {
        if cell.is_empty() {
            return;
        }

        let target = RectF::new(
            pos.x.into(),
            (pos.y - size.height).into(),
            size.width.into(),
            size.height.into(),
        );
        self.painter.draw_tile(&TileDraw::new(cell.tile(), target));
        self.rendered += 1;
    }

    /// Number of cells drawn so far
    pub fn rendered(&self) -> usize {
        self.rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        layer::{TileId, FLIP_V},
        render::record::{PaintCommand, PaintRecorder},
    };

    #[test]
    fn test_bottom_left_anchor() {
        let mut recorder = PaintRecorder::new();
        let mut renderer = CellRenderer::new(&mut recorder);
        renderer.render(
            &Cell::new(TileId(7 | FLIP_V)),
            Point::new(10, 50),
            Size::new(32, 48),
        );
        renderer.render(&Cell::EMPTY, Point::new(0, 0), Size::new(32, 32));
        assert_eq!(renderer.rendered(), 1);

        assert_eq!(
            recorder.commands(),
            &[PaintCommand::Tile(TileDraw {
                tile: 7,
                target: RectF::new(10.0, 2.0, 32.0, 48.0),
                flip_h: false,
                flip_v: true,
                flip_d: false,
            })]
        );
    }
}
