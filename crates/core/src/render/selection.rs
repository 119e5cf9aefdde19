use crate::{
    geom::RectF,
    region::Region,
    render::{
        painter::{Painter, Pen},
        unit::Color3,
        HexagonalRenderer,
    },
    Workspace,
};
use log::debug;

impl HexagonalRenderer {
    /// Fill the hexagon of every selected tile that shows up in the exposed
    /// area. Tiles covered by more than one rect of the region are only
    /// filled once.
    pub fn draw_tile_selection<P: Painter + ?Sized>(
        &self,
        painter: &mut P,
        region: &Region,
        workspace: &Workspace,
        color: Color3,
        exposed: RectF,
    ) {
        if region.is_empty() {
            return;
        }

        painter.set_brush(Some(color));
        painter.set_pen(Pen::NONE);

        let mut filled = 0;
        for tile in region.tiles() {
            let polygon =
                self.tile_to_screen_polygon(tile.x, tile.y, workspace);
            if polygon.bounding_rect().intersects(&exposed) {
                painter.draw_convex_polygon(&polygon);
                filled += 1;
            }
        }
        debug!("Filled {} selected tiles", filled);
    }
}
