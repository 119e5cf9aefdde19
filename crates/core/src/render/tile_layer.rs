use crate::{
    geom::{Point, RectF},
    layer::TileLayer,
    render::{cell::CellRenderer, coords, painter::Painter, HexagonalRenderer},
};
use log::debug;

impl HexagonalRenderer {
    /// Draw every visible cell of a tile layer that could show up in the
    /// exposed area. A null exposed rect means the whole layer. Returns the
    /// number of cells drawn.
    ///
    /// The layer's own grid and tile size are used, so layers that don't
    /// match the map's tile size still line up with their own cells. Cells
    /// are anchored at the bottom-left of their tile, and images larger than
    /// a tile grow up and to the right.
    pub fn draw_tile_layer<P: Painter + ?Sized>(
        &self,
        painter: &mut P,
        layer: &TileLayer,
        exposed: RectF,
    ) -> usize {
        let workspace = layer.workspace();
        let p = self.render_params(&workspace);

        let mut rect = exposed.to_aligned_rect();
        if rect.is_null() {
            rect = self.bounding_rect(layer.bounds(), &workspace);
        }

        // Grow the area to catch cells that are anchored outside of it but
        // whose images reach into it
        let mut margins = layer.draw_margins();
        margins.bottom += p.tile_height;
        margins.right -= p.tile_width;
        let rect = rect.adjusted(
            -margins.right,
            -margins.bottom,
            margins.left,
            margins.top,
        );

        let position = layer.position();
        let mut start_tile = self.start_tile(&p, rect.top_left()) - position;
        let tile_size = workspace.tile_size();
        let mut renderer = CellRenderer::new(painter);

        if p.stagger_x {
            start_tile.x = start_tile.x.max(-1);
            start_tile.y = start_tile.y.max(-1);

            let mut start_pos =
                coords::tile_to_screen(&p, start_tile + position);
            start_pos.y += p.tile_height;

            // Two logical columns make up one visual row, so zig-zag
            // between them: the higher column first, then the lower one
            let mut staggered_row = p.do_stagger_x(start_tile.x + layer.x());

            while start_pos.y < rect.bottom() && start_tile.y < layer.height()
            {
                let mut row_tile = start_tile;
                let mut row_pos = start_pos;

                while row_pos.x < rect.right() && row_tile.x < layer.width() {
                    if let Some(cell) = layer.cell_at(row_tile) {
                        let size = cell.image_size().unwrap_or(tile_size);
                        renderer.render(cell, row_pos, size);
                    }
                    row_tile.x += 2;
                    row_pos.x += p.tile_width + p.side_length_x;
                }

                if staggered_row {
                    start_tile += Point::new(-1, 1);
                    start_pos.x -= p.column_width;
                } else {
                    start_tile.x += 1;
                    start_pos.x += p.column_width;
                }
                staggered_row = !staggered_row;
                start_pos.y += p.row_height;
            }
        } else {
            start_tile.x = start_tile.x.max(0);
            start_tile.y = start_tile.y.max(0);

            let mut start_pos =
                coords::tile_to_screen(&p, start_tile + position);
            start_pos.y += p.tile_height;

            // Row staggering is applied in the loop, so un-apply it here
            if p.do_stagger_y(start_tile.y + layer.y()) {
                start_pos.x -= p.column_width;
            }

            while start_pos.y < rect.bottom() && start_tile.y < layer.height()
            {
                let mut row_tile = start_tile;
                let mut row_pos = start_pos;
                if p.do_stagger_y(start_tile.y + layer.y()) {
                    row_pos.x += p.column_width;
                }

                while row_pos.x < rect.right() && row_tile.x < layer.width() {
                    if let Some(cell) = layer.cell_at(row_tile) {
                        let size = cell.image_size().unwrap_or(tile_size);
                        renderer.render(cell, row_pos, size);
                    }
                    row_tile.x += 1;
                    row_pos.x += p.tile_width + p.side_length_x;
                }

                start_tile.y += 1;
                start_pos.y += p.row_height;
            }
        }

        let rendered = renderer.rendered();
        debug!("Drew {} cells of layer '{}'", rendered, layer.name());
        rendered
    }
}
