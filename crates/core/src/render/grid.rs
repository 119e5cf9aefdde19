use crate::{
    geom::{Line, Point, RectF},
    render::{
        coords,
        painter::{Painter, Pen},
        params::RenderParams,
        unit::Color3,
        HexagonalRenderer,
    },
    Workspace,
};
use log::debug;

impl HexagonalRenderer {
    /// Draw the grid lines of every tile that intersects the exposed area.
    ///
    /// Each tile draws its top edges, and only draws its bottom edges when
    /// no neighbor below is going to draw them as its own top edges. That way
    /// every edge in the grid is drawn exactly once, so dashed lines don't
    /// get doubled up.
    pub fn draw_grid<P: Painter + ?Sized>(
        &self,
        painter: &mut P,
        exposed: RectF,
        workspace: &Workspace,
        grid_color: Color3,
    ) {
        let rect = exposed.to_aligned_rect();
        if rect.is_empty() {
            return;
        }

        let p = self.render_params(workspace);
        let mut start_tile = self.start_tile(&p, rect.top_left());
        start_tile.x = start_tile.x.max(0);
        start_tile.y = start_tile.y.max(0);
        let oct = p.octagon();

        painter.set_pen(Pen::grid(grid_color));

        let mut lines: Vec<Line> = Vec::with_capacity(8);
        let mut total = 0;
        let edge = |pos: Point, from: usize, to: usize| {
            Line::new(pos + oct[from], pos + oct[to])
        };

        let (width, height) = (workspace.width(), workspace.height());
        let mut start_pos = coords::tile_to_screen(&p, start_tile);

        if p.stagger_x {
            // Column staggering is applied in the loop, so un-apply it here
            if p.do_stagger_x(start_tile.x) {
                start_pos.y -= p.row_height;
            }

            while start_pos.x <= rect.right() && start_tile.x < width {
                let staggered = p.do_stagger_x(start_tile.x);
                let mut row_tile = start_tile;
                let mut row_pos = start_pos;
                if staggered {
                    row_pos.y += p.row_height;
                }

                while row_pos.y <= rect.bottom() && row_tile.y < height {
                    lines.push(edge(row_pos, 1, 2));
                    lines.push(edge(row_pos, 2, 3));
                    lines.push(edge(row_pos, 3, 4));

                    let last_row = row_tile.y == height - 1;
                    let last_column = row_tile.x == width - 1;
                    let bottom_left =
                        row_tile.x == 0 || (last_row && staggered);
                    let bottom_right = last_column || (last_row && staggered);

                    if bottom_right {
                        lines.push(edge(row_pos, 5, 6));
                    }
                    if last_row {
                        lines.push(edge(row_pos, 6, 7));
                    }
                    if bottom_left {
                        lines.push(edge(row_pos, 7, 0));
                    }
                    painter.draw_lines(&lines);
                    total += lines.len();
                    lines.clear();

                    row_tile.y += 1;
                    row_pos.y += p.tile_height + p.side_length_y;
                }

                start_tile.x += 1;
                start_pos.x += p.column_width;
            }
        } else {
            // Row staggering is applied in the loop, so un-apply it here
            if p.do_stagger_y(start_tile.y) {
                start_pos.x -= p.column_width;
            }

            while start_pos.y <= rect.bottom() && start_tile.y < height {
                let staggered = p.do_stagger_y(start_tile.y);
                let mut row_tile = start_tile;
                let mut row_pos = start_pos;
                if staggered {
                    row_pos.x += p.column_width;
                }

                while row_pos.x <= rect.right() && row_tile.x < width {
                    lines.push(edge(row_pos, 0, 1));
                    lines.push(edge(row_pos, 1, 2));
                    lines.push(edge(row_pos, 3, 4));

                    let last_row = row_tile.y == height - 1;
                    let last_column = row_tile.x == width - 1;
                    let bottom_left =
                        last_row || (row_tile.x == 0 && !staggered);
                    let bottom_right = last_row || (last_column && staggered);

                    if last_column {
                        lines.push(edge(row_pos, 4, 5));
                    }
                    if bottom_right {
                        lines.push(edge(row_pos, 5, 6));
                    }
                    if bottom_left {
                        lines.push(edge(row_pos, 7, 0));
                    }
                    painter.draw_lines(&lines);
                    total += lines.len();
                    lines.clear();

                    row_tile.x += 1;
                    row_pos.x += p.tile_width + p.side_length_x;
                }

                start_tile.y += 1;
                start_pos.y += p.row_height;
            }
        }

        debug!("Drew {} grid lines in {}", total, rect);
    }

    /// Find the first tile to visit when sweeping an area whose top-left
    /// corner is at `corner`. The tile under the corner isn't enough: if the
    /// corner sits in the cut-off part of that tile's bounding box, the
    /// previous row or column reaches into the area too.
    pub(super) fn start_tile(&self, p: &RenderParams, corner: Point) -> Point {
        let mut tile = coords::screen_to_tile(p, corner.into());
        let pos = coords::tile_to_screen(p, tile);

        if corner.y - pos.y < p.side_offset_y {
            tile.y -= 1;
        }
        if corner.x - pos.x < p.side_offset_x {
            tile.x -= 1;
        }
        tile
    }
}
