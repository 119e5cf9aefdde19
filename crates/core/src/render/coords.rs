//! Conversions between tile coordinates and screen (pixel) coordinates.
//!
//! Going from tiles to pixels is a direct formula. Going back is not: the
//! pixel plane is cut into grid-aligned reference cells, each two steps wide
//! and two steps tall, and the point is assigned to whichever of the four
//! hexagons that can overlap the reference cell has the closest center.
//! Neither direction supports sub-tile precision.

use crate::{
    geom::{Point, PointF},
    render::{params::RenderParams, HexagonalRenderer},
    Workspace,
};
use nalgebra::Vector2;

/// Tile offsets for each of the four candidate centers, stagger axis X
const OFFSETS_STAGGER_X: [Point; 4] = [
    Point::new(0, 0),
    Point::new(1, -1),
    Point::new(1, 0),
    Point::new(2, 0),
];

/// Tile offsets for each of the four candidate centers, stagger axis Y
const OFFSETS_STAGGER_Y: [Point; 4] = [
    Point::new(0, 0),
    Point::new(-1, 1),
    Point::new(0, 1),
    Point::new(0, 2),
];

impl HexagonalRenderer {
    /// Get the screen position of the top-left corner of a tile's bounding
    /// box. Fractional tile coordinates are floored first.
    pub fn tile_to_screen_coords(
        &self,
        x: f64,
        y: f64,
        workspace: &Workspace,
    ) -> PointF {
        let p = self.render_params(workspace);
        let tile = Point::new(x.floor() as i32, y.floor() as i32);
        tile_to_screen(&p, tile).into()
    }

    /// Integer version of [Self::tile_to_screen_coords]
    pub fn tile_to_screen(&self, tile: Point, workspace: &Workspace) -> Point {
        tile_to_screen(&self.render_params(workspace), tile)
    }

    /// Same as [Self::tile_to_screen_coords]. Pixel and screen coordinates
    /// are one and the same for this renderer.
    pub fn tile_to_pixel_coords(
        &self,
        x: f64,
        y: f64,
        workspace: &Workspace,
    ) -> PointF {
        self.tile_to_screen_coords(x, y, workspace)
    }

    /// Find the tile containing a screen position. The result is always a
    /// whole tile coordinate, and may lie outside the grid.
    ///
    /// Points well inside a hexagon always resolve to that hexagon. Near the
    /// slanted edges the nearest-center rule decides, and exact ties go to
    /// the first candidate checked.
    pub fn screen_to_tile_coords(
        &self,
        x: f64,
        y: f64,
        workspace: &Workspace,
    ) -> PointF {
        let p = self.render_params(workspace);
        screen_to_tile(&p, PointF::new(x, y)).into()
    }

    /// Integer version of [Self::screen_to_tile_coords]
    pub fn screen_to_tile(&self, pos: Point, workspace: &Workspace) -> Point {
        screen_to_tile(&self.render_params(workspace), pos.into())
    }

    /// Same as [Self::screen_to_tile_coords]
    pub fn pixel_to_tile_coords(
        &self,
        x: f64,
        y: f64,
        workspace: &Workspace,
    ) -> PointF {
        self.screen_to_tile_coords(x, y, workspace)
    }
}

pub(crate) fn tile_to_screen(p: &RenderParams, tile: Point) -> Point {
    // Saturate instead of overflowing for tiles far outside any real map
    if p.stagger_x {
        let mut y = tile.y.saturating_mul(p.tile_height + p.side_length_y);
        if p.do_stagger_x(tile.x) {
            y = y.saturating_add(p.row_height);
        }
        Point::new(tile.x.saturating_mul(p.column_width), y)
    } else {
        let mut x = tile.x.saturating_mul(p.tile_width + p.side_length_x);
        if p.do_stagger_y(tile.y) {
            x = x.saturating_add(p.column_width);
        }
        Point::new(x, tile.y.saturating_mul(p.row_height))
    }
}

pub(crate) fn screen_to_tile(p: &RenderParams, pos: PointF) -> Point {
    if p.is_degenerate() {
        return Point::default();
    }

    let PointF { mut x, mut y } = pos;
    let stagger_even = p.stagger_even();

    // Line the reference grid up with the tile grid
    if p.stagger_x {
        x -= f64::from(if stagger_even {
            p.tile_width
        } else {
            p.side_offset_x
        });
    } else {
        y -= f64::from(if stagger_even {
            p.tile_height
        } else {
            p.side_offset_y
        });
    }

    // Start with the coordinates of a grid-aligned tile. These stay floats
    // until the very end, so positions far off the map saturate instead of
    // overflowing.
    let cell_width = f64::from(p.column_width * 2);
    let cell_height = f64::from(p.row_height * 2);
    let mut reference = Vector2::new(
        (x / cell_width).floor(),
        (y / cell_height).floor(),
    );

    // Position relative to the reference cell's origin
    let rel = Vector2::new(
        x - reference.x * cell_width,
        y - reference.y * cell_height,
    );

    // Each reference cell spans two tiles along the stagger axis
    let stagger_axis_index = if p.stagger_x {
        &mut reference.x
    } else {
        &mut reference.y
    };
    *stagger_axis_index *= 2.0;
    if stagger_even {
        *stagger_axis_index += 1.0;
    }

    // The four hexagons whose territory can overlap this reference cell
    let centers: [Vector2<f64>; 4] = if p.stagger_x {
        let left = p.side_length_x / 2;
        let center_x = left + p.column_width;
        let center_y = p.tile_height / 2;
        [
            (left, center_y),
            (center_x, center_y - p.row_height),
            (center_x, center_y + p.row_height),
            (center_x + p.column_width, center_y),
        ]
    } else {
        let top = p.side_length_y / 2;
        let center_x = p.tile_width / 2;
        let center_y = top + p.row_height;
        [
            (center_x, top),
            (center_x - p.column_width, center_y),
            (center_x + p.column_width, center_y),
            (center_x, center_y + p.row_height),
        ]
    }
    .map(|(cx, cy)| Vector2::new(f64::from(cx), f64::from(cy)));

    // Strict comparison, so ties go to the lowest index
    let mut nearest = 0;
    let mut min_distance = f64::MAX;
    for (i, center) in centers.iter().enumerate() {
        let distance = (center - rel).norm_squared();
        if distance < min_distance {
            min_distance = distance;
            nearest = i;
        }
    }

    let offsets = if p.stagger_x {
        &OFFSETS_STAGGER_X
    } else {
        &OFFSETS_STAGGER_Y
    };
    let offset = offsets[nearest];
    // Float to int casts saturate
    Point::new(
        (reference.x + f64::from(offset.x)) as i32,
        (reference.y + f64::from(offset.y)) as i32,
    )
}
