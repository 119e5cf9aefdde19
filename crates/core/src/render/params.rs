use crate::{
    config::{MapConfig, Orientation, StaggerAxis, StaggerIndex},
    geom::Point,
    Workspace,
};

/// Geometric constants for one renderer call, derived from the map config
/// and a workspace. These are cheap to compute, so every renderer operation
/// builds a fresh set instead of caching them.
///
/// Hexagon layout within one tile (stagger axis Y shown, X is the transpose):
///
/// ```text
///            side_offset_x
///           |<------>|
///      ---  +--------2/3--------+
///  side_    |      /    \       |
///  offset_y |    /        \     |
///      ---  1  /            \   4
///           | |              |  |   side_length_y
///           0  \            /   5
///           |    \        /     |
///           |      \    /       |
///           +--------7/6--------+
/// ```
///
/// With a Y stagger, `side_length_x` is zero so points 2/3 and 6/7 coincide.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RenderParams {
    /// Workspace tile width, rounded down to an even number so it splits
    /// exactly in half
    pub tile_width: i32,
    /// Workspace tile height, rounded down to an even number
    pub tile_height: i32,
    pub side_length_x: i32,
    pub side_length_y: i32,
    /// Horizontal inset of the cut corners
    pub side_offset_x: i32,
    /// Vertical inset of the cut corners
    pub side_offset_y: i32,
    /// Horizontal step between two adjacent (staggered) columns
    pub column_width: i32,
    /// Vertical step between two adjacent (staggered) rows
    pub row_height: i32,
    pub stagger_x: bool,
    pub stagger_index: StaggerIndex,
}

impl RenderParams {
    pub fn new(config: &MapConfig, workspace: &Workspace) -> Self {
        let tile_width = workspace.tile_width() & !1;
        let tile_height = workspace.tile_height() & !1;
        let stagger_x = config.stagger_axis == StaggerAxis::X;

        let (side_length_x, side_length_y) =
            match (config.orientation, stagger_x) {
                (Orientation::Hexagonal, true) => (config.hex_side_length, 0),
                (Orientation::Hexagonal, false) => (0, config.hex_side_length),
                _ => (0, 0),
            };

        let side_offset_x = (tile_width - side_length_x) / 2;
        let side_offset_y = (tile_height - side_length_y) / 2;

        Self {
            tile_width,
            tile_height,
            side_length_x,
            side_length_y,
            side_offset_x,
            side_offset_y,
            column_width: side_offset_x + side_length_x,
            row_height: side_offset_y + side_length_y,
            stagger_x,
            stagger_index: config.stagger_index,
        }
    }

    pub fn stagger_even(&self) -> bool {
        self.stagger_index == StaggerIndex::Even
    }

    /// Is this column pushed down?
    pub fn do_stagger_x(&self, x: i32) -> bool {
        self.stagger_x && self.stagger_index.is_staggered(x)
    }

    /// Is this row pushed right?
    pub fn do_stagger_y(&self, y: i32) -> bool {
        !self.stagger_x && self.stagger_index.is_staggered(y)
    }

    /// The 8 corners of the hexagon (as an octagon with two zero-length
    /// sides), relative to the top-left of the tile. See the struct-level
    /// diagram for the numbering.
    pub fn octagon(&self) -> [Point; 8] {
        let Self {
            tile_width: tw,
            tile_height: th,
            side_offset_x: sox,
            side_offset_y: soy,
            ..
        } = *self;
        [
            Point::new(0, th - soy),
            Point::new(0, soy),
            Point::new(sox, 0),
            Point::new(tw - sox, 0),
            Point::new(tw, soy),
            Point::new(tw, th - soy),
            Point::new(tw - sox, th),
            Point::new(sox, th),
        ]
    }

    /// Can tile math be done on this workspace at all? A zero step would
    /// mean dividing by zero when mapping pixels back to tiles.
    pub(crate) fn is_degenerate(&self) -> bool {
        self.column_width <= 0 || self.row_height <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_x_even() {
        let config = MapConfig {
            orientation: Orientation::Hexagonal,
            stagger_axis: StaggerAxis::X,
            stagger_index: StaggerIndex::Even,
            hex_side_length: 4,
            tile_width: 32,
            tile_height: 32,
        };
        let p = RenderParams::new(&config, &Workspace::new(3, 3, 32, 32));
        assert_eq!(p.side_length_x, 4);
        assert_eq!(p.side_length_y, 0);
        assert_eq!(p.side_offset_x, 14);
        assert_eq!(p.side_offset_y, 16);
        assert_eq!(p.column_width, 18);
        assert_eq!(p.row_height, 16);
        assert!(p.stagger_even());
        assert!(p.do_stagger_x(0));
        assert!(!p.do_stagger_x(1));
        // Rows never stagger on an X-staggered map
        assert!(!p.do_stagger_y(0));
    }

    #[test]
    fn test_odd_tile_size_rounds_down() {
        let config = MapConfig::default();
        let p = RenderParams::new(&config, &Workspace::new(1, 1, 33, 31));
        assert_eq!(p.tile_width, 32);
        assert_eq!(p.tile_height, 30);
    }

    #[test]
    fn test_non_hexagonal_has_no_sides() {
        let config = MapConfig {
            orientation: Orientation::Staggered,
            ..Default::default()
        };
        let p = RenderParams::new(&config, &Workspace::new(1, 1, 32, 16));
        assert_eq!((p.side_length_x, p.side_length_y), (0, 0));
        assert_eq!((p.column_width, p.row_height), (16, 8));
    }

    #[test]
    fn test_value_equality() {
        let config = MapConfig::default();
        let workspace = Workspace::new(4, 4, 32, 32);
        assert_eq!(
            RenderParams::new(&config, &workspace),
            RenderParams::new(&config, &workspace)
        );
    }

    #[test]
    fn test_degenerate() {
        let config = MapConfig::default();
        assert!(
            RenderParams::new(&config, &Workspace::default()).is_degenerate()
        );
    }
}
