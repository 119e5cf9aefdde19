use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use validator::{Validate, ValidationError};

/// Map-wide geometry settings. These come from the map document and are
/// read-only from the renderer's point of view. A renderer is created from
/// one of these (see [crate::HexagonalRenderer::new]) and holds onto it for
/// its whole life.
///
/// Note that the tile size here is the *nominal* map tile size. Individual
/// draw calls are parametrized by a [crate::Workspace], which carries its own
/// tile size.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_hex_side_length"))]
#[serde(default)]
pub struct MapConfig {
    /// Overall projection of the map. The stagger side lengths only apply
    /// to [Orientation::Hexagonal] maps; for anything else they're zero.
    pub orientation: Orientation,

    /// The axis along which every other row/column is shifted
    pub stagger_axis: StaggerAxis,

    /// Whether the even or the odd rows/columns are the shifted ones
    pub stagger_index: StaggerIndex,

    /// Pixel length of the flat hexagon side that runs parallel to the
    /// stagger axis. Zero gives diamond-like cells.
    #[validate(range(min = 0))]
    pub hex_side_length: i32,

    #[validate(range(min = 1))]
    pub tile_width: i32,

    #[validate(range(min = 1))]
    pub tile_height: i32,
}

impl MapConfig {
    /// The tile dimension that the hex side length runs along
    pub fn stagger_tile_dimension(&self) -> i32 {
        match self.stagger_axis {
            StaggerAxis::X => self.tile_width,
            StaggerAxis::Y => self.tile_height,
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Hexagonal,
            stagger_axis: StaggerAxis::Y,
            stagger_index: StaggerIndex::Odd,
            hex_side_length: 16,
            tile_width: 32,
            tile_height: 32,
        }
    }
}

/// A side length longer than the tile would give negative corner offsets
fn validate_hex_side_length(config: &MapConfig) -> Result<(), ValidationError> {
    if config.hex_side_length > config.stagger_tile_dimension() {
        let mut error = ValidationError::new("hex_side_length");
        error.message = Some(
            format!(
                "hex side length {} exceeds the tile {} of {}",
                config.hex_side_length,
                match config.stagger_axis {
                    StaggerAxis::X => "width",
                    StaggerAxis::Y => "height",
                },
                config.stagger_tile_dimension()
            )
            .into(),
        );
        return Err(error);
    }
    Ok(())
}

/// Map projection. Only hexagonal maps get a hex side length; the others are
/// listed so map settings can round-trip, but this crate only renders hexes.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Orientation {
    Orthogonal,
    Isometric,
    Staggered,
    Hexagonal,
}

/// The axis along which alternating rows/columns are pixel-shifted.
///
/// - [StaggerAxis::X]: columns are shifted down, so hexes have flat tops
/// - [StaggerAxis::Y]: rows are shifted right, so hexes have pointy tops
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StaggerAxis {
    X,
    Y,
}

/// Which parity of index along the stagger axis is the shifted one
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StaggerIndex {
    Odd,
    Even,
}

impl StaggerIndex {
    /// Is the row/column at this index shifted? This is the one and only
    /// parity check in the crate; coordinate conversion, neighbor lookup and
    /// all the draw sweeps go through here so they can never disagree.
    /// Negative indices work as expected (`-1` is odd).
    pub const fn is_staggered(self, index: i32) -> bool {
        let odd = index & 1 != 0;
        match self {
            Self::Odd => odd,
            Self::Even => !odd,
        }
    }
}
