use hexrender::{
    HexagonalRenderer, MapConfig, Orientation, StaggerAxis, StaggerIndex,
};
use validator::ValidationErrors;

fn error_fields(config: MapConfig) -> Vec<&'static str> {
    let err = HexagonalRenderer::new(config).unwrap_err();
    let validation_errors = err.downcast::<ValidationErrors>().unwrap();
    let mut fields = validation_errors
        .errors()
        .keys()
        .copied()
        .collect::<Vec<&str>>();
    fields.sort_unstable();
    fields
}

#[test]
fn test_map_config_validation() {
    let config = MapConfig {
        orientation: Orientation::Hexagonal,
        stagger_axis: StaggerAxis::Y,
        stagger_index: StaggerIndex::Odd,
        hex_side_length: -1, // invalid
        tile_width: 0,       // invalid
        tile_height: 32,     // valid
    };
    assert_eq!(error_fields(config), vec!["hex_side_length", "tile_width"]);
}

#[test]
fn test_side_length_longer_than_tile() {
    let config = MapConfig {
        stagger_axis: StaggerAxis::Y,
        hex_side_length: 33,
        tile_width: 64,
        tile_height: 32,
        ..Default::default()
    };
    // Struct-level errors don't belong to any one field
    assert_eq!(error_fields(config), vec!["__all__"]);
}

#[test]
fn test_valid_configs() {
    HexagonalRenderer::new(MapConfig::default()).unwrap();
    // Zero side length is allowed, and gives diamond-shaped cells
    HexagonalRenderer::new(MapConfig {
        hex_side_length: 0,
        ..Default::default()
    })
    .unwrap();
    // Side length equal to the tile size gives rectangles
    HexagonalRenderer::new(MapConfig {
        stagger_axis: StaggerAxis::X,
        hex_side_length: 32,
        ..Default::default()
    })
    .unwrap();
}

#[test]
fn test_config_from_json() {
    let config: MapConfig = serde_json::from_str(
        r#"{
            "stagger_axis": "x",
            "stagger_index": "even",
            "hex_side_length": 4
        }"#,
    )
    .unwrap();
    assert_eq!(
        config,
        MapConfig {
            stagger_axis: StaggerAxis::X,
            stagger_index: StaggerIndex::Even,
            hex_side_length: 4,
            ..Default::default()
        }
    );
}
