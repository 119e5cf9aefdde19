use assert_approx_eq::assert_approx_eq;
use hexrender::{
    HexagonalRenderer, MapConfig, Point, PointF, Size, StaggerAxis,
    StaggerIndex, Workspace,
};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use strum::IntoEnumIterator;

const TILE_SIZES: [(i32, i32); 3] = [(32, 32), (24, 40), (64, 32)];

/// Every combination of stagger settings, side length and tile shape that
/// the tests below sweep over
fn renderers() -> Vec<(HexagonalRenderer, Workspace)> {
    let mut renderers = Vec::new();
    for axis in StaggerAxis::iter() {
        for index in StaggerIndex::iter() {
            for &side in &[0, 4, 16] {
                for &(tile_width, tile_height) in &TILE_SIZES {
                    let config = MapConfig {
                        stagger_axis: axis,
                        stagger_index: index,
                        hex_side_length: side,
                        tile_width,
                        tile_height,
                        ..Default::default()
                    };
                    renderers.push((
                        HexagonalRenderer::new(config).unwrap(),
                        Workspace::new(8, 8, tile_width, tile_height),
                    ));
                }
            }
        }
    }
    renderers
}

#[test]
fn test_stagger_x_even_scenario() {
    let renderer = HexagonalRenderer::new(MapConfig {
        stagger_axis: StaggerAxis::X,
        stagger_index: StaggerIndex::Even,
        hex_side_length: 4,
        tile_width: 32,
        tile_height: 32,
        ..Default::default()
    })
    .unwrap();
    let workspace = Workspace::new(3, 3, 32, 32);

    let p = renderer.render_params(&workspace);
    assert_eq!(p.side_offset_x, 14);
    assert_eq!(p.column_width, 18);
    assert_eq!(p.row_height, 16);
    assert_eq!(renderer.work_size(&workspace), Size::new(68, 112));

    // Column 0 is the pushed one
    let pos = renderer.tile_to_screen_coords(0.0, 0.0, &workspace);
    assert_approx_eq!(pos.x, 0.0);
    assert_approx_eq!(pos.y, 16.0);
    let pos = renderer.tile_to_screen_coords(1.0, 0.0, &workspace);
    assert_approx_eq!(pos.x, 18.0);
    assert_approx_eq!(pos.y, 0.0);
    let pos = renderer.tile_to_pixel_coords(2.0, 2.0, &workspace);
    assert_approx_eq!(pos.x, 36.0);
    assert_approx_eq!(pos.y, 80.0);

    let tile = renderer.screen_to_tile_coords(16.0, 32.0, &workspace);
    assert_approx_eq!(tile.x, 0.0);
    assert_approx_eq!(tile.y, 0.0);
    let tile = renderer.pixel_to_tile_coords(34.0, 16.0, &workspace);
    assert_approx_eq!(tile.x, 1.0);
    assert_approx_eq!(tile.y, 0.0);
}

#[test]
fn test_round_trip_centroid() {
    for (renderer, workspace) in renderers() {
        for y in -3..8 {
            for x in -3..8 {
                let tile = Point::new(x, y);
                let center = renderer.tile_to_screen(tile, &workspace)
                    + Point::new(
                        workspace.tile_width() / 2,
                        workspace.tile_height() / 2,
                    );
                assert_eq!(
                    renderer.screen_to_tile(center, &workspace),
                    tile,
                    "{:?}",
                    renderer.config()
                );
            }
        }
    }
}

#[test]
fn test_round_trip_near_centroid() {
    let mut rng = Pcg64::seed_from_u64(1234);
    for (renderer, workspace) in renderers() {
        let p = renderer.render_params(&workspace);
        // Well inside the hexagon, nearest-center always agrees with the
        // tile shape
        let radius = f64::from(p.column_width.min(p.row_height)) / 3.0;

        for y in -2..6 {
            for x in -2..6 {
                let origin = renderer.tile_to_screen_coords(
                    f64::from(x),
                    f64::from(y),
                    &workspace,
                );
                let center = PointF::new(
                    origin.x + f64::from(p.tile_width) / 2.0,
                    origin.y + f64::from(p.tile_height) / 2.0,
                );
                for _ in 0..5 {
                    let sample = PointF::new(
                        center.x + rng.gen_range(-radius..radius),
                        center.y + rng.gen_range(-radius..radius),
                    );
                    let tile = renderer.screen_to_tile_coords(
                        sample.x, sample.y, &workspace,
                    );
                    assert_eq!(
                        tile,
                        PointF::new(f64::from(x), f64::from(y)),
                        "sample {} in {:?}",
                        sample,
                        renderer.config()
                    );
                }
            }
        }
    }
}

#[test]
fn test_screen_to_tile_is_integral() {
    let mut rng = Pcg64::seed_from_u64(99);
    for (renderer, workspace) in renderers() {
        for _ in 0..50 {
            let tile = renderer.screen_to_tile_coords(
                rng.gen_range(-500.0..500.0),
                rng.gen_range(-500.0..500.0),
                &workspace,
            );
            assert_eq!(tile.x.fract(), 0.0);
            assert_eq!(tile.y.fract(), 0.0);
        }
    }
}

#[test]
fn test_tile_to_screen_floors() {
    let renderer = HexagonalRenderer::new(MapConfig::default()).unwrap();
    let workspace = Workspace::new(4, 4, 32, 32);
    assert_eq!(
        renderer.tile_to_screen_coords(1.99, 2.5, &workspace),
        renderer.tile_to_screen_coords(1.0, 2.0, &workspace)
    );
    assert_eq!(
        renderer.tile_to_screen_coords(-0.5, 0.0, &workspace),
        renderer.tile_to_screen_coords(-1.0, 0.0, &workspace)
    );
}

#[test]
fn test_odd_tile_size() {
    // Odd sizes are rounded down, so halves stay whole pixels
    let renderer = HexagonalRenderer::new(MapConfig {
        tile_width: 33,
        tile_height: 33,
        ..Default::default()
    })
    .unwrap();
    let workspace = Workspace::new(4, 4, 33, 33);
    assert_eq!(
        renderer.tile_to_screen(Point::new(1, 1), &workspace),
        Point::new(48, 24)
    );
}
