use hexrender::{
    HexagonalRenderer, MapConfig, Point, PointF, Polygon, StaggerAxis,
    StaggerIndex, Workspace,
};
use std::collections::HashSet;
use strum::IntoEnumIterator;

const WIDTH: i32 = 4;
const HEIGHT: i32 = 4;

fn renderer(axis: StaggerAxis, index: StaggerIndex) -> HexagonalRenderer {
    HexagonalRenderer::new(MapConfig {
        stagger_axis: axis,
        stagger_index: index,
        hex_side_length: 16,
        tile_width: 32,
        tile_height: 32,
        ..Default::default()
    })
    .unwrap()
}

/// Is the point strictly inside the convex polygon? Points on an edge don't
/// count. Zero-length edges are skipped.
fn strictly_inside(polygon: &Polygon, point: PointF) -> bool {
    let points = polygon.points();
    let mut sign = 0.0;
    for (i, a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        if *a == b {
            continue;
        }
        let cross =
            (b.x - a.x) * (point.y - a.y) - (b.y - a.y) * (point.x - a.x);
        if cross == 0.0 || (sign != 0.0 && cross.signum() != sign) {
            return false;
        }
        sign = cross.signum();
    }
    true
}

fn vertices(polygon: &Polygon) -> HashSet<Point> {
    polygon.points().iter().map(|p| p.to_point()).collect()
}

#[test]
fn test_no_overlap() {
    for axis in StaggerAxis::iter() {
        for index in StaggerIndex::iter() {
            let renderer = renderer(axis, index);
            let workspace = Workspace::new(WIDTH, HEIGHT, 32, 32);
            let size = renderer.work_size(&workspace);
            let polygons: Vec<Polygon> = (0..HEIGHT)
                .flat_map(|y| (0..WIDTH).map(move |x| (x, y)))
                .map(|(x, y)| renderer.tile_to_screen_polygon(x, y, &workspace))
                .collect();

            // With side 16 on a 32px tile, no pixel center sits on an edge,
            // so every sampled pixel is inside at most one hexagon
            let mut counts = vec![0; polygons.len()];
            for py in 0..size.height {
                for px in 0..size.width {
                    let sample =
                        PointF::new(f64::from(px) + 0.5, f64::from(py) + 0.5);
                    let containing: Vec<usize> = polygons
                        .iter()
                        .enumerate()
                        .filter(|(_, polygon)| strictly_inside(polygon, sample))
                        .map(|(i, _)| i)
                        .collect();
                    assert!(
                        containing.len() <= 1,
                        "{} is inside {:?} ({:?} {:?})",
                        sample,
                        containing,
                        axis,
                        index
                    );
                    for i in containing {
                        counts[i] += 1;
                    }
                }
            }

            // A 32x32 tile minus its four 8x16 corner triangles
            assert!(counts.iter().all(|&count| count == 768), "{:?}", counts);
        }
    }
}

#[test]
fn test_no_gap() {
    for axis in StaggerAxis::iter() {
        for index in StaggerIndex::iter() {
            let renderer = renderer(axis, index);
            let workspace = Workspace::new(WIDTH, HEIGHT, 32, 32);
            let in_grid = |p: Point| {
                p.x >= 0 && p.y >= 0 && p.x < WIDTH && p.y < HEIGHT
            };

            for y in 0..HEIGHT {
                for x in 0..WIDTH {
                    let polygon =
                        renderer.tile_to_screen_polygon(x, y, &workspace);
                    let mut neighbors = vec![
                        renderer.top_left(x, y),
                        renderer.top_right(x, y),
                        renderer.bottom_left(x, y),
                        renderer.bottom_right(x, y),
                    ];
                    // The two neighbors along the non-staggered direction
                    neighbors.push(match axis {
                        StaggerAxis::X => Point::new(x, y + 1),
                        StaggerAxis::Y => Point::new(x + 1, y),
                    });

                    for neighbor in
                        neighbors.into_iter().filter(|&n| in_grid(n))
                    {
                        let other = renderer.tile_to_screen_polygon(
                            neighbor.x,
                            neighbor.y,
                            &workspace,
                        );
                        let shared: Vec<Point> = vertices(&polygon)
                            .intersection(&vertices(&other))
                            .copied()
                            .collect();
                        // Exactly one full edge in common
                        assert_eq!(
                            shared.len(),
                            2,
                            "({}, {}) and {} share {:?}",
                            x,
                            y,
                            neighbor,
                            shared
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn test_polygon_shape() {
    let renderer = renderer(StaggerAxis::X, StaggerIndex::Odd);
    let workspace = Workspace::new(WIDTH, HEIGHT, 32, 32);
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            let polygon = renderer.tile_to_screen_polygon(x, y, &workspace);
            assert_eq!(polygon.len(), 8);
            // Two corners coincide, leaving a hexagon
            assert_eq!(vertices(&polygon).len(), 6);

            let origin = renderer.tile_to_screen_coords(
                f64::from(x),
                f64::from(y),
                &workspace,
            );
            let bounds = polygon.bounding_rect();
            assert_eq!((bounds.x, bounds.y), (origin.x, origin.y));
            assert_eq!((bounds.width, bounds.height), (32.0, 32.0));
        }
    }
}
