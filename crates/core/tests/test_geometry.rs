use mapgrid::{CellPoint, Grid, GridConfig, Topology, ZonePoint};
use strum::IntoEnumIterator;

const SIZES: &[i32] = &[9, 37, 50, 51, 100, 333];
const OFFSETS: &[(i32, i32)] = &[(0, 0), (7, -3), (-120, 45)];

/// Build a grid for every combination of topology, size and offset
fn all_grids() -> impl Iterator<Item = Grid> {
    Topology::iter().flat_map(|topology| {
        SIZES.iter().flat_map(move |&size| {
            OFFSETS.iter().map(move |&(offset_x, offset_y)| {
                Grid::new(GridConfig {
                    topology,
                    size,
                    offset_x,
                    offset_y,
                    ..Default::default()
                })
                .unwrap()
            })
        })
    })
}

fn cells() -> impl Iterator<Item = CellPoint> {
    (-12..=12).flat_map(|x| (-12..=12).map(move |y| CellPoint::new(x, y)))
}

#[test]
fn test_round_trip() {
    for grid in all_grids() {
        for cell in cells() {
            let zone = grid.cell_to_zone(cell);
            assert_eq!(
                grid.zone_to_cell(zone),
                cell,
                "{:?}: {} -> {} didn't come back",
                grid.config(),
                cell,
                zone
            );
        }
    }
}

#[test]
fn test_bounds_consistency() {
    for grid in all_grids() {
        let first = grid.bounds(CellPoint::ORIGIN);
        assert!(first.width >= grid.cell_width().floor() as i32);
        assert!(first.height >= grid.cell_height().floor() as i32);
        for cell in cells() {
            let zone = grid.cell_to_zone(cell);
            let bounds = grid.bounds(cell);
            assert_eq!(bounds.origin(), zone + grid.cell_offset());
            assert_eq!(
                (bounds.width, bounds.height),
                (first.width, first.height)
            );
            assert!(
                bounds.contains(zone),
                "{:?}: {} not inside {}",
                grid.config(),
                zone,
                bounds
            );
        }
    }
}

#[test]
fn test_bounds_contain_their_points() {
    for grid in all_grids() {
        let size = grid.size();
        let step = (size / 25).max(1) as usize;
        for x in (-2 * size..=2 * size).step_by(step) {
            for y in (-2 * size..=2 * size).step_by(step) {
                let point = ZonePoint::new(x, y);
                let cell = grid.zone_to_cell(point);
                let bounds = grid.bounds(cell);
                assert!(
                    bounds.contains(point),
                    "{:?}: {} is in cell {}, but not inside {}",
                    grid.config(),
                    point,
                    cell,
                    bounds
                );
            }
        }
    }
}

#[test]
fn test_bounds_contain_cell_corners() {
    let isometric = Grid::new(GridConfig {
        topology: Topology::Isometric,
        size: 9,
        ..Default::default()
    })
    .unwrap();
    let corner = ZonePoint::new(-18, -9);
    let cell = isometric.zone_to_cell(corner);
    assert_eq!(cell, CellPoint::new(-2, 0));
    assert!(isometric.bounds(cell).contains(corner));

    let hex = Grid::new(GridConfig {
        topology: Topology::HexHorizontal,
        size: 50,
        ..Default::default()
    })
    .unwrap();
    let corner = ZonePoint::new(-150, -43);
    let cell = hex.zone_to_cell(corner);
    assert_eq!(cell, CellPoint::new(-4, -1));
    assert!(hex.bounds(cell).contains(corner));
}

#[test]
fn test_conversions_at_extremes() {
    let limits = [i32::MIN, -1, 0, i32::MAX];
    for grid in all_grids() {
        for &x in &limits {
            for &y in &limits {
                let point = ZonePoint::new(x, y);
                let cell = grid.zone_to_cell(point);
                grid.bounds(cell);
                grid.nearest_vertex(point);
                let cell = CellPoint::new(x, y);
                grid.cell_to_zone(cell);
                grid.bounds(cell);
            }
        }
    }

    let square = Grid::new(GridConfig {
        size: 50,
        offset_x: 7,
        offset_y: 0,
        ..Default::default()
    })
    .unwrap();
    assert_eq!(
        square.zone_to_cell(ZonePoint::new(i32::MIN, 0)),
        CellPoint::new(((i32::MIN as i64 - 7).div_euclid(50)) as i32, 0)
    );
    assert_eq!(
        square.cell_to_zone(CellPoint::new(i32::MAX, i32::MIN)),
        ZonePoint::new(i32::MAX, i32::MIN)
    );
}

#[test]
fn test_isometric_fixture() {
    let grid = Grid::new(GridConfig {
        topology: Topology::Isometric,
        size: 50,
        ..Default::default()
    })
    .unwrap();

    assert_eq!(grid.cell_to_zone(CellPoint::new(0, 0)), ZonePoint::new(0, 25));
    for &(x, y) in &[(0, 0), (-49, 25), (49, 25), (0, 49)] {
        assert_eq!(
            grid.zone_to_cell(ZonePoint::new(x, y)),
            CellPoint::new(0, 0),
            "({}, {}) should be in the origin cell",
            x,
            y
        );
    }
    // The right corner belongs to the next cell over
    assert_ne!(
        grid.zone_to_cell(ZonePoint::new(50, 25)),
        CellPoint::new(0, 0)
    );
}

#[test]
fn test_gridless_is_identity() {
    let grid = Grid::new(GridConfig {
        topology: Topology::Gridless,
        size: 40,
        ..Default::default()
    })
    .unwrap();
    let point = ZonePoint::new(-17, 93);
    assert_eq!(grid.zone_to_cell(point), CellPoint::new(-17, 93));
    assert_eq!(grid.cell_to_zone(CellPoint::new(-17, 93)), point);
    assert_eq!(grid.nearest_vertex(point), point);
    let bounds = grid.bounds(CellPoint::new(-17, 93));
    assert_eq!((bounds.x, bounds.y), (-17, 93));
    assert_eq!((bounds.width, bounds.height), (40, 40));
}

#[test]
fn test_hex_dimensions() {
    let horizontal = Grid::new(GridConfig {
        topology: Topology::HexHorizontal,
        ..Default::default()
    })
    .unwrap();
    let vertical = Grid::new(GridConfig {
        topology: Topology::HexVertical,
        ..Default::default()
    })
    .unwrap();

    // Bounds are inclusive of the shared edges and points
    assert_eq!(horizontal.bounds(CellPoint::new(0, 0)).width, 51);
    assert_eq!(horizontal.bounds(CellPoint::new(0, 0)).height, 59);
    assert_eq!(vertical.bounds(CellPoint::new(0, 0)).width, 59);
    assert_eq!(vertical.bounds(CellPoint::new(0, 0)).height, 51);

    // Odd rows/columns are pushed along by half a cell
    assert_eq!(
        horizontal.cell_to_zone(CellPoint::new(0, 1)),
        ZonePoint::new(50, 72)
    );
    assert_eq!(
        vertical.cell_to_zone(CellPoint::new(1, 0)),
        ZonePoint::new(72, 50)
    );
}

#[test]
fn test_nearest_vertex_is_idempotent() {
    for grid in all_grids() {
        let size = grid.size();
        let step = (size / 10).max(1) as usize;
        for x in (-2 * size..=2 * size).step_by(step) {
            for y in (-2 * size..=2 * size).step_by(step) {
                let vertex = grid.nearest_vertex(ZonePoint::new(x, y));
                assert_eq!(
                    grid.nearest_vertex(vertex),
                    vertex,
                    "{:?}: snapping ({}, {}) gave {}, which isn't stable",
                    grid.config(),
                    x,
                    y,
                    vertex
                );
            }
        }
    }
}

#[test]
fn test_nearest_vertex_fixtures() {
    let horizontal = Grid::new(GridConfig {
        topology: Topology::HexHorizontal,
        ..Default::default()
    })
    .unwrap();
    assert_eq!(
        horizontal.nearest_vertex(ZonePoint::new(25, 3)),
        ZonePoint::new(25, 0)
    );
    assert_eq!(
        horizontal.nearest_vertex(ZonePoint::new(5, 18)),
        ZonePoint::new(0, 14)
    );

    let vertical = Grid::new(GridConfig {
        topology: Topology::HexVertical,
        ..Default::default()
    })
    .unwrap();
    assert_eq!(
        vertical.nearest_vertex(ZonePoint::new(1, 24)),
        ZonePoint::new(0, 25)
    );

    let square = Grid::new(GridConfig::default()).unwrap();
    assert_eq!(
        square.nearest_vertex(ZonePoint::new(74, -26)),
        ZonePoint::new(50, -50)
    );
}
