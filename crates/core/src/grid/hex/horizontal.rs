//! Nearest-vertex snapping for horizontal hexes (rows, points up).

use crate::{
    grid::{
        hex::HexLayout,
        point::{CellPoint, ZonePoint},
        Layout,
    },
    util::{is_odd, round_half_up, saturate},
};

/// The four vertices the snapping tree can land on, as `(u, v)` offsets from
/// the top-left of a cell's bounding frame. The two right-hand vertices
/// aren't here because they're always reached through the frame of the
/// neighbor on that side.
struct FrameVertices {
    top: (i32, i32),
    upper_left: (i32, i32),
    lower_left: (i32, i32),
    bottom: (i32, i32),
}

impl FrameVertices {
    fn new(layout: &HexLayout) -> Self {
        let geometry = layout.geometry();
        let projection = geometry.edge_projection();
        let edge = geometry.edge_length();
        let center_v = round_half_up(geometry.v_radius());
        Self {
            top: (0, center_v),
            upper_left: (round_half_up(projection), 0),
            lower_left: (round_half_up(projection + edge), 0),
            bottom: (round_half_up(projection * 2.0 + edge), center_v),
        }
    }
}

/// Rounded cell centers don't always fall the same distance apart, which
/// leaves some rows one unit taller than the rest. Any vertex that sits on
/// the bottom half of a cell has to absorb that extra unit.
fn is_tall_row(layout: &HexLayout, cell: CellPoint) -> bool {
    let geometry = layout.geometry();
    let standard = geometry.row_pitch() as i64;
    let below = CellPoint::new(cell.x, cell.y + 1);
    layout.cell_to_zone(below).y as i64 - layout.cell_to_zone(cell).y as i64
        > standard
}

/// Place a frame vertex of `cell` into zone space
fn vertex_of(
    layout: &HexLayout,
    vertex: (i32, i32),
    cell: CellPoint,
    lower_half: bool,
) -> ZonePoint {
    let (u, v) = vertex;
    let origin = layout.cell_to_zone(CellPoint::ORIGIN);
    let center = layout.cell_to_zone(cell);
    let (offset_x, offset_y) = layout.offset();
    let extra = if lower_half && is_tall_row(layout, cell) {
        1
    } else {
        0
    };
    ZonePoint::new(
        saturate(
            v as i64 + center.x as i64 - origin.x as i64 + offset_x as i64,
        ),
        saturate(
            u as i64 + center.y as i64 - origin.y as i64
                + offset_y as i64
                + extra,
        ),
    )
}

/// Snap a point to one of the six vertices of the cell that contains it.
/// The containing cell is split into regions by the point's displacement
/// from the center: far enough up or down lands on the top or bottom point,
/// far enough left or right lands on one of the four side vertices, and
/// anything else stays at the center. Vertices on the right side and on odd
/// rows are expressed through the neighboring cell that owns them in its
/// frame.
pub(super) fn nearest_vertex(layout: &HexLayout, point: ZonePoint) -> ZonePoint {
    let geometry = layout.geometry();
    let vertices = FrameVertices::new(layout);
    let mut cell = layout.zone_to_cell(point);
    let odd_row = is_odd(cell.y);

    // Measure from the exact center, not the rounded one
    let (offset_x, offset_y) = layout.offset();
    let center = geometry.center(cell.y, cell.x);
    let dx = point.x as f64 - offset_x as f64 - center.y;
    let dy = point.y as f64 - offset_y as f64 - center.x;

    // The side vertices sit exactly half a U radius above/below the center,
    // so this threshold needs some slack for points that were already
    // snapped and rounded
    let half_height = geometry.u_radius() / 2.0 + 0.5;
    let half_edge = geometry.edge_length() / 2.0;

    if dy.abs() > half_height {
        // Top or bottom point
        return if dy < 0.0 {
            if odd_row {
                cell.y -= 1;
                cell.x += 1;
                vertex_of(layout, vertices.lower_left, cell, true)
            } else {
                vertex_of(layout, vertices.top, cell, false)
            }
        } else if odd_row {
            cell.y += 1;
            cell.x += 1;
            vertex_of(layout, vertices.upper_left, cell, false)
        } else {
            vertex_of(layout, vertices.bottom, cell, true)
        };
    }

    if dx.abs() > half_edge {
        // One of the side vertices
        return match (dy < 0.0, dx < 0.0) {
            // Upper left
            (true, true) => {
                if odd_row {
                    cell.y -= 1;
                    vertex_of(layout, vertices.bottom, cell, true)
                } else {
                    vertex_of(layout, vertices.upper_left, cell, false)
                }
            }
            // Upper right
            (true, false) => {
                if odd_row {
                    cell.y -= 1;
                    cell.x += 1;
                    vertex_of(layout, vertices.bottom, cell, true)
                } else {
                    cell.x += 1;
                    vertex_of(layout, vertices.upper_left, cell, false)
                }
            }
            // Lower left
            (false, true) => {
                if odd_row {
                    cell.y += 1;
                    vertex_of(layout, vertices.top, cell, false)
                } else {
                    vertex_of(layout, vertices.lower_left, cell, true)
                }
            }
            // Lower right
            (false, false) => {
                if odd_row {
                    cell.y += 1;
                    cell.x += 1;
                    vertex_of(layout, vertices.top, cell, false)
                } else {
                    cell.x += 1;
                    vertex_of(layout, vertices.lower_left, cell, true)
                }
            }
        };
    }

    layout.cell_to_zone(cell)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::hex::HexOrientation;

    fn layout() -> HexLayout {
        HexLayout::new(HexOrientation::Horizontal, 50, 0, 0)
    }

    #[test]
    fn test_top_point() {
        let layout = layout();
        let vertex = nearest_vertex(&layout, ZonePoint::new(25, 3));
        assert_eq!(vertex, ZonePoint::new(25, 0));
        assert_eq!(nearest_vertex(&layout, vertex), vertex);
    }

    #[test]
    fn test_upper_left_vertex() {
        let layout = layout();
        let vertex = nearest_vertex(&layout, ZonePoint::new(5, 18));
        assert_eq!(vertex, ZonePoint::new(0, 14));
        assert_eq!(nearest_vertex(&layout, vertex), vertex);
    }

    #[test]
    fn test_all_vertices() {
        let layout = layout();
        // Cell (0, 0) is centered at (25, 29)
        let cases = [
            ((25, 3), (25, 0)),
            ((46, 20), (50, 14)),
            ((46, 40), (50, 43)),
            ((25, 56), (25, 58)),
            ((4, 40), (0, 43)),
            ((5, 18), (0, 14)),
        ];
        for &((x, y), (vx, vy)) in &cases {
            let vertex = nearest_vertex(&layout, ZonePoint::new(x, y));
            assert_eq!(vertex, ZonePoint::new(vx, vy), "snapping ({}, {})", x, y);
            assert_eq!(nearest_vertex(&layout, vertex), vertex);
        }
    }

    #[test]
    fn test_center_stays() {
        let layout = layout();
        let center = layout.cell_to_zone(CellPoint::new(2, 3));
        assert_eq!(nearest_vertex(&layout, center), center);
    }

    #[test]
    fn test_offset() {
        let plain = layout();
        let shifted = HexLayout::new(HexOrientation::Horizontal, 50, 7, -3);
        let point = ZonePoint::new(5, 18);
        assert_eq!(
            nearest_vertex(&shifted, ZonePoint::new(point.x + 7, point.y - 3)),
            ZonePoint::new(7, 11)
        );
        assert_eq!(nearest_vertex(&plain, point), ZonePoint::new(0, 14));
    }
}
