//! Nearest-vertex snapping for vertical hexes (columns, points to the sides).

use crate::{
    grid::{hex::HexGeometry, point::ZonePoint},
    util::saturate,
};

/// Snap a point onto the vertex lattice of a vertical hex grid. The lattice
/// is treated as a skewed grid with one axis running down-right and the
/// other up-right. The point is floored into lattice coordinates and then
/// mapped back into zone space.
pub(super) fn nearest_vertex(
    geometry: &HexGeometry,
    offset_x: i32,
    offset_y: i32,
    point: ZonePoint,
) -> ZonePoint {
    let half_width = geometry.u_radius() / 2.0;
    let v_radius = geometry.v_radius();
    let x = point.x as f64 - offset_x as f64;
    let y = point.y as f64 - offset_y as f64;

    let lattice_y = ((y / v_radius + x / half_width) / 2.0).floor();
    let lattice_x = ((x / half_width - y / v_radius) / 2.0).floor();

    let zone_y = (lattice_y - lattice_x) * v_radius;
    let zone_x = (lattice_x + lattice_y) * half_width + half_width;
    ZonePoint::new(
        saturate(zone_x as i64 + offset_x as i64),
        saturate(zone_y as i64 + offset_y as i64),
    )
}
