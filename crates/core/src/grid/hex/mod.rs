//! Hex grid geometry, shared by both orientations.
//!
//! ## U/V Axes
//!
//! Hex math is done in a local two-axis system that doesn't care which way
//! the hexes are turned:
//!
//! - **U** runs through the hex _points_. Hexes are stacked in rows along U,
//!   and neighboring rows interlock, so one row is `edge_length +
//!   edge_projection` (1.5 vertex radii) after the previous one.
//! - **V** runs across the hex _flats_. Within a row, cells sit one full
//!   edge-to-edge width apart.
//!
//! ```text
//!        /\         ^
//!       /  \        | edge_projection
//!      |    |       -
//!      |    |       | edge_length
//!      |    |       -
//!       \  /
//!        \/
//!      |-----| 2 * v_radius
//! ```
//!
//! Odd rows are pushed half a cell (`v_radius`) along V, which is what makes
//! neighboring rows interlock. This parity rule shows up everywhere: cell
//! conversions, nearest-vertex snapping, footprints (see
//! [OffsetTranslator](crate::OffsetTranslator)) and neighbor lookups.
//!
//! A [horizontal](HexOrientation::Horizontal) grid has rows of hexes with
//! points up (U is zone y, V is zone x). A [vertical](HexOrientation::Vertical)
//! grid has columns of hexes with points to the side (U is zone x, V is
//! zone y).

mod horizontal;
mod vertical;

use crate::{
    grid::{
        movement::{self, MovementKey},
        point::{CellPoint, ZonePoint, ZoneRect, ZoneVector},
        Layout,
    },
    util::{is_odd, round_half_up, saturate},
};
use nalgebra::Point2;

/// Ratio between the edge-to-edge and vertex-to-vertex widths of a regular
/// hexagon, i.e. `sqrt(3) / 2`
const REGULAR_HEX_RATIO: f64 = 0.866_025_403_784_438_6;

/// Orientation-independent measurements of a single hex. Everything is
/// derived from the grid size (the edge-to-edge width) when the grid is
/// built, and never changes after that.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HexGeometry {
    size: i32,
    v_radius: f64,
    edge_length: f64,
    edge_projection: f64,
    u_radius: f64,
}

impl HexGeometry {
    pub fn new(size: i32) -> Self {
        let v_radius = size as f64 / 2.0;
        let edge_length = v_radius / REGULAR_HEX_RATIO;
        let edge_projection =
            (edge_length * edge_length - v_radius * v_radius).sqrt();
        Self {
            size,
            v_radius,
            edge_length,
            edge_projection,
            u_radius: edge_length / 2.0 + edge_projection,
        }
    }

    /// Center-to-vertex distance, along U
    pub fn u_radius(&self) -> f64 {
        self.u_radius
    }

    /// Center-to-edge distance, along V
    pub fn v_radius(&self) -> f64 {
        self.v_radius
    }

    /// Length of one side of the hex
    pub fn edge_length(&self) -> f64 {
        self.edge_length
    }

    /// How far an angled side rises along U
    pub fn edge_projection(&self) -> f64 {
        self.edge_projection
    }

    /// Distance along U between the centers of two neighboring rows
    pub fn row_pitch(&self) -> f64 {
        self.edge_length + self.edge_projection
    }

    /// V position of the center of the first cell in a row. Odd rows are
    /// shifted by half a cell.
    fn row_start(&self, row: i32) -> f64 {
        if is_odd(row) {
            self.v_radius * 2.0
        } else {
            self.v_radius
        }
    }

    /// The exact center of a cell, relative to the grid origin. `x` of the
    /// returned point is U, `y` is V.
    pub fn center(&self, row: i32, index: i32) -> Point2<f64> {
        Point2::new(
            row as f64 * self.row_pitch() + self.edge_length,
            index as f64 * self.v_radius * 2.0 + self.row_start(row),
        )
    }

    /// Get the rounded `(u, v)` center of a cell
    pub fn cell_to_uv(&self, row: i32, index: i32) -> (i32, i32) {
        let center = self.center(row, index);
        (round_half_up(center.x), round_half_up(center.y))
    }

    /// Find the `(row, index)` of the cell containing a `(u, v)` point. Hexes
    /// are exactly the Voronoi cells of their centers, so the containing cell
    /// is whichever center is closest.
    pub fn uv_to_cell(&self, u: f64, v: f64) -> (i32, i32) {
        let point = Point2::new(u, v);

        // The true row is always the nearest row (by center) or one of its
        // neighbors, and within a row it's one of the two closest cells
        let nearest_row =
            round_half_up((point.x - self.edge_length) / self.row_pitch());
        let mut best = (nearest_row, 0);
        let mut best_distance = f64::INFINITY;
        for row in (nearest_row - 1)..=(nearest_row + 1) {
            let first = ((point.y - self.row_start(row))
                / (self.v_radius * 2.0))
                .floor() as i32;
            for index in first..=(first + 1) {
                let distance = nalgebra::distance_squared(
                    &point,
                    &self.center(row, index),
                );
                if distance < best_distance {
                    best = (row, index);
                    best_distance = distance;
                }
            }
        }
        best
    }
}

/// Which way the hexes are turned. See the module docs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HexOrientation {
    /// Rows of hexes, points up
    Horizontal,
    /// Columns of hexes, points to the sides
    Vertical,
}

impl HexOrientation {
    /// Map a zone/cell `(x, y)` pair onto `(u, v)`. This is its own inverse,
    /// so it also maps `(u, v)` back to `(x, y)`.
    fn swap(self, x: i32, y: i32) -> (i32, i32) {
        match self {
            Self::Horizontal => (y, x),
            Self::Vertical => (x, y),
        }
    }
}

/// Cell layout for both hex orientations
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HexLayout {
    geometry: HexGeometry,
    orientation: HexOrientation,
    offset_x: i32,
    offset_y: i32,
}

impl HexLayout {
    pub fn new(
        orientation: HexOrientation,
        size: i32,
        offset_x: i32,
        offset_y: i32,
    ) -> Self {
        Self {
            geometry: HexGeometry::new(size),
            orientation,
            offset_x,
            offset_y,
        }
    }

    pub fn geometry(&self) -> &HexGeometry {
        &self.geometry
    }

    /// Grid offset as `(x, y)`
    pub fn offset(&self) -> (i32, i32) {
        (self.offset_x, self.offset_y)
    }

    /// Grid offset as `(u, v)`
    fn offset_uv(&self) -> (i32, i32) {
        self.orientation.swap(self.offset_x, self.offset_y)
    }
}

impl Layout for HexLayout {
    fn cell_to_zone(&self, cell: CellPoint) -> ZonePoint {
        let (row, index) = self.orientation.swap(cell.x, cell.y);
        let (u, v) = self.geometry.cell_to_uv(row, index);
        let (offset_u, offset_v) = self.offset_uv();
        let (x, y) = self.orientation.swap(
            saturate(u as i64 + offset_u as i64),
            saturate(v as i64 + offset_v as i64),
        );
        ZonePoint::new(x, y)
    }

    fn zone_to_cell(&self, point: ZonePoint) -> CellPoint {
        let (u, v) = self.orientation.swap(point.x, point.y);
        let (offset_u, offset_v) = self.offset_uv();
        let (row, index) = self.geometry.uv_to_cell(
            u as f64 - offset_u as f64,
            v as f64 - offset_v as f64,
        );
        let (x, y) = self.orientation.swap(row, index);
        CellPoint::new(x, y)
    }

    fn cell_width(&self) -> f64 {
        match self.orientation {
            HexOrientation::Horizontal => self.geometry.v_radius * 2.0,
            HexOrientation::Vertical => self.geometry.u_radius * 2.0,
        }
    }

    fn cell_height(&self) -> f64 {
        match self.orientation {
            HexOrientation::Horizontal => self.geometry.u_radius * 2.0,
            HexOrientation::Vertical => self.geometry.v_radius * 2.0,
        }
    }

    /// The radii, rounded the same way as cell centers
    fn cell_offset(&self) -> ZoneVector {
        let (x, y) = self.orientation.swap(
            -round_half_up(self.geometry.u_radius),
            -round_half_up(self.geometry.v_radius),
        );
        ZoneVector::new(x, y)
    }

    /// Centers are rounded, so the box reaches one rounded radius out from
    /// the center in each direction, inclusive. That covers every point of
    /// the hex, including the points and edges shared with its neighbors.
    fn bounds(&self, cell: CellPoint) -> ZoneRect {
        let offset = self.cell_offset();
        ZoneRect::around(self.cell_to_zone(cell), -offset.x, -offset.y)
    }

    fn nearest_vertex(&self, point: ZonePoint) -> ZonePoint {
        match self.orientation {
            HexOrientation::Horizontal => horizontal::nearest_vertex(self, point),
            HexOrientation::Vertical => vertical::nearest_vertex(
                &self.geometry,
                self.offset_x,
                self.offset_y,
                point,
            ),
        }
    }

    fn movement_vector(
        &self,
        key: MovementKey,
        snap_to_grid: bool,
    ) -> ZoneVector {
        let HexGeometry {
            size,
            v_radius,
            u_radius,
            ..
        } = self.geometry;
        match self.orientation {
            HexOrientation::Horizontal => movement::hex_horizontal(
                key,
                snap_to_grid,
                size,
                v_radius,
                u_radius,
            ),
            HexOrientation::Vertical => movement::hex_vertical(
                key,
                snap_to_grid,
                size,
                v_radius,
                u_radius,
            ),
        }
    }
}
