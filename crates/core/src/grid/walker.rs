//! Handles for cell-by-cell pathfinding. The grid doesn't run searches
//! itself; it hands out a [ZoneWalker] that knows how cells connect and how
//! to estimate the distance between them.

use crate::{grid::point::CellPoint, util::is_odd};
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use strum::Display as StrumDisplay;

/// Identifier of the zone (map) a walker operates in
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    PartialEq,
    Eq,
    Hash,
    From,
    Serialize,
    Deserialize,
)]
pub struct ZoneId(pub u64);

/// How cells connect to each other, and how far apart they are
#[derive(Copy, Clone, Debug, PartialEq, Eq, StrumDisplay, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum WalkerMetric {
    /// Eight neighbors, straight-line distance
    Square,
    /// Six neighbors, odd rows shifted
    HexHorizontal,
    /// Six neighbors, odd columns shifted
    HexVertical,
    /// Eight neighbors. A diagonal step on a diamond grid costs the same as
    /// a straight one.
    Isometric,
}

const EIGHT_WAY: &[(i32, i32)] = &[
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

impl WalkerMetric {
    /// Get every cell that can be reached from `cell` in one step
    pub fn neighbors(self, cell: CellPoint) -> Vec<CellPoint> {
        match self {
            Self::Square | Self::Isometric => EIGHT_WAY
                .iter()
                .map(|(dx, dy)| CellPoint::new(cell.x + dx, cell.y + dy))
                .collect(),
            Self::HexHorizontal => hex_neighbors(cell.x, cell.y)
                .map(|(x, y)| CellPoint::new(x, y))
                .to_vec(),
            Self::HexVertical => hex_neighbors(cell.y, cell.x)
                .map(|(y, x)| CellPoint::new(x, y))
                .to_vec(),
        }
    }

    /// Estimated travel distance between two cells, in steps. Never
    /// overestimates, so it's safe to use as an A* heuristic.
    pub fn estimate(self, from: CellPoint, to: CellPoint) -> f64 {
        let dx = (to.x - from.x) as f64;
        let dy = (to.y - from.y) as f64;
        match self {
            Self::Square => (dx * dx + dy * dy).sqrt(),
            Self::Isometric => dx.abs().max(dy.abs()),
            Self::HexHorizontal => hex_distance(from.x, from.y, to.x, to.y),
            Self::HexVertical => hex_distance(from.y, from.x, to.y, to.x),
        }
    }
}

/// Neighbors of an `(index, row)` cell on a grid where odd rows are shifted
/// forward by half a cell
fn hex_neighbors(index: i32, row: i32) -> [(i32, i32); 6] {
    // The two neighbors in the row above/below start one cell back on even
    // rows, and at the same index on odd rows
    let start = if is_odd(row) { index } else { index - 1 };
    [
        (start, row - 1),
        (start + 1, row - 1),
        (index - 1, row),
        (index + 1, row),
        (start, row + 1),
        (start + 1, row + 1),
    ]
}

/// Convert `(index, row)` on a shifted-row grid to axial `(q, r)`
fn axial(index: i32, row: i32) -> (i32, i32) {
    (index - (row - row.rem_euclid(2)) / 2, row)
}

fn hex_distance(index1: i32, row1: i32, index2: i32, row2: i32) -> f64 {
    let (q1, r1) = axial(index1, row1);
    let (q2, r2) = axial(index2, row2);
    let dq = q2 - q1;
    let dr = r2 - r1;
    ((dq.abs() + dr.abs() + (dq + dr).abs()) / 2) as f64
}

/// A pathfinding handle for one zone. Cheap to create, and holds no
/// reference back to the grid that made it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ZoneWalker {
    zone: ZoneId,
    metric: WalkerMetric,
}

impl ZoneWalker {
    pub fn new(zone: ZoneId, metric: WalkerMetric) -> Self {
        Self { zone, metric }
    }

    pub fn zone(&self) -> ZoneId {
        self.zone
    }

    pub fn metric(&self) -> WalkerMetric {
        self.metric
    }

    pub fn neighbors(&self, cell: CellPoint) -> Vec<CellPoint> {
        self.metric.neighbors(cell)
    }

    pub fn estimate(&self, from: CellPoint, to: CellPoint) -> f64 {
        self.metric.estimate(from, to)
    }
}
