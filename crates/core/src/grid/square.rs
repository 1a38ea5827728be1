use crate::{
    grid::{
        movement::{self, MovementKey},
        point::{CellPoint, ZonePoint, ZoneVector},
        Layout,
    },
    util::{round_half_up, saturate},
};

/// Plain square cells. A cell's zone point is its top-left corner, rather
/// than its center like every other topology.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SquareLayout {
    size: i32,
    offset_x: i32,
    offset_y: i32,
}

impl SquareLayout {
    pub fn new(size: i32, offset_x: i32, offset_y: i32) -> Self {
        Self {
            size,
            offset_x,
            offset_y,
        }
    }
}

impl Layout for SquareLayout {
    fn cell_to_zone(&self, cell: CellPoint) -> ZonePoint {
        let corner = |cell: i32, offset: i32| {
            saturate(cell as i64 * self.size as i64 + offset as i64)
        };
        ZonePoint::new(
            corner(cell.x, self.offset_x),
            corner(cell.y, self.offset_y),
        )
    }

    fn zone_to_cell(&self, point: ZonePoint) -> CellPoint {
        // Euclidean division so that negative coordinates floor instead of
        // truncating towards zero
        let cell = |value: i32, offset: i32| {
            saturate((value as i64 - offset as i64).div_euclid(self.size as i64))
        };
        CellPoint::new(cell(point.x, self.offset_x), cell(point.y, self.offset_y))
    }

    fn cell_width(&self) -> f64 {
        self.size as f64
    }

    fn cell_height(&self) -> f64 {
        self.size as f64
    }

    fn cell_offset(&self) -> ZoneVector {
        ZoneVector::ZERO
    }

    fn nearest_vertex(&self, point: ZonePoint) -> ZonePoint {
        let size = self.size as f64;
        let snap = |value: i32, offset: i32| {
            let vertex = round_half_up((value as i64 - offset as i64) as f64 / size);
            saturate(vertex as i64 * self.size as i64 + offset as i64)
        };
        ZonePoint::new(
            snap(point.x, self.offset_x),
            snap(point.y, self.offset_y),
        )
    }

    fn movement_vector(
        &self,
        key: MovementKey,
        snap_to_grid: bool,
    ) -> ZoneVector {
        let step = if snap_to_grid { self.size } else { 1 };
        movement::orthogonal(key, step, step)
    }
}
