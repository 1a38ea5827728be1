use crate::grid::{
    movement::{self, MovementKey},
    point::{CellPoint, ZonePoint, ZoneRect, ZoneVector},
    Layout,
};

/// No cells at all. Cell space and zone space are the same thing, and
/// "snapping" leaves points where they are. The grid size only matters as
/// the nominal size of a token.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GridlessLayout {
    size: i32,
}

impl GridlessLayout {
    pub fn new(size: i32) -> Self {
        Self { size }
    }

    /// Moving a token steps it by its own width or height, so that it lands
    /// right next to where it started
    pub fn movement_vector_for_bounds(
        &self,
        key: MovementKey,
        snap_to_grid: bool,
        bounds: ZoneRect,
    ) -> ZoneVector {
        if snap_to_grid {
            movement::orthogonal(key, bounds.width, bounds.height)
        } else {
            movement::orthogonal(key, 1, 1)
        }
    }
}

impl Layout for GridlessLayout {
    fn cell_to_zone(&self, cell: CellPoint) -> ZonePoint {
        ZonePoint::new(cell.x, cell.y)
    }

    fn zone_to_cell(&self, point: ZonePoint) -> CellPoint {
        CellPoint::new(point.x, point.y)
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
        point
    }

    fn movement_vector(
        &self,
        key: MovementKey,
        snap_to_grid: bool,
    ) -> ZoneVector {
        let bounds = self.bounds(CellPoint::ORIGIN);
        self.movement_vector_for_bounds(key, snap_to_grid, bounds)
    }
}
