use crate::{
    grid::{
        movement::{self, MovementKey},
        point::{CellPoint, ZonePoint, ZoneRect, ZoneVector},
        Layout,
    },
    util::round_half_up,
};

/// Diamond-shaped cells, twice as wide as they are tall. Cell `x` runs
/// down-right on screen and cell `y` runs down-left, so the cell at the
/// origin is the top diamond and its zone point is the diamond's center.
///
/// ```text
///          /\
///         /00\
///        /\  /\
///       /01\/10\
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IsometricLayout {
    size: i32,
    half_width: f64,
    half_height: f64,
    offset_x: i32,
    offset_y: i32,
}

impl IsometricLayout {
    pub fn new(size: i32, offset_x: i32, offset_y: i32) -> Self {
        Self {
            size,
            half_width: size as f64,
            half_height: size as f64 / 2.0,
            offset_x,
            offset_y,
        }
    }

    /// Project a zone point onto the two diamond axes, in cell units,
    /// relative to the top vertex of the origin cell
    fn to_iso(&self, point: ZonePoint) -> (f64, f64) {
        let across = (point.x as f64 - self.offset_x as f64) / self.half_width;
        let down = (point.y as f64 - self.offset_y as f64) / self.half_height;
        ((across + down) / 2.0, (down - across) / 2.0)
    }

    /// Map a point on the diamond lattice (cell centers and corners are both
    /// on it) back into zone space. Odd sizes put some of these points on a
    /// half unit, which always rounds up.
    fn to_zone(&self, x: f64, y: f64) -> ZonePoint {
        ZonePoint::new(
            round_half_up(x + self.offset_x as f64),
            round_half_up(y + self.offset_y as f64),
        )
    }
}

impl Layout for IsometricLayout {
    fn cell_to_zone(&self, cell: CellPoint) -> ZonePoint {
        let (cell_x, cell_y) = (cell.x as f64, cell.y as f64);
        self.to_zone(
            (cell_x - cell_y) * self.half_width,
            (cell_x + cell_y) * self.half_height + self.half_height,
        )
    }

    fn zone_to_cell(&self, point: ZonePoint) -> CellPoint {
        let (iso_x, iso_y) = self.to_iso(point);
        CellPoint::new(iso_x.floor() as i32, iso_y.floor() as i32)
    }

    fn cell_width(&self) -> f64 {
        self.half_width * 2.0
    }

    fn cell_height(&self) -> f64 {
        self.half_height * 2.0
    }

    fn cell_offset(&self) -> ZoneVector {
        ZoneVector::new(-self.size, -round_half_up(self.half_height))
    }

    /// Covers the whole diamond, corners included. The corners are shared
    /// with neighboring cells, so the box is one unit wider and taller than
    /// the diamond itself.
    fn bounds(&self, cell: CellPoint) -> ZoneRect {
        let offset = self.cell_offset();
        ZoneRect::around(self.cell_to_zone(cell), -offset.x, -offset.y)
    }

    /// Diamond corners form their own lattice, so snapping is just rounding
    /// in diamond coordinates instead of flooring
    fn nearest_vertex(&self, point: ZonePoint) -> ZonePoint {
        let (iso_x, iso_y) = self.to_iso(point);
        let i = round_half_up(iso_x) as f64;
        let j = round_half_up(iso_y) as f64;
        self.to_zone((i - j) * self.half_width, (i + j) * self.half_height)
    }

    fn movement_vector(
        &self,
        key: MovementKey,
        snap_to_grid: bool,
    ) -> ZoneVector {
        movement::isometric(key, snap_to_grid, self.size)
    }
}
