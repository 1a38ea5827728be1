use serde::Serialize;

/// The set of features a grid topology supports. There is one constant
/// instance per topology (see [Topology::capabilities](crate::Topology)), and
/// they never change.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GridCapabilities {
    /// Can tokens be pathed across the grid cell by cell?
    pub pathing: bool,
    /// Can tokens snap to cell positions?
    pub snap_to_grid: bool,
    /// Can a movement path be drawn as a line through cell centers?
    pub path_line: bool,
    /// Can the cell's second dimension be adjusted independently of the
    /// first (e.g. stretching hexes)?
    pub second_dimension_adjustment: bool,
    /// Can cell coordinates be displayed to the user?
    pub coordinates: bool,
}

impl GridCapabilities {
    pub const SQUARE: Self = Self {
        pathing: true,
        snap_to_grid: true,
        path_line: true,
        second_dimension_adjustment: false,
        coordinates: true,
    };

    /// Shared by both hex orientations
    pub const HEX: Self = Self {
        pathing: true,
        snap_to_grid: true,
        path_line: true,
        second_dimension_adjustment: true,
        coordinates: true,
    };

    pub const ISOMETRIC: Self = Self {
        pathing: true,
        snap_to_grid: true,
        path_line: true,
        second_dimension_adjustment: false,
        coordinates: false,
    };

    /// Without cells there's nothing to path through or snap to
    pub const NONE: Self = Self {
        pathing: false,
        snap_to_grid: false,
        path_line: false,
        second_dimension_adjustment: false,
        coordinates: false,
    };

    /// Is at least one feature supported?
    pub fn any(&self) -> bool {
        self.pathing
            || self.snap_to_grid
            || self.path_line
            || self.second_dimension_adjustment
            || self.coordinates
    }
}
