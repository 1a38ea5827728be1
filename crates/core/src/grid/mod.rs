//! Grids, and the two coordinate spaces they translate between.
//!
//! ## Cell Space
//! Cell space addresses whole cells with a [CellPoint]. The meaning of the
//! two axes depends on the topology:
//!
//! - Square: `x` is the column, `y` is the row
//! - Horizontal hex: `y` is the row, `x` is the position within the row. Odd
//!   rows are pushed right by half a cell.
//! - Vertical hex: `x` is the column, `y` is the position within the column.
//!   Odd columns are pushed down by half a cell.
//! - Isometric: `x` runs down-right, `y` runs down-left
//! - Gridless: cell space _is_ zone space
//!
//! ## Zone Space
//! Zone space is the integer world coordinate system that everything gets
//! drawn in, measured with a [ZonePoint]. `+x` is right and `+y` is down.
//! Every cell has a single zone point that identifies it: the top-left corner
//! for square cells, and the center for every other topology. Converting a
//! cell to zone space and back always gives the same cell. Converting a zone
//! point to cell space gives the cell that contains it.
//!
//! The whole grid can be translated in zone space with the
//! [offset](crate::GridConfig::offset_x) fields of the config.

pub mod capabilities;
pub mod catalog;
mod facing;
pub mod footprint;
mod gridless;
mod hex;
mod isometric;
pub mod movement;
pub mod point;
mod square;
pub mod walker;

use crate::{
    grid::{
        capabilities::GridCapabilities,
        catalog::{BuiltinCatalog, ErrorReporter, FootprintCatalog, LogReporter},
        footprint::{OffsetTranslator, TokenFootprint},
        gridless::GridlessLayout,
        hex::{HexLayout, HexOrientation},
        isometric::IsometricLayout,
        movement::MovementKey,
        point::{CellPoint, ZonePoint, ZoneRect, ZoneVector},
        square::SquareLayout,
        walker::{WalkerMetric, ZoneId, ZoneWalker},
    },
    timed, FacingConfig, GridConfig,
};
use anyhow::Context;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Debug},
    sync::{Arc, OnceLock},
};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use validator::Validate;

/// The shape of the cells that make up a grid
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Topology {
    Square,
    /// No cells at all
    Gridless,
    /// Rows of hexes with points up
    HexHorizontal,
    /// Columns of hexes with points to the side
    HexVertical,
    /// Diamonds, twice as wide as they are tall
    Isometric,
}

impl Topology {
    pub fn is_hex(self) -> bool {
        matches!(self, Self::HexHorizontal | Self::HexVertical)
    }

    /// Which features grids of this topology support
    pub fn capabilities(self) -> GridCapabilities {
        match self {
            Self::Square => GridCapabilities::SQUARE,
            Self::HexHorizontal | Self::HexVertical => GridCapabilities::HEX,
            Self::Isometric => GridCapabilities::ISOMETRIC,
            Self::Gridless => GridCapabilities::NONE,
        }
    }

    /// Name of the resource that holds this topology's footprints, which
    /// gets passed to a [FootprintCatalog]
    pub fn footprint_resource(self) -> &'static str {
        match self {
            Self::Square => "square",
            Self::Gridless => "gridless",
            Self::HexHorizontal => "hex_horizontal",
            Self::HexVertical => "hex_vertical",
            Self::Isometric => "isometric",
        }
    }

    /// The translator that footprints need on this topology, if any
    pub fn offset_translator(self) -> Option<OffsetTranslator> {
        match self {
            Self::HexHorizontal => Some(OffsetTranslator::ByRow),
            Self::HexVertical => Some(OffsetTranslator::ByColumn),
            Self::Square | Self::Gridless | Self::Isometric => None,
        }
    }

    /// Message key handed to the [ErrorReporter] when footprints for this
    /// topology fail to load
    pub fn footprint_error_key(self) -> &'static str {
        match self {
            Self::Square => "square_grid.error.footprints_not_loaded",
            Self::Gridless => "gridless_grid.error.footprints_not_loaded",
            Self::HexHorizontal | Self::HexVertical => {
                "hex_grid.error.footprints_not_loaded"
            }
            Self::Isometric => "isometric_grid.error.footprints_not_loaded",
        }
    }

    /// How pathfinding walks cells on this topology. `None` if there are no
    /// cells to walk.
    pub fn walker_metric(self) -> Option<WalkerMetric> {
        match self {
            Self::Square => Some(WalkerMetric::Square),
            Self::HexHorizontal => Some(WalkerMetric::HexHorizontal),
            Self::HexVertical => Some(WalkerMetric::HexVertical),
            Self::Isometric => Some(WalkerMetric::Isometric),
            Self::Gridless => None,
        }
    }
}

/// Cell geometry for a single topology. Everything here is a pure function
/// of the grid config, so implementations are plain values.
pub(crate) trait Layout {
    /// Get the zone point that identifies a cell
    fn cell_to_zone(&self, cell: CellPoint) -> ZonePoint;

    /// Get the cell that contains a zone point
    fn zone_to_cell(&self, point: ZonePoint) -> CellPoint;

    fn cell_width(&self) -> f64;

    fn cell_height(&self) -> f64;

    /// Offset from a cell's zone point to the top-left of its bounds
    fn cell_offset(&self) -> ZoneVector;

    /// Get the bounding rectangle of a cell
    fn bounds(&self, cell: CellPoint) -> ZoneRect {
        let origin = self.cell_to_zone(cell) + self.cell_offset();
        ZoneRect::new(
            origin.x,
            origin.y,
            self.cell_width().round() as i32,
            self.cell_height().round() as i32,
        )
    }

    fn nearest_vertex(&self, point: ZonePoint) -> ZonePoint;

    fn movement_vector(&self, key: MovementKey, snap_to_grid: bool)
        -> ZoneVector;
}

/// All layouts, so a grid can hold one without boxing
#[derive(Copy, Clone, Debug, PartialEq)]
enum AnyLayout {
    Square(SquareLayout),
    Gridless(GridlessLayout),
    Hex(HexLayout),
    Isometric(IsometricLayout),
}

impl AnyLayout {
    fn new(config: &GridConfig) -> Self {
        let GridConfig {
            size,
            offset_x,
            offset_y,
            ..
        } = *config;
        match config.topology {
            Topology::Square => {
                Self::Square(SquareLayout::new(size, offset_x, offset_y))
            }
            // Gridless maps can't be shifted, there's nothing to line up
            Topology::Gridless => Self::Gridless(GridlessLayout::new(size)),
            Topology::HexHorizontal => Self::Hex(HexLayout::new(
                HexOrientation::Horizontal,
                size,
                offset_x,
                offset_y,
            )),
            Topology::HexVertical => Self::Hex(HexLayout::new(
                HexOrientation::Vertical,
                size,
                offset_x,
                offset_y,
            )),
            Topology::Isometric => {
                Self::Isometric(IsometricLayout::new(size, offset_x, offset_y))
            }
        }
    }

    fn get(&self) -> &dyn Layout {
        match self {
            Self::Square(layout) => layout,
            Self::Gridless(layout) => layout,
            Self::Hex(layout) => layout,
            Self::Isometric(layout) => layout,
        }
    }
}

/// A grid that cuts a map into cells. The grid's geometry is fixed by the
/// [GridConfig] it was built from. The only mutable state is the list of
/// legal facing angles (which depends on user preferences, see
/// [Grid::set_facings]) and the footprint cache.
///
/// Footprints are loaded from a [FootprintCatalog] the first time they're
/// needed, and then kept for the life of the grid (or until
/// [Grid::reset_footprints]). If loading fails, the error goes to the grid's
/// [ErrorReporter] and the grid carries on without footprints.
///
/// Grids are `Send + Sync`, so they can be shared between threads once
/// built. The footprint cache is safe to initialize from multiple threads.
#[derive(Clone)]
pub struct Grid {
    config: GridConfig,
    layout: AnyLayout,
    facing_angles: &'static [i32],
    footprints: OnceLock<Option<Vec<TokenFootprint>>>,
    catalog: Arc<dyn FootprintCatalog>,
    reporter: Arc<dyn ErrorReporter>,
}

impl Grid {
    /// Build a grid with the builtin footprints, reporting errors to the log.
    /// Returns an error if the config is invalid.
    pub fn new(config: GridConfig) -> anyhow::Result<Self> {
        Self::with_services(
            config,
            Arc::new(BuiltinCatalog),
            Arc::new(LogReporter),
        )
    }

    /// Build a grid that loads footprints from a custom catalog, and reports
    /// errors to a custom reporter. Returns an error if the config is
    /// invalid.
    pub fn with_services(
        config: GridConfig,
        catalog: Arc<dyn FootprintCatalog>,
        reporter: Arc<dyn ErrorReporter>,
    ) -> anyhow::Result<Self> {
        config.validate().context("invalid grid config")?;
        debug!("Building grid with config {:?}", config);

        Ok(Self {
            config,
            layout: AnyLayout::new(&config),
            facing_angles: facing::facing_angles(config.topology, config.facing),
            footprints: OnceLock::new(),
            catalog,
            reporter,
        })
    }

    /// Get a reference to the config that defines this grid
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn topology(&self) -> Topology {
        self.config.topology
    }

    pub fn size(&self) -> i32 {
        self.config.size
    }

    pub fn capabilities(&self) -> GridCapabilities {
        self.topology().capabilities()
    }

    /// Get the zone point that identifies a cell: its top-left corner on a
    /// square grid, and its center everywhere else
    pub fn cell_to_zone(&self, cell: CellPoint) -> ZonePoint {
        self.layout.get().cell_to_zone(cell)
    }

    /// Get the cell that contains a zone point
    pub fn zone_to_cell(&self, point: ZonePoint) -> CellPoint {
        self.layout.get().zone_to_cell(point)
    }

    /// Get the zone-space bounding rectangle of a cell. The cell's zone point
    /// is always inside it, and so is every zone point that maps back to the
    /// cell.
    pub fn bounds(&self, cell: CellPoint) -> ZoneRect {
        self.layout.get().bounds(cell)
    }

    /// Offset from a cell's zone point to the top-left corner of its bounds
    pub fn cell_offset(&self) -> ZoneVector {
        self.layout.get().cell_offset()
    }

    /// Exact width of a single cell, in zone units. Hex and isometric bounds
    /// come out one unit wider, since they include the shared edges.
    pub fn cell_width(&self) -> f64 {
        self.layout.get().cell_width()
    }

    /// Exact height of a single cell, in zone units
    pub fn cell_height(&self) -> f64 {
        self.layout.get().cell_height()
    }

    /// Snap a point to the closest cell vertex. Snapping an already-snapped
    /// point leaves it where it is. On a gridless map there are no vertices,
    /// so points are returned unchanged.
    pub fn nearest_vertex(&self, point: ZonePoint) -> ZonePoint {
        self.layout.get().nearest_vertex(point)
    }

    /// Get how far one press of a movement key moves a token. When
    /// `snap_to_grid` is off, movement is in single zone units instead of
    /// cells.
    ///
    /// On a gridless map a token steps by its own size, which comes from the
    /// footprint (or the default footprint if none is given). Other
    /// topologies ignore the footprint.
    pub fn movement_vector(
        &self,
        key: MovementKey,
        snap_to_grid: bool,
        footprint: Option<&TokenFootprint>,
    ) -> ZoneVector {
        match &self.layout {
            AnyLayout::Gridless(layout) => {
                let bounds = footprint
                    .or_else(|| self.default_footprint())
                    .map(|footprint| footprint.bounds(self, CellPoint::ORIGIN))
                    .unwrap_or_else(|| layout.bounds(CellPoint::ORIGIN));
                layout.movement_vector_for_bounds(key, snap_to_grid, bounds)
            }
            layout => layout.get().movement_vector(key, snap_to_grid),
        }
    }

    /// Same as [Self::movement_vector], but for a raw key code. Codes that
    /// aren't movement keys don't move anything.
    pub fn movement_vector_for_code(
        &self,
        code: u32,
        snap_to_grid: bool,
        footprint: Option<&TokenFootprint>,
    ) -> ZoneVector {
        match MovementKey::from_code(code) {
            Some(key) => self.movement_vector(key, snap_to_grid, footprint),
            None => ZoneVector::ZERO,
        }
    }

    /// Get every key that moves a token on this grid. Keys that have no
    /// neighbor to move to (e.g. numpad 8 on a horizontal hex grid) are
    /// left out.
    pub fn movement_keys(&self) -> Vec<MovementKey> {
        MovementKey::iter()
            .filter(|key| !self.movement_vector(*key, true, None).is_zero())
            .collect()
    }

    /// Get the legal facing angles for tokens, in degrees, sorted ascending
    pub fn facing_angles(&self) -> &[i32] {
        self.facing_angles
    }

    /// Recompute the legal facing angles from new preferences
    pub fn set_facings(&mut self, facing: FacingConfig) {
        self.config.facing = facing;
        self.facing_angles = facing::facing_angles(self.topology(), facing);
        debug!(
            "Facings for {} grid set to {:?}",
            self.topology(),
            self.facing_angles
        );
    }

    /// Get all footprints available on this grid, loading them if this is
    /// the first access. Returns `None` if loading failed, in which case the
    /// error has already gone to the grid's [ErrorReporter]. A failed load
    /// isn't retried until [Self::reset_footprints] is called.
    pub fn footprints(&self) -> Option<&[TokenFootprint]> {
        self.footprints
            .get_or_init(|| self.load_footprints())
            .as_deref()
    }

    fn load_footprints(&self) -> Option<Vec<TokenFootprint>> {
        let topology = self.topology();
        let resource = topology.footprint_resource();
        let result = timed!(
            format!("Loading {} footprints", resource),
            self.catalog.load(resource, topology.offset_translator())
        )
        .and_then(|footprints| {
            footprint::find_default(&footprints)
                .context("invalid footprint catalog")?;
            Ok(footprints)
        });

        match result {
            Ok(footprints) => {
                info!(
                    "Loaded {} footprints for {} grid",
                    footprints.len(),
                    topology
                );
                Some(footprints)
            }
            Err(err) => {
                warn!("Failed to load {} footprints", resource);
                self.reporter
                    .show_error(topology.footprint_error_key(), &err);
                None
            }
        }
    }

    /// Get a footprint by name. Names are compared case-insensitively.
    pub fn footprint(&self, name: &str) -> Option<&TokenFootprint> {
        self.footprints()?
            .iter()
            .find(|footprint| footprint.name().eq_ignore_ascii_case(name))
    }

    /// Get the footprint that tokens use unless told otherwise
    pub fn default_footprint(&self) -> Option<&TokenFootprint> {
        // Loading already checked that a default exists
        footprint::find_default(self.footprints()?).ok()
    }

    /// Drop all cached footprints. They'll be reloaded from the catalog on
    /// next access.
    pub fn reset_footprints(&mut self) {
        self.footprints = OnceLock::new();
    }

    /// Get a pathfinding handle for a zone. Returns `None` on a gridless
    /// map, where there are no cells to walk.
    pub fn create_zone_walker(&self, zone: ZoneId) -> Option<ZoneWalker> {
        self.topology()
            .walker_metric()
            .map(|metric| ZoneWalker::new(zone, metric))
    }
}

impl Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("config", &self.config)
            .field("layout", &self.layout)
            .field("facing_angles", &self.facing_angles)
            .field(
                "footprints",
                &self.footprints.get().map(|footprints| {
                    footprints.as_ref().map(|footprints| footprints.len())
                }),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn grid(topology: Topology) -> Grid {
        Grid::new(GridConfig {
            topology,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_topology_names() {
        assert_eq!(Topology::HexHorizontal.to_string(), "hex_horizontal");
        assert_eq!(Topology::from_str("isometric"), Ok(Topology::Isometric));
        for topology in Topology::iter() {
            assert_eq!(
                topology.footprint_resource(),
                topology.to_string(),
                "resource for {}",
                topology
            );
        }
    }

    #[test]
    fn test_capabilities() {
        assert!(!grid(Topology::Gridless).capabilities().any());
        assert!(grid(Topology::HexVertical)
            .capabilities()
            .second_dimension_adjustment);
        assert!(!grid(Topology::Isometric).capabilities().coordinates);
        assert!(grid(Topology::Square).capabilities().coordinates);
    }

    #[test]
    fn test_invalid_config() {
        let result = Grid::new(GridConfig {
            size: 0,
            ..Default::default()
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_square_bounds() {
        let grid = Grid::new(GridConfig {
            offset_x: 5,
            offset_y: -5,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            grid.bounds(CellPoint::new(1, 2)),
            ZoneRect::new(55, 95, 50, 50)
        );
    }

    #[test]
    fn test_set_facings() {
        let mut grid = grid(Topology::Square);
        assert_eq!(grid.facing_angles(), &[-90, 0, 90, 180]);
        grid.set_facings(FacingConfig {
            face_edges: false,
            face_vertices: true,
        });
        assert_eq!(grid.facing_angles(), &[-135, -45, 45, 135]);
        assert!(grid.config().facing.face_vertices);
    }

    #[test]
    fn test_footprint_lookup() {
        let grid = grid(Topology::Square);
        assert_eq!(grid.default_footprint().unwrap().name(), "Medium");
        assert_eq!(grid.footprint("large").unwrap().cells().len(), 4);
        assert!(grid.footprint("enormous").is_none());
    }

    #[test]
    fn test_walker() {
        assert!(grid(Topology::Gridless)
            .create_zone_walker(ZoneId(1))
            .is_none());
        let walker = grid(Topology::HexHorizontal)
            .create_zone_walker(ZoneId(7))
            .unwrap();
        assert_eq!(walker.zone(), ZoneId(7));
        assert_eq!(walker.metric(), WalkerMetric::HexHorizontal);
    }

    #[test]
    fn test_gridless_movement_uses_footprint() {
        let grid = grid(Topology::Gridless);
        assert_eq!(
            grid.movement_vector(MovementKey::Right, true, None),
            ZoneVector::new(50, 0)
        );
        let huge = grid.footprint("huge").unwrap();
        assert_eq!(
            grid.movement_vector(MovementKey::Numpad3, true, Some(huge)),
            ZoneVector::new(150, 150)
        );
        assert_eq!(
            grid.movement_vector(MovementKey::Numpad3, false, Some(huge)),
            ZoneVector::new(1, 1)
        );
    }
}
