//! mapgrid holds the coordinate geometry behind tabletop maps. A map is cut
//! into cells of one of several topologies (square, hex, isometric or no grid
//! at all), and everything that renders a map or moves tokens around on it
//! needs to translate between **cell space** (integer cell addresses) and
//! **zone space** (integer world/pixel coordinates). This crate does that
//! translation, plus the related geometry: cell bounds, token footprints,
//! facing angles, keyboard movement vectors and vertex snapping.
//!
//! ```
//! use mapgrid::{CellPoint, Grid, GridConfig, Topology};
//!
//! let config = GridConfig {
//!     topology: Topology::Isometric,
//!     size: 50,
//!     ..Default::default()
//! };
//! let grid = Grid::new(config).unwrap();
//! let center = grid.cell_to_zone(CellPoint::new(0, 0));
//! assert_eq!(grid.zone_to_cell(center), CellPoint::new(0, 0));
//! ```
//!
//! See [GridConfig] for details on how a grid can be customized, and the
//! [grid] module for a description of both coordinate spaces.

mod config;
pub mod grid;
mod util;

pub use crate::{
    config::{FacingConfig, GridConfig},
    grid::{
        capabilities::GridCapabilities,
        catalog::{
            BuiltinCatalog, ErrorReporter, FootprintCatalog, LogReporter,
        },
        footprint::{
            CellPointSet, FootprintDef, OffsetTranslator, TokenFootprint,
        },
        movement::MovementKey,
        point::{CellPoint, ZonePoint, ZoneRect, ZoneVector},
        walker::{WalkerMetric, ZoneId, ZoneWalker},
        Grid, Topology,
    },
};

#[cfg(feature = "json")]
pub use crate::grid::catalog::JsonCatalog;
