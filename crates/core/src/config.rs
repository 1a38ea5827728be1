use crate::Topology;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Configuration that defines a grid. Two grids built from the same config
/// will always produce identical geometry.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GridConfig {
    /// The shape of the cells that make up the grid. See [Topology].
    pub topology: Topology,

    /// Cell size, in zone units. What this measures depends on the topology:
    /// - Square/gridless: the length of one side of a cell
    /// - Hex: the distance between two opposite **edges** of a cell (the
    ///   flat width, not the point-to-point width)
    /// - Isometric: the height of a diamond. Diamonds are twice as wide as
    ///   they are tall.
    #[validate(range(min = 9, max = 10000))]
    pub size: i32,

    /// Translation of the grid origin along the zone x axis
    pub offset_x: i32,

    /// Translation of the grid origin along the zone y axis
    pub offset_y: i32,

    /// Which directions a token is allowed to face. See [FacingConfig].
    pub facing: FacingConfig,
}

/// User-level preferences controlling the legal rotations of a token. These
/// only matter for topologies with edges and vertices to face; gridless maps
/// ignore them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FacingConfig {
    /// Tokens can face the edges (sides) of their cell
    pub face_edges: bool,

    /// Tokens can face the vertices (corners) of their cell
    pub face_vertices: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            topology: Topology::Square,
            size: 50,
            offset_x: 0,
            offset_y: 0,
            facing: FacingConfig::default(),
        }
    }
}

impl Default for FacingConfig {
    fn default() -> Self {
        Self {
            face_edges: true,
            face_vertices: false,
        }
    }
}
