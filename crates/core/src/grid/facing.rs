//! Legal token facings for each topology. A facing is a rotation in degrees,
//! in the range `(-180, 180]`, with `0` pointing right and positive angles
//! turning counter-clockwise on screen. All tables are sorted ascending.

use crate::{FacingConfig, Topology};

const ALL_HEX: &[i32] = &[-150, -120, -90, -60, -30, 0, 30, 60, 90, 120, 150, 180];
// Horizontal hexes have flat left/right sides, so their edge normals land on
// the multiples of 60 and their vertices on the odd multiples of 30.
// Vertical hexes are the other way around.
const HEX_ODD_30: &[i32] = &[-150, -90, -30, 30, 90, 150];
const HEX_EVEN_60: &[i32] = &[-120, -60, 0, 60, 120, 180];

const ALL_EIGHT: &[i32] = &[-135, -90, -45, 0, 45, 90, 135, 180];
const DIAGONALS: &[i32] = &[-135, -45, 45, 135];
const CARDINALS: &[i32] = &[-90, 0, 90, 180];

/// Used when neither edges nor vertices may be faced
const DEFAULT: &[i32] = &[90];

/// Get the facing angles for a topology, given the user's facing
/// preferences.
pub fn facing_angles(topology: Topology, facing: FacingConfig) -> &'static [i32] {
    let FacingConfig {
        face_edges,
        face_vertices,
    } = facing;
    match topology {
        // No edges or vertices, so preferences don't apply
        Topology::Gridless => ALL_EIGHT,
        _ if !face_edges && !face_vertices => DEFAULT,
        _ if face_edges && face_vertices => match topology {
            Topology::HexHorizontal | Topology::HexVertical => ALL_HEX,
            _ => ALL_EIGHT,
        },
        Topology::Square if face_edges => CARDINALS,
        Topology::Square => DIAGONALS,
        Topology::Isometric if face_edges => DIAGONALS,
        Topology::Isometric => CARDINALS,
        Topology::HexHorizontal if face_edges => HEX_EVEN_60,
        Topology::HexHorizontal => HEX_ODD_30,
        Topology::HexVertical if face_edges => HEX_ODD_30,
        Topology::HexVertical => HEX_EVEN_60,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn facing(face_edges: bool, face_vertices: bool) -> FacingConfig {
        FacingConfig {
            face_edges,
            face_vertices,
        }
    }

    #[test]
    fn test_sorted_and_unique() {
        for topology in Topology::iter() {
            for &edges in &[false, true] {
                for &vertices in &[false, true] {
                    let angles =
                        facing_angles(topology, facing(edges, vertices));
                    assert!(!angles.is_empty());
                    assert!(
                        angles.windows(2).all(|pair| pair[0] < pair[1]),
                        "angles for {} not strictly ascending: {:?}",
                        topology,
                        angles
                    );
                    assert!(angles.iter().all(|a| -180 < *a && *a <= 180));
                }
            }
        }
    }

    #[test]
    fn test_edges_and_vertices_partition_the_full_set() {
        for topology in Topology::iter().filter(|t| *t != Topology::Gridless)
        {
            let mut combined: Vec<i32> = facing_angles(topology, facing(true, false))
                .iter()
                .chain(facing_angles(topology, facing(false, true)))
                .copied()
                .collect();
            combined.sort_unstable();
            assert_eq!(
                combined.as_slice(),
                facing_angles(topology, facing(true, true))
            );
        }
    }

    #[test]
    fn test_gridless_ignores_preferences() {
        for &edges in &[false, true] {
            for &vertices in &[false, true] {
                assert_eq!(
                    facing_angles(Topology::Gridless, facing(edges, vertices)),
                    ALL_EIGHT
                );
            }
        }
    }
}
