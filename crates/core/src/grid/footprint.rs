//! Token footprints: the set of cells a token covers, relative to the cell
//! it's anchored on.

use crate::{
    grid::{
        point::{CellPoint, ZoneRect},
        Grid, Topology,
    },
    util::is_odd,
};
use anyhow::{anyhow, bail, ensure};
use fnv::FnvBuildHasher;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use strum::Display;

/// An ordered set of cells. Insertion order is kept so that footprints
/// report their cells in the same order they were defined in.
pub type CellPointSet = IndexSet<CellPoint, FnvBuildHasher>;

/// Fixes up footprint offsets on grids where the neighbors of a cell depend
/// on the parity of its row (or column). Footprint offsets are always
/// written relative to an even anchor, so when a token is anchored on an
/// odd row, the cells that land on even rows have to be pushed along by
/// one to keep the same shape.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum OffsetTranslator {
    /// For horizontal hexes, where odd rows are shifted
    ByRow,
    /// For vertical hexes, where odd columns are shifted
    ByColumn,
}

impl OffsetTranslator {
    /// Adjust `candidate`, an absolute cell computed as `origin + offset`,
    /// for the parity of `origin`
    pub fn translate(self, origin: CellPoint, candidate: CellPoint) -> CellPoint {
        match self {
            Self::ByRow if is_odd(origin.y) && !is_odd(candidate.y) => {
                CellPoint::new(candidate.x + 1, candidate.y)
            }
            Self::ByColumn if is_odd(origin.x) && !is_odd(candidate.x) => {
                CellPoint::new(candidate.x, candidate.y + 1)
            }
            _ => candidate,
        }
    }
}

/// Serialized form of a footprint, as it appears in a catalog file
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FootprintDef {
    pub name: String,
    pub scale: f64,
    #[serde(default)]
    pub is_default: bool,
    /// Offsets from the anchor cell. The anchor itself is always covered
    /// and doesn't need to be listed.
    #[serde(default)]
    pub cells: Vec<CellPoint>,
}

impl FootprintDef {
    pub fn build(
        self,
        translator: Option<OffsetTranslator>,
    ) -> anyhow::Result<TokenFootprint> {
        TokenFootprint::new(
            self.name,
            self.scale,
            self.is_default,
            self.cells,
            translator,
        )
    }
}

/// A named token size and the cells it covers
#[derive(Clone, Debug, PartialEq)]
pub struct TokenFootprint {
    name: String,
    scale: f64,
    is_default: bool,
    cells: CellPointSet,
    translator: Option<OffsetTranslator>,
}

impl TokenFootprint {
    /// Build a footprint from a list of cell offsets. The anchor offset
    /// `(0, 0)` is always included, as the first cell. A footprint with scale
    /// 1 must cover exactly the anchor cell.
    pub fn new(
        name: impl Into<String>,
        scale: f64,
        is_default: bool,
        cells: impl IntoIterator<Item = CellPoint>,
        translator: Option<OffsetTranslator>,
    ) -> anyhow::Result<Self> {
        let name = name.into();
        ensure!(!name.trim().is_empty(), "footprint name cannot be empty");
        ensure!(
            scale.is_finite() && scale > 0.0,
            "footprint {:?} has invalid scale {}",
            name,
            scale
        );

        let mut set = CellPointSet::default();
        set.insert(CellPoint::ORIGIN);
        set.extend(cells);

        if (scale - 1.0).abs() < f64::EPSILON && set.len() != 1 {
            bail!(
                "footprint {:?} has scale 1 but covers {} cells",
                name,
                set.len()
            );
        }

        Ok(Self {
            name,
            scale,
            is_default,
            cells: set,
            translator,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Size of the token relative to a single cell
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn is_default(&self) -> bool {
        self.is_default
    }

    /// Cell offsets relative to the anchor, starting with the anchor itself
    pub fn cells(&self) -> &CellPointSet {
        &self.cells
    }

    pub fn translator(&self) -> Option<OffsetTranslator> {
        self.translator
    }

    /// Get every cell covered when the token is anchored at `anchor`
    pub fn occupied_cells(&self, anchor: CellPoint) -> CellPointSet {
        self.cells
            .iter()
            .map(|offset| {
                let candidate = anchor + *offset;
                match self.translator {
                    Some(translator) => translator.translate(anchor, candidate),
                    None => candidate,
                }
            })
            .collect()
    }

    /// Get the zone-space rectangle that covers the token when it's anchored
    /// at `anchor`. On a gridless map there are no cells to cover, so the
    /// grid size is scaled instead.
    pub fn bounds(&self, grid: &Grid, anchor: CellPoint) -> ZoneRect {
        if grid.topology() == Topology::Gridless {
            let cell = grid.bounds(anchor);
            let scaled =
                |length: i32| ((length as f64 * self.scale).round() as i32).max(1);
            return ZoneRect::new(
                cell.x,
                cell.y,
                scaled(cell.width),
                scaled(cell.height),
            );
        }

        self.occupied_cells(anchor)
            .iter()
            .map(|cell| grid.bounds(*cell))
            .reduce(|acc, rect| acc.union(&rect))
            // Every footprint covers at least its anchor
            .unwrap_or_else(|| grid.bounds(anchor))
    }

    /// Convert back to the serialized form
    pub fn to_def(&self) -> FootprintDef {
        FootprintDef {
            name: self.name.clone(),
            scale: self.scale,
            is_default: self.is_default,
            cells: self
                .cells
                .iter()
                .copied()
                .filter(|cell| *cell != CellPoint::ORIGIN)
                .collect(),
        }
    }
}

/// Find the default footprint in a list, falling back to the first one if
/// none is flagged. Having more than one default is an error.
pub fn find_default(
    footprints: &[TokenFootprint],
) -> anyhow::Result<&TokenFootprint> {
    let mut defaults = footprints.iter().filter(|f| f.is_default());
    match (defaults.next(), defaults.next()) {
        (Some(footprint), None) => Ok(footprint),
        (Some(first), Some(second)) => Err(anyhow!(
            "multiple default footprints: {:?} and {:?}",
            first.name(),
            second.name()
        )),
        (None, _) => footprints
            .first()
            .ok_or_else(|| anyhow!("footprint list is empty")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_is_implied() {
        let footprint = TokenFootprint::new(
            "Large",
            2.0,
            false,
            vec![CellPoint::new(1, 0), CellPoint::new(0, 0)],
            None,
        )
        .unwrap();
        assert_eq!(
            footprint.cells().iter().copied().collect::<Vec<_>>(),
            vec![CellPoint::ORIGIN, CellPoint::new(1, 0)]
        );
        assert_eq!(footprint.to_def().cells, vec![CellPoint::new(1, 0)]);
    }

    #[test]
    fn test_validation() {
        assert!(TokenFootprint::new("", 1.0, true, vec![], None).is_err());
        assert!(TokenFootprint::new("Zero", 0.0, false, vec![], None).is_err());
        assert!(
            TokenFootprint::new("Nan", f64::NAN, false, vec![], None).is_err()
        );
        // Scale 1 must be a single cell
        assert!(TokenFootprint::new(
            "Medium",
            1.0,
            true,
            vec![CellPoint::new(1, 0)],
            None
        )
        .is_err());
        assert!(TokenFootprint::new("Medium", 1.0, true, vec![], None).is_ok());
    }

    #[test]
    fn test_translate_by_row() {
        let translator = OffsetTranslator::ByRow;
        // Even origin, nothing changes
        assert_eq!(
            translator.translate(CellPoint::new(0, 0), CellPoint::new(0, 1)),
            CellPoint::new(0, 1)
        );
        // Odd origin, even candidate gets pushed
        assert_eq!(
            translator.translate(CellPoint::new(0, 1), CellPoint::new(0, 2)),
            CellPoint::new(1, 2)
        );
        // Odd origin, odd candidate stays
        assert_eq!(
            translator.translate(CellPoint::new(0, 1), CellPoint::new(3, 1)),
            CellPoint::new(3, 1)
        );
        // Parity holds for negative rows too
        assert_eq!(
            translator.translate(CellPoint::new(0, -1), CellPoint::new(0, -2)),
            CellPoint::new(1, -2)
        );
    }

    #[test]
    fn test_translate_by_column() {
        let translator = OffsetTranslator::ByColumn;
        assert_eq!(
            translator.translate(CellPoint::new(1, 0), CellPoint::new(2, 0)),
            CellPoint::new(2, 1)
        );
        assert_eq!(
            translator.translate(CellPoint::new(2, 0), CellPoint::new(2, 0)),
            CellPoint::new(2, 0)
        );
    }

    #[test]
    fn test_find_default() {
        let small = TokenFootprint::new("Small", 0.8, false, vec![], None)
            .unwrap();
        let medium =
            TokenFootprint::new("Medium", 1.0, true, vec![], None).unwrap();
        assert_eq!(
            find_default(&[small.clone(), medium.clone()]).unwrap().name(),
            "Medium"
        );
        assert_eq!(find_default(&[small.clone()]).unwrap().name(), "Small");
        assert!(find_default(&[]).is_err());
        assert!(find_default(&[medium.clone(), medium]).is_err());
    }
}
