//! Where footprints come from, and where errors go when they can't be
//! loaded. Both are traits so that the host application can plug in its own
//! resource loading and error display.

use crate::grid::{
    footprint::{FootprintDef, OffsetTranslator, TokenFootprint},
    point::CellPoint,
};
use anyhow::{bail, Context};
use log::error;

/// A source of footprint definitions. Each topology asks for its footprints
/// by resource name (see [Topology::footprint_resource](crate::Topology)).
pub trait FootprintCatalog: Send + Sync {
    fn load(
        &self,
        resource: &str,
        translator: Option<OffsetTranslator>,
    ) -> anyhow::Result<Vec<TokenFootprint>>;
}

/// Receives errors that the user should hear about. Errors are identified by
/// a message key, which the host can map to a localized string.
pub trait ErrorReporter: Send + Sync {
    fn show_error(&self, message_key: &str, cause: &anyhow::Error);
}

/// Reports errors to the log, and nowhere else
#[derive(Copy, Clone, Debug, Default)]
pub struct LogReporter;

impl ErrorReporter for LogReporter {
    fn show_error(&self, message_key: &str, cause: &anyhow::Error) {
        error!("{}: {:#}", message_key, cause);
    }
}

/// The standard set of footprints, compiled in. Square and isometric grids
/// share the same square blocks, hex grids get hex-shaped blobs, and
/// gridless maps just scale a single cell.
#[derive(Copy, Clone, Debug, Default)]
pub struct BuiltinCatalog;

/// Name and scale for every builtin size, smallest to largest
const SIZES: &[(&str, f64)] = &[
    ("Fine", 0.2),
    ("Diminutive", 0.4),
    ("Tiny", 0.6),
    ("Small", 0.8),
    ("Medium", 1.0),
    ("Large", 2.0),
    ("Huge", 3.0),
    ("Gargantuan", 4.0),
    ("Colossal", 6.0),
];

const DEFAULT_SIZE: &str = "Medium";

impl BuiltinCatalog {
    fn defs(cells: impl Fn(f64) -> Vec<CellPoint>) -> Vec<FootprintDef> {
        SIZES
            .iter()
            .map(|(name, scale)| FootprintDef {
                name: (*name).to_owned(),
                scale: *scale,
                is_default: *name == DEFAULT_SIZE,
                cells: if *scale <= 1.0 { vec![] } else { cells(*scale) },
            })
            .collect()
    }

    /// An n×n block with the anchor at the top-left
    fn block(scale: f64) -> Vec<CellPoint> {
        let n = scale.ceil() as i32;
        (0..n)
            .flat_map(|y| (0..n).map(move |x| CellPoint::new(x, y)))
            .collect()
    }

    /// Offsets for hex footprints on a horizontal grid, relative to an even
    /// anchor row. Large is a three-hex triangle and everything above that
    /// is a full hex ring around the anchor.
    fn hex_blob(scale: f64) -> Vec<CellPoint> {
        match scale as i32 {
            2 => vec![
                CellPoint::ORIGIN,
                CellPoint::new(1, 0),
                CellPoint::new(0, 1),
            ],
            3 => Self::hex_disc(1),
            4 => Self::hex_disc(2),
            _ => Self::hex_disc(3),
        }
    }

    /// All hexes within `radius` steps of the anchor, as offsets for an even
    /// anchor row. Rows are walked top to bottom.
    fn hex_disc(radius: i32) -> Vec<CellPoint> {
        let mut cells = Vec::new();
        for row in -radius..=radius {
            // Axial coordinates, with odd rows shifted right
            let first = (-radius).max(-row - radius);
            let last = radius.min(-row + radius);
            for q in first..=last {
                let x = q + (row - row.rem_euclid(2)) / 2;
                cells.push(CellPoint::new(x, row));
            }
        }
        cells
    }
}

impl FootprintCatalog for BuiltinCatalog {
    fn load(
        &self,
        resource: &str,
        translator: Option<OffsetTranslator>,
    ) -> anyhow::Result<Vec<TokenFootprint>> {
        let defs = match resource {
            "square" | "isometric" => Self::defs(Self::block),
            "hex_horizontal" => Self::defs(Self::hex_blob),
            "hex_vertical" => Self::defs(|scale| {
                Self::hex_blob(scale)
                    .into_iter()
                    .map(|cell| CellPoint::new(cell.y, cell.x))
                    .collect()
            }),
            "gridless" => Self::defs(|_| vec![]),
            _ => bail!("unknown footprint resource {:?}", resource),
        };
        defs.into_iter()
            .map(|def| def.build(translator))
            .collect::<anyhow::Result<Vec<_>>>()
            .with_context(|| format!("error building {} footprints", resource))
    }
}

/// Loads footprints from JSON files in a directory. Resource `square` is
/// read from `<root>/square.json`, which must hold a list of
/// [FootprintDef]s.
#[cfg(feature = "json")]
#[derive(Clone, Debug)]
pub struct JsonCatalog {
    root: std::path::PathBuf,
}

#[cfg(feature = "json")]
impl JsonCatalog {
    pub fn new(root: impl Into<std::path::PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Parse a JSON list of footprint definitions
    pub fn parse(
        json: &str,
        translator: Option<OffsetTranslator>,
    ) -> anyhow::Result<Vec<TokenFootprint>> {
        let defs: Vec<FootprintDef> =
            serde_json::from_str(json).context("invalid footprint JSON")?;
        defs.into_iter().map(|def| def.build(translator)).collect()
    }
}

#[cfg(feature = "json")]
impl FootprintCatalog for JsonCatalog {
    fn load(
        &self,
        resource: &str,
        translator: Option<OffsetTranslator>,
    ) -> anyhow::Result<Vec<TokenFootprint>> {
        let path = self.root.join(format!("{}.json", resource));
        let json = std::fs::read_to_string(&path)
            .with_context(|| format!("error reading {:?}", path))?;
        Self::parse(&json, translator)
            .with_context(|| format!("error loading footprints from {:?}", path))
    }
}
