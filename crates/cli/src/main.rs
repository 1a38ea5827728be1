use anyhow::{anyhow, Context};
use config::{Config, File};
use log::{debug, LevelFilter};
use mapgrid::{
    timed, CellPoint, FootprintDef, Grid, GridConfig, JsonCatalog, LogReporter,
    MovementKey, Topology, ZonePoint,
};
use serde::Serialize;
use simple_logger::SimpleLogger;
use std::{
    fmt,
    path::{Path, PathBuf},
    process,
    sync::Arc,
};
use structopt::StructOpt;
use strum::{Display, EnumString};

/// CLI for poking at map grid geometry
#[derive(Debug, StructOpt)]
#[structopt(name = "mapgrid")]
struct Opt {
    /// Path to a config file that defines the grid. Supported formats: JSON,
    /// TOML. If not given, the default config is used
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// Override the grid topology from the config. Options: square, gridless,
    /// hex_horizontal, hex_vertical, isometric
    #[structopt(short, long)]
    topology: Option<Topology>,

    /// Override the cell size from the config
    #[structopt(short, long)]
    size: Option<i32>,

    /// Output format for results. Options: text, json
    #[structopt(short, long, default_value = "text")]
    format: OutputFormat,

    /// The logging level to use. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "warn")]
    log_level: LevelFilter,

    #[structopt(subcommand)]
    command: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Convert a cell to its zone point
    ToZone {
        #[structopt(allow_hyphen_values = true)]
        x: i32,
        #[structopt(allow_hyphen_values = true)]
        y: i32,
    },
    /// Find the cell that contains a zone point
    ToCell {
        #[structopt(allow_hyphen_values = true)]
        x: i32,
        #[structopt(allow_hyphen_values = true)]
        y: i32,
    },
    /// Get the zone-space bounding box of a cell
    Bounds {
        #[structopt(allow_hyphen_values = true)]
        x: i32,
        #[structopt(allow_hyphen_values = true)]
        y: i32,
    },
    /// Snap a zone point to the nearest cell vertex
    Vertex {
        #[structopt(allow_hyphen_values = true)]
        x: i32,
        #[structopt(allow_hyphen_values = true)]
        y: i32,
    },
    /// Get the movement vector for a key, e.g. numpad7 or left
    Move {
        key: MovementKey,
        /// Move by whole cells instead of single zone units
        #[structopt(long)]
        snap: bool,
        /// Name of the footprint to move. Only matters on gridless maps
        #[structopt(long)]
        footprint: Option<String>,
    },
    /// List the legal facing angles
    Facings,
    /// List the available token footprints
    Footprints {
        /// Load footprints from JSON files in this directory, instead of the
        /// builtin set
        #[structopt(long)]
        catalog: Option<PathBuf>,
    },
    /// Print the effective grid config, as TOML
    Config,
}

/// Different ways of printing results
#[derive(Copy, Clone, Debug, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
enum OutputFormat {
    /// Human-readable
    Text,
    /// Pretty-printed JSON
    Json,
}

fn load_config(config_path: &Path) -> anyhow::Result<GridConfig> {
    let mut settings = Config::new();
    let config_path = config_path.to_str().ok_or_else(|| {
        anyhow!("invalid character in path {:?}", config_path)
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading config file")?;
    settings.try_into().context("error reading config")
}

/// Print a single result in the requested format
fn print(
    format: OutputFormat,
    value: &(impl fmt::Display + Serialize),
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => println!("{}", value),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(value)
                .context("error serializing output")?
        ),
    }
    Ok(())
}

fn print_footprints(
    format: OutputFormat,
    footprints: &[FootprintDef],
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for footprint in footprints {
                println!(
                    "{}{} (scale {}, {} cells)",
                    footprint.name,
                    if footprint.is_default { "*" } else { "" },
                    footprint.scale,
                    footprint.cells.len() + 1
                );
            }
        }
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(footprints)
                .context("error serializing footprints")?
        ),
    }
    Ok(())
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let mut config = match &opt.config {
        Some(config_path) => load_config(config_path)?,
        None => GridConfig::default(),
    };
    if let Some(topology) = opt.topology {
        config.topology = topology;
    }
    if let Some(size) = opt.size {
        config.size = size;
    }
    debug!("Using config {:?}", config);

    let grid = match &opt.command {
        Command::Footprints {
            catalog: Some(dir),
        } => Grid::with_services(
            config,
            Arc::new(JsonCatalog::new(dir)),
            Arc::new(LogReporter),
        )?,
        _ => Grid::new(config)?,
    };

    let format = opt.format;
    match opt.command {
        Command::ToZone { x, y } => {
            print(format, &grid.cell_to_zone(CellPoint::new(x, y)))
        }
        Command::ToCell { x, y } => {
            print(format, &grid.zone_to_cell(ZonePoint::new(x, y)))
        }
        Command::Bounds { x, y } => {
            print(format, &grid.bounds(CellPoint::new(x, y)))
        }
        Command::Vertex { x, y } => {
            print(format, &grid.nearest_vertex(ZonePoint::new(x, y)))
        }
        Command::Move {
            key,
            snap,
            footprint,
        } => {
            let footprint = match &footprint {
                Some(name) => Some(grid.footprint(name).ok_or_else(|| {
                    anyhow!("unknown footprint {:?}", name)
                })?),
                None => None,
            };
            print(format, &grid.movement_vector(key, snap, footprint))
        }
        Command::Facings => {
            let angles = grid.facing_angles();
            match format {
                OutputFormat::Text => {
                    let angles: Vec<String> =
                        angles.iter().map(i32::to_string).collect();
                    println!("{}", angles.join(" "));
                }
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::to_string(angles)
                        .context("error serializing facings")?
                ),
            }
            Ok(())
        }
        Command::Footprints { .. } => {
            let footprints = timed!("Loading footprints", grid.footprints())
                .ok_or_else(|| anyhow!("footprints failed to load"))?;
            let defs: Vec<FootprintDef> =
                footprints.iter().map(|footprint| footprint.to_def()).collect();
            print_footprints(format, &defs)
        }
        Command::Config => {
            let toml = toml::to_string_pretty(grid.config())
                .context("error serializing config")?;
            print!("{}", toml);
            Ok(())
        }
    }
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}
