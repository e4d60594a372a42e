pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod processor;
pub mod source;
pub mod writer;

use std::path::Path;

use anyhow::Context;
use clap::Parser;
use log::info;

pub use config::ConvertConfig;
pub use error::ConvertError;
pub use model::World;

pub fn run() -> anyhow::Result<()> {
    let args = cli::Cli::parse();
    convert(&args.source_dir, &args.destination, &ConvertConfig::default())?;
    Ok(())
}

/// Convert every level map in `source_dir` into one world document at
/// `destination`.
///
/// Returns `Ok(None)` without writing anything when the directory holds no
/// level map besides the definitions file.
pub fn convert(
    source_dir: &Path,
    destination: &Path,
    config: &ConvertConfig,
) -> anyhow::Result<Option<World>> {
    // 1. ── Scan ───────────────────────────────────────────────────────
    let files = source::scan(source_dir, config)
        .with_context(|| format!("Scanning {}", source_dir.display()))?;
    if files.levels.is_empty() {
        info!("No level maps in {}, nothing to write", source_dir.display());
        return Ok(None);
    }
    info!("Found {} level maps", files.levels.len());

    // 2. ── Parse ──────────────────────────────────────────────────────
    let sheet = parser::load_definitions(&files.definitions)
        .with_context(|| format!("Reading {}", files.definitions.display()))?;
    info!("Loaded {} sprite regions", sheet.len());

    let mut levels = Vec::with_capacity(files.levels.len());
    for path in &files.levels {
        let level =
            parser::load_level(path).with_context(|| format!("Reading {}", path.display()))?;
        levels.push((source::sector_name(path), level));
    }

    // 3. ── Process ────────────────────────────────────────────────────
    let world = processor::run(&config.world_name, &sheet, &levels)
        .with_context(|| "Resolving tiles into sectors")?;

    // 4. ── Write output ───────────────────────────────────────────────
    writer::emit(&world, destination)
        .with_context(|| format!("Writing {}", destination.display()))?;
    info!("Wrote {}", destination.display());

    Ok(Some(world))
}
