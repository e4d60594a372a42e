//! The functional core: decodes every level map, resolves its cells against
//! the shared sprite region table and assembles the world.
pub mod collision;
pub mod decoder;
pub mod sector;

use log::info;

use crate::error::Result;
use crate::model::{RawLevel, SpriteSheet, World};

/// Runs every processing pass and returns a read-only structure for writers.
///
/// `levels` pairs each sector name with its raw map; sectors keep that order.
pub fn run(
    world_name: &str,
    sheet: &SpriteSheet,
    levels: &[(String, RawLevel)],
) -> Result<World> {
    let mut sectors = Vec::with_capacity(levels.len());

    for (name, level) in levels {
        let grid = decoder::decode(level, name)?;
        let sector = sector::assemble_sector(name, &grid, sheet);
        info!(
            "Sector `{}`: {}x{} tiles, {} entities",
            name,
            sector.count_x,
            sector.count_y,
            sector.entities.len()
        );
        sectors.push(sector);
    }

    Ok(World {
        name: world_name.to_string(),
        frames: sheet.frame_catalog(),
        sectors,
    })
}
