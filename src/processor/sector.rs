//! Sector assembly: walks a whole tile grid through the collision resolver.

use crate::model::{Sector, SectorEntity, SpriteSheet, TileGrid};
use crate::processor::collision::resolve_cell;

const ENTITY_PREFIX: &str = "object_";

/// Build the sector for one decoded level map.
///
/// Cells are visited x-major (outer `i`, inner `j`). Entity names carry the
/// visit counter, which advances for every cell whether or not it emits.
pub fn assemble_sector(name: &str, grid: &TileGrid, sheet: &SpriteSheet) -> Sector {
    let mut entities = Vec::new();
    let mut position = 0usize;

    for i in 0..grid.count_x {
        for j in 0..grid.count_y {
            if let Some(cell) = resolve_cell(grid, sheet, i, j) {
                entities.push(SectorEntity {
                    name: format!("{ENTITY_PREFIX}{position}"),
                    class_name: cell.class_name,
                    x: cell.grid_x as f32 * grid.tile_width as f32,
                    y: cell.grid_y as f32 * grid.tile_height as f32,
                });
            }
            position += 1;
        }
    }

    Sector {
        name: name.to_string(),
        tile_width: grid.tile_width,
        tile_height: grid.tile_height,
        count_x: grid.count_x,
        count_y: grid.count_y,
        entities,
    }
}
