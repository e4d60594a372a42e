//! Tile index decoder: CSV text of a `<data>` block into a [`TileGrid`].

use crate::error::{ConvertError, Result};
use crate::model::{RawLevel, TileGrid};

/// Decode the comma separated tile indices of `level`.
///
/// Newlines are dropped before splitting; each token must be a non-negative
/// integer. The index count has to match `count_x * count_y` exactly.
pub fn decode(level: &RawLevel, file: &str) -> Result<TileGrid> {
    let csv = level.data.replace('\n', "");

    let cells = if csv.trim().is_empty() {
        Vec::new()
    } else {
        csv.split(',')
            .enumerate()
            .map(|(pos, token)| {
                token.trim().parse::<u32>().map_err(|_| {
                    ConvertError::malformed(
                        file,
                        format!("invalid tile index {token:?} at position {pos}"),
                    )
                })
            })
            .collect::<Result<Vec<_>>>()?
    };

    let expected = level.count_x as usize * level.count_y as usize;
    if cells.len() != expected {
        return Err(ConvertError::malformed(
            file,
            format!(
                "expected {expected} tile indices for a {}x{} map, got {}",
                level.count_x,
                level.count_y,
                cells.len()
            ),
        ));
    }

    Ok(TileGrid {
        tile_width: level.tile_width,
        tile_height: level.tile_height,
        count_x: level.count_x,
        count_y: level.count_y,
        cells,
    })
}
