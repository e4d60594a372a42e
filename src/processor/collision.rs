//! Collision resolver: decides which sprite region, if any, a grid cell's
//! tile belongs to.
//!
//! Two coordinate spaces are involved. The tile index stored in a cell is a
//! position on the sprite sheet, laid out with the level's own column count
//! as row stride; that sheet-space box is what gets tested against the
//! regions. The cell's grid coordinates only decide where the resulting
//! entity is placed.

use crate::model::{Rect, ResolvedCell, SpriteSheet, TileGrid};

/// Shrink applied to a tile box before overlap tests so that tiles merely
/// touching a region's edge do not match it.
pub const BOUNDING_BOX_TOLERANCE: f32 = 0.5;

/// Sheet-space box of tile index `tile`, before any tolerance is applied.
pub fn sheet_box(grid: &TileGrid, tile: u32) -> Rect {
    let tile_w = grid.tile_width as f32;
    let tile_h = grid.tile_height as f32;
    let row = tile / grid.count_x;
    let col = tile % grid.count_x;
    Rect::new(col as f32 * tile_w, row as f32 * tile_h, tile_w, tile_h)
}

/// Class of the first region overlapping `cell`, a tile box already shrunk
/// by [`BOUNDING_BOX_TOLERANCE`].
///
/// Only the first overlapping region is considered. A box wider or taller
/// than one tile is only accepted when it also overlaps a single tile placed
/// at the region's own origin. A tile box restored from the tolerance is
/// exactly one tile, so every tile of a multi-tile sprite takes its class.
pub fn classify<'a>(
    sheet: &'a SpriteSheet,
    cell: Rect,
    tile_w: f32,
    tile_h: f32,
) -> Option<&'a str> {
    let region = sheet.regions().find(|r| r.bounds.intersects(&cell))?;

    let restored = Rect {
        w: cell.w + BOUNDING_BOX_TOLERANCE,
        h: cell.h + BOUNDING_BOX_TOLERANCE,
        ..cell
    };

    if restored.w == tile_w && restored.h == tile_h {
        region.class()
    } else if restored.w > tile_w || restored.h > tile_h {
        let top_left = Rect::new(region.bounds.x, region.bounds.y, tile_w, tile_h);
        if restored.intersects(&top_left) {
            region.class()
        } else {
            None
        }
    } else {
        None
    }
}

/// Resolve grid cell `(i, j)` of `grid` against the region table.
///
/// Returns `None` when the tile overlaps no region or the matched region has
/// no class.
pub fn resolve_cell(
    grid: &TileGrid,
    sheet: &SpriteSheet,
    i: u32,
    j: u32,
) -> Option<ResolvedCell> {
    let mut cell = sheet_box(grid, grid.index_at(i, j));
    cell.x += BOUNDING_BOX_TOLERANCE;
    cell.y += BOUNDING_BOX_TOLERANCE;
    cell.w -= BOUNDING_BOX_TOLERANCE;
    cell.h -= BOUNDING_BOX_TOLERANCE;

    let class_name = classify(sheet, cell, grid.tile_width as f32, grid.tile_height as f32)?;
    Some(ResolvedCell {
        grid_x: i,
        grid_y: j,
        class_name: class_name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SheetImage, SpriteRegion};

    fn sheet(regions: &[(&str, Option<&str>, Rect)]) -> SpriteSheet {
        let mut sheet = SpriteSheet::new(SheetImage::default());
        for (i, (name, class, bounds)) in regions.iter().enumerate() {
            sheet.insert(SpriteRegion {
                name: name.to_string(),
                id: i.to_string(),
                class_name: class.map(str::to_string),
                bounds: *bounds,
            });
        }
        sheet
    }

    fn grid(count_x: u32, count_y: u32, cells: Vec<u32>) -> TileGrid {
        TileGrid {
            tile_width: 16,
            tile_height: 16,
            count_x,
            count_y,
            cells,
        }
    }

    #[test]
    fn test_sheet_box_uses_level_stride() {
        let g = grid(4, 1, vec![0; 4]);
        assert_eq!(sheet_box(&g, 0), Rect::new(0.0, 0.0, 16.0, 16.0));
        assert_eq!(sheet_box(&g, 5), Rect::new(16.0, 16.0, 16.0, 16.0));
        assert_eq!(sheet_box(&g, 11), Rect::new(48.0, 32.0, 16.0, 16.0));
    }

    #[test]
    fn test_single_tile_region_matches_its_tile_only() {
        let s = sheet(&[("Brick", Some("Wall"), Rect::new(0.0, 0.0, 16.0, 16.0))]);
        let g = grid(2, 1, vec![0, 1]);

        let hit = resolve_cell(&g, &s, 0, 0).expect("tile 0 is the brick");
        assert_eq!(hit.class_name, "Wall");
        assert_eq!((hit.grid_x, hit.grid_y), (0, 0));

        assert_eq!(resolve_cell(&g, &s, 1, 0), None);
    }

    #[test]
    fn test_tile_on_second_sheet_row() {
        let s = sheet(&[
            ("Brick", Some("Wall"), Rect::new(0.0, 0.0, 16.0, 16.0)),
            ("Water", Some("Water"), Rect::new(16.0, 16.0, 16.0, 16.0)),
        ]);
        // stride 2: index 3 is column 1 of row 1
        let g = grid(2, 1, vec![3, 0]);
        assert_eq!(resolve_cell(&g, &s, 0, 0).unwrap().class_name, "Water");
    }

    #[test]
    fn test_first_match_wins() {
        let s = sheet(&[
            ("A", Some("First"), Rect::new(0.0, 0.0, 16.0, 16.0)),
            ("B", Some("Second"), Rect::new(0.0, 0.0, 16.0, 16.0)),
        ]);
        let g = grid(1, 1, vec![0]);
        assert_eq!(resolve_cell(&g, &s, 0, 0).unwrap().class_name, "First");
    }

    #[test]
    fn test_classless_region_still_occupies_space() {
        let s = sheet(&[
            ("Decor", None, Rect::new(0.0, 0.0, 16.0, 16.0)),
            ("Brick", Some("Wall"), Rect::new(0.0, 0.0, 16.0, 16.0)),
        ]);
        let g = grid(1, 1, vec![0]);
        assert_eq!(resolve_cell(&g, &s, 0, 0), None);
    }

    #[test]
    fn test_empty_class_emits_nothing() {
        let s = sheet(&[("Brick", Some(""), Rect::new(0.0, 0.0, 16.0, 16.0))]);
        let g = grid(1, 1, vec![0]);
        assert_eq!(resolve_cell(&g, &s, 0, 0), None);
    }

    #[test]
    fn test_enlarged_box_only_accepted_at_region_origin() {
        let s = sheet(&[("Base", Some("Eagle"), Rect::new(32.0, 0.0, 32.0, 32.0))]);
        let tol = BOUNDING_BOX_TOLERANCE;

        // a two-tile box starting on the region's top-left tile
        let at_origin = Rect::new(32.0 + tol, tol, 32.0 - tol, 32.0 - tol);
        assert_eq!(classify(&s, at_origin, 16.0, 16.0), Some("Eagle"));

        // same size, pushed 28 units down: still overlaps the region but
        // not its top-left tile
        let shifted = Rect::new(32.0 + tol, 28.0 + tol, 32.0 - tol, 32.0 - tol);
        assert!(s.get("Base").unwrap().bounds.intersects(&shifted));
        assert_eq!(classify(&s, shifted, 16.0, 16.0), None);
    }

    #[test]
    fn test_classify_without_regions() {
        let s = sheet(&[]);
        let cell = Rect::new(0.5, 0.5, 15.5, 15.5);
        assert_eq!(classify(&s, cell, 16.0, 16.0), None);
    }
}
