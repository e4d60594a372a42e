use std::collections::HashMap;

use serde::Serialize;

/// Axis-aligned box in sprite-sheet pixel space.
///
/// `x`/`y` are the reference point the overlap test compares directly;
/// boxes built from Tiled data put it at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Two boxes overlap when their reference points are no further apart
    /// than half the summed extent, on both axes. Symmetric in its operands.
    ///
    /// The stored `x`/`y` are compared as they are, not the box centres, so
    /// for boxes of different sizes this is a corner test rather than a
    /// centre-distance test.
    pub fn intersects(&self, other: &Rect) -> bool {
        (self.x - other.x).abs() * 2.0 <= self.w + other.w
            && (self.y - other.y).abs() * 2.0 <= self.h + other.h
    }
}

/// The image backing the sprite sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetImage {
    /// File name only, directories stripped.
    pub source: String,
    pub width: u32,
    pub height: u32,
}

/// One named object region declared in the definitions file.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteRegion {
    pub name: String,
    pub id: String,
    /// Filled in by a later `class` property; `None` never produces entities.
    pub class_name: Option<String>,
    pub bounds: Rect,
}

impl SpriteRegion {
    /// The class when one is set and non-empty.
    pub fn class(&self) -> Option<&str> {
        self.class_name.as_deref().filter(|c| !c.is_empty())
    }
}

/// Region table keyed by name, iterated in declaration order.
///
/// Lookup order matters: the collision resolver takes the first region that
/// overlaps a tile, so iteration follows the definitions file.
#[derive(Debug, Clone, Default)]
pub struct SpriteSheet {
    pub image: SheetImage,
    regions: Vec<SpriteRegion>,
    by_name: HashMap<String, usize>,
}

impl SpriteSheet {
    pub fn new(image: SheetImage) -> Self {
        Self {
            image,
            ..Default::default()
        }
    }

    /// Inserts a region. Re-declaring an existing name replaces the region
    /// but keeps its original slot; returns `true` in that case.
    pub fn insert(&mut self, region: SpriteRegion) -> bool {
        match self.by_name.get(&region.name) {
            Some(&slot) => {
                self.regions[slot] = region;
                true
            }
            None => {
                self.by_name.insert(region.name.clone(), self.regions.len());
                self.regions.push(region);
                false
            }
        }
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&SpriteRegion> {
        self.by_name.get(name).map(|&slot| &self.regions[slot])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut SpriteRegion> {
        match self.by_name.get(name) {
            Some(&slot) => Some(&mut self.regions[slot]),
            None => None,
        }
    }

    pub fn regions(&self) -> impl Iterator<Item = &SpriteRegion> {
        self.regions.iter()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Every region as a reusable frame, in declaration order.
    pub fn frame_catalog(&self) -> FrameCatalog {
        FrameCatalog {
            sprite_sheet: self.image.source.clone(),
            sprite_sheet_width: self.image.width,
            sprite_sheet_height: self.image.height,
            frames: self
                .regions
                .iter()
                .map(|r| Frame {
                    name: r.name.clone(),
                    id: r.id.clone(),
                    x: r.bounds.x,
                    y: r.bounds.y,
                    width: r.bounds.w,
                    height: r.bounds.h,
                })
                .collect(),
        }
    }
}

/// A level map as read from its source file, before decoding the indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLevel {
    pub tile_width: u32,
    pub tile_height: u32,
    pub count_x: u32,
    pub count_y: u32,
    /// Comma separated tile indices, newlines included.
    pub data: String,
}

/// Decoded tile indices of one level map, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    pub tile_width: u32,
    pub tile_height: u32,
    pub count_x: u32,
    pub count_y: u32,
    pub cells: Vec<u32>,
}

impl TileGrid {
    /// Tile index visited at grid cell `(i, j)` by the x-major walk.
    pub fn index_at(&self, i: u32, j: u32) -> u32 {
        self.cells[(i * self.count_y + j) as usize]
    }
}

/// Classification of one grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCell {
    pub grid_x: u32,
    pub grid_y: u32,
    pub class_name: String,
}

// ─────────────────────────────────────────────────────
// Output document
// ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub name: String,
    pub id: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameCatalog {
    pub sprite_sheet: String,
    pub sprite_sheet_width: u32,
    pub sprite_sheet_height: u32,
    pub frames: Vec<Frame>,
}

/// A classed entity placed in level (grid) space.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectorEntity {
    pub name: String,
    pub class_name: String,
    pub x: f32,
    pub y: f32,
}

/// Converted representation of one level map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sector {
    pub name: String,
    pub tile_width: u32,
    pub tile_height: u32,
    pub count_x: u32,
    pub count_y: u32,
    pub entities: Vec<SectorEntity>,
}

/// Fully processed output handed to `writer`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct World {
    pub name: String,
    pub frames: FrameCatalog,
    pub sectors: Vec<Sector>,
}
