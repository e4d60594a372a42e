//! Parser for a level map: grid metadata from `<map>` plus the raw CSV of
//! the `<data>` block.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::warn;
use xml::reader::{EventReader, XmlEvent};

use super::{attr, parse_attr};
use crate::error::{ConvertError, Result};
use crate::model::RawLevel;

struct MapAttributes {
    tile_width: u32,
    tile_height: u32,
    count_x: u32,
    count_y: u32,
}

pub fn load_level(path: &Path) -> Result<RawLevel> {
    let file = File::open(path)?;
    parse_level(BufReader::new(file), &path.display().to_string())
}

/// Extract tile size, grid size and the tile index CSV from a level map.
///
/// Only one tile layer is expected; when several `<data>` blocks are present
/// the last one wins.
pub fn parse_level<R: Read>(reader: R, file: &str) -> Result<RawLevel> {
    let mut map: Option<MapAttributes> = None;
    let mut data: Option<String> = None;
    let mut buf: Option<String> = None;

    for event in EventReader::new(reader) {
        match event? {
            XmlEvent::StartElement {
                name, attributes, ..
            } => match name.local_name.as_str() {
                "map" => {
                    map = Some(MapAttributes {
                        count_x: parse_attr(file, "map", &attributes, "width")?,
                        count_y: parse_attr(file, "map", &attributes, "height")?,
                        tile_width: parse_attr(file, "map", &attributes, "tilewidth")?,
                        tile_height: parse_attr(file, "map", &attributes, "tileheight")?,
                    });
                }
                "data" => {
                    if let Some(encoding) = attr(&attributes, "encoding").filter(|e| *e != "csv") {
                        return Err(ConvertError::malformed(
                            file,
                            format!("unsupported <data> encoding `{encoding}`"),
                        ));
                    }
                    buf = Some(String::new());
                }
                _ => {}
            },
            XmlEvent::Characters(text) | XmlEvent::CData(text) | XmlEvent::Whitespace(text) => {
                if let Some(buf) = buf.as_mut() {
                    buf.push_str(&text);
                }
            }
            XmlEvent::EndElement { name } if name.local_name == "data" => {
                if data.is_some() {
                    warn!("{file}: several <data> blocks, only the last one is used");
                }
                data = buf.take().map(|b| b.trim().to_string());
            }
            _ => {}
        }
    }

    let map = map.ok_or_else(|| ConvertError::malformed(file, "missing <map> element"))?;
    let data = data.ok_or_else(|| ConvertError::malformed(file, "missing <data> block"))?;

    Ok(RawLevel {
        tile_width: map.tile_width,
        tile_height: map.tile_height,
        count_x: map.count_x,
        count_y: map.count_y,
        data,
    })
}
