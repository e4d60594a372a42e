//! Parser for the definitions map: the sprite sheet image plus one object per
//! named region, each optionally tagged with a `class` property.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::{debug, warn};
use xml::reader::{EventReader, XmlEvent};

use super::{parse_attr, required_attr};
use crate::error::{ConvertError, Result};
use crate::model::{Rect, SheetImage, SpriteRegion, SpriteSheet};

const CLASS_PROPERTY: &str = "class";

pub fn load_definitions(path: &Path) -> Result<SpriteSheet> {
    let file = File::open(path)?;
    parse_definitions(BufReader::new(file), &path.display().to_string())
}

/// Build the sprite region table from a definitions document.
///
/// A `<property name="class">` applies to the most recently declared
/// `<object>`, whatever element it is nested in.
pub fn parse_definitions<R: Read>(reader: R, file: &str) -> Result<SpriteSheet> {
    let mut sheet = SpriteSheet::default();
    let mut seen_image = false;
    let mut current: Option<String> = None;

    for event in EventReader::new(reader) {
        let XmlEvent::StartElement {
            name, attributes, ..
        } = event?
        else {
            continue;
        };

        match name.local_name.as_str() {
            "image" => {
                let source = required_attr(file, "image", &attributes, "source")?;
                sheet.image = SheetImage {
                    source: Path::new(source)
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default(),
                    width: parse_attr(file, "image", &attributes, "width")?,
                    height: parse_attr(file, "image", &attributes, "height")?,
                };
                seen_image = true;
            }
            "object" => {
                let region_name = required_attr(file, "object", &attributes, "name")?.to_string();
                let bounds = Rect::new(
                    parse_attr(file, "object", &attributes, "x")?,
                    parse_attr(file, "object", &attributes, "y")?,
                    parse_attr(file, "object", &attributes, "width")?,
                    parse_attr(file, "object", &attributes, "height")?,
                );
                if !(bounds.w > 0.0 && bounds.h > 0.0) {
                    return Err(ConvertError::malformed(
                        file,
                        format!("region `{region_name}` has an empty extent"),
                    ));
                }

                let region = SpriteRegion {
                    name: region_name.clone(),
                    id: required_attr(file, "object", &attributes, "id")?.to_string(),
                    class_name: None,
                    bounds,
                };
                if sheet.insert(region) {
                    warn!("{file}: region `{region_name}` declared twice, keeping the last one");
                }
                current = Some(region_name);
            }
            "property" => {
                if required_attr(file, "property", &attributes, "name")? != CLASS_PROPERTY {
                    continue;
                }
                let region = current
                    .as_deref()
                    .and_then(|n| sheet.get_mut(n))
                    .ok_or_else(|| {
                        ConvertError::malformed(file, "`class` property outside of any region")
                    })?;
                let value = required_attr(file, "property", &attributes, "value")?;
                region.class_name = Some(value.to_string());
            }
            _ => {}
        }
    }

    if !seen_image {
        return Err(ConvertError::malformed(file, "missing <image> element"));
    }

    debug!("{file}: {} sprite regions", sheet.len());
    Ok(sheet)
}
