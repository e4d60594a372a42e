//! Emit the world as the indented XML scene document.

use xml::common::XmlVersion;
use xml::writer::{EmitterConfig, EventWriter, XmlEvent};

use crate::error::Result;
use crate::model::{FrameCatalog, Sector, World};

const FRAME_MANAGER: &str = "FrameManager";

type Writer = EventWriter<Vec<u8>>;

pub fn render(world: &World) -> Result<Vec<u8>> {
    let mut w = EmitterConfig::new()
        .perform_indent(true)
        .create_writer(Vec::new());

    w.write(XmlEvent::StartDocument {
        version: XmlVersion::Version10,
        encoding: Some("utf-8"),
        standalone: None,
    })?;

    start(&mut w, "world", &[("name", world.name.as_str())])?;
    frame_catalog(&mut w, &world.frames)?;

    start(&mut w, "sectors", &[])?;
    for sector in &world.sectors {
        write_sector(&mut w, sector)?;
    }
    end(&mut w)?; // sectors

    end(&mut w)?; // world
    Ok(w.into_inner())
}

fn frame_catalog(w: &mut Writer, catalog: &FrameCatalog) -> Result<()> {
    start(w, "entity", &[("class", FRAME_MANAGER), ("name", FRAME_MANAGER)])?;

    let sheet = catalog.sprite_sheet.as_str();
    leaf(w, "string", &[("name", "SpriteSheet"), ("value", sheet)])?;
    let width = catalog.sprite_sheet_width.to_string();
    leaf(w, "string", &[("name", "SpriteSheetWidth"), ("value", width.as_str())])?;
    let height = catalog.sprite_sheet_height.to_string();
    leaf(w, "string", &[("name", "SpriteSheetHeight"), ("value", height.as_str())])?;

    for frame in &catalog.frames {
        start(w, "entity", &[("class", "Frame"), ("name", frame.name.as_str())])?;
        leaf(w, "integer", &[("name", "id"), ("value", frame.id.as_str())])?;
        position(w, frame.x, frame.y)?;
        let (width, height) = (frame.width.to_string(), frame.height.to_string());
        leaf(w, "integer", &[("name", "width"), ("value", width.as_str())])?;
        leaf(w, "integer", &[("name", "height"), ("value", height.as_str())])?;
        end(w)?;
    }

    end(w)
}

fn write_sector(w: &mut Writer, sector: &Sector) -> Result<()> {
    start(w, "sector", &[("name", sector.name.as_str())])?;

    for (key, value) in [
        ("tilewidth", sector.tile_width),
        ("tileheight", sector.tile_height),
        ("numtilesX", sector.count_x),
        ("numtilesY", sector.count_y),
    ] {
        leaf(w, "integer", &[("name", key), ("value", value.to_string().as_str())])?;
    }

    start(w, "entities", &[])?;
    for entity in &sector.entities {
        let class = entity.class_name.as_str();
        start(w, "entity", &[("class", class), ("name", entity.name.as_str())])?;
        position(w, entity.x, entity.y)?;
        end(w)?;
    }
    end(w)?;

    end(w)
}

fn position(w: &mut Writer, x: f32, y: f32) -> Result<()> {
    let (x, y) = (x.to_string(), y.to_string());
    leaf(
        w,
        "vector",
        &[
            ("name", "Position"),
            ("x", x.as_str()),
            ("y", y.as_str()),
            ("z", "0"),
            ("w", "0"),
        ],
    )
}

fn start(w: &mut Writer, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
    let mut element = XmlEvent::start_element(name);
    for &(key, value) in attrs {
        element = element.attr(key, value);
    }
    w.write(element)?;
    Ok(())
}

fn end(w: &mut Writer) -> Result<()> {
    w.write(XmlEvent::end_element())?;
    Ok(())
}

fn leaf(w: &mut Writer, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
    start(w, name, attrs)?;
    end(w)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Frame, SectorEntity};

    fn world() -> World {
        World {
            name: "BattleCity".into(),
            frames: FrameCatalog {
                sprite_sheet: "tiles.png".into(),
                sprite_sheet_width: 32,
                sprite_sheet_height: 16,
                frames: vec![Frame {
                    name: "Brick".into(),
                    id: "1".into(),
                    x: 16.0,
                    y: 0.0,
                    width: 16.0,
                    height: 16.0,
                }],
            },
            sectors: vec![Sector {
                name: "level1".into(),
                tile_width: 16,
                tile_height: 16,
                count_x: 2,
                count_y: 1,
                entities: vec![SectorEntity {
                    name: "object_1".into(),
                    class_name: "Wall".into(),
                    x: 16.0,
                    y: 0.0,
                }],
            }],
        }
    }

    #[test]
    fn test_renders_world_document() {
        let xml = String::from_utf8(render(&world()).unwrap()).unwrap();

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
        assert!(xml.contains("<world name=\"BattleCity\">"));
        assert!(xml.contains("<entity class=\"FrameManager\" name=\"FrameManager\">"));
        assert!(xml.contains("<string name=\"SpriteSheetWidth\" value=\"32\""));
        assert!(xml.contains("<entity class=\"Frame\" name=\"Brick\">"));
        assert!(xml.contains("<vector name=\"Position\" x=\"16\" y=\"0\" z=\"0\" w=\"0\""));
        assert!(xml.contains("<integer name=\"numtilesX\" value=\"2\""));
        assert!(xml.contains("<entity class=\"Wall\" name=\"object_1\">"));
        assert!(xml.trim_end().ends_with("</world>"));
    }

    #[test]
    fn test_frames_precede_sectors() {
        let xml = String::from_utf8(render(&world()).unwrap()).unwrap();
        let frames = xml.find("FrameManager").unwrap();
        let sectors = xml.find("<sectors>").unwrap();
        assert!(frames < sectors);
    }

    #[test]
    fn test_attribute_values_are_escaped() {
        let mut w = world();
        w.name = "Tom & Jerry".into();
        let xml = String::from_utf8(render(&w).unwrap()).unwrap();
        assert!(xml.contains("name=\"Tom &amp; Jerry\""));
    }
}
