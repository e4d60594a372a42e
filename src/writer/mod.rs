//! Output document writers. The world is rendered in memory first and only
//! then written, so a failing run never leaves a partial document behind.

pub mod json;
pub mod xml;

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::model::World;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Xml,
    Json,
}

impl Format {
    /// `.json` destinations get JSON, everything else XML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Xml,
        }
    }
}

pub fn render(world: &World, format: Format) -> Result<Vec<u8>> {
    match format {
        Format::Xml => xml::render(world),
        Format::Json => json::render(world),
    }
}

pub fn emit(world: &World, destination: &Path) -> Result<()> {
    let bytes = render(world, Format::from_path(destination))?;

    if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(destination, bytes)?;
    Ok(())
}
