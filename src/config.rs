//! Conversion settings.

pub const DEFINITIONS_FILE: &str = "Definitions.tmx";
pub const SOURCE_EXTENSION: &str = "tmx";
pub const WORLD_NAME: &str = "BattleCity";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    /// File name of the definitions map inside the source directory.
    pub definitions_file: String,
    /// Only files with this extension are picked up.
    pub extension: String,
    /// `name` attribute of the output world.
    pub world_name: String,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            definitions_file: DEFINITIONS_FILE.to_string(),
            extension: SOURCE_EXTENSION.to_string(),
            world_name: WORLD_NAME.to_string(),
        }
    }
}
