//! Source directory scan: finds the definitions map and the level maps.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ConvertConfig;
use crate::error::{ConvertError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFiles {
    pub definitions: PathBuf,
    /// Every other matching file, sorted by file name.
    pub levels: Vec<PathBuf>,
}

pub fn scan(dir: &Path, config: &ConvertConfig) -> Result<SourceFiles> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(&config.extension));
        if matches && path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    let definitions = dir.join(&config.definitions_file);
    let Some(slot) = files.iter().position(|f| *f == definitions) else {
        return Err(ConvertError::ConfigurationMissing { path: definitions });
    };
    files.remove(slot);

    Ok(SourceFiles {
        definitions,
        levels: files,
    })
}

/// Sector name for a level file: its stem.
pub fn sector_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "<map/>").unwrap();
    }

    #[test]
    fn test_scan_splits_definitions_from_levels() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "level2.tmx");
        touch(dir.path(), "Definitions.tmx");
        touch(dir.path(), "level1.tmx");
        touch(dir.path(), "notes.txt");
        fs::create_dir(dir.path().join("nested.tmx")).unwrap();

        let files = scan(dir.path(), &ConvertConfig::default()).unwrap();

        assert_eq!(files.definitions, dir.path().join("Definitions.tmx"));
        assert_eq!(
            files.levels,
            vec![dir.path().join("level1.tmx"), dir.path().join("level2.tmx")]
        );
    }

    #[test]
    fn test_scan_without_definitions() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "level1.tmx");

        match scan(dir.path(), &ConvertConfig::default()) {
            Err(ConvertError::ConfigurationMissing { path }) => {
                assert!(path.ends_with("Definitions.tmx"))
            }
            other => panic!("expected ConfigurationMissing, got {other:?}"),
        }
    }

    #[test]
    fn test_sector_name_is_stem() {
        assert_eq!(sector_name(Path::new("maps/stage01.tmx")), "stage01");
    }
}
