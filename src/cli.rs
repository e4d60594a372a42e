use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Directory holding the Definitions.tmx file and the level .tmx maps
    pub source_dir: PathBuf,
    /// Output document (a `.json` extension selects JSON, anything else XML)
    pub destination: PathBuf,
}
