use std::path::PathBuf;

use clap::Parser;

use crate::application::data::LogLevel;

/// Print the contents of a directory as a tree
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    /// Directory to render
    #[arg(allow_hyphen_values = true)]
    pub path: PathBuf,

    /// `-f` to include files (files are always listed)
    #[arg(allow_hyphen_values = true)]
    pub flag: Option<String>,

    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,
}

impl Cli {
    /// Only `-f` in the second position counts as the file flag.
    pub fn print_files(&self) -> bool {
        self.flag.as_deref() == Some("-f")
    }
}
