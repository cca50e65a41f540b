use std::path::PathBuf;

use crate::cli::Cli;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Directory whose contents are rendered
    pub root: PathBuf,
    /// Accepted for compatibility; files are always listed.
    pub print_files: bool,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            print_files: cli.print_files(),
            root: cli.path,
        }
    }
}
