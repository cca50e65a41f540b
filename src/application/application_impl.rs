use std::io::{self, BufWriter, Write};

use snafu::Snafu;
use snafu::prelude::*;
use tracing::{debug, trace};

use crate::application::RuntimeConfig;
use crate::ext::PathDisplayExt;
use crate::filesystem::{self, Node, TraversalError};

pub struct Application;

impl Application {
    /// Builds the tree for the configured root and prints it to stdout.
    pub fn run(app_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());

        Self::run_with_output(app_config, &mut out)?;
        out.flush().context(OutputSnafu)?;

        Ok(())
    }

    /// Same as [`Application::run`], writing to `out`. Nothing is written
    /// unless the root directory could be read.
    pub fn run_with_output(
        app_config: impl Into<RuntimeConfig>,
        out: &mut impl Write,
    ) -> Result<(), ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        debug!("Runtime config: {:?}", app_config);
        if !app_config.print_files {
            debug!("File listing flag not set; files are listed regardless");
        }

        debug!("Building tree for {}", app_config.root.absolute_display());
        let tree = filesystem::build(&app_config.root).context(TraversalSnafu)?;
        trace!(
            "Top-level entries: {:?}",
            tree.iter().map(Node::name).collect::<Vec<_>>()
        );

        filesystem::render(out, &tree).context(OutputSnafu)?;

        Ok(())
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while reading the directory tree"))]
    TraversalError { source: TraversalError },
    #[snafu(display("Critical failure encountered while writing the tree"))]
    OutputError { source: io::Error },
}
