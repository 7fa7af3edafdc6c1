//! Directory mode: recursive discovery plus parallel fan-out

use std::path::Path;

use log::info;

use transpose::batch;
use transpose::config::GlobalConfig;
use transpose::output::{self, OutputMode};

/// Discover every supported file under `path` and process each one
/// independently on the worker pool.
pub fn dir(path: &Path, config: &GlobalConfig, mode: OutputMode) -> anyhow::Result<()> {
    let files = match batch::discover(path, config) {
        Ok(files) => files,
        Err(err) => {
            output::render_failure(&err.to_string(), mode);
            return Err(err.into());
        },
    };

    let summary = match batch::run(&files, config, mode) {
        Ok(summary) => summary,
        Err(err) => {
            output::render_failure(&err.to_string(), mode);
            return Err(err.into());
        },
    };

    info!("{} file(s) processed, {} failed", summary.processed, summary.failed);

    if summary.failed > 0 {
        anyhow::bail!("{} file(s) could not be processed", summary.failed);
    }
    Ok(())
}
