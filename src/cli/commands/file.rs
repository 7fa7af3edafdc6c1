//! Single-file mode

use std::path::Path;

use transpose::config::GlobalConfig;
use transpose::output::{self, OutputMode, TransposeReport};
use transpose::pipeline;

/// Process one file and print its Result.
pub fn file(path: &Path, config: &GlobalConfig, mode: OutputMode) -> anyhow::Result<()> {
    match pipeline::process(path, config) {
        Ok(outcome) => {
            TransposeReport::from(&outcome).render(mode);
            Ok(())
        },
        Err(err) => {
            output::render_failure(&err.to_string(), mode);
            Err(err.into())
        },
    }
}
