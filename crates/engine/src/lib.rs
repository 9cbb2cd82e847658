// crates/engine/src/lib.rs
pub mod config;
pub mod counter;
mod document;
pub mod error;
pub mod expect;
pub mod manifest;
pub mod options;
pub mod stats;

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::stats::{FileCount, RunResult};

/// Count every file of the manifest, one after another, in manifest order.
///
/// `on_count` is called for each file as soon as it has been counted and
/// closed, before the next file is opened.
///
/// # Errors
///
/// Without `keep_going`, the first file that cannot be opened or read stops
/// the run and is returned; later files are never touched. With
/// `keep_going`, file failures are collected in `RunResult::errors` instead.
/// An error from `on_count` always stops the run.
pub fn run<F>(config: &Config, mut on_count: F) -> Result<RunResult>
where
    F: FnMut(&FileCount) -> std::io::Result<()>,
{
    let manifest = &config.manifest;
    let mut result = RunResult::default();

    for input in &manifest.files {
        let path = manifest.path_of(input);
        log::debug!("counting {} ({})", path.display(), input.label);

        let lines = match counter::count_file(&path, config.terminators) {
            Ok(lines) => lines,
            Err(e) if config.keep_going => {
                log::warn!("skipping {}: {e}", input.label);
                result.errors.push((path, e));
                continue;
            }
            Err(e) => return Err(e),
        };

        let count = FileCount {
            label: input.label.clone(),
            path,
            lines,
        };
        on_count(&count).map_err(EngineError::Report)?;
        result.counts.push(count);
    }

    log::info!(
        "counted {} of {} files, {} lines in total",
        result.counts.len(),
        manifest.files.len(),
        result.total_lines()
    );
    Ok(result)
}
