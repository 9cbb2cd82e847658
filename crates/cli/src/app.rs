// crates/cli/src/app.rs
use crate::config::Config;
use crate::error::Result;
use crate::presentation::{self, Report};
use linecheck_engine::expect::Expectations;
use std::io::Write;

/// Count the configured files, writing the report to `out` and problems to
/// `err`.
///
/// Returns `Ok(true)` when every file was counted and matched its expected
/// count, `Ok(false)` when files were skipped (`keep_going`) or counts
/// disagree with the expectations.
///
/// # Errors
/// Returns the first file failure when `keep_going` is off, and any
/// configuration or write failure.
pub fn execute<W: Write, E: Write>(config: &Config, out: W, err: &mut E) -> Result<bool> {
    let expectations = match &config.expect {
        Some(path) => Expectations::load(path)?,
        None => Expectations::default(),
    };
    tracing::debug!(
        root = %config.manifest.root.display(),
        files = config.manifest.files.len(),
        "starting run"
    );

    let mut report = Report::new(out, config.format);
    let result = linecheck_engine::run(config, |count| report.file(count))?;
    report.finish(&result)?;

    let discrepancies = expectations.check(&result.counts);
    presentation::print_problems(err, &result, &discrepancies)?;

    if !expectations.is_empty() && discrepancies.is_empty() {
        tracing::info!("all counts match the expected values");
    }
    Ok(result.is_clean() && discrepancies.is_empty())
}
