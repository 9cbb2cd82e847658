use crate::error::EngineError;
use linecheck_shared_kernel::LineCount;
use serde::Serialize;
use std::path::PathBuf;

/// Line count of one input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileCount {
    pub label: String,
    pub path: PathBuf,
    pub lines: LineCount,
}

/// Outcome of a run: counted files in manifest order, plus the failures
/// skipped over when running with `keep_going`.
#[derive(Debug, Default)]
pub struct RunResult {
    pub counts: Vec<FileCount>,
    pub errors: Vec<(PathBuf, EngineError)>,
}

impl RunResult {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn total_lines(&self) -> LineCount {
        self.counts.iter().map(|c| c.lines).sum()
    }
}
