use serde::{Deserialize, Serialize};

/// Which byte sequences end a line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TerminatorMode {
    /// `\n`, `\r\n` and a lone `\r` each end one line
    #[default]
    Universal,
    /// Only `\n` ends a line
    Lf,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<count> lines in <path>`, one line per file
    #[default]
    Plain,
    Json,
    Jsonl,
}
