use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<行数> lines in <パス>` 形式（1ファイル1行）
    #[default]
    Plain,
    Json,
    Jsonl,
}

/// 行末として扱う文字
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum Terminators {
    /// `\n`・`\r\n`・単独の `\r` をいずれも行末とみなす
    #[default]
    Universal,
    /// `\n` のみ
    Lf,
}
