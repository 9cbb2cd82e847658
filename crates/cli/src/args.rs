// crates/cli/src/args.rs
use crate::options::{OutputFormat, Terminators};
use clap::{ArgAction, Args as ClapArgs, Parser, ValueHint};
use std::path::PathBuf;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "linecheck",
    version = crate::VERSION,
    about = "入力データファイルの行数を数え、データセット報告との照合を補助するツール"
)]
pub struct Args {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(ClapArgs, Debug, Default)]
pub struct InputArgs {
    /// ルートディレクトリ（既定: ケーススタディのディレクトリ）
    #[arg(long, value_hint = ValueHint::DirPath, help_heading = "入力")]
    pub root: Option<PathBuf>,

    /// ルートとファイル一覧を YAML/JSON から読み込む
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "入力")]
    pub manifest: Option<PathBuf>,

    /// 対象ファイル（ルートからの相対パス, 複数指定可）。指定すると既定の一覧を置き換えます
    #[arg(short = 'f', long = "file", help_heading = "入力")]
    pub files: Vec<String>,

    /// 行末の扱い
    #[arg(long, value_enum, default_value = "universal", help_heading = "入力")]
    pub terminators: Terminators,

    /// 読めないファイルがあっても残りのファイルを数え続ける
    #[arg(long, help_heading = "入力")]
    pub keep_going: bool,
}

#[derive(ClapArgs, Debug, Default)]
pub struct OutputArgs {
    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "plain", help_heading = "出力")]
    pub format: OutputFormat,

    /// 期待行数（ラベル: 行数 の YAML/JSON）と照合する
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "出力")]
    pub expect: Option<PathBuf>,
}

#[derive(ClapArgs, Debug, Default)]
pub struct LogArgs {
    /// ログを詳細にする（-v: info, -vv: debug, -vvv: trace）
    #[arg(short, long, action = ArgAction::Count, help_heading = "ログ")]
    pub verbose: u8,

    /// エラー以外のログを抑制
    #[arg(short, long, conflicts_with = "verbose", help_heading = "ログ")]
    pub quiet: bool,
}

impl LogArgs {
    /// Filter directive for the requested verbosity, or `None` to defer to
    /// `RUST_LOG`.
    pub const fn level(&self) -> Option<&'static str> {
        if self.quiet {
            return Some("error");
        }
        match self.verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_need_no_arguments() {
        let args = Args::try_parse_from(["linecheck"]).unwrap();
        assert!(args.input.root.is_none());
        assert!(args.input.files.is_empty());
        assert_eq!(args.output.format, OutputFormat::Plain);
        assert_eq!(args.input.terminators, Terminators::Universal);
        assert!(!args.input.keep_going);
        assert_eq!(args.log.level(), None);
    }

    #[test]
    fn repeated_files_keep_their_order() {
        let args = Args::try_parse_from(["linecheck", "-f", "b.csv", "--file", "a.dat"]).unwrap();
        assert_eq!(args.input.files, vec!["b.csv", "a.dat"]);
    }

    #[test]
    fn verbosity_flags() {
        let args = Args::try_parse_from(["linecheck", "-vv"]).unwrap();
        assert_eq!(args.log.level(), Some("debug"));

        let args = Args::try_parse_from(["linecheck", "-q"]).unwrap();
        assert_eq!(args.log.level(), Some("error"));

        assert!(Args::try_parse_from(["linecheck", "-q", "-v"]).is_err());
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Args::try_parse_from(["linecheck", "--format", "csv"]).is_err());
    }
}
