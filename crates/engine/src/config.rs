use crate::manifest::Manifest;
use crate::options::{OutputFormat, TerminatorMode};
use derive_builder::Builder;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub manifest: Manifest,
    #[builder(default)]
    pub terminators: TerminatorMode,
    #[builder(default)]
    pub format: OutputFormat,
    /// Record failed files and continue instead of stopping at the first one.
    #[builder(default)]
    pub keep_going: bool,
    /// Expected counts to check the results against.
    #[builder(default)]
    pub expect: Option<PathBuf>,
}
