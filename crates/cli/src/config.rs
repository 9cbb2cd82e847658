// crates/cli/src/config.rs
use crate::args::Args;
use crate::error::AppError;
use crate::options;
pub use linecheck_engine::config::{Config, ConfigBuilder};
use linecheck_engine::manifest::{InputFile, Manifest};
use linecheck_engine::options as engine_options;

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let manifest = manifest_from_args(&args)?;
        let format: engine_options::OutputFormat = args.output.format.into();
        let terminators: engine_options::TerminatorMode = args.input.terminators.into();

        ConfigBuilder::default()
            .manifest(manifest)
            .terminators(terminators)
            .format(format)
            .keep_going(args.input.keep_going)
            .expect(args.output.expect)
            .build()
            .map_err(|e| AppError::Config(e.to_string()))
    }
}

/// Start from the manifest file (or the built-in case study), then apply
/// `--root` and `--file` on top.
fn manifest_from_args(args: &Args) -> Result<Manifest, AppError> {
    let mut manifest = match &args.input.manifest {
        Some(path) => Manifest::from_file(path)?,
        None => Manifest::default(),
    };

    if let Some(root) = &args.input.root {
        manifest.root.clone_from(root);
    }
    if !args.input.files.is_empty() {
        manifest.files = args
            .input
            .files
            .iter()
            .map(|s| InputFile::from_suffix(s.as_str()))
            .collect();
    }

    manifest.validate()?;
    Ok(manifest)
}

// From trait implementations for CLI -> Engine enum conversion

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(options::OutputFormat, engine_options::OutputFormat, Plain, Json, Jsonl);
map_enum!(options::Terminators, engine_options::TerminatorMode, Universal, Lf);
