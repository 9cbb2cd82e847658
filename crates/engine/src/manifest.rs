// crates/engine/src/manifest.rs
use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root directory of the case study the default inputs live in.
pub const DEFAULT_ROOT: &str = "Business Analytics Case Study v1.4";

/// The case-study input files, as `(label, suffix)` pairs.
pub const DEFAULT_INPUTS: [(&str, &str); 4] = [
    ("bookings", "SAS/Data/Input/Bookings.csv"),
    ("destinations", "SAS/Data/Input/Destinations.csv"),
    ("households", "SAS/Data/Input/Households.csv"),
    ("loyalty", "SAS/Data/Input/loyalty.dat"),
];

/// One input file, named relative to the manifest root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputFile {
    pub label: String,
    pub suffix: String,
}

impl InputFile {
    pub fn new(label: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            suffix: suffix.into(),
        }
    }

    /// Build an entry whose label is the file stem of `suffix`.
    pub fn from_suffix(suffix: impl Into<String>) -> Self {
        let suffix = suffix.into();
        let label = Path::new(&suffix.replace('\\', "/"))
            .file_stem()
            .map_or_else(|| suffix.clone(), |s| s.to_string_lossy().into_owned());
        Self { label, suffix }
    }

    /// The suffix as a relative path. Both `/` and `\` separate components,
    /// and empty components are dropped, so a leading separator never turns
    /// the suffix into an absolute path.
    pub fn relative_path(&self) -> PathBuf {
        self.suffix
            .split(['/', '\\'])
            .filter(|part| !part.is_empty())
            .collect()
    }
}

/// Root directory plus the ordered list of files to count under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub root: PathBuf,
    pub files: Vec<InputFile>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            files: DEFAULT_INPUTS
                .iter()
                .map(|(label, suffix)| InputFile::new(*label, *suffix))
                .collect(),
        }
    }
}

impl Manifest {
    /// Load a manifest from a YAML or JSON file.
    ///
    /// # Errors
    /// Fails when the file cannot be read, does not parse, or lists no files.
    pub fn from_file(path: &Path) -> Result<Self> {
        let manifest: Self = crate::document::load(path)?;
        manifest.validate()?;
        log::debug!(
            "loaded manifest {} ({} files)",
            path.display(),
            manifest.files.len()
        );
        Ok(manifest)
    }

    /// # Errors
    /// Fails when the file list is empty or a suffix has no path components.
    pub fn validate(&self) -> Result<()> {
        if self.files.is_empty() {
            return Err(EngineError::Manifest("no input files listed".to_string()));
        }
        if let Some(file) = self
            .files
            .iter()
            .find(|f| f.relative_path().as_os_str().is_empty())
        {
            return Err(EngineError::Manifest(format!(
                "empty suffix for '{}'",
                file.label
            )));
        }
        Ok(())
    }

    pub fn path_of(&self, file: &InputFile) -> PathBuf {
        self.root.join(file.relative_path())
    }

    /// Full paths of every input file, in manifest order.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.iter().map(|f| self.path_of(f)).collect()
    }
}
