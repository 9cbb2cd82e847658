// crates/engine/src/document.rs
use crate::error::{EngineError, Result};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Load a YAML or JSON document. `.json` files are read as JSON, anything
/// else as YAML (which also accepts most JSON).
pub(crate) fn load<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path).map_err(|e| EngineError::file_read(path, e))?;
    let is_json = path
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(&text).map_err(|source| EngineError::Json {
            path: path.to_path_buf(),
            source,
        })
    } else {
        serde_yaml::from_str(&text).map_err(|source| EngineError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }
}
