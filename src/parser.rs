use log::{debug, warn};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

use crate::models::ApiDescription;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Input file {0:?} does not exist")]
    InputNotFound(PathBuf),

    #[error("Failed to read file {path:?}: {source}")]
    IOError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error parsing document: {0}")]
    MalformedDocument(String),

    #[error("Unexpected document structure: {0}")]
    UnexpectedShape(String),
}

/// Text format of an input document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// `.json` files are read as JSON, everything else as YAML
    pub fn from_path(path: &Path) -> Self {
        match extension(path).as_deref() {
            Some("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
}

/// Parse document text in two steps: text to a generic tree (syntax errors),
/// then tree to the typed description (shape errors).
pub fn parse_document(text: &str, format: DocumentFormat) -> Result<ApiDescription, DocumentError> {
    match format {
        DocumentFormat::Yaml => {
            let mut value: serde_yaml::Value = serde_yaml::from_str(text)
                .map_err(|e| DocumentError::MalformedDocument(e.to_string()))?;
            // `<<: *anchor` merge keys
            value
                .apply_merge()
                .map_err(|e| DocumentError::MalformedDocument(e.to_string()))?;
            serde_yaml::from_value(value).map_err(|e| DocumentError::UnexpectedShape(e.to_string()))
        }
        DocumentFormat::Json => {
            let value: serde_json::Value = serde_json::from_str(text)
                .map_err(|e| DocumentError::MalformedDocument(e.to_string()))?;
            serde_json::from_value(value).map_err(|e| DocumentError::UnexpectedShape(e.to_string()))
        }
    }
}

/// Read and parse an API description from disk
pub fn load_document(path: impl AsRef<Path>) -> Result<ApiDescription, DocumentError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(DocumentError::InputNotFound(path.to_path_buf()));
    }

    if !matches!(extension(path).as_deref(), Some("yaml" | "yml" | "json")) {
        warn!("Input file does not have a .yaml, .yml or .json extension: {:?}", path);
    }

    let format = DocumentFormat::from_path(path);
    debug!("Loading {:?} as {:?}", path, format);

    let text = fs::read_to_string(path).map_err(|source| DocumentError::IOError {
        path: path.to_path_buf(),
        source,
    })?;

    parse_document(&text, format)
}
