//! Loads the exported sound list.
//!
//! The input must be a JSON object whose `sounds` member is an array; every
//! other shape is rejected with [`Error::Format`]. The array elements are
//! kept as raw values so one malformed entry cannot reject the document.
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Top-level shape of the input file.
#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    pub sounds: Vec<serde_json::Value>,
}

/// Parse a document from text.
pub fn parse_document(text: &str) -> Result<Document> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let value: serde_json::Value = serde_json::from_str(text).map_err(|e| {
        debug!("Input is not valid JSON: {}", e);
        Error::Format
    })?;
    // Deserializing straight into `Document` would also accept a top-level
    // array (serde maps sequences onto structs), so check the shape first.
    if !value.get("sounds").is_some_and(serde_json::Value::is_array) {
        return Err(Error::Format);
    }
    Document::deserialize(value).map_err(|e| {
        debug!("Unexpected document shape: {}", e);
        Error::Format
    })
}

/// Read the whole file at `path` and parse it.
pub fn read_document(path: &Path) -> Result<Document> {
    let text = read_text(path)?;
    let document = parse_document(&text)?;
    info!("Loaded {} sound entries from {:?}", document.sounds.len(), path);
    Ok(document)
}

fn read_text(path: &Path) -> Result<String> {
    let open_error = |source| Error::Open {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::open(path).map_err(open_error)?;
    let mut text = String::new();
    file.read_to_string(&mut text).map_err(open_error)?;
    Ok(text)
}
