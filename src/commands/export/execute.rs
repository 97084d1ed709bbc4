use std::error::Error;
use std::fmt::Display;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::info;

use super::ExportCmd;
use crate::commands::Execute;
use crate::db::SchemaSource;
use crate::schema::{convert, Conversion, SchemaDocument, SchemaWarning};

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to serialize schema document: {0}")]
    SerializeFailed(#[from] serde_json::Error),

    #[error("Failed to write {path}: {message}")]
    WriteFailed { path: String, message: String },
}

/// Summary of a finished export
#[derive(Debug, Clone, Serialize)]
pub struct ExportResult {
    pub output: PathBuf,
    pub classes: usize,
    pub relationships: usize,
    pub attributes: usize,
    pub warnings: Vec<SchemaWarning>,
}

/// Serialize the document exactly as it is written to disk.
pub fn render_document(document: &SchemaDocument, pretty: bool) -> Result<String, ExportError> {
    let body = if pretty {
        serde_json::to_string_pretty(document)?
    } else {
        serde_json::to_string(document)?
    };
    Ok(body)
}

fn write_document(path: &Path, body: &str) -> Result<(), ExportError> {
    write_atomically(path, |file| file.write_all(body.as_bytes()))
}

/// Write into a temporary file next to `path`, then rename it over `path`.
///
/// `path` is either left untouched or replaced by a complete file.
fn write_atomically<F>(path: &Path, write: F) -> Result<(), ExportError>
where
    F: FnOnce(&mut NamedTempFile) -> io::Result<()>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(|e| write_failed(path, e))?;
    write(&mut file).map_err(|e| write_failed(path, e))?;
    file.as_file().sync_all().map_err(|e| write_failed(path, e))?;
    file.persist(path).map_err(|e| write_failed(path, e.error))?;
    Ok(())
}

fn write_failed(path: &Path, error: impl Display) -> ExportError {
    ExportError::WriteFailed {
        path: path.display().to_string(),
        message: error.to_string(),
    }
}

impl Execute for ExportCmd {
    type Output = ExportResult;

    fn execute(self, source: &mut dyn SchemaSource) -> Result<Self::Output, Box<dyn Error>> {
        // Nothing touches the output path until the conversion has succeeded.
        let Conversion { document, warnings } = convert(source)?;
        let body = render_document(&document, self.pretty)?;
        write_document(&self.output, &body)?;
        info!("wrote schema to {}", self.output.display());

        Ok(ExportResult {
            classes: document.classes.len(),
            relationships: document.relationships.len(),
            attributes: document.attribute_count(),
            output: self.output,
            warnings,
        })
    }
}
