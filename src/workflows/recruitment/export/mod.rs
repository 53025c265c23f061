mod print;
mod sheet;

pub use print::{evaluation_document, schedule_document};
pub use sheet::{
    evaluation_csv, evaluation_export_file_name, schedule_csv, SCHEDULE_EXPORT_FILE,
};

use std::path::{Path, PathBuf};

use serde::Serialize;

/// A named export blob ready to hand to the host environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportFile {
    pub file_name: String,
    pub contents: String,
}

impl ExportFile {
    /// Write the export under `dir` (created if absent) and return the full
    /// path of the written file.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.contents)?;
        Ok(path)
    }
}

/// Failure while materializing or writing an export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write export file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not serialize export rows: {0}")]
    Csv(#[from] csv::Error),
    #[error("export produced invalid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
