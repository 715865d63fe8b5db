//! Errores de carga/escritura de datafiles.
//!
//! El parser en sí no falla: celdas inválidas se descartan en silencio.
//! Sólo las operaciones con archivos devuelven `TimetableError`.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TimetableError>;

#[derive(Error, Debug)]
pub enum TimetableError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read workbook: {0}")]
    Excel(#[from] calamine::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("datafiles directory not found: {0:?}")]
    DatafilesDirNotFound(PathBuf),

    /// Ni CSV por día ni workbook en el directorio.
    #[error("no timetable files found in {0:?}")]
    NoTimetableFiles(PathBuf),
}
