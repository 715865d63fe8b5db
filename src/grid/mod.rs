//! Lectura de la grilla del horario.
//!
//! Submódulos:
//! - `csv`: tokenizador CSV con soporte de comillas (celdas multilínea)
//! - `xlsx`: lectura de workbooks exportados con una hoja por día

pub mod csv;
pub mod xlsx;

pub use self::csv::parse_csv;
pub use self::xlsx::read_workbook_days;

/// true si todas las celdas de la fila son vacías o sólo espacios.
pub fn is_blank_row(row: &[String]) -> bool {
    row.iter().all(|c| c.trim().is_empty())
}
