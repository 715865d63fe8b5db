//! Parser de celdas y días del horario.
//!
//! Submódulos:
//! - `tables`: tablas fijas (nombres de cursos, bloques horarios)
//! - `cell`: celda -> `ParsedEntry`
//! - `day`: hoja de un día -> lista de entradas, con detección de labs multi-bloque

pub mod cell;
pub mod day;
pub mod tables;

pub use cell::parse_cell_entry;
pub use day::{parse_day_grid, parse_day_timetable};
pub use tables::{course_name, time_slot};
