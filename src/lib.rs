// Biblioteca raíz del crate `horario`.
// Parser del horario exportado (CSV/xlsx por día) y construcción del
// catálogo sección -> cursos que consume el UI.
pub mod algorithm;
pub mod api_json;
pub mod config;
pub mod datafiles;
pub mod error;
pub mod grid;
pub mod models;
pub mod parser;
pub mod server;

pub use algorithm::{
    build_catalog, day_to_weekday, get_all_sections, get_courses_by_section, group_by_section,
    parse_timetable, parse_timetable_grids,
};
pub use error::{Result, TimetableError};
pub use grid::parse_csv;
pub use models::{Catalog, Course, Day, ParsedEntry, Session};
pub use parser::{parse_cell_entry, parse_day_timetable};

/// Ejecuta el servidor HTTP (reexport para facilitar uso desde `main`)
pub use server::run_server;
