// Módulo de alto nivel: arma el catálogo sección -> cursos a partir de los días
// Declarar submódulos (archivos en la carpeta `src/algorithm`)
pub mod aggregate;
pub mod group;
pub mod lookup;
pub mod merge;

// Reexportar solo la API pública que se usa desde fuera
pub use aggregate::aggregate_courses;
pub use group::group_by_section;
pub use lookup::{day_to_weekday, get_all_sections, get_courses_by_section, summarize_catalog, try_day_to_weekday};
pub use merge::merge_consecutive_sessions;

use log::info;
use std::collections::BTreeMap;

use crate::models::{Catalog, Day, Grid, ParsedEntry};
use crate::parser::{parse_day_grid, parse_day_timetable};

/// Construye el catálogo a partir del CSV de cada día.
///
/// Los días se procesan de lunes a viernes; un día ausente simplemente no
/// aporta entradas. Es una función pura: el mismo input da el mismo catálogo.
pub fn parse_timetable(csv_files_by_day: &BTreeMap<Day, String>) -> Catalog {
	let mut entries: Vec<ParsedEntry> = Vec::new();
	for (day, csv_text) in csv_files_by_day.iter() {
		entries.extend(parse_day_timetable(csv_text, day.as_str()));
	}
	build_catalog(entries)
}

/// Igual que `parse_timetable` pero con grillas ya leídas (p. ej. desde un workbook).
pub fn parse_timetable_grids(grids_by_day: &BTreeMap<Day, Grid>) -> Catalog {
	let mut entries: Vec<ParsedEntry> = Vec::new();
	for (day, grid) in grids_by_day.iter() {
		entries.extend(parse_day_grid(grid, day.as_str()));
	}
	build_catalog(entries)
}

/// Agrupa por sección y agrega cursos dentro de cada sección.
pub fn build_catalog(entries: Vec<ParsedEntry>) -> Catalog {
	let total_entries = entries.len();
	let mut catalog: Catalog = BTreeMap::new();
	for (section, section_entries) in group_by_section(entries) {
		catalog.insert(section, aggregate_courses(section_entries));
	}

	let summary = summarize_catalog(&catalog);
	info!(
		"catalog built: {} entries -> {} sections, {} courses, {} sessions ({} multi-slot)",
		total_entries, summary.sections, summary.courses, summary.sessions, summary.multi_slot_sessions
	);
	catalog
}
