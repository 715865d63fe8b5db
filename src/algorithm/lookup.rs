// Consultas de sólo lectura sobre el catálogo ya construido.
use chrono::Weekday;
use log::warn;

use crate::models::{Catalog, CatalogSummary, Course};

/// Secciones del catálogo, ordenadas.
pub fn get_all_sections(catalog: &Catalog) -> Vec<String> {
    catalog.keys().cloned().collect()
}

/// Cursos de una sección. Ignora mayúsculas y espacios alrededor;
/// lista vacía si la sección no existe.
pub fn get_courses_by_section<'a>(catalog: &'a Catalog, section: &str) -> &'a [Course] {
    let wanted = section.trim();
    if let Some(courses) = catalog.get(&wanted.to_uppercase()) {
        return courses;
    }
    catalog
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(wanted))
        .map(|(_, v)| v.as_slice())
        .unwrap_or(&[])
}

/// Nombres completos aceptados; abreviaturas ("Tue") no cuentan como día.
const WEEKDAY_NAMES: [(&str, Weekday); 7] = [
    ("Sunday", Weekday::Sun),
    ("Monday", Weekday::Mon),
    ("Tuesday", Weekday::Tue),
    ("Wednesday", Weekday::Wed),
    ("Thursday", Weekday::Thu),
    ("Friday", Weekday::Fri),
    ("Saturday", Weekday::Sat),
];

/// Índice del día de la semana (domingo = 0 ... sábado = 6).
/// `None` si el texto no es el nombre completo de un día.
pub fn try_day_to_weekday(day: &str) -> Option<u32> {
    let wanted = day.trim();
    WEEKDAY_NAMES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(wanted))
        .map(|(_, w)| w.num_days_from_sunday())
}

/// Igual que `try_day_to_weekday`, pero un día desconocido se toma como
/// lunes (1). Se mantiene por compatibilidad con datos ya guardados.
pub fn day_to_weekday(day: &str) -> u32 {
    match try_day_to_weekday(day) {
        Some(idx) => idx,
        None => {
            warn!("unrecognized day '{}', defaulting to Monday", day);
            1
        }
    }
}

/// Conteos del catálogo.
pub fn summarize_catalog(catalog: &Catalog) -> CatalogSummary {
    let mut summary = CatalogSummary {
        sections: catalog.len(),
        ..CatalogSummary::default()
    };
    for course in catalog.values().flatten() {
        summary.courses += 1;
        summary.sessions += course.sessions.len();
        summary.multi_slot_sessions += course
            .sessions
            .iter()
            .filter(|s| s.slot_count.map(|n| n > 1).unwrap_or(false))
            .count();
    }
    summary
}
