use log::debug;
use regex::Regex;
use std::sync::LazyLock;

use super::tables::{course_name, time_slot};
use crate::models::ParsedEntry;

/// Sección: 2+ mayúsculas (+1 opcional), guion opcional, dígitos, letras finales opcionales.
/// Debe ir precedida de espacio, así el primer token de la línea nunca es la sección.
static SECTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s([A-Z]{2,}[A-Z]?-?\d+[A-Z]*)(?:\s|$)").expect("section regex is valid")
});

pub const INSTRUCTOR_FALLBACK: &str = "TBA";

/// Separa la línea de encabezado en (código de curso, sección).
/// Heurística best-effort: todo lo anterior a la sección es el código.
pub fn split_code_and_section(header: &str) -> Option<(String, String)> {
    let caps = SECTION_RE.captures(header)?;
    let whole = caps.get(0)?;
    let section = caps.get(1)?.as_str().to_uppercase();
    let code = header[..whole.start()].trim();
    if code.is_empty() {
        return None;
    }
    Some((code.to_string(), section))
}

/// Decodifica una celda "CODIGO SECCION\nProfesor" a una `ParsedEntry`.
///
/// Devuelve `None` para celdas vacías, reservadas ("reserved" sin importar
/// mayúsculas) o sin sección reconocible.
pub fn parse_cell_entry(cell: &str, room: &str, day: &str, slot_number: u32) -> Option<ParsedEntry> {
    if cell.trim().is_empty() {
        return None;
    }
    if cell.to_lowercase().contains("reserved") {
        debug!("{} slot {} room '{}': reserved cell skipped", day, slot_number, room);
        return None;
    }

    let mut lines = cell.lines().map(str::trim).filter(|l| !l.is_empty());
    let header = lines.next()?;
    let instructor = lines.next().unwrap_or(INSTRUCTOR_FALLBACK);

    let (course_code, section) = match split_code_and_section(header) {
        Some(parts) => parts,
        None => {
            debug!("{} slot {} room '{}': no section in '{}'", day, slot_number, room, header);
            return None;
        }
    };

    Some(ParsedEntry {
        course_name: course_name(&course_code),
        course_code,
        section,
        instructor: instructor.to_string(),
        room: room.to_string(),
        day: day.to_string(),
        time_slot: time_slot(slot_number),
        slot_number,
        slot_count: None,
    })
}
