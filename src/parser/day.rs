use log::debug;

use super::cell::parse_cell_entry;
use super::tables::{slot_end, slot_start};
use crate::grid::parse_csv;
use crate::models::{Grid, ParsedEntry};

/// Filas fijas de encabezado: título, números de bloque, horas, "CLASSROOMS".
pub const HEADER_ROWS: usize = 4;

/// Columnas de bloque por día (1-9; la columna 0 es la sala).
pub const SLOTS_PER_DAY: usize = 9;

/// Máximo de bloques vacíos que un lab puede absorber a su derecha.
pub const LAB_LOOKAHEAD: usize = 2;

/// Extrae las entradas de un día a partir del texto CSV.
pub fn parse_day_timetable(csv_text: &str, day: &str) -> Vec<ParsedEntry> {
    parse_day_grid(&parse_csv(csv_text), day)
}

/// Extrae las entradas de un día a partir de una grilla ya leída.
///
/// La sala de la columna 0 se arrastra hacia abajo hasta la siguiente sala
/// no vacía (en la planilla la sala está combinada verticalmente).
pub fn parse_day_grid(grid: &Grid, day: &str) -> Vec<ParsedEntry> {
    let mut entries: Vec<ParsedEntry> = Vec::new();
    let mut current_room = String::new();

    for row in grid.iter().skip(HEADER_ROWS) {
        if let Some(room) = row.first().map(|r| r.trim()).filter(|r| !r.is_empty()) {
            current_room = room.to_string();
        }

        for col in 1..=SLOTS_PER_DAY {
            let cell = match row.get(col) {
                Some(c) => c,
                None => continue,
            };
            let slot_number = col as u32;
            let mut entry = match parse_cell_entry(cell, &current_room, day, slot_number) {
                Some(e) => e,
                None => continue,
            };

            let empties = consecutive_empty_slots(row, col);
            if empties > 0 && entry.course_code.to_lowercase().contains("lab") {
                widen_lab(&mut entry, empties);
            }
            entries.push(entry);
        }
    }

    debug!("{}: {} entries extracted", day, entries.len());
    entries
}

/// Cuenta bloques vacíos inmediatamente a la derecha de `col`
/// (hasta `LAB_LOOKAHEAD`, sin pasar del último bloque).
/// Una celda que no existe en la fila cuenta como vacía.
fn consecutive_empty_slots(row: &[String], col: usize) -> usize {
    let mut count = 0;
    for next in (col + 1)..=(col + LAB_LOOKAHEAD).min(SLOTS_PER_DAY) {
        let empty = row.get(next).map(|c| c.trim().is_empty()).unwrap_or(true);
        if !empty {
            break;
        }
        count += 1;
    }
    count
}

/// Extiende el fin del lab hasta el último bloque vacío absorbido.
/// No se verifica que esos bloques sean de la misma sala.
fn widen_lab(entry: &mut ParsedEntry, empties: usize) {
    let last_slot = entry.slot_number + empties as u32;
    if let (Some(start), Some(end)) = (slot_start(entry.slot_number), slot_end(last_slot)) {
        entry.time_slot = format!("{}-{}", start, end);
        entry.slot_count = Some(1 + empties as u32);
        debug!(
            "{} {} {}: lab widened to {} ({} slots)",
            entry.day, entry.course_code, entry.section, entry.time_slot, 1 + empties
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_consecutive_empty_slots_caps_at_two() {
        let r = row(&["E-1", "x", "", "", "", "", "", "", "", ""]);
        assert_eq!(consecutive_empty_slots(&r, 1), 2);
    }

    #[test]
    fn test_consecutive_empty_slots_stops_at_content() {
        let r = row(&["E-1", "x", "", "y", "", "", "", "", "", ""]);
        assert_eq!(consecutive_empty_slots(&r, 1), 1);
        assert_eq!(consecutive_empty_slots(&r, 3), 2);
    }

    #[test]
    fn test_consecutive_empty_slots_never_past_last_slot() {
        let r = row(&["E-1", "", "", "", "", "", "", "", "x", ""]);
        assert_eq!(consecutive_empty_slots(&r, 8), 1);
        assert_eq!(consecutive_empty_slots(&r, 9), 0);
    }

    #[test]
    fn test_missing_cells_count_as_empty() {
        let r = row(&["E-1", "x"]);
        assert_eq!(consecutive_empty_slots(&r, 1), 2);
    }
}
