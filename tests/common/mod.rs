// Helpers compartidos por los tests de integración: arman CSVs con el mismo
// layout que exporta el sistema de horarios.
#![allow(dead_code)]

use std::collections::BTreeMap;

use horario::models::Day;

pub const SLOT_HEADER: &str = ",1,2,3,4,5,6,7,8,9";
pub const TIME_HEADER: &str = "Room,08:00-08:50,08:55-09:45,09:50-10:40,10:45-11:35,11:40-12:30,12:35-13:25,13:30-14:20,14:25-15:15,15:20-16:05";

fn quote(cell: &str) -> String {
    if cell.contains(',') || cell.contains('\n') || cell.contains('"') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

/// Fila de sala: columna 0 = sala, luego los 9 bloques.
pub fn room_row(room: &str, slots: [&str; 9]) -> String {
    let mut cells = vec![quote(room)];
    cells.extend(slots.iter().map(|c| quote(c)));
    cells.join(",")
}

/// CSV completo de un día: 4 filas de encabezado + filas de salas.
pub fn day_csv(day: &str, rows: &[(&str, [&str; 9])]) -> String {
    let mut lines = vec![
        format!("{} Timetable,,,,,,,,,", day),
        SLOT_HEADER.to_string(),
        TIME_HEADER.to_string(),
        "CLASSROOMS,,,,,,,,,".to_string(),
    ];
    for (room, slots) in rows {
        lines.push(room_row(room, *slots));
    }
    lines.join("\r\n") + "\r\n"
}

pub const E: &str = "";

/// Semana de ejemplo usada por varios tests.
pub fn sample_week() -> BTreeMap<Day, String> {
    let mut days = BTreeMap::new();
    days.insert(
        Day::Monday,
        day_csv(
            "Monday",
            &[
                ("E-1", ["", "DAA BCS-5B\nFahad Sherwani", "OS BCS-5F\nNida Pervaiz", "OS BCS-5F\nNida Pervaiz", "", "", "", "", ""]),
                ("", ["", "", "", "CN Lab BCS-5F\nShoaib Raza", "", "", "SE BSE-3A", "", ""]),
                ("E-2", ["Reserved for Exam", "", "DAA BCS-5F\nZain Noreen", "", "", "", "", "", ""]),
            ],
        ),
    );
    days.insert(
        Day::Wednesday,
        day_csv(
            "Wednesday",
            &[
                ("E-1", ["DAA BCS-5B\nFahad Sherwani", "", "", "", "", "", "", "", ""]),
                ("E-3", ["", "", "", "", "", "OS BCS-5F\nNida Pervaiz", "", "", ""]),
            ],
        ),
    );
    days.insert(
        Day::Friday,
        day_csv(
            "Friday",
            &[("E-2", ["", "", "", "", "", "", "", "XYZ999 BCS-5B", "Seminar"])],
        ),
    );
    days
}
