// Estructuras de datos principales

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Grilla de celdas (filas x columnas) tal como sale del CSV o del workbook.
pub type Grid = Vec<Vec<String>>;

/// Catálogo final: sección -> cursos de esa sección.
/// Las claves quedan ordenadas, que es como el UI las lista.
pub type Catalog = BTreeMap<String, Vec<Course>>;

/// Días hábiles que trae el horario (una hoja/CSV por día).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Day {
    pub const ALL: [Day; 5] = [Day::Monday, Day::Tuesday, Day::Wednesday, Day::Thursday, Day::Friday];

    pub fn as_str(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
        }
    }

    /// Nombre exacto del día, sin importar mayúsculas ni espacios ("monday ", "MONDAY").
    pub fn from_name(name: &str) -> Option<Day> {
        let n = name.trim();
        Day::ALL.into_iter().find(|d| d.as_str().eq_ignore_ascii_case(n))
    }

    /// Detecta el día contenido en un nombre de archivo u hoja
    /// (p. ej. "Timetable - Monday.csv", "TUESDAY").
    pub fn from_file_name(name: &str) -> Option<Day> {
        let lower = name.to_lowercase();
        Day::ALL
            .into_iter()
            .find(|d| lower.contains(&d.as_str().to_lowercase()))
    }
}

impl std::fmt::Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entrada obtenida de una celda del horario.
/// Siempre tiene `course_code` y `section` no vacíos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedEntry {
    pub course_code: String,
    pub course_name: String,
    pub section: String,
    pub instructor: String,
    pub room: String,
    pub day: String,
    pub time_slot: String,
    pub slot_number: u32,
    /// Sólo presente cuando el lab se extendió a bloques vacíos contiguos.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot_count: Option<u32>,
}

/// Una reunión semanal de un curso (sin identidad de curso: vive dentro de `Course`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub day: String,
    pub time_slot: String,
    pub room: String,
    pub slot_number: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot_count: Option<u32>,
}

impl From<&ParsedEntry> for Session {
    fn from(e: &ParsedEntry) -> Self {
        Session {
            day: e.day.clone(),
            time_slot: e.time_slot.clone(),
            room: e.room.clone(),
            slot_number: e.slot_number,
            slot_count: e.slot_count,
        }
    }
}

/// Curso agregado por (código, sección).
///
/// `day`, `time_slot`, `room` y `slot_number` replican la primera sesión
/// para los consumidores que todavía esperan el formato de sesión única.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub course_code: String,
    pub course_name: String,
    pub section: String,
    pub instructor: String,
    pub credit_hours: u32,
    pub sessions: Vec<Session>,
    pub day: String,
    pub time_slot: String,
    pub room: String,
    pub slot_number: u32,
}

impl Course {
    /// Crea el curso a partir de la primera entrada vista para su clave.
    pub fn from_entry(e: &ParsedEntry) -> Self {
        Course {
            course_code: e.course_code.clone(),
            course_name: e.course_name.clone(),
            section: e.section.clone(),
            instructor: e.instructor.clone(),
            credit_hours: 1,
            sessions: vec![Session::from(e)],
            day: e.day.clone(),
            time_slot: e.time_slot.clone(),
            room: e.room.clone(),
            slot_number: e.slot_number,
        }
    }

    /// Clave de agregación `codigo-seccion`.
    pub fn key(&self) -> String {
        format!("{}-{}", self.course_code, self.section)
    }

    /// Recalcula créditos y campos heredados a partir de `sessions`.
    pub fn sync_legacy_fields(&mut self) {
        self.credit_hours = self.sessions.len() as u32;
        if let Some(first) = self.sessions.first() {
            self.day = first.day.clone();
            self.time_slot = first.time_slot.clone();
            self.room = first.room.clone();
            self.slot_number = first.slot_number;
        }
    }
}

/// Resumen de conteos del catálogo (lo que se loguea al construirlo).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    pub sections: usize,
    pub courses: usize,
    pub sessions: usize,
    pub multi_slot_sessions: usize,
}
