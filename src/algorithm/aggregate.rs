use std::collections::HashMap;

use super::merge::merge_consecutive_sessions;
use crate::models::{Course, ParsedEntry, Session};

/// Agrupa entradas por `codigo-seccion` en cursos con su lista de sesiones.
///
/// La primera entrada de cada clave crea el curso (y fija el profesor);
/// las siguientes sólo agregan sesiones. Luego se fusionan bloques
/// consecutivos y `credit_hours` queda como el número de sesiones fusionadas.
/// Los cursos salen en el orden en que aparecieron.
pub fn aggregate_courses(entries: Vec<ParsedEntry>) -> Vec<Course> {
    let mut courses: Vec<Course> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for entry in entries {
        let key = format!("{}-{}", entry.course_code, entry.section);
        match index.get(&key) {
            Some(&i) => courses[i].sessions.push(Session::from(&entry)),
            None => {
                index.insert(key, courses.len());
                courses.push(Course::from_entry(&entry));
            }
        }
    }

    for course in courses.iter_mut() {
        let sessions = std::mem::take(&mut course.sessions);
        course.sessions = merge_consecutive_sessions(sessions);
        course.sync_legacy_fields();
    }

    courses
}
