// Fusión de bloques consecutivos de un mismo curso.
use log::debug;

use crate::models::Session;
use crate::parser::tables::split_time_range;

/// Fusiona sesiones del mismo día, misma sala y bloques contiguos
/// (p. ej. 3 y 4) en una sola sesión con el rango horario ampliado.
///
/// - Los días se mantienen en el orden en que aparecen; dentro de un día se
///   ordena por `slot_number`.
/// - Sesiones ya extendidas por la detección de labs (`slot_count` presente)
///   no se fusionan con vecinas.
/// - Si dos sesiones comparten (día, bloque) queda sólo la primera.
pub fn merge_consecutive_sessions(sessions: Vec<Session>) -> Vec<Session> {
    let mut by_day: Vec<(String, Vec<Session>)> = Vec::new();
    for s in sessions {
        match by_day.iter_mut().find(|(d, _)| *d == s.day) {
            Some((_, v)) => v.push(s),
            None => by_day.push((s.day.clone(), vec![s])),
        }
    }

    let mut out: Vec<Session> = Vec::new();
    for (_day, mut day_sessions) in by_day {
        day_sessions.sort_by_key(|s| s.slot_number);
        day_sessions.dedup_by_key(|s| s.slot_number);

        let mut run: Vec<Session> = Vec::new();
        for s in day_sessions {
            let extends = run.last().map(|last| chains_with(last, &s)).unwrap_or(false);
            if !extends {
                flush_run(&mut run, &mut out);
            }
            run.push(s);
        }
        flush_run(&mut run, &mut out);
    }
    out
}

fn chains_with(prev: &Session, next: &Session) -> bool {
    prev.slot_count.is_none()
        && next.slot_count.is_none()
        && prev.room == next.room
        && next.slot_number == prev.slot_number + 1
}

fn flush_run(run: &mut Vec<Session>, out: &mut Vec<Session>) {
    if run.len() <= 1 {
        out.append(run);
        return;
    }

    let merged = {
        let first = &run[0];
        let last = &run[run.len() - 1];
        match (split_time_range(&first.time_slot), split_time_range(&last.time_slot)) {
            (Some((start, _)), Some((_, end))) => Some(Session {
                day: first.day.clone(),
                time_slot: format!("{}-{}", start, end),
                room: first.room.clone(),
                slot_number: first.slot_number,
                slot_count: Some(run.len() as u32),
            }),
            _ => None,
        }
    };

    match merged {
        Some(s) => {
            debug!("{} {}: merged {} consecutive slots into {}", s.day, s.room, run.len(), s.time_slot);
            out.push(s);
            run.clear();
        }
        // bloques fuera de la tabla ("Slot 12"): no hay rango que combinar
        None => out.append(run),
    }
}
