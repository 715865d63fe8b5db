//! Lectura de los archivos de horario desde disco y escritura del catálogo.
//!
//! El directorio de datos contiene un CSV por día (el nombre incluye el día,
//! p. ej. "Monday.csv") o un workbook `.xlsx` con una hoja por día.

use log::{info, warn};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::algorithm::{parse_timetable, parse_timetable_grids};
use crate::error::{Result, TimetableError};
use crate::grid::read_workbook_days;
use crate::models::{Catalog, Day};

/// Directorio por defecto (relativo al CWD).
pub const DATAFILES_DIR: &str = "datafiles";

/// Resuelve el directorio de datos:
/// 1. `preferred` si existe
/// 2. `./datafiles` o `./src/datafiles` desde el CWD
/// 3. fallback `./datafiles` (puede no existir; el loader lo reporta)
pub fn resolve_datafiles_dir(preferred: Option<&Path>) -> PathBuf {
    if let Some(p) = preferred {
        if p.is_dir() {
            info!("using datafiles dir {:?}", p);
            return p.to_path_buf();
        }
        warn!("datafiles dir {:?} does not exist, searching from CWD", p);
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let candidates = [cwd.join(DATAFILES_DIR), cwd.join("src").join(DATAFILES_DIR)];
    for candidate in candidates.iter() {
        if candidate.is_dir() {
            info!("datafiles found at {:?}", candidate);
            return candidate.clone();
        }
    }

    warn!("no datafiles directory found from {:?}", cwd);
    cwd.join(DATAFILES_DIR)
}

/// Igual que `resolve_datafiles_dir`, tomando `HORARIO_DATAFILES_DIR` como preferido.
pub fn get_datafiles_dir() -> PathBuf {
    let from_env = std::env::var("HORARIO_DATAFILES_DIR")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from);
    resolve_datafiles_dir(from_env.as_deref())
}

fn is_hidden_or_temp(name: &str) -> bool {
    name.starts_with('.') || name.starts_with('~') || name.ends_with('~')
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case(ext))
        .unwrap_or(false)
}

/// Archivos de horario en `dir`: CSV con un día en el nombre y workbooks `.xlsx`.
/// Devuelve nombres de archivo (no paths), ordenados.
pub fn list_timetable_files(dir: &Path) -> Result<Vec<String>> {
    if !dir.is_dir() {
        return Err(TimetableError::DatafilesDirNotFound(dir.to_path_buf()));
    }

    let mut names: Vec<String> = Vec::new();
    for entry in fs::read_dir(dir)?.flatten() {
        let p = entry.path();
        if !p.is_file() {
            continue;
        }
        let name = match p.file_name().and_then(|s| s.to_str()) {
            Some(s) => s.to_string(),
            None => continue,
        };
        if is_hidden_or_temp(&name) {
            continue;
        }
        let is_day_csv = has_extension(&p, "csv") && Day::from_file_name(&name).is_some();
        if is_day_csv || has_extension(&p, "xlsx") {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

/// Lee los CSV por día de `dir`. Si hay más de un archivo para el mismo día
/// se usa el primero en orden alfabético.
pub fn load_day_csvs(dir: &Path) -> Result<BTreeMap<Day, String>> {
    let mut days: BTreeMap<Day, String> = BTreeMap::new();
    for name in list_timetable_files(dir)? {
        if !name.to_lowercase().ends_with(".csv") {
            continue;
        }
        let day = match Day::from_file_name(&name) {
            Some(d) => d,
            None => continue,
        };
        if days.contains_key(&day) {
            warn!("ignoring {} ({} already loaded)", name, day);
            continue;
        }
        let text = fs::read_to_string(dir.join(&name))?;
        info!("loaded {} for {}", name, day);
        days.insert(day, text);
    }
    Ok(days)
}

/// Workbook `.xlsx` más reciente del directorio.
fn latest_workbook(dir: &Path) -> Result<Option<PathBuf>> {
    let mut best: Option<(SystemTime, PathBuf)> = None;
    for name in list_timetable_files(dir)? {
        let p = dir.join(&name);
        if !has_extension(&p, "xlsx") {
            continue;
        }
        let modified = fs::metadata(&p)?.modified()?;
        match &best {
            Some((best_time, _)) if *best_time >= modified => (),
            _ => best = Some((modified, p)),
        }
    }
    Ok(best.map(|(_, p)| p))
}

fn warn_missing_days<V>(found: &BTreeMap<Day, V>) {
    for day in Day::ALL {
        if !found.contains_key(&day) {
            warn!("no timetable for {}, skipping", day);
        }
    }
}

/// Construye el catálogo desde `dir`: CSV por día si existen, si no el
/// workbook más reciente.
pub fn load_catalog_from_dir(dir: &Path) -> Result<Catalog> {
    let csvs = load_day_csvs(dir)?;
    if !csvs.is_empty() {
        warn_missing_days(&csvs);
        return Ok(parse_timetable(&csvs));
    }

    if let Some(workbook) = latest_workbook(dir)? {
        info!("no day CSVs in {:?}, using workbook {:?}", dir, workbook);
        let grids = read_workbook_days(&workbook)?;
        if !grids.is_empty() {
            warn_missing_days(&grids);
            return Ok(parse_timetable_grids(&grids));
        }
    }

    Err(TimetableError::NoTimetableFiles(dir.to_path_buf()))
}

/// Escribe el catálogo como JSON legible, creando directorios si faltan.
pub fn write_catalog_json(catalog: &Catalog, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let text = serde_json::to_string_pretty(catalog)?;
    fs::write(path, text)?;
    info!("catalog written to {:?}", path);
    Ok(())
}
