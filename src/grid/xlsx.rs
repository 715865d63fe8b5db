use calamine::{open_workbook_auto, Data, Range, Reader};
use log::{debug, info};
use std::collections::BTreeMap;
use std::path::Path;

use super::is_blank_row;
use crate::error::Result;
use crate::models::{Day, Grid};

/// Convierte un `Data` de calamine a String.
/// Floats enteros se muestran sin decimales (los números de bloque vienen como 1.0, 2.0...).
pub fn cell_to_string(c: &Data) -> String {
    match c {
        Data::String(s) => s.clone(),
        Data::Float(f) => {
            if (f.floor() - f).abs() < f64::EPSILON {
                format!("{}", *f as i64)
            } else {
                format!("{}", f)
            }
        }
        Data::Int(i) => format!("{}", i),
        Data::Bool(b) => format!("{}", b),
        Data::Empty => String::new(),
        Data::Error(_) => String::new(),
        Data::DateTime(s) => s.to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}

/// Pasa un `Range` a grilla alineada con las columnas de la hoja.
///
/// calamine recorta columnas vacías del inicio; se rellenan de vuelta para
/// que la columna de salas quede en la columna 0. Filas completamente
/// vacías se descartan igual que en el CSV.
pub fn range_to_grid(range: &Range<Data>) -> Grid {
    let start_col = match range.start() {
        Some((_, c)) => c as usize,
        None => return Vec::new(),
    };

    let mut grid: Grid = Vec::new();
    for r in range.rows() {
        let mut row_vec: Vec<String> = vec![String::new(); start_col];
        row_vec.extend(r.iter().map(cell_to_string));
        if !is_blank_row(&row_vec) {
            grid.push(row_vec);
        }
    }
    grid
}

/// Lee un workbook con una hoja por día y devuelve la grilla de cada día.
/// Hojas cuyo nombre no contiene un día se ignoran.
pub fn read_workbook_days<P: AsRef<Path>>(path: P) -> Result<BTreeMap<Day, Grid>> {
    let path = path.as_ref();
    let mut workbook = open_workbook_auto(path)?;
    let sheet_names = workbook.sheet_names().to_owned();

    let mut grids: BTreeMap<Day, Grid> = BTreeMap::new();
    for sheet in sheet_names.iter() {
        let day = match Day::from_file_name(sheet) {
            Some(d) => d,
            None => {
                debug!("ignoring sheet '{}' (no weekday in name)", sheet);
                continue;
            }
        };
        if grids.contains_key(&day) {
            debug!("ignoring duplicate sheet '{}' for {}", sheet, day);
            continue;
        }
        let range = workbook.worksheet_range(sheet)?;
        grids.insert(day, range_to_grid(&range));
    }

    info!("read {} day sheets from {:?}", grids.len(), path);
    Ok(grids)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_to_string_numbers() {
        assert_eq!(cell_to_string(&Data::Float(3.0)), "3");
        assert_eq!(cell_to_string(&Data::Float(2.5)), "2.5");
        assert_eq!(cell_to_string(&Data::Int(7)), "7");
        assert_eq!(cell_to_string(&Data::Empty), "");
    }

    #[test]
    fn test_range_to_grid_pads_columns() {
        let mut range: Range<Data> = Range::new((0, 1), (1, 2));
        range.set_value((0, 1), Data::String("a".to_string()));
        range.set_value((1, 2), Data::String("b".to_string()));
        let grid = range_to_grid(&range);
        assert_eq!(grid.len(), 2);
        assert_eq!(grid[0], vec!["", "a", ""]);
        assert_eq!(grid[1], vec!["", "", "b"]);
    }
}
