use crate::models::Grid;
use super::is_blank_row;

/// Parsea texto CSV a una grilla de filas/columnas.
///
/// - Un campo entre comillas puede contener `,` y saltos de línea.
/// - `""` dentro de comillas es una comilla literal.
/// - `\r` se descarta siempre.
/// - Filas cuyas celdas son todas vacías no se emiten.
///
/// No hay errores: comillas mal cerradas simplemente alternan el estado.
pub fn parse_csv(text: &str) -> Grid {
    let mut rows: Grid = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\r' => {}
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    cell.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                row.push(std::mem::take(&mut cell));
            }
            '\n' if !in_quotes => {
                row.push(std::mem::take(&mut cell));
                push_row(&mut rows, std::mem::take(&mut row));
            }
            other => cell.push(other),
        }
    }

    // última fila sin salto de línea final
    if !cell.is_empty() || !row.is_empty() {
        row.push(cell);
        push_row(&mut rows, row);
    }

    rows
}

fn push_row(rows: &mut Grid, row: Vec<String>) {
    if !is_blank_row(&row) {
        rows.push(row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_cell_keeps_newline_and_comma() {
        let grid = parse_csv("E-1,\"DAA BCS-5B\nFahad, S\",x\n");
        assert_eq!(grid.len(), 1);
        assert_eq!(grid[0], vec!["E-1", "DAA BCS-5B\nFahad, S", "x"]);
    }

    #[test]
    fn test_escaped_quote() {
        let grid = parse_csv("\"say \"\"hi\"\"\",b");
        assert_eq!(grid[0][0], "say \"hi\"");
        assert_eq!(grid[0][1], "b");
    }

    #[test]
    fn test_blank_rows_dropped_and_cr_removed() {
        let grid = parse_csv("a,b\r\n , \r\n,,\r\nc,d\r\n");
        assert_eq!(grid, vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_csv("").is_empty());
        assert!(parse_csv("\n\n").is_empty());
    }

    #[test]
    fn test_trailing_comma_keeps_empty_cell() {
        let grid = parse_csv("a,\n");
        assert_eq!(grid[0], vec!["a", ""]);
    }
}
