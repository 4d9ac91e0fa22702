//! Reads the first sheet of a spreadsheet into raw rows of cells.
//!
//! Workbooks (`.xlsx`, `.xlsm`, `.xlsb`, `.xls`, `.ods`) go through
//! `calamine`; `.csv` files through the `csv` crate. No interpretation
//! happens here: the header row is returned like any other row and the
//! importer decides what the cells mean.

use crate::error::{GuestError, Result};
use calamine::{open_workbook_auto, Data, Reader};
use std::io;
use std::path::Path;

pub const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];
pub const CSV_EXTENSION: &str = "csv";

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

pub type Row = Vec<Cell>;

impl Cell {
    pub fn from_text(s: &str) -> Self {
        if s.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(s.to_string())
        }
    }

    /// The cell as trimmed text, `None` when there is nothing in it.
    pub fn text(&self) -> Option<String> {
        let text = match self {
            Cell::Empty => return None,
            Cell::Text(s) => s.trim().to_string(),
            Cell::Number(n) => format_number(*n),
            Cell::Bool(b) => b.to_string(),
        };
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// The cell as a finite number, parsing text when needed.
    pub fn number(&self) -> Option<f64> {
        let n = match self {
            Cell::Empty => return None,
            Cell::Number(n) => *n,
            Cell::Text(s) => s.trim().parse::<f64>().ok()?,
            Cell::Bool(b) => f64::from(u8::from(*b)),
        };
        n.is_finite().then_some(n)
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Int(n) => Cell::Number(*n as f64),
        Data::Float(n) => Cell::Number(*n),
        Data::String(s) => Cell::from_text(s),
        Data::Bool(b) => Cell::Bool(*b),
        _ => Cell::Empty,
    }
}

/// Reads every row of the file's first sheet.
pub fn read_rows(path: &Path) -> Result<Vec<Row>> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    if ext == CSV_EXTENSION {
        let file = std::fs::File::open(path).map_err(GuestError::Io)?;
        read_csv(file)
    } else if WORKBOOK_EXTENSIONS.contains(&ext.as_str()) {
        read_workbook(path)
    } else {
        Err(GuestError::Import(format!(
            "unsupported file type: {}",
            path.display()
        )))
    }
}

fn read_workbook(path: &Path) -> Result<Vec<Row>> {
    let mut workbook =
        open_workbook_auto(path).map_err(|e| GuestError::Import(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| GuestError::Import("workbook has no sheets".to_string()))?
        .map_err(|e| GuestError::Import(e.to_string()))?;

    Ok(range
        .rows()
        .map(|row| row.iter().map(cell_from_data).collect())
        .collect())
}

pub fn read_csv<R: io::Read>(input: R) -> Result<Vec<Row>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| GuestError::Import(e.to_string()))?;
        rows.push(record.iter().map(Cell::from_text).collect());
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::write_xlsx;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn cell_text_trims_and_drops_blank() {
        assert_eq!(Cell::Text("  Ana ".into()).text().as_deref(), Some("Ana"));
        assert_eq!(Cell::Text("   ".into()).text(), None);
        assert_eq!(Cell::Empty.text(), None);
        assert_eq!(Cell::Number(5.0).text().as_deref(), Some("5"));
        assert_eq!(Cell::Number(2.5).text().as_deref(), Some("2.5"));
    }

    #[test]
    fn cell_number_parses_text() {
        assert_eq!(Cell::Text(" 12 ".into()).number(), Some(12.0));
        assert_eq!(Cell::Text("abc".into()).number(), None);
        assert_eq!(Cell::Text("NaN".into()).number(), None);
        assert_eq!(Cell::Number(-1.0).number(), Some(-1.0));
        assert_eq!(Cell::Empty.number(), None);
    }

    #[test]
    fn reads_csv_rows_including_header() {
        let input = "Nombre,Apellidos,Mesa,Invitados\nAna,Lopez,5,3\nEve,Kim,principal\n";
        let rows = read_csv(input.as_bytes()).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1][0], Cell::Text("Ana".into()));
        // Short rows are allowed
        assert_eq!(rows[2].len(), 3);
    }

    #[test]
    fn empty_csv_fields_are_empty_cells() {
        let rows = read_csv("a,,c\n".as_bytes()).unwrap();
        assert_eq!(rows[0][1], Cell::Empty);
    }

    #[test]
    fn rejects_unknown_extensions() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("guests.txt");
        fs::write(&path, "Ana,Lopez,5,3").unwrap();
        assert!(matches!(read_rows(&path), Err(GuestError::Import(_))));
    }

    #[test]
    fn corrupt_workbook_is_an_import_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("guests.xlsx");
        fs::write(&path, "definitely not a zip archive").unwrap();
        assert!(matches!(read_rows(&path), Err(GuestError::Import(_))));
    }

    #[test]
    fn reads_only_the_first_worksheet() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("guests.xlsx");
        let first: &[&[&str]] = &[
            &["Nombre", "Apellidos", "Mesa", "Invitados"],
            &["Ana", "Lopez", "5", "3"],
            &["Eve", "Kim", "principal", ""],
        ];
        let second: &[&[&str]] = &[&["Other"], &["Zed", "Ray", "1", "1"]];
        write_xlsx(&path, &[first, second]);

        let rows = read_rows(&path).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0][0], Cell::Text("Nombre".into()));
        assert_eq!(rows[1][2], Cell::Number(5.0));
        assert_eq!(rows[1][3], Cell::Number(3.0));
        assert_eq!(rows[2][2], Cell::Text("principal".into()));
        assert!(rows.iter().flatten().all(|c| *c != Cell::Text("Zed".into())));
    }

    #[test]
    fn reads_csv_files_by_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("GUESTS.CSV");
        fs::write(&path, "h1,h2,h3,h4\nAna,Lopez,5,3\n").unwrap();
        let rows = read_rows(&path).unwrap();
        assert_eq!(rows.len(), 2);
    }
}
