//! calamineによるスプレッドシート読み込み
//!
//! 先頭ワークシートの1行目をヘッダーとして全行をメモリに読み込む。

use super::{Cell, Table};
use crate::error::{ReportError, Result};
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

pub fn load_table(path: &Path) -> Result<Table> {
    if !path.exists() {
        return Err(ReportError::FileNotFound(path.display().to_string()));
    }

    let spreadsheet_err = |e: calamine::Error| ReportError::Spreadsheet {
        path: path.display().to_string(),
        message: e.to_string(),
    };

    let mut workbook = open_workbook_auto(path).map_err(spreadsheet_err)?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| ReportError::EmptyWorkbook(path.display().to_string()))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(spreadsheet_err)?;

    debug!(
        path = %path.display(),
        sheet = %sheet_name,
        rows = range.height(),
        cols = range.width(),
        "worksheet loaded"
    );

    Ok(table_from_range(&path.display().to_string(), &range))
}

/// 1行目をヘッダー、残りをデータ行としてTableを組み立てる
pub fn table_from_range(name: &str, range: &Range<Data>) -> Table {
    let mut rows = range.rows();

    let headers = match rows.next() {
        Some(header_row) => normalize_headers(header_row),
        None => Vec::new(),
    };

    let data = rows
        .map(|row| row.iter().map(Cell::from).collect())
        .collect();

    Table::new(name, headers, data)
}

/// 空ヘッダーは "Unnamed: i"、重複ヘッダーは ".1", ".2" を付与
fn normalize_headers(row: &[Data]) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();

    row.iter()
        .enumerate()
        .map(|(i, data)| {
            let base = match Cell::from(data) {
                Cell::Empty => format!("Unnamed: {}", i),
                Cell::Text(s) if s.trim().is_empty() => format!("Unnamed: {}", i),
                cell => cell.to_string(),
            };

            let count = seen.entry(base.clone()).or_insert(0);
            let header = if *count == 0 {
                base
            } else {
                format!("{}.{}", base, count)
            };
            *count += 1;
            header
        })
        .collect()
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::String(s) => Cell::Text(s.clone()),
            Data::Int(i) => Cell::Int(*i),
            Data::Float(f) => Cell::Float(*f),
            Data::Bool(b) => Cell::Bool(*b),
            Data::DateTime(dt) if !dt.is_duration() => match dt.as_datetime() {
                Some(value) => Cell::DateTime(value),
                None => Cell::Other(dt.as_f64().to_string()),
            },
            Data::DateTime(dt) => Cell::Other(dt.as_f64().to_string()),
            Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Other(s.clone()),
            Data::Error(e) => Cell::Error(e.to_string()),
            Data::Empty => Cell::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::CellErrorType;

    #[test]
    fn test_cell_from_data() {
        assert_eq!(Cell::from(&Data::String("ENGEMAN".into())), Cell::Text("ENGEMAN".into()));
        assert_eq!(Cell::from(&Data::Float(2.5)), Cell::Float(2.5));
        assert_eq!(Cell::from(&Data::Int(7)), Cell::Int(7));
        assert_eq!(Cell::from(&Data::Bool(false)), Cell::Bool(false));
        assert_eq!(Cell::from(&Data::Empty), Cell::Empty);
        assert_eq!(
            Cell::from(&Data::DateTimeIso("2024-03-01".into())),
            Cell::Other("2024-03-01".into())
        );
        assert_eq!(
            Cell::from(&Data::Error(CellErrorType::Div0)),
            Cell::Error("#DIV/0!".into())
        );
    }

    #[test]
    fn test_normalize_headers() {
        let row = vec![
            Data::String("agente".into()),
            Data::Empty,
            Data::String("agente".into()),
            Data::Float(2024.0),
            Data::String("agente".into()),
        ];

        assert_eq!(
            normalize_headers(&row),
            vec!["agente", "Unnamed: 1", "agente.1", "2024.0", "agente.2"]
        );
    }

    #[test]
    fn test_table_from_range() {
        let mut range = Range::new((0, 0), (2, 1));
        range.set_value((0, 0), Data::String("agente".into()));
        range.set_value((0, 1), Data::String("cidade".into()));
        range.set_value((1, 0), Data::String("ENGEMAN LTDA".into()));
        range.set_value((1, 1), Data::String("Recife".into()));
        range.set_value((2, 0), Data::Float(12.0));

        let table = table_from_range("mem", &range);
        assert_eq!(table.headers, vec!["agente", "cidade"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[1].cells, vec![Cell::Float(12.0), Cell::Empty]);
    }

    #[test]
    fn test_table_from_empty_range() {
        let range: Range<Data> = Range::empty();
        let table = table_from_range("empty", &range);
        assert!(table.headers.is_empty());
        assert!(table.is_empty());
    }
}
