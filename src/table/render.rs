//! テーブルのテキスト表示（pandas風の固定幅レイアウト）

use super::{Cell, Table};
use std::fmt;

const COLUMN_GAP: &str = "  ";

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) | Cell::Error(s) | Cell::Other(s) => write!(f, "{}", s),
            Cell::Int(i) => write!(f, "{}", i),
            // 整数値のfloatは "12.0" と表示
            Cell::Float(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{:.1}", v),
            Cell::Float(v) => write!(f, "{}", v),
            Cell::Bool(true) => write!(f, "True"),
            Cell::Bool(false) => write!(f, "False"),
            Cell::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            Cell::Empty => write!(f, "NaN"),
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.headers.is_empty() {
            writeln!(f, "Empty table")?;
            return write!(f, "[{} rows x 0 columns]", self.len());
        }

        let lines = self.render_lines();
        write!(f, "{}", lines.join("\n"))?;

        if self.is_empty() {
            write!(f, "\n[0 rows x {} columns]", self.headers.len())?;
        }
        Ok(())
    }
}

impl Table {
    /// ヘッダー行 + データ行。各列は最大幅で右寄せ
    fn render_lines(&self) -> Vec<String> {
        let index_column: Vec<String> = self.rows.iter().map(|r| r.index.to_string()).collect();
        let cell_columns: Vec<Vec<String>> = (0..self.headers.len())
            .map(|col| self.rows.iter().map(|r| r.get(col).to_string()).collect())
            .collect();

        let index_width = max_width(&index_column, "");
        let widths: Vec<usize> = self
            .headers
            .iter()
            .zip(&cell_columns)
            .map(|(header, values)| max_width(values, header))
            .collect();

        let mut lines = Vec::with_capacity(self.rows.len() + 1);

        let mut header_line = pad_left("", index_width);
        for (header, width) in self.headers.iter().zip(&widths) {
            header_line.push_str(COLUMN_GAP);
            header_line.push_str(&pad_left(header, *width));
        }
        lines.push(header_line);

        for (row_pos, index) in index_column.iter().enumerate() {
            let mut line = pad_left(index, index_width);
            for (values, width) in cell_columns.iter().zip(&widths) {
                line.push_str(COLUMN_GAP);
                line.push_str(&pad_left(&values[row_pos], *width));
            }
            lines.push(line);
        }

        lines
    }
}

fn display_width(s: &str) -> usize {
    s.chars().count()
}

fn max_width(values: &[String], header: &str) -> usize {
    values
        .iter()
        .map(|v| display_width(v))
        .chain(std::iter::once(display_width(header)))
        .max()
        .unwrap_or(0)
}

fn pad_left(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(s));
    format!("{}{}", " ".repeat(pad), s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_cell_display() {
        assert_eq!(Cell::Float(12.0).to_string(), "12.0");
        assert_eq!(Cell::Float(0.25).to_string(), "0.25");
        assert_eq!(Cell::Int(3).to_string(), "3");
        assert_eq!(Cell::Bool(true).to_string(), "True");
        assert_eq!(Cell::Empty.to_string(), "NaN");

        let dt = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(Cell::DateTime(dt).to_string(), "2024-03-01 00:00:00");
    }

    #[test]
    fn test_table_display_aligned() {
        let table = Table::new(
            "t",
            vec!["agente".into(), "nota".into()],
            vec![
                vec![Cell::Text("ENGEMAN LTDA".into()), Cell::Float(85.0)],
                vec![Cell::Empty, Cell::Int(7)],
            ],
        );

        let expected = [
            "         agente  nota",
            "0  ENGEMAN LTDA  85.0",
            "1           NaN     7",
        ]
        .join("\n");
        assert_eq!(table.to_string(), expected);
    }

    #[test]
    fn test_filtered_rows_keep_original_index() {
        let table = Table::new(
            "t",
            vec!["agente".into()],
            (0..12).map(|i| vec![Cell::Int(i)]).collect(),
        );
        let tail = Table {
            rows: table.rows[10..].to_vec(),
            ..table.clone()
        };

        let rendered = tail.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("10"));
        assert!(lines[2].starts_with("11"));
    }

    #[test]
    fn test_empty_table_display() {
        let table = Table::new("t", vec!["agente".into(), "cidade".into()], Vec::new());

        let rendered = table.to_string();
        assert_eq!(rendered, "  agente  cidade\n[0 rows x 2 columns]");
    }

    #[test]
    fn test_no_columns_display() {
        let table = Table::new("t", Vec::new(), Vec::new());
        assert_eq!(table.to_string(), "Empty table\n[0 rows x 0 columns]");
    }
}
