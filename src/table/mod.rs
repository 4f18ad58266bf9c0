//! スプレッドシートのテーブルモデル
//!
//! 読み込み後は変更しない。`head` / `filter_contains` は新しいテーブルを返す。

pub mod loader;
pub mod render;

use crate::error::{ReportError, Result};
use chrono::NaiveDateTime;

/// セル値
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
    /// Excelのエラー値（#DIV/0! など）
    Error(String),
    /// ISO日付文字列・期間など、表示はするが文字列扱いしない値
    Other(String),
    Empty,
}

impl Cell {
    /// 文字列セルのみ中身を返す
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.is_empty(),
            _ => false,
        }
    }
}

static EMPTY_CELL: Cell = Cell::Empty;

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// 読み込み時の行番号（0始まり）。フィルタ後も保持する
    pub index: usize,
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn get(&self, column: usize) -> &Cell {
        self.cells.get(column).unwrap_or(&EMPTY_CELL)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// 読み込み元（エラーメッセージ用）
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    /// 行番号を0から振ってテーブルを作成。短い行はEmptyで埋める
    pub fn new(name: impl Into<String>, headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(index, mut cells)| {
                cells.resize(width, Cell::Empty);
                Row { index, cells }
            })
            .collect();

        Self {
            name: name.into(),
            headers,
            rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// 列が無ければMissingColumn
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| ReportError::MissingColumn {
                column: name.to_string(),
                source_name: self.name.clone(),
            })
    }

    /// 先頭n行
    pub fn head(&self, n: usize) -> Table {
        self.with_rows(self.rows.iter().take(n).cloned().collect())
    }

    /// 指定列の文字列に`term`を含む行を抽出（大文字小文字を区別しない）
    ///
    /// 空セル・数値・日付などの非文字列セルは一致しない扱い。
    /// 行の順序と行番号は元のまま。
    pub fn filter_contains(&self, column: &str, term: &str) -> Result<Table> {
        let col = self.require_column(column)?;
        let needle = term.to_lowercase();

        let rows = self
            .rows
            .iter()
            .filter(|row| {
                let cell = row.get(col);
                if cell.is_empty() {
                    return false;
                }
                cell.as_text()
                    .map(|text| text.to_lowercase().contains(&needle))
                    .unwrap_or(false)
            })
            .cloned()
            .collect();

        Ok(self.with_rows(rows))
    }

    fn with_rows(&self, rows: Vec<Row>) -> Table {
        Table {
            name: self.name.clone(),
            headers: self.headers.clone(),
            rows,
        }
    }
}
