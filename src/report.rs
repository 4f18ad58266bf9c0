//! 読み込み → プレビュー → 絞り込み の一連処理

use crate::config::{ReportConfig, TableSource};
use crate::error::Result;
use crate::table::{loader, Table};
use std::io::Write;
use tracing::info;

/// 読み込み済みテーブルと絞り込み列
struct LoadedSource<'a> {
    source: &'a TableSource,
    table: Table,
}

/// 全ファイルを読み込んでから出力する。途中で失敗した場合は何も出力しない
pub fn run<W: Write>(config: &ReportConfig, out: &mut W) -> Result<()> {
    let loaded = load_sources(&config.sources)?;

    for (i, entry) in loaded.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "=== {} ===", entry.source.label)?;
        writeln!(out, "{}", entry.table.head(config.preview_rows))?;
    }

    for entry in &loaded {
        let filtered = entry
            .table
            .filter_contains(&entry.source.column, &config.search_term)?;

        info!(
            source = %entry.source.label,
            term = %config.search_term,
            matches = filtered.len(),
            "filtered"
        );

        writeln!(out)?;
        writeln!(
            out,
            "Filtrando fornecedor na planilha de {}:",
            entry.source.label.to_lowercase()
        )?;
        writeln!(out, "{}", filtered)?;
    }

    out.flush()?;
    Ok(())
}

fn load_sources(sources: &[TableSource]) -> Result<Vec<LoadedSource<'_>>> {
    let mut loaded = Vec::with_capacity(sources.len());

    for source in sources {
        let table = loader::load_table(&source.path)?;
        // 出力前に列の有無を確認
        table.require_column(&source.column)?;
        loaded.push(LoadedSource { source, table });
    }

    Ok(loaded)
}
