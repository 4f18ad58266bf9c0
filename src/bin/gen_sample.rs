//! static/ にサンプルのスプレッドシートを生成
//!
//! 使い方: cargo run --bin gen_sample [出力ディレクトリ]

use anyhow::{Context, Result};
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
use std::path::{Path, PathBuf};
use supplier_sheet_report::config::{ReportConfig, CONTROLE_FILE, HOMOLOGADOS_FILE};

fn main() -> Result<()> {
    let dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(ReportConfig::data_dir);

    std::fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;

    let homologados = dir.join(HOMOLOGADOS_FILE);
    write_homologados(&homologados)?;
    println!("Wrote {}", homologados.display());

    let controle = dir.join(CONTROLE_FILE);
    write_controle(&controle)?;
    println!("Wrote {}", controle.display());

    Ok(())
}

fn write_homologados(path: &Path) -> Result<()> {
    let rows: &[(&str, &str, f64)] = &[
        ("ENGEMAN LTDA", "Manutenção industrial", 86.5),
        ("Construtora Alfa", "Obras civis", 72.0),
        ("engeman serviços", "Facilities", 91.0),
        ("Metalúrgica Beta", "Caldeiraria", 68.0),
        ("Transportes Gama", "Logística", 75.5),
        ("Grupo Engemann", "Consultoria", 70.0),
    ];

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "agente")?;
    sheet.write_string(0, 1, "categoria")?;
    sheet.write_string(0, 2, "nota_homologacao")?;

    for (i, (agente, categoria, nota)) in rows.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_string(row, 0, *agente)?;
        sheet.write_string(row, 1, *categoria)?;
        sheet.write_number(row, 2, *nota)?;
    }
    // 空の agente
    sheet.write_string(rows.len() as u32 + 1, 1, "Sem agente")?;

    workbook
        .save(path)
        .with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

fn write_controle(path: &Path) -> Result<()> {
    let rows: &[(&str, &str, (u16, u8, u8))] = &[
        ("Fornecedor Delta", "Aprovado", (2024, 1, 15)),
        ("ENGEMAN LTDA", "Aprovado", (2024, 2, 3)),
        ("Construtora Alfa", "Reprovado", (2024, 2, 20)),
        ("EnGeMaN Manutenção", "Pendente", (2024, 3, 8)),
        ("Metalúrgica Beta", "Aprovado", (2024, 4, 11)),
        ("Transportes Gama", "Aprovado", (2024, 5, 2)),
    ];

    let date_format = Format::new().set_num_format("yyyy-mm-dd");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "nome_agente")?;
    sheet.write_string(0, 1, "status")?;
    sheet.write_string(0, 2, "data_atendimento")?;

    for (i, (agente, status, (y, m, d))) in rows.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_string(row, 0, *agente)?;
        sheet.write_string(row, 1, *status)?;
        let date = ExcelDateTime::from_ymd(*y, *m, *d)?;
        sheet.write_datetime_with_format(row, 2, &date, &date_format)?;
    }
    // 数値の agente ID
    let row = rows.len() as u32 + 1;
    sheet.write_number(row, 0, 1042.0)?;
    sheet.write_string(row, 1, "Aprovado")?;

    workbook
        .save(path)
        .with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
