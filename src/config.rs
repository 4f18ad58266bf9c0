use std::path::{Path, PathBuf};

pub const HOMOLOGADOS_FILE: &str = "fornecedores_homologados.xlsx";
pub const CONTROLE_FILE: &str = "atendimento controle_qualidade.xlsx";
pub const DEFAULT_SEARCH_TERM: &str = "ENGEMAN";
pub const PREVIEW_ROWS: usize = 5;

/// 読み込むスプレッドシートと絞り込み対象列
#[derive(Debug, Clone, PartialEq)]
pub struct TableSource {
    /// 出力の見出し
    pub label: String,
    pub path: PathBuf,
    pub column: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    pub sources: Vec<TableSource>,
    pub search_term: String,
    pub preview_rows: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::with_data_dir(Self::data_dir())
    }
}

impl ReportConfig {
    /// 指定ディレクトリ配下の2ファイルを対象にした設定
    pub fn with_data_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            sources: vec![
                TableSource {
                    label: "Homologados".into(),
                    path: dir.join(HOMOLOGADOS_FILE),
                    column: "agente".into(),
                },
                TableSource {
                    label: "Controle de Qualidade".into(),
                    path: dir.join(CONTROLE_FILE),
                    column: "nome_agente".into(),
                },
            ],
            search_term: DEFAULT_SEARCH_TERM.into(),
            preview_rows: PREVIEW_ROWS,
        }
    }

    /// クレート直下の static/
    pub fn data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static")
    }
}
