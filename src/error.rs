use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("スプレッドシート読み込みエラー: {path}: {message}")]
    Spreadsheet { path: String, message: String },

    #[error("ワークシートがありません: {0}")]
    EmptyWorkbook(String),

    #[error("列 '{column}' が見つかりません: {source_name}")]
    MissingColumn { column: String, source_name: String },

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_message() {
        let err = ReportError::MissingColumn {
            column: "agente".into(),
            source_name: "fornecedores_homologados.xlsx".into(),
        };
        let display = err.to_string();
        assert!(display.contains("'agente'"));
        assert!(display.contains("fornecedores_homologados.xlsx"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: ReportError = io.into();
        assert!(matches!(err, ReportError::Io(_)));
    }
}
