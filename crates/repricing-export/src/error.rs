use repricing_core::chart::ChartKind;
use repricing_core::error::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("header template rendering failed: {0}")]
    TemplateRender(String),

    #[error("header template parse error: {0}")]
    TemplateParse(String),

    #[error("DOCX generation failed: {0}")]
    Docx(String),

    #[error("PDF generation failed: {0}")]
    Pdf(String),

    #[error("PDF conversion is not supported on {0}")]
    UnsupportedPlatform(String),

    #[error("summary has {found} columns, the report table needs at least {expected}")]
    ColumnCount { expected: usize, found: usize },

    #[error("column {column} out of range for a table with {columns} columns")]
    ColumnOutOfRange { column: usize, columns: usize },

    #[error("cell ({row}, {column}) out of range")]
    CellOutOfRange { row: usize, column: usize },

    #[error("column {column} row {row} is not numeric: {value}")]
    NotNumeric {
        column: String,
        row: usize,
        value: String,
    },

    #[error("statistics engine did not provide the {0} chart")]
    MissingChart(ChartKind),

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<tera::Error> for ExportError {
    fn from(e: tera::Error) -> Self {
        ExportError::TemplateRender(e.to_string())
    }
}
