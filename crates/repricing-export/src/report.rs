use std::path::{Path, PathBuf};

use repricing_core::chart::ChartKind;
use repricing_core::frame::{CellValue, SummaryFrame, is_two_decimal_column};
use repricing_core::params::ReportParams;
use repricing_core::statistics::IntervalStatistics;

use crate::config::{PdfConfig, ReportConfig};
use crate::document::ReportDocument;
use crate::error::ExportError;
use crate::pdf;
use crate::render::resolve_header;
use crate::styles::ReportStyles;
use crate::table::{Alignment, ReportTable};

/// Header labels of the profit table, for table columns 1 through 11.
pub const HEADER_LABELS: [&str; 11] = [
    "The start of the interval",
    "The end of the interval",
    "Mean m_orders",
    "Median m_orders",
    "Mean price",
    "Median price",
    "Mean proportion",
    "Median proportion",
    "Profit",
    "Profit_mean",
    "Interval",
];

/// Text of one summary value as it appears in a table cell.
pub fn format_cell(data: &SummaryFrame, row: usize, col: usize) -> Result<String, ExportError> {
    let value = data
        .value(row, col)
        .ok_or(ExportError::CellOutOfRange { row, column: col })?;
    let column = &data.columns()[col];
    if !is_two_decimal_column(column) {
        return Ok(value.to_string());
    }
    value
        .as_f64()
        .map(|v| match v.is_finite() {
            true => format!("{v:.2}"),
            // nan / inf / -inf, as the plain display prints them
            false => CellValue::Float(v).to_string(),
        })
        .ok_or_else(|| ExportError::NotNumeric {
            column: column.clone(),
            row,
            value: value.to_string(),
        })
}

/// Profit table before variant-specific formatting: a leading index column,
/// centered body cells, and the header labels.
pub(crate) fn profit_table(data: &SummaryFrame) -> Result<ReportTable, ExportError> {
    let (rows, cols) = data.shape();
    if cols < HEADER_LABELS.len() {
        return Err(ExportError::ColumnCount {
            expected: HEADER_LABELS.len(),
            found: cols,
        });
    }

    let mut table = ReportTable::new(rows + 1, cols + 1);
    for (i, label) in data.index().iter().enumerate() {
        table.set_text(i + 1, 0, label.as_str())?;
        for j in 0..cols {
            table.set_text(i + 1, j + 1, format_cell(data, i, j)?)?;
            table.set_alignment(i + 1, j + 1, Alignment::Center)?;
        }
    }

    for (i, label) in HEADER_LABELS.iter().enumerate() {
        table.set_text(0, i + 1, *label)?;
    }
    Ok(table)
}

/// Add every chart in `kinds`, in order.
pub(crate) fn embed_charts<S: IntervalStatistics>(
    mut document: ReportDocument,
    statistics: &S,
    kinds: &[ChartKind],
) -> Result<ReportDocument, ExportError> {
    for &kind in kinds {
        let chart = statistics
            .chart(kind)
            .ok_or(ExportError::MissingChart(kind))?;
        tracing::debug!(chart = %kind, width = chart.width_px, height = chart.height_px, "embedding chart");
        document = document.add_chart(chart);
    }
    Ok(document)
}

/// A report variant that can be written as a DOCX file and converted to PDF.
pub trait Report {
    /// File name the document is saved under.
    fn file_name(&self) -> &'static str;

    fn set_header(&mut self, header: String);

    fn set_styles(&mut self, styles: ReportStyles);

    /// Assemble the full document: header, profit table, charts.
    fn build_document(&mut self) -> Result<ReportDocument, ExportError>;

    /// Build the document and save it into `out_dir`. Returns the file path.
    fn create_word_file(&mut self, out_dir: &Path) -> Result<PathBuf, ExportError> {
        let document = self.build_document()?;
        std::fs::create_dir_all(out_dir)?;
        let path = out_dir.join(self.file_name());
        document.save(&path)?;
        Ok(path)
    }

    /// Convert a saved DOCX to PDF with the platform's converter.
    fn generate_pdf(
        &self,
        docx_path: &Path,
        out_dir: &Path,
        config: &PdfConfig,
    ) -> Result<PathBuf, ExportError> {
        pdf::generate_pdf(docx_path, out_dir, config)
    }
}

/// Files written by [`write_report`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenReport {
    pub docx: PathBuf,
    pub pdf: Option<PathBuf>,
}

/// Apply the configured header template and styles to `report`, save it into
/// the configured output directory, and convert it to PDF when `with_pdf` is set.
pub fn write_report<R: Report>(
    report: &mut R,
    config: &ReportConfig,
    params: &ReportParams,
    with_pdf: bool,
) -> Result<WrittenReport, ExportError> {
    report.set_header(resolve_header(config, params)?);
    report.set_styles(config.styles.clone());

    let docx = report.create_word_file(&config.output_dir)?;
    let pdf = if with_pdf {
        Some(report.generate_pdf(&docx, &config.output_dir, &config.pdf)?)
    } else {
        None
    };
    Ok(WrittenReport { docx, pdf })
}
