use jiff::civil::Date;
use repricing_core::chart::ChartKind;
use repricing_core::frame::{CellValue, SummaryFrame};
use repricing_core::params::ReportParams;
use repricing_core::statistics::IntervalStatistics;

use crate::document::{ReportDocument, create_document};
use crate::error::ExportError;
use crate::report::{Report, embed_charts, profit_table};
use crate::styles::{ReportStyles, inches_to_twips};
use crate::table::{Alignment, ReportTable, TextDirection};

/// Short date form used for the interval bounds.
const INTERVAL_DATE_FORMAT: &str = "%y.%m.%d";

/// Render `from`/`to` datetimes as short dates. Other values pass through.
pub fn shorten_interval_dates(data: &mut SummaryFrame) -> Result<(), ExportError> {
    let shorten = |value: &CellValue| match value {
        CellValue::DateTime(dt) => CellValue::Text(dt.strftime(INTERVAL_DATE_FORMAT).to_string()),
        other => other.clone(),
    };
    data.map_column("from", shorten)?;
    data.map_column("to", shorten)?;
    Ok(())
}

/// Report over the statistics that also track the best-performing competitor.
pub struct StatisticalReport<S> {
    header: String,
    start_date: Date,
    end_date: Date,
    interval_information: S,
    styles: ReportStyles,
}

impl<S: IntervalStatistics> StatisticalReport<S> {
    pub const FILE_NAME: &'static str = "StatisticalReport.docx";

    pub const CHARTS: [ChartKind; 7] = [
        ChartKind::MeanOrders,
        ChartKind::MeanOrdersBest,
        ChartKind::MeanOrdersSum,
        ChartKind::MeanProportion,
        ChartKind::MeanProportionBest,
        ChartKind::Prices,
        ChartKind::MeanProfit,
    ];

    pub fn new(
        header: impl Into<String>,
        interval_information: S,
        start_date: Date,
        end_date: Date,
    ) -> Self {
        Self {
            header: header.into(),
            start_date,
            end_date,
            interval_information,
            styles: ReportStyles::default(),
        }
    }

    pub fn from_params(params: &ReportParams, interval_information: S) -> Self {
        Self::new(
            params.header.clone(),
            interval_information,
            params.start_date,
            params.end_date,
        )
    }

    pub fn with_styles(mut self, styles: ReportStyles) -> Self {
        self.styles = styles;
        self
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn start_date(&self) -> Date {
        self.start_date
    }

    pub fn end_date(&self) -> Date {
        self.end_date
    }

    /// The profit table for `data`, interval bounds shortened.
    ///
    /// Unlike the ordinary report, the header row keeps its default alignment
    /// and fonts, and columns keep their page-spread widths.
    pub fn profit_table(&self, data: &SummaryFrame) -> Result<ReportTable, ExportError> {
        let mut data = data.clone();
        shorten_interval_dates(&mut data)?;

        let mut table = profit_table(&data)?;
        for i in 0..data.columns().len() + 1 {
            table.set_vertical_cell_direction(0, i, TextDirection::BtLr)?;
            if table.row_count() > 1 {
                table.set_alignment(1, i, Alignment::Center)?;
            }
        }
        table.set_row_height(0, inches_to_twips(self.styles.header_row_height_inches))?;
        table.delete_columns(&[0])?;
        Ok(table)
    }

    pub fn add_profit_info(
        &self,
        document: ReportDocument,
        data: &SummaryFrame,
    ) -> Result<ReportDocument, ExportError> {
        let table = self.profit_table(data)?;
        Ok(document.add_table(&table))
    }
}

impl<S: IntervalStatistics> Report for StatisticalReport<S> {
    fn file_name(&self) -> &'static str {
        Self::FILE_NAME
    }

    fn set_header(&mut self, header: String) {
        self.header = header;
    }

    fn set_styles(&mut self, styles: ReportStyles) {
        self.styles = styles;
    }

    fn build_document(&mut self) -> Result<ReportDocument, ExportError> {
        let document = create_document(&self.header, &self.styles);
        let summary = self.interval_information.summary_calculation()?;
        let document = self.add_profit_info(document, &summary)?;

        self.interval_information.generate_plots(false)?;
        let document = embed_charts(document, &self.interval_information, &Self::CHARTS)?;

        tracing::info!(
            header = %self.header,
            intervals = summary.shape().0,
            start = %self.start_date,
            end = %self.end_date,
            "statistical report assembled"
        );
        Ok(document)
    }
}
