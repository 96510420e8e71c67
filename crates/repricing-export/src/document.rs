use std::io::Cursor;
use std::path::Path;

use docx_rs::{
    AlignmentType, Docx, FieldCharType, Footer, InstrPAGE, InstrText, LineSpacing, Paragraph, Pic,
    Run,
};
use repricing_core::chart::Chart;

use crate::error::ExportError;
use crate::styles::{ReportStyles, inches_to_emu};
use crate::table::ReportTable;

/// A report document under construction.
pub struct ReportDocument {
    docx: Docx,
    styles: ReportStyles,
    paragraphs: usize,
    tables: usize,
    charts: usize,
}

/// Paragraph with the report's normal spacing: nothing before or after.
pub fn normal_paragraph() -> Paragraph {
    Paragraph::new().line_spacing(LineSpacing::new().before(0).after(0))
}

/// Append a `PAGE` field to `run`, so the page number is filled in on render.
pub fn add_page_number(run: Run) -> Run {
    run.add_field_char(FieldCharType::Begin, false)
        .add_instr_text(InstrText::PAGE(InstrPAGE::new()))
        .add_field_char(FieldCharType::End, false)
}

/// First line of the report body: the header in bold.
pub fn header_paragraph(header: &str) -> Paragraph {
    normal_paragraph().add_run(Run::new().add_text(header).bold())
}

/// Footer with the header text, then a right-aligned page number.
pub fn report_footer(header: &str) -> Footer {
    Footer::new()
        .add_paragraph(normal_paragraph().add_run(Run::new().add_text(header)))
        .add_paragraph(
            normal_paragraph()
                .align(AlignmentType::Right)
                .add_run(add_page_number(Run::new())),
        )
}

/// Start a report: bold header line, a blank line, and the report footer.
pub fn create_document(header: &str, styles: &ReportStyles) -> ReportDocument {
    let docx = Docx::new()
        .footer(report_footer(header))
        .add_paragraph(header_paragraph(header))
        .add_paragraph(normal_paragraph().add_run(Run::new().add_text(" ")));

    ReportDocument {
        docx,
        styles: styles.clone(),
        paragraphs: 2,
        tables: 0,
        charts: 0,
    }
}

impl ReportDocument {
    pub fn styles(&self) -> &ReportStyles {
        &self.styles
    }

    /// Body paragraphs added so far, including the ones holding charts.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs
    }

    pub fn table_count(&self) -> usize {
        self.tables
    }

    pub fn chart_count(&self) -> usize {
        self.charts
    }

    pub fn add_text(mut self, text: &str) -> Self {
        self.docx = self
            .docx
            .add_paragraph(normal_paragraph().add_run(Run::new().add_text(text)));
        self.paragraphs += 1;
        self
    }

    pub fn add_table(mut self, table: &ReportTable) -> Self {
        self.docx = self.docx.add_table(table.to_docx());
        self.tables += 1;
        self
    }

    /// A spacer line, then the chart scaled to the configured picture size.
    pub fn add_chart(self, chart: &Chart) -> Self {
        let width = inches_to_emu(self.styles.chart_width_inches);
        let height = inches_to_emu(self.styles.chart_height_inches);
        let pic = Pic::new_with_dimensions(chart.png.clone(), chart.width_px, chart.height_px)
            .size(width, height);

        let mut doc = self.add_text(" ");
        doc.docx = doc
            .docx
            .add_paragraph(normal_paragraph().add_run(Run::new().add_image(pic)));
        doc.paragraphs += 1;
        doc.charts += 1;
        doc
    }

    pub fn to_bytes(self) -> Result<Vec<u8>, ExportError> {
        let mut buf = Cursor::new(Vec::new());
        self.docx
            .build()
            .pack(&mut buf)
            .map_err(|e| ExportError::Docx(e.to_string()))?;
        Ok(buf.into_inner())
    }

    pub fn save(self, path: &Path) -> Result<(), ExportError> {
        let (tables, charts) = (self.tables, self.charts);
        let bytes = self.to_bytes()?;
        std::fs::write(path, &bytes)?;
        tracing::info!(
            path = %path.display(),
            bytes = bytes.len(),
            tables,
            charts,
            "report document saved"
        );
        Ok(())
    }
}
