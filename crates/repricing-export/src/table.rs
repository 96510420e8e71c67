use docx_rs::{
    AlignmentType, HeightRule, Paragraph, Run, Table, TableCell, TableLayoutType, TableRow,
    TextDirectionType, VAlignType, WidthType,
};
use repricing_core::frame::SummaryFrame;

use crate::error::ExportError;

/// Usable text width of the default page, in twips.
const TEXT_WIDTH_TWIPS: usize = 8504;

/// Vertical text direction of a table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    /// Top to bottom.
    TbRl,
    /// Bottom to top.
    BtLr,
}

impl From<TextDirection> for TextDirectionType {
    fn from(d: TextDirection) -> Self {
        match d {
            TextDirection::TbRl => TextDirectionType::TbRl,
            TextDirection::BtLr => TextDirectionType::BtLr,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

impl From<Alignment> for AlignmentType {
    fn from(a: Alignment) -> Self {
        match a {
            Alignment::Left => AlignmentType::Left,
            Alignment::Center => AlignmentType::Center,
            Alignment::Right => AlignmentType::Right,
        }
    }
}

/// Content and formatting of one table cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellSpec {
    pub text: String,
    /// Font size in points; `None` keeps the document default.
    pub font_size: Option<usize>,
    pub bold: bool,
    pub alignment: Option<Alignment>,
    pub vertically_centered: bool,
    pub direction: Option<TextDirection>,
}

impl CellSpec {
    fn to_docx(&self, width: usize) -> TableCell {
        let mut run = Run::new().add_text(&self.text);
        if let Some(size) = self.font_size {
            run = run.size(size * 2); // OOXML uses half-points
        }
        if self.bold {
            run = run.bold();
        }

        let mut para = Paragraph::new().add_run(run);
        if let Some(alignment) = self.alignment {
            para = para.align(alignment.into());
        }

        let mut cell = TableCell::new()
            .add_paragraph(para)
            .width(width, WidthType::Dxa);
        if self.vertically_centered {
            cell = cell.vertical_align(VAlignType::Center);
        }
        if let Some(direction) = self.direction {
            cell = cell.text_direction(direction.into());
        }
        cell
    }
}

/// Editable grid that becomes a DOCX table once formatting is done.
///
/// Cells are addressed `(row, column)` from the top-left corner, row 0 being
/// the header row.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportTable {
    rows: Vec<Vec<CellSpec>>,
    /// Grid column widths in twips.
    grid: Vec<usize>,
    /// Minimum row heights in twips.
    row_heights: Vec<Option<usize>>,
}

impl ReportTable {
    /// An empty `rows` × `cols` table with columns spread over the page width.
    pub fn new(rows: usize, cols: usize) -> Self {
        let width = TEXT_WIDTH_TWIPS / cols.max(1);
        Self {
            rows: vec![vec![CellSpec::default(); cols]; rows],
            grid: vec![width; cols],
            row_heights: vec![None; rows],
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.grid.len()
    }

    pub fn grid(&self) -> &[usize] {
        &self.grid
    }

    pub fn row_height(&self, row: usize) -> Option<usize> {
        self.row_heights.get(row).copied().flatten()
    }

    pub fn cell(&self, row: usize, column: usize) -> Result<&CellSpec, ExportError> {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .ok_or(ExportError::CellOutOfRange { row, column })
    }

    pub fn cell_mut(&mut self, row: usize, column: usize) -> Result<&mut CellSpec, ExportError> {
        self.rows
            .get_mut(row)
            .and_then(|r| r.get_mut(column))
            .ok_or(ExportError::CellOutOfRange { row, column })
    }

    pub fn set_text(
        &mut self,
        row: usize,
        column: usize,
        text: impl Into<String>,
    ) -> Result<(), ExportError> {
        self.cell_mut(row, column)?.text = text.into();
        Ok(())
    }

    pub fn set_alignment(
        &mut self,
        row: usize,
        column: usize,
        alignment: Alignment,
    ) -> Result<(), ExportError> {
        self.cell_mut(row, column)?.alignment = Some(alignment);
        Ok(())
    }

    pub fn set_vertically_centered(&mut self, row: usize, column: usize) -> Result<(), ExportError> {
        self.cell_mut(row, column)?.vertically_centered = true;
        Ok(())
    }

    pub fn set_vertical_cell_direction(
        &mut self,
        row: usize,
        column: usize,
        direction: TextDirection,
    ) -> Result<(), ExportError> {
        self.cell_mut(row, column)?.direction = Some(direction);
        Ok(())
    }

    /// Minimum height of `row`, in twips.
    pub fn set_row_height(&mut self, row: usize, height: usize) -> Result<(), ExportError> {
        let slot = self
            .row_heights
            .get_mut(row)
            .ok_or(ExportError::CellOutOfRange { row, column: 0 })?;
        *slot = Some(height);
        Ok(())
    }

    /// Width of `column`, in twips.
    pub fn set_column_width(&mut self, column: usize, width: usize) -> Result<(), ExportError> {
        let columns = self.grid.len();
        let slot = self
            .grid
            .get_mut(column)
            .ok_or(ExportError::ColumnOutOfRange { column, columns })?;
        *slot = width;
        Ok(())
    }

    /// Font of the header row, one cell per data column.
    pub fn column_text_change(
        &mut self,
        data: &SummaryFrame,
        size: usize,
        bold: bool,
    ) -> Result<(), ExportError> {
        for i in 0..data.columns().len() {
            let cell = self.cell_mut(0, i)?;
            cell.font_size = Some(size);
            cell.bold = bold;
        }
        Ok(())
    }

    /// Font of the body cells, one per data value.
    pub fn cell_text_change(
        &mut self,
        data: &SummaryFrame,
        size: usize,
        bold: bool,
    ) -> Result<(), ExportError> {
        let (rows, cols) = data.shape();
        for i in 0..rows {
            for j in 0..cols {
                let cell = self.cell_mut(i + 1, j)?;
                cell.font_size = Some(size);
                cell.bold = bold;
            }
        }
        Ok(())
    }

    /// Remove whole columns, cells and grid entry alike.
    ///
    /// Indices refer to the table before any removal.
    pub fn delete_columns(&mut self, columns: &[usize]) -> Result<(), ExportError> {
        let count = self.grid.len();
        let mut columns = columns.to_vec();
        columns.sort_unstable_by(|a, b| b.cmp(a));
        columns.dedup();

        if let Some(&column) = columns.iter().find(|&&c| c >= count) {
            return Err(ExportError::ColumnOutOfRange {
                column,
                columns: count,
            });
        }

        for column in columns {
            for row in &mut self.rows {
                row.remove(column);
            }
            self.grid.remove(column);
        }
        Ok(())
    }

    pub fn to_docx(&self) -> Table {
        let rows = self
            .rows
            .iter()
            .zip(&self.row_heights)
            .map(|(cells, height)| {
                let cells = cells
                    .iter()
                    .zip(&self.grid)
                    .map(|(cell, &width)| cell.to_docx(width))
                    .collect();
                let row = TableRow::new(cells);
                match height {
                    Some(h) => row.row_height(*h as f32).height_rule(HeightRule::AtLeast),
                    None => row,
                }
            })
            .collect();

        Table::new(rows)
            .set_grid(self.grid.clone())
            .layout(TableLayoutType::Fixed)
    }
}
