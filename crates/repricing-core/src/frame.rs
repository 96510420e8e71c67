use std::fmt;

use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Column names the statistics engines emit, in table order.
pub const SUMMARY_COLUMNS: [&str; 11] = [
    "from",
    "to",
    "mean_m_orders",
    "median_m_orders",
    "mean_price",
    "median_price",
    "mean_proportion",
    "median_proportion",
    "profit",
    "profit_mean",
    "interval",
];

/// Columns rendered with two decimals in the report tables.
pub const TWO_DECIMAL_COLUMNS: [&str; 8] = [
    "mean_m_orders",
    "median_m_orders",
    "mean_price",
    "median_price",
    "mean_proportion",
    "profit",
    "profit_mean",
    "median_proportion",
];

pub fn is_two_decimal_column(name: &str) -> bool {
    TWO_DECIMAL_COLUMNS.contains(&name)
}

/// A single value of the summary frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum CellValue {
    Float(f64),
    Int(i64),
    Text(String),
    DateTime(DateTime),
}

impl CellValue {
    /// Numeric view of the value, if it has one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Int(v) => Some(*v as f64),
            CellValue::Text(_) | CellValue::DateTime(_) => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Float(v) if v.is_nan() => f.write_str("nan"),
            CellValue::Float(v) if v.is_infinite() => {
                f.write_str(if *v > 0.0 { "inf" } else { "-inf" })
            }
            // Integral floats keep their trailing ".0", like the engine's own printing.
            CellValue::Float(v) if v.fract() == 0.0 && v.abs() < 1e16 => write!(f, "{v:.1}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Int(v) => write!(f, "{v}"),
            CellValue::Text(s) => f.write_str(s),
            CellValue::DateTime(dt) => write!(f, "{}", dt.strftime("%Y-%m-%d %H:%M:%S")),
        }
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Float(v)
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        CellValue::Int(v)
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        CellValue::Text(v.to_string())
    }
}

impl From<DateTime> for CellValue {
    fn from(v: DateTime) -> Self {
        CellValue::DateTime(v)
    }
}

/// Per-interval summary table: one row per interval, named columns, and a
/// row label (index) per row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FrameParts")]
pub struct SummaryFrame {
    index: Vec<String>,
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

#[derive(Deserialize)]
struct FrameParts {
    index: Vec<String>,
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl TryFrom<FrameParts> for SummaryFrame {
    type Error = CoreError;

    fn try_from(parts: FrameParts) -> Result<Self, Self::Error> {
        SummaryFrame::new(parts.index, parts.columns, parts.rows)
    }
}

impl SummaryFrame {
    pub fn new(
        index: Vec<String>,
        columns: Vec<String>,
        rows: Vec<Vec<CellValue>>,
    ) -> Result<Self, CoreError> {
        if index.len() != rows.len() {
            return Err(CoreError::Shape(format!(
                "{} index labels for {} rows",
                index.len(),
                rows.len()
            )));
        }
        if let Some((i, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != columns.len())
        {
            return Err(CoreError::Shape(format!(
                "row {i} has {} cells, expected {}",
                row.len(),
                columns.len()
            )));
        }
        Ok(Self {
            index,
            columns,
            rows,
        })
    }

    /// Build a frame whose index is the row position (`0`, `1`, ...).
    pub fn with_default_index(
        columns: Vec<String>,
        rows: Vec<Vec<CellValue>>,
    ) -> Result<Self, CoreError> {
        let index = (0..rows.len()).map(|i| i.to_string()).collect();
        Self::new(index, columns, rows)
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.columns.len())
    }

    pub fn index(&self) -> &[String] {
        &self.index
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn column_position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn value(&self, row: usize, col: usize) -> Option<&CellValue> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Rewrite every value of one column.
    pub fn map_column<F>(&mut self, name: &str, mut f: F) -> Result<(), CoreError>
    where
        F: FnMut(&CellValue) -> CellValue,
    {
        let col = self
            .column_position(name)
            .ok_or_else(|| CoreError::MissingColumn(name.to_string()))?;
        for row in &mut self.rows {
            row[col] = f(&row[col]);
        }
        Ok(())
    }
}
