use serde::{Deserialize, Serialize};

pub const TWIPS_PER_INCH: f64 = 1440.0;
pub const EMU_PER_INCH: f64 = 914_400.0;

pub fn inches_to_twips(inches: f64) -> usize {
    (inches * TWIPS_PER_INCH).round() as usize
}

pub fn inches_to_emu(inches: f64) -> u32 {
    (inches * EMU_PER_INCH).round() as u32
}

/// Sizing used when laying out the report tables and charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportStyles {
    /// Header row font size in points.
    pub header_font_size: usize,

    /// Body cell font size in points.
    pub body_font_size: usize,

    /// Minimum height of the table header row, in inches.
    pub header_row_height_inches: f64,

    /// Width of each data column, in inches.
    pub column_width_inches: f64,

    pub chart_width_inches: f64,
    pub chart_height_inches: f64,
}

impl Default for ReportStyles {
    fn default() -> Self {
        Self {
            header_font_size: 12,
            body_font_size: 9,
            header_row_height_inches: 1.0,
            column_width_inches: 0.6,
            chart_width_inches: 6.4,
            chart_height_inches: 2.25,
        }
    }
}
