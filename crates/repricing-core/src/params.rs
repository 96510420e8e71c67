use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Inputs both statistics engines are built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepricingParams {
    pub target_product: String,
    pub main_company: String,
    /// Interval length in days.
    pub period: u32,
    pub test_start: Date,
    pub test_end: Date,
}

/// Everything a report needs besides the statistics themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportParams {
    pub header: String,
    pub start_date: Date,
    pub end_date: Date,
    pub repricing: RepricingParams,
}
