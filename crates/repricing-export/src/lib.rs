//! repricing-export
//!
//! DOCX + PDF generation for the repricing reports: the profit table, the
//! embedded charts, and conversion through an external tool.

pub mod config;
pub mod document;
pub mod error;
pub mod ordinary;
pub mod pdf;
pub mod render;
pub mod report;
pub mod statistical;
pub mod styles;
pub mod table;

pub use ordinary::OrdinaryReport;
pub use report::{Report, WrittenReport, write_report};
pub use statistical::StatisticalReport;
