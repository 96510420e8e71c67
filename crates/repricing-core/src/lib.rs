//! repricing-core
//!
//! Shared vocabulary of the repricing reports: the summary frame produced by
//! the statistics engine, rendered charts, and the seam the engines plug into.
//! No document-format dependency lives here.

pub mod chart;
pub mod error;
pub mod frame;
pub mod params;
pub mod statistics;
