#![allow(dead_code)]

use jiff::civil::{date, datetime};
use repricing_core::chart::{Chart, ChartKind};
use repricing_core::frame::{CellValue, SUMMARY_COLUMNS, SummaryFrame};
use repricing_core::params::{RepricingParams, ReportParams};
use repricing_core::statistics::PrecomputedStatistics;

/// 1x1 transparent PNG.
pub const PIXEL_PNG: [u8; 67] = [
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
    0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00,
    0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
    0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

pub const ALL_CHARTS: [ChartKind; 7] = [
    ChartKind::MeanOrders,
    ChartKind::MeanOrdersBest,
    ChartKind::MeanOrdersSum,
    ChartKind::MeanProportion,
    ChartKind::MeanProportionBest,
    ChartKind::Prices,
    ChartKind::MeanProfit,
];

pub fn pixel_chart() -> Chart {
    Chart::from_png(PIXEL_PNG.to_vec()).unwrap()
}

/// Two weekly intervals of made-up repricing statistics.
pub fn summary() -> SummaryFrame {
    let columns = SUMMARY_COLUMNS.iter().map(|c| c.to_string()).collect();
    let rows = vec![
        vec![
            datetime(2024, 1, 1, 0, 0, 0, 0).into(),
            datetime(2024, 1, 7, 0, 0, 0, 0).into(),
            CellValue::Float(12.345),
            CellValue::Float(12.0),
            CellValue::Float(99.999),
            CellValue::Float(100.0),
            CellValue::Float(0.256),
            CellValue::Float(0.5),
            CellValue::Float(1500.0),
            CellValue::Float(214.2857),
            CellValue::Int(1),
        ],
        vec![
            datetime(2024, 1, 8, 0, 0, 0, 0).into(),
            datetime(2024, 1, 14, 0, 0, 0, 0).into(),
            CellValue::Float(10.0),
            CellValue::Int(9),
            CellValue::Float(101.5),
            CellValue::Float(101.0),
            CellValue::Float(0.3),
            CellValue::Float(0.25),
            CellValue::Float(-20.0),
            CellValue::Float(-2.857),
            CellValue::Int(2),
        ],
    ];
    SummaryFrame::with_default_index(columns, rows).unwrap()
}

pub fn statistics_with_all_charts() -> PrecomputedStatistics {
    ALL_CHARTS
        .iter()
        .fold(PrecomputedStatistics::new(summary()), |stats, &kind| {
            stats.with_chart(kind, pixel_chart())
        })
}

pub fn params() -> ReportParams {
    ReportParams {
        header: "Repricing report".to_string(),
        start_date: date(2024, 1, 1),
        end_date: date(2024, 1, 14),
        repricing: RepricingParams {
            target_product: "coffee-beans-1kg".to_string(),
            main_company: "Acme".to_string(),
            period: 7,
            test_start: date(2024, 1, 8),
            test_end: date(2024, 1, 14),
        },
    }
}
