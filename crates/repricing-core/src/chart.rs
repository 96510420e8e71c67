use std::fmt;

use image::ImageFormat;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The charts a statistics engine can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    MeanOrders,
    MeanOrdersBest,
    MeanOrdersSum,
    #[serde(rename = "mean_prop")]
    MeanProportion,
    #[serde(rename = "mean_prop_best")]
    MeanProportionBest,
    #[serde(rename = "prices_df")]
    Prices,
    MeanProfit,
}

impl ChartKind {
    /// Name the engines use for the chart.
    pub fn name(self) -> &'static str {
        match self {
            ChartKind::MeanOrders => "mean_orders",
            ChartKind::MeanOrdersBest => "mean_orders_best",
            ChartKind::MeanOrdersSum => "mean_orders_sum",
            ChartKind::MeanProportion => "mean_prop",
            ChartKind::MeanProportionBest => "mean_prop_best",
            ChartKind::Prices => "prices_df",
            ChartKind::MeanProfit => "mean_profit",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A rendered chart image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chart {
    pub png: Vec<u8>,
    pub width_px: u32,
    pub height_px: u32,
}

impl Chart {
    /// Wrap PNG bytes. The image is fully decoded, so truncated or corrupt
    /// data is rejected before it reaches a document.
    pub fn from_png(png: Vec<u8>) -> Result<Self, CoreError> {
        let decoded = image::load_from_memory_with_format(&png, ImageFormat::Png)
            .map_err(|e| CoreError::InvalidImage(e.to_string()))?;
        let (width_px, height_px) = (decoded.width(), decoded.height());
        if width_px == 0 || height_px == 0 {
            return Err(CoreError::InvalidImage(format!(
                "zero-sized image ({width_px}x{height_px})"
            )));
        }
        Ok(Self {
            png,
            width_px,
            height_px,
        })
    }
}
