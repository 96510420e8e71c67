use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::chart::{Chart, ChartKind};
use crate::error::CoreError;
use crate::frame::SummaryFrame;

/// The seam a repricing statistics engine plugs into.
///
/// Reports call [`summary_calculation`](Self::summary_calculation) once for
/// the table, then [`generate_plots`](Self::generate_plots), then read the
/// charts they embed by kind.
pub trait IntervalStatistics {
    fn summary_calculation(&mut self) -> Result<SummaryFrame, CoreError>;

    /// Render every chart. `allow_plot` asks the engine to also display them
    /// interactively; reports always pass `false`.
    fn generate_plots(&mut self, allow_plot: bool) -> Result<(), CoreError>;

    fn chart(&self, kind: ChartKind) -> Option<&Chart>;
}

/// Statistics computed elsewhere and handed over as a summary plus rendered charts.
#[derive(Debug, Clone, Default)]
pub struct PrecomputedStatistics {
    summary: Option<SummaryFrame>,
    charts: BTreeMap<ChartKind, Chart>,
}

/// On-disk form of [`PrecomputedStatistics`]. Chart paths are relative to
/// the manifest file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatisticsManifest {
    pub summary: SummaryFrame,
    #[serde(default)]
    pub charts: BTreeMap<ChartKind, PathBuf>,
}

impl PrecomputedStatistics {
    pub fn new(summary: SummaryFrame) -> Self {
        Self {
            summary: Some(summary),
            charts: BTreeMap::new(),
        }
    }

    pub fn with_chart(mut self, kind: ChartKind, chart: Chart) -> Self {
        self.charts.insert(kind, chart);
        self
    }

    pub fn insert_chart(&mut self, kind: ChartKind, chart: Chart) {
        self.charts.insert(kind, chart);
    }

    /// Load a JSON manifest and every PNG it references.
    pub fn load(manifest_path: &Path) -> Result<Self, CoreError> {
        let contents = std::fs::read_to_string(manifest_path)?;
        let manifest: StatisticsManifest = serde_json::from_str(&contents)?;
        let base = manifest_path.parent().unwrap_or_else(|| Path::new("."));

        let mut stats = Self::new(manifest.summary);
        for (kind, rel) in manifest.charts {
            let path = base.join(&rel);
            let png = std::fs::read(&path)?;
            let chart = Chart::from_png(png).map_err(|e| {
                CoreError::InvalidImage(format!("{kind} ({}): {e}", path.display()))
            })?;
            tracing::debug!(chart = %kind, path = %path.display(), "loaded chart");
            stats.insert_chart(kind, chart);
        }

        tracing::info!(
            path = %manifest_path.display(),
            charts = stats.charts.len(),
            "statistics manifest loaded"
        );
        Ok(stats)
    }
}

impl IntervalStatistics for PrecomputedStatistics {
    fn summary_calculation(&mut self) -> Result<SummaryFrame, CoreError> {
        self.summary
            .clone()
            .ok_or_else(|| CoreError::Statistics("no summary available".to_string()))
    }

    fn generate_plots(&mut self, allow_plot: bool) -> Result<(), CoreError> {
        // Charts arrive already rendered.
        tracing::debug!(allow_plot, charts = self.charts.len(), "plots already generated");
        Ok(())
    }

    fn chart(&self, kind: ChartKind) -> Option<&Chart> {
        self.charts.get(&kind)
    }
}
