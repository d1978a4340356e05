//! Performance statistics model.

use serde::{Deserialize, Serialize};

use super::entity::{Entity, Singleton, Updatable};
use super::patch::Patch;
use super::validate::Validate;
use crate::errors::AppError;

/// Headline figures, stored pre-formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PerformanceSummary {
    pub ytd_return: String,
    pub avg_annual_return: String,
    pub sharpe_ratio: String,
    pub max_drawdown: String,
}

impl Default for PerformanceSummary {
    fn default() -> Self {
        Self {
            ytd_return: "+18.4%".to_string(),
            avg_annual_return: "+14.2%".to_string(),
            sharpe_ratio: "1.85".to_string(),
            max_drawdown: "-8.3%".to_string(),
        }
    }
}

/// One month of portfolio vs. benchmark growth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataPoint {
    pub month: String,
    pub portfolio: f64,
    pub benchmark: f64,
}

/// One slice of the asset allocation chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationItem {
    pub asset: String,
    pub percentage: i32,
    pub color: String,
}

pub const DEFAULT_DISCLAIMER: &str = "Past performance does not guarantee future results. \
    All investments involve risk, including loss of principal.";

/// The single performance document. Fields missing from a stored document read as defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Performance {
    pub id: String,
    pub summary: PerformanceSummary,
    pub disclaimer: String,
    pub chart_data: Vec<ChartDataPoint>,
    pub allocation: Vec<AllocationItem>,
}

impl Default for Performance {
    fn default() -> Self {
        Self::with_defaults(String::new())
    }
}

/// Partial update of the performance document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceUpdate {
    #[serde(default)]
    pub summary: Patch<PerformanceSummary>,
    #[serde(default)]
    pub disclaimer: Patch<String>,
    #[serde(default)]
    pub chart_data: Patch<Vec<ChartDataPoint>>,
    #[serde(default)]
    pub allocation: Patch<Vec<AllocationItem>>,
}

impl Validate for PerformanceUpdate {
    fn validate(&self) -> Result<(), AppError> {
        self.summary.reject_null("summary")?;
        self.disclaimer.reject_null("disclaimer")?;
        self.chart_data.reject_null("chartData")?;
        self.allocation.reject_null("allocation")
    }
}

impl Entity for Performance {
    const COLLECTION: &'static str = "performance";
    const KIND: &'static str = "Performance";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Updatable for Performance {
    type Update = PerformanceUpdate;

    fn merge(&mut self, update: PerformanceUpdate) {
        update.summary.merge_into(&mut self.summary);
        update.disclaimer.merge_into(&mut self.disclaimer);
        update.chart_data.merge_into(&mut self.chart_data);
        update.allocation.merge_into(&mut self.allocation);
    }
}

impl Singleton for Performance {
    fn with_defaults(id: String) -> Self {
        Self {
            id,
            summary: PerformanceSummary::default(),
            disclaimer: DEFAULT_DISCLAIMER.to_string(),
            chart_data: Vec::new(),
            allocation: Vec::new(),
        }
    }
}
