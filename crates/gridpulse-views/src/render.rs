//! Tab routing and the deterministic render entry point
//!
//! UI state (selected tab, date range) is never ambient: it arrives here
//! as explicit parameters and one pure function recomputes the whole
//! view model from the immutable source table.

use crate::chart::RenderedView;
use crate::metrics::{MetricsPanel, compute_metrics};
use crate::views::{customer, generation, infrastructure, overview, renewable};
use gridpulse_data::{DateRange, Table, filter};
use serde::{Deserialize, Serialize};

/// Dashboard tab identifiers: a fixed, closed set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    /// Headline trends
    Overview,
    /// Generation analysis
    Generation,
    /// Customer analysis
    Customer,
    /// Transmission infrastructure
    Infrastructure,
    /// Renewable focus
    Renewable,
}

impl Tab {
    /// All tabs in display order
    pub const ALL: [Self; 5] = [
        Self::Overview,
        Self::Generation,
        Self::Customer,
        Self::Infrastructure,
        Self::Renewable,
    ];

    /// Wire identifier used in URLs and the tab strip
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Generation => "generation",
            Self::Customer => "customer",
            Self::Infrastructure => "infrastructure",
            Self::Renewable => "renewable",
        }
    }

    /// Human-readable tab label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Generation => "Generation Analysis",
            Self::Customer => "Customer Analysis",
            Self::Infrastructure => "Infrastructure",
            Self::Renewable => "Renewable Focus",
        }
    }

    /// Parse a wire identifier. Unknown identifiers yield `None`; the
    /// caller renders nothing for them.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.as_str() == value)
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dispatch to the view builder for `tab`
#[must_use]
pub fn route(tab: Tab, table: &Table) -> RenderedView {
    match tab {
        Tab::Overview => overview::build(table),
        Tab::Generation => generation::build(table),
        Tab::Customer => customer::build(table),
        Tab::Infrastructure => infrastructure::build(table),
        Tab::Renewable => renewable::build(table),
    }
}

/// Everything one recomputation produces for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardViewModel {
    /// The tab that was rendered
    pub tab: Tab,
    /// The date range that was applied
    pub range: DateRange,
    /// Key-metrics strip
    pub metrics: MetricsPanel,
    /// The rendered tab content
    pub view: RenderedView,
}

/// Deterministic recomputation cycle: filter once, compute the metrics
/// strip, route the tab.
#[must_use]
pub fn render(table: &Table, tab: Tab, range: DateRange) -> DashboardViewModel {
    let filtered = filter(table, range);

    DashboardViewModel {
        tab,
        range,
        metrics: compute_metrics(&filtered),
        view: route(tab, &filtered),
    }
}
