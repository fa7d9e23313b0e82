//! Dashboard render and metadata endpoints
//!
//! `/api/dashboard` is the reactive update channel: the shell re-requests
//! it on every tab or date-range change and swaps the returned fragments
//! into place.

use crate::state::AppState;
use axum::{
    extract::{Query, State},
    response::Json,
};
use chrono::NaiveDate;
use gridpulse_data::{DateRange, filter};
use gridpulse_views::{
    DashboardViewModel, MetricsPanel, RenderedView, Tab, compute_metrics, render,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

/// Query parameters for a render request
#[derive(Debug, Deserialize)]
pub struct RenderQuery {
    /// Tab identifier; defaults to the overview tab
    pub tab: Option<String>,

    /// Inclusive start bound (ISO date); defaults to the table's first month
    pub start: Option<NaiveDate>,

    /// Inclusive end bound (ISO date); defaults to the table's last month
    pub end: Option<NaiveDate>,
}

/// One recomputation cycle, as returned to the shell
#[derive(Debug, Serialize)]
pub struct RenderResponse {
    /// Echo of the requested tab identifier
    pub tab: String,
    /// The date range that was applied
    pub range: DateRange,
    /// Key-metrics strip
    pub metrics: MetricsPanel,
    /// The rendered tab content
    pub view: RenderedView,
}

impl From<DashboardViewModel> for RenderResponse {
    fn from(model: DashboardViewModel) -> Self {
        Self {
            tab: model.tab.to_string(),
            range: model.range,
            metrics: model.metrics,
            view: model.view,
        }
    }
}

/// Render the dashboard for the requested tab and date range.
///
/// Unknown tab identifiers are not an error: the metrics strip is still
/// computed and the tab content is explicitly empty.
pub async fn render_dashboard(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RenderQuery>,
) -> Json<RenderResponse> {
    let range = resolve_range(&state, query.start, query.end);
    let tab_param = query.tab.as_deref().unwrap_or(Tab::Overview.as_str());

    debug!(tab = tab_param, start = %range.start, end = %range.end, "render request");

    let response = match Tab::parse(tab_param) {
        Some(tab) => RenderResponse::from(render(&state.table, tab, range)),
        None => {
            warn!(tab = tab_param, "unknown tab requested, rendering nothing");
            let filtered = filter(&state.table, range);
            RenderResponse {
                tab: tab_param.to_string(),
                range,
                metrics: compute_metrics(&filtered),
                view: RenderedView::Empty,
            }
        }
    };

    Json(response)
}

/// Tab metadata entry for the shell's tab strip
#[derive(Debug, Serialize)]
pub struct TabInfo {
    /// Wire identifier
    pub id: String,
    /// Display label
    pub label: String,
}

/// Dataset metadata used by the shell to initialize its controls
#[derive(Debug, Serialize)]
pub struct MetaResponse {
    /// Number of rows in the source table
    pub rows: usize,
    /// Number of numeric columns in the source table
    pub columns: usize,
    /// Earliest month present
    pub start: Option<NaiveDate>,
    /// Latest month present
    pub end: Option<NaiveDate>,
    /// Tabs in display order
    pub tabs: Vec<TabInfo>,
    /// Identifier of the initially selected tab
    pub default_tab: String,
}

/// Serve dataset metadata
pub async fn dashboard_meta(State(state): State<Arc<AppState>>) -> Json<MetaResponse> {
    let span = state.table.span();

    Json(MetaResponse {
        rows: state.table.len(),
        columns: state.table.column_count(),
        start: span.map(|(start, _)| start),
        end: span.map(|(_, end)| end),
        tabs: Tab::ALL
            .into_iter()
            .map(|tab| TabInfo {
                id: tab.as_str().to_string(),
                label: tab.label().to_string(),
            })
            .collect(),
        default_tab: Tab::Overview.as_str().to_string(),
    })
}

/// Fill missing bounds from the table's span. An empty table with no
/// explicit bounds degrades to an all-encompassing range whose filter
/// result is empty anyway.
fn resolve_range(state: &AppState, start: Option<NaiveDate>, end: Option<NaiveDate>) -> DateRange {
    let (span_start, span_end) = state
        .table
        .span()
        .unwrap_or((NaiveDate::MIN, NaiveDate::MAX));

    DateRange::new(start.unwrap_or(span_start), end.unwrap_or(span_end))
}
