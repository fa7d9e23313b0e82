//! Application state management

use gridpulse_core::Config;
use gridpulse_data::{DateRange, Table};
use std::time::Instant;

/// Shared application state.
///
/// The source table is loaded once before serving begins and never
/// written afterwards, so concurrent requests read it without locking.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Config,
    /// The source table, read-only after load
    pub table: Table,
    /// Server start time, for uptime reporting
    pub started_at: Instant,
}

impl AppState {
    /// Create new application state
    #[must_use]
    pub fn new(config: Config, table: Table) -> Self {
        Self {
            config,
            table,
            started_at: Instant::now(),
        }
    }

    /// The table's full span as the default date range; `None` when the
    /// table holds no rows
    #[must_use]
    pub fn full_range(&self) -> Option<DateRange> {
        self.table
            .span()
            .map(|(start, end)| DateRange::new(start, end))
    }
}
