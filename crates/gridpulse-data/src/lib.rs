//! Record table, CSV loading, schema resolution, and range filtering
//! for the gridpulse dashboard

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod filter;
pub mod loader;
pub mod resolve;
pub mod table;

// Re-export commonly used items
pub use filter::{DateRange, filter};
pub use loader::load;
pub use resolve::resolve;
pub use table::{TEMPORAL_COLUMN, Table};
