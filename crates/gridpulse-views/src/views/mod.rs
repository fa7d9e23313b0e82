//! The five tab view builders
//!
//! Every builder follows the same shape: inspect the filtered table for
//! matching columns, emit one chart description per available signal, and
//! fall back to a per-view placeholder when nothing matched.

pub mod customer;
pub mod generation;
pub mod infrastructure;
pub mod overview;
pub mod renewable;
