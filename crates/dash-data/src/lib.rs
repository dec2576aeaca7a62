//! Data pipeline for the beverage sales dashboard.
//!
//! Responsible for loading the source workbook, normalizing it into the
//! canonical table, validating per-view column requirements, computing the
//! derived views, and publishing them in their fixed order.

pub mod aggregator;
pub mod analysis;
pub mod loader;
pub mod normalizer;
pub mod publisher;
pub mod validator;

pub use dash_core as core;
