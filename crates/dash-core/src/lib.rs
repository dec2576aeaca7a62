//! Shared foundation for the beverage sales dashboard.
//!
//! Holds the canonical data model, the error taxonomy, number and date
//! formatting helpers, and CLI settings shared by the data, runtime, and UI
//! layers.

pub mod dates;
pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
