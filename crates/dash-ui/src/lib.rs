//! Terminal dashboard for the beverage sales views.

pub mod app;
pub mod components;
pub mod dashboard;
pub mod themes;

pub use app::App;
pub use themes::Theme;

pub use dash_core as core;
