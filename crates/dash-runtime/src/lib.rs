//! Session-scoped runtime state for the dashboard.

pub mod session_cache;

pub use session_cache::SessionCache;

pub use dash_core as core;
pub use dash_data as data;
