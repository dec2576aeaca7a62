use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Directory bootstrap ────────────────────────────────────────────────────────

/// Ensure the standard `~/.sales-dash/` directory hierarchy exists.
///
/// Creates the following directories if absent (including any missing parents):
/// - `~/.sales-dash/`
/// - `~/.sales-dash/logs/`
pub fn ensure_directories() -> anyhow::Result<()> {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    ensure_directories_in(&home)
}

/// Directory bootstrap rooted at `base_dir` (used for testing).
pub fn ensure_directories_in(base_dir: &Path) -> anyhow::Result<()> {
    let dash_dir = base_dir.join(".sales-dash");
    std::fs::create_dir_all(&dash_dir)?;
    std::fs::create_dir_all(dash_dir.join("logs"))?;
    Ok(())
}

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Initialise the global `tracing` subscriber.
///
/// `log_level` is mapped to a [`tracing_subscriber::EnvFilter`] directive,
/// falling back to `"info"` if the level string is not recognised.  With
/// `log_file` set, output goes to that file without ANSI colours; otherwise
/// it goes to the terminal.
pub fn setup_logging(log_level: &str, log_file: Option<&PathBuf>) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(normalise_level(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    match log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = std::fs::File::create(path)?;
            let layer = fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(std::sync::Arc::new(file));
            tracing_subscriber::registry().with(filter).with(layer).init();
        }
        None => {
            let layer = fmt::layer().with_target(false).with_thread_ids(false);
            tracing_subscriber::registry().with(filter).with(layer).init();
        }
    }

    Ok(())
}

/// Map conventional upper-case level names to tracing directives (tracing
/// uses lowercase).
fn normalise_level(log_level: &str) -> &str {
    match log_level.to_uppercase().as_str() {
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARNING" => "warn",
        "ERROR" => "error",
        _ => "info",
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
