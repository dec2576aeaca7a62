use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the sales dashboard.
#[derive(Error, Debug)]
pub enum DashError {
    /// The source workbook does not exist at the given path.
    #[error("Workbook not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// The workbook parsed but contains no data rows after the banner.
    #[error("Workbook {} contains no data rows", .0.display())]
    SourceEmpty(PathBuf),

    /// Any other failure while opening or reading the workbook.
    #[error("Failed to read workbook {}: {message}", path.display())]
    SourceMalformed { path: PathBuf, message: String },

    /// An error originating from the terminal / TUI layer.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the dashboard crates.
pub type Result<T> = std::result::Result<T, DashError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_source_not_found() {
        let err = DashError::SourceNotFound(PathBuf::from("/data/Cocacola.xlsx"));
        assert_eq!(err.to_string(), "Workbook not found: /data/Cocacola.xlsx");
    }

    #[test]
    fn test_error_display_source_empty() {
        let err = DashError::SourceEmpty(PathBuf::from("/data/empty.xlsx"));
        assert_eq!(
            err.to_string(),
            "Workbook /data/empty.xlsx contains no data rows"
        );
    }

    #[test]
    fn test_error_display_source_malformed() {
        let err = DashError::SourceMalformed {
            path: PathBuf::from("/data/bad.xlsx"),
            message: "Zip error".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to read workbook"));
        assert!(msg.contains("/data/bad.xlsx"));
        assert!(msg.contains("Zip error"));
    }

    #[test]
    fn test_error_display_terminal() {
        let err = DashError::Terminal("crossterm failure".to_string());
        assert_eq!(err.to_string(), "Terminal error: crossterm failure");
    }

    #[test]
    fn test_error_display_config() {
        let err = DashError::Config("unknown view mode".to_string());
        assert_eq!(err.to_string(), "Configuration error: unknown view mode");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: DashError = io_err.into();
        assert!(err.to_string().contains("denied"));
    }
}
