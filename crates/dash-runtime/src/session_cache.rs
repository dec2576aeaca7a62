//! Per-session memoization of the canonical table.
//!
//! The workbook is loaded once per session and reused across page
//! evaluations; derived views are cheap and are recomputed every time.
//! The cache revalidates against the workbook's modification time, so an
//! edited file is picked up on the next access without an explicit refresh.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::debug;

use dash_core::error::{DashError, Result};
use dash_data::analysis;
use dash_data::normalizer::CanonicalTable;

/// Caches the canonical table for one workbook path.
#[derive(Debug)]
pub struct SessionCache {
    path: PathBuf,
    table: Option<CanonicalTable>,
    cached_mtime: Option<SystemTime>,
    last_error: Option<String>,
}

impl SessionCache {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            table: None,
            cached_mtime: None,
            last_error: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Message of the most recent failed load, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Drop the cached table so the next access reloads from disk.
    pub fn invalidate(&mut self) {
        self.table = None;
        self.cached_mtime = None;
    }

    /// The canonical table, loading it if absent or stale.
    pub fn get(&mut self) -> Result<&CanonicalTable> {
        if self.table.is_some() && !self.is_stale() {
            debug!(path = %self.path.display(), "session cache hit");
        } else {
            self.reload()?;
        }
        self.table
            .as_ref()
            .ok_or_else(|| DashError::Other(anyhow::anyhow!("session cache empty after reload")))
    }

    fn is_stale(&self) -> bool {
        match (self.cached_mtime, source_mtime(&self.path)) {
            (Some(cached), Some(current)) => cached != current,
            // An unreadable mtime forces a reload so the load error surfaces.
            _ => true,
        }
    }

    fn reload(&mut self) -> Result<()> {
        debug!(path = %self.path.display(), "loading workbook into session cache");
        match analysis::load_canonical(&self.path) {
            Ok(table) => {
                self.cached_mtime = source_mtime(&self.path);
                self.table = Some(table);
                self.last_error = None;
                Ok(())
            }
            Err(err) => {
                self.invalidate();
                self.last_error = Some(err.to_string());
                Err(err)
            }
        }
    }
}

fn source_mtime(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
