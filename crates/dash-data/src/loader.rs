//! Workbook loading for the sales dashboard.
//!
//! Opens the source spreadsheet with [`calamine`], skips the fixed banner
//! rows, and converts the sheet into a [`RawTable`] of typed cells.  No
//! aggregation or column cleanup happens here.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use chrono::NaiveDate;
use tracing::debug;

use dash_core::dates;
use dash_core::error::{DashError, Result};

/// Number of banner rows above the header row in the source workbook.
pub const HEADER_SKIP_ROWS: usize = 4;

// ── Cell ──────────────────────────────────────────────────────────────────────

/// A typed workbook cell.  Numeric and date coercion happen at load time;
/// the normalizer only rearranges columns.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    Date(NaiveDate),
}

impl Cell {
    /// Numeric value of the cell, parsing numeric-looking text.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            Cell::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Text value of the cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Date value of the cell, parsing date-looking text.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Cell::Date(d) => Some(*d),
            Cell::Text(s) => dates::parse_date(s),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

// ── RawTable ──────────────────────────────────────────────────────────────────

/// The sheet after banner-row skipping: raw column labels plus data rows.
/// Every row has exactly `columns.len()` cells.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load the workbook at `path`, skipping the standard four banner rows.
pub fn load_workbook(path: &Path) -> Result<RawTable> {
    load_workbook_with_skip(path, HEADER_SKIP_ROWS)
}

/// Load the workbook at `path`, skipping `skip_rows` leading rows before the
/// header row.
///
/// # Errors
/// * [`DashError::SourceNotFound`] – the file does not exist.
/// * [`DashError::SourceEmpty`]    – the sheet holds no data rows after the header.
/// * [`DashError::SourceMalformed`] – any other read or parse failure.
pub fn load_workbook_with_skip(path: &Path, skip_rows: usize) -> Result<RawTable> {
    if !path.exists() {
        return Err(DashError::SourceNotFound(path.to_path_buf()));
    }

    let malformed = |message: String| DashError::SourceMalformed {
        path: path.to_path_buf(),
        message,
    };

    let mut workbook = open_workbook_auto(path).map_err(|e| malformed(e.to_string()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| malformed("workbook has no sheets".to_string()))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| malformed(e.to_string()))?;

    let mut rows_iter = range.rows().skip(skip_rows);

    let header = rows_iter
        .next()
        .ok_or_else(|| DashError::SourceEmpty(path.to_path_buf()))?;
    let columns: Vec<String> = header.iter().map(header_label).collect();

    let rows: Vec<Vec<Cell>> = rows_iter
        .map(|row| {
            let mut cells: Vec<Cell> = row.iter().map(convert_cell).collect();
            cells.resize(columns.len(), Cell::Empty);
            cells
        })
        .filter(|cells| !cells.iter().all(Cell::is_empty))
        .collect();

    if rows.is_empty() {
        return Err(DashError::SourceEmpty(path.to_path_buf()));
    }

    debug!(
        "Loaded {} rows x {} columns from {} (sheet {:?})",
        rows.len(),
        columns.len(),
        path.display(),
        sheet_name,
    );

    Ok(RawTable { columns, rows })
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Column label for a header cell.  Non-text cells stringify so that noise
/// columns still get a (useless but harmless) label.
fn header_label(data: &Data) -> String {
    match data {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Convert a calamine cell into our typed [`Cell`].
fn convert_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Cell::Empty
            } else {
                Cell::Text(trimmed.to_string())
            }
        }
        Data::Float(n) => Cell::Number(*n),
        Data::Int(n) => Cell::Number(*n as f64),
        Data::Bool(b) => Cell::Number(if *b { 1.0 } else { 0.0 }),
        Data::Error(_) => Cell::Empty,
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(ndt) => Cell::Date(ndt.date()),
            None => Cell::Empty,
        },
        Data::DateTimeIso(s) => match dates::parse_date(s) {
            Some(d) => Cell::Date(d),
            None => Cell::Text(s.clone()),
        },
        Data::DurationIso(s) => Cell::Text(s.clone()),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
