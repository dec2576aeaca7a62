//! Column normalization: raw workbook table → canonical table.
//!
//! Cleans column labels, renames the invoice date, trims the leading
//! index-like column and the trailing noise region, and projects each row
//! onto the named fields of [`CanonicalRow`].  Never fails: whatever columns
//! survive the trim are returned, and per-view validation decides what can
//! still be rendered.

use tracing::debug;

use dash_core::models::{
    CanonicalRow, COL_BEVERAGE_BRAND, COL_CITY, COL_DATE, COL_INVOICE_DATE,
    COL_OPERATING_PROFIT, COL_PRICE_PER_UNIT, COL_REGION, COL_STATE, COL_TOTAL_SALES,
    COL_UNITS_SOLD,
};

use crate::loader::{Cell, RawTable};

/// Width of the trailing notes/totals region dropped from the raw sheet.
const TRAILING_NOISE_COLUMNS: usize = 5;

// ── CanonicalTable ────────────────────────────────────────────────────────────

/// The cleaned, column-normalized table used by all downstream aggregations.
/// Immutable once constructed.
#[derive(Debug, Clone, Default)]
pub struct CanonicalTable {
    /// Canonical column names surviving the trim, in sheet order.
    pub columns: Vec<String>,
    pub rows: Vec<CanonicalRow>,
}

impl CanonicalTable {
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Clean a single raw column label: trim, lowercase, spaces to underscores.
/// Idempotent.
pub fn clean_column_name(raw: &str) -> String {
    raw.trim().to_lowercase().replace(' ', "_")
}

/// Normalize a raw table into the canonical table.
///
/// 1. Clean every column label with [`clean_column_name`].
/// 2. Rename `invoice_date` to `date`.
/// 3. Drop the first column when at least one column exists.
/// 4. Drop the trailing five columns when more than five remain.
///
/// The canonical table is returned unconditionally, even when the trim
/// leaves zero columns; validators report missing-column conditions per view.
pub fn normalize(raw: &RawTable) -> CanonicalTable {
    let cleaned: Vec<String> = raw
        .columns
        .iter()
        .map(|c| {
            let name = clean_column_name(c);
            if name == COL_INVOICE_DATE {
                COL_DATE.to_string()
            } else {
                name
            }
        })
        .collect();

    // The first raw column is an index-like artifact; drop it unconditionally.
    let offset = usize::from(!cleaned.is_empty());
    let remaining = cleaned.len() - offset;
    let kept_len = if remaining > TRAILING_NOISE_COLUMNS {
        remaining - TRAILING_NOISE_COLUMNS
    } else {
        remaining
    };

    let columns: Vec<String> = cleaned[offset..offset + kept_len].to_vec();

    let rows: Vec<CanonicalRow> = raw
        .rows
        .iter()
        .map(|cells| project_row(&columns, offset, cells))
        .collect();

    debug!(
        "Normalized {} -> {} columns, {} rows",
        raw.columns.len(),
        columns.len(),
        rows.len(),
    );

    CanonicalTable { columns, rows }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Project one raw row onto the canonical fields.  Columns with names the
/// model does not know stay in the column list but contribute no field.
fn project_row(columns: &[String], offset: usize, cells: &[Cell]) -> CanonicalRow {
    let mut row = CanonicalRow::default();

    for (i, name) in columns.iter().enumerate() {
        let Some(cell) = cells.get(offset + i) else {
            continue;
        };
        match name.as_str() {
            COL_DATE => row.date = cell.as_date(),
            COL_REGION => row.region = cell.as_text().map(str::to_string),
            COL_STATE => row.state = cell.as_text().map(str::to_string),
            COL_CITY => row.city = cell.as_text().map(str::to_string),
            COL_BEVERAGE_BRAND => row.beverage_brand = cell.as_text().map(str::to_string),
            COL_PRICE_PER_UNIT => row.price_per_unit = cell.as_number(),
            COL_UNITS_SOLD => row.units_sold = cell.as_number().map(|v| v.round() as u64),
            COL_TOTAL_SALES => row.total_sales = cell.as_number(),
            COL_OPERATING_PROFIT => row.operating_profit = cell.as_number(),
            _ => {}
        }
    }

    row
}

// ── Tests ─────────────────────────────────────────────────────────────────────
