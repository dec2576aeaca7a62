//! Canonical data model and derived-view payloads for the sales dashboard.
//!
//! The canonical table is produced once per session by the data layer and is
//! immutable afterwards; every derived view is a pure function of it.

use chrono::NaiveDate;

// ── Canonical column names ────────────────────────────────────────────────────

pub const COL_DATE: &str = "date";
pub const COL_REGION: &str = "region";
pub const COL_STATE: &str = "state";
pub const COL_CITY: &str = "city";
pub const COL_BEVERAGE_BRAND: &str = "beverage_brand";
pub const COL_PRICE_PER_UNIT: &str = "price_per_unit";
pub const COL_UNITS_SOLD: &str = "units_sold";
pub const COL_TOTAL_SALES: &str = "total_sales";
pub const COL_OPERATING_PROFIT: &str = "operating_profit";

/// Raw label the workbook uses for the transaction date.  Renamed to
/// [`COL_DATE`] during normalization.
pub const COL_INVOICE_DATE: &str = "invoice_date";

// ── CanonicalRow ──────────────────────────────────────────────────────────────

/// One sales transaction after normalization.
///
/// Every field is optional: a missing column leaves the field `None` for all
/// rows, and downstream views degrade per view rather than failing the whole
/// table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CanonicalRow {
    pub date: Option<NaiveDate>,
    pub region: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub beverage_brand: Option<String>,
    pub price_per_unit: Option<f64>,
    pub units_sold: Option<u64>,
    pub total_sales: Option<f64>,
    pub operating_profit: Option<f64>,
}

// ── Derived-view payloads ─────────────────────────────────────────────────────

/// Scalar KPIs for the "Overall Sales Performance" view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesKpis {
    pub total_sales: f64,
    pub total_profit: f64,
    /// `total_profit / total_sales × 100`, or `0.0` when sales are zero.
    pub overall_margin: f64,
}

/// Arithmetic means for the price / units view.
///
/// Either field is `NaN` when no row carries a value for it.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceUnitAverages {
    pub avg_price: f64,
    pub avg_units: f64,
}

/// One bar of a top-N ranking: a group key and its summed metric.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry {
    pub key: String,
    pub value: f64,
}

/// One row of a geographic rollup.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoEntry {
    pub key: String,
    pub total_sales: f64,
    pub total_profit: f64,
}

/// One bucket of a monthly or yearly time series, indexed by its period-end
/// date.  Buckets with no transactions carry zero sums.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub period_end: NaiveDate,
    pub total_sales: f64,
    pub total_profit: f64,
}

// ── Published views ───────────────────────────────────────────────────────────

/// How a published view is rendered by the UI toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    ScalarKpi,
    RankedBar,
    TimeSeriesTable,
}

/// How a ranked value is formatted for axes and tooltips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    /// Thousands separators, two decimals, `$` prefix.
    Currency,
    /// Integer count.
    Count,
}

/// Numeric data plus axis/tooltip metadata for one published view.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewPayload {
    Kpis(SalesKpis),
    Averages(PriceUnitAverages),
    Ranked {
        entries: Vec<RankedEntry>,
        key_label: &'static str,
        value_label: &'static str,
        format: ValueFormat,
    },
    Geo {
        entries: Vec<GeoEntry>,
        key_label: &'static str,
    },
    Trend(Vec<TrendPoint>),
}

/// Availability of one view slot.
///
/// A view with missing required columns is published as `Unavailable` in its
/// slot; the remaining views proceed untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewSlot {
    Available(ViewPayload),
    Unavailable { missing: Vec<String> },
}

impl ViewSlot {
    /// `true` when the slot carries a payload.
    pub fn is_available(&self) -> bool {
        matches!(self, ViewSlot::Available(_))
    }

    /// Human-readable reason for an unavailable slot.
    pub fn unavailable_reason(&self) -> Option<String> {
        match self {
            ViewSlot::Available(_) => None,
            ViewSlot::Unavailable { missing } => Some(format!(
                "metrics unavailable: missing column{} {}",
                if missing.len() == 1 { "" } else { "s" },
                missing.join(", ")
            )),
        }
    }
}

/// A derived view tagged with its stable title and chart kind, ready to hand
/// to the rendering toolkit.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishedView {
    pub title: &'static str,
    pub kind: ViewKind,
    pub slot: ViewSlot,
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_row_default_is_all_none() {
        let row = CanonicalRow::default();
        assert!(row.date.is_none());
        assert!(row.beverage_brand.is_none());
        assert!(row.total_sales.is_none());
        assert!(row.units_sold.is_none());
    }

    #[test]
    fn test_slot_availability() {
        let available = ViewSlot::Available(ViewPayload::Kpis(SalesKpis::default()));
        assert!(available.is_available());
        assert!(available.unavailable_reason().is_none());
    }

    #[test]
    fn test_unavailable_reason_single_column() {
        let slot = ViewSlot::Unavailable {
            missing: vec!["city".to_string()],
        };
        assert_eq!(
            slot.unavailable_reason().unwrap(),
            "metrics unavailable: missing column city"
        );
    }

    #[test]
    fn test_unavailable_reason_multiple_columns() {
        let slot = ViewSlot::Unavailable {
            missing: vec!["total_sales".to_string(), "operating_profit".to_string()],
        };
        assert_eq!(
            slot.unavailable_reason().unwrap(),
            "metrics unavailable: missing columns total_sales, operating_profit"
        );
    }
}
