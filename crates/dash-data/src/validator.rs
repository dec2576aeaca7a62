//! Per-view column validation.
//!
//! Each published view requires a fixed set of canonical columns; when any
//! are missing the view is marked unavailable and its aggregation is skipped.
//! Validation is local to the view, so a single missing column never takes
//! the whole dashboard down.

use dash_core::models::{
    ViewKind, COL_BEVERAGE_BRAND, COL_CITY, COL_DATE, COL_OPERATING_PROFIT,
    COL_PRICE_PER_UNIT, COL_REGION, COL_STATE, COL_TOTAL_SALES, COL_UNITS_SOLD,
};

use crate::normalizer::CanonicalTable;

// ── ViewId ────────────────────────────────────────────────────────────────────

/// Identity of one published view slot.
///
/// [`ViewId::ALL`] fixes the publication order; the UI relies on positional
/// layout, so the publisher must not reorder it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    OverallKpis,
    TopBrandsBySales,
    TopBrandsByProfit,
    TopBrandsByUnits,
    RegionRollup,
    StateRollup,
    CityRollup,
    PriceUnitAverages,
    MonthlyTrend,
    YearlyTrend,
}

impl ViewId {
    /// All view slots in their fixed publication order.
    pub const ALL: [ViewId; 10] = [
        ViewId::OverallKpis,
        ViewId::TopBrandsBySales,
        ViewId::TopBrandsByProfit,
        ViewId::TopBrandsByUnits,
        ViewId::RegionRollup,
        ViewId::StateRollup,
        ViewId::CityRollup,
        ViewId::PriceUnitAverages,
        ViewId::MonthlyTrend,
        ViewId::YearlyTrend,
    ];

    /// Stable view title shown by the rendering toolkit.
    pub fn title(self) -> &'static str {
        match self {
            ViewId::OverallKpis => "Overall Sales Performance",
            ViewId::TopBrandsBySales => "Top 5 Beverage Brands By Total Sales",
            ViewId::TopBrandsByProfit => "Top 5 Beverage Brands By Profit",
            ViewId::TopBrandsByUnits => "Top 5 Beverage Brands By Units Sold",
            ViewId::RegionRollup => "Sales And Profit By Region",
            ViewId::StateRollup => "Sales And Profit By State",
            ViewId::CityRollup => "Sales And Profit By City",
            ViewId::PriceUnitAverages => "Average Price Per Unit And Unit Sold",
            ViewId::MonthlyTrend => "Monthly Trend",
            ViewId::YearlyTrend => "Yearly Trend",
        }
    }

    /// Chart kind the rendering toolkit uses for this slot.
    pub fn kind(self) -> ViewKind {
        match self {
            ViewId::OverallKpis | ViewId::PriceUnitAverages => ViewKind::ScalarKpi,
            ViewId::MonthlyTrend | ViewId::YearlyTrend => ViewKind::TimeSeriesTable,
            _ => ViewKind::RankedBar,
        }
    }

    /// Canonical columns this view cannot be computed without.
    pub fn required_columns(self) -> &'static [&'static str] {
        match self {
            ViewId::OverallKpis => &[COL_TOTAL_SALES, COL_OPERATING_PROFIT],
            ViewId::TopBrandsBySales => &[COL_BEVERAGE_BRAND, COL_TOTAL_SALES],
            ViewId::TopBrandsByProfit => &[COL_BEVERAGE_BRAND, COL_OPERATING_PROFIT],
            ViewId::TopBrandsByUnits => &[COL_BEVERAGE_BRAND, COL_UNITS_SOLD],
            ViewId::RegionRollup => &[COL_REGION, COL_TOTAL_SALES, COL_OPERATING_PROFIT],
            ViewId::StateRollup => &[COL_STATE, COL_TOTAL_SALES, COL_OPERATING_PROFIT],
            ViewId::CityRollup => &[COL_CITY, COL_TOTAL_SALES, COL_OPERATING_PROFIT],
            ViewId::PriceUnitAverages => &[COL_PRICE_PER_UNIT, COL_UNITS_SOLD],
            ViewId::MonthlyTrend | ViewId::YearlyTrend => {
                &[COL_DATE, COL_TOTAL_SALES, COL_OPERATING_PROFIT]
            }
        }
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Required columns of `view` that are absent from `table`, in declaration
/// order.  Empty when the view can be aggregated.
pub fn missing_columns(view: ViewId, table: &CanonicalTable) -> Vec<String> {
    view.required_columns()
        .iter()
        .copied()
        .filter(|name| !table.has_column(name))
        .map(str::to_string)
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
