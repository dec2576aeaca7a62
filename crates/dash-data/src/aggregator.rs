//! Derived-view aggregation over the canonical table.
//!
//! Every function here is a pure function of [`CanonicalTable`]: overall
//! KPIs, top-N brand rankings, geographic rollups, price/units averages,
//! and monthly/yearly time-series resampling.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::Datelike;

use dash_core::dates;
use dash_core::models::{
    CanonicalRow, GeoEntry, PriceUnitAverages, RankedEntry, SalesKpis, TrendPoint,
};

use crate::normalizer::CanonicalTable;

/// Number of brands kept by the top-N rankings.
pub const TOP_BRANDS: usize = 5;

// ── Metric / dimension selectors ──────────────────────────────────────────────

/// Which metric a brand ranking sums.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrandMetric {
    Sales,
    Profit,
    Units,
}

impl BrandMetric {
    fn value(self, row: &CanonicalRow) -> Option<f64> {
        match self {
            BrandMetric::Sales => row.total_sales,
            BrandMetric::Profit => row.operating_profit,
            BrandMetric::Units => row.units_sold.map(|u| u as f64),
        }
    }
}

/// Which geographic key a rollup groups by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoDimension {
    Region,
    State,
    City,
}

impl GeoDimension {
    fn key<'a>(self, row: &'a CanonicalRow) -> Option<&'a str> {
        match self {
            GeoDimension::Region => row.region.as_deref(),
            GeoDimension::State => row.state.as_deref(),
            GeoDimension::City => row.city.as_deref(),
        }
    }
}

// ── Scalar KPIs ───────────────────────────────────────────────────────────────

/// Overall sales performance: total sales, total operating profit, and the
/// overall margin percentage.  The margin resolves to `0.0` when total sales
/// are zero.
pub fn overall_kpis(table: &CanonicalTable) -> SalesKpis {
    let total_sales: f64 = table.rows.iter().filter_map(|r| r.total_sales).sum();
    let total_profit: f64 = table.rows.iter().filter_map(|r| r.operating_profit).sum();

    let overall_margin = if total_sales != 0.0 {
        total_profit / total_sales * 100.0
    } else {
        0.0
    };

    SalesKpis {
        total_sales,
        total_profit,
        overall_margin,
    }
}

/// Arithmetic means of price-per-unit and units-sold over non-null rows.
/// A field with no values at all yields `NaN`.
pub fn price_unit_averages(table: &CanonicalTable) -> PriceUnitAverages {
    PriceUnitAverages {
        avg_price: mean(table.rows.iter().filter_map(|r| r.price_per_unit)),
        avg_units: mean(table.rows.iter().filter_map(|r| r.units_sold.map(|u| u as f64))),
    }
}

// ── Rankings and rollups ──────────────────────────────────────────────────────

/// Group by beverage brand, sum `metric`, sort descending, keep the top
/// [`TOP_BRANDS`].  Ties are broken by ascending brand name.
pub fn top_brands(table: &CanonicalTable, metric: BrandMetric) -> Vec<RankedEntry> {
    let mut sums: BTreeMap<&str, f64> = BTreeMap::new();
    for row in &table.rows {
        let Some(brand) = row.beverage_brand.as_deref() else {
            continue;
        };
        let Some(value) = metric.value(row) else {
            continue;
        };
        *sums.entry(brand).or_default() += value;
    }

    // The BTreeMap yields ascending brand names; the stable sort keeps that
    // order within equal metric values.
    let mut entries: Vec<RankedEntry> = sums
        .into_iter()
        .map(|(key, value)| RankedEntry {
            key: key.to_string(),
            value,
        })
        .collect();
    entries.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));
    entries.truncate(TOP_BRANDS);
    entries
}

/// Group by a geographic key and sum sales and profit, sorted by total sales
/// descending (ascending key within ties).  Returns all groups; the
/// publisher truncates state and city rollups for display.
///
/// A row missing the group key is skipped; a row missing a metric
/// contributes zero to that sum.
pub fn geo_rollup(table: &CanonicalTable, dimension: GeoDimension) -> Vec<GeoEntry> {
    let mut sums: BTreeMap<&str, (f64, f64)> = BTreeMap::new();
    for row in &table.rows {
        let Some(key) = dimension.key(row) else {
            continue;
        };
        let bucket = sums.entry(key).or_default();
        bucket.0 += row.total_sales.unwrap_or(0.0);
        bucket.1 += row.operating_profit.unwrap_or(0.0);
    }

    let mut entries: Vec<GeoEntry> = sums
        .into_iter()
        .map(|(key, (total_sales, total_profit))| GeoEntry {
            key: key.to_string(),
            total_sales,
            total_profit,
        })
        .collect();
    entries.sort_by(|a, b| {
        b.total_sales
            .partial_cmp(&a.total_sales)
            .unwrap_or(Ordering::Equal)
    });
    entries
}

// ── Time series ───────────────────────────────────────────────────────────────

/// Bucket rows into month-end periods and sum sales and profit per bucket.
/// Months between the first and last transaction with no rows appear with
/// zero sums.  Rows without a date are skipped.
pub fn monthly_trend(table: &CanonicalTable) -> Vec<TrendPoint> {
    let mut buckets: BTreeMap<(i32, u32), (f64, f64)> = BTreeMap::new();
    for row in &table.rows {
        let Some(date) = row.date else {
            continue;
        };
        let bucket = buckets.entry((date.year(), date.month())).or_default();
        bucket.0 += row.total_sales.unwrap_or(0.0);
        bucket.1 += row.operating_profit.unwrap_or(0.0);
    }

    let (Some(&first), Some(&last)) = (buckets.keys().next(), buckets.keys().next_back())
    else {
        return Vec::new();
    };

    let mut points = Vec::new();
    let (mut year, mut month) = first;
    loop {
        let (total_sales, total_profit) =
            buckets.get(&(year, month)).copied().unwrap_or((0.0, 0.0));
        if let Some(period_end) = dates::month_end(year, month) {
            points.push(TrendPoint {
                period_end,
                total_sales,
                total_profit,
            });
        }
        if (year, month) == last {
            break;
        }
        (year, month) = dates::next_month(year, month);
    }
    points
}

/// Bucket rows into year-end periods; otherwise identical to
/// [`monthly_trend`].
pub fn yearly_trend(table: &CanonicalTable) -> Vec<TrendPoint> {
    let mut buckets: BTreeMap<i32, (f64, f64)> = BTreeMap::new();
    for row in &table.rows {
        let Some(date) = row.date else {
            continue;
        };
        let bucket = buckets.entry(date.year()).or_default();
        bucket.0 += row.total_sales.unwrap_or(0.0);
        bucket.1 += row.operating_profit.unwrap_or(0.0);
    }

    let (Some(&first), Some(&last)) = (buckets.keys().next(), buckets.keys().next_back())
    else {
        return Vec::new();
    };

    let mut points = Vec::new();
    for year in first..=last {
        let (total_sales, total_profit) = buckets.get(&year).copied().unwrap_or((0.0, 0.0));
        if let Some(period_end) = dates::year_end(year) {
            points.push(TrendPoint {
                period_end,
                total_sales,
                total_profit,
            });
        }
    }
    points
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Arithmetic mean, `NaN` for an empty iterator.
fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for v in values {
        sum += v;
        count += 1;
    }
    if count == 0 {
        f64::NAN
    } else {
        sum / count as f64
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
