//! View publishing: canonical table → ordered, titled, render-ready views.
//!
//! The publisher is the only place that knows the fixed slot order and the
//! per-slot display metadata.  It does not render; the UI toolkit consumes
//! the published sequence positionally.

use tracing::warn;

use dash_core::models::{PublishedView, ValueFormat, ViewPayload, ViewSlot};

use crate::aggregator::{self, BrandMetric, GeoDimension};
use crate::normalizer::CanonicalTable;
use crate::validator::{self, ViewId};

/// Number of groups surfaced for the state and city rollups.  The region
/// rollup shows all groups.
pub const GEO_TOP: usize = 10;

/// Publish all ten views in their fixed order.
///
/// A view whose required columns are missing is published as
/// [`ViewSlot::Unavailable`] in its slot; all other views proceed.
pub fn publish(table: &CanonicalTable) -> Vec<PublishedView> {
    ViewId::ALL
        .into_iter()
        .map(|view| publish_view(view, table))
        .collect()
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn publish_view(view: ViewId, table: &CanonicalTable) -> PublishedView {
    let missing = validator::missing_columns(view, table);
    if !missing.is_empty() {
        warn!(
            "View {:?} unavailable: missing columns {}",
            view,
            missing.join(", ")
        );
        return PublishedView {
            title: view.title(),
            kind: view.kind(),
            slot: ViewSlot::Unavailable { missing },
        };
    }

    let payload = match view {
        ViewId::OverallKpis => ViewPayload::Kpis(aggregator::overall_kpis(table)),
        ViewId::TopBrandsBySales => ranked_payload(
            aggregator::top_brands(table, BrandMetric::Sales),
            "Total Sales ($)",
            ValueFormat::Currency,
        ),
        ViewId::TopBrandsByProfit => ranked_payload(
            aggregator::top_brands(table, BrandMetric::Profit),
            "Operating Profit ($)",
            ValueFormat::Currency,
        ),
        ViewId::TopBrandsByUnits => ranked_payload(
            aggregator::top_brands(table, BrandMetric::Units),
            "Units Sold",
            ValueFormat::Count,
        ),
        ViewId::RegionRollup => ViewPayload::Geo {
            entries: aggregator::geo_rollup(table, GeoDimension::Region),
            key_label: "Region",
        },
        ViewId::StateRollup => ViewPayload::Geo {
            entries: truncated(aggregator::geo_rollup(table, GeoDimension::State)),
            key_label: "State",
        },
        ViewId::CityRollup => ViewPayload::Geo {
            entries: truncated(aggregator::geo_rollup(table, GeoDimension::City)),
            key_label: "City",
        },
        ViewId::PriceUnitAverages => {
            ViewPayload::Averages(aggregator::price_unit_averages(table))
        }
        ViewId::MonthlyTrend => ViewPayload::Trend(aggregator::monthly_trend(table)),
        ViewId::YearlyTrend => ViewPayload::Trend(aggregator::yearly_trend(table)),
    };

    PublishedView {
        title: view.title(),
        kind: view.kind(),
        slot: ViewSlot::Available(payload),
    }
}

fn ranked_payload(
    entries: Vec<dash_core::models::RankedEntry>,
    value_label: &'static str,
    format: ValueFormat,
) -> ViewPayload {
    ViewPayload::Ranked {
        entries,
        key_label: "Beverage Brand",
        value_label,
        format,
    }
}

fn truncated(mut entries: Vec<dash_core::models::GeoEntry>) -> Vec<dash_core::models::GeoEntry> {
    entries.truncate(GEO_TOP);
    entries
}

// ── Tests ─────────────────────────────────────────────────────────────────────
