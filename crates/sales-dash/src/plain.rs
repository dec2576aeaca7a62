//! Non-interactive text rendering of the published views.
//!
//! Prints the same ten views the TUI shows, in the same order, as plain
//! text.  Useful for piping into other tools or running without a terminal
//! that supports raw mode.

use std::path::Path;

use dash_core::formatting::{
    format_average_price, format_average_units, format_count, format_currency, format_percent,
};
use dash_core::models::{PublishedView, ValueFormat, ViewPayload, ViewSlot};
use dash_data::analysis;

/// Analyze the workbook and print all views to stdout.
pub fn run(workbook: &Path) -> anyhow::Result<()> {
    let data = analysis::analyze_workbook(workbook)?;
    print!("{}", render_views(&data.views));
    Ok(())
}

/// Render the ordered views to a single text block.
pub fn render_views(views: &[PublishedView]) -> String {
    let mut out = String::new();
    for (i, view) in views.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, view.title));
        render_view(&mut out, view);
        out.push('\n');
    }
    out
}

fn render_view(out: &mut String, view: &PublishedView) {
    match &view.slot {
        ViewSlot::Unavailable { .. } => {
            let reason = view
                .slot
                .unavailable_reason()
                .unwrap_or_else(|| "metrics unavailable".to_string());
            out.push_str(&format!("   {}\n", reason));
        }
        ViewSlot::Available(payload) => match payload {
            ViewPayload::Kpis(kpis) => {
                out.push_str(&format!(
                    "   Total Sales: {}\n",
                    format_currency(kpis.total_sales)
                ));
                out.push_str(&format!(
                    "   Operating Profit: {}\n",
                    format_currency(kpis.total_profit)
                ));
                out.push_str(&format!(
                    "   Overall Margin: {}\n",
                    format_percent(kpis.overall_margin)
                ));
            }
            ViewPayload::Averages(averages) => {
                out.push_str(&format!(
                    "   Average Price Per Unit: {}\n",
                    format_average_price(averages.avg_price)
                ));
                out.push_str(&format!(
                    "   Average Units Sold: {}\n",
                    format_average_units(averages.avg_units)
                ));
            }
            ViewPayload::Ranked {
                entries, format, ..
            } => {
                if entries.is_empty() {
                    out.push_str("   no data\n");
                }
                for entry in entries {
                    let value = match format {
                        ValueFormat::Currency => format_currency(entry.value),
                        ValueFormat::Count => format_count(entry.value),
                    };
                    out.push_str(&format!("   {}: {}\n", entry.key, value));
                }
            }
            ViewPayload::Geo { entries, .. } => {
                if entries.is_empty() {
                    out.push_str("   no data\n");
                }
                for entry in entries {
                    out.push_str(&format!(
                        "   {}: sales {}, profit {}\n",
                        entry.key,
                        format_currency(entry.total_sales),
                        format_currency(entry.total_profit)
                    ));
                }
            }
            ViewPayload::Trend(points) => {
                if points.is_empty() {
                    out.push_str("   no data\n");
                }
                for point in points {
                    out.push_str(&format!(
                        "   {}: sales {}, profit {}\n",
                        point.period_end.format("%Y-%m-%d"),
                        format_currency(point.total_sales),
                        format_currency(point.total_profit)
                    ));
                }
            }
        },
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use dash_core::models::{RankedEntry, SalesKpis, ViewKind};

    #[test]
    fn test_render_views_numbered_and_ordered() {
        let views = vec![
            PublishedView {
                title: "Overall Sales Performance",
                kind: ViewKind::ScalarKpi,
                slot: ViewSlot::Available(ViewPayload::Kpis(SalesKpis {
                    total_sales: 220.0,
                    total_profit: 65.0,
                    overall_margin: 29.5454,
                })),
            },
            PublishedView {
                title: "Top 5 Beverage Brands By Total Sales",
                kind: ViewKind::RankedBar,
                slot: ViewSlot::Available(ViewPayload::Ranked {
                    entries: vec![RankedEntry {
                        key: "Coke".to_string(),
                        value: 150.0,
                    }],
                    key_label: "Beverage Brand",
                    value_label: "Total Sales ($)",
                    format: ValueFormat::Currency,
                }),
            },
        ];

        let text = render_views(&views);
        assert!(text.contains("1. Overall Sales Performance"));
        assert!(text.contains("Total Sales: $220.00"));
        assert!(text.contains("Overall Margin: 29.55%"));
        assert!(text.contains("2. Top 5 Beverage Brands By Total Sales"));
        assert!(text.contains("Coke: $150.00"));
    }

    #[test]
    fn test_render_unavailable_view() {
        let views = vec![PublishedView {
            title: "Sales And Profit By City",
            kind: ViewKind::RankedBar,
            slot: ViewSlot::Unavailable {
                missing: vec!["city".to_string()],
            },
        }];

        let text = render_views(&views);
        assert!(text.contains("1. Sales And Profit By City"));
        assert!(text.contains("metrics unavailable: missing column city"));
    }
}
