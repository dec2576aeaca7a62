//! Dashboard builder: ordered published views → styled terminal lines.
//!
//! The builder is layout-only.  It trusts the publication order and renders
//! each view in position; an unavailable view renders a warning placeholder
//! so the numbering of the remaining views never shifts.

use ratatui::text::{Line, Span};

use dash_core::models::{PublishedView, ViewPayload, ViewSlot};

use crate::components::{kpi, ranked_bar, trend_table};
use crate::themes::Theme;

/// Build the full scrollable dashboard body.
pub fn dashboard_lines(views: &[PublishedView], theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled("Beverage Sales Dashboard", theme.header)),
        Line::from(Span::styled("─".repeat(60), theme.separator)),
        Line::default(),
    ];

    for (i, view) in views.iter().enumerate() {
        lines.push(Line::from(Span::styled(
            format!("{}. {}", i + 1, view.title),
            theme.section_title,
        )));
        lines.extend(view_lines(view, theme));
        lines.push(Line::default());
    }

    lines
}

/// Body shown when the workbook could not be loaded at all.
pub fn error_lines(message: &str, theme: &Theme) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled("Beverage Sales Dashboard", theme.header)),
        Line::from(Span::styled("─".repeat(60), theme.separator)),
        Line::default(),
        Line::from(Span::styled(format!("  {}", message), theme.error)),
        Line::default(),
        Line::from(Span::styled(
            "  press r to retry, q to quit",
            theme.dim,
        )),
    ]
}

fn view_lines(view: &PublishedView, theme: &Theme) -> Vec<Line<'static>> {
    match &view.slot {
        ViewSlot::Unavailable { .. } => {
            let reason = view
                .slot
                .unavailable_reason()
                .unwrap_or_else(|| "metrics unavailable".to_string());
            vec![Line::from(Span::styled(format!("  {}", reason), theme.warning))]
        }
        ViewSlot::Available(payload) => match payload {
            ViewPayload::Kpis(kpis) => kpi::kpi_lines(kpis, theme),
            ViewPayload::Averages(averages) => kpi::averages_lines(averages, theme),
            ViewPayload::Ranked {
                entries, format, ..
            } => ranked_bar::ranked_bar_lines(entries, *format, theme),
            ViewPayload::Geo { entries, .. } => ranked_bar::geo_bar_lines(entries, theme),
            ViewPayload::Trend(points) => trend_table::trend_lines(points, theme),
        },
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
