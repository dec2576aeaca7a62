//! Time-series tables for the monthly and yearly trend views.

use ratatui::text::{Line, Span};

use dash_core::formatting::format_currency;
use dash_core::models::TrendPoint;

use crate::themes::Theme;

const PERIOD_WIDTH: usize = 12;
const VALUE_WIDTH: usize = 18;

/// Lines for a trend table: a header row, then one row per period with
/// alternating styles.  Periods are labelled by their period-end date.
pub fn trend_lines(points: &[TrendPoint], theme: &Theme) -> Vec<Line<'static>> {
    if points.is_empty() {
        return vec![Line::from(Span::styled("  no data", theme.dim))];
    }

    let mut lines = vec![Line::from(Span::styled(
        format!(
            "  {:<pw$}{:>vw$}{:>vw$}",
            "Period",
            "Total Sales",
            "Operating Profit",
            pw = PERIOD_WIDTH,
            vw = VALUE_WIDTH,
        ),
        theme.table_header,
    ))];

    for (i, point) in points.iter().enumerate() {
        let style = if i % 2 == 0 {
            theme.table_row
        } else {
            theme.table_row_alt
        };
        lines.push(Line::from(Span::styled(
            format!(
                "  {:<pw$}{:>vw$}{:>vw$}",
                point.period_end.format("%Y-%m-%d").to_string(),
                format_currency(point.total_sales),
                format_currency(point.total_profit),
                pw = PERIOD_WIDTH,
                vw = VALUE_WIDTH,
            ),
            style,
        )));
    }

    lines
}

// ── Tests ─────────────────────────────────────────────────────────────────────
