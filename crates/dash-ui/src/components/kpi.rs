//! Metric cards for the scalar KPI views.

use ratatui::text::{Line, Span};

use dash_core::formatting::{
    format_average_price, format_average_units, format_currency, format_percent,
};
use dash_core::models::{PriceUnitAverages, SalesKpis};

use crate::themes::Theme;

/// Width reserved for metric labels so values line up in a column.
const LABEL_WIDTH: usize = 22;

fn metric_line(label: &str, value: String, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<width$}", label, width = LABEL_WIDTH), theme.label),
        Span::styled(value, theme.value),
    ])
}

/// Lines for the overall sales performance card.
pub fn kpi_lines(kpis: &SalesKpis, theme: &Theme) -> Vec<Line<'static>> {
    vec![
        metric_line("Total Sales", format_currency(kpis.total_sales), theme),
        metric_line("Operating Profit", format_currency(kpis.total_profit), theme),
        metric_line("Overall Margin", format_percent(kpis.overall_margin), theme),
    ]
}

/// Lines for the average price / units card.
pub fn averages_lines(averages: &PriceUnitAverages, theme: &Theme) -> Vec<Line<'static>> {
    vec![
        metric_line(
            "Average Price Per Unit",
            format_average_price(averages.avg_price),
            theme,
        ),
        metric_line(
            "Average Units Sold",
            format_average_units(averages.avg_units),
            theme,
        ),
    ]
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::line_text;

    #[test]
    fn test_kpi_lines_formatting() {
        let kpis = SalesKpis {
            total_sales: 220.0,
            total_profit: 65.0,
            overall_margin: 29.545454,
        };
        let lines = kpi_lines(&kpis, &Theme::dark());
        assert_eq!(lines.len(), 3);
        assert!(line_text(&lines[0]).contains("$220.00"));
        assert!(line_text(&lines[1]).contains("$65.00"));
        assert!(line_text(&lines[2]).contains("29.55%"));
    }

    #[test]
    fn test_averages_lines_nan_renders_dash() {
        let averages = PriceUnitAverages {
            avg_price: f64::NAN,
            avg_units: f64::NAN,
        };
        let lines = averages_lines(&averages, &Theme::dark());
        assert!(line_text(&lines[0]).contains('\u{2014}'));
        assert!(line_text(&lines[1]).contains('\u{2014}'));
    }

    #[test]
    fn test_labels_are_aligned() {
        let kpis = SalesKpis::default();
        let lines = kpi_lines(&kpis, &Theme::dark());
        let starts: Vec<usize> = lines
            .iter()
            .map(|l| l.spans[0].content.len())
            .collect();
        assert!(starts.iter().all(|&s| s == starts[0]));
    }
}
