//! Horizontal bar charts for the ranked and geographic views.
//!
//! Bars are drawn with block characters scaled against the largest value in
//! the series; labels are padded by display width so multi-byte keys do not
//! break the column alignment.

use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use dash_core::formatting::{format_count, format_currency};
use dash_core::models::{GeoEntry, RankedEntry, ValueFormat};

use crate::themes::Theme;

/// Widest a bar gets, in cells.
const BAR_MAX_WIDTH: usize = 30;

fn format_value(value: f64, format: ValueFormat) -> String {
    match format {
        ValueFormat::Currency => format_currency(value),
        ValueFormat::Count => format_count(value),
    }
}

fn bar(value: f64, max: f64) -> String {
    let cells = if max > 0.0 && value > 0.0 {
        (((value / max) * BAR_MAX_WIDTH as f64).round() as usize).max(1)
    } else {
        0
    };
    "█".repeat(cells)
}

fn pad_label(label: &str, width: usize) -> String {
    let pad = width.saturating_sub(label.width());
    format!("  {}{} ", label, " ".repeat(pad))
}

/// Lines for a top-N brand ranking.
pub fn ranked_bar_lines(
    entries: &[RankedEntry],
    format: ValueFormat,
    theme: &Theme,
) -> Vec<Line<'static>> {
    if entries.is_empty() {
        return vec![Line::from(Span::styled("  no data", theme.dim))];
    }

    let label_width = entries.iter().map(|e| e.key.width()).max().unwrap_or(0);
    let max = entries.iter().map(|e| e.value).fold(0.0_f64, f64::max);

    entries
        .iter()
        .map(|entry| {
            Line::from(vec![
                Span::styled(pad_label(&entry.key, label_width), theme.bar_label),
                Span::styled(bar(entry.value, max), theme.bar_fill),
                Span::styled(format!(" {}", format_value(entry.value, format)), theme.value),
            ])
        })
        .collect()
}

/// Lines for a geographic rollup: a sales bar with the profit alongside.
pub fn geo_bar_lines(entries: &[GeoEntry], theme: &Theme) -> Vec<Line<'static>> {
    if entries.is_empty() {
        return vec![Line::from(Span::styled("  no data", theme.dim))];
    }

    let label_width = entries.iter().map(|e| e.key.width()).max().unwrap_or(0);
    let max = entries
        .iter()
        .map(|e| e.total_sales)
        .fold(0.0_f64, f64::max);

    entries
        .iter()
        .map(|entry| {
            Line::from(vec![
                Span::styled(pad_label(&entry.key, label_width), theme.bar_label),
                Span::styled(bar(entry.total_sales, max), theme.bar_fill),
                Span::styled(
                    format!(" {}", format_currency(entry.total_sales)),
                    theme.value,
                ),
                Span::styled(
                    format!("  profit {}", format_currency(entry.total_profit)),
                    theme.label,
                ),
            ])
        })
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::line_text;

    fn entry(key: &str, value: f64) -> RankedEntry {
        RankedEntry {
            key: key.to_string(),
            value,
        }
    }

    #[test]
    fn test_largest_entry_gets_full_bar() {
        let entries = vec![entry("Coke", 150.0), entry("Sprite", 75.0)];
        let lines = ranked_bar_lines(&entries, ValueFormat::Currency, &Theme::dark());

        let coke_bar = lines[0].spans[1].content.chars().count();
        let sprite_bar = lines[1].spans[1].content.chars().count();
        assert_eq!(coke_bar, BAR_MAX_WIDTH);
        assert_eq!(sprite_bar, BAR_MAX_WIDTH / 2);
    }

    #[test]
    fn test_zero_value_draws_no_bar() {
        let entries = vec![entry("Coke", 100.0), entry("Dud", 0.0)];
        let lines = ranked_bar_lines(&entries, ValueFormat::Count, &Theme::dark());
        assert!(lines[1].spans[1].content.is_empty());
    }

    #[test]
    fn test_nonzero_value_draws_at_least_one_cell() {
        let entries = vec![entry("Coke", 10_000.0), entry("Tiny", 1.0)];
        let lines = ranked_bar_lines(&entries, ValueFormat::Count, &Theme::dark());
        assert_eq!(lines[1].spans[1].content.chars().count(), 1);
    }

    #[test]
    fn test_currency_and_count_formats() {
        let entries = vec![entry("Coke", 1234.5)];
        let currency = ranked_bar_lines(&entries, ValueFormat::Currency, &Theme::dark());
        assert!(line_text(&currency[0]).contains("$1,234.50"));

        let count = ranked_bar_lines(&entries, ValueFormat::Count, &Theme::dark());
        assert!(line_text(&count[0]).contains("1,235"));
        assert!(!line_text(&count[0]).contains('$'));
    }

    #[test]
    fn test_empty_entries_render_placeholder() {
        let lines = ranked_bar_lines(&[], ValueFormat::Currency, &Theme::dark());
        assert_eq!(line_text(&lines[0]).trim(), "no data");
    }

    #[test]
    fn test_geo_lines_carry_both_metrics() {
        let entries = vec![GeoEntry {
            key: "West".to_string(),
            total_sales: 150.0,
            total_profit: 40.0,
        }];
        let lines = geo_bar_lines(&entries, &Theme::dark());
        let text = line_text(&lines[0]);
        assert!(text.contains("$150.00"));
        assert!(text.contains("profit $40.00"));
    }
}
