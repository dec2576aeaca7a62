//! Reusable rendering components for the dashboard views.

pub mod kpi;
pub mod ranked_bar;
pub mod trend_table;

#[cfg(test)]
pub(crate) fn line_text(line: &ratatui::text::Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}
