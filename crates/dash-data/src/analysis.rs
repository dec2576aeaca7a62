//! Top-level pipeline: workbook path → canonical table → published views.

use std::path::Path;

use tracing::debug;

use dash_core::error::Result;
use dash_core::models::PublishedView;

use crate::normalizer::{self, CanonicalTable};
use crate::{loader, publisher};

/// The full dashboard payload for one evaluation of the page.
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub table: CanonicalTable,
    pub views: Vec<PublishedView>,
}

/// Load and normalize the workbook at `path` into the canonical table.
///
/// This is the cacheable half of the pipeline: the canonical table is
/// immutable and is memoized per session, while views are recomputed on
/// every page evaluation.
pub fn load_canonical(path: &Path) -> Result<CanonicalTable> {
    let raw = loader::load_workbook(path)?;
    let table = normalizer::normalize(&raw);
    debug!(
        rows = table.rows.len(),
        columns = table.columns.len(),
        "canonical table ready"
    );
    Ok(table)
}

/// Run the whole pipeline: load, normalize, and publish all views.
pub fn analyze_workbook(path: &Path) -> Result<DashboardData> {
    let table = load_canonical(path)?;
    let views = publisher::publish(&table);
    Ok(DashboardData { table, views })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use dash_core::error::DashError;
    use dash_core::models::{ViewPayload, ViewSlot};
    use rust_xlsxwriter::Workbook;
    use tempfile::TempDir;

    /// Seed workbook matching the documented end-to-end scenario: four banner
    /// rows, a leading index column, the nine semantic columns, and five
    /// trailing noise columns.
    fn write_seed_workbook(dir: &Path) -> std::path::PathBuf {
        let path = dir.join("Cocacola.xlsx");
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();

        sheet.write(0, 0, "COCACOLA SALES").unwrap();

        let header = [
            "", "Invoice Date", "Region", "State", "City", "Beverage Brand",
            "Price Per Unit", "Units Sold", "Total Sales", "Operating Profit",
            "Note 1", "Note 2", "Note 3", "Note 4", "Note 5",
        ];
        for (col, label) in header.iter().enumerate() {
            sheet.write(4, col as u16, *label).unwrap();
        }

        let rows: [(&str, &str, &str, &str, &str, f64, f64, f64, f64); 4] = [
            ("2022-01-15", "West", "CA", "LA", "Coke", 1.0, 100.0, 100.0, 30.0),
            ("2022-02-10", "West", "CA", "LA", "Coke", 1.0, 50.0, 50.0, 10.0),
            ("2022-03-05", "East", "NY", "NYC", "Sprite", 2.0, 25.0, 50.0, 20.0),
            ("2023-01-20", "East", "NY", "NYC", "Sprite", 2.0, 10.0, 20.0, 5.0),
        ];
        for (i, (date, region, state, city, brand, price, units, sales, profit)) in
            rows.iter().enumerate()
        {
            let r = 5 + i as u32;
            sheet.write(r, 0, (i + 1) as f64).unwrap();
            sheet.write(r, 1, *date).unwrap();
            sheet.write(r, 2, *region).unwrap();
            sheet.write(r, 3, *state).unwrap();
            sheet.write(r, 4, *city).unwrap();
            sheet.write(r, 5, *brand).unwrap();
            sheet.write(r, 6, *price).unwrap();
            sheet.write(r, 7, *units).unwrap();
            sheet.write(r, 8, *sales).unwrap();
            sheet.write(r, 9, *profit).unwrap();
            sheet.write(r, 10, "x").unwrap();
        }

        workbook.save(&path).unwrap();
        path
    }

    #[test]
    fn test_end_to_end_seed_workbook() {
        let dir = TempDir::new().unwrap();
        let path = write_seed_workbook(dir.path());

        let data = analyze_workbook(&path).unwrap();
        assert_eq!(data.table.rows.len(), 4);
        assert_eq!(data.views.len(), 10);
        assert!(data.views.iter().all(|v| v.slot.is_available()));

        match &data.views[0].slot {
            ViewSlot::Available(ViewPayload::Kpis(kpis)) => {
                assert!((kpis.total_sales - 220.0).abs() < 1e-9);
                assert!((kpis.total_profit - 65.0).abs() < 1e-9);
                assert!((kpis.overall_margin - 29.5454545454).abs() < 1e-6);
            }
            other => panic!("unexpected slot: {:?}", other),
        }

        match &data.views[1].slot {
            ViewSlot::Available(ViewPayload::Ranked { entries, .. }) => {
                assert_eq!(entries[0].key, "Coke");
                assert_eq!(entries[0].value, 150.0);
                assert_eq!(entries[1].key, "Sprite");
                assert_eq!(entries[1].value, 70.0);
            }
            other => panic!("unexpected slot: {:?}", other),
        }

        match &data.views[7].slot {
            ViewSlot::Available(ViewPayload::Averages(avg)) => {
                assert!((avg.avg_price - 1.5).abs() < 1e-9);
                assert!((avg.avg_units - 46.25).abs() < 1e-9);
            }
            other => panic!("unexpected slot: {:?}", other),
        }
    }

    #[test]
    fn test_load_canonical_missing_file() {
        let err = load_canonical(Path::new("/tmp/no-such-workbook.xlsx")).unwrap_err();
        assert!(matches!(err, DashError::SourceNotFound(_)));
    }
}
