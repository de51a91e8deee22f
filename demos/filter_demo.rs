use chrono::NaiveDate;
use neoscope::prelude::*;

/// Minimal stdout implementation of the rendering surface
struct StdoutSurface;

impl RenderSurface for StdoutSurface {
    fn show_table(&mut self, table: &ResultTable) {
        println!("{}", table.columns.join(" | "));
        for row in &table.rows {
            let cells: Vec<String> = row.iter().map(|cell| cell.to_string()).collect();
            println!("{}", cells.join(" | "));
        }
    }

    fn show_metric(&mut self, label: &str, value: u64) {
        println!("📊 {}: {}", label, value);
    }

    fn show_warning(&mut self, message: &str) {
        println!("⚠️  {}", message);
    }

    fn show_info(&mut self, message: &str) {
        println!("ℹ️  {}", message);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🚀 Neoscope Filter Demo\n");

    let neoscope = Neoscope::from_env().await?;
    neoscope.health_check().await?;
    println!("✅ Database connected");

    let catalog = neoscope.catalog();
    let mut surface = StdoutSurface;

    // Session initialization: slider bounds come from the store
    let bounds = catalog.column_bounds().await?;
    surface.show_info(&format!(
        "Diameter range: {:.4} - {:.4} km",
        bounds.diameter.low, bounds.diameter.high
    ));

    let criteria = FilterCriteria::for_session(&bounds)
        .with_hazardous(HazardFilter::Yes)
        .with_approach_dates(DateRange::new(
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
        ));

    let report = FilterReport::new(catalog.list_by_criteria(&criteria).await?);
    surface.show_metric(HAZARDOUS_METRIC_LABEL, report.hazardous_count as u64);
    surface.show_table(&ResultTable::from_records(&report.records));

    // The same report serialized, as a browser-facing layer would ship it
    println!("\n{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
