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
    println!("🚀 Neoscope Predefined Questions Demo\n");

    let neoscope = Neoscope::from_env().await?;
    neoscope.health_check().await?;
    println!("✅ Database connected");

    let catalog = neoscope.catalog();
    let mut surface = StdoutSurface;

    for question in QUESTION_CATALOG {
        println!("\n❓ {}", question);
        match catalog.answer(question).await? {
            Answer::Table(table) => surface.show_table(&table),
            Answer::NotRecognized => surface.show_warning(NOT_RECOGNIZED_MESSAGE),
        }
    }

    Ok(())
}
