//! Build a nested flowchart and write it next to the working directory
//!
//! ```bash
//! MERMAID_BUILDER_LOG_LEVEL=trace cargo run --example nested -- out/services.md
//! ```

use anyhow::Result;
use mermaid_builder::core::logging::init_default_logging;
use mermaid_builder::prelude::*;

fn main() -> Result<()> {
    if let Err(e) = init_default_logging() {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "services.mmd".to_string());

    let mut chart = Flowchart::new();
    chart.set_title("Services").set_direction(Direction::LeftRight);

    let client = chart
        .add_node("Client")
        .set_shape(NodeShape::Stadium)
        .id()
        .clone();

    let backend = chart.add_subgraph("Backend");
    let api = backend.add_node("API").id().clone();

    let storage = backend.add_subgraph("Storage")?;
    storage.set_direction(Direction::TopToBottom);
    let db = storage
        .add_node("Postgres")
        .set_shape(NodeShape::Cylindrical)
        .id()
        .clone();
    let cache = storage
        .add_node("Redis")
        .set_shape(NodeShape::Cylindrical)
        .id()
        .clone();
    storage.add_link(&cache, &db).set_shape(LineStyle::Dotted).set_text("miss");

    backend.add_link(&api, &cache);

    chart.add_link(&client, &api).set_text("HTTPS");

    chart.validate()?;
    chart.render_to_file(&path)?;
    print!("{}", chart);
    Ok(())
}
