//! Render the single-chart page for a query key, as the standalone page does.
//!
//! Usage: cargo run --example single_chart -- <chart-key> [root-dir]

use paineldata::{render_page, ChartOutcome, DirSource};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    let key = std::env::args().nth(1);
    let root = std::env::args().nth(2).unwrap_or_else(|| "web".to_string());
    let source = DirSource::new(root);

    let page = render_page(&source, key.as_deref()).await;
    println!("# {}", page.title);
    match page.outcome {
        ChartOutcome::Chart(config) => {
            println!("{}", serde_json::to_string_pretty(&config).unwrap());
        }
        ChartOutcome::Placeholder(message) => println!("{message}"),
    }
}
