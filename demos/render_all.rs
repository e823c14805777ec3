//! Render every dashboard chart from a local directory and print the
//! resulting configurations as JSON.
//!
//! Usage: cargo run --example render_all -- [root-dir]
//! The directory must contain the `datasets/` folder with the CSV files.

use std::sync::Arc;

use paineldata::{render_all, ChartOutcome, DirSource};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let root = std::env::args().nth(1).unwrap_or_else(|| "web".to_string());
    let source = Arc::new(DirSource::new(root));

    for view in render_all(source).await {
        match view.outcome {
            ChartOutcome::Chart(config) => {
                println!("== {} ({})", view.title, view.key);
                println!("{}", serde_json::to_string_pretty(&config).unwrap());
            }
            ChartOutcome::Placeholder(message) => {
                println!("== {} ({}): {message}", view.title, view.key);
            }
        }
    }
}
