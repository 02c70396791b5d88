mod config;
mod input;
mod model;
mod normalizer;
mod output;
mod parser;
mod pipeline;
mod scraper;

use crate::scraper::FetcherImpl;
use config::{AppConfig, load_config};
use parser::CareerOneStopParser;
use tokio::time::Duration;
use tracing::{error, info};

const CONFIG_PATH: &str = "config.json";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config: AppConfig = match load_config(CONFIG_PATH) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            std::process::exit(1);
        }
    };

    // Input problems are fatal; without rows there is nothing to scrape.
    let records = match input::load_careers(&config.input_path) {
        Ok(records) => records,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    info!(
        "Loaded {} careers from {}",
        records.len(),
        config.input_path.display()
    );

    let fetcher = match FetcherImpl::new(&config) {
        Ok(f) => f,
        Err(e) => {
            error!("Failed to build HTTP client: {}", e);
            std::process::exit(1);
        }
    };
    let parser = CareerOneStopParser::new();

    let delay = Duration::from_secs(config.per_item_delay_secs);
    let results = pipeline::run(&fetcher, &parser, &records, delay).await;

    if let Err(e) = output::write_results(&config.output_path, &results) {
        error!("{}", e);
        std::process::exit(1);
    }
    info!("Data saved to {}", config.output_path.display());
}
