use crate::model::{CareerData, CareerRecord, PageFields};
use crate::parser::CareerOneStopParser;
use crate::scraper::Scraper;

use tokio::time::{Duration, sleep};
use tracing::{info, warn};

/// Runs the batch: one fetch at a time, in input order, with a fixed pause
/// after every item so the remote server is not hammered.
///
/// A failed fetch is logged and degraded to an all-sentinel row; the batch
/// never drops a row and never stops early. The output therefore always has
/// exactly one row per input record, in the same order.
pub async fn run<S: Scraper>(
    scraper: &S,
    parser: &CareerOneStopParser,
    records: &[CareerRecord],
    delay: Duration,
) -> Vec<CareerData> {
    let total = records.len();
    let mut results = Vec::with_capacity(total);

    for (i, record) in records.iter().enumerate() {
        info!("[{}/{}] {}", i + 1, total, record.career);

        let fields = match scraper.fetch(&record.url).await {
            Ok(html) => parser.extract(&html),
            Err(e) => {
                warn!("Error fetching {}: {}", record.url, e);
                PageFields::unavailable()
            }
        };

        results.push(CareerData {
            career: record.career.clone(),
            cos_url: record.url.clone(),
            description: fields.description,
            video_url: fields.video_url,
            transcript: fields.transcript,
        });

        sleep(delay).await;
    }

    results
}
