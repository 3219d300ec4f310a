use std::path::Path;
use std::sync::Arc;

use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::error::{Result, ScrapeError};
use crate::fetch::Fetch;
use crate::limiter::Limiter;
use crate::model::{FunctionDescriptor, FunctionRecord};
use crate::output;
use crate::parser::{detail, index};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Indexing,
    Detailing,
    Done,
}

/// Scrape the whole catalog and write it to `path`. Nothing is written
/// unless every page succeeded.
pub async fn export<F: Fetch>(
    fetcher: Arc<F>,
    index_url: &str,
    concurrency: usize,
    path: &Path,
) -> Result<usize> {
    let records = run(fetcher, index_url, concurrency).await?;
    output::write_artifact(path, &records)?;
    Ok(records.len())
}

pub async fn run<F: Fetch>(
    fetcher: Arc<F>,
    index_url: &str,
    concurrency: usize,
) -> Result<Vec<FunctionRecord>> {
    info!(stage = ?Stage::Indexing, "Reading function index");
    let descriptors = index::fetch_index(fetcher.as_ref(), index_url).await?;

    info!(
        stage = ?Stage::Detailing,
        "Fetching {} detail pages ({} at a time)",
        descriptors.len(),
        concurrency
    );
    let records = fetch_details(fetcher, descriptors, concurrency).await?;

    info!(stage = ?Stage::Done, "Collected {} functions", records.len());
    Ok(records)
}

/// Fan out one detail fetch per descriptor and join them back in input
/// order. Returns on the first failure; queued units are skipped and
/// in-flight ones finish unobserved.
pub async fn fetch_details<F: Fetch>(
    fetcher: Arc<F>,
    descriptors: Vec<FunctionDescriptor>,
    concurrency: usize,
) -> Result<Vec<FunctionRecord>> {
    let total = descriptors.len();
    let limiter = Limiter::new(concurrency);

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec}, eta {eta})")
            .map(|s| s.progress_chars("=> "))
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    // Channel: units send (position, result), this loop slots them in
    let (tx, mut rx) =
        mpsc::channel::<(usize, Result<FunctionRecord>)>((concurrency * 2).max(1));

    for (position, descriptor) in descriptors.into_iter().enumerate() {
        let fetcher = Arc::clone(&fetcher);
        let tx = tx.clone();

        limiter.submit(async move {
            if tx.is_closed() {
                return;
            }
            let result = detail::fetch_record(fetcher.as_ref(), descriptor).await;
            let _ = tx.send((position, result)).await;
        });
    }

    // Drop our copy of tx so rx closes when every unit has reported
    drop(tx);

    let mut slots: Vec<Option<FunctionRecord>> =
        std::iter::repeat_with(|| None).take(total).collect();

    while let Some((position, result)) = rx.recv().await {
        match result {
            Ok(record) => {
                slots[position] = Some(record);
                pb.inc(1);
            }
            Err(e) => {
                pb.abandon();
                warn!("Detail unit {} failed ({}): {}", position, e.kind(), e);
                return Err(e);
            }
        }
    }

    pb.finish_and_clear();

    slots
        .into_iter()
        .enumerate()
        .map(|(index, slot)| slot.ok_or(ScrapeError::Incomplete { index }))
        .collect()
}
