use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tokio::sync::{mpsc, Semaphore};

type Job = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Runs submitted futures with at most `slots` in flight, admitted in
/// submission order.
pub struct Limiter {
    queue: mpsc::UnboundedSender<Job>,
}

impl Limiter {
    /// Must be called inside a tokio runtime. At least one slot is always
    /// available.
    pub fn new(slots: usize) -> Self {
        let (queue, mut rx) = mpsc::unbounded_channel::<Job>();
        let semaphore = Arc::new(Semaphore::new(slots.max(1)));

        tokio::spawn(async move {
            while let Some(job) = rx.recv().await {
                let Ok(permit) = Arc::clone(&semaphore).acquire_owned().await else {
                    break;
                };
                tokio::spawn(async move {
                    let _permit = permit;
                    job.await;
                });
            }
        });

        Limiter { queue }
    }

    /// Queue `work`; it starts once a slot is free and everything queued
    /// before it has been admitted.
    pub fn submit<F>(&self, work: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        // Only fails if the dispatcher died; the dropped job is then seen
        // by its caller as a unit that never reported.
        let _ = self.queue.send(Box::pin(work));
    }
}
