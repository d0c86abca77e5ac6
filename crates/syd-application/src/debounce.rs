//! Debounced write coalescing.
//!
//! Note edits arrive keystroke by keystroke; only the latest value within
//! a quiet window should reach storage. The debouncer owns a background
//! task that waits for the channel to go quiet, then flushes the most
//! recent value through the supplied sink. Closing the handle flushes any
//! pending value, so an edit is never lost on shutdown.

use std::future::Future;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// How long a note edit sits before being written.
pub const AUTOSAVE_WINDOW: Duration = Duration::from_millis(500);

/// Coalesces a stream of values, delivering only the last value of each
/// quiet window to the sink.
pub struct Debouncer<T: Send + 'static> {
    tx: Option<mpsc::UnboundedSender<T>>,
    worker: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Spawns the background flusher. `sink` is called once per settled
    /// value, in order.
    pub fn new<F, Fut>(window: Duration, sink: F) -> Self
    where
        F: Fn(T) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<T>();
        let worker = tokio::spawn(async move {
            let mut pending: Option<T> = None;
            loop {
                let next = if pending.is_some() {
                    match tokio::time::timeout(window, rx.recv()).await {
                        Ok(next) => next,
                        Err(_) => {
                            // Quiet window elapsed, flush the latest value.
                            if let Some(value) = pending.take() {
                                sink(value).await;
                            }
                            continue;
                        }
                    }
                } else {
                    rx.recv().await
                };

                match next {
                    Some(value) => pending = Some(value),
                    None => {
                        // Channel closed: flush whatever is still pending.
                        if let Some(value) = pending.take() {
                            sink(value).await;
                        }
                        return;
                    }
                }
            }
        });

        Self {
            tx: Some(tx),
            worker: Some(worker),
        }
    }

    /// Submits a value, superseding any value still waiting in the window.
    pub fn push(&self, value: T) {
        if let Some(tx) = &self.tx {
            // Worker only exits once the sender is dropped.
            let _ = tx.send(value);
        }
    }

    /// Closes the debouncer, flushing the pending value before returning.
    pub async fn shutdown(mut self) {
        self.tx.take();
        if let Some(worker) = self.worker.take() {
            if let Err(err) = worker.await {
                tracing::warn!(%err, "debounce worker failed during shutdown");
            }
        }
    }
}

impl<T: Send + 'static> Drop for Debouncer<T> {
    fn drop(&mut self) {
        // Dropping without shutdown still flushes: the worker sees the
        // closed channel and drains `pending` on its own, detached.
        self.tx.take();
        self.worker.take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[tokio::test(start_paused = true)]
    async fn test_rapid_pushes_coalesce_to_last_value() {
        let seen: Arc<Mutex<Vec<u32>>> = Arc::new(Mutex::new(Vec::new()));
        let sink_seen = Arc::clone(&seen);
        let debouncer = Debouncer::new(Duration::from_millis(100), move |v| {
            let seen = Arc::clone(&sink_seen);
            async move {
                seen.lock().await.push(v);
            }
        });

        debouncer.push(1);
        debouncer.push(2);
        debouncer.push(3);
        tokio::time::sleep(Duration::from_millis(200)).await;

        assert_eq!(*seen.lock().await, vec![3]);
        debouncer.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_flushes_pending_value() {
        let seen: Arc<Mutex<Vec<u32>>> = Arc::new(Mutex::new(Vec::new()));
        let sink_seen = Arc::clone(&seen);
        let debouncer = Debouncer::new(Duration::from_secs(60), move |v| {
            let seen = Arc::clone(&sink_seen);
            async move {
                seen.lock().await.push(v);
            }
        });

        debouncer.push(7);
        debouncer.shutdown().await;

        assert_eq!(*seen.lock().await, vec![7]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_quiet_windows_flush_separately() {
        let seen: Arc<Mutex<Vec<u32>>> = Arc::new(Mutex::new(Vec::new()));
        let sink_seen = Arc::clone(&seen);
        let debouncer = Debouncer::new(Duration::from_millis(100), move |v| {
            let seen = Arc::clone(&sink_seen);
            async move {
                seen.lock().await.push(v);
            }
        });

        debouncer.push(1);
        tokio::time::sleep(Duration::from_millis(200)).await;
        debouncer.push(2);
        tokio::time::sleep(Duration::from_millis(200)).await;

        assert_eq!(*seen.lock().await, vec![1, 2]);
        debouncer.shutdown().await;
    }
}
