// Last-write-wins gate for rapid input streams (the search box).
use tokio::sync::mpsc::Receiver;
use tokio::time::{Duration, sleep};

/// Waits for the next value on `rx`, then keeps absorbing newer values until
/// `delay` passes with no further input; only the last value is yielded.
/// A closed channel flushes the latest pending value; `None` means the
/// channel closed with nothing pending.
pub async fn debounce<T>(rx: &mut Receiver<T>, delay: Duration) -> Option<T> {
    let mut latest = rx.recv().await?;

    loop {
        tokio::select! {
            next = rx.recv() => match next {
                Some(value) => latest = value,
                None => return Some(latest),
            },
            _ = sleep(delay) => return Some(latest),
        }
    }
}
