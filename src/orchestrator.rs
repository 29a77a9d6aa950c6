//! Sequential and parallel composition of asynchronous operations.
//!
//! Futures are lazy, so handing a list of not-yet-polled operations to
//! [`run_sequence`] guarantees that none of them starts before its
//! predecessor has finished.

use futures_util::future::join_all;
use std::future::Future;

/// Runs the operations one after another and collects their outputs.
///
/// Stops at the first failure; the remaining operations are never polled.
pub async fn run_sequence<I, F, T, E>(operations: I) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, E>>,
{
    let mut outputs = Vec::new();
    for operation in operations {
        outputs.push(operation.await?);
    }
    Ok(outputs)
}

/// Runs the operations concurrently and waits until every one has settled.
///
/// Outputs keep the input order. If any operation failed, the first failure
/// in input order is returned, but only after all the others have finished.
pub async fn run_parallel<I, F, T, E>(operations: I) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, E>>,
{
    join_all(operations).await.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::FutureExt;
    use futures_util::future::BoxFuture;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tokio::time::{Instant, sleep};

    type Log = Arc<Mutex<Vec<String>>>;

    fn step(
        log: &Log,
        label: &'static str,
        ms: u64,
        fail: bool,
    ) -> BoxFuture<'static, Result<&'static str, String>> {
        let log = Arc::clone(log);
        async move {
            log.lock().unwrap().push(format!("{label}:start"));
            sleep(Duration::from_millis(ms)).await;
            log.lock().unwrap().push(format!("{label}:end"));
            if fail {
                Err(format!("{label} failed"))
            } else {
                Ok(label)
            }
        }
        .boxed()
    }

    fn entries(log: &Log) -> Vec<String> {
        log.lock().unwrap().clone()
    }

    #[tokio::test(start_paused = true)]
    async fn sequence_waits_for_each_step() {
        let log = Log::default();
        let start = Instant::now();

        let out = run_sequence(vec![step(&log, "a", 30, false), step(&log, "b", 10, false)])
            .await
            .unwrap();

        assert_eq!(out, vec!["a", "b"]);
        assert_eq!(start.elapsed(), Duration::from_millis(40));
        assert_eq!(entries(&log), vec!["a:start", "a:end", "b:start", "b:end"]);
    }

    #[tokio::test(start_paused = true)]
    async fn sequence_stops_at_first_failure() {
        let log = Log::default();

        let err = run_sequence(vec![
            step(&log, "a", 10, false),
            step(&log, "b", 10, true),
            step(&log, "c", 10, false),
        ])
        .await
        .unwrap_err();

        assert_eq!(err, "b failed");
        assert!(!entries(&log).iter().any(|entry| entry.starts_with('c')));
    }

    #[tokio::test(start_paused = true)]
    async fn parallel_finishes_with_the_slowest() {
        let log = Log::default();
        let start = Instant::now();

        let out = run_parallel(vec![
            step(&log, "slow", 50, false),
            step(&log, "fast", 10, false),
            step(&log, "mid", 30, false),
        ])
        .await
        .unwrap();

        assert_eq!(out, vec!["slow", "fast", "mid"]);
        assert_eq!(start.elapsed(), Duration::from_millis(50));
        assert_eq!(entries(&log).iter().filter(|e| e.ends_with(":end")).count(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn parallel_reports_failure_after_all_settle() {
        let log = Log::default();
        let start = Instant::now();

        let err = run_parallel(vec![
            step(&log, "ok", 50, false),
            step(&log, "bad", 10, true),
            step(&log, "worse", 20, true),
        ])
        .await
        .unwrap_err();

        assert_eq!(err, "bad failed");
        assert_eq!(start.elapsed(), Duration::from_millis(50));
        assert!(entries(&log).contains(&"ok:end".to_string()));
    }

    #[tokio::test]
    async fn empty_compositions_succeed() {
        let none: Vec<BoxFuture<'static, Result<(), String>>> = Vec::new();
        assert!(run_parallel(none).await.unwrap().is_empty());
        let none: Vec<BoxFuture<'static, Result<(), String>>> = Vec::new();
        assert!(run_sequence(none).await.unwrap().is_empty());
    }
}
