//! Bounded-window concurrent first-match search
//!
//! The scheduler pulls candidates from a single forward-only source and
//! keeps at most `concurrency` checks in flight on a fixed pool of worker
//! threads, using bounded crossbeam channels as the work and outcome
//! conduits. Only the control loop touches the source cursor; workers
//! receive already-materialized candidates. The first observed `Match` wins:
//! the cancellation flag is raised, the work channel is closed, and the
//! result is returned without waiting for stragglers — outstanding checks
//! run to natural completion and their outcomes are discarded.
//!
//! Completion order across workers is unspecified, so with multiple valid
//! passwords the winner is the first to *complete*, not the first in source
//! order.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use crossbeam::channel::{Receiver, Sender, bounded};
use tracing::{debug, trace};

/// The unlocking predicate. One call per candidate; calls may block on IO or
/// CPU and may fail for reasons unrelated to the password.
pub trait Oracle: Send + Sync {
    fn check(&self, candidate: &str) -> Outcome;
}

/// Result of one oracle check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The candidate unlocks the target.
    Match(String),
    /// The target rejected the candidate as a wrong password.
    NoMatch,
    /// The check failed for some other reason; the candidate may be a false
    /// negative.
    Error(String),
}

/// Terminal result of an entire search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    Found(String),
    /// Every candidate was checked without a match. `errors` counts checks
    /// that failed for non-password reasons, so callers can tell a clean
    /// exhaustion from one with possible false negatives.
    Exhausted { errors: u64 },
}

/// Receives one update per completed check. The total estimate, if any, is
/// fixed at sink construction; `completed` is monotonically increasing and
/// may stop short of the total when the search ends early on a match.
pub trait ProgressSink {
    fn update(&mut self, completed: u64);
}

/// Sink that discards updates; for library callers and quiet mode.
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn update(&mut self, _completed: u64) {}
}

/// Search `source` for the first candidate accepted by `oracle`, keeping up
/// to `concurrency` checks in flight. `concurrency` is clamped to at least 1.
pub fn search<O>(
    source: impl Iterator<Item = String>,
    oracle: O,
    concurrency: usize,
    progress: &mut dyn ProgressSink,
) -> SearchResult
where
    O: Oracle + 'static,
{
    let concurrency = concurrency.max(1);
    let oracle = Arc::new(oracle);
    let cancel = Arc::new(AtomicBool::new(false));

    // Work channel capacity equals the window, so a dispatch from the
    // control loop never blocks: a slot is only refilled after an outcome
    // has been drained.
    let (work_tx, work_rx) = bounded::<String>(concurrency);
    let (outcome_tx, outcome_rx) = bounded::<Outcome>(concurrency);

    for worker_id in 0..concurrency {
        let work_rx = work_rx.clone();
        let outcome_tx = outcome_tx.clone();
        let oracle = Arc::clone(&oracle);
        let cancel = Arc::clone(&cancel);
        thread::spawn(move || worker_loop(worker_id, work_rx, outcome_tx, oracle, cancel));
    }
    drop(work_rx);
    drop(outcome_tx);

    let mut source = source;
    let mut in_flight = 0usize;

    // Fill the window
    while in_flight < concurrency {
        match source.next() {
            Some(candidate) => {
                if work_tx.send(candidate).is_err() {
                    break;
                }
                in_flight += 1;
            }
            None => break,
        }
    }
    if in_flight == 0 {
        debug!("candidate source was empty");
        return SearchResult::Exhausted { errors: 0 };
    }

    let mut completed = 0u64;
    let mut errors = 0u64;

    while in_flight > 0 {
        // Disconnection here means every worker died without an outcome;
        // nothing further can complete, so report what was seen.
        let Ok(outcome) = outcome_rx.recv() else { break };
        in_flight -= 1;
        completed += 1;
        progress.update(completed);

        match outcome {
            Outcome::Match(password) => {
                cancel.store(true, Ordering::Relaxed);
                drop(work_tx);
                debug!(completed, "match found, cancelling outstanding checks");
                return SearchResult::Found(password);
            }
            Outcome::NoMatch => {}
            Outcome::Error(cause) => {
                errors += 1;
                debug!(%cause, "check failed for a non-password reason");
            }
        }

        // Refill the vacated slot; when the source is exhausted the window
        // simply shrinks.
        if let Some(candidate) = source.next() {
            if work_tx.send(candidate).is_ok() {
                in_flight += 1;
            }
        }
    }

    debug!(completed, errors, "candidate source exhausted without a match");
    SearchResult::Exhausted { errors }
}

fn worker_loop<O: Oracle>(
    worker_id: usize,
    work_rx: Receiver<String>,
    outcome_tx: Sender<Outcome>,
    oracle: Arc<O>,
    cancel: Arc<AtomicBool>,
) {
    while let Ok(candidate) = work_rx.recv() {
        if cancel.load(Ordering::Relaxed) {
            break;
        }
        trace!(worker_id, %candidate, "checking candidate");
        let outcome = oracle.check(&candidate);
        if outcome_tx.send(outcome).is_err() {
            // Control loop returned; nothing to report to
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicU64;
    use std::time::{Duration, Instant};

    /// Oracle driven by fixed match/error sets, counting every call.
    struct ScriptedOracle {
        matches: Vec<&'static str>,
        failures: Vec<&'static str>,
        calls: Arc<AtomicU64>,
        delay_on: Option<(&'static str, Duration)>,
    }

    impl ScriptedOracle {
        fn new(matches: Vec<&'static str>, failures: Vec<&'static str>) -> Self {
            Self {
                matches,
                failures,
                calls: Arc::new(AtomicU64::new(0)),
                delay_on: None,
            }
        }
    }

    impl Oracle for ScriptedOracle {
        fn check(&self, candidate: &str) -> Outcome {
            self.calls.fetch_add(1, Ordering::Relaxed);
            if let Some((slow, delay)) = self.delay_on {
                if candidate == slow {
                    thread::sleep(delay);
                }
            }
            if self.failures.iter().any(|f| *f == candidate) {
                Outcome::Error(format!("cannot read target while trying {candidate}"))
            } else if self.matches.iter().any(|m| *m == candidate) {
                Outcome::Match(candidate.to_string())
            } else {
                Outcome::NoMatch
            }
        }
    }

    /// Sink recording every update for monotonicity checks.
    #[derive(Default)]
    struct RecordingSink {
        updates: Vec<u64>,
    }

    impl ProgressSink for RecordingSink {
        fn update(&mut self, completed: u64) {
            self.updates.push(completed);
        }
    }

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_empty_source_exhausts_without_updates() {
        let mut sink = RecordingSink::default();
        let oracle = ScriptedOracle::new(vec![], vec![]);
        let result = search(std::iter::empty(), oracle, 4, &mut sink);
        assert_eq!(result, SearchResult::Exhausted { errors: 0 });
        assert!(sink.updates.is_empty());
    }

    #[test]
    fn test_no_match_consumes_entire_source() {
        let mut sink = RecordingSink::default();
        let oracle = ScriptedOracle::new(vec![], vec![]);
        let calls = Arc::clone(&oracle.calls);
        let source = strings(&["a", "b", "c", "d", "e", "f", "g"]).into_iter();
        let result = search(source, oracle, 3, &mut sink);
        assert_eq!(result, SearchResult::Exhausted { errors: 0 });
        assert_eq!(calls.load(Ordering::Relaxed), 7);
        assert_eq!(sink.updates, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_single_worker_stops_early() {
        let mut sink = RecordingSink::default();
        let oracle = ScriptedOracle::new(vec!["c"], vec![]);
        let calls = Arc::clone(&oracle.calls);
        let source = strings(&["a", "b", "c", "d"]).into_iter();
        let result = search(source, oracle, 1, &mut sink);
        assert_eq!(result, SearchResult::Found("c".to_string()));
        // With one worker, completion order is source order: a, b, c
        assert!(calls.load(Ordering::Relaxed) <= 3);
        assert!(sink.updates.len() <= 3);
    }

    #[test]
    fn test_full_window_finds_match() {
        let mut sink = RecordingSink::default();
        let oracle = ScriptedOracle::new(vec!["c"], vec![]);
        let source = strings(&["a", "b", "c", "d"]).into_iter();
        let result = search(source, oracle, 4, &mut sink);
        assert_eq!(result, SearchResult::Found("c".to_string()));
    }

    #[test]
    fn test_errored_check_does_not_abort_search() {
        let mut sink = RecordingSink::default();
        let oracle = ScriptedOracle::new(vec!["d"], vec!["b"]);
        let source = strings(&["a", "b", "c", "d"]).into_iter();
        let result = search(source, oracle, 2, &mut sink);
        assert_eq!(result, SearchResult::Found("d".to_string()));
    }

    #[test]
    fn test_exhaustion_reports_errored_checks() {
        let mut sink = RecordingSink::default();
        let oracle = ScriptedOracle::new(vec![], vec!["b", "d"]);
        let source = strings(&["a", "b", "c", "d", "e"]).into_iter();
        let result = search(source, oracle, 2, &mut sink);
        assert_eq!(result, SearchResult::Exhausted { errors: 2 });
        assert_eq!(sink.updates.len(), 5);
    }

    #[test]
    fn test_at_most_one_candidate_returned() {
        let oracle = ScriptedOracle::new(vec!["b", "c"], vec![]);
        let source = strings(&["a", "b", "c", "d"]).into_iter();
        let result = search(source, oracle, 4, &mut NullProgress);
        match result {
            SearchResult::Found(pwd) => assert!(pwd == "b" || pwd == "c"),
            other => panic!("expected a match, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_concurrency_is_clamped() {
        let oracle = ScriptedOracle::new(vec!["a"], vec![]);
        let source = strings(&["a"]).into_iter();
        let result = search(source, oracle, 0, &mut NullProgress);
        assert_eq!(result, SearchResult::Found("a".to_string()));
    }

    #[test]
    fn test_match_returns_without_waiting_for_stragglers() {
        let mut oracle = ScriptedOracle::new(vec!["b"], vec![]);
        oracle.delay_on = Some(("a", Duration::from_secs(5)));
        let source = strings(&["a", "b"]).into_iter();
        let start = Instant::now();
        let result = search(source, oracle, 2, &mut NullProgress);
        assert_eq!(result, SearchResult::Found("b".to_string()));
        // "a" is still sleeping on a detached worker; the result must not
        // wait for it
        assert!(start.elapsed() < Duration::from_secs(4));
    }

    #[test]
    fn test_progress_updates_are_monotonic() {
        let mut sink = RecordingSink::default();
        let oracle = ScriptedOracle::new(vec![], vec![]);
        let source = strings(&["a", "b", "c", "d", "e", "f"]).into_iter();
        search(source, oracle, 3, &mut sink);
        assert!(sink.updates.windows(2).all(|w| w[0] < w[1]));
    }
}
