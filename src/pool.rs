use std::io;
use std::sync::{Mutex, PoisonError};
use std::thread;

use log::{debug, trace};

use crate::error::{RemixError, Stage};
use crate::mix::Mix;

// ---------------------------------------------------------------------------
// Acceptor
// ---------------------------------------------------------------------------

/// Where an accepted candidate goes in the shared result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Push onto the end.
    Append,
    /// Insert at this index, shifting later items right. An index past the
    /// end of the result set is treated as the end.
    Insert(usize),
    /// Drop the candidate after all.
    Reject,
}

/// Decides which candidates survive a pool pass.
///
/// A candidate goes through two steps. [`accept`](Acceptor::accept) runs
/// without the pool lock, so it is where expensive, independent checks
/// belong (a dictionary lookup, say). Candidates it passes then reach
/// [`placement`](Acceptor::placement) with the lock held and the current
/// result set in hand; checks that depend on what other workers already
/// accepted must live there, because nothing can change the set while it
/// runs.
///
/// # Thread Safety
///
/// `Send + Sync` are required — one acceptor is shared by every worker of a
/// pass and `accept` is called concurrently.
///
/// # Example
///
/// ```rust
/// use remix::{Acceptor, Mix};
///
/// struct MinLength(usize);
///
/// impl Acceptor for MinLength {
///     fn accept(&self, candidate: &Mix) -> bool {
///         candidate.len() >= self.0
///     }
/// }
/// ```
pub trait Acceptor: Send + Sync {
    /// Returns `true` if the candidate should go on to placement.
    fn accept(&self, candidate: &Mix) -> bool;

    /// Called with the pool lock held. Defaults to appending.
    fn placement(&self, _candidate: &Mix, _accepted: &[Mix]) -> Placement {
        Placement::Append
    }
}

// ---------------------------------------------------------------------------
// Shared pool state
// ---------------------------------------------------------------------------

/// Everything the workers of one pass share, behind a single lock.
struct Queue {
    /// Candidates; a slot is emptied when a worker claims it.
    tasks:   Vec<Option<Mix>>,
    /// Next unclaimed slot.
    cursor:  usize,
    results: Vec<Mix>,
}

impl Queue {
    fn claim(&mut self) -> Option<Mix> {
        while self.cursor < self.tasks.len() {
            let slot = self.cursor;
            self.cursor += 1;
            if let Some(mix) = self.tasks[slot].take() {
                return Some(mix);
            }
        }
        None
    }

    fn place(&mut self, mix: Mix, acceptor: &dyn Acceptor) {
        match acceptor.placement(&mix, &self.results) {
            Placement::Append    => self.results.push(mix),
            Placement::Insert(i) => self.results.insert(i.min(self.results.len()), mix),
            Placement::Reject    => drop(mix),
        }
    }
}

// ---------------------------------------------------------------------------
// run_pool()
// ---------------------------------------------------------------------------

/// Filter `candidates` through `acceptor` on `threads` worker threads.
///
/// Workers repeatedly claim the next candidate under the pool lock, test it
/// with the lock released, and re-take the lock only to place survivors.
/// Rejected candidates are dropped by the worker that claimed them. The
/// returned list holds every survivor exactly once; its order depends on
/// the acceptor's placement and on scheduling.
///
/// At most one worker per candidate is started, however large `threads`
/// is. All workers are joined before this returns, on both success and
/// error.
///
/// # Errors
///
/// - [`RemixError::InvalidThreadCount`] if `threads` is zero.
/// - [`RemixError::ResourceExhausted`] if the result buffer cannot be reserved.
/// - [`RemixError::ThreadSpawn`] if a worker cannot be started.
/// - [`RemixError::WorkerPanicked`] if a worker panics.
pub fn run_pool(
    candidates: Vec<Mix>,
    acceptor:   &dyn Acceptor,
    threads:    usize,
    stage:      Stage,
) -> Result<Vec<Mix>, RemixError> {
    run_pool_with(candidates, acceptor, threads, stage, &|_| Ok(()))
}

/// [`run_pool`] with a gate consulted before each spawn; an `Err` from the
/// gate is handled exactly like a failed `spawn_scoped`.
fn run_pool_with(
    candidates: Vec<Mix>,
    acceptor:   &dyn Acceptor,
    threads:    usize,
    stage:      Stage,
    gate:       &dyn Fn(usize) -> io::Result<()>,
) -> Result<Vec<Mix>, RemixError> {
    if threads == 0 {
        return Err(RemixError::InvalidThreadCount(threads));
    }

    let total = candidates.len();
    let workers = threads.min(total.max(1));
    let mut results = Vec::new();
    results
        .try_reserve_exact(total)
        .map_err(|_| RemixError::exhausted(stage, total))?;

    let queue = Mutex::new(Queue {
        tasks: candidates.into_iter().map(Some).collect(),
        cursor: 0,
        results,
    });

    thread::scope(|scope| -> Result<(), RemixError> {
        let mut handles = Vec::with_capacity(workers);
        let mut spawn_error = None;

        for n in 0..workers {
            let queue = &queue;
            let spawned = gate(n).and_then(|()| {
                thread::Builder::new()
                    .name(format!("remix-{}-{}", stage, n))
                    .spawn_scoped(scope, move || work(queue, acceptor))
            });
            match spawned {
                Ok(handle) => handles.push(handle),
                Err(source) => {
                    spawn_error = Some(RemixError::ThreadSpawn { stage, source });
                    break;
                }
            }
        }

        // Join everything that did start before reporting anything.
        let mut panicked = false;
        for (n, handle) in handles.into_iter().enumerate() {
            match handle.join() {
                Ok(claimed) => trace!("{} worker {} exited after {} candidates", stage, n, claimed),
                Err(_)      => panicked = true,
            }
        }

        match spawn_error {
            Some(err)           => Err(err),
            None if panicked    => Err(RemixError::WorkerPanicked { stage }),
            None                => Ok(()),
        }
    })?;

    let queue = queue.into_inner().map_err(|_| RemixError::WorkerPanicked { stage })?;
    debug!("{} pass kept {} of {} candidates", stage, queue.results.len(), total);
    Ok(queue.results)
}

/// One worker's loop. Returns how many candidates it claimed.
fn work(queue: &Mutex<Queue>, acceptor: &dyn Acceptor) -> usize {
    let mut claimed = 0;
    loop {
        let next = queue.lock().unwrap_or_else(PoisonError::into_inner).claim();
        let Some(mix) = next else { break };
        claimed += 1;

        if acceptor.accept(&mix) {
            queue
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .place(mix, acceptor);
        }
    }
    claimed
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::error::ErrorKind;

    /// Accepts everything and counts how many candidates it saw.
    struct Counting(AtomicUsize);

    impl Acceptor for Counting {
        fn accept(&self, _candidate: &Mix) -> bool {
            self.0.fetch_add(1, Ordering::SeqCst);
            true
        }
    }

    fn candidates(n: usize) -> Vec<Mix> {
        (0..n).map(|i| Mix::from(format!("w{i}").as_str())).collect()
    }

    #[test]
    fn failed_spawn_joins_started_workers() {
        let counting = Counting(AtomicUsize::new(0));
        let fail_third = |n: usize| {
            if n >= 2 {
                Err(io::Error::new(io::ErrorKind::Other, "no more threads"))
            } else {
                Ok(())
            }
        };

        let err = run_pool_with(candidates(100), &counting, 4, Stage::Lookup, &fail_third)
            .unwrap_err();

        assert!(matches!(err, RemixError::ThreadSpawn { stage: Stage::Lookup, .. }));
        assert_eq!(err.kind(), ErrorKind::ConcurrencyInitFailure);
        assert_eq!(err.stage(), Some(Stage::Lookup));
        // the two workers that did start drained the whole queue before the error surfaced
        assert_eq!(counting.0.load(Ordering::SeqCst), 100);
    }

    #[test]
    fn failed_first_spawn_claims_nothing() {
        let counting = Counting(AtomicUsize::new(0));
        let err = run_pool_with(candidates(10), &counting, 3, Stage::Deduplicate, &|_| {
            Err(io::Error::new(io::ErrorKind::Other, "no threads at all"))
        })
        .unwrap_err();

        assert!(matches!(err, RemixError::ThreadSpawn { stage: Stage::Deduplicate, .. }));
        assert_eq!(counting.0.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn workers_capped_by_candidate_count() {
        let spawned = AtomicUsize::new(0);
        let counting = Counting(AtomicUsize::new(0));
        let kept = run_pool_with(candidates(3), &counting, usize::MAX, Stage::Lookup, &|_| {
            spawned.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
        .unwrap();

        assert_eq!(kept.len(), 3);
        assert_eq!(spawned.load(Ordering::SeqCst), 3);

        // an empty pass still runs one worker
        let kept = run_pool_with(Vec::new(), &counting, 8, Stage::Lookup, &|_| {
            spawned.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
        .unwrap();
        assert!(kept.is_empty());
        assert_eq!(spawned.load(Ordering::SeqCst), 4);
    }
}
