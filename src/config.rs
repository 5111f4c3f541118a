use std::env;
use std::num::NonZeroUsize;
use std::thread;

// shellsort gaps, applied from largest to smallest
pub const SHELL_GAPS: [usize; 8] = [701, 301, 132, 57, 23, 10, 4, 1];

// thread handoff costs ~70us, only fork once a range is at least this big
pub const PARALLEL_THRESHOLD: usize = 1 << 16;
pub const MAX_PARALLEL_DEPTH: usize = 16;

// driver skips O(n^2) sorts above this size
pub const QUADRATIC_LIMIT: usize = 1 << 16;

pub const THREADS_ENV: &str = "SORT_THREADS";

const fn is_strictly_decreasing(gaps: &[usize]) -> bool {
    let mut i = 1;
    while i < gaps.len() {
        if gaps[i - 1] <= gaps[i] {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = {
    assert!(is_strictly_decreasing(&SHELL_GAPS), "SHELL_GAPS must be strictly decreasing");
    assert!(SHELL_GAPS[SHELL_GAPS.len() - 1] == 1, "last shell gap must be 1");
    assert!(PARALLEL_THRESHOLD >= 2, "PARALLEL_THRESHOLD must allow a partition step");
    assert!(MAX_PARALLEL_DEPTH > 0);
};

/// Number of workers for the parallel sort pool.
///
/// `SORT_THREADS` wins if it parses to a positive number, otherwise the
/// available parallelism of the machine is used.
pub fn worker_threads() -> usize {
    env::var(THREADS_ENV)
        .ok()
        .and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|&n| n > 0)
        .unwrap_or_else(|| thread::available_parallelism().map_or(1, NonZeroUsize::get))
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ParallelConfig {
    /// Minimum range length that is split across two tasks.
    pub threshold: usize,
    /// No forks happen at or beyond this recursion depth.
    pub max_depth: usize,
}

impl ParallelConfig {
    pub fn for_threads(threads: usize) -> Self {
        // two levels beyond one task per worker
        let depth = threads.max(1).next_power_of_two().trailing_zeros() as usize + 2;
        ParallelConfig {
            threshold: PARALLEL_THRESHOLD,
            max_depth: depth.min(MAX_PARALLEL_DEPTH),
        }
    }
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self::for_threads(worker_threads())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_grows_with_threads() {
        assert_eq!(ParallelConfig::for_threads(1).max_depth, 2);
        assert_eq!(ParallelConfig::for_threads(4).max_depth, 4);
        assert_eq!(ParallelConfig::for_threads(6).max_depth, 5);
        assert_eq!(ParallelConfig::for_threads(usize::MAX / 4).max_depth, MAX_PARALLEL_DEPTH);
        assert_eq!(ParallelConfig::for_threads(0), ParallelConfig::for_threads(1));
    }

    #[test]
    fn default_threshold() {
        assert_eq!(ParallelConfig::default().threshold, 1 << 16);
    }
}
