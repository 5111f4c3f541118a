use log::{info, trace, warn};
use once_cell::sync::Lazy;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::config::{worker_threads, ParallelConfig};
use crate::error::SortError;
use crate::quicksort::{partition, quick_sort};

static POOL: Lazy<Result<ThreadPool, SortError>> = Lazy::new(|| {
    let threads = worker_threads();
    match build_pool(threads) {
        Ok(pool) => {
            info!("Parallel quicksort pool ready with {} threads", pool.current_num_threads());
            Ok(pool)
        }
        Err(e) => {
            warn!("{e}, parallel quicksort falls back to sequential");
            Err(e)
        }
    }
});

pub fn build_pool(threads: usize) -> Result<ThreadPool, SortError> {
    ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("sort-worker-{i}"))
        .build()
        .map_err(|e| SortError::ThreadPool(e.to_string()))
}

/// Shared pool of the parallel quicksort, built on first use. `None` if it could not be built.
pub fn worker_pool() -> Option<&'static ThreadPool> {
    (*POOL).as_ref().ok()
}

/// Quicksort that forks both partitions onto the worker pool while ranges are
/// large. Without a pool it is the plain sequential quicksort.
pub fn parallel_quick_sort<T: Ord + Copy + Send>(arr: &mut [T]) {
    let pool = worker_pool();
    let config = pool.map_or_else(ParallelConfig::default, |pool| {
        ParallelConfig::for_threads(pool.current_num_threads())
    });
    sort_on(pool, arr, config);
}

pub fn parallel_quick_sort_with<T: Ord + Copy + Send>(arr: &mut [T], config: ParallelConfig) {
    sort_on(worker_pool(), arr, config);
}

fn sort_on<T: Ord + Copy + Send>(pool: Option<&ThreadPool>, arr: &mut [T], config: ParallelConfig) {
    match pool {
        Some(pool) => parallel_quick_sort_in(pool, arr, config),
        None => {
            trace!("no worker pool, sorting {} elements sequentially", arr.len());
            quick_sort(arr)
        }
    }
}

pub fn parallel_quick_sort_in<T: Ord + Copy + Send>(
    pool: &ThreadPool,
    arr: &mut [T],
    config: ParallelConfig,
) {
    pool.install(|| parallel_rec(arr, 0, config));
}

fn parallel_rec<T: Ord + Copy + Send>(arr: &mut [T], depth: usize, config: ParallelConfig) {
    let len = arr.len();
    if len <= 1 {
        return;
    }

    let (left_len, right_start) = partition(arr);
    let (left, rest) = arr.split_at_mut(left_len);
    let right = &mut rest[right_start - left_len..];

    // the threshold applies to the range being split, not to each child
    if len >= config.threshold && depth < config.max_depth {
        trace!("depth {depth}: forking {} | {}", left.len(), right.len());
        rayon::join(
            || parallel_rec(left, depth + 1, config),
            || parallel_rec(right, depth + 1, config),
        );
    } else {
        quick_sort(left);
        quick_sort(right);
    }
}
