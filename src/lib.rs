use std::fmt;
use std::str::FromStr;

use log::debug;
use rayon::ThreadPool;

pub mod config;
mod elementary;
mod error;
mod heapsort;
mod library;
mod mergesort;
mod parallel;
pub mod patterns;
mod quicksort;
mod shellsort;
mod smoothsort;
#[cfg(test)]
mod testutil;

pub use config::ParallelConfig;
pub use error::SortError;
pub use parallel::{build_pool, worker_pool};

pub type Element = i32;

macro_rules! element_sort {
    ($($(#[$attr:meta])* $name:ident => $kernel:path;)*) => {
        $(
            $(#[$attr])*
            #[inline]
            pub fn $name(arr: &mut [Element]) {
                $kernel(arr);
            }
        )*
    };
}

element_sort! {
    /// Stable, O(n^2) with a fixed number of passes.
    bubble_sort => elementary::bubble_sort;
    /// Stable, O(n^2), linear on sorted input.
    insertion_sort => elementary::insertion_sort;
    /// Not stable, O(n^2) on every input.
    selection_sort => elementary::selection_sort;
    /// Hoare partition around the middle element. Not stable.
    quick_sort => quicksort::quick_sort;
    /// Stable top-down mergesort with a buffer per merge.
    merge_sort => mergesort::merge_sort;
    heap_sort => heapsort::heap_sort;
    /// Dijkstra's smoothsort, O(n log n) and close to linear on presorted input.
    smooth_sort => smoothsort::smooth_sort;
    shell_sort => shellsort::shell_sort;
    /// `slice::sort_unstable` on a copy.
    std_unstable_sort => library::std_unstable_sort;
    /// `slice::sort` on a copy.
    std_stable_sort => library::std_stable_sort;
    /// glidesort on a copy.
    adaptive_merge_sort => library::adaptive_merge_sort;
    /// Quicksort with fork-join on the shared worker pool for large ranges.
    parallel_quick_sort => parallel::parallel_quick_sort;
}

pub fn parallel_quick_sort_with(arr: &mut [Element], config: ParallelConfig) {
    parallel::parallel_quick_sort_with(arr, config);
}

pub fn parallel_quick_sort_in(pool: &ThreadPool, arr: &mut [Element], config: ParallelConfig) {
    parallel::parallel_quick_sort_in(pool, arr, config);
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Algorithm {
    Bubble,
    Insertion,
    Selection,
    Quick,
    Merge,
    Heap,
    Smooth,
    Shell,
    StdUnstable,
    StdStable,
    AdaptiveMerge,
    ParallelQuick,
}

pub const ALL_ALGORITHMS: [Algorithm; 12] = [
    Algorithm::Bubble,
    Algorithm::Insertion,
    Algorithm::Selection,
    Algorithm::Quick,
    Algorithm::Merge,
    Algorithm::Heap,
    Algorithm::Smooth,
    Algorithm::Shell,
    Algorithm::StdUnstable,
    Algorithm::StdStable,
    Algorithm::AdaptiveMerge,
    Algorithm::ParallelQuick,
];

impl Algorithm {
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Insertion => "insertion",
            Algorithm::Selection => "selection",
            Algorithm::Quick => "quick",
            Algorithm::Merge => "merge",
            Algorithm::Heap => "heap",
            Algorithm::Smooth => "smooth",
            Algorithm::Shell => "shell",
            Algorithm::StdUnstable => "std_unstable",
            Algorithm::StdStable => "std_stable",
            Algorithm::AdaptiveMerge => "adaptive_merge",
            Algorithm::ParallelQuick => "parallel_quick",
        }
    }

    /// Whether equal elements keep their relative order.
    pub fn is_stable(self) -> bool {
        matches!(
            self,
            Algorithm::Bubble
                | Algorithm::Insertion
                | Algorithm::Merge
                | Algorithm::StdStable
                | Algorithm::AdaptiveMerge
        )
    }

    pub fn is_quadratic(self) -> bool {
        matches!(
            self,
            Algorithm::Bubble | Algorithm::Insertion | Algorithm::Selection
        )
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        ALL_ALGORITHMS
            .iter()
            .copied()
            .find(|algo| algo.name() == name)
            .ok_or_else(|| SortError::UnknownAlgorithm(s.to_string()))
    }
}

pub fn sort(algo: Algorithm, arr: &mut [Element]) {
    debug!("{algo}: sorting {} elements", arr.len());
    match algo {
        Algorithm::Bubble => bubble_sort(arr),
        Algorithm::Insertion => insertion_sort(arr),
        Algorithm::Selection => selection_sort(arr),
        Algorithm::Quick => quick_sort(arr),
        Algorithm::Merge => merge_sort(arr),
        Algorithm::Heap => heap_sort(arr),
        Algorithm::Smooth => smooth_sort(arr),
        Algorithm::Shell => shell_sort(arr),
        Algorithm::StdUnstable => std_unstable_sort(arr),
        Algorithm::StdStable => std_stable_sort(arr),
        Algorithm::AdaptiveMerge => adaptive_merge_sort(arr),
        Algorithm::ParallelQuick => parallel_quick_sort(arr),
    }
}

/// Sorts the first `len` elements of `arr` and leaves the rest untouched.
pub fn sort_prefix(algo: Algorithm, arr: &mut [Element], len: usize) -> Result<(), SortError> {
    if len > arr.len() {
        return Err(SortError::InvalidInput {
            len,
            capacity: arr.len(),
        });
    }
    sort(algo, &mut arr[..len]);
    Ok(())
}
