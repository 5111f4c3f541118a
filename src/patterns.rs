use std::ops::Range;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Exp1};

use crate::Element;

/// Input shapes used by the tests, the benches and the comparison driver.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Pattern {
    Random,
    Ascending,
    Descending,
    AllEqual,
    FewUnique,
    Saw,
    Exponential,
}

pub const ALL_PATTERNS: [Pattern; 7] = [
    Pattern::Random,
    Pattern::Ascending,
    Pattern::Descending,
    Pattern::AllEqual,
    Pattern::FewUnique,
    Pattern::Saw,
    Pattern::Exponential,
];

impl Pattern {
    pub fn name(self) -> &'static str {
        match self {
            Pattern::Random => "random",
            Pattern::Ascending => "ascending",
            Pattern::Descending => "descending",
            Pattern::AllEqual => "all_equal",
            Pattern::FewUnique => "few_unique",
            Pattern::Saw => "saw",
            Pattern::Exponential => "exponential",
        }
    }

    pub fn generate(self, size: usize, seed: u64) -> Vec<Element> {
        let mut rng = StdRng::seed_from_u64(seed);
        match self {
            Pattern::Random => random(&mut rng, size),
            Pattern::Ascending => ascending(size),
            Pattern::Descending => descending(size),
            Pattern::AllEqual => all_equal(size),
            Pattern::FewUnique => few_unique(&mut rng, size, 8),
            Pattern::Saw => saw(&mut rng, size, 16),
            Pattern::Exponential => exponential(&mut rng, size),
        }
    }
}

pub fn random(rng: &mut StdRng, size: usize) -> Vec<Element> {
    (0..size).map(|_| rng.gen::<Element>()).collect()
}

pub fn random_uniform(rng: &mut StdRng, size: usize, range: Range<Element>) -> Vec<Element> {
    (0..size).map(|_| rng.gen_range(range.clone())).collect()
}

/// A shuffled permutation of `0..size`.
pub fn shuffled(rng: &mut StdRng, size: usize) -> Vec<Element> {
    let mut arr = ascending(size);
    arr.shuffle(rng);
    arr
}

pub fn ascending(size: usize) -> Vec<Element> {
    (0..size as Element).collect()
}

pub fn descending(size: usize) -> Vec<Element> {
    (0..size as Element).rev().collect()
}

pub fn all_equal(size: usize) -> Vec<Element> {
    vec![66; size]
}

pub fn few_unique(rng: &mut StdRng, size: usize, unique: usize) -> Vec<Element> {
    random_uniform(rng, size, 0..unique.max(1) as Element)
}

/// Random values cut into `chunks` runs, each run sorted ascending.
pub fn saw(rng: &mut StdRng, size: usize, chunks: usize) -> Vec<Element> {
    let mut arr = random(rng, size);
    let chunk_size = (size / chunks.max(1)).max(1);
    for chunk in arr.chunks_mut(chunk_size) {
        chunk.sort_unstable();
    }
    arr
}

/// Exponentially distributed magnitudes, so small values repeat a lot.
pub fn exponential(rng: &mut StdRng, size: usize) -> Vec<Element> {
    (0..size)
        .map(|_| {
            let x: f64 = Exp1.sample(rng);
            (x * 1000.0) as Element
        })
        .collect()
}

pub fn is_sorted(arr: &[Element]) -> bool {
    arr.windows(2).all(|w| w[0] <= w[1])
}
