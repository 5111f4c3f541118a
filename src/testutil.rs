use std::cmp::Ordering;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Value with its original position. Only `value` takes part in comparisons.
#[derive(Clone, Copy, Debug)]
pub struct Tagged {
    pub value: i32,
    pub tag: usize,
}

impl PartialEq for Tagged {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Tagged {}

impl Ord for Tagged {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

pub fn tagged(values: &[i32]) -> Vec<Tagged> {
    values
        .iter()
        .enumerate()
        .map(|(tag, &value)| Tagged { value, tag })
        .collect()
}

pub fn cases() -> Vec<Vec<i32>> {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let mut cases = vec![
        vec![],
        vec![42],
        vec![2, 1],
        vec![1, 2],
        vec![5, 3, 8, 3, 1],
        (0..100).collect(),
        (0..100).rev().collect(),
        vec![7; 64],
        vec![i32::MIN, 0, i32::MAX, -1, 1, i32::MAX, i32::MIN],
        vec![5, 5, 3, 3, 1, 1, 4, 4, 2, 2, 0, 0],
    ];
    for &size in &[3_usize, 17, 64, 255, 1000] {
        cases.push((0..size).map(|_| rng.gen::<i32>()).collect());
        cases.push((0..size).map(|_| rng.gen_range(0..8)).collect());
    }
    cases
}

pub fn assert_sorts(sort: fn(&mut [i32])) {
    for case in cases() {
        let mut expected = case.clone();
        expected.sort_unstable();

        let mut actual = case.clone();
        sort(&mut actual);
        assert_eq!(actual, expected, "input: {:?}", case);

        // sorting sorted input is a no-op
        sort(&mut actual);
        assert_eq!(actual, expected);
    }
}

pub fn assert_stable(sort: fn(&mut [Tagged])) {
    let mut rng = StdRng::seed_from_u64(0x57AB1E);
    for &size in &[0_usize, 1, 2, 5, 31, 200, 1000] {
        let values: Vec<i32> = (0..size).map(|_| rng.gen_range(0..10)).collect();
        let mut arr = tagged(&values);
        sort(&mut arr);
        for w in arr.windows(2) {
            assert!(w[0].value <= w[1].value, "not sorted: {:?}", w);
            if w[0].value == w[1].value {
                assert!(w[0].tag < w[1].tag, "equal values reordered: {:?}", w);
            }
        }
    }
}
