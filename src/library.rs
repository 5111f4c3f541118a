// baseline sorts from std and glidesort, each run on an owned copy that is written back

pub fn std_unstable_sort<T: Ord + Copy>(arr: &mut [T]) {
    let mut data = arr.to_vec();
    data.sort_unstable();
    arr.copy_from_slice(&data);
}

pub fn std_stable_sort<T: Ord + Copy>(arr: &mut [T]) {
    let mut data = arr.to_vec();
    data.sort();
    arr.copy_from_slice(&data);
}

/// Adaptive stable merge sort (glidesort), linear on presorted runs.
pub fn adaptive_merge_sort<T: Ord + Copy>(arr: &mut [T]) {
    let mut data = arr.to_vec();
    glidesort::sort(&mut data);
    arr.copy_from_slice(&data);
}
