use crate::config::SHELL_GAPS;

pub fn shell_sort<T: Ord + Copy>(arr: &mut [T]) {
    for &gap in SHELL_GAPS.iter() {
        gapped_insertion_sort(arr, gap);
    }
}

// insertion sort over the gap interleaved subsequences at once
fn gapped_insertion_sort<T: Ord + Copy>(arr: &mut [T], gap: usize) {
    for i in gap..arr.len() {
        let value = arr[i];
        let mut j = i;
        while j >= gap && arr[j - gap] > value {
            arr[j] = arr[j - gap];
            j -= gap;
        }
        arr[j] = value;
    }
}
