// quadratic sorts, all in place

/// n-1 passes, each bubbling the largest element of the unsorted prefix to its end.
/// There is no early exit on a pass without swaps.
pub fn bubble_sort<T: Ord>(arr: &mut [T]) {
    for j in (1..arr.len()).rev() {
        for i in 0..j {
            if arr[i] > arr[i + 1] {
                arr.swap(i, i + 1);
            }
        }
    }
}

pub fn insertion_sort<T: Ord + Copy>(arr: &mut [T]) {
    for j in 1..arr.len() {
        let key = arr[j];
        let mut i = j;
        while i > 0 && arr[i - 1] > key {
            arr[i] = arr[i - 1];
            i -= 1;
        }
        arr[i] = key;
    }
}

/// Position i receives the minimum of the suffix by compare-and-swap against
/// whatever currently sits at i. Equal elements can be reordered.
pub fn selection_sort<T: Ord>(arr: &mut [T]) {
    for i in 0..arr.len() {
        for k in i + 1..arr.len() {
            if arr[i] > arr[k] {
                arr.swap(i, k);
            }
        }
    }
}
