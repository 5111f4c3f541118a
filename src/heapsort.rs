/// In-place heapsort over an implicit binary max-heap.
pub fn heap_sort<T: Ord>(arr: &mut [T]) {
    let len = arr.len();
    if len < 2 {
        return;
    }

    // build: sift down every parent, last one first
    for start in (0..len / 2).rev() {
        sift_down(arr, start, len);
    }

    // extract: move the max behind the shrinking heap
    for end in (1..len).rev() {
        arr.swap(0, end);
        sift_down(arr, 0, end);
    }
}

#[inline]
fn sift_down<T: Ord>(arr: &mut [T], mut root: usize, end: usize) {
    loop {
        let child = root * 2 + 1;
        if child >= end {
            break;
        }

        let mut swap_idx = child;
        if child + 1 < end && arr[child] < arr[child + 1] {
            swap_idx = child + 1;
        }

        if arr[root] >= arr[swap_idx] {
            break;
        }

        arr.swap(root, swap_idx);
        root = swap_idx;
    }
}
