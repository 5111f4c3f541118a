/// Top-down mergesort. Every merge allocates its own buffer sized to the merged span.
pub fn merge_sort<T: Ord + Copy>(arr: &mut [T]) {
    if arr.len() <= 1 {
        return;
    }
    let mid = arr.len() / 2;
    merge_sort(&mut arr[..mid]);
    merge_sort(&mut arr[mid..]);
    merge(arr, mid);
}

// merges the sorted runs arr[..mid] and arr[mid..], ties go to the left run
fn merge<T: Ord + Copy>(arr: &mut [T], mid: usize) {
    let mut buffer: Vec<T> = Vec::with_capacity(arr.len());
    let (left, right) = arr.split_at(mid);
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            buffer.push(left[i]);
            i += 1;
        } else {
            buffer.push(right[j]);
            j += 1;
        }
    }
    buffer.extend_from_slice(&left[i..]);
    buffer.extend_from_slice(&right[j..]);

    arr.copy_from_slice(&buffer);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{assert_sorts, assert_stable};

    #[test]
    fn sorts() {
        assert_sorts(merge_sort);
    }

    #[test]
    fn stable() {
        assert_stable(merge_sort);
    }

    #[test]
    fn merge_interleaves_runs() {
        let mut arr = [1, 4, 9, 2, 3, 10, 11];
        merge(&mut arr, 3);
        assert_eq!(arr, [1, 2, 3, 4, 9, 10, 11]);
    }
}
