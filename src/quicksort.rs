/// Hoare partition around the value at the middle index.
///
/// Returns `(left_len, right_start)`: afterwards every element of
/// `arr[..left_len]` is <= pivot, every element of `arr[right_start..]` is
/// >= pivot and anything in between equals the pivot. `left_len <= right_start`
/// and both sides are strictly shorter than `arr`.
pub(crate) fn partition<T: Ord + Copy>(arr: &mut [T]) -> (usize, usize) {
    debug_assert!(arr.len() > 1);
    let pivot = arr[arr.len() / 2];

    // j runs one below i when it crosses index 0
    let mut i: isize = 0;
    let mut j: isize = arr.len() as isize - 1;
    loop {
        while arr[i as usize] < pivot {
            i += 1;
        }
        while arr[j as usize] > pivot {
            j -= 1;
        }
        if i <= j {
            arr.swap(i as usize, j as usize);
            i += 1;
            j -= 1;
        }
        if i > j {
            break;
        }
    }
    ((j + 1) as usize, i as usize)
}

pub fn quick_sort<T: Ord + Copy>(arr: &mut [T]) {
    if arr.len() <= 1 {
        return;
    }
    let (left_len, right_start) = partition(arr);
    quick_sort(&mut arr[..left_len]);
    quick_sort(&mut arr[right_start..]);
}
