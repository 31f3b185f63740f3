use super::SEQ_THRESHOLD;
use num_cpus;
use std::cmp::Ordering;

// parallel quicksort (in place)
pub fn parallel_quicksort<T: Ord + Send>(array: &mut [T]) {
    parallel_quicksort_tune(array, num_cpus::get(), SEQ_THRESHOLD);
}

// parallel quicksort (in place)
pub fn parallel_quicksort_tune<T: Ord + Send>(array: &mut [T], threads: usize, seq_threshold: usize) {
    parallel_quicksort_by_tune(array, &|a: &T, b: &T| a.cmp(b), threads, seq_threshold);
}

// parallel quicksort with a caller-supplied total order (in place)
pub fn parallel_quicksort_by<T: Send, C: Fn(&T, &T) -> Ordering + Sync>(array: &mut [T], compare_fn: &C) {
    parallel_quicksort_by_tune(array, compare_fn, num_cpus::get(), SEQ_THRESHOLD);
}

// parallel quicksort with a caller-supplied total order (in place)
pub fn parallel_quicksort_by_tune<T: Send, C: Fn(&T, &T) -> Ordering + Sync>(
    array: &mut [T],
    compare_fn: &C,
    threads: usize,
    seq_threshold: usize,
) {
    if threads == 0 {
        panic!("threads cannot be zero!");
    }
    if seq_threshold == 0 {
        panic!("seq_threshold cannot be zero!");
    }

    quicksort_par(array, compare_fn, threads, seq_threshold);
}

// parallel quicksort over the half-open range [begin, end) of the slice (in place)
// an invalid range panics before anything is moved
pub fn parallel_quicksort_range<T: Ord + Send>(array: &mut [T], begin: usize, end: usize) {
    if begin > end {
        panic!("invalid range! (begin: {}, end: {})", begin, end);
    }
    if end > array.len() {
        panic!("range out of bounds! (end: {}, len: {})", end, array.len());
    }

    parallel_quicksort(&mut array[begin..end]);
}

fn quicksort_par<T: Send, C: Fn(&T, &T) -> Ordering + Sync>(
    array: &mut [T],
    compare_fn: &C,
    threads: usize,
    seq_threshold: usize,
) {
    if array.len() < 2 {
        return;
    }

    if threads == 1 || array.len() <= seq_threshold {
        // sequential
        quicksort_seq(array, compare_fn);
    } else {
        // parallel
        let pivot: usize = partition(array, compare_fn);

        let left_threads: usize = threads / 2;
        let right_threads: usize = threads - left_threads;

        // the pivot slot is excluded from both halves, so the children never overlap
        let (left, right) = array.split_at_mut(pivot);
        let right = &mut right[1..];

        crossbeam::scope(|scope| {
            scope.spawn(|_| {
                quicksort_par(left, compare_fn, left_threads, seq_threshold);
            });
            quicksort_par(right, compare_fn, right_threads, seq_threshold);
        })
        .unwrap();
    }
}

fn quicksort_seq<T, C: Fn(&T, &T) -> Ordering>(mut array: &mut [T], compare_fn: &C) {
    // recurse into the smaller partition, loop on the larger, keeps the stack O(log n)
    while array.len() > 1 {
        let pivot: usize = partition(array, compare_fn);

        let (left, right) = array.split_at_mut(pivot);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quicksort_seq(left, compare_fn);
            array = right;
        } else {
            quicksort_seq(right, compare_fn);
            array = left;
        }
    }
}

// single linear pass: everything strictly less than the pivot value is packed to the
// front, then the pivot is swapped to the boundary and its index returned
fn partition<T, C: Fn(&T, &T) -> Ordering>(array: &mut [T], compare_fn: &C) -> usize {
    let last: usize = array.len() - 1;

    if array.len() >= 3 {
        median_to_last(array, compare_fn);
    }

    let mut boundary: usize = 0;
    for i in 0..last {
        if compare_fn(&array[i], &array[last]) == Ordering::Less {
            array.swap(boundary, i);
            boundary += 1;
        }
    }
    array.swap(boundary, last);

    return boundary;
}

// move the median of first/middle/last into the last slot, so the partition pivot is
// never the extremum of an already-sorted range
fn median_to_last<T, C: Fn(&T, &T) -> Ordering>(array: &mut [T], compare_fn: &C) {
    let mid: usize = array.len() / 2;
    let last: usize = array.len() - 1;

    if compare_fn(&array[mid], &array[0]) == Ordering::Less {
        array.swap(mid, 0);
    }
    if compare_fn(&array[last], &array[0]) == Ordering::Less {
        array.swap(last, 0);
    }
    if compare_fn(&array[last], &array[mid]) == Ordering::Less {
        array.swap(last, mid);
    }
    array.swap(mid, last);
}

// run some tests
#[cfg(test)]
mod tests {
    use crate::sort::*;
    use std::time::Instant;

    const N: usize = 10000000;

    // simple lcg so test inputs stay reproducible
    fn random_array(len: usize, seed: u64, bound: u64) -> Vec<u64> {
        let mut state: u64 = seed;
        let mut array: Vec<u64> = Vec::new();
        for _ in 0..len {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            array.push((state >> 33) % bound + 1);
        }
        return array;
    }

    #[test]
    fn test_parallel_quicksort_small() {
        let mut array = vec![5, 3, 8, 1, 9, 2];
        parallel_quicksort(&mut array);
        assert_eq!(array, vec![1, 2, 3, 5, 8, 9]);
    }

    #[test]
    fn test_parallel_quicksort_empty() {
        let mut array: Vec<u32> = Vec::new();
        parallel_quicksort(&mut array);
        assert_eq!(array, Vec::<u32>::new());
    }

    #[test]
    fn test_parallel_quicksort_single() {
        let mut array = vec![7];
        parallel_quicksort(&mut array);
        assert_eq!(array, vec![7]);
    }

    #[test]
    fn test_parallel_quicksort_all_equal() {
        let mut array = vec![2, 2, 2];
        parallel_quicksort_tune(&mut array, 8, 1);
        assert_eq!(array, vec![2, 2, 2]);
    }

    #[test]
    fn test_parallel_quicksort_duplicates() {
        let mut array = vec![4, 1, 4, 2, 4, 2, 1, 4];
        parallel_quicksort_tune(&mut array, 8, 1);
        assert_eq!(array, vec![1, 1, 2, 2, 4, 4, 4, 4]);
    }

    #[test]
    fn test_parallel_quicksort_by_descending() {
        let mut array = vec![5, 3, 8, 1, 9, 2];
        parallel_quicksort_by(&mut array, &|a: &i32, b: &i32| b.cmp(a));
        assert_eq!(array, vec![9, 8, 5, 3, 2, 1]);
    }

    // 50000 random values in [1, 25000] must match the standard library sort exactly
    #[test]
    fn test_parallel_quicksort_matches_std() {
        let mut par: Vec<u64> = random_array(50000, 42, 25000);
        let mut seq: Vec<u64> = par.clone();

        parallel_quicksort(&mut par);
        seq.sort_unstable();

        assert_eq!(seq, par);
    }

    // sorting a sorted array must leave it unchanged
    #[test]
    fn test_parallel_quicksort_idempotent() {
        let mut once: Vec<u64> = random_array(50000, 9, 25000);
        parallel_quicksort(&mut once);
        let mut twice: Vec<u64> = once.clone();
        parallel_quicksort(&mut twice);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_parallel_quicksort_presorted() {
        let mut array: Vec<u64> = (0..100000).collect();
        let expected: Vec<u64> = array.clone();
        parallel_quicksort(&mut array);
        assert_eq!(expected, array);

        array.reverse();
        parallel_quicksort(&mut array);
        assert_eq!(expected, array);
    }

    // the result must not depend on the worker budget
    #[test]
    fn test_parallel_quicksort_thread_counts() {
        let input: Vec<u64> = random_array(50000, 7, 25000);
        let mut expected: Vec<u64> = input.clone();
        expected.sort_unstable();

        for threads in [1, 2, 4, 8].iter() {
            let mut array: Vec<u64> = input.clone();
            parallel_quicksort_tune(&mut array, *threads, 1);
            assert_eq!(expected, array);
        }
    }

    #[test]
    fn test_parallel_quicksort_range() {
        let mut array = vec![9, 8, 5, 1, 4, 2, 7, 0];
        parallel_quicksort_range(&mut array, 2, 6);
        assert_eq!(array, vec![9, 8, 1, 2, 4, 5, 7, 0]);
    }

    #[test]
    fn test_parallel_quicksort_range_empty() {
        let mut array = vec![3, 1, 2];
        parallel_quicksort_range(&mut array, 1, 1);
        assert_eq!(array, vec![3, 1, 2]);
    }

    // tests to ensure quicksort panics if given a bad range or bad tuning args
    #[test]
    #[should_panic]
    fn test_parallel_quicksort_range_inverted() {
        let mut array = vec![3, 1, 2];
        parallel_quicksort_range(&mut array, 2, 1);
    }

    #[test]
    #[should_panic]
    fn test_parallel_quicksort_range_out_of_bounds() {
        let mut array = vec![3, 1, 2];
        parallel_quicksort_range(&mut array, 0, 4);
    }

    #[test]
    #[should_panic]
    fn test_parallel_quicksort_bad_args_1() {
        let mut array = [0; 0];
        parallel_quicksort_tune(&mut array, 0, 1);
    }

    #[test]
    #[should_panic]
    fn test_parallel_quicksort_bad_args_2() {
        let mut array = [0; 0];
        parallel_quicksort_tune(&mut array, 1, 0);
    }

    // test parallel quicksort against the standard library sort with a large set of random data
    #[test]
    fn test_parallel_quicksort_large() {
        let mut par: Vec<u64> = random_array(N, 1, 1 << 31);
        let mut seq: Vec<u64> = par.clone();

        // time parallel algorithm
        let start_par = Instant::now();
        parallel_quicksort(&mut par);
        let dur_par = start_par.elapsed();

        // time sequential algorithm
        let start_seq = Instant::now();
        seq.sort_unstable();
        let dur_seq = start_seq.elapsed();

        // check integrity of results
        assert_eq!(seq, par);

        // print results
        println!(">>> SORT [large]: parallel = {:?}, sequential = {:?}, len = {}", dur_par, dur_seq, N);
    }
}
