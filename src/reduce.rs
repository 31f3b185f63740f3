use super::SEQ_THRESHOLD;
use num_cpus;
use num_traits::identities::Zero;
use std::ops::AddAssign;

// parallel sum reduction over a slice
pub fn parallel_sum<T>(array: &[T]) -> T
where
    for<'t> T: AddAssign<&'t T>,
    T: Send + Sync + Zero,
{
    return parallel_sum_tune(array, num_cpus::get(), SEQ_THRESHOLD);
}

// parallel sum reduction over a slice
pub fn parallel_sum_tune<T>(array: &[T], threads: usize, seq_threshold: usize) -> T
where
    for<'t> T: AddAssign<&'t T>,
    T: Send + Sync + Zero,
{
    if threads == 0 {
        panic!("threads cannot be zero!");
    }
    if seq_threshold == 0 {
        panic!("seq_threshold cannot be zero!");
    }

    return sum_halves(array, threads, seq_threshold);
}

fn sum_halves<T>(array: &[T], threads: usize, seq_threshold: usize) -> T
where
    for<'t> T: AddAssign<&'t T>,
    T: Send + Sync + Zero,
{
    if threads == 1 || array.len() <= seq_threshold {
        // sequential
        let mut sum: T = T::zero();
        for t in array {
            sum += t;
        }
        return sum;
    } else {
        // parallel
        let left_threads: usize = threads / 2;
        let right_threads: usize = threads - left_threads;

        let (left_array, right_array) = array.split_at(array.len() / 2);

        let mut left_sum: T = T::zero();
        let mut right_sum: T = T::zero();
        crossbeam::scope(|scope| {
            scope.spawn(|_| {
                left_sum = sum_halves(left_array, left_threads, seq_threshold);
            });
            right_sum = sum_halves(right_array, right_threads, seq_threshold);
        })
        .unwrap();

        left_sum += &right_sum;
        return left_sum;
    }
}

// index of the minimal element, or None on an empty slice (lowest index on ties)
pub fn parallel_min_index<T: Ord + Send + Sync>(array: &[T]) -> Option<usize> {
    return parallel_min_index_tune(array, num_cpus::get(), SEQ_THRESHOLD);
}

// index of the minimal element, or None on an empty slice (lowest index on ties)
pub fn parallel_min_index_tune<T: Ord + Send + Sync>(array: &[T], threads: usize, seq_threshold: usize) -> Option<usize> {
    if threads == 0 {
        panic!("threads cannot be zero!");
    }
    if seq_threshold == 0 {
        panic!("seq_threshold cannot be zero!");
    }

    return extremum_index(array, &|a: &T, b: &T| a < b, threads, seq_threshold);
}

// index of the maximal element, or None on an empty slice (lowest index on ties)
pub fn parallel_max_index<T: Ord + Send + Sync>(array: &[T]) -> Option<usize> {
    return parallel_max_index_tune(array, num_cpus::get(), SEQ_THRESHOLD);
}

// index of the maximal element, or None on an empty slice (lowest index on ties)
pub fn parallel_max_index_tune<T: Ord + Send + Sync>(array: &[T], threads: usize, seq_threshold: usize) -> Option<usize> {
    if threads == 0 {
        panic!("threads cannot be zero!");
    }
    if seq_threshold == 0 {
        panic!("seq_threshold cannot be zero!");
    }

    return extremum_index(array, &|a: &T, b: &T| a > b, threads, seq_threshold);
}

// better_fn(challenger, incumbent) must hold strictly for the challenger to win, so
// the lowest index survives ties no matter how the work is split
fn extremum_index<T, F>(array: &[T], better_fn: &F, threads: usize, seq_threshold: usize) -> Option<usize>
where
    T: Send + Sync,
    F: Fn(&T, &T) -> bool + Sync,
{
    if threads == 1 || array.len() <= seq_threshold {
        // sequential
        let mut best: Option<usize> = None;
        for i in 0..array.len() {
            best = match best {
                Some(b) if !better_fn(&array[i], &array[b]) => Some(b),
                _ => Some(i),
            };
        }
        return best;
    } else {
        // parallel
        let left_threads: usize = threads / 2;
        let right_threads: usize = threads - left_threads;

        let (left_array, right_array) = array.split_at(array.len() / 2);

        let mut left_best: Option<usize> = None;
        let mut right_best: Option<usize> = None;
        crossbeam::scope(|scope| {
            scope.spawn(|_| {
                left_best = extremum_index(left_array, better_fn, left_threads, seq_threshold);
            });
            right_best = extremum_index(right_array, better_fn, right_threads, seq_threshold);
        })
        .unwrap();

        let right_best: Option<usize> = right_best.map(|i| i + left_array.len());

        return match (left_best, right_best) {
            (Some(l), Some(r)) => {
                if better_fn(&array[r], &array[l]) {
                    Some(r)
                } else {
                    Some(l)
                }
            }
            (Some(l), None) => Some(l),
            (None, r) => r,
        };
    }
}
