use super::SEQ_THRESHOLD;
use num_cpus;

// fill a slice in place by evaluating generate_fn at every index
pub fn parallel_fill<T, G>(dest: &mut [T], generate_fn: &G)
where
    T: Send,
    G: Fn(usize) -> T + Sync,
{
    parallel_fill_tune(dest, generate_fn, num_cpus::get(), SEQ_THRESHOLD);
}

// fill a slice in place by evaluating generate_fn at every index
pub fn parallel_fill_tune<T, G>(dest: &mut [T], generate_fn: &G, threads: usize, seq_threshold: usize)
where
    T: Send,
    G: Fn(usize) -> T + Sync,
{
    if threads == 0 {
        panic!("threads cannot be zero!");
    }
    if seq_threshold == 0 {
        panic!("seq_threshold cannot be zero!");
    }

    fill_slots(dest, generate_fn, 0, threads, seq_threshold);
}

// allocate a vector of the given length and fill it by index
pub fn parallel_collect<T, G>(len: usize, generate_fn: &G) -> Vec<T>
where
    T: Send + Default,
    G: Fn(usize) -> T + Sync,
{
    return parallel_collect_tune(len, generate_fn, num_cpus::get(), SEQ_THRESHOLD);
}

// allocate a vector of the given length and fill it by index
pub fn parallel_collect_tune<T, G>(len: usize, generate_fn: &G, threads: usize, seq_threshold: usize) -> Vec<T>
where
    T: Send + Default,
    G: Fn(usize) -> T + Sync,
{
    if threads == 0 {
        panic!("threads cannot be zero!");
    }
    if seq_threshold == 0 {
        panic!("seq_threshold cannot be zero!");
    }

    let mut dest: Vec<T> = Vec::new();
    dest.resize_with(len, T::default);

    fill_slots(&mut dest[..], generate_fn, 0, threads, seq_threshold);

    return dest;
}

// each recursive call owns a disjoint window of the destination; base tracks the
// window's offset so generate_fn always sees the global index
fn fill_slots<T, G>(dest: &mut [T], generate_fn: &G, base: usize, threads: usize, seq_threshold: usize)
where
    T: Send,
    G: Fn(usize) -> T + Sync,
{
    if threads == 1 || dest.len() <= seq_threshold {
        // sequential
        for i in 0..dest.len() {
            dest[i] = generate_fn(base + i);
        }
    } else {
        // parallel
        let left_threads: usize = threads / 2;
        let right_threads: usize = threads - left_threads;

        let (left_dest, right_dest) = dest.split_at_mut(dest.len() / 2);

        let left_base: usize = base;
        let right_base: usize = base + left_dest.len();

        crossbeam::scope(|scope| {
            scope.spawn(|_| {
                fill_slots(left_dest, generate_fn, left_base, left_threads, seq_threshold);
            });
            fill_slots(right_dest, generate_fn, right_base, right_threads, seq_threshold);
        })
        .unwrap();
    }
}
