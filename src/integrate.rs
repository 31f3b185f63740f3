use super::SEQ_THRESHOLD;
use num_cpus;

// sequential left-rectangle riemann sum of f over [a, b) with n samples
pub fn integrate<F: Fn(f64) -> f64>(f: &F, a: f64, b: f64, n: usize) -> f64 {
    if n == 0 {
        panic!("n cannot be zero!");
    }

    let h: f64 = (b - a) / (n as f64);
    let mut sum: f64 = 0.0;
    for i in 0..n {
        sum += f(a + (i as f64) * h);
    }

    return sum * h;
}

// parallel riemann sum, partial sums over disjoint sub-ranges combined at join points
pub fn parallel_integrate<F: Fn(f64) -> f64 + Sync>(f: &F, a: f64, b: f64, n: usize) -> f64 {
    return parallel_integrate_tune(f, a, b, n, num_cpus::get(), SEQ_THRESHOLD);
}

// parallel riemann sum, partial sums over disjoint sub-ranges combined at join points
pub fn parallel_integrate_tune<F: Fn(f64) -> f64 + Sync>(
    f: &F,
    a: f64,
    b: f64,
    n: usize,
    threads: usize,
    seq_threshold: usize,
) -> f64 {
    if n == 0 {
        panic!("n cannot be zero!");
    }
    if threads == 0 {
        panic!("threads cannot be zero!");
    }
    if seq_threshold == 0 {
        panic!("seq_threshold cannot be zero!");
    }

    let h: f64 = (b - a) / (n as f64);
    return sample_sum(f, a, h, 0, n, threads, seq_threshold) * h;
}

fn sample_sum<F: Fn(f64) -> f64 + Sync>(
    f: &F,
    a: f64,
    h: f64,
    base: usize,
    count: usize,
    threads: usize,
    seq_threshold: usize,
) -> f64 {
    if threads == 1 || count <= seq_threshold {
        // sequential
        let mut sum: f64 = 0.0;
        for i in 0..count {
            sum += f(a + ((base + i) as f64) * h);
        }
        return sum;
    } else {
        // parallel
        let left_threads: usize = threads / 2;
        let right_threads: usize = threads - left_threads;

        let left_count: usize = count / 2;
        let right_count: usize = count - left_count;

        let mut left_sum: f64 = 0.0;
        let mut right_sum: f64 = 0.0;
        crossbeam::scope(|scope| {
            scope.spawn(|_| {
                left_sum = sample_sum(f, a, h, base, left_count, left_threads, seq_threshold);
            });
            right_sum = sample_sum(f, a, h, base + left_count, right_count, right_threads, seq_threshold);
        })
        .unwrap();

        return left_sum + right_sum;
    }
}
