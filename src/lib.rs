// implementation of common parallel array-processing algorithms in rust
// - parallel quicksort (in place, fork/join)
// - parallel reductions (sum, min/max with index)
// - parallel fill/collect (build a vector by index)
// - parallel numerical integration

mod fill;
mod integrate;
mod reduce;
mod sort;

// default range length below which recursion stays sequential
const SEQ_THRESHOLD: usize = 1024;

pub use crate::fill::{parallel_collect, parallel_collect_tune, parallel_fill, parallel_fill_tune};
pub use crate::integrate::{integrate, parallel_integrate, parallel_integrate_tune};
pub use crate::reduce::{
    parallel_max_index, parallel_max_index_tune, parallel_min_index, parallel_min_index_tune,
    parallel_sum, parallel_sum_tune,
};
pub use crate::sort::{
    parallel_quicksort, parallel_quicksort_by, parallel_quicksort_by_tune,
    parallel_quicksort_range, parallel_quicksort_tune,
};
