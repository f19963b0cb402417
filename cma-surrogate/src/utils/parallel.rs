#[cfg(test)]
#[path = "../../tests/unit/utils/parallel_test.rs"]
mod parallel_test;

pub use self::actual::parallel_collect;

/// Maps collection and collects results either in parallel or sequentially depending on the flag.
pub fn maybe_parallel_collect<T, F, R>(source: &[T], is_parallel: bool, map_op: F) -> Vec<R>
where
    T: Send + Sync,
    F: Fn(&T) -> R + Sync + Send,
    R: Send,
{
    if is_parallel { parallel_collect(source, map_op) } else { source.iter().map(map_op).collect() }
}

#[cfg(not(target_arch = "wasm32"))]
mod actual {
    use rayon::prelude::*;

    /// Maps collection and collects results into vector in parallel.
    pub fn parallel_collect<T, F, R>(source: &[T], map_op: F) -> Vec<R>
    where
        T: Send + Sync,
        F: Fn(&T) -> R + Sync + Send,
        R: Send,
    {
        source.par_iter().map(map_op).collect()
    }
}

#[cfg(target_arch = "wasm32")]
mod actual {
    /// Map collections and collects results into vector synchronously.
    pub fn parallel_collect<T, F, R>(source: &[T], map_op: F) -> Vec<R>
    where
        T: Send + Sync,
        F: Fn(&T) -> R + Sync + Send,
        R: Send,
    {
        source.iter().map(map_op).collect()
    }
}
