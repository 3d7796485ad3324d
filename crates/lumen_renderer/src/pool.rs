//! Fixed-size worker pool providing a blocking parallel-for.
//!
//! Backed by a dedicated rayon thread pool so the worker count is
//! independent of rayon's global pool.

use crate::error::RenderResult;
use rayon::prelude::*;
use std::num::NonZeroUsize;

/// Number of hardware threads available to this process (at least 1).
pub fn available_workers() -> usize {
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

/// A bounded pool of worker threads.
pub struct WorkerPool {
    pool: rayon::ThreadPool,
}

impl WorkerPool {
    /// Create a pool with `num_threads` workers, or one per hardware thread
    /// when `None`.
    pub fn new(num_threads: Option<usize>) -> RenderResult<Self> {
        let num_threads = num_threads.unwrap_or_else(available_workers).max(1);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(|i| format!("lumen-worker-{}", i))
            .build()?;

        log::info!("Worker pool started with {} threads", num_threads);
        Ok(Self { pool })
    }

    pub fn num_threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Run `body(index)` for every index in `0..count`.
    ///
    /// Workers pick indices in no particular order. Returns once every
    /// index has been processed.
    pub fn for_each<F>(&self, count: usize, body: F)
    where
        F: Fn(usize) + Send + Sync,
    {
        self.pool
            .install(|| (0..count).into_par_iter().for_each(|index| body(index)));
    }

    /// Run `body(index)` for every index in `0..count` and collect the
    /// results in index order.
    pub fn map<T, F>(&self, count: usize, body: F) -> Vec<T>
    where
        T: Send,
        F: Fn(usize) -> T + Send + Sync,
    {
        self.pool
            .install(|| (0..count).into_par_iter().map(|index| body(index)).collect())
    }
}
