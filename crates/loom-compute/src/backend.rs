//! Compute backend trait and implementations.

use rayon::prelude::*;

/// Trait for per-element kernel dispatch.
///
/// `dispatch` invokes `kernel(i, &mut out[i])` exactly once for every
/// index, in no particular order. It returns only after every invocation
/// has completed, which makes the call itself the barrier between two
/// dispatches: all writes of one dispatch are visible to the next.
///
/// Kernels must not assume any ordering between indices and must not
/// communicate with each other while running.
pub trait ComputeBackend: Send + Sync {
    /// Returns the backend name (e.g. "serial", "rayon").
    fn name(&self) -> &str;

    /// Returns true if kernels may run on more than one thread.
    fn is_parallel(&self) -> bool;

    /// Runs `kernel` once per element of `out`.
    fn dispatch<T, F>(&self, out: &mut [T], kernel: F)
    where
        T: Send,
        F: Fn(usize, &mut T) + Sync + Send;

    /// Counts the elements of `items` satisfying `predicate`.
    fn count<T, F>(&self, items: &[T], predicate: F) -> usize
    where
        T: Sync,
        F: Fn(&T) -> bool + Sync + Send;
}

/// Sequential reference backend.
///
/// Always available, used for:
/// - Correctness validation (parallel results must match)
/// - Small grids where thread fan-out isn't worthwhile
#[derive(Debug, Clone, Copy, Default)]
pub struct SerialBackend;

impl ComputeBackend for SerialBackend {
    fn name(&self) -> &str {
        "serial"
    }

    fn is_parallel(&self) -> bool {
        false
    }

    fn dispatch<T, F>(&self, out: &mut [T], kernel: F)
    where
        T: Send,
        F: Fn(usize, &mut T) + Sync + Send,
    {
        for (i, slot) in out.iter_mut().enumerate() {
            kernel(i, slot);
        }
    }

    fn count<T, F>(&self, items: &[T], predicate: F) -> usize
    where
        T: Sync,
        F: Fn(&T) -> bool + Sync + Send,
    {
        items.iter().filter(|item| predicate(item)).count()
    }
}

/// Data-parallel backend on the global `rayon` thread pool.
#[derive(Debug, Clone, Copy)]
pub struct ParallelBackend {
    /// Minimum elements handed to one rayon task.
    pub min_chunk: usize,
}

impl ParallelBackend {
    pub fn new() -> Self {
        Self { min_chunk: 256 }
    }

    pub fn with_min_chunk(min_chunk: usize) -> Self {
        Self {
            min_chunk: min_chunk.max(1),
        }
    }
}

impl Default for ParallelBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ComputeBackend for ParallelBackend {
    fn name(&self) -> &str {
        "rayon"
    }

    fn is_parallel(&self) -> bool {
        true
    }

    fn dispatch<T, F>(&self, out: &mut [T], kernel: F)
    where
        T: Send,
        F: Fn(usize, &mut T) + Sync + Send,
    {
        out.par_iter_mut()
            .with_min_len(self.min_chunk)
            .enumerate()
            .for_each(|(i, slot)| kernel(i, slot));
    }

    fn count<T, F>(&self, items: &[T], predicate: F) -> usize
    where
        T: Sync,
        F: Fn(&T) -> bool + Sync + Send,
    {
        items
            .par_iter()
            .with_min_len(self.min_chunk)
            .filter(|item| predicate(item))
            .count()
    }
}
