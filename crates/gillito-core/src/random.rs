//! Injectable random selection.
//!
//! Query handlers never touch an RNG directly; they ask a `RandomSource` for
//! an index. Production uses the thread-local generator, tests substitute a
//! fixed or scripted source.

use std::sync::atomic::{AtomicUsize, Ordering};

use rand::Rng;

/// "Pick one of N" capability.
///
/// Implementations must be callable from many tasks at once.
pub trait RandomSource: Send + Sync {
    /// Return an index in `0..len`. Callers never pass `len == 0`.
    fn pick_index(&self, len: usize) -> usize;
}

/// Uniform selection backed by `rand::thread_rng()`.
///
/// Each call draws from the calling thread's generator, so there is no
/// shared state between concurrent requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Always returns the same index (clamped to the collection).
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom(pub usize);

impl RandomSource for FixedRandom {
    fn pick_index(&self, len: usize) -> usize {
        self.0.min(len.saturating_sub(1))
    }
}

/// Replays a script of indices, cycling when exhausted. Each index is
/// reduced modulo the collection length.
#[derive(Debug)]
pub struct ScriptedRandom {
    script: Vec<usize>,
    cursor: AtomicUsize,
}

impl ScriptedRandom {
    pub fn new(script: Vec<usize>) -> Self {
        Self {
            script,
            cursor: AtomicUsize::new(0),
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn pick_index(&self, len: usize) -> usize {
        if self.script.is_empty() || len == 0 {
            return 0;
        }
        let step = self.cursor.fetch_add(1, Ordering::Relaxed);
        self.script[step % self.script.len()] % len
    }
}

/// Pick one element of `items`. `None` only for an empty slice.
pub fn pick<'a, T>(source: &dyn RandomSource, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(source.pick_index(items.len()))
}
