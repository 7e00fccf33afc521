//! The two map strategies and the timed block around them

use crate::models::{Measurement, UserRecord};
use crate::types::MapStrategy;
use rayon::prelude::*;
use rayon::ThreadPool;
use std::time::Instant;

/// A way of mapping every element of an index sequence to a new value
pub trait MapTransform {
    /// Which strategy this transform implements
    fn strategy(&self) -> MapStrategy;

    /// Map `indices` through `f`, preserving order
    fn map<T, F>(&self, indices: Vec<u64>, f: F) -> Vec<T>
    where
        T: Send,
        F: Fn(u64) -> T + Sync + Send;
}

/// The standard library's `Iterator::map`
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeMap;

impl MapTransform for NativeMap {
    fn strategy(&self) -> MapStrategy {
        MapStrategy::Native
    }

    fn map<T, F>(&self, indices: Vec<u64>, f: F) -> Vec<T>
    where
        T: Send,
        F: Fn(u64) -> T + Sync + Send,
    {
        indices.into_iter().map(f).collect()
    }
}

/// `rayon`'s parallel-iterator map, run inside a dedicated pool
#[derive(Debug, Clone, Copy)]
pub struct LibraryMap<'a> {
    pool: &'a ThreadPool,
}

impl<'a> LibraryMap<'a> {
    pub fn new(pool: &'a ThreadPool) -> Self {
        Self { pool }
    }
}

impl MapTransform for LibraryMap<'_> {
    fn strategy(&self) -> MapStrategy {
        MapStrategy::Library
    }

    fn map<T, F>(&self, indices: Vec<u64>, f: F) -> Vec<T>
    where
        T: Send,
        F: Fn(u64) -> T + Sync + Send,
    {
        self.pool.install(|| indices.into_par_iter().map(f).collect())
    }
}

/// The sequence `[0, length)`
pub fn generate_indices(length: usize) -> Vec<u64> {
    (0..length as u64).collect()
}

/// Index to user record
pub fn to_record(index: u64) -> UserRecord {
    UserRecord::from_index(index)
}

/// Index to its double
pub fn to_doubled(index: u64) -> u64 {
    index * 2
}

/// Output of one timed block, kept so callers can inspect what was produced
#[derive(Debug)]
pub struct TimedOutput<T> {
    pub output: Vec<T>,
    pub measurement: Measurement,
}

/// Time index generation plus the transform.
///
/// The clock starts before the index sequence is generated and stops once the
/// transform has produced its last value. Dropping the output is not timed.
pub fn measure<M, T, F>(transform: &M, length: usize, f: F) -> TimedOutput<T>
where
    M: MapTransform,
    T: Send,
    F: Fn(u64) -> T + Sync + Send,
{
    let start = Instant::now();
    let indices = generate_indices(length);
    let output = transform.map(indices, f);
    std::hint::black_box(&output);
    let elapsed = start.elapsed();

    let measurement = Measurement::new(transform.strategy(), elapsed, output.len());
    TimedOutput { output, measurement }
}
