//! Benchmark execution
//!
//! The executor owns the library map's thread pool and runs the two
//! measurements one after the other. It is synchronous; the application
//! moves it onto a blocking task.

pub mod transform;

pub use transform::{
    MapTransform, NativeMap, LibraryMap, TimedOutput,
    generate_indices, measure, to_doubled, to_record,
};

use crate::{
    error::Result,
    logging::MeasurementLogger,
    models::{BenchReport, Config, Measurement},
    types::{MapStrategy, Payload},
};
use chrono::Utc;
use rayon::{ThreadPool, ThreadPoolBuilder};

/// Runs both measurements for one configuration
pub struct BenchmarkExecutor {
    config: Config,
    pool: ThreadPool,
    logger: Option<MeasurementLogger>,
}

impl BenchmarkExecutor {
    /// Build the executor and its thread pool; no timing happens here
    pub fn new(config: &Config) -> Result<Self> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(config.resolved_threads())
            .thread_name(|index| format!("map-bench-{}", index))
            .build()?;

        Ok(Self {
            config: config.clone(),
            pool,
            logger: None,
        })
    }

    /// Attach a logger for measurement start and completion events
    pub fn with_logger(mut self, logger: MeasurementLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Worker threads in the library map's pool
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Time one strategy with the configured payload and discard its output
    pub fn measure(&self, strategy: MapStrategy) -> Measurement {
        if let Some(logger) = &self.logger {
            logger.log_start(strategy, self.config.length);
        }

        let measurement = match strategy {
            MapStrategy::Native => self.measure_with(&NativeMap),
            MapStrategy::Library => self.measure_with(&LibraryMap::new(&self.pool)),
        };

        if let Some(logger) = &self.logger {
            logger.log_complete(&measurement);
        }

        measurement
    }

    fn measure_with<M: MapTransform>(&self, transform: &M) -> Measurement {
        let length = self.config.length;
        match self.config.payload {
            Payload::Records => measure(transform, length, to_record).measurement,
            Payload::Numbers => measure(transform, length, to_doubled).measurement,
        }
    }

    /// Run the native measurement, then the library measurement
    pub fn run(&self) -> BenchReport {
        let started_at = Utc::now();
        let measurements = MapStrategy::ALL
            .iter()
            .map(|&strategy| self.measure(strategy))
            .collect();

        BenchReport::new(&self.config, self.threads(), started_at, measurements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(length: usize, payload: Payload, threads: usize) -> Config {
        Config {
            length,
            payload,
            threads,
            ..Config::default()
        }
    }

    #[test]
    fn test_executor_builds_pool_with_requested_threads() {
        let executor = BenchmarkExecutor::new(&config(10, Payload::Records, 3)).unwrap();
        assert_eq!(executor.threads(), 3);
    }

    #[test]
    fn test_zero_threads_uses_all_cpus() {
        let executor = BenchmarkExecutor::new(&config(10, Payload::Records, 0)).unwrap();
        assert_eq!(executor.threads(), num_cpus::get());
    }

    #[test]
    fn test_run_measures_both_strategies_in_order() {
        let executor = BenchmarkExecutor::new(&config(5, Payload::Records, 1)).unwrap();
        let report = executor.run();

        assert_eq!(report.measurements.len(), 2);
        assert_eq!(report.measurements[0].strategy, MapStrategy::Native);
        assert_eq!(report.measurements[1].strategy, MapStrategy::Library);
        for measurement in &report.measurements {
            assert_eq!(measurement.record_count, 5);
            assert!(measurement.elapsed_ms().is_finite());
            assert!(measurement.elapsed_ms() >= 0.0);
        }
        assert_eq!(report.length, 5);
        assert_eq!(report.threads, 1);
    }

    #[test]
    fn test_run_with_zero_length() {
        let executor = BenchmarkExecutor::new(&config(0, Payload::Numbers, 1)).unwrap();
        let report = executor.run();
        assert!(report.measurements.iter().all(|m| m.record_count == 0));
        assert_eq!(report.payload, Payload::Numbers);
    }

    #[test]
    fn test_measure_single_strategy() {
        let executor = BenchmarkExecutor::new(&config(1000, Payload::Numbers, 2)).unwrap();
        let measurement = executor.measure(MapStrategy::Library);
        assert_eq!(measurement.strategy, MapStrategy::Library);
        assert_eq!(measurement.record_count, 1000);
    }
}
