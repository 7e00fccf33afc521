//! Measurement and report data models

use crate::models::Config;
use crate::types::{MapStrategy, Payload};
use chrono::{DateTime, Utc};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::time::Duration;
use uuid::Uuid;

/// Result of one timed map over a generated sequence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Which map strategy was timed
    pub strategy: MapStrategy,
    /// Wall-clock time from index generation to the end of the transform
    pub elapsed: Duration,
    /// Number of values the transform produced
    pub record_count: usize,
}

impl Measurement {
    pub fn new(strategy: MapStrategy, elapsed: Duration, record_count: usize) -> Self {
        Self {
            strategy,
            elapsed,
            record_count,
        }
    }

    /// Elapsed time in milliseconds; finite and never negative
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_nanos() as f64 / 1_000_000.0
    }

    /// The line shown to the user, e.g. `ES6 Map 시간: 12.5 밀리초`
    pub fn display_line(&self) -> String {
        format!("{} 시간: {} 밀리초", self.strategy.label(), self.elapsed_ms())
    }
}

impl Serialize for Measurement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Measurement", 4)?;
        state.serialize_field("strategy", &self.strategy)?;
        state.serialize_field("label", self.strategy.label())?;
        state.serialize_field("elapsed_ms", &self.elapsed_ms())?;
        state.serialize_field("record_count", &self.record_count)?;
        state.end()
    }
}

/// Everything one benchmark run produced
#[derive(Debug, Clone, serde::Serialize)]
pub struct BenchReport {
    /// Unique ID of this run
    pub run_id: Uuid,
    /// When the first measurement started
    pub started_at: DateTime<Utc>,
    /// Elements transformed per measurement
    pub length: usize,
    /// Payload each index was mapped to
    pub payload: Payload,
    /// Worker threads used by the library map
    pub threads: usize,
    /// Measurements in execution order
    pub measurements: Vec<Measurement>,
    /// Label of the quicker strategy; absent on a tie
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faster: Option<&'static str>,
}

impl BenchReport {
    /// Assemble a report from completed measurements
    pub fn new(
        config: &Config,
        threads: usize,
        started_at: DateTime<Utc>,
        measurements: Vec<Measurement>,
    ) -> Self {
        let faster = Self::fastest_of(&measurements).map(|m| m.strategy.label());
        Self {
            run_id: Uuid::new_v4(),
            started_at,
            length: config.length,
            payload: config.payload,
            threads,
            measurements,
            faster,
        }
    }

    /// The quicker measurement, or `None` on a tie or when empty
    pub fn fastest(&self) -> Option<&Measurement> {
        Self::fastest_of(&self.measurements)
    }

    /// How many times slower the slower strategy was; `None` if not comparable
    pub fn speedup(&self) -> Option<f64> {
        let fastest = self.fastest()?;
        let slowest = self.measurements.iter().max_by_key(|m| m.elapsed)?;
        if fastest.elapsed.is_zero() {
            return None;
        }
        Some(slowest.elapsed_ms() / fastest.elapsed_ms())
    }

    fn fastest_of(measurements: &[Measurement]) -> Option<&Measurement> {
        let fastest = measurements.iter().min_by_key(|m| m.elapsed)?;
        let tied = measurements
            .iter()
            .filter(|m| m.elapsed == fastest.elapsed)
            .count();
        if tied > 1 {
            None
        } else {
            Some(fastest)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(native_us: u64, library_us: u64) -> BenchReport {
        BenchReport::new(
            &Config::default(),
            1,
            Utc::now(),
            vec![
                Measurement::new(MapStrategy::Native, Duration::from_micros(native_us), 5),
                Measurement::new(MapStrategy::Library, Duration::from_micros(library_us), 5),
            ],
        )
    }

    #[test]
    fn test_elapsed_ms_conversion() {
        let m = Measurement::new(MapStrategy::Native, Duration::from_micros(2500), 0);
        assert_eq!(m.elapsed_ms(), 2.5);

        let zero = Measurement::new(MapStrategy::Native, Duration::ZERO, 0);
        assert_eq!(zero.elapsed_ms(), 0.0);
        assert!(zero.elapsed_ms().is_finite());
    }

    #[test]
    fn test_display_line_template() {
        let native = Measurement::new(MapStrategy::Native, Duration::from_micros(12_500), 5);
        assert_eq!(native.display_line(), "ES6 Map 시간: 12.5 밀리초");

        let library = Measurement::new(MapStrategy::Library, Duration::from_millis(3), 5);
        assert_eq!(library.display_line(), "Lodash Map 시간: 3 밀리초");
    }

    #[test]
    fn test_measurement_serialization() {
        let m = Measurement::new(MapStrategy::Library, Duration::from_micros(1500), 42);
        let json = serde_json::to_value(m).unwrap();
        assert_eq!(json["strategy"], "library");
        assert_eq!(json["label"], "Lodash Map");
        assert_eq!(json["elapsed_ms"], 1.5);
        assert_eq!(json["record_count"], 42);
    }

    #[test]
    fn test_fastest_and_speedup() {
        let r = report(1000, 4000);
        assert_eq!(r.fastest().unwrap().strategy, MapStrategy::Native);
        assert_eq!(r.faster, Some("ES6 Map"));
        assert_eq!(r.speedup(), Some(4.0));
        assert_eq!(r.measurements[1].record_count, 5);
    }

    #[test]
    fn test_tie_has_no_winner() {
        let r = report(700, 700);
        assert!(r.fastest().is_none());
        assert!(r.faster.is_none());
        assert!(r.speedup().is_none());

        let json = serde_json::to_value(&r).unwrap();
        assert!(json.get("faster").is_none());
    }

    #[test]
    fn test_zero_elapsed_has_no_speedup() {
        let r = report(0, 10);
        assert_eq!(r.faster, Some("ES6 Map"));
        assert!(r.speedup().is_none());
    }
}
