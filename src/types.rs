//! Type definitions and aliases

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// Re-export commonly used types
pub use crate::error::{AppError, Result};

/// The two map strategies being compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapStrategy {
    /// `Iterator::map` over an owned `Vec`
    Native,
    /// `rayon` parallel-iterator map inside the benchmark thread pool
    Library,
}

impl MapStrategy {
    /// Both strategies in the order they are measured
    pub const ALL: [MapStrategy; 2] = [MapStrategy::Native, MapStrategy::Library];

    /// Label used on the display line
    pub fn label(&self) -> &'static str {
        match self {
            MapStrategy::Native => "ES6 Map",
            MapStrategy::Library => "Lodash Map",
        }
    }

    /// Short identifier used in logs and JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            MapStrategy::Native => "native",
            MapStrategy::Library => "library",
        }
    }
}

impl fmt::Display for MapStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What each index is mapped to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Payload {
    /// Fixed-shape user record with `id = index + 1`
    Records,
    /// The index doubled
    Numbers,
}

impl Payload {
    pub fn as_str(&self) -> &'static str {
        match self {
            Payload::Records => "records",
            Payload::Numbers => "numbers",
        }
    }

    /// Bytes held per element at peak: the index plus the produced value
    pub fn bytes_per_element(&self) -> usize {
        let produced = match self {
            Payload::Records => std::mem::size_of::<crate::models::UserRecord>(),
            Payload::Numbers => std::mem::size_of::<u64>(),
        };
        std::mem::size_of::<u64>() + produced
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Payload {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "records" | "record" | "objects" => Ok(Payload::Records),
            "numbers" | "number" => Ok(Payload::Numbers),
            _ => Err(AppError::parse(format!("Invalid payload: {} (expected records or numbers)", s))),
        }
    }
}

/// Result output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable display lines
    Text,
    /// A single JSON report object
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "plain" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(AppError::parse(format!("Invalid output format: {} (expected text or json)", s))),
        }
    }
}
