//! Error types for Catpoint.
//!
//! The decision core has no failure modes of its own; everything here
//! originates in a collaborator and is propagated unchanged.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Repository unavailable: {0}")]
    Unavailable(String),

    #[error("Sensor not found: {0}")]
    SensorNotFound(String),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("Image analyzer unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid image: {0}")]
    InvalidImage(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Confidence threshold must be within 0..=100, got {0}")]
    InvalidThreshold(f32),
}

#[derive(Error, Debug)]
pub enum SecurityError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Analyzer(#[from] AnalyzerError),
}
