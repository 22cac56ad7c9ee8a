//! Shared types for Catpoint components.
//!
//! Holds the alarm/arming status enums, the sensor value type, the
//! persisted-state snapshot, configuration and error types. Engine logic
//! lives in `catpoint_security`.

pub mod config;
pub mod error;
pub mod sensor;
pub mod snapshot;
pub mod status;

pub use config::{SecurityConfig, DEFAULT_CONFIDENCE_THRESHOLD};
pub use error::{AnalyzerError, ConfigError, RepositoryError, SecurityError};
pub use sensor::{Sensor, SensorType};
pub use snapshot::SystemSnapshot;
pub use status::{AlarmStatus, ArmingStatus};
