//! Catpoint security core.
//!
//! `SecurityService` owns the alarm decision rules. It talks to the outside
//! world through three seams: a [`SecurityRepository`] holding state, an
//! [`ImageAnalyzer`] answering "is there a cat", and any number of
//! [`StatusListener`]s observing changes.

pub mod analyzer;
pub mod listener;
pub mod repository;
pub mod service;

pub use analyzer::{FakeAnalysis, FakeImageAnalyzer, ImageAnalyzer, RandomImageAnalyzer};
pub use listener::{ListenerSet, StatusListener, TracingListener};
pub use repository::{InMemoryRepository, SecurityRepository};
pub use service::SecurityService;

pub use catpoint_common::{
    AlarmStatus, ArmingStatus, SecurityConfig, SecurityError, Sensor, SensorType,
};
