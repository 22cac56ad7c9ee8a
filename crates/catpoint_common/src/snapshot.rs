//! Serializable shape of the repository contents.
//!
//! Used to seed an in-memory repository from persisted state and to read
//! its state back out. Where the JSON ends up is the caller's business.

use crate::error::RepositoryError;
use crate::sensor::Sensor;
use crate::status::{AlarmStatus, ArmingStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemSnapshot {
    #[serde(default)]
    pub alarm_status: AlarmStatus,
    #[serde(default)]
    pub arming_status: ArmingStatus,
    #[serde(default)]
    pub sensors: Vec<Sensor>,
}

impl SystemSnapshot {
    pub fn to_json(&self) -> Result<String, RepositoryError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(content: &str) -> Result<Self, RepositoryError> {
        Ok(serde_json::from_str(content)?)
    }
}
