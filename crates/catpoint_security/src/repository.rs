//! Repository abstraction for alarm state and sensors.
//!
//! `SecurityService` is the only writer by policy. Nothing here enforces
//! that; a caller writing through the repository directly is breaking
//! the contract, not the type system.

use catpoint_common::{AlarmStatus, ArmingStatus, RepositoryError, Sensor, SystemSnapshot};
use std::collections::BTreeSet;
use tracing::debug;

// ============================================================================
// Repository Trait
// ============================================================================

/// Holds the current alarm status, arming status and sensor set.
///
/// Every call may fail; a write must be visible to the next read.
pub trait SecurityRepository {
    fn alarm_status(&self) -> Result<AlarmStatus, RepositoryError>;

    fn set_alarm_status(&mut self, status: AlarmStatus) -> Result<(), RepositoryError>;

    fn arming_status(&self) -> Result<ArmingStatus, RepositoryError>;

    fn set_arming_status(&mut self, status: ArmingStatus) -> Result<(), RepositoryError>;

    /// Owned copy of the sensor set, in (name, type) order
    fn sensors(&self) -> Result<Vec<Sensor>, RepositoryError>;

    fn add_sensor(&mut self, sensor: Sensor) -> Result<(), RepositoryError>;

    fn remove_sensor(&mut self, sensor: &Sensor) -> Result<(), RepositoryError>;

    /// Persist the activation flag of a sensor
    fn update_sensor(&mut self, sensor: Sensor) -> Result<(), RepositoryError>;
}

// ============================================================================
// In-Memory Repository
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    alarm_status: AlarmStatus,
    arming_status: ArmingStatus,
    sensors: BTreeSet<Sensor>,
}

impl InMemoryRepository {
    /// Fresh repository: no alarm, disarmed, no sensors
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore from persisted state
    pub fn from_snapshot(snapshot: SystemSnapshot) -> Self {
        Self {
            alarm_status: snapshot.alarm_status,
            arming_status: snapshot.arming_status,
            sensors: snapshot.sensors.into_iter().collect(),
        }
    }

    pub fn snapshot(&self) -> SystemSnapshot {
        SystemSnapshot {
            alarm_status: self.alarm_status,
            arming_status: self.arming_status,
            sensors: self.sensors.iter().cloned().collect(),
        }
    }
}

impl SecurityRepository for InMemoryRepository {
    fn alarm_status(&self) -> Result<AlarmStatus, RepositoryError> {
        Ok(self.alarm_status)
    }

    fn set_alarm_status(&mut self, status: AlarmStatus) -> Result<(), RepositoryError> {
        self.alarm_status = status;
        Ok(())
    }

    fn arming_status(&self) -> Result<ArmingStatus, RepositoryError> {
        Ok(self.arming_status)
    }

    fn set_arming_status(&mut self, status: ArmingStatus) -> Result<(), RepositoryError> {
        self.arming_status = status;
        Ok(())
    }

    fn sensors(&self) -> Result<Vec<Sensor>, RepositoryError> {
        Ok(self.sensors.iter().cloned().collect())
    }

    fn add_sensor(&mut self, sensor: Sensor) -> Result<(), RepositoryError> {
        // An existing sensor with the same identity keeps its stored state
        self.sensors.insert(sensor);
        Ok(())
    }

    fn remove_sensor(&mut self, sensor: &Sensor) -> Result<(), RepositoryError> {
        if self.sensors.remove(sensor) {
            Ok(())
        } else {
            Err(RepositoryError::SensorNotFound(sensor.name().to_string()))
        }
    }

    fn update_sensor(&mut self, sensor: Sensor) -> Result<(), RepositoryError> {
        if let Some(previous) = self.sensors.replace(sensor) {
            debug!("Updated sensor {}", previous.name());
        } else {
            debug!("Update inserted unknown sensor");
        }
        Ok(())
    }
}
