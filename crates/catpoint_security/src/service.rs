//! Security service: the alarm decision core.
//!
//! Receives arming changes, sensor toggles and camera frames, decides the
//! resulting alarm status and writes it to the repository. Every alarm
//! status write goes through [`SecurityService::set_alarm_status`], which
//! is also where listeners are notified.
//!
//! ## Alarm transitions
//!
//! - Sensor activated while armed: `NoAlarm -> PendingAlarm -> Alarm`
//! - Active sensor activated again while pending: `PendingAlarm -> Alarm`
//! - Sensor deactivated while pending: `PendingAlarm -> NoAlarm`
//! - Disarm: always `NoAlarm`
//! - Camera: cat while armed-home is `Alarm`, anything else is `NoAlarm`
//!
//! `Alarm` is never cleared by sensor activity.

use crate::analyzer::ImageAnalyzer;
use crate::listener::{ListenerSet, StatusListener};
use crate::repository::SecurityRepository;
use catpoint_common::{
    AlarmStatus, ArmingStatus, ConfigError, SecurityConfig, SecurityError, Sensor,
};
use image::DynamicImage;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct SecurityService<R, A> {
    repository: R,
    analyzer: A,
    listeners: ListenerSet,
    config: SecurityConfig,
}

impl<R: SecurityRepository, A: ImageAnalyzer> SecurityService<R, A> {
    pub fn new(repository: R, analyzer: A) -> Self {
        Self {
            repository,
            analyzer,
            listeners: ListenerSet::new(),
            config: SecurityConfig::default(),
        }
    }

    /// Build with an explicit config, rejecting one that fails validation
    pub fn with_config(
        repository: R,
        analyzer: A,
        config: SecurityConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new(repository, analyzer)
        })
    }

    /// Change the arming status.
    ///
    /// Disarming clears any alarm and leaves the stored arming status as it
    /// was. Arming stores the new status and resets the sensor baseline by
    /// forcing every sensor inactive.
    pub fn set_arming_status(&mut self, status: ArmingStatus) -> Result<(), SecurityError> {
        info!("Arming status -> {}", status);
        match status {
            ArmingStatus::Disarmed => {
                self.set_alarm_status(AlarmStatus::NoAlarm)?;
            }
            ArmingStatus::ArmedHome | ArmingStatus::ArmedAway => {
                self.repository.set_arming_status(status)?;
                self.set_all_sensors_inactive()?;
            }
        }
        Ok(())
    }

    /// Apply a requested activation state to a sensor.
    ///
    /// Returns the sensor as it now stands. Redundant requests write
    /// nothing to the repository; re-activating an active sensor may still
    /// escalate a pending alarm.
    pub fn change_sensor_activation_status(
        &mut self,
        sensor: Sensor,
        active: bool,
    ) -> Result<Sensor, SecurityError> {
        match (sensor.is_active(), active) {
            (true, true) => {
                debug!("Sensor {} re-activated", sensor.name());
                if self.repository.alarm_status()? == AlarmStatus::PendingAlarm {
                    self.set_alarm_status(AlarmStatus::Alarm)?;
                }
                Ok(sensor)
            }
            (true, false) => {
                let updated = sensor.with_active(false);
                debug!("Sensor {} deactivated", updated.name());
                self.repository.update_sensor(updated.clone())?;
                self.handle_sensor_deactivated()?;
                Ok(updated)
            }
            (false, true) => {
                let updated = sensor.with_active(true);
                debug!("Sensor {} activated", updated.name());
                self.repository.update_sensor(updated.clone())?;
                self.handle_sensor_activated()?;
                Ok(updated)
            }
            (false, false) => {
                debug!("Sensor {} already inactive", sensor.name());
                Ok(sensor)
            }
        }
    }

    fn handle_sensor_activated(&mut self) -> Result<(), SecurityError> {
        if !self.repository.arming_status()?.is_armed() {
            return Ok(());
        }
        match self.repository.alarm_status()? {
            AlarmStatus::NoAlarm => self.set_alarm_status(AlarmStatus::PendingAlarm),
            AlarmStatus::PendingAlarm => self.set_alarm_status(AlarmStatus::Alarm),
            AlarmStatus::Alarm => Ok(()),
        }
    }

    fn handle_sensor_deactivated(&mut self) -> Result<(), SecurityError> {
        if self.repository.alarm_status()? == AlarmStatus::PendingAlarm {
            self.set_alarm_status(AlarmStatus::NoAlarm)?;
        }
        Ok(())
    }

    /// Deactivate every sensor, then drop a leftover pending alarm.
    pub fn set_all_sensors_inactive(&mut self) -> Result<(), SecurityError> {
        // Owned copy; deactivation writes back into the repository
        let sensors = self.repository.sensors()?;
        for sensor in sensors {
            self.change_sensor_activation_status(sensor, false)?;
        }

        if self.all_sensors_inactive()?
            && self.repository.alarm_status()? == AlarmStatus::PendingAlarm
        {
            self.set_alarm_status(AlarmStatus::NoAlarm)?;
        }
        Ok(())
    }

    fn all_sensors_inactive(&self) -> Result<bool, SecurityError> {
        Ok(self.repository.sensors()?.iter().all(|s| !s.is_active()))
    }

    /// Run a camera frame through the image analyzer and act on the result.
    ///
    /// An analyzer failure is returned before any status change or
    /// notification happens.
    pub fn process_image(&mut self, image: &DynamicImage) -> Result<(), SecurityError> {
        let cat = self
            .analyzer
            .image_contains_cat(image, self.config.confidence_threshold)
            .map_err(|e| {
                warn!("Image analysis failed: {}", e);
                e
            })?;
        self.cat_detected(cat)
    }

    fn cat_detected(&mut self, cat: bool) -> Result<(), SecurityError> {
        // No cat overrides any sensor-driven alarm
        if cat && self.repository.arming_status()? == ArmingStatus::ArmedHome {
            self.set_alarm_status(AlarmStatus::Alarm)?;
        } else {
            self.set_alarm_status(AlarmStatus::NoAlarm)?;
        }

        self.listeners.notify_cat_detected(cat);
        Ok(())
    }

    /// Write the alarm status and notify every listener
    pub fn set_alarm_status(&mut self, status: AlarmStatus) -> Result<(), SecurityError> {
        self.repository.set_alarm_status(status)?;
        info!("Alarm status -> {}", status);
        self.listeners.notify_alarm_status(status);
        Ok(())
    }

    /// Returns false if the listener was already registered
    pub fn add_status_listener(&mut self, listener: Arc<dyn StatusListener>) -> bool {
        self.listeners.add(listener)
    }

    /// Returns false if the listener was not registered
    pub fn remove_status_listener(&mut self, listener: &Arc<dyn StatusListener>) -> bool {
        self.listeners.remove(listener)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn add_sensor(&mut self, sensor: Sensor) -> Result<(), SecurityError> {
        self.repository.add_sensor(sensor)?;
        Ok(())
    }

    pub fn remove_sensor(&mut self, sensor: &Sensor) -> Result<(), SecurityError> {
        self.repository.remove_sensor(sensor)?;
        Ok(())
    }

    pub fn alarm_status(&self) -> Result<AlarmStatus, SecurityError> {
        Ok(self.repository.alarm_status()?)
    }

    pub fn arming_status(&self) -> Result<ArmingStatus, SecurityError> {
        Ok(self.repository.arming_status()?)
    }

    pub fn sensors(&self) -> Result<Vec<Sensor>, SecurityError> {
        Ok(self.repository.sensors()?)
    }

    pub fn config(&self) -> &SecurityConfig {
        &self.config
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }
}
