//! Shared fakes for security service tests.

#![allow(dead_code)]

use catpoint_common::{AlarmStatus, ArmingStatus, RepositoryError, Sensor, SystemSnapshot};
use catpoint_security::{
    FakeImageAnalyzer, InMemoryRepository, SecurityRepository, SecurityService, StatusListener,
};
use std::sync::{Arc, Mutex, Once};

static TRACING: Once = Once::new();

/// Route service logs to the test harness output
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

// ============================================================================
// Recording Repository
// ============================================================================

/// Write recorded by `RecordingRepository`
#[derive(Debug, Clone, PartialEq)]
pub enum RepoWrite {
    AlarmStatus(AlarmStatus),
    ArmingStatus(ArmingStatus),
    UpdateSensor(Sensor, bool),
    AddSensor(Sensor),
    RemoveSensor(Sensor),
}

/// In-memory repository that logs every write
#[derive(Debug, Default)]
pub struct RecordingRepository {
    inner: InMemoryRepository,
    pub writes: Vec<RepoWrite>,
    /// When set, every write fails with `Unavailable`
    pub fail_writes: bool,
}

impl RecordingRepository {
    pub fn new(snapshot: SystemSnapshot) -> Self {
        Self {
            inner: InMemoryRepository::from_snapshot(snapshot),
            writes: Vec::new(),
            fail_writes: false,
        }
    }

    pub fn alarm_writes(&self) -> Vec<AlarmStatus> {
        self.writes
            .iter()
            .filter_map(|w| match w {
                RepoWrite::AlarmStatus(status) => Some(*status),
                _ => None,
            })
            .collect()
    }

    pub fn sensor_updates(&self) -> usize {
        self.writes
            .iter()
            .filter(|w| matches!(w, RepoWrite::UpdateSensor(..)))
            .count()
    }

    fn check(&self) -> Result<(), RepositoryError> {
        if self.fail_writes {
            return Err(RepositoryError::Unavailable("disk full".to_string()));
        }
        Ok(())
    }
}

impl SecurityRepository for RecordingRepository {
    fn alarm_status(&self) -> Result<AlarmStatus, RepositoryError> {
        self.inner.alarm_status()
    }

    fn set_alarm_status(&mut self, status: AlarmStatus) -> Result<(), RepositoryError> {
        self.check()?;
        self.writes.push(RepoWrite::AlarmStatus(status));
        self.inner.set_alarm_status(status)
    }

    fn arming_status(&self) -> Result<ArmingStatus, RepositoryError> {
        self.inner.arming_status()
    }

    fn set_arming_status(&mut self, status: ArmingStatus) -> Result<(), RepositoryError> {
        self.check()?;
        self.writes.push(RepoWrite::ArmingStatus(status));
        self.inner.set_arming_status(status)
    }

    fn sensors(&self) -> Result<Vec<Sensor>, RepositoryError> {
        self.inner.sensors()
    }

    fn add_sensor(&mut self, sensor: Sensor) -> Result<(), RepositoryError> {
        self.check()?;
        self.writes.push(RepoWrite::AddSensor(sensor.clone()));
        self.inner.add_sensor(sensor)
    }

    fn remove_sensor(&mut self, sensor: &Sensor) -> Result<(), RepositoryError> {
        self.check()?;
        self.writes.push(RepoWrite::RemoveSensor(sensor.clone()));
        self.inner.remove_sensor(sensor)
    }

    fn update_sensor(&mut self, sensor: Sensor) -> Result<(), RepositoryError> {
        self.check()?;
        let active = sensor.is_active();
        self.writes.push(RepoWrite::UpdateSensor(sensor.clone(), active));
        self.inner.update_sensor(sensor)
    }
}

// ============================================================================
// Recording Listener
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Alarm(AlarmStatus),
    Cat(bool),
}

#[derive(Debug, Default)]
pub struct RecordingListener {
    events: Mutex<Vec<Event>>,
}

impl RecordingListener {
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }
}

impl StatusListener for RecordingListener {
    fn on_alarm_status_changed(&self, status: AlarmStatus) {
        self.events.lock().unwrap().push(Event::Alarm(status));
    }

    fn on_cat_detected(&self, cat: bool) {
        self.events.lock().unwrap().push(Event::Cat(cat));
    }
}

// ============================================================================
// Builders
// ============================================================================

pub type TestService = SecurityService<RecordingRepository, FakeImageAnalyzer>;

/// Service over a recording repository seeded with the given state
pub fn service(
    alarm_status: AlarmStatus,
    arming_status: ArmingStatus,
    sensors: Vec<Sensor>,
    analyzer: FakeImageAnalyzer,
) -> TestService {
    init_tracing();
    let repository = RecordingRepository::new(SystemSnapshot {
        alarm_status,
        arming_status,
        sensors,
    });
    SecurityService::new(repository, analyzer)
}

/// Attach a fresh recording listener
pub fn listen(service: &mut TestService) -> Arc<RecordingListener> {
    let listener = Arc::new(RecordingListener::default());
    service.add_status_listener(listener.clone());
    listener
}
