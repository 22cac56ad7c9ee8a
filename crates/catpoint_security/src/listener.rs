//! Status listeners.
//!
//! Listeners are fire-and-forget observers. They are called synchronously,
//! in registration order, but callers must not rely on that order.

use catpoint_common::AlarmStatus;
use std::sync::Arc;
use tracing::{debug, info};

/// Receives alarm status and cat detection events
pub trait StatusListener: Send + Sync {
    fn on_alarm_status_changed(&self, status: AlarmStatus);

    fn on_cat_detected(&self, cat: bool);
}

/// Registered listeners, unique by handle identity
#[derive(Default)]
pub struct ListenerSet {
    listeners: Vec<Arc<dyn StatusListener>>,
}

fn same_listener(a: &Arc<dyn StatusListener>, b: &Arc<dyn StatusListener>) -> bool {
    // Data pointers only, vtable pointers are not unique
    std::ptr::eq(
        Arc::as_ptr(a) as *const (),
        Arc::as_ptr(b) as *const (),
    )
}

impl ListenerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. Returns false if this handle is already registered.
    pub fn add(&mut self, listener: Arc<dyn StatusListener>) -> bool {
        if self.contains(&listener) {
            debug!("Listener already registered");
            return false;
        }
        self.listeners.push(listener);
        true
    }

    /// Remove a listener by identity. Returns false if it was not registered.
    pub fn remove(&mut self, listener: &Arc<dyn StatusListener>) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| !same_listener(l, listener));
        self.listeners.len() != before
    }

    pub fn contains(&self, listener: &Arc<dyn StatusListener>) -> bool {
        self.listeners.iter().any(|l| same_listener(l, listener))
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn notify_alarm_status(&self, status: AlarmStatus) {
        for listener in &self.listeners {
            listener.on_alarm_status_changed(status);
        }
    }

    pub fn notify_cat_detected(&self, cat: bool) {
        for listener in &self.listeners {
            listener.on_cat_detected(cat);
        }
    }
}

/// Logs every event through `tracing`
#[derive(Debug, Default)]
pub struct TracingListener;

impl StatusListener for TracingListener {
    fn on_alarm_status_changed(&self, status: AlarmStatus) {
        info!(status = ?status, "Alarm status: {}", status);
    }

    fn on_cat_detected(&self, cat: bool) {
        if cat {
            info!("Cat detected by camera");
        } else {
            debug!("No cat in camera frame");
        }
    }
}
