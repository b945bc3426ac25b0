//! Observable events
//!
//! Events are explicit and typed; their wire names are stable.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Process startup begins
    BootStart,
    /// Configuration loaded and validated
    ConfigLoaded,
    /// Empty store file created by `init`
    StoreInitialized,
    /// HTTP listener bound, ready for requests
    Serving,
    /// Listener stopped
    Shutdown,

    // Store
    /// Store could not be read or parsed; an empty collection was used
    StoreLoadFailed,
    /// Whole collection written back
    StoreSaved,

    // Records
    PatientCreated,
    PatientUpdated,
    PatientDeleted,
    /// A request failed with a client or server error
    RequestRejected,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "BOOT_START",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::StoreInitialized => "STORE_INITIALIZED",
            Event::Serving => "SERVING",
            Event::Shutdown => "SHUTDOWN",
            Event::StoreLoadFailed => "STORE_LOAD_FAILED",
            Event::StoreSaved => "STORE_SAVED",
            Event::PatientCreated => "PATIENT_CREATED",
            Event::PatientUpdated => "PATIENT_UPDATED",
            Event::PatientDeleted => "PATIENT_DELETED",
            Event::RequestRejected => "REQUEST_REJECTED",
        }
    }

    /// Whether this event signals a degraded path
    pub fn is_warning(&self) -> bool {
        matches!(self, Event::StoreLoadFailed | Event::RequestRejected)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(Event::BootStart.as_str(), "BOOT_START");
        assert_eq!(Event::StoreLoadFailed.as_str(), "STORE_LOAD_FAILED");
        assert_eq!(Event::PatientUpdated.to_string(), "PATIENT_UPDATED");
    }

    #[test]
    fn test_warning_events() {
        assert!(Event::StoreLoadFailed.is_warning());
        assert!(Event::RequestRejected.is_warning());
        assert!(!Event::PatientCreated.is_warning());
        assert!(!Event::Serving.is_warning());
    }
}
