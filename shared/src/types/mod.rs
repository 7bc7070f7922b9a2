//! Core types used throughout the site

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

pub mod city;
pub mod content;
pub mod route;

pub use city::City;
pub use content::{ClientRecord, FaqEntry};
pub use route::{ChangeFrequency, Priority, RouteCategory, RouteDescriptor, RouteSpec};

/// Global process ID singleton - set once at startup
static PROCESS_ID: OnceLock<ProcessId> = OnceLock::new();

/// Fallback used when nothing called `init_*` (unit tests, library use)
static DEFAULT_PROCESS_ID: ProcessId = ProcessId::WebServer;

/// Identifies which entry point is running, for log attribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessId {
    /// Long-running HTTP server
    WebServer,
    /// One-shot static export
    Exporter,
}

impl ProcessId {
    /// Initialize the global process ID for the HTTP server
    pub fn init_webserver() -> &'static ProcessId {
        PROCESS_ID.get_or_init(|| ProcessId::WebServer)
    }

    /// Initialize the global process ID for a static export run
    pub fn init_exporter() -> &'static ProcessId {
        PROCESS_ID.get_or_init(|| ProcessId::Exporter)
    }

    /// Get the global process ID, defaulting to the web server
    pub fn current() -> &'static ProcessId {
        PROCESS_ID.get().unwrap_or(&DEFAULT_PROCESS_ID)
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessId::WebServer => write!(f, "webserver"),
            ProcessId::Exporter => write!(f, "exporter"),
        }
    }
}
