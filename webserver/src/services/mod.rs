//! Service implementations
//!
//! Real implementations of the service traits plus the static exporter

pub mod clock;
pub mod exporter;
pub mod preference_store;

// Re-export service implementations
pub use clock::{FixedClock, SystemClock};
pub use exporter::{ExportReport, SiteExporter};
pub use preference_store::{CookiePreferenceStore, MemoryPreferenceStore};
