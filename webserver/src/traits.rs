//! Service trait definitions for dependency injection
//!
//! Time and client-side storage are abstracted through these traits so the
//! core logic stays deterministic under test.

use chrono::{DateTime, Utc};

/// Source of the current time, read when routes are stamped
#[mockall::automock]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Key/value storage with the browser `localStorage` contract
#[mockall::automock]
pub trait PreferenceStore {
    /// Read a stored value
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, replacing any previous one
    fn set(&mut self, key: &str, value: &str);
}
