//! Common test utilities shared by the site server test suites

#![allow(dead_code)]

pub mod fixtures;
pub mod helpers;

// Re-export commonly used items for convenience
pub use fixtures::*;
pub use helpers::*;
