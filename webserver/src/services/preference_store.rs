//! Preference store implementations
//!
//! `MemoryPreferenceStore` keeps values for one session. `CookiePreferenceStore`
//! reads the request `Cookie` header and turns writes into `Set-Cookie` values,
//! which is how a choice made in the browser survives between page loads.

use std::collections::HashMap;

use crate::traits::PreferenceStore;

/// One year; the stored choice has no other expiry
const COOKIE_MAX_AGE_SECS: u64 = 60 * 60 * 24 * 365;

#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

#[derive(Debug, Clone, Default)]
pub struct CookiePreferenceStore {
    cookies: HashMap<String, String>,
    pending: Vec<String>,
}

impl CookiePreferenceStore {
    /// Parse a `Cookie` request header (`a=1; b=2`)
    pub fn from_header(header: Option<&str>) -> Self {
        let cookies = header
            .unwrap_or_default()
            .split(';')
            .filter_map(|pair| pair.trim().split_once('='))
            .filter(|(name, _)| !name.is_empty())
            .map(|(name, value)| (name.trim().to_string(), value.trim().to_string()))
            .collect();

        Self {
            cookies,
            pending: Vec::new(),
        }
    }

    /// `Set-Cookie` header values for every write since construction
    pub fn set_cookie_headers(&self) -> &[String] {
        &self.pending
    }
}

impl PreferenceStore for CookiePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.cookies.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.cookies.insert(key.to_string(), value.to_string());
        self.pending.push(format!(
            "{key}={value}; Path=/; Max-Age={COOKIE_MAX_AGE_SECS}; SameSite=Lax"
        ));
    }
}
