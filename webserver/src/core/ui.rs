//! Client-side UI state machines
//!
//! Small, independent state holders. The server uses them to decide initial
//! markup (banner shown or not, CTA hidden, video paused); their transitions
//! mirror what the page scripts do in the browser.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use site_shared::SharedError;

use crate::traits::PreferenceStore;

/// Storage key holding the consent choice
pub const CONSENT_KEY: &str = "cookie-consent";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsentState {
    Unset,
    Accepted,
    Declined,
}

impl ConsentState {
    /// Stored literal, `None` for unset
    pub fn as_stored(&self) -> Option<&'static str> {
        match self {
            ConsentState::Unset => None,
            ConsentState::Accepted => Some("accepted"),
            ConsentState::Declined => Some("declined"),
        }
    }

    fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("accepted") => ConsentState::Accepted,
            Some("declined") => ConsentState::Declined,
            _ => ConsentState::Unset,
        }
    }
}

/// Cookie consent banner backed by a preference store
#[derive(Debug)]
pub struct ConsentBanner<S: PreferenceStore> {
    store: S,
    state: ConsentState,
}

impl<S: PreferenceStore> ConsentBanner<S> {
    /// Load the stored choice; unknown values count as no choice
    pub fn init(store: S) -> Self {
        let state = ConsentState::from_stored(store.get(CONSENT_KEY).as_deref());
        Self { store, state }
    }

    pub fn state(&self) -> ConsentState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == ConsentState::Unset
    }

    pub fn accept(&mut self) {
        self.record(ConsentState::Accepted);
    }

    pub fn decline(&mut self) {
        self.record(ConsentState::Declined);
    }

    fn record(&mut self, state: ConsentState) {
        if let Some(value) = state.as_stored() {
            self.store.set(CONSENT_KEY, value);
            self.state = state;
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

/// Fraction of the viewport height that must be scrolled before the CTA appears
pub const CTA_SCROLL_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CtaState {
    Hidden,
    Visible,
    Dismissed,
}

impl CtaState {
    pub fn as_str(&self) -> &'static str {
        match self {
            CtaState::Hidden => "hidden",
            CtaState::Visible => "visible",
            CtaState::Dismissed => "dismissed",
        }
    }
}

/// Floating call-to-action driven by scroll position
#[derive(Debug, Clone)]
pub struct FloatingCta {
    state: CtaState,
}

impl FloatingCta {
    pub fn new() -> Self {
        Self { state: CtaState::Hidden }
    }

    pub fn state(&self) -> CtaState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == CtaState::Visible
    }

    /// Re-evaluate visibility for a scroll event. Dismissal is final.
    pub fn on_scroll(&mut self, offset: f64, viewport_height: f64) {
        if self.state == CtaState::Dismissed {
            return;
        }
        self.state = if offset >= viewport_height * CTA_SCROLL_THRESHOLD {
            CtaState::Visible
        } else {
            CtaState::Hidden
        };
    }

    pub fn dismiss(&mut self) {
        self.state = CtaState::Dismissed;
    }
}

impl Default for FloatingCta {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoState {
    #[default]
    Paused,
    Playing,
}

impl VideoState {
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoState::Paused => "paused",
            VideoState::Playing => "playing",
        }
    }
}

/// Video placeholder; the embed only loads once playing
#[derive(Debug, Clone, Default)]
pub struct VideoPlaceholder {
    state: VideoState,
}

impl VideoPlaceholder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> VideoState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == VideoState::Playing
    }

    pub fn play(&mut self) {
        self.state = VideoState::Playing;
    }

    pub fn pause(&mut self) {
        self.state = VideoState::Paused;
    }

    pub fn toggle(&mut self) {
        self.state = match self.state {
            VideoState::Paused => VideoState::Playing,
            VideoState::Playing => VideoState::Paused,
        };
    }
}

/// Mobile navigation menu
#[derive(Debug, Clone, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Navigation always closes the menu
    pub fn close(&mut self) {
        self.open = false;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadingVariant {
    #[default]
    Spinner,
    Skeleton,
    Pulse,
    Dots,
}

impl LoadingVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadingVariant::Spinner => "spinner",
            LoadingVariant::Skeleton => "skeleton",
            LoadingVariant::Pulse => "pulse",
            LoadingVariant::Dots => "dots",
        }
    }

    /// Resolve a configured variant, falling back to the spinner
    pub fn from_config(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for LoadingVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoadingVariant {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "spinner" => Ok(LoadingVariant::Spinner),
            "skeleton" => Ok(LoadingVariant::Skeleton),
            "pulse" => Ok(LoadingVariant::Pulse),
            "dots" => Ok(LoadingVariant::Dots),
            _ => Err(SharedError::InvalidLoadingVariant { input: s.to_string() }),
        }
    }
}
