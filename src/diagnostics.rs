//! Best-effort page diagnostics: outbound-link analytics, broken images, slow
//! loads, and uncaught script errors.
//!
//! Nothing in here may interrupt the page. The DOM layer calls these helpers
//! from listeners and logs whatever they report.

#[cfg(test)]
#[path = "diagnostics_test.rs"]
mod diagnostics_test;

use serde::Serialize;

use crate::consts::OUTBOUND_CATEGORY;
use crate::error::PageError;

/// First argument passed to `gtag`.
pub const GTAG_COMMAND: &str = "event";

/// Parameters of a `gtag("event", action, params)` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsEvent {
    #[serde(skip)]
    pub action: &'static str,
    pub event_category: String,
    pub event_label: String,
}

impl AnalyticsEvent {
    /// Click on a link leaving the site.
    #[must_use]
    pub fn outbound_click(href: &str) -> Self {
        Self {
            action: "click",
            event_category: OUTBOUND_CATEGORY.to_owned(),
            event_label: href.to_owned(),
        }
    }

    /// The params object as JSON.
    pub fn params_json(&self) -> Result<String, PageError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Load phase of a navigation timing entry, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadTiming {
    pub load_event_start: f64,
    pub load_event_end: f64,
}

impl LoadTiming {
    #[must_use]
    pub fn duration(self) -> f64 {
        self.load_event_end - self.load_event_start
    }

    #[must_use]
    pub fn is_slow(self, threshold_ms: f64) -> bool {
        self.duration() > threshold_ms
    }
}

#[must_use]
pub fn image_failure_message(src: &str) -> String {
    if src.is_empty() {
        "Image failed to load: <no src>".to_owned()
    } else {
        format!("Image failed to load: {src}")
    }
}

#[must_use]
pub fn script_error_message(message: &str, source: &str, line: u32) -> String {
    if source.is_empty() {
        format!("Script error: {message}")
    } else {
        format!("Script error: {message} ({source}:{line})")
    }
}
