//! Tunables for every component.
//!
//! Defaults come from [`crate::consts`]. A page may override any subset of
//! fields with a JSON document embedded as
//! `<script type="application/json" id="pagekit-config">`; unknown fields are
//! ignored and missing ones keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

use serde::Deserialize;

use crate::consts;
use crate::error::PageError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage_key: String,
    pub nav_breakpoint: f64,
    pub header_offset: f64,
    pub header_threshold: f64,
    pub header_shadow: String,
    pub frame_fallback_ms: u32,
    pub reveal_threshold: f64,
    pub reveal_bottom_inset: f64,
    pub slow_load_ms: f64,
    /// `log` level name (`error` .. `trace`).
    pub log_level: String,
    /// Attach click listeners to the menu and theme toggles. Turn off when the
    /// markup already calls the exported `toggleMenu` / `toggleTheme` globals.
    pub bind_controls: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: consts::THEME_STORAGE_KEY.to_owned(),
            nav_breakpoint: consts::NAV_BREAKPOINT_PX,
            header_offset: consts::HEADER_OFFSET_PX,
            header_threshold: consts::HEADER_EMPHASIS_THRESHOLD_PX,
            header_shadow: consts::HEADER_SHADOW.to_owned(),
            frame_fallback_ms: consts::FRAME_FALLBACK_MS,
            reveal_threshold: consts::REVEAL_THRESHOLD,
            reveal_bottom_inset: consts::REVEAL_BOTTOM_INSET_PX,
            slow_load_ms: consts::SLOW_LOAD_THRESHOLD_MS,
            log_level: "info".to_owned(),
            bind_controls: true,
        }
    }
}

impl Config {
    /// Parse overrides from JSON. Blank input yields the defaults.
    pub fn from_json(raw: &str) -> Result<Self, PageError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Configured log level; unknown names mean `Info`.
    #[must_use]
    pub fn level(&self) -> log::Level {
        log::Level::from_str(&self.log_level).unwrap_or(log::Level::Info)
    }
}
