//! Shared constants for the page enhancements.

// ── Persistence ─────────────────────────────────────────────────

/// `localStorage` key holding the explicit theme choice.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Attribute carrying the applied theme (`light` / `dark`).
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Media query for the system dark-mode signal.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

// ── Navigation ──────────────────────────────────────────────────

/// Viewport width above which the collapsible menu does not exist.
pub const NAV_BREAKPOINT_PX: f64 = 768.0;

pub const NAV_CONTAINER_ID: &str = "nav-links";
pub const NAV_TOGGLE_SELECTOR: &str = ".hamburger";
pub const NAV_LINK_SELECTOR: &str = "nav a";
pub const ACTIVE_CLASS: &str = "active";
pub const ESCAPE_KEY: &str = "Escape";

// ── Scrolling ───────────────────────────────────────────────────

/// Distance kept between the viewport top and an anchor target (fixed header height).
pub const HEADER_OFFSET_PX: f64 = 80.0;

/// Scroll offset past which the header gets its shadow.
pub const HEADER_EMPHASIS_THRESHOLD_PX: f64 = 100.0;

pub const HEADER_SHADOW: &str = "0 2px 20px rgba(0, 200, 81, 0.15)";

/// Timer interval used when `requestAnimationFrame` is unavailable (~60 Hz).
pub const FRAME_FALLBACK_MS: u32 = 16;

pub const ANCHOR_LINK_SELECTOR: &str = "a[href^=\"#\"]";
pub const HEADER_SELECTOR: &str = "header";

// ── Visibility ──────────────────────────────────────────────────

/// Fraction of an element that must be on screen before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Bottom inset of the observation root, in pixels.
pub const REVEAL_BOTTOM_INSET_PX: f64 = 50.0;

pub const FADE_IN_SELECTOR: &str = ".fade-in";
pub const VISIBLE_CLASS: &str = "visible";

// ── Diagnostics ─────────────────────────────────────────────────

/// Load duration (`loadEventEnd - loadEventStart`) considered slow.
pub const SLOW_LOAD_THRESHOLD_MS: f64 = 3000.0;

pub const OUTBOUND_LINK_SELECTOR: &str = "a[target=\"_blank\"]";
pub const OUTBOUND_CATEGORY: &str = "outbound";
pub const NO_JS_CLASS: &str = "no-js";

// ── Wiring ──────────────────────────────────────────────────────

pub const THEME_TOGGLE_SELECTOR: &str = "[data-theme-toggle]";
pub const CONFIG_ELEMENT_ID: &str = "pagekit-config";
