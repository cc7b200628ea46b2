//! Page enhancements for a static site, compiled to WebAssembly.
//!
//! Theme switching, the mobile navigation menu, smooth anchor scrolling, the
//! header shadow, scroll-triggered fade-ins, and best-effort diagnostics.
//! Every behavior is a small state model in a pure module; the `browser`
//! feature adds the [`dom`] layer that binds those models to the page and is
//! the only code that touches `web-sys`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Light/dark resolution and toggling |
//! | [`nav`] | Collapsible menu state machine and its markers |
//! | [`scroll`] | Anchor targets, header emphasis, frame throttle |
//! | [`reveal`] | Monotonic fade-in visibility |
//! | [`diagnostics`] | Analytics payloads, load timing, log messages |
//! | [`store`] | Failure-tolerant key-value persistence |
//! | [`config`] | Tunables with JSON overrides |
//! | [`error`] | [`error::PageError`] |
//! | [`consts`] | Selectors, class names, and numeric defaults |
//! | `dom` | DOM bindings (feature `browser`) |
//! | `app` | Start-up and exported `toggleTheme` / `toggleMenu` (feature `browser`) |

pub mod config;
pub mod consts;
pub mod diagnostics;
pub mod error;
pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod store;
pub mod theme;

#[cfg(feature = "browser")]
pub mod app;
#[cfg(feature = "browser")]
pub mod dom;
