//! Collapsible navigation menu: state machine and render model.
//!
//! The menu is open or closed. [`NavState::apply`] maps an input event to the
//! next state plus an optional focus move, and [`NavMarkers`] derives every
//! visual marker (container class, toggle class, `aria-expanded`) from that
//! one boolean, so the markers cannot disagree.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::consts::ESCAPE_KEY;

/// Inputs the menu reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum NavEvent {
    /// The hamburger toggle was activated.
    Toggle,
    /// A link inside the menu was activated.
    LinkActivated,
    /// A pointer event landed outside both the menu and its toggle.
    OutsidePointer,
    /// A key was pressed anywhere in the document.
    KeyDown(String),
    /// The viewport was resized to `width` CSS pixels.
    Resize { width: f64 },
}

/// Where focus should go after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    FirstLink,
    Toggle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavTransition {
    pub state: NavState,
    pub focus: Option<FocusTarget>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    pub open: bool,
}

impl NavState {
    #[must_use]
    pub fn closed() -> Self {
        Self { open: false }
    }

    /// Compute the state after `event`. `breakpoint` is the width above which
    /// the layout has no collapsible menu.
    #[must_use]
    pub fn apply(self, event: &NavEvent, breakpoint: f64) -> NavTransition {
        match event {
            NavEvent::Toggle => {
                let open = !self.open;
                NavTransition {
                    state: Self { open },
                    focus: open.then_some(FocusTarget::FirstLink),
                }
            }
            NavEvent::KeyDown(key) if key == ESCAPE_KEY && self.open => NavTransition {
                state: Self::closed(),
                focus: Some(FocusTarget::Toggle),
            },
            NavEvent::KeyDown(_) => self.unchanged(),
            NavEvent::Resize { width } if *width > breakpoint => self.close(),
            NavEvent::Resize { .. } => self.unchanged(),
            NavEvent::LinkActivated | NavEvent::OutsidePointer => self.close(),
        }
    }

    #[must_use]
    pub fn markers(self) -> NavMarkers {
        NavMarkers {
            container_active: self.open,
            toggle_active: self.open,
            aria_expanded: if self.open { "true" } else { "false" },
        }
    }

    fn close(self) -> NavTransition {
        NavTransition { state: Self::closed(), focus: None }
    }

    fn unchanged(self) -> NavTransition {
        NavTransition { state: self, focus: None }
    }
}

/// Everything the DOM layer writes for a given [`NavState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavMarkers {
    pub container_active: bool,
    pub toggle_active: bool,
    pub aria_expanded: &'static str,
}

/// Whether a toggle control gets a click listener. Controls whose markup
/// already calls the exported global (`onclick="toggleMenu()"`) are left to
/// it, otherwise one click would toggle twice.
#[must_use]
pub fn binds_toggle(bind_controls: bool, has_inline_handler: bool) -> bool {
    bind_controls && !has_inline_handler
}
