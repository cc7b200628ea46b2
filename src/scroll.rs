//! Smooth anchor scrolling and the header shadow on scroll.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Element id named by a same-page link, or `None` for a bare `#` or a
/// foreign href.
#[must_use]
pub fn anchor_fragment(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll position that puts an element whose document top is `element_top`
/// just below a fixed header of height `header_offset`. Never negative.
#[must_use]
pub fn scroll_target(element_top: f64, header_offset: f64) -> f64 {
    (element_top - header_offset).max(0.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMode {
    Smooth,
    Instant,
}

impl ScrollMode {
    #[must_use]
    pub fn detect(supports_smooth: bool) -> Self {
        if supports_smooth { Self::Smooth } else { Self::Instant }
    }
}

/// Whether the header should carry its shadow at vertical offset `scroll_y`.
#[must_use]
pub fn header_emphasized(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// `box-shadow` value for the header.
#[must_use]
pub fn header_shadow(emphasized: bool, shadow: &str) -> &str {
    if emphasized { shadow } else { "none" }
}

/// Coalesces bursts of scroll events into one update per frame.
///
/// `request` answers whether the caller must schedule an update; further
/// requests are absorbed until the scheduled update calls `complete`.
#[derive(Debug, Default)]
pub struct FrameThrottle {
    pending: bool,
}

impl FrameThrottle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn complete(&mut self) {
        self.pending = false;
    }

    #[cfg(test)]
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
