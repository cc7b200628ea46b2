//! Scroll-triggered fade-in: decides which elements become visible.
//!
//! Visibility is monotonic. An element is revealed the first time it
//! intersects the (bottom-inset) viewport and is never hidden again; later
//! intersections are no-ops.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

#[derive(Debug, Clone, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: String,
}

impl ObserverOptions {
    /// Options for an observer that fires at `threshold` with the viewport
    /// bottom pulled in by `bottom_inset` pixels.
    #[must_use]
    pub fn new(threshold: f64, bottom_inset: f64) -> Self {
        Self {
            threshold,
            root_margin: format!("0px 0px -{bottom_inset}px 0px"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RevealPlan {
    /// Watch elements and reveal each as it scrolls into view.
    Observe(ObserverOptions),
    /// No intersection detection: show everything now.
    RevealAll,
}

impl RevealPlan {
    #[must_use]
    pub fn choose(observer_supported: bool, options: ObserverOptions) -> Self {
        if observer_supported { Self::Observe(options) } else { Self::RevealAll }
    }
}

/// Visibility flags for a fixed list of targets, indexed by position.
#[derive(Debug, Clone)]
pub struct RevealSet {
    visible: Vec<bool>,
}

impl RevealSet {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { visible: vec![false; len] }
    }

    /// Record an intersection report for target `index`. Returns `true` only
    /// when the target becomes visible for the first time.
    pub fn observe(&mut self, index: usize, is_intersecting: bool) -> bool {
        if !is_intersecting {
            return false;
        }
        match self.visible.get_mut(index) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    /// Mark every target visible. Returns the indices that changed.
    pub fn reveal_all(&mut self) -> Vec<usize> {
        let mut changed = Vec::new();
        for (index, flag) in self.visible.iter_mut().enumerate() {
            if !*flag {
                *flag = true;
                changed.push(index);
            }
        }
        changed
    }

    #[cfg(test)]
    #[must_use]
    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    #[cfg(test)]
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|flag| **flag).count()
    }

    #[cfg(test)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    #[cfg(test)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}
