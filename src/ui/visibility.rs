//! Global amount-visibility toggle

use crate::format::MASK;

/// Hides money amounts from shoulder surfers; resets to visible per run
#[derive(Debug, Clone, Copy)]
pub struct AmountVisibility {
    visible: bool,
}

impl AmountVisibility {
    pub fn new() -> Self {
        Self { visible: true }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// Pass the formatted amount through, or replace it with the mask
    pub fn cover(&self, formatted: String) -> String {
        if self.visible {
            formatted
        } else {
            MASK.to_string()
        }
    }
}

impl Default for AmountVisibility {
    fn default() -> Self {
        Self::new()
    }
}
