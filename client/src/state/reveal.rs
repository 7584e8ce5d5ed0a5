//! One-time entrance visibility per section.
//!
//! A section starts hidden and is revealed the first time enough of it
//! enters the viewport. It never hides again, so entrance animations run once.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Visible fraction that reveals the about and skills sections.
pub const AMOUNT_WIDE: f64 = 0.2;
/// Visible fraction that reveals the taller list sections.
pub const AMOUNT_TALL: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reveal {
    pub amount: f64,
    pub revealed: bool,
}

impl Reveal {
    #[must_use]
    pub fn new(amount: f64) -> Self {
        Self { amount: amount.clamp(0.0, 1.0), revealed: false }
    }

    /// Feed an intersection ratio. Returns `true` on the single transition
    /// from hidden to revealed.
    pub fn observe(&mut self, visible_ratio: f64) -> bool {
        if self.revealed || visible_ratio <= 0.0 || visible_ratio < self.amount {
            return false;
        }
        self.revealed = true;
        true
    }

    /// Class pair toggled by `style/main.css` to play the entrance transition.
    #[must_use]
    pub fn class(&self, base: &str) -> String {
        if self.revealed { format!("{base} is-visible") } else { format!("{base} is-hidden") }
    }
}
