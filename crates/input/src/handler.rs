//! Debounced reset button.
//!
//! A physical button bounces, and terminals auto-repeat held keys. Both show up
//! as bursts of presses; only the first press of a burst is forwarded. Time is
//! fed in by the caller so the handler stays deterministic.

use crate::types::GameAction;

/// Presses closer together than this count as one press.
pub const DEFAULT_DEBOUNCE_MS: u32 = 250;

#[derive(Debug, Clone)]
pub struct ButtonHandler {
    debounce_ms: u32,
    /// Time since the last accepted press; `None` until the first press
    since_press_ms: Option<u32>,
}

impl ButtonHandler {
    pub fn new() -> Self {
        Self::with_debounce_ms(DEFAULT_DEBOUNCE_MS)
    }

    pub fn with_debounce_ms(debounce_ms: u32) -> Self {
        Self {
            debounce_ms,
            since_press_ms: None,
        }
    }

    /// Register a press of the button bound to `action`.
    ///
    /// Returns the action if the press is accepted, `None` while debouncing.
    pub fn press(&mut self, action: GameAction) -> Option<GameAction> {
        match self.since_press_ms {
            Some(t) if t < self.debounce_ms => None,
            _ => {
                self.since_press_ms = Some(0);
                Some(action)
            }
        }
    }

    /// Advance the debounce timer.
    pub fn update(&mut self, elapsed_ms: u32) {
        if let Some(t) = self.since_press_ms.as_mut() {
            *t = t.saturating_add(elapsed_ms);
        }
    }
}

impl Default for ButtonHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_press_passes() {
        let mut h = ButtonHandler::new();
        assert_eq!(h.press(GameAction::Reset), Some(GameAction::Reset));
    }

    #[test]
    fn bounce_is_swallowed() {
        let mut h = ButtonHandler::with_debounce_ms(100);
        assert!(h.press(GameAction::Reset).is_some());
        h.update(40);
        assert!(h.press(GameAction::Reset).is_none());
        h.update(40);
        assert!(h.press(GameAction::Reset).is_none());
    }

    #[test]
    fn press_after_window_passes() {
        let mut h = ButtonHandler::with_debounce_ms(100);
        assert!(h.press(GameAction::Pause).is_some());
        h.update(100);
        assert_eq!(h.press(GameAction::Pause), Some(GameAction::Pause));
    }
}
