//! Deliberate mistakes for "imperfect" autoplay.
//!
//! Kept outside move selection so that [`crate::mover::next_step`] stays
//! deterministic. The caller decides whether to plug one in.

use log::debug;

use crate::core::SimpleRng;
use crate::types::Step;

/// Steps a blunder can pick from. Illegal picks are rejected by the game state.
const BLUNDER_STEPS: [Step; 4] = [
    Step::Idle,
    Step::RotateCw { kick: 0 },
    Step::MoveLeft,
    Step::MoveRight,
];

/// Replaces the planned step with a random one `pct` percent of the time.
#[derive(Debug, Clone)]
pub struct Blunder {
    pct: u8,
    rng: SimpleRng,
}

impl Blunder {
    pub fn new(pct: u8, seed: u32) -> Self {
        Self {
            pct: pct.min(100),
            rng: SimpleRng::new(seed),
        }
    }

    pub fn pct(&self) -> u8 {
        self.pct
    }

    pub fn perturb(&mut self, planned: Step) -> Step {
        if !self.rng.chance_pct(self.pct) {
            return planned;
        }
        let step = BLUNDER_STEPS[self.rng.next_range(BLUNDER_STEPS.len() as u32) as usize];
        debug!("blunder: {} instead of {}", step.as_str(), planned.as_str());
        step
    }
}
