//! Autoplayer: plans once per spawned piece, then feeds one step per tick.

use log::debug;

use crate::blunder::Blunder;
use crate::core::GameState;
use crate::error::EngineError;
use crate::mover::next_step;
use crate::score::Weights;
use crate::search::{best_placement, Placement};
use crate::types::Step;

#[derive(Debug, Clone, Copy)]
struct Plan {
    piece_id: u32,
    target: Placement,
}

/// Drives a [`GameState`] like a player pressing one button per tick.
#[derive(Debug, Clone, Default)]
pub struct Autoplayer {
    weights: Weights,
    blunder: Option<Blunder>,
    plan: Option<Plan>,
}

impl Autoplayer {
    pub fn new(weights: Weights) -> Self {
        Self {
            weights,
            blunder: None,
            plan: None,
        }
    }

    /// Inject occasional random steps
    pub fn with_blunder(mut self, blunder: Blunder) -> Self {
        self.blunder = Some(blunder);
        self
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    /// Target for the current piece, if one has been planned
    pub fn target(&self) -> Option<&Placement> {
        self.plan.as_ref().map(|p| &p.target)
    }

    /// Forget the current plan (after a reset)
    pub fn clear(&mut self) {
        self.plan = None;
    }

    /// Decide the step for this tick. The game state is only read.
    ///
    /// # Errors
    ///
    /// [`EngineError::NoLegalPlacement`] when the freshly spawned piece has
    /// nowhere to go. The caller ends the game; nothing is retried here.
    pub fn next_step(&mut self, game: &GameState) -> Result<Step, EngineError> {
        if !game.playable() {
            return Ok(Step::Idle);
        }
        let Some(active) = game.active() else {
            return Ok(Step::Idle);
        };

        let target = match self.plan {
            Some(plan) if plan.piece_id == game.piece_id() => plan.target,
            _ => {
                let target = best_placement(game.board(), active.kind, &self.weights)?;
                self.plan = Some(Plan {
                    piece_id: game.piece_id(),
                    target,
                });
                target
            }
        };

        let planned = next_step(game.board(), &active, &target);
        let step = match self.blunder.as_mut() {
            Some(blunder) => blunder.perturb(planned),
            None => planned,
        };
        if step != Step::Idle {
            debug!("piece #{}: {}", game.piece_id(), step.as_str());
        }
        Ok(step)
    }

    /// Plan and apply one step. Ends the game on [`EngineError::NoLegalPlacement`].
    pub fn drive(&mut self, game: &mut GameState) -> Step {
        match self.next_step(game) {
            Ok(step) => {
                game.apply_step(step);
                step
            }
            Err(err) => {
                debug!("{} ({})", err, err.code());
                self.plan = None;
                game.set_game_over();
                Step::Idle
            }
        }
    }
}
