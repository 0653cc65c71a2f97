//! Evaluation contract between a game and the search engine.

use crate::phase::Phase;
use crate::state::{GameState, Player};

/// Score for a state that is a certain win for the perspective player.
pub const WIN_SCORE: i32 = 10_000;

/// Score for a certain loss. Normal evaluations must stay well inside
/// `LOSS_SCORE..=WIN_SCORE` so the sentinels dominate every comparison.
pub const LOSS_SCORE: i32 = -10_000;

/// Maps a state (and the current game phase) to a signed desirability score
/// for the searching player. Pluggable; the engine never looks inside.
pub trait Evaluator<S: GameState> {
    /// Full positional verdict from `perspective`'s point of view.
    fn evaluate(&self, state: &S, phase: Phase, perspective: Player) -> i32;

    /// Cheap ranking key for a not-yet-applied action, used only to order
    /// sibling expansion, never as a substitute for the deeper search
    /// verdict. The default resolves the action and evaluates one ply;
    /// games can override with a lighter proxy such as the immediate score
    /// delta of the move.
    fn rank_action(&self, state: &S, action: &S::Action, phase: Phase, perspective: Player) -> i32 {
        self.evaluate(&state.apply(action), phase, perspective)
    }
}
