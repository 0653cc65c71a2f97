//! Game-side contract consumed by the search engine.
//!
//! The board representation, legality rules, and score bookkeeping live with
//! the game crate; the engine only sees them through the [`GameState`] trait.

use std::collections::hash_map::DefaultHasher;
use std::fmt::Debug;
use std::hash::{Hash, Hasher};

/// One of the two players in a zero-sum, perfect-information game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

/// An immutable-per-ply snapshot of a two-player game.
///
/// States are never mutated in place: [`GameState::apply`] produces a new
/// value. `Action` is the *light* flavor: cheap to enumerate and rank;
/// resolving it into the next state via `apply` is the expensive step and is
/// deferred until an action is actually chosen for descent.
pub trait GameState: Clone + Eq + Hash {
    type Action: Clone + Debug;

    /// Player whose turn it is
    fn to_move(&self) -> Player;

    /// True once the game is over
    fn is_terminal(&self) -> bool;

    /// Current score of the given player
    fn score(&self, player: Player) -> i32;

    /// Every legal light action for the player to move. Must be non-empty
    /// whenever the state is not terminal.
    fn legal_actions(&self) -> Vec<Self::Action>;

    /// Resolve a light action into the resulting state
    fn apply(&self, action: &Self::Action) -> Self;

    /// How many moves the given player has left to play; drives phase
    /// selection and the time-allocation schedule
    fn remaining_moves(&self, player: Player) -> u32;
}

/// Stable identity of a state, used as the transposition-table key.
///
/// Two game-equivalent states (same configuration reached via different move
/// orders) must hash identically for table reuse to be sound, and two
/// distinct states hashing equal is an unrecoverable collision. Both are
/// preconditions on the implementor's `Hash`, not defended against here.
pub fn state_key<S: GameState>(state: &S) -> u64 {
    let mut hasher = DefaultHasher::new();
    state.hash(&mut hasher);
    hasher.finish()
}
