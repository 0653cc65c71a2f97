pub mod config;
pub mod error;
pub mod evaluator;
pub mod phase;
pub mod state;
pub mod time_control;

pub use config::*;
pub use error::*;
pub use evaluator::*;
pub use phase::Phase;
pub use state::*;
pub use time_control::*;

// =============================================================================
// Agent trait, implemented by all playing agents (minimax, random, etc.)
// =============================================================================

/// Outcome of one move request, with search statistics.
#[derive(Debug, Clone)]
pub struct Decision<A> {
    /// The chosen action, light and not yet applied
    pub action: A,
    /// Score of the chosen action from the agent's perspective
    pub score: i32,
    /// Deepest iteration that produced the retained action
    pub depth: u8,
    /// Number of states expanded during the search
    pub nodes: u64,
    /// Transposition-table hits during the search
    pub table_hits: u64,
    /// Whether the deadline fired during the search
    pub stopped: bool,
}

/// Trait that all playing agents must implement.
///
/// The caller owns the real game: it supplies the current state and a
/// per-move allocation, receives a light action back, and is responsible
/// for applying it to advance the game.
pub trait Agent<S: GameState>: Send {
    /// Pick an action for the state under the given limits.
    ///
    /// Deadline overrun is not an error: as long as the state has legal
    /// actions, an expired clock still yields the best action found so far.
    /// `Err` is reserved for contract violations (`EngineError`).
    fn choose(&mut self, state: &S, limits: SearchLimits)
        -> Result<Decision<S::Action>, EngineError>;

    /// Returns the agent's display name
    fn name(&self) -> &str;

    /// Reset internal state for a new game (clear tables, move counters, etc.)
    fn new_game(&mut self) {}
}
