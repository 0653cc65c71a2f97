//! Random-Move Agent
//!
//! A simple agent that selects uniformly at random from all legal actions.
//! Useful for:
//! - Testing arena infrastructure before pitting real agents
//! - Baseline comparisons (any real agent should easily beat this)
//! - Stress testing a game's action enumeration

use game_core::{Agent, Decision, EngineError, GameState, SearchLimits};
use rand::seq::SliceRandom;
use rand::thread_rng;


/// An agent that plays random legal actions.
///
/// No evaluation, no search: it simply picks one of the enumerated actions.
/// The simplest possible agent, kept as the floor every engine must clear.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomAgent;

impl RandomAgent {
    pub fn new() -> Self {
        Self
    }
}

impl<S: GameState> Agent<S> for RandomAgent {
    fn choose(
        &mut self,
        state: &S,
        _limits: SearchLimits,
    ) -> Result<Decision<S::Action>, EngineError> {
        if state.is_terminal() {
            return Err(EngineError::TerminalState);
        }
        let action = state
            .legal_actions()
            .choose(&mut thread_rng())
            .cloned()
            .ok_or(EngineError::NoLegalActions)?;

        Ok(Decision {
            action,
            score: 0,
            depth: 0,
            nodes: 1,
            table_hits: 0,
            stopped: false,
        })
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}
