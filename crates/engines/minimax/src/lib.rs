//! Iterative-deepening minimax agent.
//!
//! Time-bounded adversarial search: repeated alpha-beta passes at increasing
//! depth under a hard wall-clock budget, a transposition table shared across
//! iterations and across the moves of one game, and best-first move ordering
//! driven by the game's phase-dependent evaluator. Interrupting the clock
//! mid-tree still returns the best action found so far.

mod ordering;
mod search;
mod table;

pub use ordering::{order_actions, OrderedActions};
pub use table::{TranspositionEntry, TranspositionTable};

use game_core::{
    Agent, Decision, EngineConfig, EngineError, Evaluator, GameState, Phase, SearchLimits,
};
use log::debug;

use search::{alpha_beta, SearchContext};

#[cfg(test)]
mod test_game;

/// Iterative-deepening alpha-beta agent.
///
/// One instance plays one side of one game at a time: the transposition
/// table, the phase, and the moves-remaining counter persist across
/// successive `choose` calls and are reset by `new_game`. Not safe to share
/// between two concurrent searches.
pub struct MinimaxEngine<S: GameState, E: Evaluator<S>> {
    evaluator: E,
    config: EngineConfig,
    table: TranspositionTable<S::Action>,
    remaining_moves: u32,
    phase: Phase,
}

impl<S, E> MinimaxEngine<S, E>
where
    S: GameState,
    E: Evaluator<S>,
{
    pub fn new(evaluator: E) -> Self {
        Self::with_config(evaluator, EngineConfig::default())
    }

    pub fn with_config(evaluator: E, config: EngineConfig) -> Self {
        let remaining_moves = config.start_moves;
        Self {
            evaluator,
            config,
            table: TranspositionTable::new(),
            remaining_moves,
            phase: Phase::Early,
        }
    }

    /// Phase selected for the most recent move.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Moves left on the allocation schedule.
    pub fn remaining_moves(&self) -> u32 {
        self.remaining_moves
    }

    /// Number of states currently cached.
    pub fn table_len(&self) -> usize {
        self.table.len()
    }

    /// Final limits for this move: a caller-supplied budget wins, otherwise
    /// the allocation schedule for the current move counter. Depth is capped
    /// by the configured maximum either way.
    fn arm_limits(&self, limits: &SearchLimits) -> SearchLimits {
        let depth = limits.depth.min(self.config.max_depth);
        let move_time = limits
            .move_time
            .unwrap_or_else(|| self.config.move_budget(self.remaining_moves));
        SearchLimits::depth_and_time(depth, move_time)
    }

    fn iterative_deepening(
        &mut self,
        state: &S,
        limits: &SearchLimits,
    ) -> Result<Decision<S::Action>, EngineError> {
        let step = self.config.depth_step.max(1);
        let max_depth = limits.depth.max(1);

        let mut ctx = SearchContext {
            evaluator: &self.evaluator,
            table: &mut self.table,
            clock: &limits.time_control,
            phase: self.phase,
            perspective: state.to_move(),
            nodes: 0,
            table_hits: 0,
        };

        let mut best: Option<(i32, S::Action)> = None;
        let mut best_depth = 0u8;
        let mut depth = 1u8;

        // The first iteration always runs; even with an expired clock it
        // degrades to the one-ply fallback inside the search. Deeper partial
        // results replace shallower complete ones.
        loop {
            let (score, action) =
                alpha_beta(&mut ctx, state, depth, i32::MIN / 2, i32::MAX / 2, true)?;
            if let Some(action) = action {
                debug!("depth {}: score {} after {} nodes", depth, score, ctx.nodes);
                best = Some((score, action));
                best_depth = depth;
            }

            let next = depth.saturating_add(step);
            if next > max_depth || limits.time_control.check_time() {
                break;
            }
            depth = next;
        }

        let (score, action) = best.ok_or(EngineError::NoLegalActions)?;
        Ok(Decision {
            action,
            score,
            depth: best_depth,
            nodes: ctx.nodes,
            table_hits: ctx.table_hits,
            stopped: limits.time_control.is_stopped(),
        })
    }
}

impl<S, E> Agent<S> for MinimaxEngine<S, E>
where
    S: GameState,
    S::Action: Send,
    E: Evaluator<S> + Send,
{
    fn choose(
        &mut self,
        state: &S,
        limits: SearchLimits,
    ) -> Result<Decision<S::Action>, EngineError> {
        if state.is_terminal() {
            return Err(EngineError::TerminalState);
        }

        self.phase = Phase::from_remaining_moves(state.remaining_moves(state.to_move()));
        let limits = self.arm_limits(&limits);
        limits.start();

        let decision = self.iterative_deepening(state, &limits)?;
        self.remaining_moves = self.remaining_moves.saturating_sub(1);

        debug!(
            "chose {:?} at depth {} ({} nodes, {} table hits, {:?} elapsed)",
            decision.action,
            decision.depth,
            decision.nodes,
            decision.table_hits,
            limits.time_control.elapsed()
        );
        Ok(decision)
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.table.clear();
        self.remaining_moves = self.config.start_moves;
        self.phase = Phase::Early;
    }
}
