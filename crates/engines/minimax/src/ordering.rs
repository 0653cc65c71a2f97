//! Best-first move ordering.
//!
//! Every legal light action gets a cheap one-ply ranking key; popping the
//! heap yields actions best-first for the side to move. The key is an
//! ordering heuristic only and never substitutes for the search verdict.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use game_core::{EngineError, Evaluator, GameState, Phase, Player};

/// One enumerated action with its rank. `seq` is the enumeration index:
/// on equal rank the earlier-enumerated action pops first, keeping the
/// search reproducible for a fixed state and depth.
#[derive(Debug)]
struct RankedAction<A> {
    rank: i32,
    seq: u32,
    action: A,
}

impl<A> PartialEq for RankedAction<A> {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank && self.seq == other.seq
    }
}

impl<A> Eq for RankedAction<A> {}

impl<A> PartialOrd for RankedAction<A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<A> Ord for RankedAction<A> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Max-heap on rank; lower seq wins ties
        self.rank
            .cmp(&other.rank)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Priority queue of light actions, best first.
///
/// Popping yields the light action only; resolving it into the next state
/// is the caller's step, deferred so that pruned siblings never pay the
/// full transition cost.
#[derive(Debug)]
pub struct OrderedActions<A> {
    heap: BinaryHeap<RankedAction<A>>,
}

impl<A> OrderedActions<A> {
    /// Next-best action, or None when exhausted.
    pub fn pop(&mut self) -> Option<A> {
        self.heap.pop().map(|ranked| ranked.action)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

/// Rank every legal action of `state`, best-first for the given side.
///
/// The rank is the evaluator's one-ply key, negated for the minimizing side
/// so a single max-heap serves both. Errors with `NoLegalActions` when a
/// non-terminal state enumerates nothing.
pub fn order_actions<S, E>(
    state: &S,
    evaluator: &E,
    phase: Phase,
    perspective: Player,
    maximizing: bool,
) -> Result<OrderedActions<S::Action>, EngineError>
where
    S: GameState,
    E: Evaluator<S>,
{
    let actions = state.legal_actions();
    if actions.is_empty() {
        return Err(EngineError::NoLegalActions);
    }

    let mut heap = BinaryHeap::with_capacity(actions.len());
    for (seq, action) in actions.into_iter().enumerate() {
        let key = evaluator.rank_action(state, &action, phase, perspective);
        let rank = if maximizing { key } else { -key };
        heap.push(RankedAction {
            rank,
            seq: seq as u32,
            action,
        });
    }
    Ok(OrderedActions { heap })
}

#[cfg(test)]
#[path = "ordering_tests.rs"]
mod ordering_tests;
