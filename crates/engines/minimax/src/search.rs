//! Depth-bounded minimax with alpha-beta pruning.

use game_core::{state_key, EngineError, Evaluator, GameState, Phase, Player, TimeControl};

use crate::ordering::order_actions;
use crate::table::{TranspositionEntry, TranspositionTable};

/// Mutable search state threaded through the recursion. One context lives
/// for one top-level move request; its counters become the decision stats.
pub(crate) struct SearchContext<'a, S: GameState, E: Evaluator<S>> {
    pub evaluator: &'a E,
    pub table: &'a mut TranspositionTable<S::Action>,
    pub clock: &'a TimeControl,
    pub phase: Phase,
    pub perspective: Player,
    pub nodes: u64,
    pub table_hits: u64,
}

/// Recursive alpha-beta search.
///
/// Returns the minimax score of `state` looking `depth` plies ahead and the
/// action achieving it (None for leaf evaluations). The state is read-only
/// throughout; the only side effect is one table write per distinct state
/// visited.
///
/// The deadline is polled once before popping each child. When it fires the
/// node returns the best action among children visited so far; if it fired
/// before any child was visited, the single best-ordered child is scored by
/// one-ply evaluation instead, so a non-terminal node with legal actions
/// never reports "no action".
pub(crate) fn alpha_beta<S, E>(
    ctx: &mut SearchContext<'_, S, E>,
    state: &S,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
) -> Result<(i32, Option<S::Action>), EngineError>
where
    S: GameState,
    E: Evaluator<S>,
{
    let key = state_key(state);

    // Sole reuse rule: an entry recorded at this depth or deeper is returned
    // verbatim, no partial reuse across mismatched depths.
    if let Some(entry) = ctx.table.probe(key, depth) {
        ctx.table_hits += 1;
        return Ok((entry.score, entry.action.clone()));
    }

    if depth == 0 || state.is_terminal() {
        let score = ctx.evaluator.evaluate(state, ctx.phase, ctx.perspective);
        ctx.table.store(
            key,
            TranspositionEntry {
                depth,
                score,
                action: None,
            },
        );
        return Ok((score, None));
    }

    let mut ordered = order_actions(state, ctx.evaluator, ctx.phase, ctx.perspective, maximizing)?;

    let mut best_score = if maximizing { i32::MIN + 1 } else { i32::MAX - 1 };
    let mut best_action: Option<S::Action> = None;

    while !ctx.clock.check_time() {
        let action = match ordered.pop() {
            Some(action) => action,
            None => break,
        };
        let child = state.apply(&action);
        ctx.nodes += 1;

        let (score, _) = alpha_beta(ctx, &child, depth - 1, alpha, beta, !maximizing)?;

        if maximizing {
            if score > best_score {
                best_score = score;
                best_action = Some(action);
                alpha = alpha.max(best_score);
            }
        } else if score < best_score {
            best_score = score;
            best_action = Some(action);
            beta = beta.min(best_score);
        }

        if alpha >= beta {
            break; // hard cutoff: remaining ordered children are never visited
        }
    }

    // Deadline fired before the first child: fall back to the best-ordered
    // child by one-ply evaluation rather than returning no action.
    if best_action.is_none() {
        if let Some(action) = ordered.pop() {
            let child = state.apply(&action);
            best_score = ctx.evaluator.evaluate(&child, ctx.phase, ctx.perspective);
            best_action = Some(action);
        }
    }

    // Also written on cutoff and deadline exits, so partial results stay
    // reusable at equal-or-shallower depth.
    ctx.table.store(
        key,
        TranspositionEntry {
            depth,
            score: best_score,
            action: best_action.clone(),
        },
    );
    Ok((best_score, best_action))
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
