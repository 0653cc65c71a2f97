//! Engine-level tests through the public `Agent` API, played on the tokens
//! game.

use std::time::Duration;

use game_core::{Agent, EngineConfig, EngineError, GameState, Phase, Player, SearchLimits};
use minimax_engine::MinimaxEngine;
use tokens_game::{Color, Placement, TokensEvaluator, TokensState};

fn engine_with_depth(max_depth: u8) -> MinimaxEngine<TokensState, TokensEvaluator> {
    let config = EngineConfig {
        max_depth,
        depth_step: 2,
        reserve_millis: 0,
        ..Default::default()
    };
    MinimaxEngine::with_config(TokensEvaluator, config)
}

fn full_board() -> TokensState {
    let mut state = TokensState::initial();
    let colors = [Color::Red, Color::Green, Color::Blue, Color::Yellow];
    for cell in 0..tokens_game::BOARD_CELLS {
        state = state.apply(&Placement {
            color: colors[(cell / 2) % 4],
            cell,
        });
    }
    state
}

#[test]
fn test_choose_returns_legal_action() {
    let mut engine = engine_with_depth(4);
    let state = TokensState::initial();

    let decision = engine
        .choose(&state, SearchLimits::depth_and_time(4, Duration::from_millis(500)))
        .unwrap();

    assert!(state.legal_actions().contains(&decision.action));
    assert!(decision.nodes > 0);
    assert!(decision.depth >= 1);
}

#[test]
fn test_choose_is_deterministic() {
    let state = TokensState::initial();
    let limits = || SearchLimits::depth(3);

    let first = engine_with_depth(3).choose(&state, limits()).unwrap();
    let second = engine_with_depth(3).choose(&state, limits()).unwrap();

    assert_eq!(first.action, second.action);
    assert_eq!(first.score, second.score);
    assert_eq!(first.nodes, second.nodes);
}

#[test]
fn test_zero_budget_still_yields_action() {
    let mut engine = engine_with_depth(6);
    let state = TokensState::initial();

    let decision = engine
        .choose(&state, SearchLimits::depth_and_time(6, Duration::ZERO))
        .unwrap();

    assert!(state.legal_actions().contains(&decision.action));
    assert!(decision.stopped);
}

#[test]
fn test_terminal_state_is_rejected() {
    let mut engine = engine_with_depth(4);
    let state = full_board();
    assert!(state.is_terminal());

    let result = engine.choose(&state, SearchLimits::depth(2));
    assert_eq!(result.unwrap_err(), EngineError::TerminalState);
}

#[test]
fn test_table_and_counter_persist_across_moves() {
    let mut engine = engine_with_depth(4);
    let mut state = TokensState::initial();
    assert_eq!(engine.remaining_moves(), 20);

    let first = engine.choose(&state, SearchLimits::depth(3)).unwrap();
    let after_first = engine.table_len();
    assert!(after_first > 0);
    assert_eq!(engine.remaining_moves(), 19);

    state = state.apply(&first.action);
    let reply = engine.choose(&state, SearchLimits::depth(3)).unwrap();
    assert!(state.legal_actions().contains(&reply.action));
    // Earlier search work stays available to later moves
    assert!(engine.table_len() >= after_first);
    assert_eq!(engine.remaining_moves(), 18);
}

#[test]
fn test_new_game_resets_state() {
    let mut engine = engine_with_depth(4);
    let state = TokensState::initial();
    engine.choose(&state, SearchLimits::depth(3)).unwrap();
    assert!(engine.table_len() > 0);

    engine.new_game();
    assert_eq!(engine.table_len(), 0);
    assert_eq!(engine.remaining_moves(), 20);
    assert_eq!(engine.phase(), Phase::Early);
}

#[test]
fn test_phase_follows_remaining_moves() {
    let mut engine = engine_with_depth(2);
    let state = TokensState::initial();
    // Full hand of 8 means the mover is already past the early thresholds
    engine.choose(&state, SearchLimits::depth(1)).unwrap();
    assert_eq!(engine.phase(), Phase::Mid);
    assert_eq!(
        Phase::from_remaining_moves(state.remaining_moves(state.to_move())),
        Phase::Mid
    );
}

#[test]
fn test_schedule_budget_applies_when_no_move_time() {
    // With no caller-supplied budget the engine arms its own schedule;
    // near the end of the schedule budgets are tiny, so the move returns
    // quickly and still legally.
    let config = EngineConfig {
        max_depth: 4,
        start_moves: 1,
        reserve_millis: 2_990,
        ..Default::default()
    };
    let mut engine = MinimaxEngine::with_config(TokensEvaluator, config);
    let state = TokensState::initial();

    let decision = engine.choose(&state, SearchLimits::depth(4)).unwrap();
    assert!(state.legal_actions().contains(&decision.action));
}

#[test]
fn test_deeper_choice_not_worse_on_final_exchange() {
    // Hand the engine a nearly-finished game where the margin is decided by
    // the last placements; the depth-3 verdict of the depth-3 choice must be
    // at least that of the depth-1 choice.
    let mut state = TokensState::initial();
    for (color, cell) in [
        (Color::Red, 0),
        (Color::Red, 8),
        (Color::Green, 2),
        (Color::Green, 6),
        (Color::Blue, 4),
        (Color::Blue, 3),
    ] {
        state = state.apply(&Placement { color, cell });
    }

    let shallow = engine_with_depth(1)
        .choose(&state, SearchLimits::depth(1))
        .unwrap();
    let deep = engine_with_depth(3)
        .choose(&state, SearchLimits::depth(3))
        .unwrap();

    let verdict = |action: &Placement| {
        minimax_value(&state.apply(action), 2, false, state.to_move())
    };
    assert!(verdict(&deep.action) >= verdict(&shallow.action));
}

/// Unpruned reference minimax over the tokens game, scored by the late-game
/// evaluation.
fn minimax_value(state: &TokensState, depth: u8, maximizing: bool, perspective: Player) -> i32 {
    use game_core::Evaluator;

    if depth == 0 || state.is_terminal() {
        return TokensEvaluator.evaluate(state, Phase::Late, perspective);
    }
    let scores = state
        .legal_actions()
        .iter()
        .map(|action| minimax_value(&state.apply(action), depth - 1, !maximizing, perspective))
        .collect::<Vec<_>>();
    if maximizing {
        *scores.iter().max().unwrap()
    } else {
        *scores.iter().min().unwrap()
    }
}
