//! Tokens: a small two-player placement game.
//!
//! Nine cells in a row; each player holds two tokens of each of four colors
//! and drops one per turn onto a free cell. A placement scores one point,
//! two extra per same-color neighbor, and a five-point "rainbow" bonus for
//! landing between two neighbors of two other distinct colors. The game
//! ends when the board is full or the mover's hand is empty.
//!
//! This crate is the engine's external collaborator: it owns the board,
//! legality, and score bookkeeping, and exposes them only through the
//! `GameState` and `Evaluator` traits.

use game_core::{Evaluator, GameState, Phase, Player, LOSS_SCORE, WIN_SCORE};

pub const BOARD_CELLS: usize = 9;
pub const COPIES_PER_COLOR: u8 = 2;
const COLOR_COUNT: usize = 4;
const CENTER_CELLS: [usize; 3] = [3, 4, 5];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
}

impl Color {
    pub const ALL: [Color; COLOR_COUNT] = [Color::Red, Color::Green, Color::Blue, Color::Yellow];

    pub fn idx(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Green => 1,
            Color::Blue => 2,
            Color::Yellow => 3,
        }
    }
}

/// Light action: drop one `color` token on `cell`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    pub color: Color,
    pub cell: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub color: Color,
    pub owner: Player,
}

/// Full game position: board, hands, running scores, side to move.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TokensState {
    cells: [Option<Token>; BOARD_CELLS],
    hands: [[u8; COLOR_COUNT]; 2],
    scores: [i32; 2],
    to_move: Player,
}

impl TokensState {
    pub fn initial() -> TokensState {
        TokensState {
            cells: [None; BOARD_CELLS],
            hands: [[COPIES_PER_COLOR; COLOR_COUNT]; 2],
            scores: [0; 2],
            to_move: Player::One,
        }
    }

    pub fn token_at(&self, cell: usize) -> Option<Token> {
        self.cells[cell]
    }

    pub fn hand(&self, player: Player) -> [u8; COLOR_COUNT] {
        self.hands[player.idx()]
    }

    fn hand_size(&self, player: Player) -> u32 {
        self.hands[player.idx()].iter().map(|&n| n as u32).sum()
    }

    fn board_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    fn neighbors(cell: usize) -> impl Iterator<Item = usize> {
        let left = cell.checked_sub(1);
        let right = if cell + 1 < BOARD_CELLS {
            Some(cell + 1)
        } else {
            None
        };
        left.into_iter().chain(right)
    }

    /// Points the placement scores immediately, on the pre-placement board.
    pub fn placement_gain(&self, placement: &Placement) -> i32 {
        let mut gain = 1;
        let mut neighbor_colors = Vec::with_capacity(2);
        for neighbor in Self::neighbors(placement.cell) {
            if let Some(token) = self.cells[neighbor] {
                if token.color == placement.color {
                    gain += 2;
                }
                neighbor_colors.push(token.color);
            }
        }
        // Rainbow: both neighbors present, three pairwise distinct colors
        if let [left, right] = neighbor_colors[..] {
            if left != right && left != placement.color && right != placement.color {
                gain += 5;
            }
        }
        gain
    }
}

impl Default for TokensState {
    fn default() -> Self {
        Self::initial()
    }
}

impl GameState for TokensState {
    type Action = Placement;

    fn to_move(&self) -> Player {
        self.to_move
    }

    fn is_terminal(&self) -> bool {
        self.board_full() || self.hand_size(self.to_move) == 0
    }

    fn score(&self, player: Player) -> i32 {
        self.scores[player.idx()]
    }

    fn legal_actions(&self) -> Vec<Placement> {
        let hand = self.hands[self.to_move.idx()];
        let mut actions = Vec::new();
        for color in Color::ALL {
            if hand[color.idx()] == 0 {
                continue;
            }
            for cell in 0..BOARD_CELLS {
                if self.cells[cell].is_none() {
                    actions.push(Placement { color, cell });
                }
            }
        }
        actions
    }

    fn apply(&self, action: &Placement) -> TokensState {
        let mover = self.to_move;
        let mut next = self.clone();
        next.scores[mover.idx()] += self.placement_gain(action);
        next.cells[action.cell] = Some(Token {
            color: action.color,
            owner: mover,
        });
        next.hands[mover.idx()][action.color.idx()] -= 1;
        next.to_move = mover.other();
        next
    }

    fn remaining_moves(&self, player: Player) -> u32 {
        self.hand_size(player)
    }
}

/// Phase-switched heuristic for the tokens game.
///
/// Early play rewards keeping the hand balanced and taking the center, the
/// midgame chases rainbow setups while avoiding self-blocked tokens, and the
/// endgame cares about nothing but the final margin.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokensEvaluator;

impl TokensEvaluator {
    fn score_difference(state: &TokensState, perspective: Player) -> i32 {
        state.score(perspective) - state.score(perspective.other())
    }

    /// Spread between the most- and least-stocked color in the hand; an even
    /// spend scores higher.
    fn variety_balance(state: &TokensState, perspective: Player) -> i32 {
        let hand = state.hand(perspective);
        let max = *hand.iter().max().unwrap_or(&0) as i32;
        let min = *hand.iter().min().unwrap_or(&0) as i32;
        3 - (max - min)
    }

    fn center_occupancy(state: &TokensState, perspective: Player) -> i32 {
        CENTER_CELLS
            .iter()
            .filter_map(|&cell| state.token_at(cell))
            .filter(|token| token.owner == perspective)
            .count() as i32
    }

    /// Tokens that can still become part of a rainbow: a free side and no
    /// same-color neighbor. Counted for both sides, own minus opponent's.
    fn rainbow_potential(state: &TokensState, player: Player) -> i32 {
        let mut open = 0;
        for cell in 0..BOARD_CELLS {
            let token = match state.token_at(cell) {
                Some(token) if token.owner == player => token,
                _ => continue,
            };
            let mut has_free_side = false;
            let mut blocked = false;
            for neighbor in TokensState::neighbors(cell) {
                match state.token_at(neighbor) {
                    Some(other) if other.color == token.color => blocked = true,
                    Some(_) => {}
                    None => has_free_side = true,
                }
            }
            if has_free_side && !blocked {
                open += 2;
            }
        }
        open
    }

    /// Tokens already sitting next to a same-color token.
    fn blocked_tokens(state: &TokensState, player: Player) -> i32 {
        let mut blocked = 0;
        for cell in 0..BOARD_CELLS {
            let token = match state.token_at(cell) {
                Some(token) if token.owner == player => token,
                _ => continue,
            };
            let same_color_neighbor = TokensState::neighbors(cell).any(|neighbor| {
                state
                    .token_at(neighbor)
                    .is_some_and(|other| other.color == token.color)
            });
            if same_color_neighbor {
                blocked += 1;
            }
        }
        blocked
    }
}

impl Evaluator<TokensState> for TokensEvaluator {
    fn evaluate(&self, state: &TokensState, phase: Phase, perspective: Player) -> i32 {
        match phase {
            Phase::Early => {
                Self::variety_balance(state, perspective)
                    + Self::center_occupancy(state, perspective)
                    + Self::score_difference(state, perspective)
            }
            Phase::Mid => {
                Self::rainbow_potential(state, perspective)
                    - Self::rainbow_potential(state, perspective.other())
                    - Self::blocked_tokens(state, perspective)
                    + Self::score_difference(state, perspective)
            }
            Phase::Late => {
                if state.is_terminal() {
                    let margin = Self::score_difference(state, perspective);
                    if margin > 0 {
                        WIN_SCORE
                    } else if margin < 0 {
                        LOSS_SCORE
                    } else {
                        0
                    }
                } else {
                    Self::score_difference(state, perspective)
                }
            }
        }
    }

    /// Immediate score delta of the placement, signed from `perspective`;
    /// a proxy cheap enough to skip the full state transition.
    fn rank_action(
        &self,
        state: &TokensState,
        action: &Placement,
        _phase: Phase,
        perspective: Player,
    ) -> i32 {
        let gain = state.placement_gain(action);
        if state.to_move() == perspective {
            gain
        } else {
            -gain
        }
    }
}
