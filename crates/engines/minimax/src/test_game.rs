//! Hand-built game trees for exercising the search in tests.

use std::cell::Cell;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use game_core::{Evaluator, GameState, Phase, Player};

/// An explicit game tree: node 0 is the root, `children[id]` lists child
/// node ids, `values[id]` is the static evaluation of the node from player
/// One's point of view. A node with no children is terminal.
#[derive(Debug)]
pub struct Tree {
    pub children: Vec<Vec<usize>>,
    pub values: Vec<i32>,
}

impl Tree {
    /// Full `branching`-ary tree of the given depth, nodes in breadth-first
    /// order, with deterministic scrambled values.
    pub fn uniform(depth: u32, branching: usize) -> Tree {
        let mut children: Vec<Vec<usize>> = Vec::new();
        let mut frontier = vec![0usize];
        children.push(Vec::new());
        for _ in 0..depth {
            let mut next_frontier = Vec::new();
            for id in frontier {
                for _ in 0..branching {
                    let child_id = children.len();
                    children.push(Vec::new());
                    children[id].push(child_id);
                    next_frontier.push(child_id);
                }
            }
            frontier = next_frontier;
        }
        let values = (0..children.len())
            .map(|id| ((id * 37 + 11) % 21) as i32 - 10)
            .collect();
        Tree { children, values }
    }
}

/// Position in a [`Tree`]. Identity (hash/eq) is the node id alone, which is
/// exact here because every node is reachable by a single path.
#[derive(Clone, Debug)]
pub struct TreeState {
    tree: Rc<Tree>,
    pub id: usize,
    to_move: Player,
}

impl TreeState {
    pub fn root(tree: Tree) -> TreeState {
        TreeState {
            tree: Rc::new(tree),
            id: 0,
            to_move: Player::One,
        }
    }
}

impl PartialEq for TreeState {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TreeState {}

impl Hash for TreeState {
    fn hash<H: Hasher>(&self, hasher: &mut H) {
        self.id.hash(hasher);
    }
}

impl GameState for TreeState {
    type Action = usize;

    fn to_move(&self) -> Player {
        self.to_move
    }

    fn is_terminal(&self) -> bool {
        self.tree.children[self.id].is_empty()
    }

    fn score(&self, player: Player) -> i32 {
        let value = self.tree.values[self.id];
        if player == Player::One {
            value
        } else {
            -value
        }
    }

    fn legal_actions(&self) -> Vec<usize> {
        (0..self.tree.children[self.id].len()).collect()
    }

    fn apply(&self, action: &usize) -> TreeState {
        TreeState {
            tree: Rc::clone(&self.tree),
            id: self.tree.children[self.id][*action],
            to_move: self.to_move.other(),
        }
    }

    fn remaining_moves(&self, _player: Player) -> u32 {
        4
    }
}

/// Reads the node's static value; counts calls so tests can assert that a
/// position was not re-evaluated.
#[derive(Debug, Default)]
pub struct TreeEval {
    pub calls: Cell<u64>,
}

impl Evaluator<TreeState> for TreeEval {
    fn evaluate(&self, state: &TreeState, _phase: Phase, perspective: Player) -> i32 {
        self.calls.set(self.calls.get() + 1);
        state.score(perspective)
    }
}

/// Exhaustive unpruned minimax over the same tree, the reference for
/// pruning-correctness checks.
pub fn reference_minimax(state: &TreeState, depth: u8, maximizing: bool) -> i32 {
    if depth == 0 || state.is_terminal() {
        return state.score(Player::One);
    }
    let actions = state.legal_actions();
    let scores = actions
        .iter()
        .map(|action| reference_minimax(&state.apply(action), depth - 1, !maximizing));
    if maximizing {
        scores.max().unwrap()
    } else {
        scores.min().unwrap()
    }
}
