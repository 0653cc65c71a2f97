//! Match runner for playing games between agents

use std::time::Duration;

use game_core::{Agent, GameState, Player, SearchLimits};
use log::warn;
use tokens_game::TokensState;

use crate::results::{GameOutcome, MatchResult};

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Depth limit for agents
    pub max_depth: u8,
    /// Budget per move (None = each agent uses its own schedule)
    pub time_per_move: Option<Duration>,
    /// Whether to alternate which agent starts each game
    pub alternate_start: bool,
    /// Print progress during the match
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            max_depth: 6,
            time_per_move: Some(Duration::from_millis(100)),
            alternate_start: true,
            verbose: true,
        }
    }
}

impl MatchConfig {
    /// Create search limits based on this config
    fn search_limits(&self) -> SearchLimits {
        match self.time_per_move {
            Some(time) => SearchLimits::depth_and_time(self.max_depth, time),
            None => SearchLimits::depth(self.max_depth),
        }
    }
}

/// Runs matches between two agents on the tokens game
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two agents.
    ///
    /// Returns the result from `first`'s perspective.
    pub fn run_match(
        &self,
        first: &mut dyn Agent<TokensState>,
        second: &mut dyn Agent<TokensState>,
    ) -> MatchResult {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            let first_starts = !self.config.alternate_start || game_num % 2 == 0;

            let outcome = if first_starts {
                self.play_game(first, second)
            } else {
                self.play_game(second, first).flipped()
            };
            result.record(outcome);

            if self.config.verbose {
                let start = if first_starts { "1st" } else { "2nd" };
                let summary = match outcome {
                    GameOutcome::Win => "1-0",
                    GameOutcome::Loss => "0-1",
                    GameOutcome::Draw => "1/2",
                };
                println!(
                    "Game {}/{}: {} ({}) - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    summary,
                    start,
                    result.wins,
                    result.losses,
                    result.draws
                );
            }
        }

        result
    }

    /// Play a single game; the outcome is from the starter's perspective.
    fn play_game<'a>(
        &self,
        starter: &'a mut dyn Agent<TokensState>,
        opponent: &'a mut dyn Agent<TokensState>,
    ) -> GameOutcome {
        let mut state = TokensState::initial();
        starter.new_game();
        opponent.new_game();

        while !state.is_terminal() {
            // Fresh limits for each move (resets the clock)
            let limits = self.config.search_limits();
            let agent = if state.to_move() == Player::One {
                &mut *starter
            } else {
                &mut *opponent
            };

            match agent.choose(&state, limits) {
                Ok(decision) => {
                    state = state.apply(&decision.action);
                }
                Err(e) => {
                    // A contract violation forfeits the game for that side
                    warn!("{} forfeits: {}", agent.name(), e);
                    return if state.to_move() == Player::One {
                        GameOutcome::Loss
                    } else {
                        GameOutcome::Win
                    };
                }
            }
        }

        let starter_score = state.score(Player::One);
        let opponent_score = state.score(Player::Two);
        if starter_score > opponent_score {
            GameOutcome::Win
        } else if starter_score < opponent_score {
            GameOutcome::Loss
        } else {
            GameOutcome::Draw
        }
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    first: &mut dyn Agent<TokensState>,
    second: &mut dyn Agent<TokensState>,
    num_games: u32,
    max_depth: u8,
) -> MatchResult {
    let config = MatchConfig {
        num_games,
        max_depth,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(first, second)
}
