//! Agent configuration: search bounds and the per-move time schedule.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// One row of the allocation schedule: the budget when `moves` moves remain.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AllocationSlot {
    pub moves: u32,
    pub secs: f32,
}

/// Per-move wall-clock budget indexed by how many moves the agent has left.
///
/// Early moves get short budgets, the contested middle of the game gets the
/// bulk of the clock, and the forced endgame moves get almost nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeAllocation {
    schedule: Vec<AllocationSlot>,
    /// Applied when the move count falls outside the schedule
    default_secs: f32,
}

impl TimeAllocation {
    pub fn new(schedule: Vec<AllocationSlot>, default_secs: f32) -> Self {
        Self {
            schedule,
            default_secs,
        }
    }

    /// Budget for a move with `moves_remaining` moves left to play.
    pub fn budget_for(&self, moves_remaining: u32) -> Duration {
        let secs = self
            .schedule
            .iter()
            .find(|slot| slot.moves == moves_remaining)
            .map(|slot| slot.secs)
            .unwrap_or(self.default_secs);
        Duration::from_secs_f32(secs.max(0.0))
    }
}

impl Default for TimeAllocation {
    fn default() -> Self {
        let schedule = [
            (20, 12.0),
            (19, 12.0),
            (18, 18.0),
            (17, 24.0),
            (16, 36.0),
            (15, 42.0),
            (14, 66.0),
            (13, 72.0),
            (12, 78.0),
            (11, 96.0),
            (10, 93.0),
            (9, 87.0),
            (8, 87.0),
            (7, 87.0),
            (6, 72.0),
            (5, 6.0),
            (4, 3.0),
            (3, 3.0),
            (2, 3.0),
            (1, 3.0),
        ]
        .iter()
        .map(|&(moves, secs)| AllocationSlot { moves, secs })
        .collect();
        Self {
            schedule,
            default_secs: 3.0,
        }
    }
}

/// Tunable parameters of the iterative-deepening agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Hard cap on iterative-deepening depth, in plies
    pub max_depth: u8,
    /// Depth increment between iterations; 2 keeps the maximizing player's
    /// perspective aligned across iterations
    pub depth_step: u8,
    /// Safety margin subtracted from every scheduled budget
    pub reserve_millis: u64,
    /// Number of moves the agent expects to play in one game
    pub start_moves: u32,
    pub allocation: TimeAllocation,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: 40,
            depth_step: 2,
            reserve_millis: 500,
            start_moves: 20,
            allocation: TimeAllocation::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Scheduled budget for this move, minus the reserve margin.
    pub fn move_budget(&self, moves_remaining: u32) -> Duration {
        self.allocation
            .budget_for(moves_remaining)
            .saturating_sub(Duration::from_millis(self.reserve_millis))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
