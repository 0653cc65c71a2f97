//! Game-phase classification for phase-dependent heuristics.

/// Coarse measure of how far the game has progressed. Selected once per move
/// from the mover's remaining moves; evaluation functions switch their
/// weighting on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Early,
    Mid,
    Late,
}

impl Phase {
    /// Classify by how many moves the player has left.
    pub fn from_remaining_moves(remaining: u32) -> Phase {
        if remaining > 16 {
            Phase::Early
        } else if remaining > 7 {
            Phase::Mid
        } else {
            Phase::Late
        }
    }
}

#[cfg(test)]
#[path = "phase_tests.rs"]
mod phase_tests;
