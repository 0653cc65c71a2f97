//! Error types shared across the workspace.

use thiserror::Error;

/// Contract violations surfaced by agents.
///
/// Deadline overrun is deliberately absent: running out of time is the
/// expected termination signal for a search iteration and degrades to "best
/// action found so far", never to an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The game model enumerated zero actions for a non-terminal state.
    /// Impossible if its terminal test is correct; failing loudly beats
    /// silently returning an arbitrary move.
    #[error("non-terminal state produced no legal actions")]
    NoLegalActions,
    /// A move was requested on a finished game.
    #[error("move requested on a terminal state")]
    TerminalState,
}

/// Failures while loading or saving agent configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}
