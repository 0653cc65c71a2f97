//! Arena for the tokens game
//!
//! This crate provides infrastructure for:
//! - Running matches between different agents
//! - Persisting match reports as JSON
//!
//! # Usage
//!
//! ```bash
//! # Run a match between the minimax agent and the random baseline
//! cargo run -p arena -- match minimax random --games 20 --depth 6
//! ```

mod match_runner;
mod results;

pub use match_runner::*;
pub use results::*;
