//! # Gomoku
//!
//! Five-in-a-row on a 15×15 board, for two players at one terminal or one
//! player against a simple automated opponent. Features a terminal UI built
//! with Ratatui.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, player, state machine with undo
//! - [`ai`]: Move-selection policy trait and the center-first random policy
//! - [`ui`]: Terminal UI: board view, input handling, frame loop
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
