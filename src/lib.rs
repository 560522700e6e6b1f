//! # Draughts
//!
//! English draughts (checkers) on an 8×8 board, played from the terminal.
//! Captures are mandatory, men move forward only, kings move both ways, and a
//! capturing piece keeps jumping while it can.
//!
//! ## Modules
//!
//! - [`game`]: Rules engine: board, sides, coordinates, game state machine
//! - [`ui`]: Console front ends: full-screen terminal UI and line console
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
