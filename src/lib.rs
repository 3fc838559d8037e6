//! # AlgoViz: Step-Driven Algorithm Visualizer
//!
//! An educational desktop tool that animates classic algorithms step by
//! step: binary search, merge sort, two-pointer string reversal, and the
//! Sieve of Eratosthenes, plus a freeform block-graph toy.
//!
//! ## Architecture
//!
//! - **Generators**: Each algorithm runs to completion up front and records
//!   a step sequence of immutable snapshots with narration text
//! - **Player**: [`StepPlayer`](player::StepPlayer) holds one sequence and a
//!   cursor, with manual stepping and frame-driven auto-play
//! - **Frontend**: Renders the UI using eframe/egui with an egui_dock
//!   workspace; each visualizer pane owns its player
//!
//! ## Configuration
//!
//! UI preferences are stored in the platform-appropriate data directory
//! under `dev.algoviz.algoviz`:
//!
//! - **Linux**: `~/.local/share/dev.algoviz.algoviz/`
//! - **macOS**: `~/Library/Application Support/dev.algoviz.algoviz/`
//! - **Windows**: `%APPDATA%\dev.algoviz.algoviz\`
//!
//! ## Example
//!
//! ```
//! use std::time::{Duration, Instant};
//!
//! use algoviz::algorithms::binary_search;
//! use algoviz::player::StepPlayer;
//!
//! let steps = binary_search::generate(&[10, 20, 30, 40, 50], 30);
//! let mut player = StepPlayer::new();
//! player.load(steps);
//!
//! player.play(Duration::from_millis(100));
//! player.tick(Instant::now());
//! ```

pub mod algorithms;
pub mod config;
pub mod error;
pub mod frontend;
pub mod graph;
pub mod player;

// Re-export commonly used types
pub use config::{AppState, UiPreferences};
pub use error::{AlgoVizError, Result};
pub use frontend::AlgoVizApp;
pub use graph::{Block, BlockGraph, BlockId};
pub use player::{NavOutcome, PlaybackState, Step, StepPlayer};
