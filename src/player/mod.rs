//! Step recording and playback
//!
//! Every visualizer produces an ordered sequence of immutable [`Step`]s
//! (algorithm snapshot + narration) and hands it to a [`StepPlayer`],
//! which owns the cursor and drives manual stepping and timed auto-play.
//!
//! # Main Types
//!
//! - [`Step`] - One observable moment of an algorithm's execution
//! - [`StepPlayer`] - Cursor, playback state, and auto-play timing
//! - [`PlaybackState`] - Idle / Stopped / Playing / Paused / Completed
//! - [`NavOutcome`] - Result of a manual `next`/`previous` request

mod step;

#[allow(clippy::module_inception)]
mod player;

pub use player::{NavOutcome, PlaybackState, StepPlayer, DEFAULT_INTERVAL};
pub use step::Step;
