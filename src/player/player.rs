//! Step player for stepping through recorded algorithm runs

use std::time::{Duration, Instant};

use super::step::Step;

/// Default auto-play interval
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(500);

/// Shortest allowed auto-play interval
const MIN_INTERVAL: Duration = Duration::from_millis(50);

/// Longest allowed auto-play interval
const MAX_INTERVAL: Duration = Duration::from_millis(5000);

/// State of step playback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// No steps loaded
    #[default]
    Idle,
    /// Steps loaded, cursor parked, ready for stepping or playback
    Stopped,
    /// Auto-play is advancing the cursor
    Playing,
    /// Auto-play halted mid-run; cursor position preserved
    Paused,
    /// Auto-play reached the last step
    Completed,
}

impl PlaybackState {
    /// Check if auto-play is currently advancing
    pub fn is_playing(&self) -> bool {
        matches!(self, PlaybackState::Playing)
    }

    /// Check if paused mid-run
    pub fn is_paused(&self) -> bool {
        matches!(self, PlaybackState::Paused)
    }

    /// Check if the run reached the end
    pub fn is_completed(&self) -> bool {
        matches!(self, PlaybackState::Completed)
    }

    /// Display name for the state
    pub fn display_name(&self) -> &'static str {
        match self {
            PlaybackState::Idle => "Idle",
            PlaybackState::Stopped => "Ready",
            PlaybackState::Playing => "Playing",
            PlaybackState::Paused => "Paused",
            PlaybackState::Completed => "Completed",
        }
    }
}

/// Result of a manual `next`/`previous` request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// The cursor moved by one step
    Moved,
    /// Already at the first step; cursor unchanged
    AtStart,
    /// Already at the last step; cursor unchanged
    AtEnd,
    /// Auto-play owns the cursor; pause first
    PlaybackActive,
}

/// Player holding an ordered step sequence and a single cursor into it.
///
/// Auto-play is frame-driven: the owning pane calls [`StepPlayer::tick`]
/// once per rendered frame, and the player advances when the configured
/// interval has elapsed. Pausing or replacing the sequence clears the
/// pending tick, so cancellation is synchronous and total — no tick can
/// fire for a cancelled run.
#[derive(Debug)]
pub struct StepPlayer<S> {
    /// Recorded steps, append-only during generation, immutable here
    steps: Vec<Step<S>>,
    /// Cursor into `steps`; 0 <= current < len once any steps exist
    current: usize,
    /// Current playback state
    state: PlaybackState,
    /// Auto-play interval; changes apply to subsequent ticks
    interval: Duration,
    /// Deadline for the next auto-advance (None when not scheduled)
    next_tick_at: Option<Instant>,
}

impl<S> Default for StepPlayer<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> StepPlayer<S> {
    /// Create an empty player
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            current: 0,
            state: PlaybackState::Idle,
            interval: DEFAULT_INTERVAL,
            next_tick_at: None,
        }
    }

    /// Get current playback state
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Check if auto-play is running
    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    /// Number of recorded steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if no steps are loaded
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Current cursor position
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The step under the cursor
    pub fn current_step(&self) -> Option<&Step<S>> {
        self.steps.get(self.current)
    }

    /// Current auto-play interval
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Set the auto-play interval (clamped); applies to subsequent ticks
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval.clamp(MIN_INTERVAL, MAX_INTERVAL);
    }

    /// Playback progress (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        if self.steps.len() < 2 {
            return if self.steps.is_empty() { 0.0 } else { 1.0 };
        }
        self.current as f32 / (self.steps.len() - 1) as f32
    }

    /// Replace the step sequence wholesale.
    ///
    /// Cancels any pending auto-play of the previous sequence; old and new
    /// steps are never merged.
    pub fn load(&mut self, steps: Vec<Step<S>>) {
        self.steps = steps;
        self.current = 0;
        self.next_tick_at = None;
        self.state = if self.steps.is_empty() {
            PlaybackState::Idle
        } else {
            PlaybackState::Stopped
        };
    }

    /// Clear all steps and return to the empty idle state. Idempotent.
    pub fn reset(&mut self) {
        self.steps.clear();
        self.current = 0;
        self.next_tick_at = None;
        self.state = PlaybackState::Idle;
    }

    /// Advance the cursor by one step.
    ///
    /// Rejected while auto-play is running; a no-op at the last step.
    pub fn next(&mut self) -> NavOutcome {
        if self.state.is_playing() {
            return NavOutcome::PlaybackActive;
        }
        if self.current < self.steps.len().saturating_sub(1) {
            self.current += 1;
            NavOutcome::Moved
        } else {
            NavOutcome::AtEnd
        }
    }

    /// Retreat the cursor by one step.
    ///
    /// Rejected while auto-play is running; a no-op at the first step.
    pub fn previous(&mut self) -> NavOutcome {
        if self.state.is_playing() {
            return NavOutcome::PlaybackActive;
        }
        if self.current > 0 {
            self.current -= 1;
            // Stepping back out of a finished run makes it resumable
            if self.state.is_completed() {
                self.state = PlaybackState::Paused;
            }
            NavOutcome::Moved
        } else {
            NavOutcome::AtStart
        }
    }

    /// Begin (or resume) automatic advancement at the given interval.
    ///
    /// No-op with no steps loaded or after the run already completed.
    pub fn play(&mut self, interval: Duration) {
        if self.steps.is_empty() || self.state.is_completed() {
            return;
        }
        self.set_interval(interval);
        self.state = PlaybackState::Playing;
        self.next_tick_at = None;
    }

    /// Resume automatic advancement at the current interval
    pub fn resume(&mut self) {
        let interval = self.interval;
        self.play(interval);
    }

    /// Halt automatic advancement without moving the cursor
    pub fn pause(&mut self) {
        if self.state.is_playing() {
            self.state = PlaybackState::Paused;
            self.next_tick_at = None;
        }
    }

    /// Drive auto-play; call once per rendered frame.
    ///
    /// Returns true if the cursor advanced this call. On reaching the last
    /// step the player stops automatically and marks the run completed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.state.is_playing() {
            return false;
        }

        match self.next_tick_at {
            None => {
                // First tick after play(): schedule, don't advance
                self.next_tick_at = Some(now + self.interval);
                false
            }
            Some(deadline) if now < deadline => false,
            Some(_) => {
                if self.current + 1 >= self.steps.len() {
                    self.state = PlaybackState::Completed;
                    self.next_tick_at = None;
                    return false;
                }

                self.current += 1;
                if self.current + 1 == self.steps.len() {
                    self.state = PlaybackState::Completed;
                    self.next_tick_at = None;
                } else {
                    // Interval is re-read here, so set_interval takes
                    // effect on the following tick
                    self.next_tick_at = Some(now + self.interval);
                }
                true
            }
        }
    }
}
