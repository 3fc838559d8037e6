//! Integration tests for generator-to-player playback
//!
//! Drives real generated step sequences through a StepPlayer the way a
//! pane does: load, manual stepping, auto-play ticks, and reset.

use std::time::{Duration, Instant};

use algoviz::algorithms::{binary_search, merge_sort, sieve, two_pointer};
use algoviz::player::{NavOutcome, PlaybackState, StepPlayer};

#[test]
fn test_binary_search_manual_walkthrough() {
    let array = [2, 5, 8, 12, 16, 23, 38, 56, 72, 91];
    let steps = binary_search::generate(&array, 23);
    let total = steps.len();

    let mut player = StepPlayer::new();
    player.load(steps);
    assert_eq!(player.state(), PlaybackState::Stopped);

    // Walk forward through every step
    for expected in 1..total {
        assert_eq!(player.next(), NavOutcome::Moved);
        assert_eq!(player.current_index(), expected);
    }
    assert_eq!(player.next(), NavOutcome::AtEnd);

    // The final step found the target
    let last = player.current_step().unwrap();
    assert_eq!(last.snapshot.array[last.snapshot.mid], 23);

    // And back again
    for _ in 1..total {
        assert_eq!(player.previous(), NavOutcome::Moved);
    }
    assert_eq!(player.previous(), NavOutcome::AtStart);
}

#[test]
fn test_merge_sort_autoplay_to_completion() {
    let steps = merge_sort::generate(&[5, 3, 8, 1]);
    let total = steps.len();

    let mut player = StepPlayer::new();
    player.load(steps);
    player.play(Duration::from_millis(50));

    let t0 = Instant::now();
    player.tick(t0);
    let mut advances = 0;
    for i in 1..=total + 5 {
        if player.tick(t0 + Duration::from_millis(50 * i as u64)) {
            advances += 1;
        }
    }

    // Every step after the first was reached exactly once
    assert_eq!(advances, total - 1);
    assert_eq!(player.state(), PlaybackState::Completed);

    let final_values = player.current_step().unwrap().snapshot.values();
    assert_eq!(final_values, vec![1, 3, 5, 8]);
}

#[test]
fn test_pause_preserves_position_and_resume_continues() {
    let steps = two_pointer::generate("abcdef");
    let mut player = StepPlayer::new();
    player.load(steps);
    player.play(Duration::from_millis(100));

    let t0 = Instant::now();
    player.tick(t0);
    player.tick(t0 + Duration::from_millis(100));
    player.tick(t0 + Duration::from_millis(200));
    let paused_at = player.current_index();
    assert!(paused_at > 0);

    player.pause();
    assert_eq!(player.state(), PlaybackState::Paused);

    // No tick fires while paused, however late
    assert!(!player.tick(t0 + Duration::from_secs(10)));
    assert_eq!(player.current_index(), paused_at);

    // Manual stepping works from the paused position
    assert_eq!(player.next(), NavOutcome::Moved);
    assert_eq!(player.current_index(), paused_at + 1);

    player.resume();
    assert_eq!(player.state(), PlaybackState::Playing);
}

#[test]
fn test_reload_mid_playback_switches_sequences() {
    let mut player = StepPlayer::new();
    player.load(sieve::generate(30));
    player.play(Duration::from_millis(50));

    let t0 = Instant::now();
    player.tick(t0);
    player.tick(t0 + Duration::from_millis(50));
    assert_eq!(player.current_index(), 1);

    // Loading a new run cancels the old one outright
    let new_steps = sieve::generate(10);
    let new_len = new_steps.len();
    player.load(new_steps);
    assert_eq!(player.state(), PlaybackState::Stopped);
    assert_eq!(player.current_index(), 0);
    assert_eq!(player.len(), new_len);

    // The stale deadline from the old run never fires
    assert!(!player.tick(t0 + Duration::from_secs(10)));
    assert_eq!(player.current_index(), 0);
}

#[test]
fn test_reset_then_reload_replays_from_start() {
    let steps = two_pointer::generate("12345");
    let total = steps.len();

    let mut player = StepPlayer::new();
    player.load(steps);
    player.next();
    player.next();

    player.reset();
    assert_eq!(player.state(), PlaybackState::Idle);
    assert!(player.current_step().is_none());

    player.load(two_pointer::generate("12345"));
    assert_eq!(player.current_index(), 0);
    assert_eq!(player.len(), total);
    assert_eq!(
        player.current_step().unwrap().snapshot.text(),
        "12345"
    );
}

#[test]
fn test_interval_change_applies_mid_run() {
    let steps = sieve::generate(50);
    assert!(steps.len() > 4);

    let mut player = StepPlayer::new();
    player.load(steps);
    player.play(Duration::from_millis(100));

    let t0 = Instant::now();
    player.tick(t0);
    assert!(player.tick(t0 + Duration::from_millis(100)));

    // Slow down; the already-scheduled deadline still uses the old
    // interval, later ones use the new one
    player.set_interval(Duration::from_millis(400));
    assert!(player.tick(t0 + Duration::from_millis(200)));
    assert!(!player.tick(t0 + Duration::from_millis(500)));
    assert!(player.tick(t0 + Duration::from_millis(600)));
    assert_eq!(player.current_index(), 3);
}

#[test]
fn test_single_step_sequence_completes_without_advancing() {
    // A one-step run (sieve at its minimum limit) completes on the first
    // elapsed tick without moving the cursor
    let steps = sieve::generate(2);
    assert_eq!(steps.len(), 1);

    let mut player = StepPlayer::new();
    player.load(steps);
    player.play(Duration::from_millis(50));

    let t0 = Instant::now();
    player.tick(t0);
    assert!(!player.tick(t0 + Duration::from_millis(50)));
    assert_eq!(player.state(), PlaybackState::Completed);
    assert_eq!(player.current_index(), 0);
}
