//! Spinner widget for loading states.
//!
//! Based on the snake spinner pattern - a bar that sweeps across a dotted
//! track and back, pausing at each end.

use std::time::Duration;

const TRACK: char = '⬝';
const SNAKE: char = '━';

/// Configuration and precomputed frames for the spinner.
#[derive(Clone, Debug)]
pub struct Spinner {
    /// Width of the track in characters.
    track_width: u16,
    /// Length of the snake/bar.
    snake_len: u16,
    /// Pause frames at right end.
    right_pause: usize,
    /// Pause frames at left end.
    left_pause: usize,
    /// Frame duration in milliseconds.
    frame_ms: u64,
    frames: Vec<String>,
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}

impl Spinner {
    /// Create a new spinner with default settings.
    pub fn new() -> Self {
        Self::with_shape(8, 4, 1, 6, 80)
    }

    fn with_shape(
        track_width: u16,
        snake_len: u16,
        right_pause: usize,
        left_pause: usize,
        frame_ms: u64,
    ) -> Self {
        let mut spinner = Self {
            track_width,
            snake_len: snake_len.max(1),
            right_pause,
            left_pause,
            frame_ms,
            frames: Vec::new(),
        };
        spinner.frames = spinner.generate_frames();
        spinner
    }

    /// Time each frame stays on screen.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }

    /// Number of frames in one full cycle.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// The frame to show at animation step `tick`. Wraps around.
    pub fn frame(&self, tick: usize) -> &str {
        &self.frames[tick % self.frames.len()]
    }

    fn generate_frames(&self) -> Vec<String> {
        let mut frames = Vec::new();
        let span = self.track_width as i32 + self.snake_len as i32 - 2;

        // Right pass: snake enters from left, travels across, exits right
        for head_pos in 0..=span {
            frames.push(self.make_snake_frame(head_pos));
        }
        for _ in 0..self.right_pause {
            frames.push(self.make_empty_frame());
        }

        // Left pass
        for head_pos in (0..=span).rev() {
            frames.push(self.make_snake_frame(head_pos));
        }
        for _ in 0..self.left_pause {
            frames.push(self.make_empty_frame());
        }

        frames
    }

    fn make_empty_frame(&self) -> String {
        std::iter::repeat_n(TRACK, self.track_width as usize).collect()
    }

    fn make_snake_frame(&self, head_pos: i32) -> String {
        let snake_start = head_pos - self.snake_len as i32 + 1;
        (0..self.track_width as i32)
            .map(|i| {
                if i >= snake_start && i <= head_pos {
                    SNAKE
                } else {
                    TRACK
                }
            })
            .collect()
    }
}
