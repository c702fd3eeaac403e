//! Visual Effects
//!
//! One-shot timed effects for the UI. The only effect today is the check-mark
//! fade-in that plays when a task is toggled: opacity ramps 0 to 1 over 500 ms
//! and then holds at 1. Purely cosmetic; nothing waits on completion.

use std::time::{Duration, Instant};

use ratatui::style::Color;

/// How long the check-mark fade-in runs.
pub const CHECK_FADE: Duration = Duration::from_millis(500);

/// A one-shot fade-in, restarted by constructing a new value.
#[derive(Clone, Copy, Debug)]
pub struct Fade {
    /// When the fade started
    pub started: Instant,
    /// How long the ramp lasts
    pub duration: Duration,
}

impl Fade {
    /// Start a fade now.
    pub fn new(duration: Duration) -> Self {
        Self {
            started: Instant::now(),
            duration,
        }
    }

    /// Current opacity in `[0, 1]`; stays at 1 once the ramp is done.
    pub fn opacity(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.started.elapsed().as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Whether the ramp has finished (opacity holds at 1).
    pub fn is_complete(&self) -> bool {
        self.started.elapsed() >= self.duration
    }
}

/// Linearly blend `fg` toward `bg`: opacity 1 gives `fg`, 0 gives `bg`.
pub fn blend(fg: (u8, u8, u8), bg: (u8, u8, u8), opacity: f32) -> Color {
    let t = opacity.clamp(0.0, 1.0);
    let mix = |f: u8, b: u8| -> u8 { (b as f32 + (f as f32 - b as f32) * t).round() as u8 };
    Color::Rgb(mix(fg.0, bg.0), mix(fg.1, bg.1), mix(fg.2, bg.2))
}
