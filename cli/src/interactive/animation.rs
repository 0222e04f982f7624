//! Scroll animation for the terminal browser
//!
//! Provides easing functions, env-configurable timing, and the animated
//! scroll-to-top used after each navigation.

use std::time::{Duration, Instant};

/// Easing options for scroll animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseOutCubic,
    EaseInOutCubic,
}

impl Easing {
    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "linear" => Some(Easing::Linear),
            "ease_in_out_cubic" | "easeinoutcubic" | "ease-in-out-cubic" => {
                Some(Easing::EaseInOutCubic)
            }
            "ease_out_cubic" | "easeoutcubic" | "ease-out-cubic" => Some(Easing::EaseOutCubic),
            _ => None,
        }
    }
}

/// Apply easing function to a normalized time value (0.0 to 1.0)
pub fn apply_easing(easing: Easing, t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    match easing {
        Easing::Linear => t,
        Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        Easing::EaseInOutCubic => {
            if t < 0.5 {
                4.0 * t * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
            }
        }
    }
}

/// Configuration for UI animations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiAnimationConfig {
    pub easing: Easing,
    pub frame_interval_ms: u64,
    pub duration_ms: u64,
}

impl UiAnimationConfig {
    /// Create new animation config with environment variable overrides
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let easing = lookup("BLINK_UI_EASING")
            .and_then(|v| Easing::parse(&v))
            .unwrap_or(defaults.easing);

        let frame_interval_ms = lookup("BLINK_UI_FRAME_MS")
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(defaults.frame_interval_ms);

        let duration_ms = lookup("BLINK_UI_DURATION_MS")
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(defaults.duration_ms);

        Self {
            easing,
            frame_interval_ms,
            duration_ms,
        }
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for UiAnimationConfig {
    fn default() -> Self {
        Self {
            easing: Easing::EaseOutCubic,
            frame_interval_ms: 16,
            duration_ms: 250,
        }
    }
}

/// Animated scroll from a starting offset back to the top
#[derive(Debug, Clone)]
pub struct ScrollAnimation {
    from: usize,
    start_time: Instant,
    duration: Duration,
    easing: Easing,
}

impl ScrollAnimation {
    pub fn new(from: usize, config: &UiAnimationConfig) -> Self {
        Self {
            from,
            start_time: Instant::now(),
            duration: config.duration(),
            easing: config.easing,
        }
    }

    /// Scroll offset at `elapsed` since the animation started
    pub fn offset_at(&self, elapsed: Duration) -> usize {
        if self.duration.is_zero() || elapsed >= self.duration {
            return 0;
        }

        let progress = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        let remaining = 1.0 - apply_easing(self.easing, progress);
        ((self.from as f64) * remaining).round() as usize
    }

    /// Current scroll offset
    pub fn offset(&self) -> usize {
        self.offset_at(self.start_time.elapsed())
    }

    /// Check if animation is complete
    pub fn is_complete(&self) -> bool {
        self.offset() == 0
    }
}
