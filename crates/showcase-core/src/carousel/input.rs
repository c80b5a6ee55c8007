//! Keyboard and touch input mapping.

use std::str::FromStr;

/// Keys the showcase reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    ArrowLeft,
    ArrowRight,
    Escape,
}

impl FromStr for KeyInput {
    type Err = String;

    /// Parse a DOM `KeyboardEvent.key` value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ArrowLeft" | "Left" => Ok(Self::ArrowLeft),
            "ArrowRight" | "Right" => Ok(Self::ArrowRight),
            "Escape" | "Esc" => Ok(Self::Escape),
            other => Err(format!("Unhandled key: {other}")),
        }
    }
}

/// Direction of a user navigation gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationIntent {
    Next,
    Prev,
}

/// Map a horizontal touch movement to a navigation intent.
///
/// Swiping left (finger moves toward smaller x) goes to the next slide.
/// Movements of `threshold` pixels or less are ignored.
pub fn swipe_intent(start_x: f64, end_x: f64, threshold: f64) -> Option<NavigationIntent> {
    let diff = start_x - end_x;
    if diff.abs() <= threshold {
        None
    } else if diff > 0.0 {
        Some(NavigationIntent::Next)
    } else {
        Some(NavigationIntent::Prev)
    }
}

/// Tracks one touch gesture at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeTracker {
    threshold: f64,
    start_x: Option<f64>,
}

impl SwipeTracker {
    pub fn new(threshold_px: u32) -> Self {
        Self {
            threshold: f64::from(threshold_px),
            start_x: None,
        }
    }

    pub const fn touch_start(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    /// Finish the gesture. A touch end without a start yields nothing.
    pub fn touch_end(&mut self, x: f64) -> Option<NavigationIntent> {
        let start = self.start_x.take()?;
        swipe_intent(start, x, self.threshold)
    }

    pub const fn cancel(&mut self) {
        self.start_x = None;
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(crate::settings::DEFAULT_SWIPE_THRESHOLD_PX)
    }
}
