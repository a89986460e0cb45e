//! Editor zoom.
//!
//! Each step changes the displayed percentage by 10 and the font size by one
//! pixel. Zooming out stops at 10%.

/// Percentage change per step.
pub const STEP_PERCENT: i32 = 10;

/// Lowest reachable percentage.
pub const MIN_PERCENT: i32 = 10;

/// Zoom level, counted in steps away from 100%.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zoom {
    steps: i32,
    base_font_size: f32,
}

impl Zoom {
    pub fn new(base_font_size: f32) -> Self {
        Self {
            steps: 0,
            base_font_size,
        }
    }

    /// Displayed percentage.
    pub fn percent(&self) -> i32 {
        100 + self.steps * STEP_PERCENT
    }

    /// Font size at the current level, never below one pixel.
    pub fn font_size(&self) -> f32 {
        (self.base_font_size + self.steps as f32).max(1.0)
    }

    pub fn zoom_in(&mut self) {
        self.steps += 1;
    }

    /// Steps out; returns false when already at the floor.
    pub fn zoom_out(&mut self) -> bool {
        if self.percent() - STEP_PERCENT < MIN_PERCENT {
            return false;
        }
        self.steps -= 1;
        true
    }

    pub fn reset(&mut self) {
        self.steps = 0;
    }

    /// Text for the status bar, e.g. `"110%"`.
    pub fn label(&self) -> String {
        format!("{}%", self.percent())
    }
}
