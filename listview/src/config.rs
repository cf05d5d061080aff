//! List behaviour configuration.
//!
//! The config is plain data so hosts can load it from whatever settings
//! store they use. Every field has a default, so partial documents are fine.

use serde::{Deserialize, Serialize};

use crate::error::{ListError, Result};
use crate::selection::{EventMethod, SelectionMethod};

/// Tunable behaviour of a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Smooth scroll speed in items per second. 0 disables smooth scrolling.
    pub smooth_scroll_speed: f32,
    /// Upper bound for a single scroll traversal in milliseconds.
    pub max_scroll_duration_ms: u32,
    /// Extra scrollable distance past the last item, in items.
    pub overscroll: f32,
    /// Items scrolled per mouse wheel notch.
    pub scroll_distance: f32,
    /// Whether moving focus moves the selection (single selection only).
    pub selection_follows_focus: bool,
    /// How clicks change a multi selection.
    pub selection_method: SelectionMethod,
    /// How multi selection changes are reported.
    pub event_method: EventMethod,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            smooth_scroll_speed: 20.0,
            max_scroll_duration_ms: 500,
            overscroll: 0.0,
            scroll_distance: 1.0,
            selection_follows_focus: true,
            selection_method: SelectionMethod::default(),
            event_method: EventMethod::default(),
        }
    }
}

impl ListConfig {
    /// Create the default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the smooth scroll speed.
    pub fn with_smooth_scroll_speed(mut self, speed: f32) -> Self {
        self.smooth_scroll_speed = speed;
        self
    }

    /// Set the maximum scroll duration.
    pub fn with_max_scroll_duration(mut self, ms: u32) -> Self {
        self.max_scroll_duration_ms = ms;
        self
    }

    /// Set the overscroll distance.
    pub fn with_overscroll(mut self, rows: f32) -> Self {
        self.overscroll = rows;
        self
    }

    /// Set the multi selection click behaviour.
    pub fn with_selection_method(mut self, method: SelectionMethod) -> Self {
        self.selection_method = method;
        self
    }

    /// Set the multi selection event behaviour.
    pub fn with_event_method(mut self, method: EventMethod) -> Self {
        self.event_method = method;
        self
    }

    /// Check that every numeric field is finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("smooth_scroll_speed", self.smooth_scroll_speed),
            ("overscroll", self.overscroll),
            ("scroll_distance", self.scroll_distance),
        ];

        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ListError::InvalidConfig(format!(
                    "{} must be a finite, non-negative number (got {})",
                    name, value
                )));
            }
        }

        Ok(())
    }
}
