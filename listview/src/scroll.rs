//! Scroll controller: target/offset bookkeeping and the smooth scroll state
//! machine.
//!
//! The controller knows nothing about frame tickers, scrollbars or display
//! objects. It reports what happened and the list reacts: registering for
//! frame ticks, refreshing, or updating an attached scrollbar.

use log::trace;

/// What a call to [`ScrollController::scroll_to`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScrollOutcome {
    /// The target did not change.
    Unchanged,
    /// Smooth scrolling is off: the offset jumped to the target.
    Snapped,
    /// The animation is running. `newly` is true if it was idle before.
    Armed { newly: bool },
}

/// What a single animation step did.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct TickOutcome {
    /// The offset changed.
    pub moved: bool,
    /// The target was reached and the animation disarmed.
    pub finished: bool,
    /// The traversal speed changed to this value (boosted, or restored to
    /// the nominal speed on completion).
    pub speed: Option<f32>,
}

#[derive(Debug, Clone)]
pub(crate) struct ScrollController {
    offset: f32,
    target: f32,
    overscroll: f32,
    max_display: f32,
    /// Nominal speed in items per second. 0 disables animation.
    speed: f32,
    /// Speed of the current traversal, boosted to bound its duration.
    traversal_speed: f32,
    max_duration_ms: u32,
    scroll_distance: f32,
    armed: bool,
    /// Whether the last scroll request asked for clipping.
    clipped: bool,
}

impl Default for ScrollController {
    fn default() -> Self {
        Self {
            offset: 0.0,
            target: 0.0,
            overscroll: 0.0,
            max_display: 0.0,
            speed: 20.0,
            traversal_speed: 20.0,
            max_duration_ms: 500,
            scroll_distance: 1.0,
            armed: false,
            clipped: true,
        }
    }
}

impl ScrollController {
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn overscroll(&self) -> f32 {
        self.overscroll
    }

    pub fn max_display(&self) -> f32 {
        self.max_display
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn traversal_speed(&self) -> f32 {
        self.traversal_speed
    }

    pub fn max_duration_ms(&self) -> u32 {
        self.max_duration_ms
    }

    pub fn scroll_distance(&self) -> f32 {
        self.scroll_distance
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn set_max_display(&mut self, max_display: f32) {
        self.max_display = max_display.max(0.0);
    }

    pub fn set_max_duration(&mut self, ms: u32) {
        self.max_duration_ms = ms;
    }

    pub fn set_scroll_distance(&mut self, distance: f32) {
        self.scroll_distance = distance.max(0.0);
    }

    /// Largest offset a clipped scroll may reach.
    pub fn max_offset(&self, count: usize) -> f32 {
        (count as f32 + self.overscroll - self.max_display).max(0.0)
    }

    /// Request a new target.
    pub fn scroll_to(&mut self, offset: f32, clip: bool, count: usize) -> ScrollOutcome {
        self.clipped = clip;
        let offset = if clip {
            offset.clamp(0.0, self.max_offset(count))
        } else {
            offset
        };

        if offset == self.target || offset.is_nan() {
            return ScrollOutcome::Unchanged;
        }

        trace!("scroll target {} -> {}", self.target, offset);
        self.target = offset;

        if self.speed <= 0.0 {
            self.offset = offset;
            return ScrollOutcome::Snapped;
        }

        let newly = !self.armed;
        self.armed = true;
        ScrollOutcome::Armed { newly }
    }

    /// Clip the current target again if the last request was clipped.
    pub fn reclip(&mut self, count: usize) -> ScrollOutcome {
        if self.clipped {
            self.scroll_to(self.target, true, count)
        } else {
            ScrollOutcome::Unchanged
        }
    }

    /// Change the overscroll distance, re-clipping when needed.
    pub fn set_overscroll(&mut self, rows: f32, count: usize) -> ScrollOutcome {
        self.overscroll = rows.max(0.0);
        self.reclip(count)
    }

    /// Change the nominal speed. Returns true if a running animation was
    /// cut short because smooth scrolling got disabled.
    pub fn set_speed(&mut self, speed: f32) -> bool {
        self.speed = speed.max(0.0);
        self.traversal_speed = self.speed;

        if self.speed == 0.0 && self.armed {
            self.offset = self.target;
            self.armed = false;
            return true;
        }
        false
    }

    /// Target that brings `index` into view, or `None` if it already is.
    ///
    /// Scrolling backward puts the index at the top; scrolling forward leaves
    /// half a row of room below it.
    pub fn reveal(&self, index: usize) -> Option<f32> {
        let index = index as f32;
        if index >= self.target && index + 1.0 <= self.target + self.max_display {
            None
        } else if index < self.target {
            Some(index)
        } else {
            Some(index + 1.5 - self.max_display)
        }
    }

    /// Target for a wheel movement of `amount` notches (positive scrolls
    /// toward the start). `None` if already at that limit.
    pub fn wheel_target(&self, amount: f32, count: usize) -> Option<f32> {
        if amount == 0.0
            || (amount > 0.0 && self.target <= 0.0)
            || (amount < 0.0 && self.target >= self.max_offset(count))
        {
            return None;
        }
        Some(self.target - amount * self.scroll_distance)
    }

    /// Advance the animation by `delta_ms` milliseconds.
    pub fn tick(&mut self, delta_ms: f32) -> TickOutcome {
        let mut outcome = TickOutcome::default();
        if !self.armed {
            return outcome;
        }

        let distance = (self.target - self.offset).abs();

        if self.max_duration_ms > 0 && distance * 1000.0 / self.traversal_speed > self.max_duration_ms as f32 {
            let required = 1000.0 * distance / self.max_duration_ms as f32;
            if required > self.traversal_speed {
                trace!("scroll speed boosted {} -> {}", self.traversal_speed, required);
                self.traversal_speed = required;
                outcome.speed = Some(required);
            }
        }

        let step = self.traversal_speed / 1000.0 * delta_ms.max(0.0);

        if step >= distance {
            self.offset = self.target;
            self.armed = false;
            outcome.finished = true;
            if self.traversal_speed != self.speed {
                self.traversal_speed = self.speed;
                outcome.speed = Some(self.speed);
            }
        } else if step > 0.0 {
            self.offset += step.copysign(self.target - self.offset);
        }

        outcome.moved = step > 0.0 && distance > 0.0;
        outcome
    }
}
