//! Scrollbar drawn in the rightmost terminal column.

use std::cell::RefCell;
use std::rc::Rc;

use listview::ScrollSink;

#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollbarState {
    pub maximum: f32,
    pub page: f32,
    pub value: f32,
    pub visible: bool,
    pub speed: f32,
}

/// Mirrors the list scroll state. Clones share the state.
#[derive(Clone, Default)]
pub struct TerminalScrollbar {
    state: Rc<RefCell<ScrollbarState>>,
}

impl TerminalScrollbar {
    pub fn state(&self) -> ScrollbarState {
        *self.state.borrow()
    }

    /// First line and length of the thumb on a track of `track` lines.
    pub fn thumb(&self, track: u16) -> Option<(u16, u16)> {
        let state = self.state();
        if !state.visible || state.maximum <= 0.0 || track == 0 {
            return None;
        }

        let track = track as f32;
        let length = (state.page / state.maximum * track).clamp(1.0, track);
        let start = (state.value / state.maximum * track).clamp(0.0, track - length);
        Some((start.round() as u16, length.round() as u16))
    }

    /// Scroll value for a click or drag at line `y` of the track.
    pub fn value_at(&self, y: u16, track: u16) -> f32 {
        let state = self.state();
        if track == 0 {
            return 0.0;
        }
        let ratio = y as f32 / track as f32;
        ratio * state.maximum - state.page / 2.0
    }
}

impl ScrollSink for TerminalScrollbar {
    fn set_range(&mut self, maximum: f32, page: f32) {
        let mut state = self.state.borrow_mut();
        state.maximum = maximum;
        state.page = page;
    }

    fn set_value(&mut self, value: f32) {
        self.state.borrow_mut().value = value;
    }

    fn set_smooth_speed(&mut self, speed: f32) {
        self.state.borrow_mut().speed = speed;
    }

    fn set_visible(&mut self, visible: bool) {
        self.state.borrow_mut().visible = visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scrollbar(maximum: f32, page: f32, value: f32) -> TerminalScrollbar {
        let mut bar = TerminalScrollbar::default();
        bar.set_range(maximum, page);
        bar.set_value(value);
        bar.set_visible(true);
        bar
    }

    #[test]
    fn test_thumb_geometry() {
        assert_eq!(scrollbar(100.0, 10.0, 0.0).thumb(20), Some((0, 2)));
        assert_eq!(scrollbar(100.0, 10.0, 90.0).thumb(20), Some((18, 2)));
        assert_eq!(scrollbar(100.0, 1.0, 50.0).thumb(20), Some((10, 1)));
    }

    #[test]
    fn test_hidden_has_no_thumb() {
        let mut bar = scrollbar(100.0, 10.0, 0.0);
        bar.set_visible(false);
        assert_eq!(bar.thumb(20), None);
    }
}
