//! Fitting the viewport height to a number of rows.

use log::debug;

use super::List;

const MAX_ITERATIONS: usize = 5;
/// Capacity error (in rows) considered converged.
const ROW_TOLERANCE: f32 = 0.01;
/// Height change (in pixels) below which fitting is considered stalled.
const MIN_PROGRESS: f32 = 0.5;

/// An upper bound for [`List::fit_height_within`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimension {
    /// Absolute height in pixels.
    Pixels(f32),
    /// A number of rows of the style's default height.
    Rows(f32),
}

impl<T> List<T> {
    /// Resize the viewport so it holds `rows` items plus the overscroll.
    ///
    /// The height is estimated from the measured average row pitch (or the
    /// style's default before anything was measured), applied, and refined
    /// from the new measurement a few times. The final height never exceeds
    /// `max_pixels`; returns false if it had to be clamped.
    pub fn fit_height(&mut self, rows: usize, max_pixels: f32) -> bool {
        let metrics = self.style.metrics();
        let limit = max_pixels.max(0.0);
        let wanted = rows as f32 + self.scroll.overscroll();

        let mut height = self.viewport.height;
        for iteration in 0..MAX_ITERATIONS {
            let pitch = self.average_pitch.unwrap_or_else(|| metrics.default_pitch());
            let next = (wanted * pitch - metrics.spacing).max(0.0);
            let progress = (next - height).abs();

            height = next;
            self.viewport.height = height;
            self.refresh();

            let error = self.scroll.max_display() - wanted;
            debug!(
                "{}: fit iteration {} height {} error {}",
                self.id, iteration, height, error
            );
            if error.abs() < ROW_TOLERANCE || (iteration > 0 && progress < MIN_PROGRESS) {
                break;
            }
        }

        let clamped = height > limit;
        if clamped {
            self.viewport.height = limit;
        }
        self.refresh();
        let outcome = self.scroll.reclip(self.extent());
        self.handle_scroll(outcome);

        !clamped
    }

    /// Like [`fit_height`](Self::fit_height) with the limit given as a
    /// [`Dimension`].
    pub fn fit_height_within(&mut self, rows: usize, limit: Dimension) -> bool {
        let max_pixels = match limit {
            Dimension::Pixels(pixels) => pixels,
            Dimension::Rows(rows) => {
                let metrics = self.style.metrics();
                rows * metrics.default_pitch() - metrics.spacing
            }
        };
        self.fit_height(rows, max_pixels)
    }
}
