//! Swipe classification.
//!
//! Coordinates follow screen convention: `y` grows downward.

use crate::core::Direction;

/// Classify a drag vector.
///
/// Returns `None` when both components are inside the deadzone. Otherwise
/// the dominant axis picks horizontal or vertical (ties go vertical) and
/// the sign picks the direction along it.
///
/// ```
/// use rust_2048::core::Direction;
/// use rust_2048::input::classify_swipe;
///
/// assert_eq!(classify_swipe(-80.0, 10.0, 30.0), Some(Direction::Left));
/// assert_eq!(classify_swipe(5.0, 50.0, 30.0), Some(Direction::Down));
/// assert_eq!(classify_swipe(20.0, -20.0, 30.0), None);
/// ```
#[must_use]
pub fn classify_swipe(dx: f64, dy: f64, deadzone: f64) -> Option<Direction> {
    if dx.abs() < deadzone && dy.abs() < deadzone {
        return None;
    }
    if dx.abs() > dy.abs() {
        Some(if dx > 0.0 { Direction::Right } else { Direction::Left })
    } else {
        Some(if dy > 0.0 { Direction::Down } else { Direction::Up })
    }
}

/// Pairs a touch start with its end.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SwipeTracker {
    start: Option<(f64, f64)>,
}

impl SwipeTracker {
    /// Create a tracker with no touch in progress.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record where a touch started, replacing any unfinished one.
    pub fn begin(&mut self, x: f64, y: f64) {
        self.start = Some((x, y));
    }

    /// Finish the touch at `(x, y)` and classify it.
    ///
    /// Returns `None` without a matching `begin` or inside the deadzone.
    pub fn end(&mut self, x: f64, y: f64, deadzone: f64) -> Option<Direction> {
        let (x0, y0) = self.start.take()?;
        classify_swipe(x - x0, y - y0, deadzone)
    }

    /// True while a touch is in progress.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }
}
