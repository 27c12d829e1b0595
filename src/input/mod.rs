//! Input layer: turns raw key names, swipes and terminal lines into
//! [`Direction`]s and feeds them to an [`InputHandler`].
//!
//! Unrecognised input is rejected here and never reaches the engine.

mod command;
mod keys;
mod swipe;

pub use command::{parse_command, Command};
pub use keys::map_key;
pub use swipe::{classify_swipe, SwipeTracker};

use crate::core::{Direction, DEFAULT_SWIPE_DEADZONE};
use crate::game::Turn;

/// Synchronous receiver of directional intents.
///
/// Implementors run each direction to completion before returning, so a
/// caller never has two events in flight.
pub trait InputHandler {
    /// Handle one direction.
    fn on_direction(&mut self, direction: Direction) -> Turn;

    /// Deadzone used by [`InputHandler::on_swipe`].
    fn swipe_deadzone(&self) -> f64 {
        DEFAULT_SWIPE_DEADZONE
    }

    // === Convenience Methods ===

    /// Handle a key press; `None` if the key is not a direction.
    fn on_key(&mut self, key: &str) -> Option<Turn> {
        map_key(key).map(|direction| self.on_direction(direction))
    }

    /// Handle a completed drag; `None` inside the deadzone.
    fn on_swipe(&mut self, dx: f64, dy: f64) -> Option<Turn> {
        classify_swipe(dx, dy, self.swipe_deadzone()).map(|direction| self.on_direction(direction))
    }
}
