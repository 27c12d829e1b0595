//! Keyboard mapping.

use crate::core::Direction;

/// Map a key name to a direction.
///
/// Accepts the browser-style arrow names (`ArrowUp`, ...) and WASD in
/// either case. Anything else is rejected.
///
/// ```
/// use rust_2048::core::Direction;
/// use rust_2048::input::map_key;
///
/// assert_eq!(map_key("ArrowLeft"), Some(Direction::Left));
/// assert_eq!(map_key("S"), Some(Direction::Down));
/// assert_eq!(map_key("Enter"), None);
/// ```
#[must_use]
pub fn map_key(key: &str) -> Option<Direction> {
    match key {
        "ArrowUp" => Some(Direction::Up),
        "ArrowDown" => Some(Direction::Down),
        "ArrowLeft" => Some(Direction::Left),
        "ArrowRight" => Some(Direction::Right),
        "w" | "W" => Some(Direction::Up),
        "a" | "A" => Some(Direction::Left),
        "s" | "S" => Some(Direction::Down),
        "d" | "D" => Some(Direction::Right),
        _ => None,
    }
}
