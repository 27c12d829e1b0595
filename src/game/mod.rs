//! Session controller.
//!
//! [`Game`] bundles a [`GameState`](crate::core::GameState) with its spawn
//! RNG and configuration. Front ends (keyboard, swipe, test harness) feed it
//! directions and render whatever board and score it reports.

mod controller;

pub use controller::{Game, Turn};
