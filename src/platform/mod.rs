//! Platform abstraction layer
//!
//! The host translates its window events into [`input::Keys`] presses and
//! releases before each tick.

pub mod input;

pub use input::{Key, Keys};
