//! Native driver for the Pong core
//!
//! Owns the game loop, turns key events into frame input, blinks the status
//! banner and reports match output through the `log` facade.

pub mod input;
pub mod presentation;
pub mod simulation;
pub mod status;

pub use input::{KeyEvent, KeyboardState, Script, ScriptedInput};
pub use presentation::{HudState, LogSink, SharedHud};
pub use simulation::{FrameReport, LocalGame};
pub use status::StatusBlinker;
