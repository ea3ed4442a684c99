//! Terminal animation module.
//!
//! This is the I/O side of the animation: a crossterm-backed renderer that
//! flushes frames to a real terminal, and the driver loop that owns the
//! rotation angles, frame pacing, and run length.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Batch all terminal writes per frame into one flush
//! - Degrade to plain sequential printing when raw mode is unavailable

pub mod driver;
pub mod renderer;

pub use tui_donut_core as core;
pub use tui_donut_types as types;

pub use driver::{parse_driver_args, AnimationDriver, DriverOptions};
pub use renderer::{encode_frame_into, TerminalRenderer};
