//! Spinning torus runner (default binary).
//!
//! Renders the animation into the alternate screen with crossterm, or falls
//! back to plain sequential printing when the terminal cannot be taken over.

use std::io;

use anyhow::Result;

use tui_donut::core::{FrameRenderer, TorusConfig};
use tui_donut::term::{parse_driver_args, AnimationDriver, TerminalRenderer};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = TorusConfig::default();
    let options = parse_driver_args(&config, &args)?;
    let renderer = FrameRenderer::new(config)?;
    let driver = AnimationDriver::new(renderer, options);

    if driver.options().plain {
        return driver.run_plain(&mut io::stdout());
    }

    let mut term = TerminalRenderer::new();
    if term.enter().is_err() {
        // No tty or raw mode unsupported: degrade to sequential printing.
        return driver.run_plain(&mut io::stdout());
    }

    let result = driver.run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}
