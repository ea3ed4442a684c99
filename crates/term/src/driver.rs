//! Animation driver: owns the rotation angles, pacing, and run length.
//!
//! The driver is the only place where time passes and I/O happens; the
//! renderer it wraps stays a pure function of the angles.

use std::io::Write;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};

use crate::core::{DepthBuffer, Frame, FrameRenderer, TorusConfig};
use crate::renderer::{join_row, TerminalRenderer};
use crate::types::{Spin, FRAME_DELAY_MS};

/// Run parameters, fixed at process start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverOptions {
    /// Total frames for the run (the animation is finite).
    pub frame_count: usize,
    /// Target inter-frame delay.
    pub frame_delay: Duration,
    /// Clear the whole screen before each frame instead of relying on
    /// overwrite-in-place alone.
    pub clear_each_frame: bool,
    /// Skip terminal control entirely and print frames sequentially.
    pub plain: bool,
}

impl DriverOptions {
    /// Defaults: `screen_size²` frames at 10 FPS with clearing on.
    pub fn defaults_for(config: &TorusConfig) -> Self {
        Self {
            frame_count: config.screen_size * config.screen_size,
            frame_delay: Duration::from_millis(FRAME_DELAY_MS),
            clear_each_frame: true,
            plain: false,
        }
    }
}

/// Parse process arguments into driver options.
///
/// No flags are required; the defaults run the full finite animation.
///
/// Supported flags:
/// - `--frames N` total frame count
/// - `--delay-ms N` inter-frame delay
/// - `--no-clear` home the cursor without clearing each frame
/// - `--plain` print frames sequentially without terminal control
pub fn parse_driver_args(config: &TorusConfig, args: &[String]) -> Result<DriverOptions> {
    let mut opts = DriverOptions::defaults_for(config);

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--frames" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --frames"))?;
                opts.frame_count = v
                    .parse::<usize>()
                    .map_err(|_| anyhow!("invalid --frames value: {}", v))?;
            }
            "--delay-ms" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --delay-ms"))?;
                let ms = v
                    .parse::<u64>()
                    .map_err(|_| anyhow!("invalid --delay-ms value: {}", v))?;
                opts.frame_delay = Duration::from_millis(ms);
            }
            "--no-clear" => {
                opts.clear_each_frame = false;
            }
            "--plain" => {
                opts.plain = true;
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(opts)
}

/// The loop tying renderer, terminal, and clock together.
pub struct AnimationDriver {
    renderer: FrameRenderer,
    options: DriverOptions,
}

impl AnimationDriver {
    pub fn new(renderer: FrameRenderer, options: DriverOptions) -> Self {
        Self { renderer, options }
    }

    pub fn options(&self) -> &DriverOptions {
        &self.options
    }

    /// Run the animation against a prepared terminal.
    ///
    /// Frame and depth buffers are allocated once and reused; the angles
    /// advance before each frame, so the first frame shown is one step past
    /// the starting orientation.
    pub fn run(&self, term: &mut TerminalRenderer) -> Result<()> {
        let config = self.renderer.config();
        let mut spin = Spin::start();
        let mut frame = Frame::new(config.screen_size);
        let mut depth = DepthBuffer::new(config.screen_size);

        for _ in 0..self.options.frame_count {
            let frame_start = Instant::now();

            spin.advance(config.theta_spacing, config.phi_spacing);
            self.renderer.render_into(spin, &mut frame, &mut depth);
            term.draw(&frame, self.options.clear_each_frame)?;

            self.sleep_remainder(frame_start);
        }

        Ok(())
    }

    /// Fallback path: print frames sequentially with no control sequences.
    ///
    /// Used when raw terminal mode is unavailable, and handy for piping
    /// frames into a file.
    pub fn run_plain<W: Write>(&self, out: &mut W) -> Result<()> {
        let config = self.renderer.config();
        let mut spin = Spin::start();
        let mut frame = Frame::new(config.screen_size);
        let mut depth = DepthBuffer::new(config.screen_size);
        let mut text = String::with_capacity(config.screen_size * 2);

        for n in 0..self.options.frame_count {
            let frame_start = Instant::now();

            spin.advance(config.theta_spacing, config.phi_spacing);
            self.renderer.render_into(spin, &mut frame, &mut depth);

            if n > 0 {
                writeln!(out)?;
            }
            for row in frame.rows() {
                text.clear();
                join_row(row, &mut text);
                writeln!(out, "{}", text)?;
            }
            out.flush()?;

            self.sleep_remainder(frame_start);
        }

        Ok(())
    }

    /// Sleep out the rest of the frame delay, if any is left.
    fn sleep_remainder(&self, frame_start: Instant) {
        if let Some(rest) = self.options.frame_delay.checked_sub(frame_start.elapsed()) {
            thread::sleep(rest);
        }
    }
}
