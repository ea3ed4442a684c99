//! FrameRenderer: projects the spinning torus into a character frame.
//!
//! This module is pure (no I/O). Rendering is a function of the validated
//! configuration and the two rotation angles, nothing else.

use std::f64::consts::TAU;

use crate::config::{ConfigError, TorusConfig};
use crate::frame::{DepthBuffer, Frame};
use crate::types::Spin;

/// Per-frame torus rasterizer.
///
/// Construction validates the configuration and precomputes the cos/sin
/// tables for both parametric angles; those depend only on the config, so
/// per-frame work is limited to the rotation itself.
pub struct FrameRenderer {
    config: TorusConfig,
    projection_scale: f64,
    cos_theta: Vec<f64>,
    sin_theta: Vec<f64>,
    cos_phi: Vec<f64>,
    sin_phi: Vec<f64>,
}

impl FrameRenderer {
    /// Build a renderer, rejecting degenerate geometry up front.
    pub fn new(config: TorusConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let (cos_theta, sin_theta) = sample_table(config.theta_spacing);
        let (cos_phi, sin_phi) = sample_table(config.phi_spacing);
        Ok(Self {
            projection_scale: config.projection_scale(),
            config,
            cos_theta,
            sin_theta,
            cos_phi,
            sin_phi,
        })
    }

    pub fn config(&self) -> &TorusConfig {
        &self.config
    }

    /// Render one frame into caller-owned buffers.
    ///
    /// This is the allocation-free hot path. Both buffers are reset to the
    /// configured size; nothing carries over between frames except `spin`.
    pub fn render_into(&self, spin: Spin, frame: &mut Frame, depth: &mut DepthBuffer) {
        let size = self.config.screen_size;
        frame.reset(size);
        depth.reset(size);

        let cos_a = spin.a.cos();
        let sin_a = spin.a.sin();
        let cos_b = spin.b.cos();
        let sin_b = spin.b.sin();

        let r1 = self.config.tube_radius;
        let r2 = self.config.sweep_radius;
        let k2 = self.config.viewer_distance;
        let k1 = self.projection_scale;
        let half = size as f64 / 2.0;

        // Theta outer, phi inner: depth ties keep the first writer, so the
        // traversal order is part of the output contract.
        for (&cos_t, &sin_t) in self.cos_theta.iter().zip(&self.sin_theta) {
            // Tube cross-section in its local frame.
            let circle_x = r2 + r1 * cos_t;
            let circle_y = r1 * sin_t;

            for (&cos_p, &sin_p) in self.cos_phi.iter().zip(&self.sin_phi) {
                // Rotate by A about the tube axis, then by B about the
                // viewing axis; z carries the fixed viewer offset.
                let x = circle_x * (cos_b * cos_p + sin_a * sin_b * sin_p)
                    - circle_y * cos_a * sin_b;
                let y = circle_x * (sin_b * cos_p - sin_a * cos_b * sin_p)
                    + circle_y * cos_a * cos_b;
                let z = k2 + cos_a * circle_x * sin_p + circle_y * sin_a;
                let ooz = 1.0 / z;

                // Luminance against the fixed light; negative faces away.
                let l1 = cos_p * cos_t * sin_b - cos_a * sin_p * cos_t - sin_a * sin_t;
                let l2 = cos_b * (cos_a * sin_t - sin_p * cos_t * sin_a);
                let lum = ((l1 + l2) * 8.0).round() as i32;
                if lum < 0 {
                    continue;
                }

                let px = (half + k1 * ooz * x) as i32;
                let py = (half - k1 * ooz * y) as i32;
                let ch = self.config.ramp[(lum as usize).min(11)];
                plot(frame, depth, px, py, ooz, ch);
            }
        }
    }

    /// Render one frame into fresh buffers.
    pub fn render(&self, spin: Spin) -> Frame {
        let mut frame = Frame::new(self.config.screen_size);
        let mut depth = DepthBuffer::new(self.config.screen_size);
        self.render_into(spin, &mut frame, &mut depth);
        frame
    }
}

/// Write one projected surface point, keeping the nearest per cell.
///
/// Points landing outside the grid are dropped; the default parameters are
/// tuned so that never happens, but off-default configs are not trusted.
fn plot(frame: &mut Frame, depth: &mut DepthBuffer, px: i32, py: i32, ooz: f64, ch: char) {
    if px < 0 || py < 0 {
        return;
    }
    let (x, y) = (px as usize, py as usize);
    if let Some(stored) = depth.get(x, y) {
        if ooz > stored {
            depth.set(x, y, ooz);
            frame.set(x, y, ch);
        }
    }
}

/// Cos/sin of `k * spacing` for every sample of one parametric angle.
///
/// Sample count matches half-open [0, 2π) coverage: `ceil(2π / spacing)`.
fn sample_table(spacing: f64) -> (Vec<f64>, Vec<f64>) {
    let steps = (TAU / spacing).ceil() as usize;
    let mut cos = Vec::with_capacity(steps);
    let mut sin = Vec::with_capacity(steps);
    for k in 0..steps {
        let angle = k as f64 * spacing;
        cos.push(angle.cos());
        sin.push(angle.sin());
    }
    (cos, sin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sample_counts() {
        let renderer = FrameRenderer::new(TorusConfig::default()).unwrap();
        assert_eq!(renderer.cos_theta.len(), 90);
        assert_eq!(renderer.cos_phi.len(), 315);
        assert_eq!(renderer.cos_theta.len(), renderer.sin_theta.len());
        assert_eq!(renderer.cos_phi.len(), renderer.sin_phi.len());
    }

    #[test]
    fn rejects_degenerate_config() {
        let cfg = TorusConfig {
            viewer_distance: 2.0,
            ..TorusConfig::default()
        };
        assert!(matches!(
            FrameRenderer::new(cfg),
            Err(ConfigError::ViewerInsideTorus { .. })
        ));
    }

    #[test]
    fn plot_nearer_point_wins() {
        let mut frame = Frame::new(4);
        let mut depth = DepthBuffer::new(4);

        plot(&mut frame, &mut depth, 1, 2, 0.2, '.');
        plot(&mut frame, &mut depth, 1, 2, 0.5, '@');

        assert_eq!(frame.get(1, 2), Some('@'));
        assert_eq!(depth.get(1, 2), Some(0.5));
    }

    #[test]
    fn plot_farther_point_loses() {
        let mut frame = Frame::new(4);
        let mut depth = DepthBuffer::new(4);

        plot(&mut frame, &mut depth, 0, 0, 0.5, '@');
        plot(&mut frame, &mut depth, 0, 0, 0.2, '.');

        assert_eq!(frame.get(0, 0), Some('@'));
        assert_eq!(depth.get(0, 0), Some(0.5));
    }

    #[test]
    fn plot_tie_keeps_first_writer() {
        let mut frame = Frame::new(4);
        let mut depth = DepthBuffer::new(4);

        plot(&mut frame, &mut depth, 3, 3, 0.25, '#');
        plot(&mut frame, &mut depth, 3, 3, 0.25, '-');

        assert_eq!(frame.get(3, 3), Some('#'));
    }

    #[test]
    fn plot_skips_points_off_grid() {
        let mut frame = Frame::new(2);
        let mut depth = DepthBuffer::new(2);

        plot(&mut frame, &mut depth, -1, 0, 0.5, '@');
        plot(&mut frame, &mut depth, 0, -3, 0.5, '@');
        plot(&mut frame, &mut depth, 2, 0, 0.5, '@');
        plot(&mut frame, &mut depth, 0, 2, 0.5, '@');

        assert!(frame.cells().iter().all(|&c| c == ' '));
    }

    #[test]
    fn render_into_resets_previous_contents() {
        let renderer = FrameRenderer::new(TorusConfig::default()).unwrap();
        let mut frame = Frame::new(1);
        let mut depth = DepthBuffer::new(1);
        frame.set(0, 0, 'x');

        renderer.render_into(Spin::new(1.0, 1.0), &mut frame, &mut depth);

        assert_eq!(frame.size(), 40);
        let fresh = renderer.render(Spin::new(1.0, 1.0));
        assert_eq!(frame, fresh);
    }

    #[test]
    fn render_draws_something() {
        let renderer = FrameRenderer::new(TorusConfig::default()).unwrap();
        let frame = renderer.render(Spin::start());
        assert!(frame.cells().iter().any(|&c| c != ' '));
    }
}
