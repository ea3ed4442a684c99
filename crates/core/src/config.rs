//! Torus geometry and projection configuration.
//!
//! The configuration is built once at startup, validated before the
//! animation loop, and then treated as immutable. The renderer never reads
//! process-wide globals.

use thiserror::Error;

use crate::types::{
    PHI_SPACING, SCREEN_SIZE, SHADING_RAMP, SWEEP_RADIUS, THETA_SPACING, TUBE_RADIUS,
    VIEWER_DISTANCE,
};

/// Rejections produced by [`TorusConfig::validate`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The character grid has no cells.
    #[error("screen size must be nonzero")]
    ZeroScreen,

    /// An angular sampling step that would never advance (or run backwards).
    #[error("{name} must be positive, got {value}")]
    NonPositiveSpacing {
        /// Which spacing was rejected.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A torus radius that collapses or inverts the surface.
    #[error("{name} must be positive, got {value}")]
    NonPositiveRadius {
        /// Which radius was rejected.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The viewer sits inside (or on) the torus, so z could reach zero and
    /// the perspective division would blow up mid-frame.
    #[error("viewer distance {viewer_distance} must exceed torus extent {extent}")]
    ViewerInsideTorus {
        /// Configured viewer offset along z.
        viewer_distance: f64,
        /// Combined tube + sweep radius.
        extent: f64,
    },
}

/// Fixed parameters for one animation run.
#[derive(Debug, Clone, PartialEq)]
pub struct TorusConfig {
    /// Grid width and height in characters.
    pub screen_size: usize,
    /// Angular step around the tube cross-section.
    pub theta_spacing: f64,
    /// Angular step around the sweep circle.
    pub phi_spacing: f64,
    /// Radius of the swept tube (R1).
    pub tube_radius: f64,
    /// Distance from the torus axis to the tube center (R2).
    pub sweep_radius: f64,
    /// Fixed viewer offset along z (K2).
    pub viewer_distance: f64,
    /// Shading characters, darkest to brightest.
    pub ramp: [char; 12],
}

impl Default for TorusConfig {
    fn default() -> Self {
        Self {
            screen_size: SCREEN_SIZE,
            theta_spacing: THETA_SPACING,
            phi_spacing: PHI_SPACING,
            tube_radius: TUBE_RADIUS,
            sweep_radius: SWEEP_RADIUS,
            viewer_distance: VIEWER_DISTANCE,
            ramp: SHADING_RAMP,
        }
    }
}

impl TorusConfig {
    /// Projection scale factor (K1), derived so the torus fills the grid
    /// with a margin: `screen_size * K2 * 3 / (8 * (R1 + R2))`.
    pub fn projection_scale(&self) -> f64 {
        self.screen_size as f64 * self.viewer_distance * 3.0
            / (8.0 * (self.tube_radius + self.sweep_radius))
    }

    /// Combined radial extent of the surface (R1 + R2).
    pub fn torus_extent(&self) -> f64 {
        self.tube_radius + self.sweep_radius
    }

    /// Reject degenerate geometry before the animation loop starts.
    ///
    /// In particular `viewer_distance` must exceed the torus extent so that
    /// z stays positive for every surface point; the renderer relies on this
    /// instead of re-checking per frame.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen_size == 0 {
            return Err(ConfigError::ZeroScreen);
        }
        if !(self.theta_spacing > 0.0) {
            return Err(ConfigError::NonPositiveSpacing {
                name: "theta spacing",
                value: self.theta_spacing,
            });
        }
        if !(self.phi_spacing > 0.0) {
            return Err(ConfigError::NonPositiveSpacing {
                name: "phi spacing",
                value: self.phi_spacing,
            });
        }
        if !(self.tube_radius > 0.0) {
            return Err(ConfigError::NonPositiveRadius {
                name: "tube radius",
                value: self.tube_radius,
            });
        }
        if !(self.sweep_radius > 0.0) {
            return Err(ConfigError::NonPositiveRadius {
                name: "sweep radius",
                value: self.sweep_radius,
            });
        }
        if self.viewer_distance <= self.torus_extent() {
            return Err(ConfigError::ViewerInsideTorus {
                viewer_distance: self.viewer_distance,
                extent: self.torus_extent(),
            });
        }
        Ok(())
    }
}
