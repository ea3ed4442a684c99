//! Core rendering module - pure, deterministic, and testable
//!
//! This module turns a pair of rotation angles into a shaded, depth-correct
//! character grid of a torus. It has **zero dependencies** on terminal I/O or
//! timing, making it:
//!
//! - **Deterministic**: identical angles produce identical frames
//! - **Testable**: every stage is exercised by unit tests
//! - **Portable**: can run headless (golden tests, benchmarks, piping frames)
//!
//! # Module Structure
//!
//! - [`config`]: torus geometry and projection parameters with startup validation
//! - [`frame`]: the square character grid and its companion depth buffer
//! - [`render`]: [`FrameRenderer`], the per-frame projection/shading pipeline
//!
//! # Rendering Pipeline
//!
//! Each frame the renderer walks the torus surface over its two parametric
//! angles, rotates every sample by the current spin, projects it onto the
//! grid with perspective division, and keeps the nearest point per cell:
//!
//! - **Sampling**: theta (tube cross-section) outer, phi (sweep) inner
//! - **Occlusion**: reciprocal depth (1/z), strictly-nearer wins, first
//!   writer keeps ties
//! - **Shading**: luminance against a fixed light, quantized into a
//!   12-character ramp; back-facing points are skipped
//!
//! # Example
//!
//! ```
//! use tui_donut_core::{FrameRenderer, TorusConfig};
//! use tui_donut_types::Spin;
//!
//! let renderer = FrameRenderer::new(TorusConfig::default()).unwrap();
//! let frame = renderer.render(Spin::new(1.0, 1.0));
//!
//! // Same angles, same frame.
//! assert_eq!(frame.cells(), renderer.render(Spin::new(1.0, 1.0)).cells());
//! ```

pub mod config;
pub mod frame;
pub mod render;

pub use tui_donut_types as types;

// Re-export commonly used types for convenience
pub use config::{ConfigError, TorusConfig};
pub use frame::{DepthBuffer, Frame};
pub use render::FrameRenderer;
