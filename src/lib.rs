//! # Moldura - Picture Frame Rendering
//!
//! Moldura renders decorative picture frames around raster images, producing
//! a composited RGBA bitmap sized in real-world inches (96 DPI) for accurate
//! printing. It provides:
//!
//! - **Frame styles**: fourteen procedural painters (classic, modern, ornate,
//!   polaroid, shadow, double, neon, vintage, emboss, architectural,
//!   minimalist, victorian, classical, metallic)
//! - **Physical sizing**: frame thickness configured in inches, converted at
//!   a fixed 96 DPI, with a letter-page frame-only mode for print tests
//! - **Corner rounding**: optional rounded-rectangle clip of the final
//!   composite
//! - **PNG export**: the finished bitmap encoded for download
//!
//! ## Quick Start
//!
//! ```
//! use moldura::{Compositor, FrameConfig, FrameStyle};
//!
//! let mut compositor = Compositor::new();
//! compositor.set_config(FrameConfig {
//!     style: FrameStyle::Ornate,
//!     width_in: 0.75,
//!     ..Default::default()
//! })?;
//!
//! // Nothing loaded yet, so rendering is a no-op:
//! assert!(!compositor.render()?);
//!
//! // After `compositor.load_image(&bytes)?` a render yields the framed
//! // bitmap via `compositor.canvas()` / `compositor.export_png()`.
//! # Ok::<(), moldura::FrameError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`units`] | Inches to pixels at the fixed 96 DPI |
//! | [`color`] | Frame color parsing and tint derivation |
//! | [`canvas`] | RGBA render surface with antialiased primitives |
//! | [`config`] | Frame style, corner mode and configuration types |
//! | [`styles`] | The fourteen frame painters |
//! | [`mask`] | Rounded-corner clip of the final composite |
//! | [`compositor`] | Session state and the render pipeline |
//! | [`error`] | Error types |

pub mod canvas;
pub mod color;
pub mod compositor;
pub mod config;
pub mod error;
pub mod mask;
pub mod styles;
pub mod units;

// Re-exports for convenience
pub use canvas::Canvas;
pub use color::Rgb;
pub use compositor::{Compositor, DimensionReadout, SourceImage};
pub use config::{CornerMode, FrameConfig, FrameStyle};
pub use error::FrameError;
