//! # MIRAGE
//!
//! Per-frame computational kernel for a pseudo-3D ground renderer and a
//! toroidal obstacle engine. The host owns the display surface, input and
//! game state; this crate is a pure function of buffers and scalars, plus
//! one bounded registry the host fills explicitly.
//!
//! ## Architecture (The Three Units)
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                        MIRAGE FRAME KERNEL                        │
//! ├───────────────────────────────────────────────────────────────────┤
//! │                                                                   │
//! │  ┌────────────────┐    ┌────────────────┐    ┌────────────────┐  │
//! │  │  RASTER        │    │  WORLD         │    │  SHARED        │  │
//! │  │                │    │                │    │                │  │
//! │  │ • scanline     │    │ • registry     │    │ • Vec2 / wrap  │  │
//! │  │   projection   │    │ • visibility   │    │ • angle fold   │  │
//! │  │ • LOD bands    │    │   scan + sort  │    │ • tuning table │  │
//! │  │ • RGBA canvas  │    │ • collision    │    │                │  │
//! │  └───────┬────────┘    └───────┬────────┘    └────────────────┘  │
//! │          │                     │                                  │
//! │          └───────┬─────────────┘                                  │
//! │                  ▼                                                │
//! │          ┌────────────────┐                                       │
//! │          │  FrameKernel   │  flat call surface, owned context     │
//! │          └────────────────┘                                       │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Frame protocol
//!
//! 1. If the obstacle set changed: [`FrameKernel::reset`] then
//!    [`FrameKernel::insert_batch`].
//! 2. [`render_ground`] draws the ground plane into the host's buffer.
//! 3. [`FrameKernel::compute_visible`] returns the draw-ordered obstacle
//!    list (farthest first - paint and forget).
//! 4. [`FrameKernel::check_collision`] validates the player move before
//!    the host commits it.
//!
//! ## Modules
//!
//! - `kernel`: the owned frame context and flat call surface
//! - `config`: TOML-backed startup configuration
//! - `shared_kernel`: `RwLock` wrapper for multi-threaded hosts

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod kernel;
pub mod shared_kernel;

// Re-export the units
pub use mirage_raster as raster;
pub use mirage_shared as shared;
pub use mirage_world as world;

// Re-export commonly used types
pub use config::{ConfigError, KernelConfig, RenderMode, RenderSettings, ViewSettings};
pub use kernel::{render_ground, render_performance_into, render_quality_into, FrameKernel};
pub use shared_kernel::SharedKernel;
