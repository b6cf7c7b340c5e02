//! # MIRAGE Raster
//!
//! Pseudo-3D ground-plane rasterizer. Stateless: every call is a pure
//! function of a read-only map texture, a destination canvas and camera
//! scalars, invoked once per frame by the host.
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ per destination row y:                                       │
//! │   depth  = focal / (y + 1)        non-linear foreshortening  │
//! │   strip  = depth * tan(fov/2)     visible half-width         │
//! │   rotate by camera heading → world-space scanline endpoints  │
//! │   walk the scanline, toroidal-sample the map, write RGBA     │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Two entry points share that projection: [`render_quality`] samples every
//! pixel; [`render_performance`] adds a motion-adaptive level-of-detail
//! policy that duplicates rows and fills pixel blocks to cut per-frame cost.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod buffer;
pub mod error;
pub mod ground;
pub mod lod;
pub mod projection;

pub use buffer::{Canvas, Texture, CHANNELS};
pub use error::{RasterError, RasterResult};
pub use ground::{render_performance, render_quality};
pub use lod::{BandThresholds, DepthBand, DetailPolicy, MotionState};
pub use projection::{Scanline, ScanlineCamera};
