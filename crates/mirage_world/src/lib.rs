//! # MIRAGE World
//!
//! The obstacle half of the frame kernel, three pieces in dependency order:
//!
//! - [`ObstacleField`]: a fixed-capacity registry the host populates with
//!   batch inserts and clears with an explicit reset. The only state the
//!   kernel keeps between calls.
//! - [`scan_visible`]: per-frame visibility. Fans each obstacle out over its
//!   toroidal tile images, filters by distance, view cone and near plane,
//!   flags camera-player occlusion, and orders the survivors back-to-front
//!   for the painter's algorithm.
//! - [`check_collision`]: wrap-corrected circle overlap against the field,
//!   with the flyover rule, for movement validation.
//!
//! The world is a torus. An obstacle near a map seam can be visible through
//! more than one wrap offset in the same frame and is reported once per
//! visible image; the host draws each image at its own projected position.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod collision;
pub mod obstacle;
pub mod visibility;

pub use collision::{check_collision, Probe};
pub use obstacle::{Obstacle, ObstacleField};
pub use visibility::{scan_visible, ScanOutcome, ViewPose, VisibilityBuffer, VisibleObstacle};
