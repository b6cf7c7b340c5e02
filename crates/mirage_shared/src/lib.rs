//! # MIRAGE Shared
//!
//! Common ground for the two halves of the kernel:
//! - `math`: the plane vector, toroidal wrap helpers and angle folding used
//!   by both the rasterizer and the obstacle engine
//! - `constants`: capacity caps and calibrated tuning values, baked into the
//!   binary at build time
//!
//! This crate owns nothing frame-stateful. Everything here is `Copy`, cheap,
//! and safe to pass across the host boundary.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod constants;
pub mod math;

pub use math::{MapSize, Vec2};
