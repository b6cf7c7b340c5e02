//! Mathematical types shared between the rasterizer and the obstacle engine.
//!
//! The world is a torus: coordinates repeat modulo the map dimensions, so
//! every displacement and every texel lookup goes through one of the wrap
//! helpers below. All arithmetic is `f32` to match the host's flat buffers.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// 2D vector - world-plane positions, displacements, directions.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec2 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
}

impl Vec2 {
    /// Creates a new Vec2
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Zero vector
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Converts to array
    #[must_use]
    pub const fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }

    /// Dot product
    #[must_use]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Length squared (avoids sqrt)
    #[must_use]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// Toroidal map dimensions.
///
/// Width and height are world units, not texels. A map is degenerate when
/// either dimension is non-positive; wrap math is undefined there and the
/// callers are expected to bail out first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MapSize {
    /// World-space width of one map period.
    pub width: f32,
    /// World-space height of one map period.
    pub height: f32,
}

impl MapSize {
    /// Creates a new map size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when wrap math cannot be performed on this map.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Folds a raw displacement into the nearest toroidal image.
    ///
    /// One half-period correction per axis: if the raw delta exceeds half the
    /// map dimension, the displacement through the opposite seam is shorter,
    /// so one full period is subtracted (or added).
    #[must_use]
    pub fn wrap_delta(self, delta: Vec2) -> Vec2 {
        Vec2::new(
            wrap_axis(delta.x, self.width),
            wrap_axis(delta.y, self.height),
        )
    }
}

/// Folds one displacement axis by at most one map period.
#[inline]
#[must_use]
pub fn wrap_axis(delta: f32, period: f32) -> f32 {
    let half = period * 0.5;
    if delta > half {
        delta - period
    } else if delta < -half {
        delta + period
    } else {
        delta
    }
}

/// Wraps a texel index into `[0, modulus)`.
///
/// Negative values normalize into the period instead of truncating toward
/// zero, so sampling one texel left of the seam lands on the far column.
#[inline]
#[must_use]
pub fn wrap_index(value: i32, modulus: i32) -> i32 {
    value.rem_euclid(modulus)
}

/// Absolute angular separation between a target bearing and a heading.
///
/// Folded once at pi: both inputs are expected in atan2 range, which is all
/// the visibility scan ever feeds it.
#[inline]
#[must_use]
pub fn angle_between(target: f32, heading: f32) -> f32 {
    let diff = (target - heading).abs();
    if diff > std::f32::consts::PI {
        std::f32::consts::TAU - diff
    } else {
        diff
    }
}
