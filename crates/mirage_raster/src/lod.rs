//! Level-of-detail policy for the performance render path.
//!
//! Scanlines partition into three bands by row index - far 10%, mid 50%,
//! near 40%, counted from row 0. The labels follow the host call convention
//! (row index from the top of the buffer), not computed world depth; the
//! step values were calibrated against exactly this banding.
//!
//! Each band picks a sampling stride from a small table keyed on the motion
//! of the view: full detail when static, coarse blocks while rotating or
//! tilting (where blur is least visible), intermediate while translating.

use mirage_shared::constants::{FAR_BAND_RATIO, MID_BAND_RATIO, TILT_EPSILON};

/// View motion flags, sampled by the host once per frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct MotionState {
    /// The view is translating.
    pub moving: bool,
    /// The view is rotating.
    pub rotating: bool,
    /// Current tilt magnitude; any tilt beyond epsilon counts as rotation.
    pub tilt: f32,
}

impl MotionState {
    /// A stationary view.
    pub const IDLE: Self = Self {
        moving: false,
        rotating: false,
        tilt: 0.0,
    };

    /// Rotating, or tilting hard enough to count as rotating.
    #[must_use]
    pub fn effective_rotation(&self) -> bool {
        self.rotating || self.tilt.abs() > TILT_EPSILON
    }
}

/// Sampling policy for the performance render path.
#[derive(Debug, Clone, Copy)]
pub struct DetailPolicy {
    /// Stride used whenever the adaptive table is disabled. Clamped to a
    /// minimum of 1 at lookup.
    pub base_step: usize,
    /// Adaptive-resolution master switch.
    pub adaptive: bool,
    /// Layered-resolution switch; the band table only applies when both
    /// this and `adaptive` are set.
    pub layered: bool,
}

impl Default for DetailPolicy {
    fn default() -> Self {
        Self {
            base_step: 2,
            adaptive: true,
            layered: true,
        }
    }
}

impl DetailPolicy {
    /// Sampling stride for one band under the current motion.
    #[must_use]
    pub fn step_for(&self, band: DepthBand, motion: &MotionState) -> usize {
        let step = if self.adaptive && self.layered {
            match band {
                DepthBand::Far => {
                    if motion.effective_rotation() {
                        5
                    } else {
                        4
                    }
                }
                DepthBand::Mid => {
                    if motion.effective_rotation() {
                        5
                    } else if motion.moving {
                        4
                    } else {
                        2
                    }
                }
                DepthBand::Near => {
                    if motion.effective_rotation() {
                        8
                    } else if motion.moving {
                        6
                    } else {
                        2
                    }
                }
            }
        } else {
            self.base_step
        };
        step.max(1)
    }
}

/// Detail band of one scanline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthBand {
    /// First 10% of rows.
    Far,
    /// Next 50% of rows.
    Mid,
    /// Remaining 40% of rows.
    Near,
}

/// Precomputed band boundaries for one canvas height.
#[derive(Debug, Clone, Copy)]
pub struct BandThresholds {
    far_end: f32,
    mid_end: f32,
}

impl BandThresholds {
    /// Splits `height` rows into the three bands.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn for_height(height: usize) -> Self {
        let h = height as f32;
        Self {
            far_end: h * FAR_BAND_RATIO,
            mid_end: h * (FAR_BAND_RATIO + MID_BAND_RATIO),
        }
    }

    /// Band of a 0-indexed row. The comparison runs on the 1-based depth
    /// index, matching the projection.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn band_of(&self, row: usize) -> DepthBand {
        let depth_index = row as f32 + 1.0;
        if depth_index <= self.far_end {
            DepthBand::Far
        } else if depth_index <= self.mid_end {
            DepthBand::Mid
        } else {
            DepthBand::Near
        }
    }
}
