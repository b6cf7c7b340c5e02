//! # Kernel Capacities & Tuning Constants
//!
//! Production configuration for the frame kernel.
//!
//! **CRITICAL:** These values are baked into the binary. The visual tuning
//! values were calibrated against the shipped host; change them and the
//! calibration is gone. Capacity changes require re-sizing the host's flat
//! output buffers.

// =============================================================================
// CAPACITIES
// =============================================================================

/// Maximum obstacles the registry will hold. Batch inserts beyond this cap
/// are silently dropped and the caller sees the shortfall in the returned
/// count.
pub const MAX_OBSTACLES: usize = 10_000;

/// Maximum visibility records produced by a single scan. Enough for every
/// wrap image a dense 800-obstacle field can produce; at the cap the scan
/// stops early and returns what it has.
pub const MAX_PROCESSED: usize = 20_000;

/// Floats per flat obstacle tuple: `(x, y, radius, height, id, kind)`.
pub const FLOATS_PER_OBSTACLE: usize = 6;

/// Floats per flat visibility tuple: `(id, dx, dy, dist_sq, occludes, kind)`.
pub const FLOATS_PER_VISIBLE: usize = 6;

// =============================================================================
// VISIBILITY TUNING
// =============================================================================

/// Wrap-tile search radius as a multiple of the max render distance.
/// Slightly over 1 so obstacles straddling the render horizon near a seam
/// are not missed.
pub const SEARCH_RADIUS_SCALE: f32 = 1.2;

/// Extra angular acceptance beyond the half field of view, in radians.
/// Over-includes near-edge obstacles so they never pop in at the frustum
/// boundary.
pub const ANGULAR_CULL_MARGIN: f32 = 0.5;

/// Forward-axis dead zone. Images at or behind this depth produce no record.
pub const NEAR_PLANE: f32 = 0.5;

// =============================================================================
// RASTERIZER TUNING
// =============================================================================

/// Tilt magnitude below which the view counts as not tilting.
pub const TILT_EPSILON: f32 = 1.0e-4;

/// Fraction of scanlines in the far detail band, measured from row 0.
pub const FAR_BAND_RATIO: f32 = 0.1;

/// Fraction of scanlines in the mid detail band, after the far band.
pub const MID_BAND_RATIO: f32 = 0.5;

/// Fraction of scanlines in the near detail band. The remainder; kept here
/// so the three ratios document the whole split.
pub const NEAR_BAND_RATIO: f32 = 0.4;
