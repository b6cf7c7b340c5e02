//! # Obstacle Visibility
//!
//! Per-frame visibility over the obstacle field. Because the world is a
//! torus, every obstacle is really an infinite lattice of images one map
//! period apart; the scan enumerates the images inside the search radius,
//! filters them against the view, and returns one record per image that
//! survives - sorted farthest-first so the host can paint back-to-front
//! without another sort.
//!
//! ```text
//! for each obstacle:
//!   for each tile image in [-tiles_x..tiles_x] x [-tiles_y..tiles_y]:
//!     too far?            reject (squared distance)
//!     outside view cone?  reject (half fov + pop-in margin)
//!     behind near plane?  reject (no record at all)
//!     record + occlusion flag
//! sort descending by squared distance
//! ```
//!
//! The record buffer is pre-allocated at the processed cap; hitting the cap
//! stops the scan early and the records already collected are still sorted
//! and returned. Partial-frame degradation, not a failure.

use crate::obstacle::ObstacleField;
use mirage_shared::constants::{
    ANGULAR_CULL_MARGIN, FLOATS_PER_VISIBLE, MAX_PROCESSED, NEAR_PLANE, SEARCH_RADIUS_SCALE,
};
use mirage_shared::math::angle_between;
use mirage_shared::{MapSize, Vec2};

/// One drawable obstacle image.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VisibleObstacle {
    /// Identifier of the source obstacle.
    pub id: i32,
    /// Tag of the source obstacle.
    pub kind: i32,
    /// Camera-relative X displacement to this toroidal image.
    pub dx: f32,
    /// Camera-relative Y displacement to this toroidal image.
    pub dy: f32,
    /// Squared distance from the camera to this image.
    pub dist_sq: f32,
    /// True when this image sits between the camera and the player along
    /// view depth and is tall enough to hide the player.
    pub occludes_player: bool,
}

impl VisibleObstacle {
    /// Flattens into the host layout `(id, dx, dy, dist_sq, occludes, kind)`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_floats(&self) -> [f32; FLOATS_PER_VISIBLE] {
        [
            self.id as f32,
            self.dx,
            self.dy,
            self.dist_sq,
            f32::from(u8::from(self.occludes_player)),
            self.kind as f32,
        ]
    }
}

/// Camera and player state for one visibility scan.
#[derive(Clone, Copy, Debug)]
pub struct ViewPose {
    /// Camera position on the world plane.
    pub camera: Vec2,
    /// Camera heading in radians (atan2 convention).
    pub heading: f32,
    /// Player position on the world plane.
    pub player: Vec2,
    /// Player height; obstacles no taller than this never occlude.
    pub player_height: f32,
    /// Horizontal field of view in radians.
    pub fov: f32,
    /// Maximum render distance in world units.
    pub max_distance: f32,
    /// Toroidal map dimensions.
    pub map: MapSize,
}

/// Result summary of one scan.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScanOutcome {
    /// Records produced, already sorted back-to-front.
    pub visible: usize,
    /// True when the processed cap stopped the scan early; the host must
    /// treat the frame as possibly incomplete.
    pub truncated: bool,
}

/// Pre-allocated record storage, capacity [`MAX_PROCESSED`].
///
/// Owned by the frame context and reused every scan; construction is the
/// only allocation it ever performs.
pub struct VisibilityBuffer {
    records: Box<[VisibleObstacle]>,
    len: usize,
}

impl VisibilityBuffer {
    /// Creates an empty buffer with full capacity pre-allocated.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: vec![VisibleObstacle::default(); MAX_PROCESSED].into_boxed_slice(),
            len: 0,
        }
    }

    /// Records from the last scan, back-to-front.
    #[must_use]
    pub fn records(&self) -> &[VisibleObstacle] {
        &self.records[..self.len]
    }

    /// Number of records from the last scan.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True when the last scan produced nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.records.len()
    }

    fn clear(&mut self) {
        self.len = 0;
    }

    /// Stores a record; false when the buffer is at capacity.
    fn push(&mut self, record: VisibleObstacle) -> bool {
        if self.len >= self.records.len() {
            return false;
        }
        self.records[self.len] = record;
        self.len += 1;
        true
    }

    /// Stable in-place insertion sort, descending by squared distance.
    ///
    /// Equal distances keep scan order. The stdlib stable sort allocates
    /// scratch, which the frame path forbids; record counts are small
    /// enough that quadratic worst case is irrelevant next to the scan
    /// itself.
    fn sort_back_to_front(&mut self) {
        let records = &mut self.records[..self.len];
        for i in 1..records.len() {
            let mut j = i;
            while j > 0 && records[j - 1].dist_sq < records[j].dist_sq {
                records.swap(j - 1, j);
                j -= 1;
            }
        }
    }
}

impl Default for VisibilityBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Scans the field and fills `out` with the visible images, back-to-front.
///
/// An empty field or a degenerate map yields zero records - logged, never
/// fatal; the host checks the returned count before consuming the buffer.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn scan_visible(
    field: &ObstacleField,
    view: &ViewPose,
    out: &mut VisibilityBuffer,
) -> ScanOutcome {
    out.clear();

    if field.is_empty() {
        tracing::debug!("visibility scan requested with no obstacles registered");
        return ScanOutcome::default();
    }
    if view.map.is_degenerate() {
        tracing::warn!(
            "visibility scan skipped: degenerate map {}x{}",
            view.map.width,
            view.map.height
        );
        return ScanOutcome::default();
    }

    let half_fov = view.fov / 2.0;
    let cos_a = view.heading.cos();
    let sin_a = view.heading.sin();
    let forward = Vec2::new(cos_a, sin_a);

    // Player depth along the view axis, through the nearest wrap image.
    let player_delta = view.map.wrap_delta(view.player - view.camera);
    let player_forward = player_delta.dot(forward);

    // Slightly over-sized search so obstacles straddling the render
    // horizon near a seam still enumerate.
    let search_radius = view.max_distance * SEARCH_RADIUS_SCALE;
    let tiles_x = (search_radius / view.map.width).ceil() as i32;
    let tiles_y = (search_radius / view.map.height).ceil() as i32;
    let limit_sq = view.max_distance * view.max_distance;

    let mut truncated = false;
    'scan: for obstacle in field.obstacles() {
        for tx in -tiles_x..=tiles_x {
            for ty in -tiles_y..=tiles_y {
                let delta = Vec2::new(
                    obstacle.x + tx as f32 * view.map.width - view.camera.x,
                    obstacle.y + ty as f32 * view.map.height - view.camera.y,
                );
                let dist_sq = delta.length_squared();
                if dist_sq >= limit_sq {
                    continue;
                }

                let bearing = delta.y.atan2(delta.x);
                if angle_between(bearing, view.heading) > half_fov + ANGULAR_CULL_MARGIN {
                    continue;
                }

                // Near-plane reject comes after the cone and distance
                // filters: a behind-camera image produces no record at
                // all, not an occluded one.
                let forward_dist = delta.dot(forward);
                if forward_dist <= NEAR_PLANE {
                    continue;
                }

                let occludes = view.player_height < obstacle.height
                    && forward_dist < player_forward;

                let stored = out.push(VisibleObstacle {
                    id: obstacle.id,
                    kind: obstacle.kind,
                    dx: delta.x,
                    dy: delta.y,
                    dist_sq,
                    occludes_player: occludes,
                });
                if !stored {
                    truncated = true;
                    break 'scan;
                }
            }
        }
    }

    out.sort_back_to_front();
    ScanOutcome {
        visible: out.len(),
        truncated,
    }
}
