//! # Frame Kernel
//!
//! The one value the host constructs at startup and threads through every
//! per-frame call. It owns the only mutable state in the system - the
//! obstacle registry and the visibility scratch buffer - which makes the
//! single-writer/multiple-reader rule visible in the types instead of
//! hidden in module globals.

use crate::config::{RenderMode, RenderSettings};
use mirage_raster::{
    render_performance, render_quality, Canvas, DetailPolicy, MotionState, RasterResult,
    ScanlineCamera, Texture,
};
use mirage_shared::constants::{FLOATS_PER_OBSTACLE, FLOATS_PER_VISIBLE};
use mirage_shared::{MapSize, Vec2};
use mirage_world::{
    check_collision, scan_visible, ObstacleField, Probe, ViewPose, VisibilityBuffer,
};

/// Draws the ground plane using the configured render path.
///
/// Stateless; safe to call concurrently with anything except a mutation of
/// the same canvas.
///
/// # Errors
///
/// Propagates [`mirage_raster::RasterError`] precondition violations.
pub fn render_ground(
    canvas: &mut Canvas<'_>,
    texture: &Texture<'_>,
    camera: &ScanlineCamera,
    settings: &RenderSettings,
    motion: &MotionState,
) -> RasterResult<()> {
    match settings.mode {
        RenderMode::Quality => render_quality(canvas, texture, camera),
        RenderMode::Performance => {
            render_performance(canvas, texture, camera, &settings.detail_policy(), motion)
        }
    }
}

/// Quality render straight from raw host buffers.
///
/// Builds the validated views and runs the full-detail path; the flat
/// mirror of [`render_ground`] for hosts that keep no view types around.
///
/// # Errors
///
/// Propagates view-construction and width preconditions as
/// [`mirage_raster::RasterError`].
#[allow(clippy::too_many_arguments)]
pub fn render_quality_into(
    dst: &mut [u8],
    dst_w: usize,
    dst_h: usize,
    src: &[u8],
    src_w: usize,
    src_h: usize,
    camera: &ScanlineCamera,
) -> RasterResult<()> {
    let mut canvas = Canvas::new(dst, dst_w, dst_h)?;
    let texture = Texture::new(src, src_w, src_h)?;
    render_quality(&mut canvas, &texture, camera)
}

/// Adaptive render straight from raw host buffers.
///
/// # Errors
///
/// Propagates view-construction and width preconditions as
/// [`mirage_raster::RasterError`].
#[allow(clippy::too_many_arguments)]
pub fn render_performance_into(
    dst: &mut [u8],
    dst_w: usize,
    dst_h: usize,
    src: &[u8],
    src_w: usize,
    src_h: usize,
    camera: &ScanlineCamera,
    policy: &DetailPolicy,
    motion: &MotionState,
) -> RasterResult<()> {
    let mut canvas = Canvas::new(dst, dst_w, dst_h)?;
    let texture = Texture::new(src, src_w, src_h)?;
    render_performance(&mut canvas, &texture, camera, policy, motion)
}

/// The owned frame context: registry plus scan scratch.
///
/// All storage is pre-allocated at construction; no method allocates.
pub struct FrameKernel {
    field: ObstacleField,
    scratch: VisibilityBuffer,
}

impl FrameKernel {
    /// Creates a kernel with full capacity pre-allocated.
    #[must_use]
    pub fn new() -> Self {
        Self {
            field: ObstacleField::new(),
            scratch: VisibilityBuffer::new(),
        }
    }

    /// Clears the obstacle registry. Idempotent.
    pub fn reset(&mut self) {
        self.field.reset();
    }

    /// Inserts up to `count` obstacles from flat 6-float tuples
    /// `(x, y, radius, height, id, kind)`.
    ///
    /// Returns the number actually inserted - less than `count` when the
    /// registry caps out or the slice runs short.
    pub fn insert_batch(&mut self, flat: &[f32], count: usize) -> usize {
        let take = count.min(flat.len() / FLOATS_PER_OBSTACLE);
        self.field.insert_batch(&flat[..take * FLOATS_PER_OBSTACLE])
    }

    /// Number of registered obstacles.
    #[must_use]
    pub fn count(&self) -> usize {
        self.field.len()
    }

    /// Read access to the registry for direct queries.
    #[must_use]
    pub fn field(&self) -> &ObstacleField {
        &self.field
    }

    /// Scans visibility and writes flat records into `out`, laid out as
    /// 6-float tuples `(id, dx, dy, dist_sq, occludes, kind)`, farthest
    /// first. Returns the number of records written.
    ///
    /// `out` should hold `MAX_PROCESSED * 6` floats; an empty slice is the
    /// absent-output case and yields zero records. `camera_z` is accepted
    /// for call-surface parity and does not participate in the plane math.
    #[allow(clippy::too_many_arguments)]
    pub fn compute_visible(
        &mut self,
        camera_x: f32,
        camera_y: f32,
        _camera_z: f32,
        camera_angle: f32,
        player_x: f32,
        player_y: f32,
        player_height: f32,
        fov: f32,
        max_distance: f32,
        map_width: f32,
        map_height: f32,
        out: &mut [f32],
    ) -> usize {
        let slots = out.len() / FLOATS_PER_VISIBLE;
        if slots == 0 {
            tracing::warn!("visibility output buffer missing, returning no records");
            return 0;
        }

        let view = ViewPose {
            camera: Vec2::new(camera_x, camera_y),
            heading: camera_angle,
            player: Vec2::new(player_x, player_y),
            player_height,
            fov,
            max_distance,
            map: MapSize::new(map_width, map_height),
        };
        let outcome = scan_visible(&self.field, &view, &mut self.scratch);
        if outcome.truncated {
            tracing::warn!(
                "visibility scan truncated at {} records, frame may be incomplete",
                outcome.visible
            );
        }

        let emit = outcome.visible.min(slots);
        if emit < outcome.visible {
            tracing::warn!(
                "visibility output holds {emit} of {} records",
                outcome.visible
            );
        }
        for (slot, record) in out
            .chunks_exact_mut(FLOATS_PER_VISIBLE)
            .zip(&self.scratch.records()[..emit])
        {
            slot.copy_from_slice(&record.to_floats());
        }
        emit
    }

    /// Validates a proposed player move against the registry.
    ///
    /// The current player position is accepted for call-surface parity;
    /// only the proposed position enters the overlap test.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn check_collision(
        &self,
        _player_x: f32,
        _player_y: f32,
        player_radius: f32,
        player_height: f32,
        new_x: f32,
        new_y: f32,
        map_width: f32,
        map_height: f32,
    ) -> bool {
        check_collision(
            &self.field,
            &Probe {
                radius: player_radius,
                height: player_height,
            },
            Vec2::new(new_x, new_y),
            MapSize::new(map_width, map_height),
        )
    }
}

impl Default for FrameKernel {
    fn default() -> Self {
        Self::new()
    }
}
