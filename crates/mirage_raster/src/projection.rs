//! Scanline projection.
//!
//! The ground plane is drawn one horizontal scanline at a time. Row `y`
//! projects to depth `focal / (y + 1)` - the hyperbolic falloff that packs
//! rows densely near the camera and sparsely at the horizon. At each depth
//! the visible strip is `2 * depth * tan(fov/2)` wide; rotating depth and
//! lateral vectors by the camera heading yields the world-space endpoints.

use mirage_shared::Vec2;

/// Camera scalars for one rasterized frame.
///
/// The host precomputes the heading trig and the focal product once per
/// frame; the rasterizer treats them as plain scalars.
#[derive(Debug, Clone, Copy)]
pub struct ScanlineCamera {
    /// Camera position on the world plane.
    pub position: Vec2,
    /// Cosine of the camera heading.
    pub cos_angle: f32,
    /// Sine of the camera heading.
    pub sin_angle: f32,
    /// Focal length times scanline height - the numerator of the depth
    /// projection.
    pub focal: f32,
    /// Tangent of half the horizontal field of view.
    pub tan_half_fov: f32,
}

impl ScanlineCamera {
    /// Creates a camera from precomputed scalars.
    #[must_use]
    pub const fn new(
        position: Vec2,
        cos_angle: f32,
        sin_angle: f32,
        focal: f32,
        tan_half_fov: f32,
    ) -> Self {
        Self {
            position,
            cos_angle,
            sin_angle,
            focal,
            tan_half_fov,
        }
    }

    /// Derives the world-space walk for one destination row.
    ///
    /// `columns` must be non-zero; the render entry points reject a zero
    /// width before the first row is derived.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn scanline(&self, row: usize, columns: usize) -> Scanline {
        let depth_index = row as f32 + 1.0;
        let dist = self.focal / depth_index;
        let lat = dist * self.tan_half_fov;

        let dist_cos = dist * self.cos_angle;
        let dist_sin = dist * self.sin_angle;
        let lat_sin = lat * self.sin_angle;
        let lat_cos = lat * self.cos_angle;

        let left = Vec2::new(
            self.position.x + dist_cos - lat_sin,
            self.position.y + dist_sin + lat_cos,
        );
        let right = Vec2::new(
            self.position.x + dist_cos + lat_sin,
            self.position.y + dist_sin - lat_cos,
        );

        let inv_columns = 1.0 / columns as f32;
        Scanline {
            origin: left,
            step: (right - left) * inv_columns,
        }
    }
}

/// One row's world-space walk: start at `origin`, advance by `step` per
/// destination column.
#[derive(Debug, Clone, Copy)]
pub struct Scanline {
    /// World position under the leftmost destination column.
    pub origin: Vec2,
    /// World increment per destination column.
    pub step: Vec2,
}
