//! Ground-plane render entry points.
//!
//! Both walk the destination top-to-bottom, derive one scanline per
//! computed row and copy map texels across it. Work per call is bounded by
//! the canvas size; nothing is retained between calls.

use crate::buffer::{Canvas, Texture};
use crate::error::{RasterError, RasterResult};
use crate::lod::{BandThresholds, DetailPolicy, MotionState};
use crate::projection::ScanlineCamera;

/// Full-detail render: one map sample per destination pixel.
///
/// Writes every pixel of the canvas exactly once, alpha forced opaque.
///
/// # Errors
///
/// [`RasterError::ZeroDestinationWidth`] when the canvas has no columns.
pub fn render_quality(
    canvas: &mut Canvas<'_>,
    texture: &Texture<'_>,
    camera: &ScanlineCamera,
) -> RasterResult<()> {
    if canvas.width() == 0 {
        return Err(RasterError::ZeroDestinationWidth);
    }

    for y in 0..canvas.height() {
        let line = camera.scanline(y, canvas.width());
        let mut cursor = line.origin;
        for x in 0..canvas.width() {
            canvas.put(x, y, texture.sample_wrapped(cursor.x, cursor.y));
            cursor += line.step;
        }
    }
    Ok(())
}

/// Adaptive render: same projection, reduced sampling under motion.
///
/// Rows whose index is not a multiple of their band's stride are copied
/// bit-for-bit from the most recently computed row instead of being
/// re-projected. Computed rows take one map sample per `step`-wide block
/// and flood the block with it; the world increment per block is `step`
/// per-pixel increments, so the projection stays correct at the reduced
/// rate.
///
/// # Errors
///
/// [`RasterError::ZeroDestinationWidth`] when the canvas has no columns.
#[allow(clippy::cast_precision_loss)]
pub fn render_performance(
    canvas: &mut Canvas<'_>,
    texture: &Texture<'_>,
    camera: &ScanlineCamera,
    policy: &DetailPolicy,
    motion: &MotionState,
) -> RasterResult<()> {
    if canvas.width() == 0 {
        return Err(RasterError::ZeroDestinationWidth);
    }

    let bands = BandThresholds::for_height(canvas.height());
    let mut last_computed: Option<usize> = None;

    for y in 0..canvas.height() {
        let step = policy.step_for(bands.band_of(y), motion);

        if y > 0 && y % step != 0 {
            if let Some(src) = last_computed {
                canvas.copy_row(src, y);
                continue;
            }
        }
        last_computed = Some(y);

        let line = camera.scanline(y, canvas.width());
        let block_step = line.step * step as f32;
        let mut cursor = line.origin;

        for x in (0..canvas.width()).step_by(step) {
            let rgb = texture.sample_wrapped(cursor.x, cursor.y);
            let end = (x + step).min(canvas.width());
            canvas.fill_run(y, x, end, rgb);
            cursor += block_step;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::CHANNELS;
    use mirage_shared::Vec2;

    fn gradient_texture(width: usize, height: usize) -> Vec<u8> {
        let mut data = vec![0u8; width * height * CHANNELS];
        for y in 0..height {
            for x in 0..width {
                let idx = (y * width + x) * CHANNELS;
                data[idx] = (x * 16) as u8;
                data[idx + 1] = (y * 16) as u8;
                data[idx + 2] = 200;
                data[idx + 3] = 0; // source alpha must never leak through
            }
        }
        data
    }

    fn camera() -> ScanlineCamera {
        ScanlineCamera::new(Vec2::new(2.0, 3.0), 1.0, 0.0, 24.0, 0.7)
    }

    #[test]
    fn test_zero_width_is_rejected() {
        let tex_data = gradient_texture(4, 4);
        let texture = Texture::new(&tex_data, 4, 4).unwrap();
        let mut dst: Vec<u8> = Vec::new();
        let mut canvas = Canvas::new(&mut dst, 0, 8).unwrap();
        assert_eq!(
            render_quality(&mut canvas, &texture, &camera()),
            Err(RasterError::ZeroDestinationWidth)
        );
        assert_eq!(
            render_performance(
                &mut canvas,
                &texture,
                &camera(),
                &DetailPolicy::default(),
                &MotionState::IDLE
            ),
            Err(RasterError::ZeroDestinationWidth)
        );
    }

    #[test]
    fn test_zero_height_renders_nothing() {
        let tex_data = gradient_texture(4, 4);
        let texture = Texture::new(&tex_data, 4, 4).unwrap();
        let mut dst: Vec<u8> = Vec::new();
        let mut canvas = Canvas::new(&mut dst, 8, 0).unwrap();
        assert!(render_quality(&mut canvas, &texture, &camera()).is_ok());
    }

    #[test]
    fn test_quality_is_deterministic() {
        let tex_data = gradient_texture(8, 8);
        let texture = Texture::new(&tex_data, 8, 8).unwrap();

        let mut first = vec![0u8; 16 * 12 * CHANNELS];
        let mut second = vec![1u8; 16 * 12 * CHANNELS];
        render_quality(&mut Canvas::new(&mut first, 16, 12).unwrap(), &texture, &camera())
            .unwrap();
        render_quality(&mut Canvas::new(&mut second, 16, 12).unwrap(), &texture, &camera())
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_performance_block_fill_is_uniform() {
        let tex_data = gradient_texture(8, 8);
        let texture = Texture::new(&tex_data, 8, 8).unwrap();

        let motion = MotionState {
            moving: false,
            rotating: true,
            tilt: 0.0,
        };
        let mut dst = vec![0u8; 32 * 30 * CHANNELS];
        render_performance(
            &mut Canvas::new(&mut dst, 32, 30).unwrap(),
            &texture,
            &camera(),
            &DetailPolicy::default(),
            &motion,
        )
        .unwrap();

        // Row 24 is in the near band (stride 8 while rotating) and is a
        // computed row: each 8-pixel block holds one color.
        let row = &dst[24 * 32 * CHANNELS..25 * 32 * CHANNELS];
        for block in row.chunks(8 * CHANNELS) {
            let first = &block[..CHANNELS];
            for pixel in block.chunks(CHANNELS) {
                assert_eq!(pixel, first);
            }
        }
    }
}
