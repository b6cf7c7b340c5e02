//! # Frame Kernel Golden Path
//!
//! Drives one complete frame the way the host does: configure, populate,
//! render the ground, pull the draw list, validate a move.

use mirage::raster::{
    Canvas, DetailPolicy, MotionState, RasterError, ScanlineCamera, Texture, CHANNELS,
};
use mirage::shared::constants::{FLOATS_PER_VISIBLE, MAX_PROCESSED};
use mirage::shared::Vec2;
use mirage::{
    render_ground, render_performance_into, render_quality_into, FrameKernel, KernelConfig,
    RenderMode, SharedKernel,
};
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

const MAP_W: usize = 64;
const MAP_H: usize = 64;

fn map_texture() -> Vec<u8> {
    let mut data = vec![0u8; MAP_W * MAP_H * CHANNELS];
    for (i, byte) in data.iter_mut().enumerate() {
        *byte = (i % 253) as u8;
    }
    data
}

#[test]
fn test_golden_path_frame() {
    let config = KernelConfig::from_toml_str(
        r#"
        [render]
        mode = "performance"
        base_step = 2

        [view]
        fov = 1.5707964
        max_render_distance = 50.0
        "#,
    )
    .unwrap();
    assert_eq!(config.render.mode, RenderMode::Performance);

    let mut kernel = FrameKernel::new();

    // 1. Populate the world.
    let obstacles = [
        10.0, 10.0, 2.0, 1.0, 1.0, 0.0, // the landmark from the host demo
        25.0, 25.0, 3.0, 4.0, 2.0, 1.0,
    ];
    assert_eq!(kernel.insert_batch(&obstacles, 2), 2);
    assert_eq!(kernel.count(), 2);

    // 2. Render the ground.
    let tex_data = map_texture();
    let texture = Texture::new(&tex_data, MAP_W, MAP_H).unwrap();
    let (w, h) = (64, 40);
    let mut ground = vec![0u8; w * h * CHANNELS];
    let camera = ScanlineCamera::new(
        Vec2::new(0.0, 0.0),
        FRAC_PI_4.cos(),
        FRAC_PI_4.sin(),
        48.0,
        (FRAC_PI_2 / 2.0).tan(),
    );
    render_ground(
        &mut Canvas::new(&mut ground, w, h).unwrap(),
        &texture,
        &camera,
        &config.render,
        &MotionState::IDLE,
    )
    .unwrap();
    assert!(ground.chunks(CHANNELS).all(|px| px[3] == 255));

    // 3. Pull the draw list.
    let mut draw_list = vec![0.0f32; MAX_PROCESSED * FLOATS_PER_VISIBLE];
    let n = kernel.compute_visible(
        0.0,
        0.0,
        5.0,
        FRAC_PI_4,
        4.0,
        4.0,
        0.0,
        config.view.fov,
        config.view.max_render_distance,
        1000.0,
        1000.0,
        &mut draw_list,
    );
    assert_eq!(n, 2);
    // Farthest first: the (25,25) obstacle paints before (10,10).
    assert_eq!(draw_list[0], 2.0);
    assert_eq!(draw_list[FLOATS_PER_VISIBLE], 1.0);
    // The player stands in front of both: nothing occludes.
    assert_eq!(draw_list[4], 0.0);
    assert_eq!(draw_list[FLOATS_PER_VISIBLE + 4], 0.0);

    // 4. Validate a move into the landmark: blocked.
    assert!(kernel.check_collision(10.0, 10.0, 0.4, 0.0, 11.0, 10.0, 1000.0, 1000.0));
    // A taller probe flies over the height-1 landmark but not the
    // height-4 obstacle.
    assert!(!kernel.check_collision(10.0, 10.0, 0.4, 2.0, 11.0, 10.0, 1000.0, 1000.0));
    assert!(kernel.check_collision(25.0, 25.0, 0.4, 2.0, 26.0, 25.0, 1000.0, 1000.0));
}

#[test]
fn test_raw_buffer_render_entries() {
    let tex_data = map_texture();
    let (w, h) = (48, 32);
    let camera = ScanlineCamera::new(Vec2::new(7.0, 7.0), 1.0, 0.0, 32.0, 0.5);

    // The flat entry and the view-based path agree byte for byte.
    let mut flat = vec![0u8; w * h * CHANNELS];
    render_quality_into(&mut flat, w, h, &tex_data, MAP_W, MAP_H, &camera).unwrap();

    let mut viewed = vec![0u8; w * h * CHANNELS];
    let texture = Texture::new(&tex_data, MAP_W, MAP_H).unwrap();
    mirage::raster::render_quality(
        &mut Canvas::new(&mut viewed, w, h).unwrap(),
        &texture,
        &camera,
    )
    .unwrap();
    assert_eq!(flat, viewed);

    // The adaptive flat entry fills everything too.
    let mut adaptive = vec![0u8; w * h * CHANNELS];
    render_performance_into(
        &mut adaptive,
        w,
        h,
        &tex_data,
        MAP_W,
        MAP_H,
        &camera,
        &DetailPolicy::default(),
        &MotionState::IDLE,
    )
    .unwrap();
    assert!(adaptive.chunks(CHANNELS).all(|px| px[3] == 255));

    // A mis-declared destination is rejected before any write.
    let mut short = vec![0u8; 16];
    assert!(matches!(
        render_quality_into(&mut short, w, h, &tex_data, MAP_W, MAP_H, &camera),
        Err(RasterError::BufferSizeMismatch { .. })
    ));
}

#[test]
fn test_shared_kernel_concurrent_collision_queries() {
    let shared = SharedKernel::new();
    {
        let mut kernel = shared.write();
        let mut flat = Vec::new();
        for i in 0..32 {
            flat.extend_from_slice(&[i as f32 * 8.0, 16.0, 2.0, 3.0, i as f32, 0.0]);
        }
        assert_eq!(kernel.insert_batch(&flat, 32), 32);
    }

    std::thread::scope(|scope| {
        for worker in 0..4 {
            let handle = shared.clone();
            scope.spawn(move || {
                let kernel = handle.read();
                for i in 0..32 {
                    let x = i as f32 * 8.0 + 1.0;
                    assert!(kernel.check_collision(
                        0.0,
                        0.0,
                        0.5,
                        worker as f32 * 0.1,
                        x,
                        16.0,
                        256.0,
                        256.0,
                    ));
                }
            });
        }
    });

    // After the readers drain, a writer rebuilds the world.
    shared.write().reset();
    assert_eq!(shared.read().count(), 0);
}
