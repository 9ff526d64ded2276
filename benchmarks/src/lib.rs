//! Shared setup helpers for rein-shadow benchmarks.
//!
//! ## Running
//!
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench shadow
//!
//! Filter by group:
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench shadow -- frame

use glam::{Vec2, Vec3};
use rein_shadow::{PlaneScene, PlayerPose, ShadowRequest, ShadowType, Surface, SurfaceKind};

// ---------------------------------------------------------------------------
// Scenes
// ---------------------------------------------------------------------------

/// A grid of `n` tiles alternating between flat ground, ramps and ice, with a
/// pool of water in one corner.
pub fn setup_tiled_scene(n: usize) -> anyhow::Result<PlaneScene> {
    let mut scene = PlaneScene::new();
    let cols = (n as f32).sqrt().ceil() as usize;
    let tile = 400.0;

    for i in 0..n {
        let min = Vec2::new((i % cols) as f32 * tile, (i / cols) as f32 * tile);
        let max = min + Vec2::splat(tile);
        let center = (min + max) * 0.5;
        let surface = match i % 3 {
            0 => Surface::horizontal(0.0, SurfaceKind::Default),
            1 => Surface::through_point(
                Vec3::new(0.25, 1.0, 0.1),
                Vec3::new(center.x, 0.0, center.y),
                SurfaceKind::Default,
            ),
            _ => Surface::horizontal(20.0, SurfaceKind::Ice),
        };
        scene.add_floor(surface, min, max)?;
    }

    scene.add_water(Vec2::ZERO, Vec2::splat(tile * 2.0), 60.0, true)?;
    Ok(scene)
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// `n` shadow requests spread over the scene, cycling through shadow types.
pub fn setup_requests(n: usize, scene_tiles: usize) -> Vec<ShadowRequest<'static>> {
    let cols = (scene_tiles as f32).sqrt().ceil() as usize;
    let extent = cols as f32 * 400.0;
    let types = [
        ShadowType::PlayerCircle(PlayerPose::default()),
        ShadowType::Circle,
        ShadowType::SquareScalable,
        ShadowType::SquareToggleable,
    ];

    (0..n)
        .map(|i| {
            // Deterministic scatter without pulling in an RNG
            let t = i as f32 * 0.618_034;
            let x = (t.fract()) * extent;
            let z = ((t * 1.7).fract()) * extent;
            let y = 50.0 + (i % 8) as f32 * 100.0;
            ShadowRequest::new(Vec3::new(x, y, z), 200, 200, types[i % types.len()])
                .facing_yaw(t)
        })
        .collect()
}
