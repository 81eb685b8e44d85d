// flow.rs - Lava streams
//
// Spawned on the crater rim with a clockwise bias and pushed outward.
// Height is not integrated; it is snapped to the cone surface every tick.

use glam::Vec3;
use rand::Rng;
use rand::rngs::SmallRng;

use super::{Kind, Particle};
use crate::world::{CRATER_HEIGHT, FLANK_SLOPE, RIM_RADIUS, below_floor, flank_height, radius};

// Dominant flow direction (negative = clockwise seen from above)
const BIAS_ANGLE: f32 = -0.3;
const ANGLE_SPREAD: f32 = 0.4;
const RING_WIDTH: f32 = 0.1;
const SPEED_MIN: f32 = 0.3;
const SPEED_MAX: f32 = 0.8;
const ROUGHNESS: f32 = 0.05;
const DECAY_MIN: f32 = 0.002;
const DECAY_MAX: f32 = 0.007;

/// Spawn on the rim ring, heading outward
pub fn spawn(rng: &mut SmallRng) -> Particle {
    let angle = BIAS_ANGLE + rng.random_range(-ANGLE_SPREAD..ANGLE_SPREAD);
    let r = RIM_RADIUS + rng.random::<f32>() * RING_WIDTH;
    let speed = rng.random_range(SPEED_MIN..SPEED_MAX);

    Particle {
        kind: Kind::Flow { slope: FLANK_SLOPE, jitter: 0.0 },
        position: Vec3::new(angle.cos() * r, CRATER_HEIGHT, angle.sin() * r),
        velocity: Vec3::new(angle.cos() * speed, 0.0, angle.sin() * speed),
        life: 1.0,
        decay: rng.random_range(DECAY_MIN..DECAY_MAX),
    }
}

/// Slide one tick along the flank. Returns false once the flank is below the floor.
#[inline]
pub fn update(
    position: &mut Vec3,
    velocity: Vec3,
    slope: f32,
    jitter: &mut f32,
    dt: f32,
    rng: &mut SmallRng,
) -> bool {
    position.x += velocity.x * dt;
    position.z += velocity.z * dt;

    let surface = flank_height(radius(position.x, position.z), slope);
    *jitter = rng.random_range(-ROUGHNESS..ROUGHNESS);
    position.y = surface + *jitter;

    !below_floor(surface)
}
