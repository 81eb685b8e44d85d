// ejecta.rs - Lava bursts
//
// Thrown up out of the crater, then pulled back down by gravity.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;
use rand::rngs::SmallRng;

use super::{Kind, Particle};
use crate::world::{CRATER_HEIGHT, below_floor};

const VENT_RADIUS: f32 = 0.3;
const SPREAD: f32 = 0.75;
const LAUNCH_MIN: f32 = 3.0;
const LAUNCH_MAX: f32 = 8.0;
const GRAVITY: f32 = -9.8;
const DECAY_MIN: f32 = 0.005;
const DECAY_MAX: f32 = 0.015;

/// Spawn at a random point on the vent disc
pub fn spawn(rng: &mut SmallRng) -> Particle {
    let angle = rng.random::<f32>() * TAU;
    let r = rng.random::<f32>() * VENT_RADIUS;

    Particle {
        kind: Kind::Ejecta { gravity: GRAVITY },
        position: Vec3::new(angle.cos() * r, CRATER_HEIGHT, angle.sin() * r),
        velocity: Vec3::new(
            rng.random_range(-SPREAD..SPREAD),
            rng.random_range(LAUNCH_MIN..LAUNCH_MAX),
            rng.random_range(-SPREAD..SPREAD),
        ),
        life: 1.0,
        decay: rng.random_range(DECAY_MIN..DECAY_MAX),
    }
}

/// Integrate one tick. Returns false once the particle fell through the floor.
#[inline]
pub fn update(position: &mut Vec3, velocity: &mut Vec3, gravity: f32, dt: f32) -> bool {
    velocity.y += gravity * dt;
    *position += *velocity * dt;
    !below_floor(position.y)
}
