// ash.rs - Ash puffs
//
// Rise slowly above the crater, drift sideways, and keep growing until they expire.

use glam::Vec3;
use rand::Rng;
use rand::rngs::SmallRng;

use super::{Kind, Particle};

const EMIT_HEIGHT: f32 = 2.5;
const SPREAD: f32 = 0.25;
const RISE_MIN: f32 = 0.5;
const RISE_MAX: f32 = 1.5;
const GROWTH: f32 = 1.01;
const DRIFT: f32 = 0.005;
const DECAY: f32 = 0.003;

/// Spawn above the crater
pub fn spawn(rng: &mut SmallRng) -> Particle {
    Particle {
        kind: Kind::Ash { scale: 1.0, grow: GROWTH },
        position: Vec3::new(0.0, EMIT_HEIGHT, 0.0),
        velocity: Vec3::new(
            rng.random_range(-SPREAD..SPREAD),
            rng.random_range(RISE_MIN..RISE_MAX),
            rng.random_range(-SPREAD..SPREAD),
        ),
        life: 1.0,
        decay: DECAY,
    }
}

/// Drift one tick. Ash only expires by age, so this never culls.
#[inline]
pub fn update(
    position: &mut Vec3,
    velocity: &mut Vec3,
    scale: &mut f32,
    grow: f32,
    dt: f32,
    rng: &mut SmallRng,
) -> bool {
    *position += *velocity * dt;
    *scale *= grow;

    velocity.x += rng.random_range(-DRIFT..DRIFT);
    velocity.z += rng.random_range(-DRIFT..DRIFT);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn scale_compounds() {
        let mut rng = SmallRng::seed_from_u64(1);
        let p = spawn(&mut rng);
        let (mut pos, mut vel, mut scale) = (p.position, p.velocity, 1.0);
        for _ in 0..100 {
            update(&mut pos, &mut vel, &mut scale, GROWTH, 0.016, &mut rng);
        }
        assert!((scale - GROWTH.powi(100)).abs() < 1e-3);
        assert!(pos.y > EMIT_HEIGHT);
    }

    #[test]
    fn lives_exactly_as_long_as_its_decay_allows() {
        let mut rng = SmallRng::seed_from_u64(2);
        let mut p = spawn(&mut rng);
        let mut ticks = 0;
        while p.step(0.016, &mut rng) {
            ticks += 1;
        }
        // 1.0 / 0.003 = 333.3
        assert!((332..=334).contains(&ticks), "lived {} ticks", ticks);
    }
}
