// particle.rs - One eruption particle
//
// Shared state lives on `Particle`; per-family state lives in `Kind`.
// Each family has its own update in a sibling module, dispatched here.

use glam::Vec3;
use rand::rngs::SmallRng;

use super::{ash, ejecta, flow};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Kind {
    /// Molten material thrown out of the crater
    Ejecta { gravity: f32 },
    /// Lava creeping down the flank. `jitter` is the surface roughness
    /// added to the height on the last tick.
    Flow { slope: f32, jitter: f32 },
    /// Rising, expanding ash
    Ash { scale: f32, grow: f32 },
}

impl Kind {
    /// Numeric tag written into the output buffer
    pub fn tag(&self) -> u8 {
        match self {
            Kind::Ejecta { .. } => 0,
            Kind::Flow { .. } => 1,
            Kind::Ash { .. } => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub kind: Kind,
    pub position: Vec3,
    pub velocity: Vec3,
    /// Remaining life, 1.0 at spawn
    pub life: f32,
    /// Life lost per tick
    pub decay: f32,
}

impl Particle {
    /// Advance one tick. Returns false once the particle should be culled.
    pub fn step(&mut self, dt: f32, rng: &mut SmallRng) -> bool {
        let in_bounds = match &mut self.kind {
            Kind::Ejecta { gravity } => {
                ejecta::update(&mut self.position, &mut self.velocity, *gravity, dt)
            }
            Kind::Flow { slope, jitter } => {
                flow::update(&mut self.position, self.velocity, *slope, jitter, dt, rng)
            }
            Kind::Ash { scale, grow } => {
                ash::update(&mut self.position, &mut self.velocity, scale, *grow, dt, rng)
            }
        };

        self.life -= self.decay;
        in_bounds && self.life > 0.0
    }

    /// Visual size multiplier
    pub fn scale(&self) -> f32 {
        match self.kind {
            Kind::Ejecta { .. } => self.life.max(0.0),
            Kind::Flow { .. } => self.life.max(0.0) * 2.0,
            Kind::Ash { scale, .. } => scale,
        }
    }
}
