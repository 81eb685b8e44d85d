// sim/ - Eruption simulation
//
// Three particle families (ejecta, flow, ash) in one live set, plus the
// scale/opacity ramp for the ash-cloud model. Each family in its own module.

mod ash;
mod ash_cloud;
mod ejecta;
mod flow;
mod particle;

pub use ash_cloud::AshCloud;
pub use particle::{Kind, Particle};

use log::debug;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::config::ParticleConfig;

/// Particle engine driven once per rendered frame
pub struct ParticleEngine {
    particles: Vec<Particle>,
    active: bool,
    config: ParticleConfig,
    rng: SmallRng,
}

impl ParticleEngine {
    pub fn new(config: ParticleConfig, seed: u64) -> Self {
        Self {
            particles: Vec::with_capacity(config.cap),
            active: false,
            config,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn start_eruption(&mut self) {
        if self.active { return; }
        debug!("particle engine started");
        self.active = true;
    }

    /// Stop spawning and drop every live particle at once
    pub fn stop_eruption(&mut self) {
        if self.active {
            debug!("particle engine stopped with {} live particles", self.particles.len());
        }
        self.active = false;
        self.clear();
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// One fixed step: spawn this tick's quota, then move and cull
    pub fn advance(&mut self, dt: f32) {
        if self.active {
            self.spawn(self.config.ejecta_per_tick, ejecta::spawn);
            self.spawn(self.config.flow_per_tick, flow::spawn);
            self.spawn(self.config.ash_per_tick, ash::spawn);
        }

        let rng = &mut self.rng;
        self.particles.retain_mut(|p| p.step(dt, rng));
    }

    /// Advance by the configured frame timestep
    pub fn tick(&mut self) {
        self.advance(self.config.dt);
    }

    fn spawn(&mut self, count: usize, make: fn(&mut SmallRng) -> Particle) {
        for _ in 0..count {
            if self.particles.len() >= self.config.cap { return; }
            let p = make(&mut self.rng);
            self.particles.push(p);
        }
    }

    pub fn is_active(&self) -> bool { self.active }
    pub fn len(&self) -> usize { self.particles.len() }
    pub fn is_empty(&self) -> bool { self.particles.is_empty() }
    pub fn cap(&self) -> usize { self.config.cap }
    pub fn particles(&self) -> &[Particle] { &self.particles }

    /// Live particles with the given output tag
    pub fn count_tagged(&self, tag: u8) -> usize {
        self.particles.iter().filter(|p| p.kind.tag() == tag).count()
    }
}
