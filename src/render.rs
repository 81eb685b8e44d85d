// render.rs - Encode simulation state to output buffers
//
// The host reads these through raw pointers into wasm memory and uploads
// them straight into its point and overlay buffers.
//
// Particles (5 floats):  x, y, z, scale, kind (0 = ejecta, 1 = flow, 2 = ash)
// Labels    (3 floats):  screen x, screen y, visible (1/0)
// Models    (8 floats):  loaded, x, y, z, scale, rotation_y, opacity, flags
//                        flags: bit 0 = depth write, bit 1 = visible

use crate::labels::LabelLayer;
use crate::models::{Models, Slot};
use crate::sim::ParticleEngine;

pub const PARTICLE_STRIDE: usize = 5;
pub const LABEL_STRIDE: usize = 3;
pub const MODEL_STRIDE: usize = 8;

const FLAG_DEPTH_WRITE: u32 = 1;
const FLAG_VISIBLE: u32 = 2;

#[derive(Debug, Default)]
pub struct Encoder {
    particles: Vec<f32>,
    labels: Vec<f32>,
    models: Vec<f32>,
}

impl Encoder {
    pub fn new(particle_cap: usize, label_count: usize) -> Self {
        Self {
            particles: Vec::with_capacity(particle_cap * PARTICLE_STRIDE),
            labels: Vec::with_capacity(label_count * LABEL_STRIDE),
            models: vec![0.0; Slot::ALL.len() * MODEL_STRIDE],
        }
    }

    pub fn particles(&self) -> &[f32] { &self.particles }
    pub fn labels(&self) -> &[f32] { &self.labels }
    pub fn models(&self) -> &[f32] { &self.models }

    /// Encode live particles
    pub fn encode_particles(&mut self, engine: &ParticleEngine) {
        self.particles.clear();
        for p in engine.particles() {
            self.particles.extend_from_slice(&[
                p.position.x,
                p.position.y,
                p.position.z,
                p.scale(),
                p.kind.tag() as f32,
            ]);
        }
    }

    /// Encode label screen positions
    pub fn encode_labels(&mut self, layer: &LabelLayer) {
        self.labels.clear();
        for label in layer.labels() {
            match label.screen {
                Some(s) if label.visible => self.labels.extend_from_slice(&[s.x, s.y, 1.0]),
                _ => self.labels.extend_from_slice(&[0.0, 0.0, 0.0]),
            }
        }
    }

    /// Encode model placements, one block per slot
    pub fn encode_models(&mut self, models: &Models) {
        for slot in Slot::ALL {
            let base = slot.index() * MODEL_STRIDE;
            let out = &mut self.models[base..base + MODEL_STRIDE];

            let Some(m) = models.get(slot) else {
                out.fill(0.0);
                continue;
            };

            let mut flags = 0;
            if m.depth_write { flags |= FLAG_DEPTH_WRITE; }
            if m.visible { flags |= FLAG_VISIBLE; }

            let t = m.placement.translation;
            out.copy_from_slice(&[
                1.0,
                t.x,
                t.y,
                t.z,
                m.placement.scale,
                m.placement.rotation_y,
                m.opacity,
                flags as f32,
            ]);
        }
    }
}
