// volcano.rs - Scene controller
//
// Owns every piece of per-frame state and runs the frame in a fixed order:
// queued loads, camera, exterior fade, labels, particles, ash cloud, encode.

use log::{debug, info};

use crate::camera::OrbitCamera;
use crate::config::{Config, Explanation};
use crate::error::Result;
use crate::labels::LabelLayer;
use crate::models::{LoadQueue, Models, Slot};
use crate::render::Encoder;
use crate::scene::{ERUPTION_LABELS, ERUPTION_NARRATION, RESET_NARRATION};
use crate::sim::{AshCloud, ParticleEngine};
use crate::world::{exterior_fade, exterior_opacity};

/// Text currently shown in the character panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Narration {
    pub title: String,
    pub text: String,
}

impl Narration {
    fn from_pair((title, text): (&str, &str)) -> Self {
        Self { title: title.to_string(), text: text.to_string() }
    }
}

impl From<&Explanation> for Narration {
    fn from(e: &Explanation) -> Self {
        Self { title: e.title.clone(), text: e.text.clone() }
    }
}

pub struct Volcano {
    config: Config,
    camera: OrbitCamera,
    models: Models,
    loads: LoadQueue,
    labels: LabelLayer,
    particles: ParticleEngine,
    ash_cloud: AshCloud,
    encoder: Encoder,

    erupting: bool,
    narration: Option<Narration>,

    width: u32,
    height: u32,
}

impl Volcano {
    pub fn new(config: Config, seed: u64) -> Result<Self> {
        config.validate()?;

        let camera = OrbitCamera::new(&config.camera, &config.controls);
        let labels = LabelLayer::new(&config.labels, config.explanations.clone());
        let particles = ParticleEngine::new(config.particles.clone(), seed);
        let encoder = Encoder::new(config.particles.cap, config.labels.len());
        let models = Models::new(config.models.target_size);

        Ok(Self {
            config,
            camera,
            models,
            loads: LoadQueue::new(),
            labels,
            particles,
            ash_cloud: AshCloud::new(),
            encoder,
            erupting: false,
            narration: None,
            width: 1,
            height: 1,
        })
    }

    /// Handle through which the host reports finished model loads
    pub fn load_queue(&self) -> LoadQueue {
        self.loads.clone()
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.camera.resize(width, height);
    }

    /// Run one rendered frame
    pub fn frame(&mut self) {
        self.models.apply_pending(&self.loads);

        self.camera.update();
        self.apply_exterior_fade();
        self.labels.update(&self.camera, self.width as f32, self.height as f32);

        self.particles.tick();
        self.ash_cloud.step();
        self.apply_ash_cloud();

        self.encoder.encode_particles(&self.particles);
        self.encoder.encode_labels(&self.labels);
        self.encoder.encode_models(&self.models);
    }

    /// Exterior opacity for the current camera distance
    pub fn exterior_opacity(&self) -> f32 {
        let t = &self.config.transition;
        exterior_opacity(self.camera.distance_to_target(), t.fade_start, t.fade_end)
    }

    fn apply_exterior_fade(&mut self) {
        let t = &self.config.transition;
        let d = self.camera.distance_to_target();
        if let Some(m) = self.models.get_mut(Slot::Exterior) {
            let fade = exterior_fade(d, t.fade_start, t.fade_end);
            m.opacity = fade.opacity;
            m.depth_write = fade.depth_write;
            m.visible = fade.visible;
        }
    }

    fn apply_ash_cloud(&mut self) {
        let cloud = self.ash_cloud;
        if let Some(m) = self.models.get_mut(Slot::Ash) {
            m.placement.scale = m.fit_scale * cloud.scale();
            m.placement.rotation_y = cloud.rotation();
            m.opacity = cloud.opacity();
        }
    }

    /// Eruption button. Narrates every press; only the first press starts anything.
    pub fn trigger_eruption(&mut self) {
        self.narration = Some(Narration::from_pair(ERUPTION_NARRATION));
        if self.erupting { return; }

        info!("eruption triggered");
        self.erupting = true;
        for id in ERUPTION_LABELS {
            self.labels.set_visibility(id, true);
        }
        self.particles.start_eruption();
        self.ash_cloud.start();
    }

    /// Reset button. Puts the volcano back to sleep immediately.
    pub fn reset_eruption(&mut self) {
        debug!("eruption reset");
        self.erupting = false;
        for id in ERUPTION_LABELS {
            self.labels.set_visibility(id, false);
        }
        self.particles.stop_eruption();
        self.ash_cloud.reset();
        self.apply_ash_cloud();
        self.narration = Some(Narration::from_pair(RESET_NARRATION));
    }

    /// Label click. Returns false (and changes nothing) for unknown ids.
    pub fn click_label(&mut self, id: &str) -> bool {
        match self.labels.explanation(id) {
            Some(e) => {
                self.narration = Some(Narration::from(e));
                true
            }
            None => false,
        }
    }

    pub fn set_label_visibility(&mut self, id: &str, visible: bool) -> bool {
        self.labels.set_visibility(id, visible)
    }

    pub fn is_erupting(&self) -> bool { self.erupting }
    pub fn narration(&self) -> Option<&Narration> { self.narration.as_ref() }
    pub fn config(&self) -> &Config { &self.config }
    pub fn camera(&self) -> &OrbitCamera { &self.camera }
    pub fn camera_mut(&mut self) -> &mut OrbitCamera { &mut self.camera }
    pub fn models(&self) -> &Models { &self.models }
    pub fn labels(&self) -> &LabelLayer { &self.labels }
    pub fn particles(&self) -> &ParticleEngine { &self.particles }
    pub fn ash_cloud(&self) -> &AshCloud { &self.ash_cloud }
    pub fn encoder(&self) -> &Encoder { &self.encoder }
}
