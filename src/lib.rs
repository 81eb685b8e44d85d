use wasm_bindgen::prelude::*;

// ============================================================================
// VOLCANO - Eruption explainer scene: orbit, cross-fade, hotspots, particles
// ============================================================================

pub mod camera;
pub mod config;
pub mod error;
pub mod labels;
pub mod models;
pub mod render;
pub mod scene;
pub mod sim;
pub mod volcano;
pub mod world;

pub use config::Config;
pub use error::VolcanoError;
pub use models::{Bounds, LoadQueue, Slot};
pub use volcano::{Narration, Volcano};

use glam::Vec3;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("volcano-engine starting");
}

#[cfg(target_arch = "wasm32")]
fn entropy_seed() -> u64 {
    (js_sys::Math::random() * (1u64 << 53) as f64) as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn entropy_seed() -> u64 {
    0xDEADBEEF
}

fn to_js(e: VolcanoError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn parse_slot(index: u32) -> Result<Slot, JsValue> {
    Slot::from_index(index).map_err(|e| {
        log::warn!("ignoring host call: {}", e);
        to_js(e)
    })
}

#[wasm_bindgen]
pub struct VolcanoScene {
    inner: Volcano,
    loads: LoadQueue,
}

#[wasm_bindgen]
impl VolcanoScene {
    #[wasm_bindgen(constructor)]
    pub fn new(w: u32, h: u32) -> Result<VolcanoScene, JsValue> {
        Self::build(Config::default(), w, h, entropy_seed()).map_err(to_js)
    }

    /// Scene from a JSON config override and a fixed particle seed
    #[wasm_bindgen(js_name = "withConfig")]
    pub fn with_config(json: &str, w: u32, h: u32, seed: u32) -> Result<VolcanoScene, JsValue> {
        let config = Config::from_json(json).map_err(to_js)?;
        Self::build(config, w, h, seed as u64).map_err(to_js)
    }

    fn build(config: Config, w: u32, h: u32, seed: u64) -> error::Result<VolcanoScene> {
        let mut inner = Volcano::new(config, seed)?;
        inner.resize(w, h);
        let loads = inner.load_queue();
        Ok(Self { inner, loads })
    }

    pub fn tick(&mut self) {
        self.inner.frame();
    }

    pub fn resize(&mut self, w: u32, h: u32) {
        self.inner.resize(w, h);
    }

    // Buttons

    #[wasm_bindgen(js_name = "startEruption")]
    pub fn start_eruption(&mut self) {
        self.inner.trigger_eruption();
    }

    #[wasm_bindgen(js_name = "stopEruption")]
    pub fn stop_eruption(&mut self) {
        self.inner.reset_eruption();
    }

    #[wasm_bindgen(js_name = "isErupting")]
    pub fn is_erupting(&self) -> bool {
        self.inner.is_erupting()
    }

    // Orbit input

    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.inner.camera_mut().rotate(dx, dy);
    }

    pub fn zoom(&mut self, delta: f32) {
        self.inner.camera_mut().zoom(delta);
    }

    #[wasm_bindgen(js_name = "cameraPosition")]
    pub fn camera_position(&self) -> Vec<f32> {
        self.inner.camera().position().to_array().to_vec()
    }

    #[wasm_bindgen(js_name = "cameraTarget")]
    pub fn camera_target(&self) -> Vec<f32> {
        self.inner.camera().target.to_array().to_vec()
    }

    /// Vertical field of view in degrees, near and far planes
    #[wasm_bindgen(js_name = "cameraLens")]
    pub fn camera_lens(&self) -> Vec<f32> {
        let c = self.inner.camera();
        vec![c.fov_y.to_degrees(), c.near, c.far]
    }

    #[wasm_bindgen(js_name = "cameraDistance")]
    pub fn camera_distance(&self) -> f32 {
        self.inner.camera().distance_to_target()
    }

    #[wasm_bindgen(js_name = "exteriorOpacity")]
    pub fn exterior_opacity(&self) -> f32 {
        self.inner.exterior_opacity()
    }

    // Model loading

    #[wasm_bindgen(js_name = "assetPath")]
    pub fn asset_path(&self, slot: u32) -> Result<String, JsValue> {
        let slot = parse_slot(slot)?;
        Ok(slot.asset_path().to_string())
    }

    /// Host finished parsing a model; applied on the next tick
    #[wasm_bindgen(js_name = "modelLoaded")]
    #[allow(clippy::too_many_arguments)]
    pub fn model_loaded(
        &self,
        slot: u32,
        min_x: f32, min_y: f32, min_z: f32,
        max_x: f32, max_y: f32, max_z: f32,
    ) -> Result<(), JsValue> {
        let slot = parse_slot(slot)?;
        let bounds = Bounds::new(Vec3::new(min_x, min_y, min_z), Vec3::new(max_x, max_y, max_z));
        self.loads.loaded(slot, bounds);
        Ok(())
    }

    #[wasm_bindgen(js_name = "modelFailed")]
    pub fn model_failed(&self, slot: u32, reason: String) -> Result<(), JsValue> {
        let slot = parse_slot(slot)?;
        self.loads.failed(slot, reason);
        Ok(())
    }

    // Labels and narration

    #[wasm_bindgen(js_name = "labelCount")]
    pub fn label_count(&self) -> usize {
        self.inner.labels().labels().len()
    }

    #[wasm_bindgen(js_name = "labelId")]
    pub fn label_id(&self, i: usize) -> Option<String> {
        self.inner.labels().labels().get(i).map(|l| l.id.clone())
    }

    #[wasm_bindgen(js_name = "labelText")]
    pub fn label_text(&self, i: usize) -> Option<String> {
        self.inner.labels().labels().get(i).map(|l| l.text.clone())
    }

    #[wasm_bindgen(js_name = "setLabelVisibility")]
    pub fn set_label_visibility(&mut self, id: &str, visible: bool) -> bool {
        self.inner.set_label_visibility(id, visible)
    }

    #[wasm_bindgen(js_name = "clickLabel")]
    pub fn click_label(&mut self, id: &str) -> bool {
        self.inner.click_label(id)
    }

    #[wasm_bindgen(js_name = "narrationTitle")]
    pub fn narration_title(&self) -> Option<String> {
        self.inner.narration().map(|n| n.title.clone())
    }

    #[wasm_bindgen(js_name = "narrationText")]
    pub fn narration_text(&self) -> Option<String> {
        self.inner.narration().map(|n| n.text.clone())
    }

    // Accessors for WASM memory views
    pub fn particle_ptr(&self) -> *const f32 { self.inner.encoder().particles().as_ptr() }
    pub fn particle_len(&self) -> usize { self.inner.encoder().particles().len() }
    pub fn particle_count(&self) -> usize { self.inner.particles().len() }
    pub fn label_ptr(&self) -> *const f32 { self.inner.encoder().labels().as_ptr() }
    pub fn label_len(&self) -> usize { self.inner.encoder().labels().len() }
    pub fn model_ptr(&self) -> *const f32 { self.inner.encoder().models().as_ptr() }
    pub fn model_len(&self) -> usize { self.inner.encoder().models().len() }
}
