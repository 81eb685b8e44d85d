// ash_cloud.rs - Ash-cloud model ramp
//
// While erupting the cloud model grows from nothing, fades in and turns
// slowly. The ramp runs for a fixed number of frames and then holds.

const STEP: f32 = 0.01;
const END: f32 = 1.5;
const FINAL_SCALE: f32 = 1.5;
const SPIN: f32 = 0.005;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct AshCloud {
    progress: f32,
    rotation: f32,
    running: bool,
}

impl AshCloud {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin the ramp from zero. Ignored while already running.
    pub fn start(&mut self) {
        if self.running { return; }
        *self = Self { running: true, ..Self::default() };
    }

    /// Back to the hidden state
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Advance one frame
    pub fn step(&mut self) {
        if !self.running || self.progress >= END { return; }
        self.progress += STEP;
        self.rotation += SPIN;
    }

    pub fn is_running(&self) -> bool { self.running }

    pub fn scale(&self) -> f32 {
        (self.progress * FINAL_SCALE).min(FINAL_SCALE)
    }

    pub fn opacity(&self) -> f32 {
        (self.progress * 2.0).min(1.0)
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }
}
