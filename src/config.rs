// config.rs - Startup configuration
//
// Defaults reproduce the explainer page. The host may pass a JSON document
// to override any section; missing sections fall back to the defaults.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VolcanoError};
use crate::scene::{EXPLANATIONS, LABELS};

/// Upper bound on `particles.cap`; the particle and output buffers are sized from it
pub const MAX_PARTICLES: usize = 100_000;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub camera: CameraConfig,
    pub controls: ControlsConfig,
    pub transition: TransitionConfig,
    pub particles: ParticleConfig,
    pub models: ModelConfig,
    pub labels: Vec<LabelSpec>,
    pub explanations: HashMap<String, Explanation>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            controls: ControlsConfig::default(),
            transition: TransitionConfig::default(),
            particles: ParticleConfig::default(),
            models: ModelConfig::default(),
            labels: default_labels(),
            explanations: default_explanations(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view (degrees)
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    pub position: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: 45.0,
            near: 0.1,
            far: 1000.0,
            position: [0.0, 2.0, 10.0],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    pub min_distance: f32,
    pub max_distance: f32,
    pub target: [f32; 3],
    /// Fraction of pending orbit input applied per frame
    pub damping: f32,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            min_distance: 2.0,
            max_distance: 50.0,
            target: [0.0, 0.0, 0.0],
            damping: 0.05,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    /// Distance where the exterior starts to fade
    pub fade_start: f32,
    /// Distance where the exterior is fully invisible
    pub fade_end: f32,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            fade_start: 8.0,
            fade_end: 5.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    pub cap: usize,
    /// Fixed timestep per frame (seconds)
    pub dt: f32,
    pub ejecta_per_tick: usize,
    pub flow_per_tick: usize,
    pub ash_per_tick: usize,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            cap: 2000,
            dt: 0.016,
            ejecta_per_tick: 5,
            flow_per_tick: 8,
            ash_per_tick: 2,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Largest extent of every model after normalization
    pub target_size: f32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self { target_size: 6.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelSpec {
    pub id: String,
    pub text: String,
    pub position: [f32; 3],
    #[serde(default)]
    pub hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    pub title: String,
    pub text: String,
}

fn default_labels() -> Vec<LabelSpec> {
    LABELS
        .iter()
        .map(|&(id, text, position, hidden)| LabelSpec {
            id: id.to_string(),
            text: text.to_string(),
            position,
            hidden,
        })
        .collect()
}

fn default_explanations() -> HashMap<String, Explanation> {
    EXPLANATIONS
        .iter()
        .map(|&(id, title, text)| {
            (
                id.to_string(),
                Explanation {
                    title: title.to_string(),
                    text: text.to_string(),
                },
            )
        })
        .collect()
}

impl Config {
    /// Parse a JSON override document and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let t = &self.transition;
        if !(t.fade_end < t.fade_start) {
            return Err(VolcanoError::InvalidConfig(format!(
                "fade_end ({}) must be below fade_start ({})",
                t.fade_end, t.fade_start
            )));
        }

        let c = &self.controls;
        if !(c.min_distance > 0.0 && c.min_distance <= c.max_distance) {
            return Err(VolcanoError::InvalidConfig(format!(
                "orbit distance bounds [{}, {}] are invalid",
                c.min_distance, c.max_distance
            )));
        }
        if !(0.0..=1.0).contains(&c.damping) {
            return Err(VolcanoError::InvalidConfig(format!(
                "damping {} is outside [0, 1]",
                c.damping
            )));
        }

        let p = &self.particles;
        if p.cap == 0 || p.cap > MAX_PARTICLES {
            return Err(VolcanoError::InvalidConfig(format!(
                "particle cap {} is outside [1, {}]",
                p.cap, MAX_PARTICLES
            )));
        }
        if !(p.dt > 0.0) {
            return Err(VolcanoError::InvalidConfig(format!("timestep {} is not positive", p.dt)));
        }

        if !(self.models.target_size > 0.0) {
            return Err(VolcanoError::InvalidConfig(format!(
                "model target size {} is not positive",
                self.models.target_size
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_config_has_all_explanations() {
        let config = Config::default();
        assert_eq!(config.labels.len(), 13);
        for label in &config.labels {
            assert!(config.explanations.contains_key(&label.id), "{} has no explanation", label.id);
        }
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = Config::from_json(r#"{ "transition": { "fade_start": 12.0 } }"#).unwrap();
        assert_eq!(config.transition.fade_start, 12.0);
        assert_eq!(config.transition.fade_end, 5.0);
        assert_eq!(config.particles.cap, 2000);
        assert_eq!(config.labels.len(), 13);
    }

    #[test]
    fn rejects_inverted_fade_thresholds() {
        let err = Config::from_json(r#"{ "transition": { "fade_start": 4.0, "fade_end": 5.0 } }"#);
        assert!(matches!(err, Err(VolcanoError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_particle_cap_out_of_range() {
        let huge = format!(r#"{{ "particles": {{ "cap": {} }} }}"#, usize::MAX / 4);
        assert!(matches!(Config::from_json(&huge), Err(VolcanoError::InvalidConfig(_))));

        let zero = r#"{ "particles": { "cap": 0 } }"#;
        assert!(matches!(Config::from_json(zero), Err(VolcanoError::InvalidConfig(_))));

        let max = format!(r#"{{ "particles": {{ "cap": {} }} }}"#, MAX_PARTICLES);
        assert_eq!(Config::from_json(&max).unwrap().particles.cap, MAX_PARTICLES);
    }

    #[test]
    fn rejects_invalid_orbit_bounds() {
        let inverted = r#"{ "controls": { "min_distance": 20.0, "max_distance": 10.0 } }"#;
        assert!(matches!(Config::from_json(inverted), Err(VolcanoError::InvalidConfig(_))));

        let zero = r#"{ "controls": { "min_distance": 0.0 } }"#;
        assert!(matches!(Config::from_json(zero), Err(VolcanoError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(Config::from_json("{ nope"), Err(VolcanoError::Config(_))));
    }
}
