// labels.rs - Hotspot labels and their explanations

use std::collections::HashMap;

use glam::{Vec2, Vec3};

use crate::camera::OrbitCamera;
use crate::config::{Explanation, LabelSpec};

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub id: String,
    pub text: String,
    pub anchor: Vec3,
    pub visible: bool,
    /// Last projected pixel position; `None` until projected or while behind the camera
    pub screen: Option<Vec2>,
}

/// All labels for the session, in configuration order
#[derive(Debug, Clone, Default)]
pub struct LabelLayer {
    labels: Vec<Label>,
    explanations: HashMap<String, Explanation>,
}

impl LabelLayer {
    pub fn new(specs: &[LabelSpec], explanations: HashMap<String, Explanation>) -> Self {
        let labels = specs
            .iter()
            .map(|s| Label {
                id: s.id.clone(),
                text: s.text.clone(),
                anchor: Vec3::from(s.position),
                visible: !s.hidden,
                screen: None,
            })
            .collect();

        Self { labels, explanations }
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn get(&self, id: &str) -> Option<&Label> {
        self.labels.iter().find(|l| l.id == id)
    }

    /// Show or hide a label. Returns false for unknown ids.
    pub fn set_visibility(&mut self, id: &str, visible: bool) -> bool {
        match self.labels.iter_mut().find(|l| l.id == id) {
            Some(label) => {
                label.visible = visible;
                true
            }
            None => false,
        }
    }

    /// Re-project visible labels; hidden ones keep their last position
    pub fn update(&mut self, camera: &OrbitCamera, width: f32, height: f32) {
        let view_proj = camera.view_proj();
        for label in self.labels.iter_mut().filter(|l| l.visible) {
            label.screen = camera.project(&view_proj, label.anchor, width, height);
        }
    }

    /// Explanation shown when the label is clicked
    pub fn explanation(&self, id: &str) -> Option<&Explanation> {
        self.explanations.get(id)
    }
}
