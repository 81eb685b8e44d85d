// models.rs - Model slots, fit-to-scene and deferred load results
//
// The host parses the three glTF files and reports each bounding box (or
// failure) through a `LoadQueue`. Results apply at the start of the next
// frame, never in the middle of one.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use glam::Vec3;
use log::{error, info, warn};

use crate::error::{Result, VolcanoError};
use crate::world::ExteriorFade;

/// Exterior sits slightly below the origin so the crater lines up with the labels
const EXTERIOR_Y: f32 = -0.7;
const INTERIOR_Y: f32 = -2.0;
/// Ash cloud rests on the crater
const ASH_LIFT: f32 = 2.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Exterior,
    Interior,
    Ash,
}

impl Slot {
    pub const ALL: [Slot; 3] = [Slot::Exterior, Slot::Interior, Slot::Ash];

    pub fn name(self) -> &'static str {
        match self {
            Slot::Exterior => "exterior",
            Slot::Interior => "interior",
            Slot::Ash => "ash",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(i: u32) -> Result<Self> {
        Self::ALL
            .get(i as usize)
            .copied()
            .ok_or_else(|| VolcanoError::UnknownModel(i.to_string()))
    }

    /// Asset path the host is expected to fetch
    pub fn asset_path(self) -> &'static str {
        match self {
            Slot::Exterior => "assets/models/volcano_exterior.glb",
            Slot::Interior => "assets/models/volcano_interior.glb",
            Slot::Ash => "assets/models/volcano_ash.glb",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Axis-aligned bounding box in model space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }
}

/// Translation, uniform scale and spin applied to a model root
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub translation: Vec3,
    pub scale: f32,
    pub rotation_y: f32,
}

/// Re-center `bounds` on the origin and scale its largest extent to `target_size`
pub fn fit_to_scene(bounds: &Bounds, target_size: f32) -> Result<Placement> {
    if !bounds.min.is_finite() || !bounds.max.is_finite() {
        return Err(VolcanoError::InvalidBounds(format!(
            "{:?}..{:?} is not finite",
            bounds.min, bounds.max
        )));
    }

    let max_dim = bounds.size().max_element();
    if !max_dim.is_finite() || max_dim <= 0.0 {
        return Err(VolcanoError::InvalidBounds(format!(
            "{:?}..{:?} has no extent",
            bounds.min, bounds.max
        )));
    }

    let scale = target_size / max_dim;
    Ok(Placement {
        translation: -bounds.center() * scale,
        scale,
        rotation_y: 0.0,
    })
}

/// Completed host-side load
#[derive(Debug, Clone, PartialEq)]
pub enum LoadEvent {
    Loaded { slot: Slot, bounds: Bounds },
    Failed { slot: Slot, reason: String },
}

/// Shared queue of load results; clones feed the same queue
#[derive(Debug, Clone, Default)]
pub struct LoadQueue {
    inner: Rc<RefCell<VecDeque<LoadEvent>>>,
}

impl LoadQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loaded(&self, slot: Slot, bounds: Bounds) {
        self.inner.borrow_mut().push_back(LoadEvent::Loaded { slot, bounds });
    }

    pub fn failed(&self, slot: Slot, reason: impl Into<String>) {
        self.inner.borrow_mut().push_back(LoadEvent::Failed { slot, reason: reason.into() });
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }

    fn drain(&self) -> Vec<LoadEvent> {
        self.inner.borrow_mut().drain(..).collect()
    }
}

/// State of one model in the scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelState {
    pub placement: Placement,
    /// Normalization scale from [`fit_to_scene`]; animated scales are relative to it
    pub fit_scale: f32,
    pub opacity: f32,
    pub depth_write: bool,
    pub visible: bool,
}

/// The three scene models; `None` until loaded (forever, if loading failed)
#[derive(Debug, Clone)]
pub struct Models {
    slots: [Option<ModelState>; 3],
    target_size: f32,
}

impl Models {
    pub fn new(target_size: f32) -> Self {
        Self { slots: [None; 3], target_size }
    }

    pub fn get(&self, slot: Slot) -> Option<&ModelState> {
        self.slots[slot.index()].as_ref()
    }

    pub fn get_mut(&mut self, slot: Slot) -> Option<&mut ModelState> {
        self.slots[slot.index()].as_mut()
    }

    pub fn is_loaded(&self, slot: Slot) -> bool {
        self.slots[slot.index()].is_some()
    }

    /// Apply every queued load result. Called at the frame boundary.
    pub fn apply_pending(&mut self, queue: &LoadQueue) {
        for event in queue.drain() {
            match event {
                LoadEvent::Loaded { slot, bounds } => {
                    if let Err(e) = self.insert(slot, &bounds) {
                        error!("Error loading {}: {}", slot, e);
                    }
                }
                LoadEvent::Failed { slot, reason } => {
                    let e = VolcanoError::ModelLoad { slot: slot.name(), reason };
                    error!("{}", e);
                }
            }
        }
    }

    fn insert(&mut self, slot: Slot, bounds: &Bounds) -> Result<()> {
        if self.is_loaded(slot) {
            warn!("{} model reported loaded twice, keeping the first", slot);
            return Ok(());
        }

        let mut placement = fit_to_scene(bounds, self.target_size)?;
        let fit_scale = placement.scale;
        info!("Model loaded: {} scaled by {} to fit scene", slot, fit_scale);

        let state = match slot {
            Slot::Exterior => {
                placement.translation.y = EXTERIOR_Y;
                let fade = ExteriorFade::OPAQUE;
                ModelState {
                    placement,
                    fit_scale,
                    opacity: fade.opacity,
                    depth_write: fade.depth_write,
                    visible: fade.visible,
                }
            }
            Slot::Interior => {
                placement.translation.y = INTERIOR_Y;
                ModelState { placement, fit_scale, opacity: 1.0, depth_write: true, visible: true }
            }
            Slot::Ash => {
                // Starts hidden inside the crater
                placement.translation.y += ASH_LIFT;
                placement.scale = 0.0;
                ModelState { placement, fit_scale, opacity: 0.0, depth_write: true, visible: true }
            }
        };

        self.slots[slot.index()] = Some(state);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> Bounds {
        Bounds::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(3.0, 6.0, 4.0))
    }

    #[test]
    fn fit_scales_largest_extent_and_recenters() {
        let b = unit_box();
        let p = fit_to_scene(&b, 6.0).unwrap();
        assert!((p.scale - 1.5).abs() < 1e-6);
        assert!((b.size().max_element() * p.scale - 6.0).abs() < 1e-5);

        // Scaled center lands on the origin
        let placed_center = b.center() * p.scale + p.translation;
        assert!(placed_center.length() < 1e-5);
    }

    #[test]
    fn fit_rejects_degenerate_boxes() {
        let flat = Bounds::new(Vec3::ONE, Vec3::ONE);
        assert!(matches!(fit_to_scene(&flat, 6.0), Err(VolcanoError::InvalidBounds(_))));

        let inverted = Bounds::new(Vec3::ONE, Vec3::ZERO);
        assert!(fit_to_scene(&inverted, 6.0).is_err());

        let nan = Bounds::new(Vec3::splat(f32::NAN), Vec3::ONE);
        assert!(fit_to_scene(&nan, 6.0).is_err());

        let nan_max = Bounds::new(Vec3::ZERO, Vec3::new(f32::NAN, 1.0, 1.0));
        assert!(matches!(fit_to_scene(&nan_max, 6.0), Err(VolcanoError::InvalidBounds(_))));

        let infinite = Bounds::new(Vec3::ZERO, Vec3::new(1.0, f32::INFINITY, 1.0));
        assert!(fit_to_scene(&infinite, 6.0).is_err());
    }

    #[test]
    fn loads_wait_for_the_frame_boundary() {
        let queue = LoadQueue::new();
        let mut models = Models::new(6.0);

        queue.loaded(Slot::Interior, unit_box());
        assert!(!models.is_loaded(Slot::Interior));
        assert_eq!(queue.len(), 1);

        models.apply_pending(&queue);
        assert!(models.is_loaded(Slot::Interior));
        assert!(queue.is_empty());
        assert_eq!(models.get(Slot::Interior).unwrap().placement.translation.y, INTERIOR_Y);
    }

    #[test]
    fn failed_load_leaves_slot_absent() {
        let queue = LoadQueue::new();
        let mut models = Models::new(6.0);
        queue.failed(Slot::Exterior, "404");
        queue.loaded(Slot::Ash, Bounds::new(Vec3::ZERO, Vec3::ZERO));
        models.apply_pending(&queue);
        assert!(!models.is_loaded(Slot::Exterior));
        assert!(!models.is_loaded(Slot::Ash));
    }

    #[test]
    fn ash_cloud_starts_hidden_above_the_crater() {
        let queue = LoadQueue::new();
        let mut models = Models::new(6.0);
        let cloned = queue.clone();
        cloned.loaded(Slot::Ash, Bounds::new(Vec3::splat(-1.0), Vec3::splat(1.0)));
        models.apply_pending(&queue);

        let ash = models.get(Slot::Ash).unwrap();
        assert_eq!(ash.placement.scale, 0.0);
        assert_eq!(ash.opacity, 0.0);
        assert!((ash.placement.translation.y - ASH_LIFT).abs() < 1e-6);
    }

    #[test]
    fn slot_indices_round_trip() {
        for slot in Slot::ALL {
            assert_eq!(Slot::from_index(slot.index() as u32).unwrap(), slot);
        }
        assert!(matches!(Slot::from_index(3), Err(VolcanoError::UnknownModel(_))));
    }
}
