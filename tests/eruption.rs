use glam::Vec3;
use volcano_engine::sim::{Kind, ParticleEngine};
use volcano_engine::world::surface_height;
use volcano_engine::{Bounds, Config, Slot, Volcano};

fn scene(seed: u64) -> Volcano {
    let mut v = Volcano::new(Config::default(), seed).unwrap();
    v.resize(1280, 720);
    v
}

fn cube() -> Bounds {
    Bounds::new(Vec3::new(-2.0, 0.0, -2.0), Vec3::new(2.0, 3.0, 2.0))
}

#[test]
fn opacity_endpoints() {
    let mut v = scene(1);
    for (d, expected) in [(10.0, 1.0), (8.0, 1.0), (6.5, 0.5), (5.0, 0.0), (3.0, 0.0)] {
        v.camera_mut().set_distance(d);
        assert!((v.exterior_opacity() - expected).abs() < 1e-4, "d = {d}");
    }
}

#[test]
fn live_count_never_exceeds_cap() {
    let mut v = scene(7);
    v.trigger_eruption();
    for _ in 0..150 {
        v.frame();
        assert!(v.particles().len() <= 2000);
    }
    assert!(!v.particles().is_empty());
}

#[test]
fn long_eruption_saturates_at_cap() {
    let mut v = scene(11);
    v.trigger_eruption();
    for _ in 0..1500 {
        v.frame();
    }
    assert!(v.particles().len() <= v.particles().cap());
}

#[test]
fn reset_is_idempotent() {
    let mut v = scene(3);
    v.trigger_eruption();
    for _ in 0..30 { v.frame(); }

    v.reset_eruption();
    v.reset_eruption();
    v.frame();
    assert!(v.particles().is_empty());
    assert!(!v.is_erupting());
    assert!(v.encoder().particles().is_empty());
}

#[test]
fn second_trigger_adds_no_extra_quota() {
    let mut once = scene(5);
    let mut twice = scene(5);
    once.trigger_eruption();
    twice.trigger_eruption();
    twice.trigger_eruption();

    for _ in 0..10 {
        once.frame();
        twice.frame();
    }
    assert_eq!(once.particles().len(), twice.particles().len());
}

#[test]
fn flow_particles_hug_the_cone() {
    let mut engine = ParticleEngine::new(Default::default(), 42);
    engine.start_eruption();
    for _ in 0..120 {
        engine.tick();
        for p in engine.particles() {
            if let Kind::Flow { .. } = p.kind {
                let r = (p.position.x * p.position.x + p.position.z * p.position.z).sqrt();
                let dy = p.position.y - surface_height(r);
                assert!(dy.abs() <= 0.05 + 1e-4, "flow particle {dy} off the surface");
            }
        }
    }
    assert!(engine.count_tagged(1) > 0);
}

#[test]
fn loads_apply_on_the_next_frame() {
    let mut v = scene(9);
    let queue = v.load_queue();
    queue.loaded(Slot::Exterior, cube());
    queue.loaded(Slot::Interior, cube());
    assert!(!v.models().is_loaded(Slot::Exterior));

    v.frame();
    let ext = v.models().get(Slot::Exterior).unwrap();
    let int = v.models().get(Slot::Interior).unwrap();
    assert!((ext.placement.scale - 1.5).abs() < 1e-5);
    assert!((ext.placement.translation.y - -0.7).abs() < 1e-5);
    assert!((int.placement.translation.y - -2.0).abs() < 1e-5);

    // Model block: loaded flag, then translation
    let models = v.encoder().models();
    assert_eq!(models[0], 1.0);
}

#[test]
fn failed_loads_leave_the_rest_running() {
    let mut v = scene(2);
    let queue = v.load_queue();
    queue.failed(Slot::Exterior, "404");
    queue.loaded(Slot::Interior, cube());
    v.trigger_eruption();
    v.frame();

    assert!(!v.models().is_loaded(Slot::Exterior));
    assert!(v.models().is_loaded(Slot::Interior));
    assert!(!v.particles().is_empty());
}

#[test]
fn label_click_sets_narration() {
    let mut v = scene(4);
    assert!(v.narration().is_none());
    assert!(v.click_label("crater"));
    assert_eq!(v.narration().unwrap().title, "Krater");
}
