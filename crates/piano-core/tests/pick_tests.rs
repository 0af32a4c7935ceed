use glam::Vec3;
use piano_core::{build_piano_scene, pick_node, ray_aabb, Scene, SceneNode, POWER_BUTTON_NODE};

fn box_at(x: f32, z: f32) -> (Vec3, Vec3) {
    (Vec3::new(x, 0.0, z), Vec3::new(0.5, 0.5, 0.5))
}

#[test]
fn ray_aabb_hits_a_box_straight_on() {
    let (center, half) = box_at(0.0, -5.0);
    let t = ray_aabb(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), center, half);
    assert!(t.is_some());
    let t = t.unwrap();
    // entry face is at z = -4.5
    assert!((t - 4.5).abs() < 1e-4);
}

#[test]
fn ray_aabb_misses_off_axis() {
    let (center, half) = box_at(0.0, -5.0);
    assert!(ray_aabb(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0), center, half).is_none());
    assert!(ray_aabb(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0), center, half).is_none());
}

#[test]
fn ray_aabb_ignores_boxes_behind_the_origin() {
    let (center, half) = box_at(0.0, 5.0);
    assert!(ray_aabb(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), center, half).is_none());
}

#[test]
fn pick_returns_the_nearest_of_two_hits() {
    let mut scene = Scene::default();
    let far = scene.push(SceneNode {
        name: "far".into(),
        position: Vec3::new(0.0, 0.0, -10.0),
        half_extents: Vec3::splat(0.5),
        color: [1.0, 1.0, 1.0],
    });
    let near = scene.push(SceneNode {
        name: "near".into(),
        position: Vec3::new(0.0, 0.0, -3.0),
        half_extents: Vec3::splat(0.5),
        color: [1.0, 1.0, 1.0],
    });
    let hit = pick_node(&scene, Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
    assert_eq!(hit, Some(near));
    assert_ne!(hit, Some(far));
}

#[test]
fn pick_miss_returns_none() {
    let scene = build_piano_scene();
    // straight up, away from everything
    assert_eq!(
        pick_node(&scene, Vec3::new(0.0, 5.0, 0.0), Vec3::Y),
        None
    );
}

#[test]
fn pick_finds_a_key_from_above() {
    let scene = build_piano_scene();
    let id = scene.find("Key_G4").unwrap();
    // aim at the front half of the key so neighboring sharps cannot occlude
    let target = scene.node(id).position + Vec3::new(0.0, 0.0, 0.25);
    let ro = target + Vec3::new(0.0, 3.0, 1.0);
    let rd = (target - ro).normalize();
    let hit = pick_node(&scene, ro, rd).expect("expected a hit");
    assert_eq!(scene.node(hit).name, "Key_G4");
}

#[test]
fn pick_finds_the_power_button() {
    let scene = build_piano_scene();
    let id = scene.find(POWER_BUTTON_NODE).unwrap();
    let target = scene.node(id).position;
    let ro = target + Vec3::new(0.0, 2.0, 0.2);
    let rd = (target - ro).normalize();
    let hit = pick_node(&scene, ro, rd).expect("expected a hit");
    assert_eq!(scene.node(hit).name, POWER_BUTTON_NODE);
}
