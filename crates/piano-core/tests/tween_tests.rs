use glam::Vec3;
use piano_core::{Scene, SceneNode, TweenSet, TweenTag};

fn scene_with_node(y: f32) -> Scene {
    let mut scene = Scene::default();
    scene.push(SceneNode {
        name: "node".into(),
        position: Vec3::new(0.0, y, 0.0),
        half_extents: Vec3::splat(0.1),
        color: [1.0, 1.0, 1.0],
    });
    scene
}

#[test]
fn tween_lands_exactly_on_target() {
    let mut scene = scene_with_node(0.5);
    let id = scene.find("node").unwrap();
    let mut tweens = TweenSet::new();
    let mut completed = Vec::new();

    tweens.animate_y(id, 0.5, 0.42, 0.1, 0.0, None);
    // several small steps, then overshoot the duration
    for _ in 0..5 {
        tweens.step(0.016, &mut scene, &mut completed);
    }
    tweens.step(0.05, &mut scene, &mut completed);
    assert_eq!(scene.node(id).position.y, 0.42);
    assert!(tweens.is_empty());
    assert!(completed.is_empty()); // untagged tween reports nothing
}

#[test]
fn tween_moves_toward_target_monotonically() {
    let mut scene = scene_with_node(1.0);
    let id = scene.find("node").unwrap();
    let mut tweens = TweenSet::new();
    let mut completed = Vec::new();

    tweens.animate_y(id, 1.0, 0.0, 0.2, 0.0, None);
    let mut last = 1.0;
    for _ in 0..10 {
        tweens.step(0.016, &mut scene, &mut completed);
        let y = scene.node(id).position.y;
        assert!(y <= last);
        last = y;
    }
}

#[test]
fn new_tween_supersedes_the_running_one() {
    let mut scene = scene_with_node(0.0);
    let id = scene.find("node").unwrap();
    let mut tweens = TweenSet::new();
    let mut completed = Vec::new();

    tweens.animate_y(id, 0.0, -1.0, 1.0, 0.0, Some(TweenTag::PowerDown));
    tweens.step(0.1, &mut scene, &mut completed);
    let mid = scene.node(id).position.y;
    assert!(mid < 0.0 && mid > -1.0);

    // replacement starts from the interrupted position, back to rest
    tweens.animate_y(id, mid, 0.0, 0.1, 0.0, None);
    assert_eq!(tweens.len(), 1);
    tweens.step(1.0, &mut scene, &mut completed);
    assert_eq!(scene.node(id).position.y, 0.0);
    // the superseded tween's tag must never fire
    assert!(completed.is_empty());
}

#[test]
fn delay_holds_before_moving() {
    let mut scene = scene_with_node(0.3);
    let id = scene.find("node").unwrap();
    let mut tweens = TweenSet::new();
    let mut completed = Vec::new();

    tweens.animate_y(id, 0.3, 0.0, 0.1, 0.2, None);
    tweens.step(0.15, &mut scene, &mut completed);
    // still inside the hold window
    assert_eq!(scene.node(id).position.y, 0.3);
    assert!(tweens.is_animating(id));
    tweens.step(0.3, &mut scene, &mut completed);
    assert_eq!(scene.node(id).position.y, 0.0);
}

#[test]
fn completion_tag_reports_exactly_once() {
    let mut scene = scene_with_node(0.0);
    let id = scene.find("node").unwrap();
    let mut tweens = TweenSet::new();
    let mut completed = Vec::new();

    tweens.animate_y(id, 0.0, -0.5, 0.05, 0.0, Some(TweenTag::PowerUp));
    tweens.step(1.0, &mut scene, &mut completed);
    assert_eq!(completed, vec![TweenTag::PowerUp]);
    // further stepping reports nothing more
    tweens.step(1.0, &mut scene, &mut completed);
    assert_eq!(completed.len(), 1);
}

#[test]
fn independent_nodes_animate_independently() {
    let mut scene = Scene::default();
    let a = scene.push(SceneNode {
        name: "a".into(),
        position: Vec3::ZERO,
        half_extents: Vec3::splat(0.1),
        color: [1.0, 1.0, 1.0],
    });
    let b = scene.push(SceneNode {
        name: "b".into(),
        position: Vec3::new(1.0, 1.0, 0.0),
        half_extents: Vec3::splat(0.1),
        color: [1.0, 1.0, 1.0],
    });
    let mut tweens = TweenSet::new();
    let mut completed = Vec::new();
    tweens.animate_y(a, 0.0, -0.2, 0.1, 0.0, None);
    tweens.animate_y(b, 1.0, 0.5, 0.1, 0.0, None);
    assert_eq!(tweens.len(), 2);
    tweens.step(1.0, &mut scene, &mut completed);
    assert_eq!(scene.node(a).position.y, -0.2);
    assert_eq!(scene.node(b).position.y, 0.5);
}
