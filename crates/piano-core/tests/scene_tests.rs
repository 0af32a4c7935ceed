use piano_core::{
    build_piano_scene, KEY_NODE_PREFIX, NOTE_NAMES, POWER_BUTTON_NODE, POWER_HOUSING_NODE,
    POWER_INDICATOR_NODE,
};

#[test]
fn scene_has_all_key_nodes_and_power_cluster() {
    let scene = build_piano_scene();
    for name in NOTE_NAMES {
        let node_name = format!("{KEY_NODE_PREFIX}{name}");
        assert!(scene.find(&node_name).is_some(), "missing {}", node_name);
    }
    assert!(scene.find(POWER_BUTTON_NODE).is_some());
    assert!(scene.find(POWER_HOUSING_NODE).is_some());
    assert!(scene.find(POWER_INDICATOR_NODE).is_some());
    // 25 keys + 3 power cluster nodes
    assert_eq!(scene.len(), 28);
}

#[test]
fn sharps_sit_above_and_behind_naturals() {
    let scene = build_piano_scene();
    let c4 = scene.find("Key_C4").unwrap();
    let cs4 = scene.find("Key_C#4").unwrap();
    let c4 = scene.node(c4);
    let cs4 = scene.node(cs4);
    assert!(cs4.position.y > c4.position.y);
    assert!(cs4.position.z < c4.position.z);
    // narrower too
    assert!(cs4.half_extents.x < c4.half_extents.x);
    // and between its neighbors along X
    let d4 = scene.node(scene.find("Key_D4").unwrap());
    assert!(c4.position.x < cs4.position.x && cs4.position.x < d4.position.x);
}

#[test]
fn naturals_are_evenly_spaced() {
    let scene = build_piano_scene();
    let xs: Vec<f32> = NOTE_NAMES
        .iter()
        .filter(|n| !n.contains('#'))
        .map(|n| {
            scene
                .node(scene.find(&format!("{KEY_NODE_PREFIX}{n}")).unwrap())
                .position
                .x
        })
        .collect();
    assert_eq!(xs.len(), 15);
    let pitch = xs[1] - xs[0];
    for pair in xs.windows(2) {
        assert!((pair[1] - pair[0] - pitch).abs() < 1e-5);
    }
    // centered on the origin
    assert!((xs[0] + xs[14]).abs() < 1e-5);
}

#[test]
fn power_button_is_clear_of_the_keys() {
    let scene = build_piano_scene();
    let button = scene.node(scene.find(POWER_BUTTON_NODE).unwrap());
    let lowest_key = scene.node(scene.find("Key_C3").unwrap());
    assert!(
        button.position.x + button.half_extents.x
            < lowest_key.position.x - lowest_key.half_extents.x
    );
}

#[test]
fn find_is_exact_match_only() {
    let scene = build_piano_scene();
    assert!(scene.find("Key_C4").is_some());
    assert!(scene.find("Key_").is_none());
    assert!(scene.find("powerbutton").is_none());
    assert!(scene.find("").is_none());
}
