//! Minimal named-node scene model.
//!
//! The renderer draws every node as a colored box; the interaction layer
//! addresses nodes by name (`Key_<note>`, `powerButton`, ...). Node Y
//! positions are the only scene state that mutates during interaction.

use crate::constants::*;
use crate::note::NOTE_NAMES;
use glam::Vec3;

/// Index-based handle into a [`Scene`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct NodeId(pub(crate) usize);

#[derive(Clone, Debug)]
pub struct SceneNode {
    pub name: String,
    pub position: Vec3,
    pub half_extents: Vec3,
    pub color: [f32; 3],
}

#[derive(Clone, Debug, Default)]
pub struct Scene {
    nodes: Vec<SceneNode>,
}

impl Scene {
    pub fn push(&mut self, node: SceneNode) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    /// Linear name lookup; the scene holds a few dozen nodes at most.
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.nodes.iter().position(|n| n.name == name).map(NodeId)
    }

    pub fn node(&self, id: NodeId) -> &SceneNode {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut SceneNode {
        &mut self.nodes[id.0]
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SceneNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Build the piano scene: 25 key boxes, the power button, its housing and
/// the indicator lamp. Naturals sit side by side along X; each sharp sits
/// between its neighbors, raised and set back toward the case.
pub fn build_piano_scene() -> Scene {
    let mut scene = Scene::default();

    let natural_count = NOTE_NAMES.iter().filter(|n| !n.contains('#')).count();
    let x0 = -((natural_count - 1) as f32) * 0.5 * NATURAL_KEY_PITCH;

    let mut white_index = 0usize;
    for name in NOTE_NAMES {
        let sharp = name.contains('#');
        let (x, y, z, half, color) = if sharp {
            // Sharps always follow their natural, so the previous white key
            // is at white_index - 1 and the next at white_index.
            let x = x0 + (white_index as f32 - 0.5) * NATURAL_KEY_PITCH;
            (
                x,
                SHARP_KEY_RAISE,
                SHARP_KEY_SETBACK,
                SHARP_KEY_HALF,
                SHARP_KEY_COLOR,
            )
        } else {
            let x = x0 + white_index as f32 * NATURAL_KEY_PITCH;
            white_index += 1;
            (x, 0.0, 0.0, NATURAL_KEY_HALF, NATURAL_KEY_COLOR)
        };
        scene.push(SceneNode {
            name: format!("{KEY_NODE_PREFIX}{name}"),
            position: Vec3::new(x, y, z),
            half_extents: Vec3::from(half),
            color,
        });
    }

    // Power cluster to the left of the lowest key, toward the back
    let housing_x = x0 - 0.62;
    let housing = Vec3::new(housing_x, 0.0, -0.38);
    scene.push(SceneNode {
        name: POWER_HOUSING_NODE.to_string(),
        position: housing,
        half_extents: Vec3::from(POWER_HOUSING_HALF),
        color: POWER_HOUSING_COLOR,
    });
    scene.push(SceneNode {
        name: POWER_BUTTON_NODE.to_string(),
        position: Vec3::new(
            housing_x,
            housing.y + POWER_HOUSING_HALF[1] + POWER_BUTTON_HALF[1],
            housing.z - 0.04,
        ),
        half_extents: Vec3::from(POWER_BUTTON_HALF),
        color: POWER_BUTTON_COLOR,
    });
    scene.push(SceneNode {
        name: POWER_INDICATOR_NODE.to_string(),
        position: Vec3::new(
            housing_x,
            housing.y + POWER_HOUSING_HALF[1] + POWER_INDICATOR_HALF[1],
            housing.z + 0.09,
        ),
        half_extents: Vec3::from(POWER_INDICATOR_HALF),
        color: INDICATOR_OFF_COLOR,
    });

    scene
}
