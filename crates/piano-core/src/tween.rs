//! Fire-and-forget Y-position animations.
//!
//! The state manager emits animation commands; the frame loop feeds them in
//! here and steps the set once per frame. Completion is reported through
//! explicit tags rather than callbacks so the state manager's debounce logic
//! can run outside any closure.

use crate::scene::{NodeId, Scene};

/// Identifies a tween whose completion the state manager needs to observe.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TweenTag {
    PowerDown,
    PowerUp,
}

#[derive(Clone, Copy, Debug)]
struct Tween {
    node: NodeId,
    from_y: f32,
    to_y: f32,
    delay_sec: f32,
    duration_sec: f32,
    elapsed_sec: f32,
    tag: Option<TweenTag>,
}

#[derive(Default)]
pub struct TweenSet {
    active: Vec<Tween>,
}

impl TweenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a Y animation. A tween already running on the same node is
    /// superseded; the new tween starts from `from_y` (the node's current
    /// position), so interrupted presses never compound offsets.
    pub fn animate_y(
        &mut self,
        node: NodeId,
        from_y: f32,
        to_y: f32,
        duration_sec: f32,
        delay_sec: f32,
        tag: Option<TweenTag>,
    ) {
        self.active.retain(|t| t.node != node);
        self.active.push(Tween {
            node,
            from_y,
            to_y,
            delay_sec,
            duration_sec,
            elapsed_sec: 0.0,
            tag,
        });
    }

    /// Advance all tweens by `dt_sec`, writing eased Y positions into the
    /// scene. Finished tweens land exactly on their target and report their
    /// tag (once) into `completed`.
    pub fn step(&mut self, dt_sec: f32, scene: &mut Scene, completed: &mut Vec<TweenTag>) {
        let mut i = 0;
        while i < self.active.len() {
            let t = &mut self.active[i];
            t.elapsed_sec += dt_sec;
            let run = t.elapsed_sec - t.delay_sec;
            if run <= 0.0 {
                // still in the hold window
                i += 1;
                continue;
            }
            if run >= t.duration_sec {
                scene.node_mut(t.node).position.y = t.to_y;
                if let Some(tag) = t.tag {
                    completed.push(tag);
                }
                self.active.swap_remove(i);
            } else {
                let u = run / t.duration_sec;
                scene.node_mut(t.node).position.y =
                    t.from_y + (t.to_y - t.from_y) * ease_out_cubic(u);
                i += 1;
            }
        }
    }

    pub fn is_animating(&self, node: NodeId) -> bool {
        self.active.iter().any(|t| t.node == node)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

#[inline]
fn ease_out_cubic(u: f32) -> f32 {
    let v = 1.0 - u;
    1.0 - v * v * v
}
