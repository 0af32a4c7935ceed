use crate::scene::{NodeId, Scene};
use glam::Vec3;

/// Slab-method ray/AABB intersection. Returns the entry distance along the
/// ray, or `None` when the ray misses or the box is entirely behind it.
#[inline]
pub fn ray_aabb(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, half_extents: Vec3) -> Option<f32> {
    let inv = ray_dir.recip();
    let t1 = (center - half_extents - ray_origin) * inv;
    let t2 = (center + half_extents - ray_origin) * inv;
    let near = t1.min(t2).max_element();
    let far = t1.max(t2).min_element();
    if near > far || far < 0.0 {
        return None;
    }
    (near >= 0.0).then_some(near)
}

/// Return the nearest node hit by the ray, if any.
pub fn pick_node(scene: &Scene, ray_origin: Vec3, ray_dir: Vec3) -> Option<NodeId> {
    let mut best = None::<(NodeId, f32)>;
    for (id, node) in scene.iter() {
        if let Some(t) = ray_aabb(ray_origin, ray_dir, node.position, node.half_extents) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((id, t)),
            }
        }
    }
    best.map(|(id, _)| id)
}
