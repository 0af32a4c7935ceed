use crate::constants::{CAMERA_EYE, CAMERA_FOV_Y, CAMERA_TARGET, CAMERA_Z_FAR, CAMERA_Z_NEAR};
use glam::{Mat4, Vec3, Vec4};
use web_sys as web;

#[inline]
pub fn view_proj(aspect: f32) -> Mat4 {
    let proj = Mat4::perspective_rh(CAMERA_FOV_Y, aspect, CAMERA_Z_NEAR, CAMERA_Z_FAR);
    let view = Mat4::look_at_rh(CAMERA_EYE, CAMERA_TARGET, Vec3::Y);
    proj * view
}

/// Compute a world-space pick ray from canvas backing-store pixel
/// coordinates, by unprojecting the far plane through the inverse
/// view-projection of the fixed camera.
pub fn screen_to_world_ray(canvas: &web::HtmlCanvasElement, sx: f32, sy: f32) -> (Vec3, Vec3) {
    let width = canvas.width().max(1) as f32;
    let height = canvas.height().max(1) as f32;
    let ndc_x = (2.0 * sx / width) - 1.0;
    let ndc_y = 1.0 - (2.0 * sy / height);
    let inv = view_proj(width / height).inverse();
    let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let p1: Vec3 = p_far.truncate() / p_far.w;
    let ro = CAMERA_EYE;
    let rd = (p1 - ro).normalize();
    (ro, rd)
}
