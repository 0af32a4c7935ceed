use glam::Vec3;

// DOM element ids expected in index.html
pub const CANVAS_ELEMENT_ID: &str = "app-canvas";
pub const OVERLAY_OK_ID: &str = "overlay-ok";
pub const OVERLAY_CLOSE_ID: &str = "overlay-close";

// Fixed camera: above and in front of the keyboard, looking down at it
pub const CAMERA_EYE: Vec3 = Vec3::new(0.0, 2.4, 3.1);
pub const CAMERA_TARGET: Vec3 = Vec3::new(0.0, 0.0, -0.3);
pub const CAMERA_FOV_Y: f32 = std::f32::consts::FRAC_PI_4;
pub const CAMERA_Z_NEAR: f32 = 0.1;
pub const CAMERA_Z_FAR: f32 = 100.0;

// Audio
pub const MASTER_GAIN: f32 = 0.25;
pub const VOICE_TONE_CUTOFF_HZ: f32 = 5200.0;
