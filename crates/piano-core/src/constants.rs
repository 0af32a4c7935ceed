// Shared interaction and layout tuning constants used by the web frontend
// and the host-side tests.

// Scene node naming
pub const KEY_NODE_PREFIX: &str = "Key_";
pub const POWER_BUTTON_NODE: &str = "powerButton";
pub const POWER_HOUSING_NODE: &str = "powerButtonHousing";
pub const POWER_INDICATOR_NODE: &str = "powerIndicator";

// Key press visuals. Sharps travel less than naturals.
pub const NATURAL_PRESS_DEPTH: f32 = 0.08;
pub const SHARP_PRESS_DEPTH: f32 = 0.05;
pub const KEY_PRESS_DURATION: f32 = 0.06; // seconds
pub const KEY_RELEASE_DURATION: f32 = 0.12;

// Power button gesture: dip, brief hold, return.
pub const BUTTON_PRESS_DEPTH: f32 = 0.035;
pub const BUTTON_PRESS_DURATION: f32 = 0.08;
pub const BUTTON_HOLD_DELAY: f32 = 0.15;

// Keyboard layout
pub const NATURAL_KEY_PITCH: f32 = 0.26; // center-to-center spacing along X
pub const NATURAL_KEY_HALF: [f32; 3] = [0.115, 0.06, 0.50];
pub const SHARP_KEY_HALF: [f32; 3] = [0.07, 0.06, 0.30];
pub const SHARP_KEY_RAISE: f32 = 0.07; // sharps sit above the naturals
pub const SHARP_KEY_SETBACK: f32 = -0.22; // and toward the back of the case

// Power button cluster, left of the keys
pub const POWER_HOUSING_HALF: [f32; 3] = [0.18, 0.05, 0.14];
pub const POWER_BUTTON_HALF: [f32; 3] = [0.06, 0.035, 0.06];
pub const POWER_INDICATOR_HALF: [f32; 3] = [0.03, 0.02, 0.03];

// Base colors consumed by the renderer
pub const NATURAL_KEY_COLOR: [f32; 3] = [0.95, 0.95, 0.92];
pub const SHARP_KEY_COLOR: [f32; 3] = [0.08, 0.08, 0.10];
pub const POWER_HOUSING_COLOR: [f32; 3] = [0.15, 0.15, 0.16];
pub const POWER_BUTTON_COLOR: [f32; 3] = [0.32, 0.32, 0.35];
pub const INDICATOR_OFF_COLOR: [f32; 3] = [0.45, 0.08, 0.08];
pub const INDICATOR_ON_COLOR: [f32; 3] = [0.15, 0.85, 0.30];
