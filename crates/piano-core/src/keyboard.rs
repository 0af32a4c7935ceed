//! The keyboard interaction state manager.
//!
//! Owns all interaction state: cached rest positions, the pressed-note set,
//! the power debounce flag and the power state. Input dispatch calls the
//! methods here with picked scene nodes; the manager classifies them and
//! emits [`Command`]s toward the presentation effectors (tweens, audio,
//! indicator). It performs no side effects of its own, so every transition
//! can run host-side without platform APIs.

use crate::constants::*;
use crate::note::Note;
use crate::scene::{NodeId, Scene};
use crate::tween::TweenTag;
use fnv::FnvHashMap;
use smallvec::SmallVec;

/// Indicator lamp state, written on every power toggle and never read back.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PowerIndicator {
    On,
    Off,
}

/// A command toward an external effector. All of them are fire-and-forget;
/// only tagged animations report back, via
/// [`KeyboardState::handle_tween_complete`].
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Command {
    AnimateY {
        node: NodeId,
        target_y: f32,
        duration_sec: f32,
        delay_sec: f32,
        tag: Option<TweenTag>,
    },
    TriggerAttack(Note),
    TriggerRelease(Note),
    SetIndicator(PowerIndicator),
}

#[derive(Clone, Copy, Debug)]
struct KeySlot {
    node: NodeId,
    rest_y: f32,
}

pub struct KeyboardState {
    keys: FnvHashMap<Note, KeySlot>,
    power: Option<KeySlot>,
    pressed: SmallVec<[Note; 8]>,
    power_mid_press: bool,
    power_is_on: bool,
}

impl KeyboardState {
    /// Scan the scene for the 25 key nodes and the power button, caching
    /// each found node's Y as its rest position. Missing nodes are skipped;
    /// they simply stay inert.
    pub fn new(scene: &Scene) -> Self {
        let mut keys = FnvHashMap::default();
        for name in crate::note::NOTE_NAMES {
            let Ok(note) = name.parse::<Note>() else {
                continue;
            };
            match scene.find(&format!("{KEY_NODE_PREFIX}{name}")) {
                Some(id) => {
                    keys.insert(
                        note,
                        KeySlot {
                            node: id,
                            rest_y: scene.node(id).position.y,
                        },
                    );
                }
                None => log::debug!("[setup] no node for {}, key stays inert", name),
            }
        }
        let power = scene.find(POWER_BUTTON_NODE).map(|id| KeySlot {
            node: id,
            rest_y: scene.node(id).position.y,
        });
        if power.is_none() {
            log::debug!("[setup] no power button node");
        }
        Self {
            keys,
            power,
            pressed: SmallVec::new(),
            power_mid_press: false,
            power_is_on: false,
        }
    }

    pub fn power_on(&self) -> bool {
        self.power_is_on
    }

    pub fn power_mid_press(&self) -> bool {
        self.power_mid_press
    }

    pub fn pressed_notes(&self) -> &[Note] {
        &self.pressed
    }

    /// Entry point for a discrete press event, called with the nearest hit
    /// node. Unrecognized geometry is ignored.
    pub fn handle_intersected_object(
        &mut self,
        scene: &Scene,
        node: NodeId,
        out: &mut Vec<Command>,
    ) {
        let name = scene.node(node).name.as_str();
        if name == POWER_BUTTON_NODE {
            self.press_power_button(out);
        } else if name.contains(KEY_NODE_PREFIX) {
            self.press_key(name, out);
        }
    }

    fn press_power_button(&mut self, out: &mut Vec<Command>) {
        if self.power_mid_press {
            // previous press-release cycle still animating
            return;
        }
        let Some(slot) = self.power else {
            return;
        };
        self.power_is_on = !self.power_is_on;
        self.power_mid_press = true;
        out.push(Command::AnimateY {
            node: slot.node,
            target_y: slot.rest_y - BUTTON_PRESS_DEPTH,
            duration_sec: BUTTON_PRESS_DURATION,
            delay_sec: 0.0,
            tag: Some(TweenTag::PowerDown),
        });
        out.push(Command::SetIndicator(if self.power_is_on {
            PowerIndicator::On
        } else {
            PowerIndicator::Off
        }));
        log::info!("[power] {}", if self.power_is_on { "on" } else { "off" });
    }

    fn press_key(&mut self, node_name: &str, out: &mut Vec<Command>) {
        let Some((_, raw)) = node_name.split_once('_') else {
            return;
        };
        let Ok(note) = raw.parse::<Note>() else {
            return;
        };
        if self.pressed.contains(&note) {
            return;
        }
        let Some(slot) = self.keys.get(&note).copied() else {
            return;
        };
        self.pressed.push(note);
        let depth = if note.is_accidental() {
            SHARP_PRESS_DEPTH
        } else {
            NATURAL_PRESS_DEPTH
        };
        out.push(Command::AnimateY {
            node: slot.node,
            target_y: slot.rest_y - depth,
            duration_sec: KEY_PRESS_DURATION,
            delay_sec: 0.0,
            tag: None,
        });
        if self.power_is_on {
            out.push(Command::TriggerAttack(note));
        }
    }

    /// Entry point for a discrete release event. Every held note gets its
    /// audio release (idempotent against the audio engine, and safe even if
    /// the attack was never audible) and an animation back to its cached
    /// rest position; the pressed set is cleared as a whole.
    pub fn release_all_pressed_keys(&mut self, out: &mut Vec<Command>) {
        for &note in &self.pressed {
            out.push(Command::TriggerRelease(note));
            if let Some(slot) = self.keys.get(&note) {
                out.push(Command::AnimateY {
                    node: slot.node,
                    target_y: slot.rest_y,
                    duration_sec: KEY_RELEASE_DURATION,
                    delay_sec: 0.0,
                    tag: None,
                });
            }
        }
        self.pressed.clear();
    }

    /// Completion notification from the tween layer. `PowerUp` completion is
    /// the sole place the power debounce clears, so the button cannot
    /// re-trigger until its full press-release cycle has finished.
    pub fn handle_tween_complete(&mut self, tag: TweenTag, out: &mut Vec<Command>) {
        match tag {
            TweenTag::PowerDown => {
                if let Some(slot) = self.power {
                    out.push(Command::AnimateY {
                        node: slot.node,
                        target_y: slot.rest_y,
                        duration_sec: BUTTON_PRESS_DURATION,
                        delay_sec: BUTTON_HOLD_DELAY,
                        tag: Some(TweenTag::PowerUp),
                    });
                }
            }
            TweenTag::PowerUp => self.power_mid_press = false,
        }
    }
}
