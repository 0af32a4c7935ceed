use crate::audio::ActiveVoices;
use piano_core::{Command, PowerIndicator, Scene, TweenSet};
use web_sys as web;

/// Interpret the state manager's commands against the effectors: the tween
/// set for animation, WebAudio for attack/release, and the indicator cell
/// read by the renderer.
pub fn apply_commands(
    commands: &[Command],
    scene: &mut Scene,
    tweens: &mut TweenSet,
    voices: &mut ActiveVoices,
    audio_ctx: &web::AudioContext,
    master_gain: &web::GainNode,
    indicator: &mut PowerIndicator,
) {
    for cmd in commands {
        match *cmd {
            Command::AnimateY {
                node,
                target_y,
                duration_sec,
                delay_sec,
                tag,
            } => {
                let from_y = scene.node(node).position.y;
                tweens.animate_y(node, from_y, target_y, duration_sec, delay_sec, tag);
            }
            Command::TriggerAttack(note) => voices.trigger_attack(audio_ctx, master_gain, note),
            Command::TriggerRelease(note) => voices.trigger_release(audio_ctx, note),
            Command::SetIndicator(state) => *indicator = state,
        }
    }
}
