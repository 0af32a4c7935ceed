use crate::constants::{MASTER_GAIN, VOICE_TONE_CUTOFF_HZ};
use fnv::FnvHashMap;
use piano_core::Note;
use web_sys as web;

pub struct MasterBus {
    pub master_gain: web::GainNode,
}

fn create_gain(
    audio_ctx: &web::AudioContext,
    value: f32,
    label: &str,
) -> Result<web::GainNode, ()> {
    match web::GainNode::new(audio_ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Ok(g)
        }
        Err(e) => {
            log::error!("{} GainNode error: {:?}", label, e);
            Err(())
        }
    }
}

/// Voices route through a shared master gain and a gentle lowpass that
/// rounds off the raw oscillator top end.
pub fn build_master_bus(audio_ctx: &web::AudioContext) -> Result<MasterBus, ()> {
    let master_gain = create_gain(audio_ctx, MASTER_GAIN, "Master")?;
    let tone = web::BiquadFilterNode::new(audio_ctx)
        .map_err(|e| {
            log::error!("BiquadFilterNode error: {:?}", e);
        })
        .map_err(|_| ())?;
    tone.set_type(web::BiquadFilterType::Lowpass);
    tone.frequency().set_value(VOICE_TONE_CUTOFF_HZ);
    let _ = master_gain.connect_with_audio_node(&tone);
    let _ = tone.connect_with_audio_node(&audio_ctx.destination());
    Ok(MasterBus { master_gain })
}

struct Voice {
    osc: web::OscillatorNode,
    gain: web::GainNode,
}

/// Sustained oscillator voices, one per sounding note. Attack spawns the
/// source; release ramps it out and stops it. Releasing a note with no
/// active voice is a no-op, which is what makes release commands idempotent.
#[derive(Default)]
pub struct ActiveVoices {
    voices: FnvHashMap<Note, Voice>,
}

impl ActiveVoices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger_attack(
        &mut self,
        audio_ctx: &web::AudioContext,
        master_gain: &web::GainNode,
        note: Note,
    ) {
        if self.voices.contains_key(&note) {
            return;
        }
        let osc = match web::OscillatorNode::new(audio_ctx) {
            Ok(o) => o,
            Err(e) => {
                log::error!("OscillatorNode error: {:?}", e);
                return;
            }
        };
        osc.set_type(web::OscillatorType::Triangle);
        osc.frequency().set_value(note.frequency_hz());
        let Ok(gain) = create_gain(audio_ctx, 0.0, "Voice") else {
            return;
        };
        let t0 = audio_ctx.current_time() + 0.005;
        let _ = gain.gain().linear_ramp_to_value_at_time(0.5, t0 + 0.02);
        let _ = gain.gain().linear_ramp_to_value_at_time(0.35, t0 + 0.2);
        let _ = osc.connect_with_audio_node(&gain);
        let _ = gain.connect_with_audio_node(master_gain);
        let _ = osc.start_with_when(t0);
        self.voices.insert(note, Voice { osc, gain });
    }

    pub fn trigger_release(&mut self, audio_ctx: &web::AudioContext, note: Note) {
        let Some(v) = self.voices.remove(&note) else {
            return;
        };
        let now = audio_ctx.current_time();
        let level = v.gain.gain().value();
        let _ = v.gain.gain().cancel_scheduled_values(now);
        v.gain.gain().set_value(level);
        let _ = v.gain.gain().linear_ramp_to_value_at_time(0.0, now + 0.25);
        let _ = v.osc.stop_with_when(now + 0.3);
    }

    pub fn len(&self) -> usize {
        self.voices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voices.is_empty()
    }
}
