use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The full fixed keyboard range, two octaves from C3 up to and including C5.
/// Scene key nodes are named `Key_<note>` after these entries; membership
/// never changes at runtime.
pub const NOTE_NAMES: [&str; 25] = [
    "C3", "C#3", "D3", "D#3", "E3", "F3", "F#3", "G3", "G#3", "A3", "A#3", "B3", "C4", "C#4",
    "D4", "D#4", "E4", "F4", "F#4", "G4", "G#4", "A4", "A#4", "B4", "C5",
];

const SEMITONE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// A single playable note, stored as its MIDI index (C4 = 60).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Note {
    midi: u8,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseNoteError {
    #[error("empty note name")]
    Empty,
    #[error("unknown note letter {0:?}")]
    Letter(char),
    #[error("missing or invalid octave in {0:?}")]
    Octave(String),
}

impl Note {
    pub fn midi(self) -> u8 {
        self.midi
    }

    /// Sharps within the octave: C#, D#, F#, G#, A#.
    pub fn is_accidental(self) -> bool {
        matches!(self.midi % 12, 1 | 3 | 6 | 8 | 10)
    }

    pub fn frequency_hz(self) -> f32 {
        midi_to_hz(self.midi as f32)
    }

    pub fn name(self) -> String {
        let octave = self.midi as i32 / 12 - 1;
        format!("{}{}", SEMITONE_NAMES[(self.midi % 12) as usize], octave)
    }
}

impl FromStr for Note {
    type Err = ParseNoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let letter = chars.next().ok_or(ParseNoteError::Empty)?;
        let semitone: i32 = match letter {
            'C' => 0,
            'D' => 2,
            'E' => 4,
            'F' => 5,
            'G' => 7,
            'A' => 9,
            'B' => 11,
            other => return Err(ParseNoteError::Letter(other)),
        };
        let rest = chars.as_str();
        let (semitone, octave_str) = match rest.strip_prefix('#') {
            Some(tail) => (semitone + 1, tail),
            None => (semitone, rest),
        };
        let octave: i32 = octave_str
            .parse()
            .map_err(|_| ParseNoteError::Octave(s.to_string()))?;
        let midi = (octave + 1) * 12 + semitone;
        if !(0..=127).contains(&midi) {
            return Err(ParseNoteError::Octave(s.to_string()));
        }
        Ok(Note { midi: midi as u8 })
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

pub fn midi_to_hz(midi: f32) -> f32 {
    440.0 * (2.0_f32).powf((midi - 69.0) / 12.0)
}
