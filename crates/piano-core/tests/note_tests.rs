use piano_core::{midi_to_hz, Note, ParseNoteError, NOTE_NAMES};

#[test]
fn note_table_covers_two_octaves() {
    assert_eq!(NOTE_NAMES.len(), 25);
    assert_eq!(NOTE_NAMES[0], "C3");
    assert_eq!(NOTE_NAMES[24], "C5");
    // chromatic and strictly ascending
    let midis: Vec<u8> = NOTE_NAMES
        .iter()
        .map(|n| n.parse::<Note>().unwrap().midi())
        .collect();
    for pair in midis.windows(2) {
        assert_eq!(pair[1], pair[0] + 1);
    }
}

#[test]
fn parse_valid_notes() {
    assert_eq!("C3".parse::<Note>().unwrap().midi(), 48);
    assert_eq!("C#3".parse::<Note>().unwrap().midi(), 49);
    assert_eq!("A4".parse::<Note>().unwrap().midi(), 69);
    assert_eq!("C5".parse::<Note>().unwrap().midi(), 72);
}

#[test]
fn parse_rejects_garbage() {
    assert_eq!("".parse::<Note>(), Err(ParseNoteError::Empty));
    assert!(matches!(
        "H3".parse::<Note>(),
        Err(ParseNoteError::Letter('H'))
    ));
    // octave missing or non-numeric
    assert!(matches!("C#".parse::<Note>(), Err(ParseNoteError::Octave(_))));
    assert!(matches!("Cx4".parse::<Note>(), Err(ParseNoteError::Octave(_))));
    // out of MIDI range
    assert!(matches!(
        "C99".parse::<Note>(),
        Err(ParseNoteError::Octave(_))
    ));
}

#[test]
fn name_round_trips_for_all_keys() {
    for name in NOTE_NAMES {
        let note: Note = name.parse().unwrap();
        assert_eq!(note.name(), name);
    }
}

#[test]
fn accidental_classification() {
    let sharps: Vec<&str> = NOTE_NAMES
        .iter()
        .copied()
        .filter(|n| n.contains('#'))
        .collect();
    assert_eq!(sharps.len(), 10);
    for name in NOTE_NAMES {
        let note: Note = name.parse().unwrap();
        assert_eq!(note.is_accidental(), name.contains('#'), "note {}", name);
    }
}

#[test]
fn frequency_follows_equal_temperament() {
    let a4: Note = "A4".parse().unwrap();
    assert!((a4.frequency_hz() - 440.0).abs() < 1e-3);
    // an octave doubles
    assert!((midi_to_hz(60.0) * 2.0 - midi_to_hz(72.0)).abs() < 1e-2);
    let c3: Note = "C3".parse().unwrap();
    let c5: Note = "C5".parse().unwrap();
    assert!((c3.frequency_hz() * 4.0 - c5.frequency_hz()).abs() < 1e-2);
}
