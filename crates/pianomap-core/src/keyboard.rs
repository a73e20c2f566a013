use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::pitch::{KeyColor, Pitch, PitchClass};

/// Number of keys on a standard piano keyboard
pub const KEY_COUNT: usize = 88;

/// Standard pitch number of A0, the lowest piano key
pub const MIDI_A0: u8 = 21;

/// One of the 88 physical piano keys: a pitch plus its 0-87 label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PianoKey {
    pub pitch: Pitch,
    pub label: u8,
}

impl PianoKey {
    pub fn midi_number(&self) -> u8 {
        self.label + MIDI_A0
    }

    pub fn color(&self) -> KeyColor {
        self.pitch.color()
    }
}

/// Compute the key label for a pitch name like `"C4"` or `"A#0"`.
///
/// The label is signed: pitches below A0 or above C8 yield values outside
/// 0..=87 rather than an error.
pub fn note_to_key_label(note: &str) -> Result<i32> {
    let pitch: Pitch = note.parse()?;
    Ok(pitch.key_label())
}

/// Generate all 88 piano keys in ascending label order (A0 first, C8 last).
///
/// Candidates are the 108 combinations of octaves 0-8 and the 12 pitch
/// classes; the ones whose label falls outside 0..=87 (octave-0 notes below
/// A, octave-8 notes above C) are filtered out, not errors. The result is
/// sorted by label so ascending order holds as a post-condition instead of
/// depending on iteration order.
pub fn all_keys() -> Vec<PianoKey> {
    let mut keys: Vec<PianoKey> = (0u8..=8)
        .flat_map(|octave| {
            PitchClass::ALL
                .iter()
                .map(move |&class| Pitch::new(class, octave))
        })
        .filter_map(|pitch| {
            let label = pitch.key_label();
            (0..KEY_COUNT as i32).contains(&label).then(|| PianoKey {
                pitch,
                label: label as u8,
            })
        })
        .collect();

    keys.sort_by_key(|key| key.label);
    keys
}

/// Inverse mapping: the pitch for a key label, or `None` outside 0..=87
pub fn pitch_for_label(label: u8) -> Option<Pitch> {
    if label as usize >= KEY_COUNT {
        return None;
    }
    let midi = (label + MIDI_A0) as usize;
    let class = PitchClass::ALL[midi % 12];
    let octave = (midi / 12 - 1) as u8;
    Some(Pitch::new(class, octave))
}
