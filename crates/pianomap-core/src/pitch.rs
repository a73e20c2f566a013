use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::KeymapError;

/// One of the 12 chromatic note names within an octave
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PitchClass {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl PitchClass {
    /// All 12 pitch classes in chromatic order (C first)
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::CSharp,
        PitchClass::D,
        PitchClass::DSharp,
        PitchClass::E,
        PitchClass::F,
        PitchClass::FSharp,
        PitchClass::G,
        PitchClass::GSharp,
        PitchClass::A,
        PitchClass::ASharp,
        PitchClass::B,
    ];

    /// Semitone offset from C (C=0 ... B=11)
    pub fn semitone(self) -> u8 {
        self as u8
    }

    /// Canonical note name token (uppercase, `#` for sharps)
    pub fn name(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::CSharp => "C#",
            PitchClass::D => "D",
            PitchClass::DSharp => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::FSharp => "F#",
            PitchClass::G => "G",
            PitchClass::GSharp => "G#",
            PitchClass::A => "A",
            PitchClass::ASharp => "A#",
            PitchClass::B => "B",
        }
    }

    /// Look up a pitch class by note name token, case-insensitively.
    /// Returns `None` for anything that is not one of the 12 names.
    pub fn from_name(name: &str) -> Option<PitchClass> {
        let upper = name.to_uppercase();
        PitchClass::ALL.iter().copied().find(|c| c.name() == upper)
    }

    /// Whether this pitch class is a black key on a piano keyboard
    pub fn is_black(self) -> bool {
        matches!(
            self,
            PitchClass::CSharp
                | PitchClass::DSharp
                | PitchClass::FSharp
                | PitchClass::GSharp
                | PitchClass::ASharp
        )
    }

    pub fn color(self) -> KeyColor {
        if self.is_black() {
            KeyColor::Black
        } else {
            KeyColor::White
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// White or black key classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyColor {
    White,
    Black,
}

impl fmt::Display for KeyColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyColor::White => write!(f, "white"),
            KeyColor::Black => write!(f, "black"),
        }
    }
}

/// A pitch class plus octave, e.g. `C#4`
///
/// The octave is restricted to the single digit 0-8 that the piano range
/// spans; anything else fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pitch {
    pub class: PitchClass,
    pub octave: u8,
}

impl Pitch {
    pub fn new(class: PitchClass, octave: u8) -> Pitch {
        Pitch { class, octave }
    }

    /// Standard pitch number: the absolute semitone index where C-1 is 0,
    /// so A4 is 69 and middle C (C4) is 60.
    pub fn midi_number(self) -> i32 {
        (self.octave as i32 + 1) * 12 + self.class.semitone() as i32
    }

    /// Key label relative to A0 (MIDI 21), the lowest piano key.
    ///
    /// Signed: syntactically valid pitches below A0 or above C8 produce
    /// labels outside 0..=87 (e.g. C0 gives -9). Range filtering happens
    /// during keyboard generation, not here.
    pub fn key_label(self) -> i32 {
        self.midi_number() - crate::keyboard::MIDI_A0 as i32
    }

    pub fn color(self) -> KeyColor {
        self.class.color()
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.class, self.octave)
    }
}

impl FromStr for Pitch {
    type Err = KeymapError;

    fn from_str(s: &str) -> Result<Pitch, KeymapError> {
        let invalid = |reason: &str| KeymapError::InvalidPitchName(format!("'{}' {}", s, reason));

        if s.is_empty() {
            return Err(KeymapError::InvalidPitchName("empty string".to_string()));
        }

        // Last character is the octave digit, the rest is the note token
        let (last_idx, last) = s.char_indices().last().unwrap_or((0, '\0'));
        let name = &s[..last_idx];
        let octave = match last {
            c if c.is_ascii_digit() => c as u8 - b'0',
            _ => return Err(invalid("has no octave digit")),
        };
        if octave > 8 {
            return Err(invalid("octave out of range 0-8"));
        }

        let class = PitchClass::from_name(name).ok_or_else(|| invalid("unknown note name"))?;

        Ok(Pitch { class, octave })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_semitone_offsets() {
        assert_eq!(PitchClass::C.semitone(), 0);
        assert_eq!(PitchClass::FSharp.semitone(), 6);
        assert_eq!(PitchClass::A.semitone(), 9);
        assert_eq!(PitchClass::B.semitone(), 11);
    }

    #[test]
    fn test_parse_valid() {
        let pitch: Pitch = "C#4".parse().unwrap();
        assert_eq!(pitch, Pitch::new(PitchClass::CSharp, 4));

        let pitch: Pitch = "A0".parse().unwrap();
        assert_eq!(pitch, Pitch::new(PitchClass::A, 0));

        let pitch: Pitch = "C8".parse().unwrap();
        assert_eq!(pitch, Pitch::new(PitchClass::C, 8));
    }

    #[test]
    fn test_parse_case_insensitive() {
        let lower: Pitch = "c#4".parse().unwrap();
        let upper: Pitch = "C#4".parse().unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower.to_string(), "C#4");
    }

    #[test]
    fn test_parse_invalid() {
        for input in ["H4", "C", "C#9", "", "C44", "4", "Cb4", "C-1"] {
            let result = input.parse::<Pitch>();
            assert!(
                matches!(result, Err(KeymapError::InvalidPitchName(_))),
                "expected '{}' to be rejected, got {:?}",
                input,
                result
            );
        }
    }

    #[test]
    fn test_midi_numbers() {
        assert_eq!("C4".parse::<Pitch>().unwrap().midi_number(), 60);
        assert_eq!("A4".parse::<Pitch>().unwrap().midi_number(), 69);
        assert_eq!("A0".parse::<Pitch>().unwrap().midi_number(), 21);
        assert_eq!("C0".parse::<Pitch>().unwrap().midi_number(), 12);
    }

    #[test]
    fn test_labels_below_range_are_negative() {
        assert_eq!("C0".parse::<Pitch>().unwrap().key_label(), -9);
        assert_eq!("G#0".parse::<Pitch>().unwrap().key_label(), -1);
        assert_eq!("C#8".parse::<Pitch>().unwrap().key_label(), 88);
    }

    #[test]
    fn test_black_key_classification() {
        assert!(PitchClass::CSharp.is_black());
        assert!(PitchClass::ASharp.is_black());
        assert!(!PitchClass::C.is_black());
        assert!(!PitchClass::E.is_black());
        assert_eq!(PitchClass::F.color(), KeyColor::White);
        assert_eq!(PitchClass::GSharp.color(), KeyColor::Black);
    }

    proptest! {
        #[test]
        fn display_parse_roundtrip(class_idx in 0usize..12, octave in 0u8..=8) {
            let pitch = Pitch::new(PitchClass::ALL[class_idx], octave);
            let reparsed: Pitch = pitch.to_string().parse().unwrap();
            prop_assert_eq!(pitch, reparsed);
        }
    }
}
