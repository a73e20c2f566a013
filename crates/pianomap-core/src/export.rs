use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

use crate::error::{KeymapError, Result};
use crate::keyboard::PianoKey;
use crate::pitch::{KeyColor, Pitch};

/// Flat row format for the tabular export boundary.
///
/// Carries the (note, label) pair plus the derived columns downstream
/// consumers expect: the raw MIDI number, the octave, the bare note name
/// and the white/black classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyRecord {
    pub note: String,
    pub label: u8,
    pub midi_number: u8,
    pub octave: u8,
    pub note_name: String,
    pub key_color: KeyColor,
}

impl From<&PianoKey> for KeyRecord {
    fn from(key: &PianoKey) -> KeyRecord {
        KeyRecord {
            note: key.pitch.to_string(),
            label: key.label,
            midi_number: key.midi_number(),
            octave: key.pitch.octave,
            note_name: key.pitch.class.name().to_string(),
            key_color: key.color(),
        }
    }
}

impl KeyRecord {
    /// Reconstruct the piano key, re-parsing the note name and
    /// cross-checking the stored label against the recomputed one.
    pub fn to_key(&self) -> Result<PianoKey> {
        let pitch: Pitch = self.note.parse()?;
        let expected = pitch.key_label();
        if expected != self.label as i32 {
            return Err(KeymapError::LabelMismatch {
                note: self.note.clone(),
                expected,
                found: self.label as i32,
            });
        }
        Ok(PianoKey {
            pitch,
            label: self.label,
        })
    }
}

/// Write the mapping as CSV with a header row
pub fn write_csv<W: Write>(writer: W, keys: &[PianoKey]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for key in keys {
        csv_writer.serialize(KeyRecord::from(key))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Read previously exported CSV rows back
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<KeyRecord>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for row in csv_reader.deserialize() {
        records.push(row?);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::all_keys;

    #[test]
    fn test_roundtrip_is_lossless() {
        let keys = all_keys();

        let mut buffer = Vec::new();
        write_csv(&mut buffer, &keys).unwrap();

        let records = read_csv(buffer.as_slice()).unwrap();
        assert_eq!(records.len(), keys.len());

        let reread: Vec<PianoKey> = records.iter().map(|r| r.to_key().unwrap()).collect();
        assert_eq!(reread, keys);
    }

    #[test]
    fn test_record_columns() {
        let keys = all_keys();
        let record = KeyRecord::from(&keys[39]);
        assert_eq!(record.note, "C4");
        assert_eq!(record.label, 39);
        assert_eq!(record.midi_number, 60);
        assert_eq!(record.octave, 4);
        assert_eq!(record.note_name, "C");
        assert_eq!(record.key_color, KeyColor::White);
    }

    #[test]
    fn test_csv_header_and_first_row() {
        let keys = all_keys();
        let mut buffer = Vec::new();
        write_csv(&mut buffer, &keys).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("note,label,midi_number,octave,note_name,key_color")
        );
        assert_eq!(lines.next(), Some("A0,0,21,0,A,white"));
    }

    #[test]
    fn test_tampered_label_is_rejected() {
        let keys = all_keys();
        let mut record = KeyRecord::from(&keys[0]);
        record.label = 1;

        let result = record.to_key();
        assert!(matches!(
            result,
            Err(KeymapError::LabelMismatch {
                expected: 0,
                found: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_bad_note_in_row_is_rejected() {
        let csv_data = "note,label,midi_number,octave,note_name,key_color\nH4,0,21,4,H,white\n";
        let records = read_csv(csv_data.as_bytes()).unwrap();
        assert!(matches!(
            records[0].to_key(),
            Err(KeymapError::InvalidPitchName(_))
        ));
    }
}
