//! Piano key labeling core
//!
//! This crate maps musical pitch names to the 0-87 key labels of a standard
//! 88-key piano (A0 is label 0, C8 is label 87) and back, validates the
//! completeness of the generated mapping, and serializes it to CSV for
//! downstream consumers.
//!
//! # Examples
//!
//! ```
//! use pianomap_core::{all_keys, note_to_key_label};
//!
//! assert_eq!(note_to_key_label("A0").unwrap(), 0);
//! assert_eq!(note_to_key_label("C4").unwrap(), 39);
//!
//! let keys = all_keys();
//! assert_eq!(keys.len(), 88);
//! ```
//!
//! # Main Components
//!
//! - **Pitch**: A pitch class plus octave, parsed from names like `"C#4"`
//! - **PianoKey**: One of the 88 physical keys with its 0-87 label
//! - **ValidationReport**: Completeness/uniqueness check over a mapping
//! - **KeyRecord**: The flat CSV row format for the export boundary

pub mod error;
pub mod export;
pub mod keyboard;
pub mod pitch;
pub mod validate;

pub use error::{KeymapError, Result};
pub use export::{read_csv, write_csv, KeyRecord};
pub use keyboard::{all_keys, note_to_key_label, pitch_for_label, PianoKey, KEY_COUNT, MIDI_A0};
pub use pitch::{KeyColor, Pitch, PitchClass};
pub use validate::{validate_mapping, ValidationReport};
