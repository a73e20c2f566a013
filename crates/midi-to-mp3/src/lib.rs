//! MIDI to MP3 conversion pipeline
//!
//! Renders a MIDI file to WAV with an external `fluidsynth` process, then
//! encodes the WAV to MP3 with `ffmpeg` (LAME). Each stage validates its
//! inputs up front and its output artifact afterwards; the first failure
//! aborts the pipeline.

pub mod error;
pub mod pipeline;

pub use error::{ConvertError, Stage};
pub use pipeline::{convert_midi_to_mp3, wav_path_for, ConvertOptions};
