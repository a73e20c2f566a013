use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The two external stages of the conversion pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// MIDI -> WAV rendering via fluidsynth
    Synthesis,
    /// WAV -> MP3 encoding via ffmpeg
    Encoding,
}

impl Stage {
    /// Name of the external program this stage runs
    pub fn program(self) -> &'static str {
        match self {
            Stage::Synthesis => "fluidsynth",
            Stage::Encoding => "ffmpeg",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Synthesis => write!(f, "synthesis (fluidsynth)"),
            Stage::Encoding => write!(f, "encoding (ffmpeg)"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("MIDI file not found: {0}")]
    MissingMidi(PathBuf),

    #[error("SoundFont file not found: {0}")]
    MissingSoundfont(PathBuf),

    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// The external program could not be started at all
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: &'static str,
        source: std::io::Error,
    },

    /// The external program exited non-zero; carries its captured stderr
    #[error("{stage} failed: {stderr}")]
    StageFailed { stage: Stage, stderr: String },

    /// The stage exited zero but its expected output file does not exist
    #[error("{stage} produced no output file: {path}")]
    MissingArtifact { stage: Stage, path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
