use thiserror::Error;

pub type Result<T> = std::result::Result<T, KeymapError>;

#[derive(Error, Debug)]
pub enum KeymapError {
    /// The note token is not one of the 12 chromatic names, or the octave
    /// segment is not a single digit in 0-8.
    #[error("invalid pitch name: {0}")]
    InvalidPitchName(String),

    /// A deserialized row carries a label that disagrees with the label
    /// recomputed from its note name.
    #[error("label mismatch for '{note}': expected {expected}, found {found}")]
    LabelMismatch {
        note: String,
        expected: i32,
        found: i32,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
