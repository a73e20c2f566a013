use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{ConvertError, Stage};

/// Tuning knobs for the two pipeline stages
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Sample rate fluidsynth renders at
    pub sample_rate: u32,
    /// LAME VBR quality (0-9, lower is better)
    pub vbr_quality: u32,
    /// Keep the intermediate WAV file instead of deleting it
    pub keep_wav: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            sample_rate: 44100,
            vbr_quality: 2,
            keep_wav: false,
        }
    }
}

impl ConvertOptions {
    pub fn validate(&self) -> Result<(), ConvertError> {
        if self.sample_rate == 0 {
            return Err(ConvertError::InvalidOptions(
                "sample rate must be positive".to_string(),
            ));
        }
        if self.vbr_quality > 9 {
            return Err(ConvertError::InvalidOptions(format!(
                "VBR quality must be 0-9, got {}",
                self.vbr_quality
            )));
        }
        Ok(())
    }
}

/// Intermediate WAV path: next to the final MP3, named after the MIDI stem
pub fn wav_path_for(midi: &Path, output: &Path) -> PathBuf {
    let stem = midi
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");

    match output.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(format!("{}.wav", stem)),
        _ => PathBuf::from(format!("{}.wav", stem)),
    }
}

/// Convert a MIDI file to MP3 via an intermediate WAV.
///
/// Runs fluidsynth, checks the WAV exists, runs ffmpeg, checks the MP3
/// exists, then deletes the WAV unless `options.keep_wav`. Returns the MP3
/// path on success. No retries; the first failing stage aborts.
pub fn convert_midi_to_mp3(
    midi: &Path,
    soundfont: &Path,
    output: &Path,
    options: &ConvertOptions,
) -> Result<PathBuf, ConvertError> {
    options.validate()?;

    if !midi.is_file() {
        return Err(ConvertError::MissingMidi(midi.to_path_buf()));
    }
    if !soundfont.is_file() {
        return Err(ConvertError::MissingSoundfont(soundfont.to_path_buf()));
    }

    if let Some(dir) = output.parent() {
        if !dir.as_os_str().is_empty() && !dir.is_dir() {
            fs::create_dir_all(dir)?;
        }
    }

    let wav = wav_path_for(midi, output);

    // Stage 1: MIDI -> WAV
    let mut synth = Command::new(Stage::Synthesis.program());
    synth
        .arg("-ni")
        .arg("-F")
        .arg(&wav)
        .arg("-r")
        .arg(options.sample_rate.to_string())
        .arg(soundfont)
        .arg(midi);
    run_stage(synth, Stage::Synthesis)?;

    if !wav.is_file() {
        return Err(ConvertError::MissingArtifact {
            stage: Stage::Synthesis,
            path: wav,
        });
    }

    // Stage 2: WAV -> MP3
    let mut encode = Command::new(Stage::Encoding.program());
    encode
        .arg("-y")
        .arg("-i")
        .arg(&wav)
        .arg("-codec:a")
        .arg("libmp3lame")
        .arg("-qscale:a")
        .arg(options.vbr_quality.to_string())
        .arg(output);
    run_stage(encode, Stage::Encoding)?;

    if !output.is_file() {
        return Err(ConvertError::MissingArtifact {
            stage: Stage::Encoding,
            path: output.to_path_buf(),
        });
    }

    if !options.keep_wav {
        if let Err(e) = fs::remove_file(&wav) {
            eprintln!("Warning: failed to remove {}: {}", wav.display(), e);
        }
    }

    Ok(output.to_path_buf())
}

/// Run one external stage with captured output, mapping failures to
/// `Spawn` (could not start) or `StageFailed` (non-zero exit)
fn run_stage(mut command: Command, stage: Stage) -> Result<(), ConvertError> {
    let result = command
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|source| ConvertError::Spawn {
            program: stage.program(),
            source,
        })?;

    if !result.status.success() {
        let stderr = String::from_utf8_lossy(&result.stderr).trim().to_string();
        return Err(ConvertError::StageFailed { stage, stderr });
    }

    Ok(())
}
