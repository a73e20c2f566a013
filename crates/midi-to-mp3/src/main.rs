mod error;
mod pipeline;

use anyhow::Result;
use clap::Parser;
use std::fs;
use std::path::PathBuf;

use pipeline::{convert_midi_to_mp3, ConvertOptions};

#[derive(Parser, Debug)]
#[command(name = "midi-to-mp3")]
#[command(about = "Convert MIDI files to MP3 via fluidsynth and ffmpeg", long_about = None)]
struct Args {
    /// Path to the MIDI file (default: uses first .mid file in current directory)
    #[arg(short, long)]
    midi: Option<PathBuf>,

    /// Path to the SoundFont (.sf2) used for synthesis
    #[arg(short, long)]
    soundfont: PathBuf,

    /// Output MP3 path (default: `<midi-name>.mp3`)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Sample rate for the rendered audio
    #[arg(short = 'r', long, default_value = "44100")]
    sample_rate: u32,

    /// LAME VBR quality (0-9, lower is better)
    #[arg(short, long, default_value = "2")]
    quality: u32,

    /// Keep the intermediate WAV file
    #[arg(short, long)]
    keep_wav: bool,

    /// Suppress informational messages (only errors)
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Find MIDI file
    let midi_path = if let Some(path) = args.midi {
        if !path.exists() {
            anyhow::bail!("MIDI file not found: {}", path.display());
        }
        path
    } else {
        find_first_midi_file()?
    };

    // Determine output path (use .mp3 extension)
    let output_path = if let Some(path) = args.output {
        path
    } else {
        let stem = midi_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("output");
        PathBuf::from(format!("{}.mp3", stem))
    };

    let options = ConvertOptions {
        sample_rate: args.sample_rate,
        vbr_quality: args.quality,
        keep_wav: args.keep_wav,
    };

    if !args.quiet {
        eprintln!(
            "Converting {} -> {}",
            midi_path.display(),
            output_path.display()
        );
    }

    let mp3 = convert_midi_to_mp3(&midi_path, &args.soundfont, &output_path, &options)?;

    if !args.quiet {
        eprintln!("Saved {}", mp3.display());
    }
    println!("{}", mp3.display());

    Ok(())
}

fn find_first_midi_file() -> Result<PathBuf> {
    let entries = fs::read_dir(".")?;

    for entry in entries {
        let entry = entry?;
        let path = entry.path();

        if path.extension().and_then(|s| s.to_str()) == Some("mid") {
            return Ok(path);
        }
    }

    anyhow::bail!("No MIDI files found in current directory")
}
