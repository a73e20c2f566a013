use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::path::PathBuf;

use pianomap_core::{
    all_keys, note_to_key_label, validate_mapping, write_csv, KeyRecord, KEY_COUNT,
};

#[derive(Parser)]
#[command(name = "pianomap")]
#[command(about = "Map piano key names to 0-87 labels", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the key label for a single pitch name (e.g. "C#4")
    Label {
        /// Pitch name to look up
        note: String,
    },
    /// Print the full 88-key mapping
    Table {
        /// Output format (text or json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },
    /// Check the generated mapping for duplicates and gaps
    Validate {
        /// Output format (text or json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },
    /// Write the mapping to a CSV file
    Export {
        /// Output CSV path
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Label { note } => match note_to_key_label(&note) {
            Ok(label) => {
                if (0..KEY_COUNT as i32).contains(&label) {
                    println!("{}", label);
                } else {
                    println!("{} (outside the 88-key range)", label);
                }
                Ok(())
            }
            Err(e) => {
                eprintln!("✗ {}", e);
                std::process::exit(1);
            }
        },
        Commands::Table { format } => {
            let records: Vec<KeyRecord> = all_keys().iter().map(KeyRecord::from).collect();

            match format.as_str() {
                "json" => {
                    let json = serde_json::to_string_pretty(&records)?;
                    println!("{}", json);
                }
                _ => {
                    println!(
                        "{:<5} {:>5} {:>5} {:>7} {:<6}",
                        "note", "label", "midi", "octave", "color"
                    );
                    for record in &records {
                        println!(
                            "{:<5} {:>5} {:>5} {:>7} {:<6}",
                            record.note,
                            record.label,
                            record.midi_number,
                            record.octave,
                            record.key_color
                        );
                    }
                }
            }
            Ok(())
        }
        Commands::Validate { format } => {
            let keys = all_keys();
            let report = validate_mapping(&keys);

            match format.as_str() {
                "json" => {
                    let json = serde_json::to_string_pretty(&report)?;
                    println!("{}", json);
                }
                _ => {
                    println!("{}", report);
                    println!();
                    println!("reference notes:");
                    for note in ["A0", "C1", "C4", "A4", "C8"] {
                        if let Some(key) = keys.iter().find(|k| k.pitch.to_string() == note) {
                            println!("  {}: {}", note, key.label);
                        }
                    }
                }
            }

            if !report.is_complete() {
                eprintln!("✗ mapping is incomplete");
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Export { output } => {
            let keys = all_keys();
            let file = File::create(&output)
                .with_context(|| format!("Failed to create {}", output.display()))?;
            write_csv(file, &keys)
                .with_context(|| format!("Failed to write {}", output.display()))?;

            eprintln!("Saved {} keys to {}", keys.len(), output.display());
            Ok(())
        }
    }
}
