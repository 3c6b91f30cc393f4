//! CLI interface for Petrichor

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Weather-driven soundscape parameters
#[derive(Parser)]
#[command(name = "petrichor")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Map the current weather to sound parameters and print them
    Map {
        /// Configuration file path
        #[arg(short, long, default_value = "petrichor.yaml")]
        config: PathBuf,

        /// Override the configured location
        #[arg(short, long)]
        location: Option<String>,

        /// Map a saved API response (JSON file) instead of fetching
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Poll the weather and print parameters on every update
    Watch {
        /// Configuration file path
        #[arg(short, long, default_value = "petrichor.yaml")]
        config: PathBuf,
    },

    /// Map a WAV file to microphone sound parameters
    Mic {
        /// Input WAV file
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Print a random demo parameter set
    Demo,

    /// List available audio input devices
    Devices,

    /// Validate a configuration file
    Check {
        /// Configuration file path
        #[arg(short, long, default_value = "petrichor.yaml")]
        config: PathBuf,
    },

    /// Generate an example configuration file
    Init,
}
