use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "trackforged")]
#[command(author, version, about = "Split downloaded audio into labeled tracks")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split audio into segments using a split spec or chapters
    Split {
        /// Audio file to split
        #[arg(short, long, conflicts_with = "info")]
        input: Option<PathBuf>,

        /// Title used for output names with --input (defaults to the file stem)
        #[arg(long, requires = "input")]
        title: Option<String>,

        /// Source duration in seconds with --input
        #[arg(long, requires = "input")]
        duration: Option<f64>,

        /// Info JSON written by the downloader; the audio is located in the output directory
        #[arg(long, num_args = 1..)]
        info: Vec<PathBuf>,

        /// Split spec: markers ("0:00,1:23,3:45") or ranges ("0:00-1:23=Intro,1:23-end=Outro"); @file reads it from a file
        #[arg(short, long)]
        split: Option<String>,

        /// Use chapter metadata when no split spec is given
        #[arg(long)]
        from_chapters: bool,

        /// Split spec grammar: auto, markers or ranges
        #[arg(long)]
        mode: Option<String>,

        /// Output directory (defaults to the configured one)
        #[arg(short, long)]
        outdir: Option<PathBuf>,

        /// Print the cut plan without running ffmpeg
        #[arg(long)]
        dry_run: bool,
    },

    /// Check that required external tools are available
    CheckTools,

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        #[arg(value_name = "CONFIG")]
        file: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
