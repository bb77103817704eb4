use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summarize a text file and translate the summary to Urdu
    Process {
        /// Input plain-text file
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory for digest records
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Number of sentences the summary aims for
        #[arg(short, long)]
        target_sentences: Option<usize>,
    },

    /// Process all text files in a directory
    Batch {
        /// Input directory containing text files
        #[arg(short, long)]
        input_dir: PathBuf,

        /// Output directory for digest records
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// Produce the extractive summary only, without translation
    Summarize {
        /// Input plain-text file
        #[arg(short, long)]
        input: PathBuf,

        /// Number of sentences the summary aims for
        #[arg(short, long)]
        target_sentences: Option<usize>,
    },

    /// Run the translation cascade on a file's content directly
    Translate {
        /// Input plain-text file
        #[arg(short, long)]
        input: PathBuf,
    },
}
