//! skinvert CLI: batch-convert skinned meshes into exploded meshes.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "skinvert")]
#[command(version, about = "Explode skinned meshes and encode per-triangle tangent-space offsets")]
struct Cli {
    /// Log per-mesh details.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert mesh documents; unskinned meshes are reported and skipped.
    Convert {
        /// Mesh documents to convert.
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Write converted meshes here instead of next to each source.
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// File name stem for converted meshes.
        #[arg(short, long, default_value = skinvert::DEFAULT_FILE_STEM)]
        name: String,

        /// Write compact JSON.
        #[arg(long)]
        compact: bool,
    },

    /// Print a summary of a mesh document.
    Inspect {
        /// Path to mesh document.
        path: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Convert {
            paths,
            output_dir,
            name,
            compact,
        } => commands::convert(&paths, output_dir, name, compact),
        Commands::Inspect { path } => commands::inspect(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
