//! Gloss CLI - Validate knowledge blocks in a document from the command line.

use anyhow::{bail, Context, Result};
use clap::Parser;
use gloss_domain::UploadedFile;
use gloss_extractor::ValidationService;
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Validate the knowledge blocks in a document
///
/// Runs the same pipeline as the HTTP server: extract text, scan for
/// BEGIN_KNOWLEDGE / END_KNOWLEDGE blocks, and check each block for
/// well-formed JSON. Exits non-zero when the document yields no blocks.
#[derive(Debug, Parser)]
#[command(name = "gloss")]
#[command(version, about)]
struct Cli {
    /// Document to validate (.docx, .pdf, .txt, or .json)
    file: PathBuf,

    /// Declared media type, for files whose suffix is not enough
    #[arg(short, long)]
    media_type: Option<String>,

    /// Print a one-line summary instead of the full JSON report
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so the report on stdout stays pipeable.
    let filter = if cli.quiet { "error" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    let file = load_file(&cli.file, cli.media_type)?;

    let service = ValidationService::with_defaults();
    let report = service
        .validate_document(&file)
        .with_context(|| format!("failed to validate {}", cli.file.display()))?;

    if report.blocks_found == 0 {
        bail!("no knowledge blocks found in {}", cli.file.display());
    }

    if cli.quiet {
        println!(
            "{}: {} blocks found, {} valid, {} invalid",
            cli.file.display(),
            report.blocks_found,
            report.valid_blocks,
            report.invalid_blocks
        );
    } else {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}

/// Read a document from disk into an upload value
fn load_file(path: &Path, media_type: Option<String>) -> Result<UploadedFile> {
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .with_context(|| format!("{} has no file name", path.display()))?;

    let data =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;

    Ok(UploadedFile::new(filename, media_type, data))
}
