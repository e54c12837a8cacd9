//! CLI Application logic
//!
//! Contains the command-line interface implementation: argument parsing
//! and the compile command that ties segmenter and emitters together.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;

use notedok_core::{
    cards_to_tsv, emit_cards, emit_latex_with_config, segment, LatexConfig, FIGURES_DIR,
};

/// Output filename for the LaTeX body
pub const TEX_FILENAME: &str = "notes.tex";

/// Output filename for the flashcard export
pub const TSV_FILENAME: &str = "anki.tsv";

#[derive(Parser)]
#[command(name = "notedok")]
#[command(author, version, about = "Plain text lecture notes, compiled", long_about = None)]
struct Cli {
    /// Input notes file
    input: PathBuf,

    /// Output directory for notes.tex and anki.tsv
    out_dir: PathBuf,
}

/// Run the CLI application
///
/// Parses the two positional arguments and compiles. Argument errors
/// print the usage text on standard output and exit with status 1;
/// `--help` and `--version` keep their usual zero exit.
pub fn run_cli() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err)
            if err.kind() == ErrorKind::DisplayHelp || err.kind() == ErrorKind::DisplayVersion =>
        {
            print!("{}", err);
            return Ok(());
        }
        Err(err) => {
            print!("{}", err);
            std::process::exit(1);
        }
    };

    compile_command(&cli.input, &cli.out_dir)
}

/// Execute the compile command with the default figure directory
pub fn compile_command(input: &Path, out_dir: &Path) -> Result<()> {
    compile_notes(input, out_dir, Path::new(FIGURES_DIR))
}

/// Compile `input` into `out_dir`, resolving figures against `figures_dir`
///
/// Both emitters run to completion before the output directory is created,
/// so a failed run leaves no partial artifacts behind.
pub fn compile_notes(input: &Path, out_dir: &Path, figures_dir: &Path) -> Result<()> {
    let text = fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;

    let notes = segment(&text);

    let config = LatexConfig {
        figures_dir: figures_dir.to_path_buf(),
    };
    let latex = emit_latex_with_config(&notes, config)
        .with_context(|| format!("Failed to compile {}", input.display()))?;
    let cards = emit_cards(&notes.blocks);

    fs::create_dir_all(out_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            out_dir.display()
        )
    })?;

    let tex_path = out_dir.join(TEX_FILENAME);
    fs::write(&tex_path, &latex)
        .with_context(|| format!("Failed to write LaTeX body: {}", tex_path.display()))?;

    let tsv_path = out_dir.join(TSV_FILENAME);
    fs::write(&tsv_path, cards_to_tsv(&cards))
        .with_context(|| format!("Failed to write flashcards: {}", tsv_path.display()))?;

    match notes.lecture {
        Some(ref id) => println!("Compiled lecture {}", id),
        None => println!("Warning: no lecture ID found"),
    }

    Ok(())
}
