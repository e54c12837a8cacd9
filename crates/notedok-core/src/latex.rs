//! LaTeX Emitter
//!
//! This module renders a `notedok_ast::Notes` document into a LaTeX body
//! (the content of `notes.tex`, to be `\input` by a wrapper document).
//!
//! Each block becomes one fragment; fragments are separated by blank
//! lines. Question/answer blocks belong to the flashcard export and
//! produce nothing here.
//!
//! # Example
//!
//! ```
//! use notedok_core::{emit_latex, segment};
//!
//! let notes = segment("S: Kinematics\nTH: Bodies in motion stay in motion.");
//! let latex = emit_latex(&notes).unwrap();
//! assert!(latex.contains("\\section{Kinematics}"));
//! assert!(latex.contains("\\begin{theorem}"));
//! ```

use std::fmt::Write;
use std::path::{Path, PathBuf};

use notedok_ast::{Block, Environment, EnvironmentKind, Figure, Notes};

use crate::error::Result;
use crate::figures::{FigureDir, FIGURES_DIR};

/// LaTeX emitter configuration
#[derive(Debug, Clone)]
pub struct LatexConfig {
    /// Directory probed for figure assets
    pub figures_dir: PathBuf,
}

impl Default for LatexConfig {
    fn default() -> Self {
        Self {
            figures_dir: PathBuf::from(FIGURES_DIR),
        }
    }
}

/// LaTeX emitter
pub struct LatexEmitter {
    config: LatexConfig,
    output: String,
}

impl LatexEmitter {
    /// Create a new emitter with default configuration
    pub fn new() -> Self {
        Self::with_config(LatexConfig::default())
    }

    /// Create an emitter with custom configuration
    pub fn with_config(config: LatexConfig) -> Self {
        Self {
            config,
            output: String::new(),
        }
    }

    /// Emit the LaTeX body for a document
    ///
    /// Figure resolution happens here, so a dangling figure reference
    /// fails the whole emission before anything reaches disk.
    pub fn emit(&mut self, notes: &Notes) -> Result<String> {
        self.output.clear();
        let figures = FigureDir::new(&self.config.figures_dir);

        for block in &notes.blocks {
            let fragment = match self.block_fragment(&figures, block, notes.lecture.as_deref())? {
                Some(fragment) => fragment,
                None => continue,
            };
            if !self.output.is_empty() {
                // Blank line between fragments
                self.output.push('\n');
            }
            self.output.push_str(&fragment);
        }

        Ok(self.output.clone())
    }

    /// Render a single block, or `None` for blocks this emitter ignores
    fn block_fragment(
        &self,
        figures: &FigureDir,
        block: &Block,
        lecture: Option<&str>,
    ) -> Result<Option<String>> {
        let fragment = match block {
            Block::Section(title) => format!("\\section{{{}}}\n", title),
            Block::Subsection(title) => format!("\\subsection{{{}}}\n", title),
            // presection/postsection are opened but never closed; the
            // consuming document class is responsible for their scope
            Block::PreSection(arg) => format!("\\begin{{presection}}{{{}}}\n", arg),
            Block::PostSection(arg) => format!("\\begin{{postsection}}{{{}}}\n", arg),
            Block::Environment(env) => Self::environment_fragment(env),
            Block::Figure(figure) => self.figure_fragment(figures, figure, lecture)?,
            Block::Question(_) | Block::Answer(_) => return Ok(None),
        };
        Ok(Some(fragment))
    }

    /// Render a begin/body/end environment
    fn environment_fragment(env: &Environment) -> String {
        let name = environment_name(env.kind);
        format!("\\begin{{{}}}\n{}\n\\end{{{}}}\n", name, env.body, name)
    }

    /// Render a figure: centered image, caption, and reference label
    fn figure_fragment(
        &self,
        figures: &FigureDir,
        figure: &Figure,
        lecture: Option<&str>,
    ) -> Result<String> {
        let path = figures.resolve(&figure.number)?;
        let label = figure_label(lecture, &figure.number);

        let mut out = String::new();
        writeln!(out, "\\begin{{center}}").unwrap();
        writeln!(
            out,
            "\\includegraphics[width=0.6\\linewidth]{{{}}}",
            posix_path(&path)
        )
        .unwrap();
        writeln!(out, "\\captionof{{figure}}{{{}}}", figure.caption).unwrap();
        writeln!(out, "\\label{{{}}}", label).unwrap();
        writeln!(out, "\\end{{center}}").unwrap();
        Ok(out)
    }
}

impl Default for LatexEmitter {
    fn default() -> Self {
        Self::new()
    }
}

/// LaTeX environment name for an environment kind
fn environment_name(kind: EnvironmentKind) -> &'static str {
    match kind {
        EnvironmentKind::Theorem => "theorem",
        EnvironmentKind::Lemma => "lemma",
        EnvironmentKind::Corollary => "corollary",
        EnvironmentKind::Exercise => "exercise",
        EnvironmentKind::Note => "remarkbar",
        EnvironmentKind::Equation => "equation",
        EnvironmentKind::Derivation => "derivation",
    }
}

/// Reference tag for a figure, namespaced by lecture when one is known
fn figure_label(lecture: Option<&str>, number: &str) -> String {
    match lecture {
        Some(id) => format!("fig:{}-{}", id, number),
        None => format!("fig:{}", number),
    }
}

/// Render a path with forward-slash separators regardless of platform
fn posix_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Emit the LaTeX body with default configuration
pub fn emit_latex(notes: &Notes) -> Result<String> {
    LatexEmitter::new().emit(notes)
}

/// Emit the LaTeX body with custom configuration
pub fn emit_latex_with_config(notes: &Notes, config: LatexConfig) -> Result<String> {
    LatexEmitter::with_config(config).emit(notes)
}
