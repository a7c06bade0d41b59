//! Interactive configuration gathering
//!
//! Asks for the project path, extra exclusions, hidden-file visibility and a
//! depth limit, one line each. Reads and writes through generic streams so the
//! sequence can be driven from tests.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::error::{GroveError, Result};
use crate::tree::{DEFAULT_EXCLUDES, TraversalConfig, parse_exclude_list};

/// Answers collected from an interactive session.
#[derive(Debug, Clone)]
pub struct PromptedConfig {
    pub root: PathBuf,
    pub config: TraversalConfig,
}

/// Run the prompt sequence. Relative paths are resolved against `cwd`.
///
/// Fails with [`GroveError::NotFound`] as soon as the chosen path does not
/// exist, before asking anything else.
pub fn prompt_for_config<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    cwd: &Path,
) -> Result<PromptedConfig> {
    let answer = ask(
        input,
        output,
        "Enter project folder path (relative or absolute, press Enter for current): ",
    )?;
    let root = if answer.is_empty() {
        cwd.to_path_buf()
    } else {
        cwd.join(answer)
    };
    if !root.exists() {
        return Err(GroveError::NotFound(root));
    }

    writeln!(output, "Default excluded folders: {}", DEFAULT_EXCLUDES.join(", "))
        .map_err(GroveError::Prompt)?;
    let extra = ask(
        input,
        output,
        "Add more folders to exclude (comma-separated, or press Enter to keep default): ",
    )?;

    let hidden = ask(input, output, "Show hidden files/folders? (y/N): ")?;
    let depth = ask(input, output, "Max depth (press Enter for unlimited): ")?;

    let config = TraversalConfig::builder()
        .excludes(parse_exclude_list(&extra))
        .show_hidden(hidden.eq_ignore_ascii_case("y"))
        .max_depth(parse_depth(&depth))
        .build()?;

    Ok(PromptedConfig { root, config })
}

/// Digits only; anything else means unlimited.
fn parse_depth(answer: &str) -> Option<usize> {
    if answer.is_empty() || !answer.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    answer.parse().ok()
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<String> {
    write!(output, "{}", question).map_err(GroveError::Prompt)?;
    output.flush().map_err(GroveError::Prompt)?;

    let mut line = String::new();
    input.read_line(&mut line).map_err(GroveError::Prompt)?;
    Ok(line.trim().to_string())
}
