//! Streaming output formatter
//!
//! This module provides `StreamingFormatter` which writes tree lines
//! directly to a terminal stream as the renderer produces them.

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::{CORNER, DENIED_LABEL, EntryKind, RenderStats, SEPARATOR, TreeOutput, connector};

use super::config::OutputConfig;

/// Streaming output formatter - writes each line as soon as it is rendered.
/// Implements the TreeOutput trait for use with TreeRenderer.
pub struct StreamingFormatter<W: WriteColor = StandardStream> {
    config: OutputConfig,
    out: W,
}

impl StreamingFormatter<StandardStream> {
    /// Formatter writing to stdout.
    pub fn new(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self {
            config,
            out: StandardStream::stdout(choice),
        }
    }
}

impl<W: WriteColor> StreamingFormatter<W> {
    pub fn with_writer(config: OutputConfig, out: W) -> Self {
        Self { config, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print a title and a rule above the tree.
    pub fn write_header(&mut self, title: &str) -> io::Result<()> {
        self.out.set_color(ColorSpec::new().set_bold(true))?;
        writeln!(self.out, "Project Structure: {}", title)?;
        self.out.reset()?;
        writeln!(self.out, "{}", "=".repeat(50))
    }
}

impl<W: WriteColor> TreeOutput for StreamingFormatter<W> {
    fn output_entry(
        &mut self,
        prefix: &str,
        name: &str,
        kind: EntryKind,
        is_last: bool,
    ) -> io::Result<()> {
        write!(self.out, "{}{}", prefix, connector(is_last))?;
        if kind.is_folder() {
            self.out
                .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
            write!(self.out, "{}", name)?;
            self.out.reset()?;
        } else {
            write!(self.out, "{}", name)?;
        }
        writeln!(self.out)
    }

    fn output_separator(&mut self, prefix: &str) -> io::Result<()> {
        writeln!(self.out, "{}{}", prefix, SEPARATOR)
    }

    fn output_denied(&mut self, prefix: &str) -> io::Result<()> {
        write!(self.out, "{}{}", prefix, CORNER)?;
        self.out.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
        write!(self.out, "{}", DENIED_LABEL)?;
        self.out.reset()?;
        writeln!(self.out)
    }

    fn finish(&mut self, stats: &RenderStats) -> io::Result<()> {
        if self.config.summary {
            writeln!(self.out)?;
            write!(self.out, "{} directories, {} files", stats.dirs, stats.files)?;
            if stats.denied > 0 {
                write!(self.out, ", {} unreadable", stats.denied)?;
            }
            writeln!(self.out)?;
        }
        self.out.flush()
    }
}
