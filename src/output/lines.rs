//! In-memory line sink

use std::io;

use crate::tree::{CORNER, DENIED_LABEL, EntryKind, SEPARATOR, TreeOutput, connector};

/// Collects rendered lines as plain strings, without color.
#[derive(Debug, Default)]
pub struct LineCollector {
    lines: Vec<String>,
}

impl LineCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl TreeOutput for LineCollector {
    fn output_entry(
        &mut self,
        prefix: &str,
        name: &str,
        _kind: EntryKind,
        is_last: bool,
    ) -> io::Result<()> {
        self.lines
            .push(format!("{}{}{}", prefix, connector(is_last), name));
        Ok(())
    }

    fn output_separator(&mut self, prefix: &str) -> io::Result<()> {
        self.lines.push(format!("{}{}", prefix, SEPARATOR));
        Ok(())
    }

    fn output_denied(&mut self, prefix: &str) -> io::Result<()> {
        self.lines
            .push(format!("{}{}{}", prefix, CORNER, DENIED_LABEL));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_shapes() {
        let mut lines = LineCollector::new();
        lines.output_entry("", "proj", EntryKind::Folder, true).unwrap();
        lines.output_entry("    ", "src", EntryKind::Folder, false).unwrap();
        lines.output_separator("    ").unwrap();
        lines.output_denied("    │   ").unwrap();

        assert_eq!(
            lines.lines(),
            [
                "└── proj",
                "    ├── src",
                "    │",
                "    │   └── [Permission Denied]",
            ]
        );
    }
}
