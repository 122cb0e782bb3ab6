//! Terminal rendering for markdown admin views and wizard headings.

use std::io::{self, Write};

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);

        Self { rich_enabled, skin }
    }

    /// Renders markdown to a string; plain mode returns it unchanged.
    ///
    /// Header lines keep their hash marks and are colored as a whole.
    pub fn format(&self, markdown: &str) -> String {
        if !self.rich_enabled {
            return markdown.to_string();
        }
        let mut out = String::with_capacity(markdown.len());
        for line in markdown.lines() {
            if line.starts_with('#') {
                out.push_str(&format!("\x1b[34m{line}\x1b[0m"));
            } else {
                out.push_str(&self.skin.inline(line).to_string());
            }
            out.push('\n');
        }
        out
    }

    /// Render markdown text to the terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(self.format(markdown).as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
