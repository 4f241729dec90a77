#[cfg(test)]
#[path = "ansi_test.rs"]
mod tests;

use std::io;
use std::io::Write;

use anyhow::Result;
use crossterm::cursor;
use crossterm::terminal::Clear;
use crossterm::terminal::ClearType;
use yansi::Paint;

use crate::domain::models::DisplaySurface;
use crate::domain::models::TextStyle;

/// Display surface over raw-mode stdout. Owns the palette rendering; the
/// console only ever sends semantic styles.
pub struct AnsiDisplay {
    stdout: io::Stdout,
}

impl Default for AnsiDisplay {
    fn default() -> AnsiDisplay {
        return AnsiDisplay {
            stdout: io::stdout(),
        };
    }
}

impl AnsiDisplay {
    pub fn new() -> AnsiDisplay {
        return AnsiDisplay::default();
    }
}

impl DisplaySurface for AnsiDisplay {
    fn write(&mut self, style: TextStyle, text: &str) -> Result<()> {
        let normalized = normalize_newlines(text);
        let painted = match style {
            TextStyle::Default => normalized,
            TextStyle::Error => Paint::red(normalized).to_string(),
            TextStyle::Dim => Paint::new(normalized).dimmed().to_string(),
            TextStyle::Accent => Paint::cyan(normalized).bold().to_string(),
        };

        self.stdout.write_all(painted.as_bytes())?;
        self.stdout.flush()?;
        return Ok(());
    }

    fn clear(&mut self) -> Result<()> {
        crossterm::execute!(self.stdout, Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        return Ok(());
    }

    fn focus(&mut self) -> Result<()> {
        crossterm::execute!(self.stdout, cursor::Show)?;
        return Ok(());
    }
}

/// Raw mode does not translate bare line feeds, so expand them to CRLF while
/// leaving already-paired sequences alone. Executor output arrives with
/// whatever convention the command used.
fn normalize_newlines(text: &str) -> String {
    return text.replace("\r\n", "\n").replace('\n', "\r\n");
}
