//! Progress messages. Everything the program says while running goes through
//! a `Reporter`, which styles a word or two with `anstyle` and leaves it to
//! `anstream` to decide whether the colors reach the terminal.
use anstyle::{AnsiColor, Color, Style};
use anyhow::Result;
use clap::ValueEnum;
use reqwest::StatusCode;
use std::fmt;
use std::io;
use std::path::Path;

use crate::sources::Source;

/// When to color progress messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color only when standard output is a terminal
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

impl From<ColorChoice> for anstream::ColorChoice {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => anstream::ColorChoice::Auto,
            ColorChoice::Always => anstream::ColorChoice::Always,
            ColorChoice::Never => anstream::ColorChoice::Never,
        }
    }
}

const GREEN: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green)));
const BOLD_GREEN: Style = GREEN.bold();
const YELLOW: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow)));
const BOLD_RED: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold();

struct StyledStr<'a> {
    prefix: Style,
    content: &'a str,
}
fn styled(prefix: Style, content: &str) -> StyledStr<'_> {
    StyledStr { prefix, content }
}
impl fmt::Display for StyledStr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.prefix.render(), self.content, self.prefix.render_reset())
    }
}

/// Writes progress messages to `out`
pub struct Reporter<W: io::Write> {
    out: W,
}

impl Reporter<anstream::AutoStream<io::Stdout>> {
    /// A `Reporter` for standard output, colored according to `choice`
    #[must_use]
    pub fn stdout(choice: ColorChoice) -> Self {
        Reporter::new(anstream::AutoStream::new(io::stdout(), choice.into()))
    }
}

impl<W: io::Write> Reporter<W> {
    /// A `Reporter` writing to `out`, ANSI escapes and all
    #[must_use]
    pub fn new(out: W) -> Self {
        Reporter { out }
    }

    /// Returns the underlying writer
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }

    /// `200 OK https://adaway.org/hosts.txt`
    pub fn response(&mut self, status: StatusCode, url: &str) -> Result<()> {
        let style = if status.is_success() { BOLD_GREEN } else { BOLD_RED };
        let status = status.to_string();
        writeln!(self.out, "{} {url}", styled(style, &status))?;
        Ok(())
    }

    /// `ADAWAY found hosts: 1234`
    pub fn found(&mut self, source: Source, count: usize) -> Result<()> {
        writeln!(self.out, "{} found hosts: {count}", styled(YELLOW, source.name()))?;
        Ok(())
    }

    /// `Written 1234 hosts in blocklist.txt`
    pub fn written(&mut self, count: usize, path: &Path) -> Result<()> {
        let count = count.to_string();
        writeln!(self.out, "Written {} hosts in {}", styled(GREEN, &count), path.display())?;
        self.out.flush()?;
        Ok(())
    }
}
