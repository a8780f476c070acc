//! Terminal rendering context
//!
//! A [`Console`] is created once by the binary and passed to the driver. It
//! owns the output stream and decides where progress bars are drawn, so tests
//! can render into a buffer with progress hidden.

pub mod logging;
pub mod progress;

pub use logging::BarSlot;
pub use progress::ProgressReporter;

use colored::{Color, ColoredString, Colorize};
use indicatif::ProgressDrawTarget;
use std::io::{self, Write};

/// Styled output sink plus progress bar factory
pub struct Console<W: Write> {
    out: W,
    interactive: bool,
    slot: Option<BarSlot>,
}

impl Console<io::Stdout> {
    /// Console writing to stdout, with progress drawn on stderr.
    ///
    /// Live bars are published to `slot` so the logger can suspend them.
    pub fn stdout(slot: BarSlot) -> Self {
        Console {
            out: io::stdout(),
            interactive: true,
            slot: Some(slot),
        }
    }
}

impl<W: Write> Console<W> {
    /// Console writing to `out`, with progress bars hidden
    pub fn with_writer(out: W) -> Self {
        Console {
            out,
            interactive: false,
            slot: None,
        }
    }

    /// Consume the console, returning the writer
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Start a progress bar scoped to one run
    pub fn progress(&self) -> ProgressReporter {
        if self.interactive {
            ProgressReporter::new(ProgressDrawTarget::stderr(), true, self.slot.clone())
        } else {
            ProgressReporter::new(ProgressDrawTarget::hidden(), false, self.slot.clone())
        }
    }

    /// Plain line
    pub fn line(&mut self, message: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.out, "{message}")
    }

    /// Empty line
    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    /// Section heading
    pub fn heading(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", format!("═══ {message} ═══").bold().cyan())
    }

    /// Informational message (`ℹ`)
    pub fn info(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", format!("ℹ {message}").bold().blue())
    }

    /// Success message (`✓`)
    pub fn success(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", format!("✓ {message}").bold().green())
    }

    /// Error message (`✗`)
    pub fn error(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", format!("✗ {message}").bold().red())
    }

    /// De-emphasized hint
    pub fn hint(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", message.yellow().dimmed())
    }

    /// Boxed panel with a titled top border
    pub fn panel(&mut self, title: &str, lines: &[ColoredString], border: Color) -> io::Result<()> {
        let title_width = title.chars().count() + 4;
        let body_width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let inner = body_width.max(title_width) + 2;

        let top = format!("╭─ {title} {}╮", "─".repeat(inner - title_width + 1));
        writeln!(self.out, "{}", top.color(border))?;
        for line in lines {
            let pad = " ".repeat(inner - 2 - line.chars().count());
            writeln!(
                self.out,
                "{} {line}{pad} {}",
                "│".color(border),
                "│".color(border)
            )?;
        }
        writeln!(self.out, "{}", format!("╰{}╯", "─".repeat(inner)).color(border))?;
        self.out.flush()
    }
}
