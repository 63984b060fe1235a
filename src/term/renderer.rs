//! Terminal session handling and span flushing.
//!
//! Raw mode plus alternate screen for the lifetime of the game; every frame
//! is a full redraw, which is plenty for a board this size.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::term::view::Span;

pub struct TerminalRenderer {
    stdout: io::Stdout,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    pub fn draw(&mut self, lines: &[Vec<Span>]) -> Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;

        for (y, line) in lines.iter().enumerate() {
            self.stdout.queue(cursor::MoveTo(0, y as u16))?;
            for span in line {
                self.apply_style(span)?;
                self.stdout.queue(Print(&span.text))?;
                self.stdout.queue(SetAttribute(Attribute::Reset))?;
                self.stdout.queue(ResetColor)?;
            }
        }

        self.stdout.flush()?;
        Ok(())
    }

    fn apply_style(&mut self, span: &Span) -> Result<()> {
        if let Some(fg) = span.fg {
            self.stdout.queue(SetForegroundColor(fg))?;
        }
        if span.bold {
            self.stdout.queue(SetAttribute(Attribute::Bold))?;
        }
        if span.reversed {
            self.stdout.queue(SetAttribute(Attribute::Reverse))?;
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}
