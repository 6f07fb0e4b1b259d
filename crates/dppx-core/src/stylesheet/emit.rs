use crate::stylesheet::breakpoint::BreakpointSet;
use crate::stylesheet::rule::MediaRule;
use log::trace;
use std::io::{self, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("Failed to write stylesheet: {0}")]
    Io(#[from] io::Error),
}

/// Writes media rules to any [`Write`] sink, one block per line group.
pub struct Emitter<W: Write> {
    out: W,
    rules_written: usize,
}

impl<W: Write> Emitter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            rules_written: 0,
        }
    }

    pub fn emit_rule(&mut self, rule: &MediaRule) -> Result<(), EmitError> {
        writeln!(self.out, "{rule}")?;
        self.rules_written += 1;
        trace!(
            "Emitted rule #{} ({:?}, ratio {})",
            self.rules_written,
            rule.kind(),
            rule.ratio()
        );
        Ok(())
    }

    /// Emits one rule per breakpoint, in set order. Returns how many were written.
    pub fn emit_all(&mut self, breakpoints: &BreakpointSet) -> Result<usize, EmitError> {
        let before = self.rules_written;
        for breakpoint in breakpoints {
            self.emit_rule(&MediaRule::for_breakpoint(breakpoint))?;
        }
        Ok(self.rules_written - before)
    }

    pub fn flush(&mut self) -> Result<(), EmitError> {
        self.out.flush()?;
        Ok(())
    }

    pub fn rules_written(&self) -> usize {
        self.rules_written
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Renders the whole stylesheet for `breakpoints` into a `String`.
pub fn render_stylesheet(breakpoints: &BreakpointSet) -> String {
    use std::fmt::Write as _;

    let mut css = String::new();
    for breakpoint in breakpoints {
        // Writing into a String can't fail
        let _ = writeln!(css, "{}", MediaRule::for_breakpoint(breakpoint));
    }
    css
}
