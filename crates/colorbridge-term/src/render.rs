use std::io::{Result, Write};

use colorbridge::{ColorState, Update};

use crate::cmd::{DynSetBackground24, ResetStyle};

/// The width of the color swatch in columns.
const SWATCH_WIDTH: usize = 6;

/// A renderer for color states and update notices.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Renderer {
    color: bool,
}

impl Renderer {
    /// Create a new renderer, which includes a 24-bit color swatch if `color`
    /// is true.
    pub(crate) fn new(color: bool) -> Self {
        Self { color }
    }

    /// Write the color state as a single line.
    pub(crate) fn state<W: Write + ?Sized>(&self, out: &mut W, state: &ColorState) -> Result<()> {
        if self.color {
            write!(
                out,
                "{}{:width$}{} ",
                DynSetBackground24::from(state.rgb),
                "",
                ResetStyle,
                width = SWATCH_WIDTH
            )?;
        }
        writeln!(out, "{}", state)
    }

    /// Write the update, followed by its notice, if any.
    pub(crate) fn update<W: Write + ?Sized>(&self, out: &mut W, update: &Update) -> Result<()> {
        self.state(out, &update.state)?;
        if let Some(notice) = update.notice() {
            writeln!(out, "note: {}", notice)?;
        }
        Ok(())
    }
}
