//! Clipboard access.
//!
//! The session only sees [`ClipboardWriter`]; [`SystemClipboard`] is the
//! platform implementation backed by the `clipboard` crate.

use clipboard::{ClipboardContext, ClipboardProvider};

use crate::error::ClipboardError;

/// Something that can receive a password.
pub trait ClipboardWriter {
    fn set(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The system clipboard.
///
/// The platform context is opened on the first [`set`](ClipboardWriter::set)
/// call, so sessions that never copy never touch the display server.
#[derive(Default)]
pub struct SystemClipboard {
    ctx: Option<ClipboardContext>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn context(&mut self) -> Result<&mut ClipboardContext, ClipboardError> {
        if self.ctx.is_none() {
            let ctx: ClipboardContext = ClipboardProvider::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.ctx = Some(ctx);
        }
        self.ctx
            .as_mut()
            .ok_or_else(|| ClipboardError::Unavailable("no clipboard context".into()))
    }
}

impl ClipboardWriter for SystemClipboard {
    fn set(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.context()?
            .set_contents(text.to_string())
            .map_err(|e| ClipboardError::Write(e.to_string()))?;
        tracing::debug!(chars = text.chars().count(), "clipboard updated");
        Ok(())
    }
}
