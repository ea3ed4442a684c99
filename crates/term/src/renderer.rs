//! TerminalRenderer: flushes a frame to a real terminal.
//!
//! Each frame is encoded into an internal byte buffer as a batch of
//! crossterm commands and flushed with a single write, so the terminal never
//! sees a half-drawn frame.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::Print,
    terminal::{self, ClearType},
    QueueableCommand,
};

use crate::core::Frame;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Take over the terminal: raw mode, alternate screen, hidden cursor.
    ///
    /// When this fails (no tty, raw mode unsupported) the caller should fall
    /// back to plain sequential printing instead of aborting.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    /// Restore the terminal state set up by [`enter`](Self::enter).
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw a full frame, overwriting the previous one in place.
    pub fn draw(&mut self, frame: &Frame, clear_each_frame: bool) -> Result<()> {
        self.buf.clear();
        encode_frame_into(frame, clear_each_frame, &mut self.buf)?;
        self.flush_buf()?;
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a full-frame redraw into `out`.
///
/// The cursor is homed first so successive frames overwrite in place; the
/// optional full clear guards against leftover cells on terminals that drop
/// the home sequence. Rows are emitted top to bottom with each row's
/// characters joined by a single space.
pub fn encode_frame_into(frame: &Frame, clear_each_frame: bool, out: &mut Vec<u8>) -> Result<()> {
    if clear_each_frame {
        out.queue(terminal::Clear(ClearType::All))?;
    }
    out.queue(cursor::MoveTo(0, 0))?;

    let mut text = String::with_capacity(frame.size() * 2);
    for (y, row) in frame.rows().enumerate() {
        text.clear();
        join_row(row, &mut text);
        out.queue(Print(&text))?;
        if y + 1 < frame.size() {
            out.queue(Print("\r\n"))?;
        }
    }
    Ok(())
}

/// Append `row` to `text` with a single space between characters.
pub(crate) fn join_row(row: &[char], text: &mut String) {
    for (i, &ch) in row.iter().enumerate() {
        if i > 0 {
            text.push(' ');
        }
        text.push(ch);
    }
}
