/// Frame output for terminal rendering
use crossterm::{
    cursor,
    style::Print,
    terminal::{Clear, ClearType},
    QueueableCommand,
};
use std::io::Write;
use terminator_core::FrameBuffer;

/// Writes whole frames to a terminal or any other sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePrinter {
    clear_screen: bool,
    line_ending: &'static str,
}

impl FramePrinter {
    /// `clear_screen` clears and homes the cursor before each frame; otherwise
    /// frames are appended one after another.
    pub fn new(clear_screen: bool) -> Self {
        Self {
            clear_screen,
            line_ending: "\n",
        }
    }

    /// Raw mode does not translate `\n`, so rows need an explicit carriage
    /// return to start at column 0.
    pub fn for_raw_mode(mut self) -> Self {
        self.line_ending = "\r\n";
        self
    }

    pub fn line_ending(&self) -> &'static str {
        self.line_ending
    }

    /// Print every row top to bottom, each row left to right, then flush.
    pub fn draw<W: Write>(&self, frame: &FrameBuffer, writer: &mut W) -> std::io::Result<()> {
        if self.clear_screen {
            writer.queue(Clear(ClearType::All))?;
            writer.queue(cursor::MoveTo(0, 0))?;
        }

        let mut line = String::with_capacity(terminator_core::WIDTH + 2);
        for row in frame.rows() {
            line.clear();
            line.extend(row.iter());
            line.push_str(self.line_ending);
            writer.queue(Print(&line))?;
        }

        writer.flush()
    }
}

impl Default for FramePrinter {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use terminator_core::{HEIGHT, MARKER, WIDTH};

    fn draw_to_string(printer: FramePrinter, frame: &FrameBuffer) -> String {
        let mut out = Vec::new();
        printer.draw(frame, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_blank_frame_layout() {
        let text = draw_to_string(FramePrinter::default(), &FrameBuffer::new());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), HEIGHT);
        assert!(lines.iter().all(|l| l.len() == WIDTH && l.trim().is_empty()));
        assert!(text.ends_with('\n'));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn test_rows_then_columns() {
        let mut frame = FrameBuffer::new();
        frame.set(5, 2, MARKER);
        let text = draw_to_string(FramePrinter::default(), &frame);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[2].find(MARKER), Some(5));
        assert!(lines[5].trim().is_empty());
    }

    #[test]
    fn test_clear_screen_prefix() {
        let text = draw_to_string(FramePrinter::new(true), &FrameBuffer::new());
        assert!(text.starts_with("\x1b[2J"));
    }

    #[test]
    fn test_raw_mode_line_endings() {
        let printer = FramePrinter::default().for_raw_mode();
        assert_eq!(printer.line_ending(), "\r\n");
        let text = draw_to_string(printer, &FrameBuffer::new());
        assert_eq!(text.matches("\r\n").count(), HEIGHT);
    }
}
