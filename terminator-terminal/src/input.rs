//! Key sources and key-to-command mapping.
//!
//! Every source blocks until exactly one key is available. The render loop
//! consumes one key per frame.

use std::io::{self, Read};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use terminator_core::CameraCommand;

/// One key read from a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keystroke {
    Char(char),
    /// A key with no character (arrows, function keys, ...).
    Other,
}

impl Keystroke {
    pub fn command(self) -> Option<CameraCommand> {
        match self {
            Keystroke::Char(c) => command_for_key(c),
            Keystroke::Other => None,
        }
    }
}

/// Map a key to its camera command. Keys are case-sensitive.
pub fn command_for_key(key: char) -> Option<CameraCommand> {
    match key {
        'd' => Some(CameraCommand::PanLeft),
        'a' => Some(CameraCommand::PanRight),
        ' ' => Some(CameraCommand::Raise),
        'q' => Some(CameraCommand::Lower),
        'w' => Some(CameraCommand::Advance),
        's' => Some(CameraCommand::Retreat),
        'l' => Some(CameraCommand::TurnRight),
        'j' => Some(CameraCommand::TurnLeft),
        'i' => Some(CameraCommand::TiltUp),
        'k' => Some(CameraCommand::TiltDown),
        _ => None,
    }
}

/// A blocking source of keys.
pub trait KeySource {
    /// Wait for the next key. `Ok(None)` means input has ended.
    fn next_key(&mut self) -> Result<Option<Keystroke>>;
}

/// Reads one byte per key from a line-buffered reader such as stdin.
///
/// Every byte counts, including the newline typed after a key.
pub struct LineKeys<R> {
    reader: R,
}

impl<R: Read> LineKeys<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl LineKeys<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: Read> KeySource for LineKeys<R> {
    fn next_key(&mut self) -> Result<Option<Keystroke>> {
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(Keystroke::Char(char::from(byte[0])))),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e).context("failed to read key from stdin"),
            }
        }
    }
}

/// Outcome of translating a terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawEvent {
    Key(Keystroke),
    /// Ctrl-C. Raw mode swallows SIGINT, so this ends input instead.
    Interrupt,
    /// Not a key press (release, resize, mouse, focus, ...).
    Ignored,
}

/// Translate a crossterm event into a key for the render loop.
pub fn translate_event(event: Event) -> RawEvent {
    let Event::Key(KeyEvent {
        code,
        modifiers,
        kind,
        ..
    }) = event
    else {
        return RawEvent::Ignored;
    };

    if kind == KeyEventKind::Release {
        return RawEvent::Ignored;
    }

    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => RawEvent::Interrupt,
        KeyCode::Char(c) => RawEvent::Key(Keystroke::Char(c)),
        KeyCode::Enter => RawEvent::Key(Keystroke::Char('\n')),
        KeyCode::Tab => RawEvent::Key(Keystroke::Char('\t')),
        _ => RawEvent::Key(Keystroke::Other),
    }
}

/// Reads single key presses with the terminal in raw mode.
///
/// Raw mode is enabled on construction and restored on drop.
pub struct RawKeys {
    _private: (),
}

impl RawKeys {
    pub fn new() -> Result<Self> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        log::debug!("raw mode enabled");
        Ok(Self { _private: () })
    }
}

impl Drop for RawKeys {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            log::error!("failed to restore terminal mode: {e}");
        }
    }
}

impl KeySource for RawKeys {
    fn next_key(&mut self) -> Result<Option<Keystroke>> {
        loop {
            let event = event::read().context("failed to read terminal event")?;
            match translate_event(event) {
                RawEvent::Key(key) => return Ok(Some(key)),
                RawEvent::Interrupt => return Ok(None),
                RawEvent::Ignored => continue,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_key_table() {
        let table = [
            ('d', CameraCommand::PanLeft),
            ('a', CameraCommand::PanRight),
            (' ', CameraCommand::Raise),
            ('q', CameraCommand::Lower),
            ('w', CameraCommand::Advance),
            ('s', CameraCommand::Retreat),
            ('l', CameraCommand::TurnRight),
            ('j', CameraCommand::TurnLeft),
            ('i', CameraCommand::TiltUp),
            ('k', CameraCommand::TiltDown),
        ];
        for (key, command) in table {
            assert_eq!(command_for_key(key), Some(command), "key {key:?}");
        }
    }

    #[test]
    fn test_unmapped_keys() {
        for key in ['z', 'D', 'L', '\n', '\0', 'x', 'é'] {
            assert_eq!(command_for_key(key), None, "key {key:?}");
        }
        assert_eq!(Keystroke::Other.command(), None);
    }

    #[test]
    fn test_line_keys_reads_every_byte() {
        let mut keys = LineKeys::new(Cursor::new(b"l\nz".to_vec()));
        assert_eq!(keys.next_key().unwrap(), Some(Keystroke::Char('l')));
        assert_eq!(keys.next_key().unwrap(), Some(Keystroke::Char('\n')));
        assert_eq!(keys.next_key().unwrap(), Some(Keystroke::Char('z')));
        assert_eq!(keys.next_key().unwrap(), None);
        assert_eq!(keys.next_key().unwrap(), None);
    }

    #[test]
    fn test_translate_events() {
        assert_eq!(
            translate_event(Event::Key(KeyEvent::from(KeyCode::Char('w')))),
            RawEvent::Key(Keystroke::Char('w'))
        );
        assert_eq!(
            translate_event(Event::Key(KeyEvent::from(KeyCode::Left))),
            RawEvent::Key(Keystroke::Other)
        );
        assert_eq!(
            translate_event(Event::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL
            ))),
            RawEvent::Interrupt
        );
        assert_eq!(translate_event(Event::Resize(80, 24)), RawEvent::Ignored);
        assert_eq!(translate_event(Event::FocusGained), RawEvent::Ignored);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let release = KeyEvent::new_with_kind(
            KeyCode::Char('l'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        );
        assert_eq!(translate_event(Event::Key(release)), RawEvent::Ignored);
    }
}
