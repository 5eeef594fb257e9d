/// TERMINATOR - Terminal Cube Viewer
///
/// Draws the eight corners of a cube to a 60x60 character grid and waits for
/// one key per frame.
/// Controls:
///   - a/d: Pan right/left
///   - space/q: Raise/lower
///   - w/s: Move closer/further
///   - l/j, i/k: Turn and tilt
use anyhow::Result;
use std::io::{self, BufWriter};
use terminator_terminal::{
    logging::init_logging, AppConfig, CliAction, FramePrinter, InputMode, LineKeys, RawKeys,
    TerminalApp, USAGE,
};

fn main() -> Result<()> {
    let config = match AppConfig::from_args(std::env::args().skip(1))? {
        CliAction::Run(config) => config,
        CliAction::Help => {
            print!("{USAGE}");
            return Ok(());
        }
    };

    init_logging(config.logging.clone());
    log::info!(
        "starting with {:?} input, clear screen: {}",
        config.input,
        config.clear_screen
    );

    let out = BufWriter::new(io::stdout());
    let printer = FramePrinter::new(config.clear_screen);

    match config.input {
        InputMode::Line => TerminalApp::new(LineKeys::stdin(), out, printer).run(),
        InputMode::Raw => {
            // Dropping the key source restores the terminal, also on error
            let keys = RawKeys::new()?;
            TerminalApp::new(keys, out, printer.for_raw_mode()).run()
        }
    }
}
