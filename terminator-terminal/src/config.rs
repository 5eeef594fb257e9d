/// Command-line configuration for the terminal viewer
use anyhow::{bail, Context, Result};

use crate::logging::LoggingConfig;

pub const USAGE: &str = "\
Usage: terminator [OPTIONS]

Renders a cube's eight corners to a 60x60 character grid and reads one key per frame.

Keys:
  a / d      pan right / left
  space / q  raise / lower
  w / s      move closer / further
  l / j      turn right / left
  i / k      tilt up / down

Options:
  --raw            read single key presses without Enter (Ctrl-C quits)
  --clear          clear the screen before each frame
  --log <FILTER>   log filter for stderr (default: RUST_LOG, then \"warn\")
  -h, --help       print this help
";

/// How keys are read from the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Buffered stdin, one byte per frame. Keys arrive after Enter.
    #[default]
    Line,
    /// crossterm raw mode, one key press per frame.
    Raw,
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub input: InputMode,
    /// Clear the screen before each frame instead of appending.
    pub clear_screen: bool,
    pub logging: LoggingConfig,
}

/// What the command line asked for.
#[derive(Debug, Clone)]
pub enum CliAction {
    Run(AppConfig),
    Help,
}

impl AppConfig {
    /// Parse arguments, excluding the program name.
    pub fn from_args<I>(args: I) -> Result<CliAction>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = AppConfig::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Ok(CliAction::Help),
                "--raw" => config.input = InputMode::Raw,
                "--clear" => config.clear_screen = true,
                "--log" => {
                    let filter = args.next().context("--log requires a filter value")?;
                    config.logging.env_filter = Some(filter);
                }
                other => match other.strip_prefix("--log=") {
                    Some(filter) => config.logging.env_filter = Some(filter.to_string()),
                    None => bail!("unrecognized argument '{other}'\n\n{USAGE}"),
                },
            }
        }

        Ok(CliAction::Run(config))
    }
}
