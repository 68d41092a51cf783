//! Runtime settings and command-line options
//!
//! [`Settings`] is the configuration surface the engines and renderer see:
//! array size, per-step delay and the selected algorithm. All setters clamp,
//! so engines never observe an out-of-range value.
//!
//! [`Options`] adds the launch-only flags parsed from the command line.

use crate::algorithms::Algorithm;
use crate::errors::ConfigError;
use std::path::PathBuf;
use std::time::Duration;

pub const MIN_SIZE: usize = 10;
pub const MAX_SIZE: usize = 300;
pub const DEFAULT_SIZE: usize = 100;
/// Size change per resize command
pub const SIZE_STEP: i32 = 10;

pub const MAX_DELAY_MS: u64 = 200;
pub const DEFAULT_DELAY_MS: u64 = 10;
/// Delay change per speed command
pub const DELAY_STEP_MS: i32 = 5;

/// Configuration visible to the engines and the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    size: usize,
    delay_ms: u64,
    pub algorithm: Algorithm,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            size: DEFAULT_SIZE,
            delay_ms: DEFAULT_DELAY_MS,
            algorithm: Algorithm::Bubble,
        }
    }
}

impl Settings {
    pub fn new(size: usize, delay_ms: u64, algorithm: Algorithm) -> Self {
        let mut settings = Settings {
            size: DEFAULT_SIZE,
            delay_ms: DEFAULT_DELAY_MS,
            algorithm,
        };
        settings.set_size(size);
        settings.set_delay_ms(delay_ms);
        settings
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn set_size(&mut self, size: usize) {
        self.size = size.clamp(MIN_SIZE, MAX_SIZE);
    }

    pub fn set_delay_ms(&mut self, delay_ms: u64) {
        self.delay_ms = delay_ms.min(MAX_DELAY_MS);
    }

    /// Apply a signed size change, returning the clamped result
    pub fn adjust_size(&mut self, delta: i32) -> usize {
        let target = (self.size as i64 + delta as i64).max(0) as usize;
        self.set_size(target);
        self.size
    }

    /// Apply a signed delay change, returning the clamped result
    pub fn adjust_delay(&mut self, delta: i32) -> u64 {
        let target = (self.delay_ms as i64 + delta as i64).max(0) as u64;
        self.set_delay_ms(target);
        self.delay_ms
    }
}

/// Everything the binary is launched with
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    pub settings: Settings,
    /// Shuffle seed; taken from the clock when absent
    pub seed: Option<u64>,
    /// Tracing output file
    pub log_file: Option<PathBuf>,
    /// Run once without a terminal UI and print a summary
    pub headless: bool,
    pub show_help: bool,
}

impl Options {
    /// Parse arguments, excluding the program name
    pub fn parse<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut options = Options::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => options.show_help = true,
                "--headless" => options.headless = true,
                "-n" | "--size" => {
                    let value = take_value(&arg, &mut args)?;
                    options.settings.set_size(parse_number(&arg, &value)? as usize);
                }
                "-d" | "--delay" => {
                    let value = take_value(&arg, &mut args)?;
                    options.settings.set_delay_ms(parse_number(&arg, &value)?);
                }
                "-a" | "--algo" => {
                    let value = take_value(&arg, &mut args)?;
                    options.settings.algorithm = value
                        .parse()
                        .map_err(|_| ConfigError::UnknownAlgorithm(value))?;
                }
                "--seed" => {
                    let value = take_value(&arg, &mut args)?;
                    options.seed = Some(parse_number(&arg, &value)?);
                }
                "--log" => {
                    options.log_file = Some(PathBuf::from(take_value(&arg, &mut args)?));
                }
                _ => return Err(ConfigError::UnknownFlag(arg)),
            }
        }

        Ok(options)
    }
}

fn take_value(flag: &str, args: &mut impl Iterator<Item = String>) -> Result<String, ConfigError> {
    args.next()
        .ok_or_else(|| ConfigError::MissingValue(flag.to_string()))
}

fn parse_number(flag: &str, value: &str) -> Result<u64, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidNumber {
        flag: flag.to_string(),
        value: value.to_string(),
    })
}

/// Usage text shown for `--help` and after argument errors
pub fn usage(program_name: &str) -> String {
    format!(
        "Usage: {program_name} [options]\n\
         \n\
         Options:\n\
         \x20 -n, --size N       number of bars ({MIN_SIZE}-{MAX_SIZE}, default {DEFAULT_SIZE})\n\
         \x20 -d, --delay MS     pause per step in ms (0-{MAX_DELAY_MS}, default {DEFAULT_DELAY_MS})\n\
         \x20 -a, --algo NAME    bubble | insertion | selection | merge | quick\n\
         \x20     --seed N       shuffle seed for reproducible runs\n\
         \x20     --log FILE     write trace output to FILE (filter with SORTTY_LOG)\n\
         \x20     --headless     sort once without the UI and print the counters\n\
         \x20 -h, --help         show this message"
    )
}
