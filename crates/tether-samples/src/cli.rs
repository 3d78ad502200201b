#![forbid(unsafe_code)]

//! Command-line argument parsing for the sample runner.
//!
//! Arguments are parsed by hand in `--key=value` form. `TETHER_*`
//! environment variables override defaults; explicit flags override both.

use std::env;
use std::fmt;
use std::process;
use std::str::FromStr;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable selecting the sample.
pub const SAMPLE_ENV: &str = "TETHER_SAMPLE";

pub const HELP_TEXT: &str = "\
tether samples: model-to-view change relay and sortable row lists

USAGE:
    tether-samples [OPTIONS] < commands

OPTIONS:
    --sample=NAME        Sample to run (default: binding)
    --min=N              Lower bound of the bound value (default: 0)
    --max=N              Upper bound of the bound value (default: 100)
    --initial=N          Initial bound value, clamped into range (default: 50)
    --log-filter=FILTER  tracing filter for stderr logging (default: warn)
    --help, -h           Show this help message
    --version, -V        Show version

SAMPLES:
    binding       Slider, text field, and reset button sharing one value
    list          Report list sorted by header click or 'Sort By ID'
    virtual-list  Virtual list projecting rows from the model on demand
    triangle      Triangle canvas recoloured through a colour field

COMMANDS (one per line on stdin):
    binding       drag N | step N | type TEXT | clear | back | enter | blur | reset
    list          click COL | sort-id | select ROW | remove
    virtual-list  click COL | scroll N | select ROW | edit ROW
    triangle      type HEX | pick | click
    any           help | quit

ENVIRONMENT VARIABLES:
    TETHER_SAMPLE   Override the default sample
    TETHER_LOG      Log filter when --log-filter is not given";

/// Which sample to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleKind {
    #[default]
    Binding,
    List,
    VirtualList,
    Triangle,
}

impl SampleKind {
    /// All samples.
    pub const ALL: [SampleKind; 4] = [
        Self::Binding,
        Self::List,
        Self::VirtualList,
        Self::Triangle,
    ];

    /// Command-line name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Binding => "binding",
            Self::List => "list",
            Self::VirtualList => "virtual-list",
            Self::Triangle => "triangle",
        }
    }
}

impl fmt::Display for SampleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SampleKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == lower)
            .ok_or(())
    }
}

/// Parsed options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleOptions {
    /// Sample to run.
    pub sample: SampleKind,
    /// Lower bound for the binding sample.
    pub min: i64,
    /// Upper bound for the binding sample.
    pub max: i64,
    /// Initial value for the binding sample.
    pub initial: i64,
    /// Explicit log filter.
    pub log_filter: Option<String>,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            sample: SampleKind::Binding,
            min: 0,
            max: 100,
            initial: 50,
            log_filter: None,
        }
    }
}

/// Why parsing stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// `--help` was given.
    Help,
    /// `--version` was given.
    Version,
    /// A flag had an unusable value.
    InvalidValue { flag: &'static str, value: String },
    /// `--min` is greater than `--max`.
    InvalidBounds { min: i64, max: i64 },
    /// Not a recognised argument.
    UnknownArg(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Help => write!(f, "help requested"),
            Self::Version => write!(f, "version requested"),
            Self::InvalidValue { flag, value } => write!(f, "Invalid {flag} value: {value}"),
            Self::InvalidBounds { min, max } => {
                write!(f, "Invalid bounds: --min {min} is greater than --max {max}")
            }
            Self::UnknownArg(arg) => write!(f, "Unknown argument: {arg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl SampleOptions {
    /// Parse the process arguments and environment.
    ///
    /// Prints help or version and exits 0 when asked; prints the error and
    /// exits 2 on invalid input.
    pub fn parse() -> Self {
        match Self::parse_from_env_and_args(env::args().skip(1), |key| env::var(key).ok()) {
            Ok(opts) => opts,
            Err(CliError::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Err(CliError::Version) => {
                println!("tether-samples {VERSION}");
                process::exit(0);
            }
            Err(err) => {
                eprintln!("{err}");
                eprintln!("Run with --help for usage information.");
                process::exit(2);
            }
        }
    }

    /// Parse from explicit arguments and an environment lookup.
    pub fn parse_from_env_and_args<I, S, F>(args: I, get_env: F) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        // Environment first; unusable values are ignored.
        if let Some(val) = get_env(SAMPLE_ENV)
            && let Ok(kind) = val.parse()
        {
            opts.sample = kind;
        }

        for arg in args {
            let arg = arg.as_ref();
            match arg {
                "--help" | "-h" => return Err(CliError::Help),
                "--version" | "-V" => return Err(CliError::Version),
                other => {
                    if let Some(val) = other.strip_prefix("--sample=") {
                        opts.sample = val.parse().map_err(|()| CliError::InvalidValue {
                            flag: "--sample",
                            value: val.to_string(),
                        })?;
                    } else if let Some(val) = other.strip_prefix("--min=") {
                        opts.min = parse_int("--min", val)?;
                    } else if let Some(val) = other.strip_prefix("--max=") {
                        opts.max = parse_int("--max", val)?;
                    } else if let Some(val) = other.strip_prefix("--initial=") {
                        opts.initial = parse_int("--initial", val)?;
                    } else if let Some(val) = other.strip_prefix("--log-filter=") {
                        if val.trim().is_empty() {
                            return Err(CliError::InvalidValue {
                                flag: "--log-filter",
                                value: val.to_string(),
                            });
                        }
                        opts.log_filter = Some(val.to_string());
                    } else {
                        return Err(CliError::UnknownArg(other.to_string()));
                    }
                }
            }
        }

        if opts.min > opts.max {
            return Err(CliError::InvalidBounds {
                min: opts.min,
                max: opts.max,
            });
        }
        Ok(opts)
    }
}

fn parse_int(flag: &'static str, val: &str) -> Result<i64, CliError> {
    val.trim().parse().map_err(|_| CliError::InvalidValue {
        flag,
        value: val.to_string(),
    })
}
