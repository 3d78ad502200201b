#![forbid(unsafe_code)]

//! Line-command host loop.
//!
//! Reads one command per line, hands it to the active [`Sample`], and
//! writes the sample's view after every command that was handled. Blank
//! lines and lines starting with `#` are skipped, so command scripts can be
//! commented.
//!
//! # Output
//!
//! ```text
//! <initial view>
//!
//! > drag 70
//! <view after the command>
//! ```
//!
//! A command the sample rejects prints `error: ...` instead of a view, as
//! does a line that is not valid UTF-8. The loop never stops on a bad
//! command; only `quit`, end of input, or an I/O error end it.

use std::fmt;
use std::io::{self, BufRead, Write};

use tether_core::event::InputEvent;
use tether_runtime::program::{Model, Program};
use tracing::{debug, warn};

/// A command line the sample could not act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The verb is not known to this sample.
    Unknown(String),
    /// The verb needs an argument.
    MissingArgument { command: String, expected: &'static str },
    /// The argument did not parse.
    BadArgument { command: String, value: String },
    /// The argument parsed but names nothing (row or column out of range).
    NoSuchTarget { command: String, value: String },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(verb) => write!(f, "unknown command {verb:?} (try 'help')"),
            Self::MissingArgument { command, expected } => {
                write!(f, "{command}: expected {expected}")
            }
            Self::BadArgument { command, value } => write!(f, "{command}: cannot parse {value:?}"),
            Self::NoSuchTarget { command, value } => write!(f, "{command}: no such target {value}"),
        }
    }
}

impl std::error::Error for CommandError {}

/// One runnable sample.
pub trait Sample {
    /// Sample name as used on the command line.
    fn name(&self) -> &'static str;

    /// One-line summary of accepted commands.
    fn usage(&self) -> &'static str;

    /// Apply one command. `arg` is the remainder of the line, trimmed.
    fn execute(&mut self, verb: &str, arg: &str) -> Result<(), CommandError>;

    /// Current rendering.
    fn view(&self) -> String;

    /// Whether the sample still accepts commands.
    fn is_running(&self) -> bool;

    /// Stop accepting commands.
    fn quit(&mut self);
}

/// Split a command line into verb and trimmed argument.
#[must_use]
pub fn split_command(line: &str) -> (&str, &str) {
    let line = line.trim();
    match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    }
}

/// Parse an integer argument.
pub fn int_arg(command: &str, arg: &str) -> Result<i64, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingArgument {
            command: command.to_string(),
            expected: "an integer",
        });
    }
    arg.parse().map_err(|_| CommandError::BadArgument {
        command: command.to_string(),
        value: arg.to_string(),
    })
}

/// Parse a zero-based index argument.
pub fn index_arg(command: &str, arg: &str) -> Result<usize, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingArgument {
            command: command.to_string(),
            expected: "a row or column number",
        });
    }
    arg.parse().map_err(|_| CommandError::BadArgument {
        command: command.to_string(),
        value: arg.to_string(),
    })
}

/// Error for an index that named no row or column.
#[must_use]
pub fn no_such_target(command: &str, index: usize) -> CommandError {
    CommandError::NoSuchTarget {
        command: command.to_string(),
        value: index.to_string(),
    }
}

/// Error for an unknown verb.
#[must_use]
pub fn unknown(verb: &str) -> CommandError {
    CommandError::Unknown(verb.to_string())
}

/// Feed a widget event (if any) into the program and drain the queue.
pub fn feed<M: Model>(program: &mut Program<M>, event: Option<InputEvent>) {
    if let Some(event) = event {
        program.input(event);
    }
    let handled = program.run_until_idle();
    debug!(handled, pending = program.pending(), "queue drained");
}

/// Drive `sample` from `input`, writing views to `output`.
///
/// Returns the number of commands handled successfully.
pub fn run<S, R, W>(sample: &mut S, mut input: R, mut output: W) -> io::Result<usize>
where
    S: Sample + ?Sized,
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", sample.view())?;
    let mut handled = 0usize;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = match std::str::from_utf8(&buf) {
            Ok(text) => text.trim(),
            Err(_) => {
                let shown = String::from_utf8_lossy(&buf);
                warn!(sample = sample.name(), "skipping line that is not UTF-8");
                writeln!(output)?;
                writeln!(output, "> {}", shown.trim())?;
                writeln!(output, "error: line is not valid UTF-8")?;
                continue;
            }
        };
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (verb, arg) = split_command(line);
        match verb {
            "quit" | "exit" => {
                sample.quit();
                break;
            }
            "help" => {
                writeln!(output, "{}", sample.usage())?;
                continue;
            }
            _ => {}
        }

        writeln!(output)?;
        writeln!(output, "> {line}")?;
        match sample.execute(verb, arg) {
            Ok(()) => {
                handled += 1;
                writeln!(output, "{}", sample.view())?;
            }
            Err(err) => {
                warn!(sample = sample.name(), error = %err, "command rejected");
                writeln!(output, "error: {err}")?;
            }
        }
        if !sample.is_running() {
            break;
        }
    }
    output.flush()?;
    Ok(handled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Echo {
        seen: Vec<String>,
        stopped: bool,
    }

    impl Sample for Echo {
        fn name(&self) -> &'static str {
            "echo"
        }

        fn usage(&self) -> &'static str {
            "say WORD"
        }

        fn execute(&mut self, verb: &str, arg: &str) -> Result<(), CommandError> {
            match verb {
                "say" => {
                    self.seen.push(arg.to_string());
                    Ok(())
                }
                "stop" => {
                    self.stopped = true;
                    Ok(())
                }
                other => Err(unknown(other)),
            }
        }

        fn view(&self) -> String {
            format!("seen: {}", self.seen.join(","))
        }

        fn is_running(&self) -> bool {
            !self.stopped
        }

        fn quit(&mut self) {
            self.stopped = true;
        }
    }

    fn drive(script: &str) -> (Echo, String, usize) {
        let mut echo = Echo::default();
        let mut out = Vec::new();
        let n = run(&mut echo, script.as_bytes(), &mut out).unwrap();
        (echo, String::from_utf8(out).unwrap(), n)
    }

    #[test]
    fn split_verb_and_argument() {
        assert_eq!(split_command("drag 70"), ("drag", "70"));
        assert_eq!(split_command("  type  hello world "), ("type", "hello world"));
        assert_eq!(split_command("reset"), ("reset", ""));
    }

    #[test]
    fn argument_parsing() {
        assert_eq!(int_arg("drag", "-3"), Ok(-3));
        assert!(matches!(
            int_arg("drag", ""),
            Err(CommandError::MissingArgument { .. })
        ));
        assert!(matches!(
            index_arg("select", "-1"),
            Err(CommandError::BadArgument { .. })
        ));
    }

    #[test]
    fn transcript_shape() {
        let (_, out, n) = drive("say a\n\n# comment\nsay b\n");
        assert_eq!(n, 2);
        assert_eq!(out, "seen: \n\n> say a\nseen: a\n\n> say b\nseen: a,b\n");
    }

    #[test]
    fn bad_command_reports_and_continues() {
        let (echo, out, n) = drive("jump\nsay x\n");
        assert_eq!(n, 1);
        assert!(out.contains("error: unknown command \"jump\""));
        assert_eq!(echo.seen, vec!["x"]);
    }

    #[test]
    fn invalid_utf8_line_reports_and_continues() {
        let mut echo = Echo::default();
        let mut out = Vec::new();
        let n = run(&mut echo, &b"say a\nsay \xff\nsay b\n"[..], &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(n, 2);
        assert_eq!(echo.seen, vec!["a", "b"]);
        assert!(out.contains("> say \u{fffd}\nerror: line is not valid UTF-8\n"));
    }

    #[test]
    fn last_line_without_newline_runs() {
        let (echo, _, n) = drive("say a\nsay b");
        assert_eq!(n, 2);
        assert_eq!(echo.seen, vec!["a", "b"]);
    }

    #[test]
    fn quit_stops_reading() {
        let (echo, _, _) = drive("say a\nquit\nsay b\n");
        assert_eq!(echo.seen, vec!["a"]);
        assert!(echo.stopped);
    }

    #[test]
    fn sample_stopping_itself_ends_loop() {
        let (echo, _, n) = drive("stop\nsay a\n");
        assert_eq!(n, 1);
        assert!(echo.seen.is_empty());
    }

    #[test]
    fn help_prints_usage_without_view() {
        let (_, out, n) = drive("help\n");
        assert_eq!(n, 0);
        assert_eq!(out, "seen: \nsay WORD\n");
    }
}
