//! Command-line layer shared by the binaries.
//!
//! Each tool has an argument struct and a `run` function here; the binaries
//! only parse, run, and hand the result to [`finish`].

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::Parser;
use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use crate::error::{Error, ErrorCode, Result};

pub mod abspath;
pub mod now;
pub mod rnd;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parse the process arguments.
///
/// Help and version requests print and exit here. Every other clap error
/// becomes a validation error so all tools report failures the same way.
pub fn parse_args<P: Parser>() -> Result<P> {
    parse_args_from(std::env::args_os())
}

pub fn parse_args_from<P, I, T>(args: I) -> Result<P>
where
    P: Parser,
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    P::try_parse_from(args).map_err(|e| match e.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => e.exit(),
        _ => from_clap(&e),
    })
}

fn from_clap(err: &clap::Error) -> Error {
    if err.kind() == ErrorKind::UnknownArgument {
        if let Some(ContextValue::String(arg)) = err.get(ContextKind::InvalidArg) {
            return Error::validation_unexpected_argument(arg.clone());
        }
    }

    let rendered = err.render().to_string();
    let problem = rendered
        .lines()
        .next()
        .unwrap_or_default()
        .trim_start_matches("error: ")
        .to_string();
    Error::validation_invalid_argument("args", problem, None)
}

/// Report the outcome at the process boundary.
///
/// Errors print `ERROR: <message>` and their hints to stderr and exit 1. A
/// closed stdout exits 1 without a diagnostic.
pub fn finish(result: Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if err.code != ErrorCode::OutputClosed {
                report(&err);
            }
            ExitCode::FAILURE
        }
    }
}

fn report(err: &Error) {
    let stderr = io::stderr();
    let mut handle = stderr.lock();
    let _ = writeln!(handle, "ERROR: {}", err);
    for hint in &err.hints {
        let _ = writeln!(handle, "{}", hint.message);
    }
}
