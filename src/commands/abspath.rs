use clap::Parser;
use std::ffi::OsString;
use std::io::{self, Write};

use crate::abspath::{self, Resolver};
use crate::Result;

use super::VERSION;

#[derive(Parser, Debug)]
#[command(name = "abspath")]
#[command(version = VERSION)]
#[command(about = "Print the lexical absolute form of each path")]
pub struct AbspathArgs {
    /// Paths to resolve. Read one per line from stdin when none are given
    #[arg(allow_hyphen_values = true)]
    pub paths: Vec<OsString>,
}

/// Stream every input path to `out`, returning the number of lines written.
pub fn run<W: Write + ?Sized>(args: AbspathArgs, out: &mut W) -> Result<usize> {
    let records = if args.paths.is_empty() {
        abspath::stream(|| abspath::line_records(io::stdin().lock()))?
    } else {
        let paths = args.paths;
        abspath::stream(move || abspath::arg_records(paths))?
    };

    abspath::write_resolved(records, &mut Resolver::new(), out)
}
