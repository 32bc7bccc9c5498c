use std::io;
use std::process::ExitCode;

use shellbits::commands::{self, abspath::AbspathArgs};

fn main() -> ExitCode {
    commands::finish(run())
}

fn run() -> shellbits::Result<()> {
    let args: AbspathArgs = commands::parse_args()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    commands::abspath::run(args, &mut out).map(|_| ())
}
