use std::io;
use std::process::ExitCode;

use shellbits::commands::{self, rnd::RndArgs};

fn main() -> ExitCode {
    commands::finish(run())
}

fn run() -> shellbits::Result<()> {
    let args: RndArgs = commands::parse_args()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    commands::rnd::run(args, &mut out)
}
