use std::io;
use std::process::ExitCode;

use shellbits::commands::{self, now::NowArgs};

fn main() -> ExitCode {
    commands::finish(run())
}

fn run() -> shellbits::Result<()> {
    let args: NowArgs = commands::parse_args()?;
    commands::now::run(args, &mut io::stdout().lock())
}
