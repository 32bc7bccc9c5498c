use clap::Parser;
use std::io::Write;

use crate::now;
use crate::Result;

use super::VERSION;

#[derive(Parser, Debug)]
#[command(name = "now")]
#[command(version = VERSION)]
#[command(about = "Print the current UTC time as YYYYMMDDhhmmss")]
pub struct NowArgs {}

pub fn run<W: Write + ?Sized>(_args: NowArgs, out: &mut W) -> Result<()> {
    now::write_now(out)
}
