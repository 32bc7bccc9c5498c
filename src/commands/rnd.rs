use clap::{ArgGroup, Parser};
use std::io::Write;

use crate::rnd::{self, Generate, DEFAULT_COUNT, DEFAULT_LENGTH};
use crate::utils::io;
use crate::Result;

use super::VERSION;

#[derive(Parser, Debug)]
#[command(name = "rnd")]
#[command(version = VERSION)]
#[command(about = "Print a random token drawn from 23456789abcdefghjkmnpqrstvwxyz")]
#[command(group(
    ArgGroup::new("kind")
        .multiple(false)
        .args(["int32", "uint32", "int64", "uint64"])
))]
pub struct RndArgs {
    /// Number of characters in the token (default: 10)
    #[arg(value_name = "LENGTH", allow_negative_numbers = true, conflicts_with = "kind")]
    pub length: Option<String>,

    /// Number of values to print, one per line
    #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT)]
    pub count: usize,

    /// Make the first character of each token a letter
    #[arg(long, conflicts_with = "kind")]
    pub first_char_alpha: bool,

    /// Print a random 32-bit signed integer instead of a token
    #[arg(long, visible_alias = "i32")]
    pub int32: bool,

    /// Print a random 32-bit unsigned integer instead of a token
    #[arg(long, visible_alias = "u32")]
    pub uint32: bool,

    /// Print a random 64-bit signed integer instead of a token
    #[arg(long, visible_alias = "i64")]
    pub int64: bool,

    /// Print a random 64-bit unsigned integer instead of a token
    #[arg(long, visible_alias = "u64")]
    pub uint64: bool,
}

impl RndArgs {
    /// Validate the arguments into what each draw should produce.
    pub fn generate(&self) -> Result<Generate> {
        let what = if self.int32 {
            Generate::Int32
        } else if self.uint32 {
            Generate::Uint32
        } else if self.int64 {
            Generate::Int64
        } else if self.uint64 {
            Generate::Uint64
        } else {
            let length = match &self.length {
                Some(arg) => rnd::parse_length(arg)?,
                None => DEFAULT_LENGTH,
            };
            Generate::Token {
                length,
                first_char_alpha: self.first_char_alpha,
            }
        };
        Ok(what)
    }
}

/// Validate everything before the first write so argument errors leave stdout empty.
pub fn run<W: Write + ?Sized>(args: RndArgs, out: &mut W) -> Result<()> {
    let what = args.generate()?;
    let mut rng = rnd::new_rng();
    for _ in 0..args.count {
        rnd::write_value(&mut rng, &what, out)?;
    }
    io::flush(out)
}
