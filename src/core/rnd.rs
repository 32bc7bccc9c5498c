//! Random tokens over an unambiguous alphabet, and random fixed-width integers.
//!
//! The generator is a fast non-cryptographic PRNG. Output must not be used
//! where unpredictability matters.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::io::Write;

use crate::error::{Error, Result};
use crate::utils::io;

/// Digits and lowercase letters without `0 1 i l o u`. Order is part of the contract.
pub const ALPHABET: &str = "23456789abcdefghjkmnpqrstvwxyz";

/// The letters of [`ALPHABET`], used when a token must start with a letter.
pub const ALPHABET_LETTERS: &str = "abcdefghjkmnpqrstvwxyz";

pub const DEFAULT_LENGTH: usize = 10;
pub const DEFAULT_COUNT: usize = 1;

/// Largest piece of a token held in memory at once.
pub const TOKEN_CHUNK: usize = 8 * 1024;

/// What a single draw produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generate {
    Token {
        length: usize,
        first_char_alpha: bool,
    },
    Int32,
    Uint32,
    Int64,
    Uint64,
}

impl Default for Generate {
    fn default() -> Self {
        Generate::Token {
            length: DEFAULT_LENGTH,
            first_char_alpha: false,
        }
    }
}

/// Parse a token length argument as a non-negative decimal integer.
pub fn parse_length(arg: &str) -> Result<usize> {
    let invalid = |problem: String| {
        Error::validation_invalid_argument(
            "length",
            format!("invalid length: {} ({})", arg, problem),
            Some(arg.to_string()),
        )
    };

    let value: i64 = arg.parse().map_err(|e| invalid(format!("{}", e)))?;
    if value < 0 {
        return Err(invalid("must be greater than or equal to 0".to_string()));
    }
    usize::try_from(value).map_err(|e| invalid(e.to_string()))
}

/// Fresh generator for one invocation.
pub fn new_rng() -> SmallRng {
    SmallRng::from_os_rng()
}

/// `length` independent uniform draws from [`ALPHABET`].
///
/// With `first_char_alpha` the first character is drawn from
/// [`ALPHABET_LETTERS`] instead. An empty token stays empty.
pub fn random_token<R: Rng + ?Sized>(rng: &mut R, length: usize, first_char_alpha: bool) -> String {
    let mut token = String::with_capacity(length);
    for i in 0..length {
        let pool = if i == 0 && first_char_alpha {
            ALPHABET_LETTERS.as_bytes()
        } else {
            ALPHABET.as_bytes()
        };
        token.push(char::from(pool[rng.random_range(0..pool.len())]));
    }
    token
}

/// Write one token of `length` characters followed by a newline.
///
/// The token is generated and written [`TOKEN_CHUNK`] characters at a time,
/// so memory use does not grow with `length`.
pub fn write_token<R, W>(
    rng: &mut R,
    length: usize,
    first_char_alpha: bool,
    out: &mut W,
) -> Result<()>
where
    R: Rng + ?Sized,
    W: Write + ?Sized,
{
    let mut remaining = length;
    let mut first = first_char_alpha;
    while remaining > 0 {
        let n = remaining.min(TOKEN_CHUNK);
        io::write_bytes(out, random_token(rng, n, first).as_bytes())?;
        first = false;
        remaining -= n;
    }
    io::write_bytes(out, b"\n")
}

/// Write one draw of `what` as a line.
pub fn write_value<R, W>(rng: &mut R, what: &Generate, out: &mut W) -> Result<()>
where
    R: Rng + ?Sized,
    W: Write + ?Sized,
{
    match *what {
        Generate::Token {
            length,
            first_char_alpha,
        } => write_token(rng, length, first_char_alpha, out),
        _ => io::write_line(out, random_value(rng, what).as_bytes()),
    }
}

pub fn random_value<R: Rng + ?Sized>(rng: &mut R, what: &Generate) -> String {
    match *what {
        Generate::Token {
            length,
            first_char_alpha,
        } => random_token(rng, length, first_char_alpha),
        Generate::Int32 => rng.random::<i32>().to_string(),
        Generate::Uint32 => rng.random::<u32>().to_string(),
        Generate::Int64 => rng.random::<i64>().to_string(),
        Generate::Uint64 => rng.random::<u64>().to_string(),
    }
}
