//! Generic utility primitives with zero domain knowledge.
//!
//! - `io` - Standard-stream writes and path/byte conversion

pub mod io;
