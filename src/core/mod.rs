pub mod abspath;
pub mod error;
pub mod now;
pub mod rnd;

pub use error::{Error, ErrorCode, Result};
