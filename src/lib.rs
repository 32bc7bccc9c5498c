/// Macro for prefixed status logging to stderr (only when stderr is a terminal).
///
/// Usage:
/// ```ignore
/// log_status!("abspath", "working directory unavailable ({})", err);
/// ```
#[macro_export]
macro_rules! log_status {
    ($prefix:expr, $($arg:tt)*) => {
        if ::std::io::IsTerminal::is_terminal(&::std::io::stderr()) {
            eprintln!(concat!("[", $prefix, "] {}"), format_args!($($arg)*));
        }
    };
}

pub mod commands;
pub mod core;
pub mod utils;

// Re-export everything from core for ergonomic library use
// Users can write `shellbits::rnd` instead of `shellbits::core::rnd`
pub use crate::core::*;
pub use crate::utils::*;
