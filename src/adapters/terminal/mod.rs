//! Terminal adapters - interactive questionnaire I/O.

mod console;

pub use console::{parse_command, TerminalConsole};
