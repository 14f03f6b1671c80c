//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to the outside world:
//! - `document` - Markdown will preview generator
//! - `loader` - JSON/YAML input files
//! - `render` - Plain-text views for the terminal
//! - `terminal` - Line-based interview console

pub mod document;
pub mod loader;
pub mod render;
pub mod terminal;

pub use document::MarkdownDraftGenerator;
pub use loader::{load_document, parse_document, InputFormat, LoadError};
pub use terminal::TerminalConsole;
