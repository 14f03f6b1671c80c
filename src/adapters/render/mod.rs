//! Render adapters - text output for the terminal.

mod text;

pub use text::{
    progress_bar, render_question, render_result, render_vault, render_walkthrough, NO_EXTRAS,
    NO_RESULTS,
};
