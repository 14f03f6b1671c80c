//! Line-oriented terminal console.
//!
//! Works over any `BufRead`/`Write` pair so it can be driven by stdin/stdout
//! or by in-memory buffers in tests.

use std::io::{BufRead, Write};

use crate::adapters::render::{render_question, render_result};
use crate::domain::recommendation::RecommendationResult;
use crate::ports::{ConsoleError, InterviewCommand, InterviewConsole, PromptStage, QuestionView};

/// InterviewConsole over a reader and a writer.
pub struct TerminalConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the writer, e.g. to inspect captured output.
    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, stage: PromptStage) -> Result<(), ConsoleError> {
        match stage {
            PromptStage::Question => write!(self.output, "\n> ")?,
            PromptStage::Results => write!(self.output, "\n(r = restart, b = back, q = quit) > ")?,
        }
        self.output.flush()?;
        Ok(())
    }
}

/// Maps one input line to a command.
pub fn parse_command(line: &str) -> InterviewCommand {
    let trimmed = line.trim();
    match trimmed.to_lowercase().as_str() {
        "" => InterviewCommand::Continue,
        "b" | "back" => InterviewCommand::Back,
        "r" | "restart" => InterviewCommand::Restart,
        "q" | "quit" | "exit" => InterviewCommand::Quit,
        _ => InterviewCommand::Choose(trimmed.to_string()),
    }
}

impl<R: BufRead, W: Write> InterviewConsole for TerminalConsole<R, W> {
    fn show_question(&mut self, view: &QuestionView<'_>) -> Result<(), ConsoleError> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", render_question(view))?;
        Ok(())
    }

    fn show_notice(&mut self, message: &str) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    fn show_result(&mut self, result: &RecommendationResult) -> Result<(), ConsoleError> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", render_result(result))?;
        Ok(())
    }

    fn read_command(&mut self, stage: PromptStage) -> Result<InterviewCommand, ConsoleError> {
        self.prompt(stage)?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(InterviewCommand::Quit);
        }
        Ok(parse_command(&line))
    }
}
