use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use will_clinic::adapters::render::{render_result, render_vault, render_walkthrough};
use will_clinic::adapters::{load_document, MarkdownDraftGenerator, TerminalConsole};
use will_clinic::application::{
    EvaluateAnswersHandler, EvaluateAnswersQuery, RenderDraftCommand, RenderDraftHandler,
    RunInterviewCommand, RunInterviewHandler, SearchVaultHandler, SearchVaultQuery,
    ShowWalkthroughHandler, ShowWalkthroughQuery,
};
use will_clinic::config::{AppConfig, LoggingConfig, OutputFormat};
use will_clinic::domain::draft::WillDraft;
use will_clinic::domain::foundation::SessionId;
use will_clinic::domain::questionnaire::{AnswerSet, QuestionnaireFlow};
use will_clinic::domain::vault::VaultTab;
use will_clinic::ports::GenerationOptions;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format for results (overrides WILL_CLINIC__OUTPUT__FORMAT)
    #[arg(long, global = true)]
    format: Option<OutputFormat>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer the questionnaire interactively
    Interview {
        /// Session id to tag logs with (random if omitted)
        #[arg(long)]
        session_id: Option<SessionId>,
    },
    /// Score a saved set of answers
    Evaluate {
        /// JSON or YAML file keyed by question (age18, married, ...)
        #[arg(long)]
        answers: PathBuf,
    },
    /// Show the five-step will checklist
    Walkthrough {
        /// Step to expand, starting at 1
        #[arg(long, default_value_t = 1)]
        step: usize,
    },
    /// Search forms, guides, help, and glossary entries
    Vault {
        /// forms, guides, help, or glossary
        #[arg(long, default_value = "forms")]
        tab: VaultTab,
        /// Case-insensitive text to look for
        #[arg(long)]
        query: Option<String>,
    },
    /// Render a will preview from a draft file
    Preview {
        /// JSON or YAML file with the draft fields
        #[arg(long)]
        input: PathBuf,
        /// Date printed in the header (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Leave out the signature lines and footer
        #[arg(long)]
        body_only: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;
    init_tracing(&config.logging)?;

    let format = cli.format.unwrap_or(config.output.format);
    debug!(%format, "Configuration loaded");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Interview { session_id } => {
            // In JSON mode stdout carries only the outcome document.
            let transcript: Box<dyn Write> = match format {
                OutputFormat::Json => Box::new(io::stderr()),
                OutputFormat::Text => Box::new(io::stdout()),
            };
            let stdin = io::stdin();
            let console = TerminalConsole::new(stdin.lock(), transcript);
            let mut handler = RunInterviewHandler::new(console);
            let outcome = handler.handle(RunInterviewCommand {
                session_id: session_id.unwrap_or_default(),
                flow: QuestionnaireFlow::standard(),
            })?;
            if format == OutputFormat::Json {
                writeln!(out, "{}", serde_json::to_string_pretty(&outcome)?)?;
            }
        }
        Commands::Evaluate { answers } => {
            let answers: AnswerSet = load_document(&answers)?;
            let report = EvaluateAnswersHandler::new().handle(EvaluateAnswersQuery { answers });
            match format {
                OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?,
                OutputFormat::Text => {
                    writeln!(out, "{}", render_result(&report.result))?;
                    if !report.is_complete() {
                        let missing: Vec<&str> =
                            report.unanswered.iter().map(|k| k.as_str()).collect();
                        writeln!(out)?;
                        writeln!(out, "Unanswered: {}", missing.join(", "))?;
                    }
                }
            }
        }
        Commands::Walkthrough { step } => {
            let query = ShowWalkthroughQuery::step_number(step)?;
            let view = ShowWalkthroughHandler::new().handle(query)?;
            match format {
                OutputFormat::Json => writeln!(
                    out,
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "active": view.active + 1,
                        "steps": view.steps,
                    }))?
                )?,
                OutputFormat::Text => {
                    writeln!(out, "{}", render_walkthrough(view.steps, view.active))?
                }
            }
        }
        Commands::Vault { tab, query } => {
            let result = SearchVaultHandler::new().handle(SearchVaultQuery {
                tab,
                query: query.unwrap_or_default(),
            });
            match format {
                OutputFormat::Json => {
                    writeln!(out, "{}", serde_json::to_string_pretty(&result.entries)?)?
                }
                OutputFormat::Text => writeln!(out, "{}", render_vault(result.tab, &result.entries))?,
            }
        }
        Commands::Preview {
            input,
            date,
            body_only,
        } => {
            let draft: WillDraft = load_document(&input)?;
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let options = if body_only {
                GenerationOptions::body_only(date)
            } else {
                GenerationOptions::dated(date)
            };
            let handler = RenderDraftHandler::new(Arc::new(MarkdownDraftGenerator::new()));
            let document = handler.handle(RenderDraftCommand { draft, options })?;
            match format {
                OutputFormat::Json => writeln!(
                    out,
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "date": date,
                        "document": document,
                    }))?
                )?,
                OutputFormat::Text => write!(out, "{}", document)?,
            }
        }
    }

    info!("Done");
    Ok(())
}

/// Logs go to stderr so stdout stays clean for results.
fn init_tracing(logging: &LoggingConfig) -> Result<()> {
    let filter = logging.env_filter()?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
    Ok(())
}
