//! Plain-text rendering for terminal output.

use crate::domain::foundation::Percentage;
use crate::domain::recommendation::{ClauseSet, RecommendationResult};
use crate::domain::vault::{VaultEntry, VaultTab};
use crate::domain::walkthrough::WalkthroughStep;
use crate::ports::QuestionView;

const PROGRESS_WIDTH: usize = 20;

pub const NO_EXTRAS: &str = "No extras recommended based on your answers.";
pub const NO_RESULTS: &str = "No results. Try a different keyword.";

/// `[#####-----] 50%`
pub fn progress_bar(progress: Percentage) -> String {
    let filled = usize::from(progress.value()) * PROGRESS_WIDTH / 100;
    format!(
        "[{}{}] {}",
        "#".repeat(filled),
        "-".repeat(PROGRESS_WIDTH - filled),
        progress
    )
}

pub fn render_question(view: &QuestionView<'_>) -> String {
    let mut out = format!(
        "Step {}    {} / {}    {}\n\n",
        view.step,
        view.step,
        view.total,
        progress_bar(view.progress)
    );
    out.push_str(&format!("{}\n{}\n\n", view.question.prompt, view.question.help_text));
    for (i, choice) in view.question.choices.iter().enumerate() {
        let marker = if view.selected == Some(choice.value.as_str()) { "*" } else { " " };
        out.push_str(&format!(" {} {}) {}\n", marker, i + 1, choice.label));
    }
    out.push('\n');

    let next = if view.is_last { "Enter = see results" } else { "Enter = next" };
    let back = if view.can_go_back { ", b = back" } else { "" };
    out.push_str(&format!(
        "Choose 1-{} ({}{}, q = quit)",
        view.question.choices.len(),
        next,
        back
    ));
    out
}

fn clause_lines(clauses: &ClauseSet) -> String {
    clauses
        .iter()
        .map(|clause| format!("  • {}\n    {}\n", clause.name, clause.explanation))
        .collect()
}

pub fn render_result(result: &RecommendationResult) -> String {
    let mut out = format!("Your Risk Profile: {} (score {})\n", result.tier, result.score);
    out.push_str(
        "Below are the clauses you should include to make your will clearer and harder to challenge.\n\n",
    );

    out.push_str("Must include\n");
    out.push_str(&clause_lines(&result.must_clauses));
    out.push('\n');

    out.push_str("Strongly recommended\n");
    if result.has_recommendations() {
        out.push_str(&clause_lines(&result.should_clauses));
    } else {
        out.push_str(&format!("  {}\n", NO_EXTRAS));
    }

    if result.has_cautions() {
        out.push_str("\nCautions\n");
        for caution in &result.cautions {
            out.push_str(&format!("  ! {}\n", caution));
        }
    }

    out.push_str(
        "\nNext step: run `will-clinic preview` to see how these clauses appear in a clean will format.",
    );
    out
}

pub fn render_vault(tab: VaultTab, entries: &[&VaultEntry]) -> String {
    let mut out = format!("[{}] {} result(s)\n", tab, entries.len());
    if entries.is_empty() {
        out.push_str(NO_RESULTS);
        return out;
    }
    for entry in entries {
        out.push_str(&format!(
            "\n{}\n  {}\n  {}\n",
            entry.title, entry.description, entry.meta
        ));
        for link in &entry.links {
            out.push_str(&format!("  {}: {}\n", link.label, link.href));
        }
    }
    out.truncate(out.trim_end().len());
    out
}

/// Step list with `active` (0-based) highlighted, followed by its detail.
pub fn render_walkthrough(steps: &[WalkthroughStep], active: usize) -> String {
    let mut out = String::new();
    for (i, step) in steps.iter().enumerate() {
        let marker = if i == active { ">" } else { " " };
        out.push_str(&format!("{} {}. {}: {}\n", marker, i + 1, step.title, step.summary));
    }

    if let Some(step) = steps.get(active) {
        out.push_str(&format!("\n{}\n{}\n\nWhat to do\n", step.title, step.why));
        for action in &step.actions {
            out.push_str(&format!("  • {}\n", action));
        }
        out.push_str("\nCommon mistakes\n");
        for mistake in &step.mistakes {
            out.push_str(&format!("  • {}\n", mistake));
        }
    }
    out.truncate(out.trim_end().len());
    out
}
