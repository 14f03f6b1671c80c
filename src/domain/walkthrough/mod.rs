//! Walkthrough - the five-step will checklist.

use once_cell::sync::Lazy;
use serde::Serialize;

/// One checklist step with its explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalkthroughStep {
    pub title: &'static str,
    pub summary: &'static str,
    pub why: &'static str,
    pub actions: Vec<&'static str>,
    pub mistakes: Vec<&'static str>,
}

static STEPS: Lazy<Vec<WalkthroughStep>> = Lazy::new(|| {
    vec![
        WalkthroughStep {
            title: "Capacity",
            summary: "You must understand what a will is and what you own.",
            why: "Capacity protects people from pressure or manipulation. If someone cannot understand the nature of the document, the will can be challenged.",
            actions: vec![
                "Be clear-headed when signing.",
                "Know your main assets and who could reasonably expect to benefit.",
                "If capacity might be questioned, get professional help.",
            ],
            mistakes: vec![
                "Signing when heavily impaired or under pressure.",
                "Major confusion about assets or beneficiaries.",
            ],
        },
        WalkthroughStep {
            title: "Drafting",
            summary: "Write clear roles and clear gifts.",
            why: "Ambiguity creates disputes. A will should clearly name roles (executor, guardians) and explain who receives property.",
            actions: vec![
                "Name an executor and an alternate.",
                "Name beneficiaries and define the residue (everything not specifically listed).",
                "If minors: name guardians/custodians and consider how funds are managed.",
            ],
            mistakes: vec![
                "No alternate executor.",
                "No residue clause (creates confusion).",
                "Using vague wording like “my valuables” without details.",
            ],
        },
        WalkthroughStep {
            title: "Execution",
            summary: "Signed at the end; treat it like a formal legal act.",
            why: "Execution formalities exist to prove authenticity. Courts look for clean signing and clear intent.",
            actions: vec![
                "Sign at the end of the document.",
                "Initial pages as a best practice (not the same as signing).",
                "Date the will for clarity.",
            ],
            mistakes: vec![
                "Signature not at the end.",
                "Multiple versions floating around without clarity.",
            ],
        },
        WalkthroughStep {
            title: "Witnessing",
            summary: "Most wills require two witnesses present at the same time.",
            why: "Witnesses reduce fraud and help prove the will was signed properly and voluntarily.",
            actions: vec![
                "Use two adult, competent witnesses present together.",
                "Avoid beneficiaries (and spouses of beneficiaries) as witnesses to reduce problems.",
                "Consider an affidavit of execution (common with lawyers) to prove signing later.",
            ],
            mistakes: vec![
                "Beneficiary acts as witness (risk to the gift).",
                "Witnesses not present at the same time.",
                "No way to locate witnesses later.",
            ],
        },
        WalkthroughStep {
            title: "Storing",
            summary: "Store the original where your executor can access it.",
            why: "If the original can’t be found, courts may presume revocation. Banks/landlords often want the original.",
            actions: vec![
                "Store the original in a safe place (lawyer, fireproof safe).",
                "Tell your executor where it is and how to access it.",
                "Update your will after major life changes.",
            ],
            mistakes: vec![
                "Only having a photocopy.",
                "Executor has no idea where it is.",
                "Destroying or misplacing the original.",
            ],
        },
    ]
});

/// All steps in checklist order.
pub fn steps() -> &'static [WalkthroughStep] {
    &STEPS
}

/// Returns the step at a 0-based index.
pub fn step(index: usize) -> Option<&'static WalkthroughStep> {
    STEPS.get(index)
}
