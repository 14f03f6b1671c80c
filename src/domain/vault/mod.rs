//! Vault - the legal resource directory.
//!
//! Entries are grouped into tabs. Search is a case-insensitive substring
//! match over title, description, and meta, preserving directory order.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Directory section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VaultTab {
    #[default]
    Forms,
    Guides,
    Help,
    Glossary,
}

impl VaultTab {
    pub const ALL: [VaultTab; 4] = [
        VaultTab::Forms,
        VaultTab::Guides,
        VaultTab::Help,
        VaultTab::Glossary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VaultTab::Forms => "forms",
            VaultTab::Guides => "guides",
            VaultTab::Help => "help",
            VaultTab::Glossary => "glossary",
        }
    }
}

impl fmt::Display for VaultTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VaultTab {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        VaultTab::ALL
            .iter()
            .find(|t| t.as_str() == wanted)
            .copied()
            .ok_or_else(|| ValidationError::invalid_format("tab", format!("unknown tab '{}'", s)))
    }
}

/// An outbound link attached to an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// A directory entry as shown in a tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VaultEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub meta: &'static str,
    pub links: Vec<ResourceLink>,
}

impl VaultEntry {
    fn new(
        title: &'static str,
        description: &'static str,
        meta: &'static str,
        link: ResourceLink,
    ) -> Self {
        Self {
            title,
            description,
            meta,
            links: vec![link],
        }
    }

    /// True if the lowercased "title description meta" contains `needle`.
    ///
    /// `needle` must already be lowercased.
    fn matches(&self, needle: &str) -> bool {
        format!("{} {} {}", self.title, self.description, self.meta)
            .to_lowercase()
            .contains(needle)
    }
}

/// A glossary definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlossaryTerm {
    pub term: &'static str,
    pub definition: &'static str,
}

impl GlossaryTerm {
    /// Presents the term as a link-less entry.
    pub fn to_entry(&self) -> VaultEntry {
        VaultEntry {
            title: self.term,
            description: self.definition,
            meta: "Glossary",
            links: Vec::new(),
        }
    }
}

const fn link(label: &'static str, href: &'static str) -> ResourceLink {
    ResourceLink { label, href }
}

static FORMS: Lazy<Vec<VaultEntry>> = Lazy::new(|| {
    vec![
        VaultEntry::new(
            "Form 74.4 — Application for Certificate of Appointment of Estate Trustee (With a Will)",
            "Core probate application form (Superior Court of Justice) when there is a will.",
            "Ontario Court Forms (PDF)",
            link("Open PDF", "https://ontariocourtforms.on.ca/static/media/uploads/courtforms/civil/74_04/rcp-74-4-e.pdf"),
        ),
        VaultEntry::new(
            "Estates forms directory (Rules 74 / 75)",
            "Official directory for pre-formatted, fillable estates forms (probate / estate trustee).",
            "Ontario Court Forms",
            link("Open directory", "https://ontariocourtforms.on.ca/en/rules-of-civil-procedure-forms/pre-formatted-fillable-estates-forms/"),
        ),
    ]
});

static GUIDES: Lazy<Vec<VaultEntry>> = Lazy::new(|| {
    vec![
        VaultEntry::new(
            "Law Society Referral Service (LSRS)",
            "Find a lawyer/paralegal referral and next steps. Useful for complex wills or disputes.",
            "Law Society of Ontario",
            link("Open LSRS", "https://lso.ca/public-resources/finding-a-lawyer-or-paralegal/law-society-referral-service"),
        ),
        VaultEntry::new(
            "Power of Attorney (Ontario overview)",
            "If you need someone to manage finances/health decisions while you’re alive, you need a Power of Attorney (not a will).",
            "Ontario resource",
            link("Open guide", "https://www.ontario.ca/page/make-power-attorney"),
        ),
    ]
});

static HELP: Lazy<Vec<VaultEntry>> = Lazy::new(|| {
    vec![
        VaultEntry::new(
            "Steps to Justice — Wills and Powers of Attorney",
            "Plain-language legal education and step-by-step help.",
            "CLEO / Steps to Justice",
            link("Open", "https://stepstojustice.ca/legal-topic/wills-and-powers-of-attorney/"),
        ),
        VaultEntry::new(
            "FindLegalHelp.ca (LSRS intake)",
            "Online intake path mentioned by the Law Society Referral Service.",
            "LSO referral intake",
            link("Open", "https://www.findlegalhelp.ca/"),
        ),
    ]
});

static GLOSSARY: [GlossaryTerm; 8] = [
    GlossaryTerm { term: "Testator", definition: "The person who makes the will." },
    GlossaryTerm { term: "Executor (Estate Trustee)", definition: "The person responsible for administering the estate after death." },
    GlossaryTerm { term: "Beneficiary", definition: "A person or organization who receives property under the will." },
    GlossaryTerm { term: "Residue", definition: "Everything left after debts, taxes, and specific gifts are handled." },
    GlossaryTerm { term: "Intestacy", definition: "Dying without a valid will; Ontario law decides distribution." },
    GlossaryTerm { term: "Probate", definition: "A court process that confirms a will and gives authority to the estate trustee." },
    GlossaryTerm { term: "Holograph will", definition: "A will wholly handwritten and signed by the testator; may not require witnesses if it meets the legal definition." },
    GlossaryTerm { term: "Affidavit of execution", definition: "A sworn document by a witness confirming proper signing; helps prove validity later." },
];

static GLOSSARY_ENTRIES: Lazy<Vec<VaultEntry>> =
    Lazy::new(|| GLOSSARY.iter().map(GlossaryTerm::to_entry).collect());

/// The glossary as term/definition pairs.
pub fn glossary() -> &'static [GlossaryTerm] {
    &GLOSSARY
}

/// Read-only access to the resource directory.
pub struct Vault;

impl Vault {
    /// Every entry of `tab`, in directory order.
    pub fn entries(tab: VaultTab) -> &'static [VaultEntry] {
        match tab {
            VaultTab::Forms => &FORMS,
            VaultTab::Guides => &GUIDES,
            VaultTab::Help => &HELP,
            VaultTab::Glossary => &GLOSSARY_ENTRIES,
        }
    }

    /// Entries of `tab` whose text contains `query`, ignoring case.
    ///
    /// A blank query returns the whole tab.
    pub fn search(tab: VaultTab, query: &str) -> Vec<&'static VaultEntry> {
        let needle = query.trim().to_lowercase();
        let entries = Self::entries(tab).iter();
        if needle.is_empty() {
            return entries.collect();
        }
        entries.filter(|e| e.matches(&needle)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(entries: &[&VaultEntry]) -> Vec<&'static str> {
        entries.iter().map(|e| e.title).collect()
    }

    #[test]
    fn blank_query_returns_whole_tab() {
        assert_eq!(Vault::search(VaultTab::Forms, "").len(), 2);
        assert_eq!(Vault::search(VaultTab::Glossary, "   ").len(), 8);
    }

    #[test]
    fn search_is_case_insensitive_and_trimmed() {
        let hits = Vault::search(VaultTab::Guides, "  POWER of attorney ");
        assert_eq!(titles(&hits), vec!["Power of Attorney (Ontario overview)"]);
    }

    #[test]
    fn search_matches_meta_text() {
        let hits = Vault::search(VaultTab::Help, "cleo");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].meta, "CLEO / Steps to Justice");
    }

    #[test]
    fn search_preserves_directory_order() {
        let hits = Vault::search(VaultTab::Glossary, "will");
        assert_eq!(
            titles(&hits),
            vec![
                "Testator",
                "Beneficiary",
                "Intestacy",
                "Probate",
                "Holograph will",
            ]
        );
    }

    #[test]
    fn search_with_no_hits_is_empty() {
        assert!(Vault::search(VaultTab::Forms, "zebra").is_empty());
    }

    #[test]
    fn glossary_entries_have_meta_and_no_links() {
        for entry in Vault::entries(VaultTab::Glossary) {
            assert_eq!(entry.meta, "Glossary");
            assert!(entry.links.is_empty());
        }
        assert_eq!(glossary().len(), Vault::entries(VaultTab::Glossary).len());
    }

    #[test]
    fn tab_parses_ignoring_case() {
        assert_eq!("Glossary".parse::<VaultTab>().unwrap(), VaultTab::Glossary);
        assert!("faq".parse::<VaultTab>().is_err());
    }
}
