//! Markdown draft generator adapter.
//!
//! Renders a `WillDraft` into the fixed educational will skeleton. This is the
//! primary implementation of the DocumentGenerator port.

use std::fmt::Write;

use crate::domain::draft::{non_blank, WillDraft};
use crate::ports::{DocumentError, DocumentGenerator, GenerationOptions};

pub const DOCUMENT_TITLE: &str = "Last Will and Testament (Educational Draft)";
pub const EDUCATIONAL_FOOTER: &str =
    "Educational template only. Complex situations should be reviewed with a lawyer.";

/// Markdown implementation of DocumentGenerator.
#[derive(Debug, Clone, Default)]
pub struct MarkdownDraftGenerator;

impl MarkdownDraftGenerator {
    /// Creates a new markdown draft generator.
    pub fn new() -> Self {
        Self
    }

    fn write_header(
        &self,
        doc: &mut String,
        draft: &WillDraft,
        options: &GenerationOptions,
    ) -> Result<(), DocumentError> {
        let city_placeholder = format!("[{} City]", options.jurisdiction);
        let city = non_blank(&draft.testator_city).unwrap_or(city_placeholder.as_str());

        writeln!(doc, "# {}", DOCUMENT_TITLE)?;
        writeln!(doc)?;
        writeln!(
            doc,
            "*Made in {}, {} • Date: {}*",
            city,
            options.jurisdiction,
            options.date.format("%Y-%m-%d")
        )?;
        writeln!(doc)?;
        writeln!(doc, "---")?;
        writeln!(doc)?;
        Ok(())
    }

    fn write_roles(&self, doc: &mut String, draft: &WillDraft) -> Result<(), DocumentError> {
        let name = non_blank(&draft.testator_name).unwrap_or("[Testator Name]");
        let executor = non_blank(&draft.executor_name).unwrap_or("[Executor Name]");

        writeln!(
            doc,
            "**1. Declaration.** I, {}, declare this to be my last will and testament. \
             I revoke all prior wills and codicils to the extent I am permitted by law.",
            name
        )?;
        writeln!(doc)?;
        writeln!(
            doc,
            "**2. Executor.** I appoint {} as my executor (estate trustee) to administer my estate, \
             pay debts and taxes, and distribute my property according to this will.",
            executor
        )?;
        writeln!(doc)?;

        if let Some(alternate) = non_blank(&draft.alt_executor_name) {
            writeln!(
                doc,
                "**Alternate Executor.** If {} cannot or will not act, I appoint {} as my alternate executor.",
                executor, alternate
            )?;
            writeln!(doc)?;
        }

        if let Some(gift) = non_blank(&draft.specific_gift) {
            writeln!(
                doc,
                "**Specific Gift.** I give the following specific gift: {}.",
                gift
            )?;
            writeln!(doc)?;
        }
        Ok(())
    }

    fn write_beneficiaries(&self, doc: &mut String, draft: &WillDraft) -> Result<(), DocumentError> {
        writeln!(
            doc,
            "**3. Beneficiaries and Residue.** After payment of debts, taxes, and expenses, \
             I give the residue of my estate to the following beneficiary(ies):"
        )?;
        writeln!(doc)?;

        let beneficiaries = draft.beneficiary_list();
        if beneficiaries.is_empty() {
            writeln!(doc, "[Beneficiaries]")?;
        }
        for (i, name) in beneficiaries.iter().enumerate() {
            writeln!(doc, "{}. {}", i + 1, name)?;
        }
        writeln!(doc)?;
        Ok(())
    }

    fn write_optional_clauses(&self, doc: &mut String, draft: &WillDraft) -> Result<(), DocumentError> {
        if draft.has_minors {
            let guardian = non_blank(&draft.guardian_name).unwrap_or("[Guardian Name]");
            writeln!(
                doc,
                "**Guardianship.** If I have minor children at my death, I appoint {} as guardian/custodian. \
                 If they cannot act, I request that the court consider my alternate wishes \
                 (to be stated in a full will).",
                guardian
            )?;
            writeln!(doc)?;
            writeln!(
                doc,
                "*Note:* guardianship and management of funds can be complex. \
                 Professional drafting is recommended for minors."
            )?;
            writeln!(doc)?;
        }

        if let Some(pet) = non_blank(&draft.pet_clause) {
            writeln!(doc, "**Pet Care.** I request that {}.", pet)?;
            writeln!(doc)?;
        }
        Ok(())
    }

    fn write_execution(
        &self,
        doc: &mut String,
        draft: &WillDraft,
        options: &GenerationOptions,
    ) -> Result<(), DocumentError> {
        writeln!(
            doc,
            "**4. Execution.** I intend to sign this will at the end, in accordance with {} requirements. \
             Most wills require two witnesses present at the same time. \
             Beneficiaries should not act as witnesses.",
            options.jurisdiction
        )?;
        writeln!(doc)?;

        match non_blank(&draft.storage_note) {
            Some(location) => writeln!(
                doc,
                "**Storage.** I have stored the original will at: {}. I have told my executor how to access it.",
                location
            )?,
            None => writeln!(
                doc,
                "**Storage.** Store the original will safely and tell your executor where it is."
            )?,
        }
        writeln!(doc)?;
        Ok(())
    }

    fn write_signature_block(&self, doc: &mut String) -> Result<(), DocumentError> {
        writeln!(doc, "---")?;
        writeln!(doc)?;
        writeln!(doc, "| Testator signature | Date |")?;
        writeln!(doc, "|--------------------|------|")?;
        writeln!(doc, "| ____________________ | ____________ |")?;
        writeln!(doc)?;
        writeln!(
            doc,
            "| Witness #1 signature (adult, competent) | Witness #2 signature (adult, competent) |"
        )?;
        writeln!(doc, "|-----------------------------------------|-----------------------------------------|")?;
        writeln!(doc, "| ____________________ | ____________________ |")?;
        writeln!(doc)?;
        writeln!(doc, "*{}*", EDUCATIONAL_FOOTER)?;
        Ok(())
    }
}

impl DocumentGenerator for MarkdownDraftGenerator {
    fn generate(
        &self,
        draft: &WillDraft,
        options: &GenerationOptions,
    ) -> Result<String, DocumentError> {
        let mut doc = String::new();

        self.write_header(&mut doc, draft, options)?;
        self.write_roles(&mut doc, draft)?;
        self.write_beneficiaries(&mut doc, draft)?;
        self.write_optional_clauses(&mut doc, draft)?;
        self.write_execution(&mut doc, draft, options)?;

        if options.include_signature_block {
            self.write_signature_block(&mut doc)?;
        }

        Ok(doc)
    }
}
