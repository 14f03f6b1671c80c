//! SearchVaultHandler - Query handler for the resource directory.

use tracing::debug;

use crate::domain::vault::{Vault, VaultEntry, VaultTab};

/// Query to filter one tab of the vault.
#[derive(Debug, Clone, Default)]
pub struct SearchVaultQuery {
    pub tab: VaultTab,
    /// Case-insensitive substring; blank returns the whole tab.
    pub query: String,
}

/// Matching entries for one tab.
#[derive(Debug, Clone)]
pub struct SearchVaultResult {
    pub tab: VaultTab,
    pub entries: Vec<&'static VaultEntry>,
}

#[derive(Debug, Default)]
pub struct SearchVaultHandler;

impl SearchVaultHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: SearchVaultQuery) -> SearchVaultResult {
        let entries = Vault::search(query.tab, &query.query);
        debug!(tab = %query.tab, query = %query.query, hits = entries.len(), "Vault searched");
        SearchVaultResult {
            tab: query.tab,
            entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search(tab: VaultTab, query: &str) -> SearchVaultResult {
        SearchVaultHandler::new().handle(SearchVaultQuery {
            tab,
            query: query.to_string(),
        })
    }

    #[test]
    fn default_query_lists_forms() {
        let result = SearchVaultHandler::new().handle(SearchVaultQuery::default());
        assert_eq!(result.tab, VaultTab::Forms);
        assert_eq!(result.entries.len(), Vault::entries(VaultTab::Forms).len());
    }

    #[test]
    fn query_matches_meta_text() {
        let result = search(VaultTab::Glossary, "glossary");
        assert_eq!(result.entries.len(), 8);
    }

    #[test]
    fn unmatched_query_returns_nothing() {
        assert!(search(VaultTab::Help, "zzz-not-a-term").entries.is_empty());
    }
}
