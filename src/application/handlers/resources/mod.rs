//! Resource handlers: walkthrough, vault, and draft preview.

mod render_draft;
mod search_vault;
mod show_walkthrough;

pub use render_draft::{RenderDraftCommand, RenderDraftHandler};
pub use search_vault::{SearchVaultHandler, SearchVaultQuery, SearchVaultResult};
pub use show_walkthrough::{ShowWalkthroughHandler, ShowWalkthroughQuery, WalkthroughView};
