//! Static shell configuration shared with components through context.

use crate::core::empty_state::EmptyStateVariant;

/// Branding and navigation settings for the page chrome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellConfig {
    /// Product name shown next to the logo.
    pub brand: String,
    /// Copyright holder printed in the footer.
    pub copyright_holder: String,
    /// Kind of collection the home list presents.
    pub collection: EmptyStateVariant,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            brand: "Credfolio".to_string(),
            copyright_holder: "Credfolio".to_string(),
            collection: EmptyStateVariant::Credentials,
        }
    }
}
