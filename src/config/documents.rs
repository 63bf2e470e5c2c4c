//! `[documents]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[documents]` section in rti.toml - where template documents are served
/// from and how unattributed department names are treated.
///
/// # Example
/// ```toml
/// [documents]
/// base_url = "https://cdn.example.com/rti"
/// default_state = "puducherry"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct DocumentsConfig {
    /// Prefix joined with registered document paths to build links.
    #[serde(default = "defaults::documents::base_url")]
    #[educe(Default = defaults::documents::base_url())]
    pub base_url: String,

    /// State assumed when a department name carries no state token.
    #[serde(default = "defaults::documents::default_state")]
    #[educe(Default = defaults::documents::default_state())]
    pub default_state: String,
}
