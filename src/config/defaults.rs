//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

use std::path::PathBuf;

pub fn r#true() -> bool {
    true
}

/// Project root used until `load` applies `--root`.
pub fn root() -> PathBuf {
    "./".into()
}

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn title() -> String {
        "FileMyRTI".into()
    }

    pub fn url() -> Option<String> {
        None
    }
}

// ============================================================================
// [documents] Section Defaults
// ============================================================================

pub mod documents {
    pub fn base_url() -> String {
        "/assets/PDF".into()
    }

    /// Fallback for names that carry no state token.
    pub fn default_state() -> String {
        "tamil-nadu".into()
    }
}

// ============================================================================
// [export] Section Defaults
// ============================================================================

pub mod export {
    use super::PathBuf;

    pub fn output() -> PathBuf {
        "public/_data".into()
    }
}
