//! Guess which state a department name belongs to.

use serde::Serialize;

/// `(lowercase token, state identifier)`, checked in order. A name carrying
/// several tokens resolves to the first one listed.
const STATE_TOKENS: &[(&str, &str)] = &[
    ("puducherry", "puducherry"),
    ("tamil", "tamil-nadu"),
    ("telangana", "telangana"),
    ("delhi", "delhi"),
];

/// Outcome of [`infer_state`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "state", rename_all = "lowercase")]
pub enum StateMatch {
    /// The name carried a known state token.
    Matched(&'static str),
    /// No token found. The caller decides on a fallback.
    Unmatched,
}

impl StateMatch {
    pub const fn state(self) -> Option<&'static str> {
        match self {
            Self::Matched(state) => Some(state),
            Self::Unmatched => None,
        }
    }

    pub fn or_default<'a>(self, default: &'a str) -> &'a str {
        match self {
            Self::Matched(state) => state,
            Self::Unmatched => default,
        }
    }
}

/// Scan `name` case-insensitively for the first known state token.
pub fn infer_state(name: &str) -> StateMatch {
    let name = name.to_lowercase();
    STATE_TOKENS
        .iter()
        .find(|(token, _)| name.contains(token))
        .map(|&(_, state)| StateMatch::Matched(state))
        .unwrap_or(StateMatch::Unmatched)
}

/// Total variant of [`infer_state`]: unmatched names fall back to `default`.
pub fn infer_state_or_default<'a>(name: &str, default: &'a str) -> &'a str {
    infer_state(name).or_default(default)
}

/// Every identifier inference can produce.
pub fn known_states() -> impl Iterator<Item = &'static str> {
    STATE_TOKENS.iter().map(|&(_, state)| state)
}
