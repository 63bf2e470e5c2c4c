//! Static per-state site configuration.
//!
//! The catalog is built once on first access and never mutated, so it can be
//! read from any thread without coordination.
//!
//! | Identifier   | Theme        | Sections |
//! |--------------|--------------|----------|
//! | `telangana`  | `telangana`  | no       |
//! | `tamil-nadu` | `default`    | no       |
//! | `puducherry` | `puducherry` | yes      |

pub mod states;
pub mod template;
mod types;

pub use types::StateRecord;

use rustc_hash::FxHashMap;
use std::sync::LazyLock;
use thiserror::Error;

/// Process-wide catalog, populated from the literal state data.
pub static STATE_CATALOG: LazyLock<StateCatalog> =
    LazyLock::new(|| StateCatalog::new(states::all()));

/// Ordered state records with an identifier index.
#[derive(Debug)]
pub struct StateCatalog {
    records: Vec<StateRecord>,
    index: FxHashMap<String, usize>,
}

impl StateCatalog {
    /// Build a catalog from records in definition order.
    ///
    /// Identifiers are stored lowercased. A later record with a duplicate
    /// identifier is ignored.
    pub fn new(records: Vec<StateRecord>) -> Self {
        let mut index = FxHashMap::default();
        for (position, record) in records.iter().enumerate() {
            let key = record.identifier.to_lowercase();
            debug_assert!(!index.contains_key(&key), "duplicate state `{key}`");
            index.entry(key).or_insert(position);
        }
        Self { records, index }
    }

    /// Look up a state by identifier, ignoring letter case.
    pub fn get(&self, identifier: &str) -> Option<&StateRecord> {
        self.index
            .get(&identifier.to_lowercase())
            .map(|&position| &self.records[position])
    }

    /// All identifiers in definition order.
    pub fn identifiers(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.identifier.as_str()).collect()
    }

    pub fn records(&self) -> &[StateRecord] {
        &self.records
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.index.contains_key(&identifier.to_lowercase())
    }
}

pub fn get_state_by_identifier(identifier: &str) -> Option<&'static StateRecord> {
    STATE_CATALOG.get(identifier)
}

pub fn list_state_identifiers() -> Vec<&'static str> {
    STATE_CATALOG.identifiers()
}

/// Lookup failures surfaced to command callers.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("unknown state `{0}` (known: {known})", known = list_state_identifiers().join(", "))]
    UnknownState(String),
}

/// Like [`get_state_by_identifier`], for callers that treat absence as an error.
pub fn require_state(identifier: &str) -> Result<&'static StateRecord, LookupError> {
    get_state_by_identifier(identifier)
        .ok_or_else(|| LookupError::UnknownState(identifier.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::DesignTheme;

    #[test]
    fn test_identifiers_in_definition_order() {
        assert_eq!(
            list_state_identifiers(),
            vec!["telangana", "tamil-nadu", "puducherry"]
        );
    }

    #[test]
    fn test_lookup_ignores_case() {
        for id in list_state_identifiers() {
            let expected = get_state_by_identifier(id).unwrap();
            assert_eq!(get_state_by_identifier(&id.to_uppercase()), Some(expected));
            assert!(std::ptr::eq(
                get_state_by_identifier(&id.to_uppercase()).unwrap(),
                expected
            ));
        }
        let tamil_nadu = get_state_by_identifier("Tamil-Nadu").unwrap();
        assert_eq!(tamil_nadu.display_name, "Tamil Nadu");
    }

    #[test]
    fn test_unknown_identifier_is_absent() {
        assert!(get_state_by_identifier("does-not-exist").is_none());
        assert!(get_state_by_identifier("").is_none());
        assert!(!STATE_CATALOG.contains("goa"));
    }

    #[test]
    fn test_require_state() {
        assert_eq!(
            require_state("PUDUCHERRY").unwrap().identifier,
            "puducherry"
        );

        let err = require_state("goa").unwrap_err();
        let LookupError::UnknownState(id) = &err;
        assert_eq!(id, "goa");
        assert_eq!(
            err.to_string(),
            "unknown state `goa` (known: telangana, tamil-nadu, puducherry)"
        );
    }

    #[test]
    fn test_telangana_record() {
        let state = get_state_by_identifier("telangana").unwrap();

        assert_eq!(state.display_name, "Telangana");
        assert_eq!(state.supported_languages, ["English", "Telugu", "Urdu"]);
        assert_eq!(state.design_theme, DesignTheme::Telangana);
        assert_eq!(
            state.hero.title,
            "File RTI Online in Telangana — Simplest Way to Get Government Information"
        );
        assert_eq!(state.hero.call_to_action_label, "Start RTI for Telangana");
        assert_eq!(state.departments.len(), 49);
        assert_eq!(state.departments[0], "Telangana Secretariat");
        assert_eq!(state.departments[48], "Telangana BC Welfare Department");
        assert_eq!(state.faqs.len(), 4);
        assert_eq!(state.highlights.len(), 3);
        assert_eq!(
            state.regulatory_commission_name,
            "Telangana State Information Commission (TSIC)"
        );
        assert_eq!(state.application_fee_display, "₹10");
    }

    #[test]
    fn test_tamil_nadu_record() {
        let state = get_state_by_identifier("tamil-nadu").unwrap();

        assert_eq!(state.supported_languages, ["English", "Hindi", "Tamil"]);
        assert_eq!(state.hero.image_reference, "/images/hero.webp");
        assert_eq!(state.departments.len(), 33);
        assert_eq!(
            state.departments[0],
            "RTI Tamil Nadu General Administration Department"
        );
        assert_eq!(state.faqs.len(), 6);
        assert_eq!(
            state.faqs[2].answer,
            "The RTI application fee in Tamil Nadu is ₹10 for state departments. BPL cardholders are exempted from paying fees."
        );
        assert_eq!(
            state.highlights.last().map(String::as_str),
            Some("Service across all districts of Tamil Nadu")
        );
        assert!(state.sections.is_empty());
    }

    #[test]
    fn test_puducherry_sections_match_listing() {
        let state = get_state_by_identifier("puducherry").unwrap();

        assert_eq!(state.supported_languages.len(), 5);
        assert_eq!(state.departments.len(), 61);
        assert_eq!(state.sections.len(), 14);
        assert_eq!(state.departments[0], "Health & Family Welfare Department");
        assert_eq!(
            state.departments[60],
            "Public Information Officers (Department-wise)"
        );

        let items: Vec<&str> = state.document_names();
        assert_eq!(items.len(), state.departments.len());
        for (item, plain) in items.iter().zip(&state.departments) {
            assert_eq!(*item, format!("RTI Puducherry {plain}"));
        }
    }

    #[test]
    fn test_document_names_without_sections() {
        let state = get_state_by_identifier("tamil-nadu").unwrap();
        assert_eq!(state.document_names(), state.departments);
    }

    #[test]
    fn test_serialize_camel_case() {
        let state = get_state_by_identifier("puducherry").unwrap();
        let json = serde_json::to_value(state).unwrap();

        assert_eq!(json["identifier"], "puducherry");
        assert_eq!(json["designTheme"], "puducherry");
        assert_eq!(
            json["hero"]["callToActionLabel"],
            "Start RTI for Puducherry"
        );
        assert_eq!(json["onboardingSteps"][0]["stepNumber"], 1);
        assert!(json.get("description").is_none());
        assert!(json["sections"].is_array());

        let record = get_state_by_identifier("telangana").unwrap();
        let telangana = serde_json::to_value(record).unwrap();
        assert!(telangana.get("sections").is_none());
    }
}
