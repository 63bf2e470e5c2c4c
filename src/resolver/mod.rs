//! Department name → RTI template document resolution.
//!
//! The document table maps the full display name of a department (including
//! any `RTI <state>` prefix) to a relative document path. Lookup is exact:
//! case, whitespace and punctuation must match the registered name.
//!
//! # Example
//!
//! ```ignore
//! assert_eq!(
//!     resolve_document_path("RTI Puducherry Finance Department"),
//!     Some("RTI_Puducherry_ALL_Departments/RTI_Puducherry_Finance_Department.pdf"),
//! );
//! assert!(!has_document("RTI Goa Finance Department"));
//! ```

mod inference;
mod table;

pub use inference::{StateMatch, infer_state, infer_state_or_default, known_states};

use rustc_hash::FxHashMap;
use serde::Serialize;
use std::sync::LazyLock;

/// Process-wide document table, populated from the registered templates.
pub static DOCUMENTS: LazyLock<DocumentTable> =
    LazyLock::new(|| DocumentTable::new(table::entries()));

/// One registered template document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentEntry {
    /// Exact lookup key.
    pub name: String,
    /// Relative to the documents root.
    pub path: String,
    /// Identifier of the state the entry was registered under.
    pub state: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Registered documents in registration order, indexed by name.
#[derive(Debug)]
pub struct DocumentTable {
    entries: Vec<DocumentEntry>,
    index: FxHashMap<String, usize>,
}

impl DocumentTable {
    /// Build a table. A repeated name keeps its first registration.
    pub fn new(entries: Vec<DocumentEntry>) -> Self {
        let mut index = FxHashMap::default();
        for (position, entry) in entries.iter().enumerate() {
            index.entry(entry.name.clone()).or_insert(position);
        }
        Self { entries, index }
    }

    pub fn get(&self, name: &str) -> Option<&DocumentEntry> {
        let &position = self.index.get(name)?;
        Some(&self.entries[position])
    }

    pub fn path(&self, name: &str) -> Option<&str> {
        self.get(name).map(|entry| entry.path.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn entries(&self) -> &[DocumentEntry] {
        &self.entries
    }

    pub fn entries_for_state<'a>(
        &'a self,
        state: &'a str,
    ) -> impl Iterator<Item = &'a DocumentEntry> {
        self.entries
            .iter()
            .filter(move |entry| entry.state == state)
    }
}

/// Registered path for `name`, or `None` when no document is registered.
pub fn resolve_document_path(name: &str) -> Option<&'static str> {
    DOCUMENTS.path(name)
}

pub fn has_document(name: &str) -> bool {
    DOCUMENTS.contains(name)
}

/// Join a documents base (URL or path prefix) with a registered path.
///
/// Each path segment is percent-encoded; the base is used as given.
///
/// # Examples
/// ```ignore
/// document_url("/assets/PDF", "delhi/RTI Delhi Police & Security/x.pdf")
/// // → "/assets/PDF/delhi/RTI%20Delhi%20Police%20%26%20Security/x.pdf"
/// ```
pub fn document_url(base: &str, path: &str) -> String {
    let encoded = path
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/");

    let base = base.trim_end_matches('/');
    if base.is_empty() {
        encoded
    } else {
        format!("{base}/{encoded}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_registered_name_round_trips() {
        for entry in DOCUMENTS.entries() {
            assert_eq!(
                resolve_document_path(&entry.name),
                Some(entry.path.as_str())
            );
            assert!(has_document(&entry.name));
        }
    }

    #[test]
    fn test_registered_names_are_unique() {
        let table = &*DOCUMENTS;
        assert_eq!(table.index.len(), table.entries().len());
        assert_eq!(table.entries().len(), 204);
    }

    #[test]
    fn test_puducherry_finance_scenario() {
        let name = "RTI Puducherry Finance Department";
        let path = resolve_document_path(name).unwrap();

        assert_eq!(
            path,
            "RTI_Puducherry_ALL_Departments/RTI_Puducherry_Finance_Department.pdf"
        );
        assert!(path.ends_with("RTI_Puducherry_Finance_Department.pdf"));
        assert_eq!(infer_state(name), StateMatch::Matched("puducherry"));
    }

    #[test]
    fn test_unregistered_goa_scenario() {
        let name = "RTI Goa Finance Department";

        assert_eq!(resolve_document_path(name), None);
        assert!(!has_document(name));
        assert_eq!(infer_state_or_default(name, "tamil-nadu"), "tamil-nadu");
    }

    #[test]
    fn test_lookup_is_exact() {
        assert!(has_document("RTI Tamil Nadu Energy Department"));
        assert!(!has_document("rti tamil nadu energy department"));
        assert!(!has_document("RTI Tamil Nadu Energy Department "));
        assert!(!has_document(" RTI Tamil Nadu Energy Department"));
        assert!(!has_document("RTI Tamil Nadu  Energy Department"));
        assert!(!has_document("Tamil Nadu Energy"));
    }

    #[test]
    fn test_has_document_agrees_with_resolve() {
        let names = [
            "",
            "RTI Delhi Police",
            "RTI Delhi",
            "Telangana Secretariat",
            "RTI Telangana Secretariat",
            "RTI Puducherry RTI Cell – Chief Secretariat",
            "RTI Puducherry RTI Cell - Chief Secretariat",
        ];
        for name in names {
            assert_eq!(
                has_document(name),
                resolve_document_path(name).is_some(),
                "{name:?}"
            );
        }
    }

    #[test]
    fn test_entries_for_state() {
        let delhi: Vec<_> = DOCUMENTS.entries_for_state("delhi").collect();
        assert_eq!(delhi.len(), 54);
        assert!(delhi.iter().all(|e| e.path.starts_with("delhi/")));
        assert_eq!(DOCUMENTS.entries_for_state("goa").count(), 0);
    }

    #[test]
    fn test_first_registration_wins() {
        let entry = |path: &str| DocumentEntry {
            name: "RTI Goa Police".into(),
            path: path.into(),
            state: "goa",
            category: None,
        };
        let table = DocumentTable::new(vec![entry("first.pdf"), entry("second.pdf")]);
        assert_eq!(table.path("RTI Goa Police"), Some("first.pdf"));
    }

    #[test]
    fn test_document_url_encodes_segments() {
        assert_eq!(
            document_url(
                "/assets/PDF/",
                "delhi/RTI Delhi Police & Security/RTI Template For Delhi Police.pdf"
            ),
            "/assets/PDF/delhi/RTI%20Delhi%20Police%20%26%20Security/RTI%20Template%20For%20Delhi%20Police.pdf"
        );
        assert_eq!(
            document_url("", "RTI_Tamil_Nadu_Energy_Department.pdf"),
            "RTI_Tamil_Nadu_Energy_Department.pdf"
        );
        assert_eq!(
            document_url("https://cdn.example.com/pdf", "a/(b),c.pdf"),
            "https://cdn.example.com/pdf/a/%28b%29%2Cc.pdf"
        );
    }
}
