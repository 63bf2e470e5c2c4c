//! Catalog / document table consistency report.
//!
//! A department without a registered document still renders on its state
//! page; it just has no download link. The report lists such names.

use crate::catalog::{STATE_CATALOG, StateRecord};
use crate::resolver::has_document;
use serde::Serialize;

/// Departments of one state that resolve to no document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateReport {
    pub state: &'static str,
    pub total: usize,
    pub missing: Vec<&'static str>,
}

impl StateReport {
    fn new(record: &'static StateRecord) -> Self {
        let names = record.document_names();
        let total = names.len();
        let missing = names
            .into_iter()
            .filter(|name| !has_document(name))
            .collect();
        Self {
            state: record.identifier.as_str(),
            total,
            missing,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// One report per catalog state, in catalog order.
pub fn check_catalog() -> Vec<StateReport> {
    STATE_CATALOG
        .records()
        .iter()
        .map(StateReport::new)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(state: &str) -> StateReport {
        check_catalog()
            .into_iter()
            .find(|r| r.state == state)
            .unwrap()
    }

    #[test]
    fn test_one_report_per_state() {
        let states: Vec<_> = check_catalog().iter().map(|r| r.state).collect();
        assert_eq!(states, ["telangana", "tamil-nadu", "puducherry"]);
    }

    #[test]
    fn test_tamil_nadu_and_puducherry_complete() {
        let tamil_nadu = report("tamil-nadu");
        assert!(tamil_nadu.is_complete());
        assert_eq!(tamil_nadu.total, 33);

        let puducherry = report("puducherry");
        assert!(puducherry.is_complete(), "{:?}", puducherry.missing);
        assert_eq!(puducherry.total, 61);
    }

    #[test]
    fn test_telangana_listing_names_do_not_resolve() {
        // Listing names are "Telangana X"; the table registers "RTI Telangana X".
        let telangana = report("telangana");
        assert_eq!(telangana.total, 49);
        assert_eq!(telangana.missing.len(), 49);
        assert_eq!(telangana.missing[0], "Telangana Secretariat");
        assert!(!telangana.is_complete());
    }
}
