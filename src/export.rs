//! JSON data files for the page renderer.
//!
//! # Output Layout
//!
//! ```text
//! <export.output>/
//! ├── site.json          # title, url, documents base
//! ├── states.json        # every state record, catalog order
//! ├── documents.json     # every registered document with its URL
//! ├── telangana.json     # page data: record + department links
//! ├── tamil-nadu.json
//! └── puducherry.json
//! ```

use crate::{
    catalog::{STATE_CATALOG, StateRecord},
    config::SiteConfig,
    log,
    resolver::{DOCUMENTS, DocumentEntry, document_url, resolve_document_path},
    testimonials::{TestimonialSection, testimonials_for},
};
use anyhow::{Context, Result};
use serde::Serialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Page Data
// ============================================================================

/// Everything a state page needs, in one file.
#[derive(Debug, Serialize)]
pub struct StatePage {
    pub state: &'static StateRecord,
    pub departments: Vec<DepartmentLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testimonials: Option<&'static TestimonialSection>,
}

/// A department card. Unregistered departments carry no link.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentLink {
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_path: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_url: Option<String>,
}

/// Site identity, for page headers and absolute links.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SiteInfo<'a> {
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'a str>,
    documents_base: &'a str,
}

#[derive(Debug, Serialize)]
struct DocumentLink {
    #[serde(flatten)]
    entry: &'static DocumentEntry,
    url: String,
}

impl StatePage {
    pub fn new(state: &'static StateRecord, base_url: &str) -> Self {
        let departments = state
            .document_names()
            .into_iter()
            .map(|name| {
                let document_path = resolve_document_path(name);
                DepartmentLink {
                    name,
                    document_path,
                    document_url: document_path.map(|path| document_url(base_url, path)),
                }
            })
            .collect();

        Self {
            state,
            departments,
            testimonials: testimonials_for(&state.identifier),
        }
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Write all data files; returns the written paths.
pub fn export_site(config: &SiteConfig) -> Result<Vec<PathBuf>> {
    let output = &config.export.output;
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory {}", output.display()))?;

    let base_url = config.documents_base();
    let states = STATE_CATALOG.records();
    let mut written = Vec::with_capacity(states.len() + 3);

    let site = SiteInfo {
        title: &config.base.title,
        url: config.base.url.as_deref(),
        documents_base: &base_url,
    };
    let site_path = output.join("site.json");
    written.push(write_json(config, &site_path, &site)?);
    let states_path = output.join("states.json");
    written.push(write_json(config, &states_path, states)?);

    let documents: Vec<DocumentLink> = DOCUMENTS
        .entries()
        .iter()
        .map(|entry| DocumentLink {
            entry,
            url: document_url(&base_url, &entry.path),
        })
        .collect();
    let documents_path = output.join("documents.json");
    written.push(write_json(config, &documents_path, &documents)?);

    for state in states {
        let page = StatePage::new(state, &base_url);
        let path = output.join(format!("{}.json", state.identifier));
        written.push(write_json(config, &path, &page)?);
    }

    let title = &config.base.title;
    log!("export"; "{title}: wrote {} files to {}", written.len(), output.display());
    Ok(written)
}

fn write_json<T: Serialize + ?Sized>(
    config: &SiteConfig,
    path: &Path,
    value: &T,
) -> Result<PathBuf> {
    let json = if config.export.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    fs::write(path, json)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path.to_path_buf())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::get_state_by_identifier;
    use serde_json::Value;

    fn export_to(dir: &Path, pretty: bool) -> Vec<PathBuf> {
        let mut config = SiteConfig::default();
        config.export.output = dir.join("data");
        config.export.pretty = pretty;
        export_site(&config).unwrap()
    }

    fn read(path: &Path) -> Value {
        let content = fs::read_to_string(path).unwrap();
        serde_json::from_str(&content).unwrap()
    }

    #[test]
    fn test_export_writes_all_files() {
        let dir = tempfile::tempdir().unwrap();
        let written = export_to(dir.path(), true);
        let out = dir.path().join("data");

        assert_eq!(written.len(), 6);
        let files = [
            "site.json",
            "states.json",
            "documents.json",
            "telangana.json",
            "tamil-nadu.json",
            "puducherry.json",
        ];
        for file in files {
            assert!(out.join(file).is_file(), "{file}");
        }

        let states = read(&out.join("states.json"));
        let ids: Vec<_> = states
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["identifier"].as_str().unwrap())
            .collect();
        assert_eq!(ids, ["telangana", "tamil-nadu", "puducherry"]);
    }

    #[test]
    fn test_documents_file_carries_urls() {
        let dir = tempfile::tempdir().unwrap();
        export_to(dir.path(), false);

        let documents = read(&dir.path().join("data/documents.json"));
        let documents = documents.as_array().unwrap();
        assert_eq!(documents.len(), DOCUMENTS.entries().len());

        let finance = documents
            .iter()
            .find(|d| d["name"] == "RTI Puducherry Finance Department")
            .unwrap();
        assert_eq!(finance["state"], "puducherry");
        assert_eq!(
            finance["url"],
            "/assets/PDF/RTI_Puducherry_ALL_Departments/RTI_Puducherry_Finance_Department.pdf"
        );
    }

    #[test]
    fn test_compact_output_is_single_line() {
        let dir = tempfile::tempdir().unwrap();
        export_to(dir.path(), false);
        let states_path = dir.path().join("data/states.json");
        let content = fs::read_to_string(states_path).unwrap();
        assert!(!content.contains('\n'));
    }

    #[test]
    fn test_puducherry_page() {
        let dir = tempfile::tempdir().unwrap();
        export_to(dir.path(), true);
        let page = read(&dir.path().join("data/puducherry.json"));

        assert_eq!(page["state"]["displayName"], "Puducherry");
        let items = page["testimonials"]["items"].as_array().unwrap();
        assert_eq!(items.len(), 3);

        let departments = page["departments"].as_array().unwrap();
        assert_eq!(departments.len(), 61);
        assert!(departments.iter().all(|d| d.get("documentUrl").is_some()));
    }

    #[test]
    fn test_telangana_page_has_unlinked_departments() {
        let telangana = get_state_by_identifier("telangana").unwrap();
        let page = StatePage::new(telangana, "/assets/PDF");

        assert!(page.testimonials.is_none());
        assert_eq!(
            page.departments[0],
            DepartmentLink {
                name: "Telangana Secretariat",
                document_path: None,
                document_url: None,
            }
        );

        let json = serde_json::to_value(&page.departments[0]).unwrap();
        assert!(json.get("documentPath").is_none());
    }

    #[test]
    fn test_tamil_nadu_links_use_base_url() {
        let page = StatePage::new(
            get_state_by_identifier("tamil-nadu").unwrap(),
            "https://cdn.example.com/pdf/",
        );
        let first = &page.departments[0];

        assert_eq!(
            first.name,
            "RTI Tamil Nadu General Administration Department"
        );
        assert_eq!(
            first.document_url.as_deref().unwrap(),
            "https://cdn.example.com/pdf/RTI_Tamil_Nadu_General_Administration_Department.pdf"
        );
    }

    #[test]
    fn test_export_fails_when_output_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("data");
        fs::write(&blocker, "").unwrap();

        let mut config = SiteConfig::default();
        config.export.output = blocker;
        let message = export_site(&config).unwrap_err().to_string();
        assert!(message.contains("Failed to create output directory"));
    }

    #[test]
    fn test_site_url_makes_links_absolute() {
        let dir = tempfile::tempdir().unwrap();
        let toml = r#"
            [base]
            title = "RTI Help"
            url = "https://rti.example.com/"
        "#;
        let mut config = SiteConfig::from_str(toml).unwrap();
        config.export.output = dir.path().to_path_buf();
        export_site(&config).unwrap();

        let site = read(&dir.path().join("site.json"));
        assert_eq!(site["title"], "RTI Help");
        assert_eq!(site["url"], "https://rti.example.com/");
        assert_eq!(site["documentsBase"], "https://rti.example.com/assets/PDF");

        let page = read(&dir.path().join("tamil-nadu.json"));
        let url = page["departments"][0]["documentUrl"].as_str().unwrap();
        let prefix = "https://rti.example.com/assets/PDF/RTI_Tamil_Nadu_";
        assert!(url.starts_with(prefix));
    }

    #[test]
    fn test_site_file_without_url() {
        let dir = tempfile::tempdir().unwrap();
        export_to(dir.path(), true);

        let site = read(&dir.path().join("data/site.json"));
        assert_eq!(site["title"], "FileMyRTI");
        assert!(site.get("url").is_none());
        assert_eq!(site["documentsBase"], "/assets/PDF");
    }
}
