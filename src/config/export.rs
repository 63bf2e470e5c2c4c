//! `[export]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[export]` section in rti.toml - JSON data files for the page renderer.
///
/// # Example
/// ```toml
/// [export]
/// output = "dist/_data"
/// pretty = false
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ExportConfig {
    /// Output directory, relative to the project root.
    #[serde(default = "defaults::export::output")]
    #[educe(Default = defaults::export::output())]
    pub output: PathBuf,

    /// Pretty-print JSON.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub pretty: bool,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use std::path::PathBuf;

    #[test]
    fn test_export_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();

        assert_eq!(config.export.output, PathBuf::from("public/_data"));
        assert!(config.export.pretty);
    }

    #[test]
    fn test_export_custom() {
        let config = r#"
            [export]
            output = "dist/_data"
            pretty = false
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.export.output, PathBuf::from("dist/_data"));
        assert!(!config.export.pretty);
    }
}
