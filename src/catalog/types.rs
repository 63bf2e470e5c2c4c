//! Record types for the state catalog.
//!
//! These types are serialized to JSON for the rendering layer, so field names
//! follow the camelCase convention of the site front end.

use serde::Serialize;

/// Layout variant a state page is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DesignTheme {
    Telangana,
    Puducherry,
    #[default]
    Default,
}

/// Hero banner content at the top of a state page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    /// Image path, served by the hosting layer.
    pub image_reference: String,
    pub call_to_action_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

/// One step of the "how it works" block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingStep {
    pub step_number: u32,
    pub title: String,
    pub description: String,
}

/// A titled group of department names.
///
/// Items are the full display names, including the `RTI <state>` prefix,
/// so they can be passed to the resolver unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentSection {
    pub category: String,
    pub items: Vec<String>,
}

/// Complete configuration of one supported state or union territory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateRecord {
    /// Lowercase slug, unique across the catalog.
    pub identifier: String,
    pub display_name: String,
    pub supported_languages: Vec<String>,
    pub design_theme: DesignTheme,
    pub hero: Hero,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rti_portal_url: Option<String>,

    /// Flat department listing, in display order.
    pub departments: Vec<String>,

    /// Categorised listing. Empty for states without one.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<DepartmentSection>,

    pub highlights: Vec<String>,
    pub faqs: Vec<Faq>,
    pub onboarding_steps: Vec<OnboardingStep>,
    pub regulatory_commission_name: String,
    pub application_fee_display: String,
}

impl StateRecord {
    /// Names a page looks up documents for.
    ///
    /// Sectioned states link their section items; the rest link the flat list.
    pub fn document_names(&self) -> Vec<&str> {
        if self.sections.is_empty() {
            self.departments.iter().map(String::as_str).collect()
        } else {
            self.sections
                .iter()
                .flat_map(|section| section.items.iter().map(String::as_str))
                .collect()
        }
    }
}
