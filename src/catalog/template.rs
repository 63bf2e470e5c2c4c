//! Shared page copy, parameterized by state display name.
//!
//! State pages differ mostly by the state name embedded in the text. The
//! builders here produce that text so each state module only carries what is
//! actually specific to it.

use super::types::{DepartmentSection, Faq, Hero, OnboardingStep};

/// How a base department name becomes its display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Naming {
    /// `"Revenue Department"`
    Plain,
    /// `"Telangana Revenue Department"`
    StatePrefixed,
    /// `"RTI Tamil Nadu Revenue Department"`
    RtiPrefixed,
}

impl Naming {
    pub fn apply(self, state: &str, base: &str) -> String {
        match self {
            Self::Plain => base.to_owned(),
            Self::StatePrefixed => format!("{state} {base}"),
            Self::RtiPrefixed => format!("RTI {state} {base}"),
        }
    }
}

/// Wording of the drafting and appeal steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessFlavor<'a> {
    /// Drafts follow "<state> state rules", appeals are generic.
    StateRules,
    /// Drafts follow the named commission's guidelines, appeals go there too.
    Commission(&'a str),
}

pub fn departments(state: &str, naming: Naming, bases: &[&str]) -> Vec<String> {
    bases.iter().map(|base| naming.apply(state, base)).collect()
}

/// Expand `(category, bases)` groups into sections of resolvable names.
pub fn sections(state: &str, groups: &[(&str, &[&str])]) -> Vec<DepartmentSection> {
    groups
        .iter()
        .map(|(category, bases)| DepartmentSection {
            category: (*category).to_owned(),
            items: departments(state, Naming::RtiPrefixed, bases),
        })
        .collect()
}

/// Flat listing of every base name across `groups`, in group order.
pub fn flatten(state: &str, naming: Naming, groups: &[(&str, &[&str])]) -> Vec<String> {
    groups
        .iter()
        .flat_map(|(_, bases)| bases.iter())
        .map(|base| naming.apply(state, base))
        .collect()
}

/// Hero used by states with the "simplest way" banner.
pub fn simplest_way_hero(state: &str, image: &str) -> Hero {
    Hero {
        title: format!(
            "File RTI Online in {state} — Simplest Way to Get Government Information"
        ),
        subtitle: format!(
            "Draft and file RTI applications to {state} Government departments and offices without visiting in person."
        ),
        image_reference: image.to_owned(),
        call_to_action_label: format!("Start RTI for {state}"),
    }
}

pub fn highlights(state: &str, all_districts: bool) -> Vec<String> {
    let mut highlights = vec![
        format!("Covered: {state} Secretariat & State Departments"),
        "Expert-drafted RTI questions".to_owned(),
        "Online filing and tracking support".to_owned(),
    ];
    if all_districts {
        highlights.push(format!("Service across all districts of {state}"));
    }
    highlights
}

/// `(question, answer)` shared by most state pages; `{state}` is substituted.
const STANDARD_FAQS: &[(&str, &str)] = &[
    (
        "Can I file RTI online in {state}?",
        "Yes, you can file RTI applications for {state} state departments online through FileMyRTI without visiting government offices.",
    ),
    (
        "Do I need to visit any government office to file RTI?",
        "No. The RTI filing process can be completed fully online with assistance from FileMyRTI.",
    ),
    (
        "What is the fee for filing an RTI application?",
        "The RTI application fee in {state} is ₹10 for state departments. BPL cardholders are exempted from paying fees.",
    ),
    (
        "How long does it take to receive a response?",
        "As per the RTI Act, the Public Information Officer must provide information within 30 days from the date of receipt. For matters concerning life and liberty, the response must be given within 48 hours.",
    ),
    (
        "Can RTI be filed for state government departments in {state}?",
        "Yes, RTI can be filed for {state} state government departments and public authorities.",
    ),
    (
        "Is RTI filing available for individual citizens?",
        "Yes, any Indian citizen can file an RTI application.",
    ),
];

pub fn standard_faqs(state: &str) -> Vec<Faq> {
    STANDARD_FAQS
        .iter()
        .map(|(question, answer)| Faq {
            question: question.replace("{state}", state),
            answer: answer.replace("{state}", state),
        })
        .collect()
}

pub fn onboarding_steps(state: &str, flavor: ProcessFlavor<'_>) -> Vec<OnboardingStep> {
    let (guidelines, appeals) = match flavor {
        ProcessFlavor::StateRules => (format!("{state} state rules"), String::new()),
        ProcessFlavor::Commission(commission) => (
            format!("{commission} guidelines"),
            format!(" to {commission}"),
        ),
    };

    vec![
        OnboardingStep {
            step_number: 1,
            title: format!("Share your RTI details for {state} department or office"),
            description: format!(
                "Tell us what information you need from any {state} Government department or office."
            ),
        },
        OnboardingStep {
            step_number: 2,
            title: format!(
                "Our team drafts your RTI as per RTI Act, 2005 and {state} rules"
            ),
            description: format!(
                "Our experts draft a professional RTI application compliant with RTI Act 2005 and {guidelines}."
            ),
        },
        OnboardingStep {
            step_number: 3,
            title: "We file, track, and help you with replies or appeals".to_owned(),
            description: format!(
                "We handle submission, fee payment, tracking, and assist with first/second appeals{appeals} if needed."
            ),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naming_variants() {
        assert_eq!(
            Naming::Plain.apply("Goa", "Revenue Department"),
            "Revenue Department"
        );
        assert_eq!(
            Naming::StatePrefixed.apply("Goa", "Revenue Department"),
            "Goa Revenue Department"
        );
        assert_eq!(
            Naming::RtiPrefixed.apply("Goa", "Revenue Department"),
            "RTI Goa Revenue Department"
        );
    }

    #[test]
    fn test_sections_prefix_items() {
        let groups: &[(&str, &[&str])] =
            &[("Finance", &["Finance Department", "Excise Department"])];
        let sections = sections("Puducherry", groups);

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].category, "Finance");
        assert_eq!(
            sections[0].items,
            vec![
                "RTI Puducherry Finance Department",
                "RTI Puducherry Excise Department",
            ]
        );
    }

    #[test]
    fn test_flatten_keeps_group_order() {
        let groups: &[(&str, &[&str])] = &[("A", &["One", "Two"]), ("B", &["Three"])];
        assert_eq!(
            flatten("X", Naming::Plain, groups),
            vec!["One", "Two", "Three"]
        );
    }

    #[test]
    fn test_highlights_districts() {
        assert_eq!(highlights("Goa", false).len(), 3);
        let with = highlights("Goa", true);
        assert_eq!(with.len(), 4);
        assert_eq!(with[3], "Service across all districts of Goa");
    }

    #[test]
    fn test_onboarding_state_rules_wording() {
        let steps = onboarding_steps("Telangana", ProcessFlavor::StateRules);
        assert_eq!(
            steps[1].description,
            "Our experts draft a professional RTI application compliant with RTI Act 2005 and Telangana state rules."
        );
        assert_eq!(
            steps[2].description,
            "We handle submission, fee payment, tracking, and assist with first/second appeals if needed."
        );
    }

    #[test]
    fn test_onboarding_commission_wording() {
        let steps = onboarding_steps(
            "Tamil Nadu",
            ProcessFlavor::Commission("Tamil Nadu Information Commission"),
        );
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].step_number, 1);
        assert_eq!(
            steps[2].description,
            "We handle submission, fee payment, tracking, and assist with first/second appeals to Tamil Nadu Information Commission if needed."
        );
    }
}
