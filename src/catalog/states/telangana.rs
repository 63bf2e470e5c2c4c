use crate::catalog::template::{self, Naming, ProcessFlavor};
use crate::catalog::types::{DesignTheme, Faq, StateRecord};

const NAME: &str = "Telangana";

const DEPARTMENTS: &[&str] = &[
    "Secretariat",
    "Revenue Department",
    "Police Department",
    "Education Department",
    "Health & Family Welfare Department",
    "Transport Department",
    "Public Works Department (PWD)",
    "Irrigation & CAD Department",
    "Rural Development Department",
    "Municipal Administration & Urban Development Department",
    "Registration & Stamps Department",
    "Commercial Taxes Department",
    "Labour Department",
    "Social Welfare Department",
    "Scheduled Castes Development Department",
    "Scheduled Tribes Welfare Department",
    "Women & Child Development Department",
    "Backward Classes Welfare Department",
    "Minority Welfare Department",
    "Youth & Sports Department",
    "Information & Public Relations Department",
    "Finance Department",
    "Planning Department",
    "Home Department",
    "Law Department",
    "Forest Department",
    "Environment Department",
    "Mines & Geology Department",
    "Industries & Commerce Department",
    "Information Technology Department",
    "Tourism & Culture Department",
    "Housing Department",
    "Water Resources Department",
    "Energy Department",
    "Agriculture & Cooperation Department",
    "Food & Civil Supplies Department",
    "Panchayat Raj & Rural Development Department",
    "Urban Development Department",
    "Medical & Health Department",
    "School Education Department",
    "Higher Education Department",
    "Technical Education Department",
    "Animal Husbandry Department",
    "Fisheries Department",
    "Horticulture Department",
    "Sericulture Department",
    "Handlooms & Textiles Department",
    "Endowments Department",
    "BC Welfare Department",
];

const FAQS: &[(&str, &str)] = &[
    (
        "Can I file RTI to Telangana Secretariat online?",
        "Yes, you can file RTI applications to Telangana Secretariat and all state departments online through FileMyRTI. We handle drafting, submission, and tracking for you.",
    ),
    (
        "How long does RTI reply take in Telangana?",
        "As per RTI Act 2005, government departments in Telangana must respond within 30 days. In case of information concerning life or liberty, the response must be provided within 48 hours.",
    ),
    (
        "Can I file RTI for land records and property disputes in Telangana?",
        "Yes, you can file RTI applications for land records, property documents, and related information from Telangana Revenue Department, Registration & Stamps Department, and other relevant authorities.",
    ),
    (
        "Can I file RTI without visiting Meeseva or government offices?",
        "Yes, with FileMyRTI, you can file RTI applications completely online without visiting Meeseva centers or government offices. We handle all the paperwork and submission for you.",
    ),
];

pub fn record() -> StateRecord {
    StateRecord {
        identifier: "telangana".into(),
        display_name: NAME.into(),
        supported_languages: vec!["English".into(), "Telugu".into(), "Urdu".into()],
        design_theme: DesignTheme::Telangana,
        hero: template::simplest_way_hero(NAME, "/images/telangana-banner.jpg"),
        description: None,
        rti_portal_url: None,
        departments: template::departments(NAME, Naming::StatePrefixed, DEPARTMENTS),
        sections: Vec::new(),
        highlights: template::highlights(NAME, false),
        faqs: FAQS
            .iter()
            .map(|(question, answer)| Faq {
                question: (*question).into(),
                answer: (*answer).into(),
            })
            .collect(),
        onboarding_steps: template::onboarding_steps(NAME, ProcessFlavor::StateRules),
        regulatory_commission_name: "Telangana State Information Commission (TSIC)".into(),
        application_fee_display: "₹10".into(),
    }
}
