use crate::catalog::template::{self, Naming, ProcessFlavor};
use crate::catalog::types::{DesignTheme, StateRecord};

pub const NAME: &str = "Puducherry";
const COMMISSION: &str = "Puducherry Information Commission";

/// Categorised departments. The flat listing and the sections are both
/// generated from this table.
const GROUPS: &[(&str, &[&str])] = &[
    (
        "Health & Family Welfare",
        &[
            "Health & Family Welfare Department",
            "Directorate of Health & Family Welfare Services",
            "Indira Gandhi Government General Hospital & PGI",
            "Directorate of Medical Education",
            "AYUSH Directorate",
        ],
    ),
    (
        "Education & Skill Development",
        &[
            "School Education Department",
            "Directorate of School Education",
            "Higher & Technical Education Department",
            "Directorate of Higher & Technical Education",
            "Directorate of Collegiate Education",
        ],
    ),
    (
        "Revenue & District Administration",
        &[
            "Revenue Department",
            "District Collectorate, Puducherry",
            "Taluk Offices",
            "Directorate of Survey & Land Records",
            "Registration Department",
        ],
    ),
    (
        "Public Works & Infrastructure",
        &[
            "Public Works Department (PWD)",
            "Electricity Department",
            "Public Health Engineering Department (PHED)",
            "Roads & Bridges Division",
        ],
    ),
    (
        "Home, Police & Law",
        &[
            "Home Department",
            "Police Department, Puducherry",
            "Fire & Emergency Services",
            "Prison Department",
            "Prosecution Department",
        ],
    ),
    (
        "Local Administration & Municipalities",
        &[
            "Local Administration Department",
            "Puducherry Municipality",
            "Oulgaret Municipality",
            "Commune Panchayats",
            "Town & Country Planning Department",
        ],
    ),
    (
        "Agriculture & Rural Economy",
        &[
            "Agriculture Department",
            "Horticulture Department",
            "Fisheries Department",
            "Animal Husbandry & Veterinary Services",
            "Agricultural Marketing Board",
        ],
    ),
    (
        "Industries, Labour & Employment",
        &[
            "Industries & Commerce Department",
            "Labour Department",
            "Employment Exchange",
            "Factories & Boilers Inspectorate",
        ],
    ),
    (
        "Social Welfare & Community Services",
        &[
            "Social Welfare Department",
            "Directorate of Women & Child Development",
            "Adi Dravidar Welfare Department",
            "Minority Welfare Department",
            "Department for the Welfare of Differently Abled Persons",
        ],
    ),
    (
        "Transport & Communication",
        &[
            "Transport Department",
            "Regional Transport Office (RTO)",
            "Motor Vehicles Department",
            "Ports Department",
        ],
    ),
    (
        "Finance & Taxation",
        &[
            "Finance Department",
            "Commercial Taxes Department (GST)",
            "Excise Department",
            "Treasury & Accounts Department",
        ],
    ),
    (
        "Environment & Climate",
        &[
            "Forest Department",
            "Department of Environment & Climate Change",
            "Puducherry Pollution Control Committee (PPCC)",
        ],
    ),
    (
        "Information Technology & Governance",
        &[
            "Planning & Research Department",
            "Information Technology Department",
            "Directorate of Economics & Statistics",
            "National Informatics Centre (NIC), Puducherry",
        ],
    ),
    (
        "RTI Authorities & Information Commission",
        &[
            "State Information Commission, Puducherry",
            "RTI Cell – Chief Secretariat",
            "Public Information Officers (Department-wise)",
        ],
    ),
];

pub fn record() -> StateRecord {
    StateRecord {
        identifier: "puducherry".into(),
        display_name: NAME.into(),
        supported_languages: vec![
            "English".into(),
            "Tamil".into(),
            "Telugu".into(),
            "Malayalam".into(),
            "French".into(),
        ],
        design_theme: DesignTheme::Puducherry,
        hero: template::simplest_way_hero(NAME, "/images/puducherry.webp"),
        description: None,
        rti_portal_url: None,
        departments: template::flatten(NAME, Naming::Plain, GROUPS),
        sections: template::sections(NAME, GROUPS),
        highlights: template::highlights(NAME, true),
        faqs: template::standard_faqs(NAME),
        onboarding_steps: template::onboarding_steps(NAME, ProcessFlavor::Commission(COMMISSION)),
        regulatory_commission_name: COMMISSION.into(),
        application_fee_display: "₹10".into(),
    }
}
