use crate::catalog::template::{self, Naming, ProcessFlavor};
use crate::catalog::types::{DesignTheme, Hero, StateRecord};

pub const NAME: &str = "Tamil Nadu";
const COMMISSION: &str = "Tamil Nadu Information Commission";

pub const DEPARTMENTS: &[&str] = &[
    "General Administration Department",
    "Home, Prohibition & Excise Department",
    "Police Department",
    "Finance Department",
    "Planning, Development & Special Initiatives Department",
    "Revenue & Disaster Management Department",
    "Commercial Taxes & Registration Department",
    "Registration Department",
    "School Education Department",
    "Higher Education Department",
    "Technical Education Department",
    "Health & Family Welfare Department",
    "Public Works Department",
    "Rural Development & Panchayat Raj Department",
    "Housing & Urban Development Department",
    "Transport Department",
    "Agriculture & Farmers Welfare Department",
    "Animal Husbandry, Dairying & Fisheries Department",
    "Forest & Environment Department",
    "Industries Department",
    "Tourism, Culture & Religious Endowments Department",
    "Social Welfare & Nutritious Meal Programme Department",
    "Labour Welfare & Skill Development Department",
    "Backward Classes, Most Backward Classes & Minorities Welfare Department",
    "Adi Dravidar & Tribal Welfare Department",
    "Women & Child Development Department",
    "Youth Welfare & Sports Development Department",
    "Information & Public Relations Department",
    "Information Technology Department",
    "Energy Department",
    "Water Resources Department",
    "Law, Courts & Prisons Department",
    "Election Department",
];

pub fn record() -> StateRecord {
    StateRecord {
        identifier: "tamil-nadu".into(),
        display_name: NAME.into(),
        supported_languages: vec!["English".into(), "Hindi".into(), "Tamil".into()],
        design_theme: DesignTheme::Default,
        hero: Hero {
            title: "File RTI Online for Tamil Nadu Government Departments".into(),
            subtitle: "Get expert-drafted RTI applications for Revenue, Police, Education, Transport and more – without visiting offices.".into(),
            image_reference: "/images/hero.webp".into(),
            call_to_action_label: "File RTI for Tamil Nadu".into(),
        },
        description: None,
        rti_portal_url: None,
        departments: template::departments(NAME, Naming::RtiPrefixed, DEPARTMENTS),
        sections: Vec::new(),
        highlights: template::highlights(NAME, true),
        faqs: template::standard_faqs(NAME),
        onboarding_steps: template::onboarding_steps(NAME, ProcessFlavor::Commission(COMMISSION)),
        regulatory_commission_name: COMMISSION.into(),
        application_fee_display: "₹10".into(),
    }
}
