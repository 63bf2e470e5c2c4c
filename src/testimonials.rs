//! Citizen testimonials shown on state pages.

use serde::Serialize;
use std::sync::LazyLock;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub quote: String,
    pub name: String,
    pub location: String,
    pub role: String,
    pub image_reference: String,
}

/// Heading, intro line and cards of one testimonial block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestimonialSection {
    pub heading: String,
    pub intro: String,
    pub items: Vec<Testimonial>,
}

/// `(state identifier, section)`
static TESTIMONIALS: LazyLock<Vec<(&'static str, TestimonialSection)>> =
    LazyLock::new(|| vec![("puducherry", puducherry())]);

/// Testimonial block for a state, if the state page has one.
pub fn testimonials_for(state: &str) -> Option<&'static TestimonialSection> {
    let state = state.to_lowercase();
    TESTIMONIALS
        .iter()
        .find(|(id, _)| *id == state)
        .map(|(_, section)| section)
}

fn puducherry() -> TestimonialSection {
    let item = |quote: &str, name: &str, role: &str, image: &str| Testimonial {
        quote: quote.into(),
        name: name.into(),
        location: "Puducherry".into(),
        role: role.into(),
        image_reference: image.into(),
    };

    TestimonialSection {
        heading: "What Citizens Say".into(),
        intro: "Thousands of Puducherry citizens have successfully obtained government information through our RTI filing service.".into(),
        items: vec![
            item(
                "I needed clarification on property tax assessment in Puducherry. FileMyRTI helped me file the RTI correctly and I received the reply within the expected time.",
                "Arun Kumar",
                "Small Business Owner",
                "/images/arun.webp",
            ),
            item(
                "I needed information about a delayed municipal certificate. FileMyRTI helped me get an official response without visiting the office.",
                "Revathi S",
                "Office Assistant",
                "/images/revati.webp",
            ),
            item(
                "I needed details about scholarship eligibility. FileMyRTI helped me receive accurate information from the department.",
                "Karthik R",
                "College Student",
                "/images/karthik.webp",
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_puducherry_testimonials() {
        let section = testimonials_for("puducherry").unwrap();

        assert_eq!(section.heading, "What Citizens Say");
        assert_eq!(section.items.len(), 3);
        assert_eq!(section.items[0].name, "Arun Kumar");
        assert_eq!(section.items[1].image_reference, "/images/revati.webp");
        assert!(section.items.iter().all(|t| t.location == "Puducherry"));
    }

    #[test]
    fn test_lookup_ignores_case() {
        assert!(testimonials_for("PUDUCHERRY").is_some());
    }

    #[test]
    fn test_states_without_testimonials() {
        assert!(testimonials_for("telangana").is_none());
        assert!(testimonials_for("").is_none());
    }
}
