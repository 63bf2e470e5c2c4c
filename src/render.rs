//! HTML fragments for page blocks.
//!
//! Output is plain markup with no styling or animation wrappers:
//!
//! ```html
//! <section class="testimonials">
//!   <h2>What Citizens Say</h2>
//!   <p>...</p>
//!   <ul>
//!     <li>
//!       <blockquote>"..."</blockquote>
//!       <img src="/images/arun.webp" alt="Arun Kumar" loading="lazy">
//!       <p class="name">Arun Kumar</p>
//!       ...
//!     </li>
//!   </ul>
//! </section>
//! ```

use crate::testimonials::TestimonialSection;

/// Render a testimonial block, one list item per testimonial.
pub fn testimonials_html(section: &TestimonialSection) -> String {
    let mut html = String::with_capacity(1024);

    html.push_str("<section class=\"testimonials\">\n");
    html.push_str(&format!("  <h2>{}</h2>\n", escape_html(&section.heading)));
    html.push_str(&format!("  <p>{}</p>\n", escape_html(&section.intro)));
    html.push_str("  <ul>\n");

    for item in &section.items {
        html.push_str("    <li>\n");
        html.push_str(&format!(
            "      <blockquote>\"{}\"</blockquote>\n",
            escape_html(&item.quote)
        ));
        html.push_str(&format!(
            "      <img src=\"{}\" alt=\"{}\" loading=\"lazy\">\n",
            escape_html(&item.image_reference),
            escape_html(&item.name)
        ));
        html.push_str(&format!(
            "      <p class=\"name\">{}</p>\n",
            escape_html(&item.name)
        ));
        html.push_str(&format!(
            "      <p class=\"role\">{}</p>\n",
            escape_html(&item.role)
        ));
        html.push_str(&format!(
            "      <p class=\"location\">{}</p>\n",
            escape_html(&item.location)
        ));
        html.push_str("    </li>\n");
    }

    html.push_str("  </ul>\n");
    html.push_str("</section>\n");
    html
}

/// Escape text for use in element content and quoted attributes.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
