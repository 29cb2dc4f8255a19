//! The informational pages

use super::layout::render_layout;
use super::{escape, Page, PageContext};
use crate::lead::models::Plan;

const INDUSTRIES: [&str; 6] = [
    "Shopping malls & centers",
    "Hospitals & clinics",
    "Schools & universities",
    "Government complexes",
    "Construction sites",
    "Sports & business complexes",
];

const STEPS: [(&str, &str); 4] = [
    (
        "1) Brand & environment analysis",
        "We learn your vision, values, customer flow, and the real-world context where signage must work.",
    ),
    (
        "2) Signage strategy & specification",
        "We define the right size, material, color, font, wording, and placement so directions are clear and consistent.",
    ),
    (
        "3) Implementation support (optional)",
        "If you need execution, we connect you to vetted manufacturers and installers and coordinate delivery to completion.",
    ),
    (
        "4) Results",
        "Less staff time wasted guiding people, faster customer movement, reduced congestion, and a stronger professional reputation.",
    ),
];

const IMPACTS: [(&str, &str); 3] = [
    (
        "Reduce labour cost",
        "Employees spend less time guiding customers and more time doing productive work.",
    ),
    (
        "Improve flow & safety",
        "Clear direction reduces delays, overcrowding, and confusion.",
    ),
    (
        "Build reputation & loyalty",
        "Customers feel respected when they can find what they want quickly.",
    ),
];

/// Renders one of the static pages. Form pages go through [`super::forms`].
pub fn render_info_page(page: Page, context: &PageContext<'_>) -> String {
    let body = match page {
        Page::Home => home(),
        Page::Services => services(context),
        Page::Industries => industries(),
        Page::HowItWorks => how_it_works(),
        Page::Impact => impact(),
        _ => hero(page.title(), ""),
    };
    render_layout(page, context, &body)
}

fn hero(headline: &str, lead: &str) -> String {
    let lead = if lead.is_empty() {
        String::new()
    } else {
        format!("\n  <p>{}</p>", escape(lead))
    };
    format!(
        "<section class=\"hero\">\n  <h1>{}</h1>{}\n</section>",
        escape(headline),
        lead
    )
}

fn list(items: &[&str]) -> String {
    let items: String = items
        .iter()
        .map(|item| format!("<li>{}</li>", escape(item)))
        .collect();
    format!("<ul>{}</ul>", items)
}

fn home() -> String {
    [
        hero(
            "Our DIRECTION is Your DEVELOPMENT",
            "Growing businesses through outstanding, understandable, and contextual signage.",
        ),
        r#"<section class="cta">
  <a class="btn-primary" href="/book-consultation">Book Consultation</a>
  <a href="/how-it-works">See How It Works</a>
  <a href="/impact">Explore the Impact</a>
  <a href="/start-project">Start a Project</a>
</section>"#
            .to_string(),
        format!(
            "<section>\n  <h2>Industries we serve</h2>\n  {}\n</section>",
            list(&INDUSTRIES)
        ),
    ]
    .join("\n")
}

fn services(context: &PageContext<'_>) -> String {
    let plans: String = Plan::ALL
        .iter()
        .map(|plan| {
            let details = plan.details();
            format!(
                "<article class=\"plan\">\n  <h3>{}</h3>\n  <p class=\"price\">{}</p>\n  {}\n  <a href=\"{}\">Pay this plan</a>\n</article>",
                escape(details.title),
                escape(details.price),
                list(details.bullets),
                escape(context.links.checkout_url(details.product_id).as_str()),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    [
        hero(
            "Services",
            "Signage consultancy to plan it right, and brokerage to get it built.",
        ),
        format!(
            "<section>\n  <h2>Consultation</h2>\n{}\n  <a class=\"btn-primary\" href=\"/book-consultation\">Book Consultation</a>\n</section>",
            plans
        ),
        r#"<section>
  <h2>Brokerage</h2>
  <p>Submit your invitation to tender. We match you to vetted manufacturers and installers, then coordinate until installation is complete.</p>
  <ul><li>Client pays 5% of total project cost after installation</li><li>Manufacturer pays 5% commission on their profit</li></ul>
  <a href="/start-project">Submit Tender</a>
</section>"#
            .to_string(),
    ]
    .join("\n")
}

fn industries() -> String {
    [
        hero(
            "Industries",
            "Wherever people need to find their way, signage carries the load.",
        ),
        format!("<section>\n  {}\n</section>", list(&INDUSTRIES)),
    ]
    .join("\n")
}

fn how_it_works() -> String {
    let steps: String = STEPS
        .iter()
        .map(|(title, body)| {
            format!(
                "<article>\n  <h3>{}</h3>\n  <p>{}</p>\n</article>",
                escape(title),
                escape(body)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    [
        hero(
            "See How It Works",
            "SADOPAK SIGNWORKS helps businesses and institutions make signage outstanding, understandable, and contextual.",
        ),
        format!("<section class=\"steps\">\n{}\n</section>", steps),
        r#"<a class="btn-primary" href="/book-consultation">Book Consultation</a>"#.to_string(),
    ]
    .join("\n")
}

fn impact() -> String {
    let impacts: String = IMPACTS
        .iter()
        .map(|(title, body)| {
            format!(
                "<article>\n  <h3>{}</h3>\n  <p>{}</p>\n</article>",
                escape(title),
                escape(body)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    [
        hero(
            "Explore the Impact",
            "Better signage is not decoration. It's a system that improves efficiency, reputation, and customer loyalty.",
        ),
        format!("<section>\n{}\n</section>", impacts),
        format!(
            "<section>\n  <h2>Where this matters most</h2>\n  {}\n</section>",
            list(&INDUSTRIES)
        ),
        r#"<a class="btn-primary" href="/book-consultation">Book Consultation</a>"#.to_string(),
    ]
    .join("\n")
}
