//! Funnel section components

use site_shared::content::{
    self, city_profile, BRAND_NAME, DEMO_VIDEO_TITLE, DEMO_VIDEO_URL, METRICS,
    PRICING_TIERS, PROCESS_STEPS, SERVICES, TESTIMONIALS,
};
use site_shared::types::content::industry_tags;
use site_shared::SiteConfig;

use super::esc;
use crate::core::page::{LandingPage, Section};
use crate::core::ui::VideoPlaceholder;

pub fn render_section(section: Section, page: &LandingPage, config: &SiteConfig) -> String {
    match section {
        Section::Hero => hero(page, config),
        Section::Metrics => metrics(),
        Section::ClientLogos => client_logos(),
        Section::Services => services(config),
        Section::VideoDemo => video_demo(&VideoPlaceholder::new()),
        Section::Process => process(),
        Section::Testimonials => testimonials(),
        Section::Pricing => pricing(config),
        Section::Faq => faq(page),
        Section::LocalOffice => local_office(page),
        Section::FinalCta => final_cta(page, config),
    }
}

fn hero(page: &LandingPage, config: &SiteConfig) -> String {
    format!(
        r##"<section class="hero" id="hero"><h1>{}</h1><p class="lead">{}</p><div class="hero-actions"><a class="button primary" href="{}">Book a strategy call</a><a class="button secondary" href="#services">Explore services</a></div></section>"##,
        esc(page.headline),
        esc(page.subheadline),
        esc(&config.scheduling_url),
    )
}

fn metrics() -> String {
    let items: String = METRICS
        .iter()
        .map(|m| {
            format!(
                r#"<div class="metric"><span class="metric-value">{}</span><span class="metric-label">{}</span></div>"#,
                esc(m.value),
                esc(m.label)
            )
        })
        .collect();
    format!(r#"<section class="metrics">{items}</section>"#)
}

fn client_logos() -> String {
    let clients = content::clients();
    let logos: String = clients
        .iter()
        .map(|c| {
            format!(
                r#"<li class="client-logo" title="{}"><span aria-hidden="true">{}</span><span class="sr-only">{}</span></li>"#,
                esc(&c.name),
                esc(&c.abbreviation),
                esc(&c.name)
            )
        })
        .collect();
    let tags: String = industry_tags(&clients)
        .into_iter()
        .map(|tag| format!(r#"<li class="industry-tag">{}</li>"#, esc(tag)))
        .collect();
    format!(
        r#"<section class="clients"><h2>Trusted by teams across industries</h2><ul class="client-logos">{logos}</ul><ul class="industry-tags">{tags}</ul></section>"#
    )
}

fn services(config: &SiteConfig) -> String {
    let cards: String = SERVICES
        .iter()
        .map(|s| {
            format!(
                r#"<article class="service-card"><h3><a href="{}">{}</a></h3><p>{}</p></article>"#,
                esc(&config.absolute(&format!("/services/{}", s.slug))),
                esc(s.name),
                esc(s.summary)
            )
        })
        .collect();
    format!(r#"<section class="services" id="services"><h2>What we do</h2><div class="cards">{cards}</div></section>"#)
}

fn video_demo(video: &VideoPlaceholder) -> String {
    format!(
        r#"<section class="video-demo"><h2>{}</h2><div class="video-placeholder" data-state="{}" data-src="{}"><button type="button" class="video-toggle" aria-label="Play video">▶</button></div></section>"#,
        esc(DEMO_VIDEO_TITLE),
        video.state().as_str(),
        esc(DEMO_VIDEO_URL)
    )
}

fn process() -> String {
    let steps: String = PROCESS_STEPS
        .iter()
        .enumerate()
        .map(|(i, (name, detail))| {
            format!(
                r#"<li class="step"><span class="step-number">{}</span><h3>{}</h3><p>{}</p></li>"#,
                i + 1,
                esc(name),
                esc(detail)
            )
        })
        .collect();
    format!(r#"<section class="process"><h2>How we work</h2><ol class="steps">{steps}</ol></section>"#)
}

fn testimonials() -> String {
    let quotes: String = TESTIMONIALS
        .iter()
        .map(|t| {
            format!(
                r#"<figure class="testimonial"><blockquote>{}</blockquote><figcaption>{}, {} at {}</figcaption></figure>"#,
                esc(t.quote),
                esc(t.author),
                esc(t.role),
                esc(t.company)
            )
        })
        .collect();
    format!(r#"<section class="testimonials"><h2>What clients say</h2>{quotes}</section>"#)
}

fn pricing(config: &SiteConfig) -> String {
    let tiers: String = PRICING_TIERS
        .iter()
        .map(|tier| {
            let features: String = tier
                .features
                .iter()
                .map(|f| format!("<li>{}</li>", esc(f)))
                .collect();
            format!(
                r#"<article class="pricing-tier{}"><h3>{}</h3><p class="price">{} <span class="cadence">{}</span></p><ul>{}</ul><a class="button" href="{}">Get started</a></article>"#,
                if tier.highlighted { " highlighted" } else { "" },
                esc(tier.name),
                esc(tier.price),
                esc(tier.cadence),
                features,
                esc(&config.scheduling_url)
            )
        })
        .collect();
    format!(r#"<section class="pricing" id="pricing"><h2>Engagement options</h2><div class="tiers">{tiers}</div></section>"#)
}

fn faq(page: &LandingPage) -> String {
    let items: String = page
        .faqs
        .iter()
        .map(|entry| {
            format!(
                r#"<details class="faq-item"><summary>{}</summary><p>{}</p></details>"#,
                esc(&entry.question),
                esc(&entry.answer)
            )
        })
        .collect();
    format!(r#"<section class="faq" id="faq"><h2>Frequently asked questions</h2>{items}</section>"#)
}

fn local_office(page: &LandingPage) -> String {
    let Some(city) = page.city else {
        return String::new();
    };
    let profile = city_profile(city);
    let areas = profile.areas_served.join(", ");
    format!(
        r#"<section class="local-office"><h2>Our {} office</h2><address>{} {}<br>{}, {} {}<br><a href="tel:{}">{}</a></address><p>Serving {}.</p></section>"#,
        esc(profile.display_name),
        esc(BRAND_NAME),
        esc(profile.display_name),
        esc(profile.street_address),
        esc(profile.locality),
        esc(&format!("{} {}", profile.region, profile.postal_code)),
        esc(profile.phone),
        esc(profile.phone),
        esc(&areas)
    )
}

fn final_cta(page: &LandingPage, config: &SiteConfig) -> String {
    let heading = match page.city {
        Some(city) => format!("Ready to put AI to work in {}?", city_profile(city).display_name),
        None => "Ready to put AI to work?".to_string(),
    };
    format!(
        r#"<section class="final-cta"><h2>{}</h2><a class="button primary" href="{}">Book a strategy call</a><a class="button secondary" href="mailto:{}">Email us</a></section>"#,
        esc(&heading),
        esc(&config.scheduling_url),
        esc(&config.contact_email)
    )
}
