//! Document shell: head, navigation, footer and the page-level widgets

use serde_json::Value;
use site_shared::content::{city_profile, BRAND_NAME};
use site_shared::{City, SiteConfig};

use super::{esc, PageContext};
use crate::core::schema::to_script_tag;
use crate::core::ui::{ConsentState, FloatingCta, MobileMenu, CTA_SCROLL_THRESHOLD};

/// Head metadata for one document
pub struct DocumentHead<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub path: &'a str,
    pub schemas: &'a [Value],
}

pub fn render_document(ctx: &PageContext<'_>, head: &DocumentHead<'_>, main: &str) -> String {
    let canonical = ctx.config.absolute(head.path);

    let schema_tags: String = head.schemas.iter().map(to_script_tag).collect();
    let head_snippets: String = ctx.integrations.iter().map(|i| i.head_snippet()).collect();
    let body_snippets: String = ctx
        .integrations
        .iter()
        .filter_map(|i| i.body_snippet())
        .collect();

    format!(
        concat!(
            "<!DOCTYPE html>\n",
            r#"<html lang="en"><head><meta charset="utf-8">"#,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
            "<title>{title}</title>",
            r#"<meta name="description" content="{description}">"#,
            r#"<link rel="canonical" href="{canonical}">"#,
            r#"<meta property="og:title" content="{title}">"#,
            r#"<meta property="og:description" content="{description}">"#,
            r#"<meta property="og:url" content="{canonical}">"#,
            r#"<meta property="og:type" content="website">"#,
            "{schema_tags}{head_snippets}",
            r#"<script src="/static/site.js" defer></script>"#,
            "</head><body>{body_snippets}{loader}{header}<main>{main}</main>{footer}{cta}{banner}</body></html>\n",
        ),
        title = esc(head.title),
        description = esc(head.description),
        canonical = esc(&canonical),
        schema_tags = schema_tags,
        head_snippets = head_snippets,
        body_snippets = body_snippets,
        loader = loading_indicator(ctx),
        header = header(&MobileMenu::new()),
        main = main,
        footer = footer(ctx.config),
        cta = floating_cta(&FloatingCta::new(), ctx.config),
        banner = consent_banner(ctx.consent),
    )
}

fn loading_indicator(ctx: &PageContext<'_>) -> String {
    let variant = ctx.loading.as_str();
    format!(r#"<div class="page-loader loader-{variant}" data-variant="{variant}" aria-hidden="true"></div>"#)
}

fn header(menu: &MobileMenu) -> String {
    let (expanded, state) = if menu.is_open() {
        ("true", "open")
    } else {
        ("false", "closed")
    };
    let locations: String = City::ALL
        .iter()
        .map(|city| {
            format!(
                r#"<a href="{}">{}</a>"#,
                city.landing_path(),
                esc(city_profile(*city).display_name)
            )
        })
        .collect();
    format!(
        concat!(
            r#"<header class="site-header"><a class="brand" href="/">{brand}</a>"#,
            r#"<button type="button" class="menu-toggle" aria-controls="site-nav" aria-expanded="{expanded}">Menu</button>"#,
            r##"<nav id="site-nav" class="site-nav" data-state="{state}"><a href="/#services">Services</a><a href="/pricing">Pricing</a><a href="/case-studies">Case studies</a>{locations}<a href="/contact">Contact</a></nav>"##,
            "</header>",
        ),
        brand = esc(BRAND_NAME),
        expanded = expanded,
        state = state,
        locations = locations,
    )
}

fn footer(config: &SiteConfig) -> String {
    format!(
        concat!(
            r#"<footer class="site-footer"><p>&copy; {brand}</p>"#,
            r#"<p><a href="mailto:{email}">{email}</a></p>"#,
            r#"<p><a href="/privacy">Privacy</a> <a href="/terms">Terms</a> <a href="/sitemap.xml">Sitemap</a></p>"#,
            "</footer>",
        ),
        brand = esc(BRAND_NAME),
        email = esc(&config.contact_email),
    )
}

fn floating_cta(cta: &FloatingCta, config: &SiteConfig) -> String {
    format!(
        concat!(
            r#"<aside class="floating-cta" data-state="{state}" data-scroll-threshold="{threshold}"{hidden}>"#,
            r#"<a class="button primary" href="{href}">Book a free call</a>"#,
            r#"<button type="button" class="floating-cta-dismiss" aria-label="Dismiss">&times;</button>"#,
            "</aside>",
        ),
        state = cta.state().as_str(),
        threshold = CTA_SCROLL_THRESHOLD,
        hidden = if cta.is_visible() { "" } else { " hidden" },
        href = esc(&config.scheduling_url),
    )
}

/// Banner markup while no choice is stored, nothing afterwards
pub fn consent_banner(consent: ConsentState) -> String {
    if consent != ConsentState::Unset {
        return String::new();
    }
    concat!(
        r#"<div class="consent-banner" role="dialog" aria-live="polite" aria-label="Cookie consent">"#,
        "<p>We use cookies to understand how visitors use this site and to improve it.</p>",
        r#"<button type="button" class="button primary" data-consent="accepted">Accept</button>"#,
        r#"<button type="button" class="button secondary" data-consent="declined">Decline</button>"#,
        "</div>",
    )
    .to_string()
}
