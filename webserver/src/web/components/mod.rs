//! HTML components
//!
//! Render functions emitting markup from content constants and UI state.

pub mod layout;
pub mod sections;

use std::borrow::Cow;

use serde_json::Value;
use site_shared::content::BRAND_NAME;
use site_shared::SiteConfig;

use crate::core::integrations::Integration;
use crate::core::page::{ContentPage, LandingPage};
use crate::core::ui::{ConsentState, LoadingVariant};
use layout::{render_document, DocumentHead};

pub(crate) fn esc(text: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(text)
}

/// Per-request rendering inputs shared by every page
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub config: &'a SiteConfig,
    pub integrations: &'a [Integration],
    pub consent: ConsentState,
    pub loading: LoadingVariant,
}

/// Full landing page document, national or city
pub fn render_landing(page: &LandingPage, schemas: &[Value], ctx: &PageContext<'_>) -> String {
    let main: String = page
        .sections
        .iter()
        .map(|section| sections::render_section(*section, page, ctx.config))
        .collect();
    let head = DocumentHead {
        title: &page.title,
        description: &page.description,
        path: &page.path,
        schemas,
    };
    render_document(ctx, &head, &main)
}

/// Generic document for a registered route without its own template
pub fn render_content_page(page: &ContentPage, schemas: &[Value], ctx: &PageContext<'_>) -> String {
    let title = format!("{} | {}", page.title, BRAND_NAME);
    let description = format!("{} from {}.", page.title, BRAND_NAME);
    let main = format!(
        r#"<section class="content-page" data-category="{category}"><h1>{heading}</h1><p>We are preparing this page. In the meantime, <a href="{href}">book a call</a> and we will walk you through it.</p></section>"#,
        category = page.category.as_str(),
        heading = esc(&page.title),
        href = esc(&ctx.config.scheduling_url),
    );
    let head = DocumentHead {
        title: &title,
        description: &description,
        path: &page.path,
        schemas,
    };
    render_document(ctx, &head, &main)
}

pub fn render_not_found(path: &str, ctx: &PageContext<'_>) -> String {
    let title = format!("Page not found | {}", BRAND_NAME);
    let main = format!(
        r#"<section class="not-found"><h1>Page not found</h1><p>Nothing lives at <code>{}</code>.</p><p><a href="/">Back to the home page</a></p></section>"#,
        esc(path)
    );
    let head = DocumentHead {
        title: &title,
        description: "The requested page does not exist.",
        path,
        schemas: &[],
    };
    render_document(ctx, &head, &main)
}
