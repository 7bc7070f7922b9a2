//! Sitemap serializer
//!
//! Renders a merged route list into a sitemap protocol document. Text goes
//! through the XML writer, so paths containing markup characters are escaped
//! and the output stays well-formed.

use chrono::SecondsFormat;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use site_shared::{RouteDescriptor, SiteConfig};

use crate::error::WebServerResult;

pub const SITEMAP_PATH: &str = "/sitemap.xml";
pub const SITEMAP_CONTENT_TYPE: &str = "application/xml";
pub const SITEMAP_CACHE_CONTROL: &str = "public, max-age=86400, s-maxage=86400";

/// Namespace declarations on `<urlset>`. Only the default namespace is used;
/// the extension namespaces are declared for crawler compatibility.
pub const URLSET_NAMESPACES: &[(&str, &str)] = &[
    ("xmlns", "http://www.sitemaps.org/schemas/sitemap/0.9"),
    ("xmlns:news", "http://www.google.com/schemas/sitemap-news/0.9"),
    ("xmlns:xhtml", "http://www.w3.org/1999/xhtml"),
    ("xmlns:mobile", "http://www.google.com/schemas/sitemap-mobile/1.0"),
    ("xmlns:image", "http://www.google.com/schemas/sitemap-image/1.1"),
    ("xmlns:video", "http://www.google.com/schemas/sitemap-video/1.1"),
];

/// Render `routes` as a sitemap, resolving paths against the configured base URL
pub fn render_sitemap(config: &SiteConfig, routes: &[RouteDescriptor]) -> WebServerResult<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut urlset = BytesStart::new("urlset");
    for attribute in URLSET_NAMESPACES {
        urlset.push_attribute(*attribute);
    }
    writer.write_event(Event::Start(urlset))?;

    for route in routes {
        writer.write_event(Event::Start(BytesStart::new("url")))?;
        write_text_element(&mut writer, "loc", &config.absolute(&route.path))?;
        write_text_element(
            &mut writer,
            "lastmod",
            &route.last_modified.to_rfc3339_opts(SecondsFormat::Millis, true),
        )?;
        write_text_element(&mut writer, "changefreq", route.change_frequency.as_str())?;
        write_text_element(&mut writer, "priority", &route.priority.to_string())?;
        writer.write_event(Event::End(BytesEnd::new("url")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("urlset")))?;

    let mut document = String::from_utf8(writer.into_inner())?;
    document.push('\n');
    Ok(document)
}

fn write_text_element(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> WebServerResult<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// `robots.txt` allowing everything and pointing at the sitemap
pub fn render_robots(config: &SiteConfig) -> String {
    format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}\n",
        config.absolute(SITEMAP_PATH)
    )
}
