//! Page compositions
//!
//! One landing page template parameterized by city. The funnel is the same
//! for every city; city pages add the local office block.

use site_shared::content::{self, city_profile, BRAND_NAME, NATIONAL_HEADLINE, NATIONAL_SUBHEADLINE};
use site_shared::{City, FaqEntry, RouteCategory};

/// Sections of the conversion funnel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    Metrics,
    ClientLogos,
    Services,
    VideoDemo,
    Process,
    Testimonials,
    Pricing,
    Faq,
    LocalOffice,
    FinalCta,
}

/// Funnel shared by every landing page
pub const FUNNEL: &[Section] = &[
    Section::Hero,
    Section::Metrics,
    Section::ClientLogos,
    Section::Services,
    Section::VideoDemo,
    Section::Process,
    Section::Testimonials,
    Section::Pricing,
    Section::Faq,
    Section::FinalCta,
];

#[derive(Debug, Clone, PartialEq)]
pub struct LandingPage {
    pub city: Option<City>,
    pub path: String,
    pub title: String,
    pub description: String,
    pub headline: &'static str,
    pub subheadline: &'static str,
    pub sections: Vec<Section>,
    pub faqs: Vec<FaqEntry>,
}

impl LandingPage {
    pub fn for_city(city: Option<City>) -> Self {
        let mut sections = FUNNEL.to_vec();

        match city {
            Some(city) => {
                let profile = city_profile(city);
                // office block sits right before the closing CTA
                sections.insert(sections.len() - 1, Section::LocalOffice);
                Self {
                    city: Some(city),
                    path: city.landing_path(),
                    title: format!("AI Consulting in {} | {}", profile.display_name, BRAND_NAME),
                    description: profile.subheadline.to_string(),
                    headline: profile.headline,
                    subheadline: profile.subheadline,
                    sections,
                    faqs: content::faqs(Some(city)),
                }
            }
            None => Self {
                city: None,
                path: "/".to_string(),
                title: format!("{} | AI Consulting & Implementation", BRAND_NAME),
                description: NATIONAL_SUBHEADLINE.to_string(),
                headline: NATIONAL_HEADLINE,
                subheadline: NATIONAL_SUBHEADLINE,
                sections,
                faqs: content::faqs(None),
            },
        }
    }

    /// Every landing page the site publishes, national first
    pub fn all() -> Vec<LandingPage> {
        std::iter::once(None)
            .chain(City::ALL.into_iter().map(Some))
            .map(LandingPage::for_city)
            .collect()
    }
}

/// Page for a registered route without a dedicated template
#[derive(Debug, Clone, PartialEq)]
pub struct ContentPage {
    pub path: String,
    pub category: RouteCategory,
    pub title: String,
}

impl ContentPage {
    pub fn new(path: &str, category: RouteCategory) -> Self {
        Self {
            path: path.to_string(),
            category,
            title: title_from_path(path),
        }
    }
}

/// "/services/ai-strategy" -> "Ai Strategy"
pub fn title_from_path(path: &str) -> String {
    let slug = path.trim_end_matches('/').rsplit('/').next().unwrap_or_default();
    slug.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_national_page_uses_plain_funnel() {
        let page = LandingPage::for_city(None);
        assert_eq!(page.sections, FUNNEL.to_vec());
        assert_eq!(page.path, "/");
        assert_eq!(page.faqs.len(), content::NATIONAL_FAQS.len());
    }

    #[test]
    fn test_city_page_adds_office_before_cta() {
        for city in City::ALL {
            let page = LandingPage::for_city(Some(city));
            let n = page.sections.len();

            assert_eq!(n, FUNNEL.len() + 1);
            assert_eq!(page.sections[n - 2], Section::LocalOffice);
            assert_eq!(page.sections[n - 1], Section::FinalCta);
            assert_eq!(page.sections[0], Section::Hero);
            assert_eq!(page.headline, city_profile(city).headline);
        }
    }

    #[test]
    fn test_city_titles() {
        assert_eq!(
            LandingPage::for_city(Some(City::Nyc)).title,
            "AI Consulting in New York City | Northbeam AI"
        );
    }

    #[test]
    fn test_all_pages() {
        let paths: Vec<String> = LandingPage::all().into_iter().map(|p| p.path).collect();
        assert_eq!(paths, vec!["/", "/locations/boston", "/locations/nyc", "/locations/miami"]);
    }

    #[test]
    fn test_title_from_path() {
        assert_eq!(title_from_path("/services/ai-strategy"), "Ai Strategy");
        assert_eq!(title_from_path("/about"), "About");
        assert_eq!(title_from_path("/resources/ai-readiness-assessment/"), "Ai Readiness Assessment");
        assert_eq!(title_from_path("/"), "");
    }
}
