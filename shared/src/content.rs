//! Literal marketing content
//!
//! Leaves of the dependency graph: copy, FAQ pairs, client names, metric
//! values and the per-city content table. No logic beyond lookups.

use crate::types::{City, ClientRecord, FaqEntry};

pub const BRAND_NAME: &str = "Northbeam AI";
pub const BRAND_SLOGAN: &str = "Practical AI that ships.";
pub const BRAND_DESCRIPTION: &str =
    "Northbeam AI is an AI consulting firm that helps mid-market companies plan, build and run production AI systems.";
pub const LOGO_PATH: &str = "/static/logo.png";
pub const NATIONAL_PHONE: &str = "+1-888-555-0142";
pub const PRICE_RANGE: &str = "$$$";
pub const FOUNDING_YEAR: &str = "2019";
pub const SOCIAL_PROFILES: &[&str] = &[
    "https://www.linkedin.com/company/northbeam-ai",
    "https://x.com/northbeam_ai",
    "https://github.com/northbeam-ai",
];

/// Literal content for one city's landing page and schema
#[derive(Debug, PartialEq)]
pub struct CityProfile {
    pub city: City,
    pub display_name: &'static str,
    pub locality: &'static str,
    pub region: &'static str,
    pub street_address: &'static str,
    pub postal_code: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub phone: &'static str,
    pub areas_served: &'static [&'static str],
    pub headline: &'static str,
    pub subheadline: &'static str,
    pub faqs: &'static [(&'static str, &'static str)],
}

static BOSTON: CityProfile = CityProfile {
    city: City::Boston,
    display_name: "Boston",
    locality: "Boston",
    region: "MA",
    street_address: "200 Berkeley Street, Suite 1400",
    postal_code: "02116",
    latitude: 42.3493,
    longitude: -71.0733,
    phone: "+1-617-555-0190",
    areas_served: &["Boston", "Cambridge", "Somerville", "Greater Boston"],
    headline: "AI Consulting for Boston Companies",
    subheadline: "From Kendall Square startups to Back Bay enterprises, we turn AI pilots into production systems.",
    faqs: &[
        (
            "Do you work on-site in Boston?",
            "Yes. Our Back Bay team runs discovery workshops on-site anywhere in Greater Boston and works hybrid after that.",
        ),
        (
            "Which Boston industries do you serve most?",
            "Biotech, healthcare, higher education and financial services make up most of our Boston engagements.",
        ),
    ],
};

static NYC: CityProfile = CityProfile {
    city: City::Nyc,
    display_name: "New York City",
    locality: "New York",
    region: "NY",
    street_address: "55 Water Street, Floor 32",
    postal_code: "10041",
    latitude: 40.7033,
    longitude: -74.0087,
    phone: "+1-212-555-0175",
    areas_served: &["New York City", "Manhattan", "Brooklyn", "Queens", "Jersey City"],
    headline: "AI Consulting for New York City Teams",
    subheadline: "Wall Street to SoHo, we help NYC teams ship AI that survives compliance review and real traffic.",
    faqs: &[
        (
            "Do you have a team in Manhattan?",
            "Our Financial District office hosts workshops and our consultants work on-site across the five boroughs.",
        ),
        (
            "Can you meet financial-services compliance requirements?",
            "Yes. We design model governance, audit logging and data residency controls with your risk team from day one.",
        ),
    ],
};

static MIAMI: CityProfile = CityProfile {
    city: City::Miami,
    display_name: "Miami",
    locality: "Miami",
    region: "FL",
    street_address: "1450 Brickell Avenue, Suite 2100",
    postal_code: "33131",
    latitude: 25.7588,
    longitude: -80.1918,
    phone: "+1-305-555-0168",
    areas_served: &["Miami", "Miami Beach", "Coral Gables", "Fort Lauderdale"],
    headline: "AI Consulting for Miami Businesses",
    subheadline: "Brickell fintech, hospitality and logistics teams use us to put AI to work in weeks, not quarters.",
    faqs: &[
        (
            "Do you offer bilingual AI solutions in Miami?",
            "Yes. We build English and Spanish assistants, search and document workflows for South Florida customers.",
        ),
        (
            "Where is your Miami office?",
            "We are on Brickell Avenue and meet clients across Miami-Dade and Broward.",
        ),
    ],
};

/// Content table entry for `city`
pub fn city_profile(city: City) -> &'static CityProfile {
    match city {
        City::Boston => &BOSTON,
        City::Nyc => &NYC,
        City::Miami => &MIAMI,
    }
}

pub const NATIONAL_HEADLINE: &str = "AI Consulting That Ships to Production";
pub const NATIONAL_SUBHEADLINE: &str =
    "Strategy, engineering and enablement for companies that want measurable results from AI this quarter.";

pub const NATIONAL_FAQS: &[(&str, &str)] = &[
    (
        "How long does a typical AI engagement take?",
        "Most projects reach a production pilot in 6 to 10 weeks, starting with a two-week discovery sprint.",
    ),
    (
        "Do we need our own data science team?",
        "No. We bring the engineers and hand over documentation, runbooks and training so your team can own the result.",
    ),
    (
        "How do you price engagements?",
        "Fixed-scope packages for assessments and pilots, and monthly retainers for ongoing delivery.",
    ),
    (
        "Which AI platforms do you work with?",
        "We are vendor-neutral and work with the major model providers, open-weight models and your existing cloud.",
    ),
];

/// FAQ list for a page: the city's local questions first, then the national ones
pub fn faqs(city: Option<City>) -> Vec<FaqEntry> {
    let local = city.map(|c| city_profile(c).faqs).unwrap_or(&[]);
    local
        .iter()
        .chain(NATIONAL_FAQS.iter())
        .map(|(q, a)| FaqEntry::new(*q, *a))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServiceOffering {
    pub name: &'static str,
    pub slug: &'static str,
    pub summary: &'static str,
}

pub const SERVICES: &[ServiceOffering] = &[
    ServiceOffering {
        name: "AI Strategy & Roadmapping",
        slug: "ai-strategy",
        summary: "Prioritize use cases by value and feasibility and leave with a funded, sequenced roadmap.",
    },
    ServiceOffering {
        name: "Generative AI Solutions",
        slug: "generative-ai",
        summary: "Assistants, retrieval and document automation built on your data with evaluation baked in.",
    },
    ServiceOffering {
        name: "Machine Learning Engineering",
        slug: "machine-learning",
        summary: "Forecasting, scoring and recommendation models deployed with monitoring and retraining.",
    },
    ServiceOffering {
        name: "Process Automation",
        slug: "automation",
        summary: "Replace manual back-office steps with AI agents and workflow integrations.",
    },
    ServiceOffering {
        name: "Data Engineering",
        slug: "data-engineering",
        summary: "Pipelines, warehouses and governance that make your data ready for AI.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metric {
    pub value: &'static str,
    pub label: &'static str,
}

pub const METRICS: &[Metric] = &[
    Metric { value: "120+", label: "AI systems in production" },
    Metric { value: "8 weeks", label: "Median time to pilot" },
    Metric { value: "3.4x", label: "Average first-year ROI" },
    Metric { value: "97%", label: "Client retention" },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub company: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "They took our claims-triage idea from whiteboard to production in nine weeks.",
        author: "Dana Whitfield",
        role: "VP Operations",
        company: "Harborline Health",
    },
    Testimonial {
        quote: "The first consultants who left us with a system our own engineers could run.",
        author: "Marcus Olsen",
        role: "CTO",
        company: "Ledgerstone Capital",
    },
    Testimonial {
        quote: "Our support backlog dropped by a third within a month of launch.",
        author: "Priya Raman",
        role: "Head of Customer Experience",
        company: "Cartwheel Retail",
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingTier {
    pub name: &'static str,
    pub price: &'static str,
    pub cadence: &'static str,
    pub features: &'static [&'static str],
    pub highlighted: bool,
}

pub const PRICING_TIERS: &[PricingTier] = &[
    PricingTier {
        name: "AI Readiness Assessment",
        price: "$15,000",
        cadence: "fixed",
        features: &["Two-week discovery sprint", "Use-case scoring", "Executive roadmap"],
        highlighted: false,
    },
    PricingTier {
        name: "Production Pilot",
        price: "$60,000",
        cadence: "fixed",
        features: &["One use case to production", "Evaluation harness", "Team enablement"],
        highlighted: true,
    },
    PricingTier {
        name: "Embedded Team",
        price: "$35,000",
        cadence: "per month",
        features: &["Dedicated engineers", "Quarterly roadmap reviews", "On-call support"],
        highlighted: false,
    },
];

pub const PROCESS_STEPS: &[(&str, &str)] = &[
    ("Discover", "Map workflows, data and constraints in a two-week sprint."),
    ("Design", "Pick the highest-value use case and define success metrics."),
    ("Build", "Ship a production pilot with evaluation and monitoring."),
    ("Scale", "Hand over, train your team and expand to the next use case."),
];

pub const DEMO_VIDEO_TITLE: &str = "See a production pilot in 90 seconds";
pub const DEMO_VIDEO_URL: &str = "https://www.youtube-nocookie.com/embed/northbeam-demo";

/// Client logo strip content
pub fn clients() -> Vec<ClientRecord> {
    [
        ("Harborline Health", "Healthcare", "HH"),
        ("Ledgerstone Capital", "Financial Services", "LC"),
        ("Cartwheel Retail", "Retail", "CR"),
        ("Meridian Biosciences", "Healthcare", "MB"),
        ("Ironbridge Logistics", "Logistics", "IL"),
        ("Quarry & Co", "Manufacturing", "QC"),
        ("Tidewater Insurance", "Financial Services", "TI"),
    ]
    .into_iter()
    .map(|(name, industry, abbreviation)| ClientRecord::new(name, industry, abbreviation))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_profile_lookup() {
        for city in City::ALL {
            assert_eq!(city_profile(city).city, city);
        }
    }

    #[test]
    fn test_city_faqs_come_first() {
        let boston = faqs(Some(City::Boston));
        assert_eq!(boston.len(), BOSTON.faqs.len() + NATIONAL_FAQS.len());
        assert_eq!(boston[0].question, BOSTON.faqs[0].0);

        let national = faqs(None);
        assert_eq!(national.len(), NATIONAL_FAQS.len());
    }

    #[test]
    fn test_city_content_mentions_no_other_city() {
        for city in City::ALL {
            let profile = city_profile(city);
            let text = format!(
                "{} {} {:?} {:?}",
                profile.headline, profile.subheadline, profile.areas_served, profile.faqs
            );
            for other in City::ALL.into_iter().filter(|c| *c != city) {
                let other_profile = city_profile(other);
                assert!(
                    !text.contains(other_profile.display_name) && !text.contains(other_profile.locality),
                    "{city} content mentions {other}"
                );
            }
        }
    }
}
