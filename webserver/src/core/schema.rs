//! Structured-data (JSON-LD) assemblers
//!
//! Each assembler maps a small piece of configuration (optional city, FAQ
//! list) onto a fixed schema.org shape. Objects are independent: nothing
//! checks that a city `LocalBusiness` agrees with the national `Organization`.

use serde_json::{json, Value};
use site_shared::content::{
    self, city_profile, CityProfile, BRAND_DESCRIPTION, BRAND_NAME, BRAND_SLOGAN, FOUNDING_YEAR,
    LOGO_PATH, NATIONAL_PHONE, PRICE_RANGE, SERVICES, SOCIAL_PROFILES,
};
use site_shared::{City, FaqEntry, SiteConfig};

pub const SCHEMA_CONTEXT: &str = "https://schema.org";
pub const SERVICE_TYPE: &str = "AI Consulting";

/// Builds JSON-LD objects for one site identity
#[derive(Debug, Clone)]
pub struct SchemaAssembler {
    config: SiteConfig,
}

impl SchemaAssembler {
    pub fn new(config: &SiteConfig) -> Self {
        Self { config: config.clone() }
    }

    fn logo_url(&self) -> String {
        self.config.absolute(LOGO_PATH)
    }

    fn organization_ref(&self) -> Value {
        json!({
            "@type": "Organization",
            "name": BRAND_NAME,
            "url": self.config.absolute("/"),
        })
    }

    fn contact_point_entity(&self) -> Value {
        json!({
            "@type": "ContactPoint",
            "contactType": "sales",
            "telephone": NATIONAL_PHONE,
            "email": self.config.contact_email,
            "url": self.config.scheduling_url,
            "areaServed": "US",
            "availableLanguage": ["English"],
        })
    }

    /// Display name for the national or city variant
    pub fn business_name(city: Option<City>) -> String {
        match city {
            Some(city) => format!("{} {}", BRAND_NAME, city_profile(city).display_name),
            None => BRAND_NAME.to_string(),
        }
    }

    fn page_url(&self, city: Option<City>) -> String {
        match city {
            Some(city) => self.config.absolute(&city.landing_path()),
            None => self.config.absolute("/"),
        }
    }

    fn area_served(city: Option<City>) -> Value {
        match city {
            Some(city) => Value::Array(
                city_profile(city)
                    .areas_served
                    .iter()
                    .map(|area| json!({ "@type": "City", "name": area }))
                    .collect(),
            ),
            None => json!({ "@type": "Country", "name": "United States" }),
        }
    }

    fn postal_address(profile: &CityProfile) -> Value {
        json!({
            "@type": "PostalAddress",
            "streetAddress": profile.street_address,
            "addressLocality": profile.locality,
            "addressRegion": profile.region,
            "postalCode": profile.postal_code,
            "addressCountry": "US",
        })
    }

    fn geo(profile: &CityProfile) -> Value {
        json!({
            "@type": "GeoCoordinates",
            "latitude": profile.latitude,
            "longitude": profile.longitude,
        })
    }

    /// Standalone `ContactPoint`
    pub fn contact_point(&self) -> Value {
        with_context(self.contact_point_entity())
    }

    /// National `Organization` with its contact point
    pub fn organization(&self) -> Value {
        json!({
            "@context": SCHEMA_CONTEXT,
            "@type": "Organization",
            "name": BRAND_NAME,
            "url": self.config.absolute("/"),
            "logo": self.logo_url(),
            "description": BRAND_DESCRIPTION,
            "foundingDate": FOUNDING_YEAR,
            "email": self.config.contact_email,
            "sameAs": SOCIAL_PROFILES,
            "contactPoint": self.contact_point_entity(),
        })
    }

    pub fn brand(&self) -> Value {
        json!({
            "@context": SCHEMA_CONTEXT,
            "@type": "Brand",
            "name": BRAND_NAME,
            "slogan": BRAND_SLOGAN,
            "logo": self.logo_url(),
            "url": self.config.absolute("/"),
        })
    }

    /// `LocalBusiness` for a city office, or the national variant without an address
    pub fn local_business(&self, city: Option<City>) -> Value {
        let mut business = json!({
            "@context": SCHEMA_CONTEXT,
            "@type": "LocalBusiness",
            "@id": format!("{}#localbusiness", self.page_url(city)),
            "name": Self::business_name(city),
            "url": self.page_url(city),
            "image": self.logo_url(),
            "email": self.config.contact_email,
            "priceRange": PRICE_RANGE,
            "areaServed": Self::area_served(city),
        });

        match city {
            Some(city) => {
                let profile = city_profile(city);
                business["telephone"] = json!(profile.phone);
                business["address"] = Self::postal_address(profile);
                business["geo"] = Self::geo(profile);
                business["parentOrganization"] = self.organization_ref();
            }
            None => {
                business["telephone"] = json!(NATIONAL_PHONE);
            }
        }

        business
    }

    pub fn professional_service(&self, city: Option<City>) -> Value {
        let mut service = json!({
            "@context": SCHEMA_CONTEXT,
            "@type": "ProfessionalService",
            "name": Self::business_name(city),
            "url": self.page_url(city),
            "description": BRAND_DESCRIPTION,
            "priceRange": PRICE_RANGE,
            "areaServed": Self::area_served(city),
            "knowsAbout": SERVICES.iter().map(|s| s.name).collect::<Vec<_>>(),
        });

        if let Some(city) = city {
            service["address"] = Self::postal_address(city_profile(city));
        }

        service
    }

    /// `Service` with an offer catalog built from the service list
    pub fn service(&self, city: Option<City>) -> Value {
        let name = match city {
            Some(city) => format!("{} in {}", SERVICE_TYPE, city_profile(city).display_name),
            None => SERVICE_TYPE.to_string(),
        };
        let provider = match city {
            Some(_) => json!({
                "@type": "LocalBusiness",
                "name": Self::business_name(city),
                "url": self.page_url(city),
            }),
            None => self.organization_ref(),
        };
        let offers: Vec<Value> = SERVICES
            .iter()
            .map(|offering| {
                json!({
                    "@type": "Offer",
                    "itemOffered": {
                        "@type": "Service",
                        "name": offering.name,
                        "description": offering.summary,
                        "url": self.config.absolute(&format!("/services/{}", offering.slug)),
                    },
                })
            })
            .collect();

        json!({
            "@context": SCHEMA_CONTEXT,
            "@type": "Service",
            "serviceType": SERVICE_TYPE,
            "name": name,
            "provider": provider,
            "areaServed": Self::area_served(city),
            "hasOfferCatalog": {
                "@type": "OfferCatalog",
                "name": "AI Consulting Services",
                "itemListElement": offers,
            },
        })
    }

    pub fn faq_page(&self, faqs: &[FaqEntry]) -> Value {
        let questions: Vec<Value> = faqs
            .iter()
            .map(|faq| {
                json!({
                    "@type": "Question",
                    "name": faq.question,
                    "acceptedAnswer": { "@type": "Answer", "text": faq.answer },
                })
            })
            .collect();

        json!({
            "@context": SCHEMA_CONTEXT,
            "@type": "FAQPage",
            "mainEntity": questions,
        })
    }

    /// Every schema object embedded on a landing page
    pub fn page_schemas(&self, city: Option<City>) -> Vec<Value> {
        let faqs = content::faqs(city);
        match city {
            Some(_) => vec![
                self.organization(),
                self.local_business(city),
                self.service(city),
                self.faq_page(&faqs),
            ],
            None => vec![
                self.organization(),
                self.brand(),
                self.professional_service(None),
                self.service(None),
                self.faq_page(&faqs),
            ],
        }
    }
}

fn with_context(mut entity: Value) -> Value {
    if let Value::Object(ref mut map) = entity {
        map.insert("@context".to_string(), json!(SCHEMA_CONTEXT));
    }
    entity
}

/// One `<script type="application/ld+json">` tag for `schema`
pub fn to_script_tag(schema: &Value) -> String {
    // "</" inside a string literal would close the script element early
    let payload = schema.to_string().replace("</", "<\\/");
    format!(r#"<script type="application/ld+json">{payload}</script>"#)
}
