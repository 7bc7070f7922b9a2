//! Route registry and merge
//!
//! Five independent, ordered groups of routes are concatenated in category
//! order into the list the sitemap is rendered from. The merge keeps every
//! entry: duplicate paths are reported by `duplicate_paths`, never removed.

use std::collections::HashMap;

use site_shared::content::SERVICES;
use site_shared::{ChangeFrequency, City, Priority, RouteCategory, RouteDescriptor, RouteSpec};

use crate::traits::Clock;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteRegistry {
    static_pages: Vec<RouteSpec>,
    services: Vec<RouteSpec>,
    locations: Vec<RouteSpec>,
    industries: Vec<RouteSpec>,
    resources: Vec<RouteSpec>,
}

impl RouteRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The site's published routes
    pub fn site_default() -> Self {
        use ChangeFrequency::*;

        let static_pages = vec![
            RouteSpec::new("/", Weekly, Priority::MAX),
            RouteSpec::new("/about", Monthly, Priority::tenths(8)),
            RouteSpec::new("/contact", Monthly, Priority::tenths(8)),
            RouteSpec::new("/pricing", Monthly, Priority::tenths(9)),
            RouteSpec::new("/case-studies", Weekly, Priority::tenths(8)),
            RouteSpec::new("/blog", Daily, Priority::tenths(7)),
            RouteSpec::new("/privacy", Yearly, Priority::tenths(3)),
            RouteSpec::new("/terms", Yearly, Priority::tenths(3)),
        ];

        let services = SERVICES
            .iter()
            .map(|service| RouteSpec::new(format!("/services/{}", service.slug), Monthly, Priority::tenths(9)))
            .collect();

        let locations = City::ALL
            .iter()
            .map(|city| RouteSpec::new(city.landing_path(), Weekly, Priority::tenths(9)))
            .collect();

        let industries = ["healthcare", "financial-services", "retail", "manufacturing", "logistics"]
            .iter()
            .map(|slug| RouteSpec::new(format!("/industries/{slug}"), Monthly, Priority::tenths(7)))
            .collect();

        let resources = vec![
            RouteSpec::new("/resources/guides", Weekly, Priority::tenths(6)),
            RouteSpec::new("/resources/whitepapers", Monthly, Priority::tenths(6)),
            RouteSpec::new("/resources/webinars", Monthly, Priority::tenths(5)),
            RouteSpec::new("/resources/ai-readiness-assessment", Monthly, Priority::tenths(7)),
        ];

        Self {
            static_pages,
            services,
            locations,
            industries,
            resources,
        }
    }

    /// Append a route to one group, keeping the group's order
    pub fn with_route(mut self, category: RouteCategory, spec: RouteSpec) -> Self {
        self.group_mut(category).push(spec);
        self
    }

    /// Routes of one group, in declaration order
    pub fn group(&self, category: RouteCategory) -> &[RouteSpec] {
        match category {
            RouteCategory::Static => &self.static_pages,
            RouteCategory::Services => &self.services,
            RouteCategory::Locations => &self.locations,
            RouteCategory::Industries => &self.industries,
            RouteCategory::Resources => &self.resources,
        }
    }

    fn group_mut(&mut self, category: RouteCategory) -> &mut Vec<RouteSpec> {
        match category {
            RouteCategory::Static => &mut self.static_pages,
            RouteCategory::Services => &mut self.services,
            RouteCategory::Locations => &mut self.locations,
            RouteCategory::Industries => &mut self.industries,
            RouteCategory::Resources => &mut self.resources,
        }
    }

    /// Route specs of every group, in merge order
    pub fn specs(&self) -> impl Iterator<Item = (RouteCategory, &RouteSpec)> {
        RouteCategory::ALL
            .into_iter()
            .flat_map(move |category| self.group(category).iter().map(move |spec| (category, spec)))
    }

    /// Total number of routes, duplicates included
    pub fn len(&self) -> usize {
        RouteCategory::ALL.iter().map(|c| self.group(*c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether any group declares `path`
    pub fn contains(&self, path: &str) -> bool {
        self.specs().any(|(_, spec)| spec.path == path)
    }

    /// Category that first declares `path`
    pub fn category_of(&self, path: &str) -> Option<RouteCategory> {
        self.specs()
            .find(|(_, spec)| spec.path == path)
            .map(|(category, _)| category)
    }

    /// Merge all groups into one list, every entry stamped with the same `clock.now()`
    pub fn build_route_list(&self, clock: &dyn Clock) -> Vec<RouteDescriptor> {
        let now = clock.now();
        self.specs().map(|(_, spec)| spec.at(now)).collect()
    }

    /// Paths declared more than once, in first-seen order
    pub fn duplicate_paths(&self) -> Vec<String> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut order: Vec<&str> = Vec::new();
        for (_, spec) in self.specs() {
            let count = counts.entry(spec.path.as_str()).or_insert(0);
            if *count == 0 {
                order.push(spec.path.as_str());
            }
            *count += 1;
        }
        order
            .into_iter()
            .filter(|path| counts[path] > 1)
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::FixedClock;
    use crate::traits::MockClock;
    use chrono::{TimeZone, Utc};
    use std::collections::HashSet;

    fn fixed_clock() -> FixedClock {
        FixedClock::new(Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap())
    }

    #[test]
    fn test_merge_preserves_category_and_group_order() {
        let registry = RouteRegistry::site_default();
        let routes = registry.build_route_list(&fixed_clock());

        let expected: Vec<String> = RouteCategory::ALL
            .iter()
            .flat_map(|c| registry.group(*c).iter().map(|s| s.path.clone()))
            .collect();
        let actual: Vec<String> = routes.iter().map(|r| r.path.clone()).collect();

        assert_eq!(actual, expected);
        assert_eq!(routes.len(), registry.len());
        assert_eq!(routes[0].path, "/");
    }

    #[test]
    fn test_every_route_stamped_with_clock_value() {
        let clock = fixed_clock();
        let routes = RouteRegistry::site_default().build_route_list(&clock);

        assert!(routes.iter().all(|r| r.last_modified == clock.now()));
    }

    #[test]
    fn test_clock_read_once_per_build() {
        let mut clock = MockClock::new();
        clock
            .expect_now()
            .times(1)
            .returning(|| Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());

        let routes = RouteRegistry::site_default().build_route_list(&clock);
        assert!(!routes.is_empty());
    }

    #[test]
    fn test_site_default_paths_are_unique() {
        let registry = RouteRegistry::site_default();
        let paths: HashSet<&str> = registry.specs().map(|(_, s)| s.path.as_str()).collect();

        assert_eq!(paths.len(), registry.len());
        assert!(registry.duplicate_paths().is_empty());
    }

    #[test]
    fn test_merge_keeps_duplicates_and_reports_them() {
        let registry = RouteRegistry::new()
            .with_route(RouteCategory::Static, RouteSpec::new("/pricing", ChangeFrequency::Monthly, Priority::tenths(9)))
            .with_route(RouteCategory::Static, RouteSpec::new("/about", ChangeFrequency::Monthly, Priority::tenths(8)))
            .with_route(RouteCategory::Resources, RouteSpec::new("/pricing", ChangeFrequency::Weekly, Priority::tenths(5)));

        let routes = registry.build_route_list(&fixed_clock());

        assert_eq!(routes.len(), 3);
        assert_eq!(routes[0].path, "/pricing");
        assert_eq!(routes[2].path, "/pricing");
        assert_eq!(routes[2].change_frequency, ChangeFrequency::Weekly);
        assert_eq!(registry.duplicate_paths(), vec!["/pricing".to_string()]);
    }

    #[test]
    fn test_locations_group_covers_every_city() {
        let registry = RouteRegistry::site_default();
        for city in City::ALL {
            assert_eq!(registry.category_of(&city.landing_path()), Some(RouteCategory::Locations));
        }
        assert!(!registry.contains("/locations/chicago"));
    }

    #[test]
    fn test_empty_registry() {
        let registry = RouteRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.build_route_list(&fixed_clock()).is_empty());
    }
}
