//! Sitemap route types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::SharedError;

/// `<changefreq>` values allowed by the sitemap protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    pub const ALL: [ChangeFrequency; 7] = [
        ChangeFrequency::Always,
        ChangeFrequency::Hourly,
        ChangeFrequency::Daily,
        ChangeFrequency::Weekly,
        ChangeFrequency::Monthly,
        ChangeFrequency::Yearly,
        ChangeFrequency::Never,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Always => "always",
            ChangeFrequency::Hourly => "hourly",
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
            ChangeFrequency::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChangeFrequency {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChangeFrequency::ALL
            .into_iter()
            .find(|freq| freq.as_str() == s)
            .ok_or_else(|| SharedError::InvalidChangeFrequency { input: s.to_string() })
    }
}

/// Float noise allowed when checking that a value is a whole number of tenths
const TENTHS_TOLERANCE: f32 = 1e-4;

/// Crawl priority in `[0.0, 1.0]`, held in tenths so it cannot leave the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority(u8);

impl Priority {
    pub const MIN: Priority = Priority(0);
    pub const MAX: Priority = Priority(10);

    /// Build from tenths; anything above 10 saturates at 1.0.
    pub const fn tenths(tenths: u8) -> Self {
        if tenths > 10 {
            Priority(10)
        } else {
            Priority(tenths)
        }
    }

    /// Build from a float. Only whole tenths in `[0.0, 1.0]` are accepted;
    /// `0.85` is an error rather than a silent `0.9`.
    pub fn new(value: f32) -> Result<Self, SharedError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(SharedError::InvalidPriority { input: value.to_string() });
        }
        let scaled = value * 10.0;
        let tenths = scaled.round();
        if (scaled - tenths).abs() > TENTHS_TOLERANCE {
            return Err(SharedError::InvalidPriority { input: value.to_string() });
        }
        Ok(Priority(tenths as u8))
    }

    pub fn as_f32(&self) -> f32 {
        f32::from(self.0) / 10.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

impl FromStr for Priority {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f32 = s
            .trim()
            .parse()
            .map_err(|_| SharedError::InvalidPriority { input: s.to_string() })?;
        Priority::new(value)
    }
}

impl Serialize for Priority {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f32(self.as_f32())
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f32::deserialize(deserializer)?;
        Priority::new(value).map_err(serde::de::Error::custom)
    }
}

/// Sitemap groups, declared in merge order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteCategory {
    Static,
    Services,
    Locations,
    Industries,
    Resources,
}

impl RouteCategory {
    pub const ALL: [RouteCategory; 5] = [
        RouteCategory::Static,
        RouteCategory::Services,
        RouteCategory::Locations,
        RouteCategory::Industries,
        RouteCategory::Resources,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RouteCategory::Static => "static",
            RouteCategory::Services => "services",
            RouteCategory::Locations => "locations",
            RouteCategory::Industries => "industries",
            RouteCategory::Resources => "resources",
        }
    }
}

/// A route as declared at build time, before it is stamped with a timestamp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSpec {
    pub path: String,
    pub change_frequency: ChangeFrequency,
    pub priority: Priority,
}

impl RouteSpec {
    pub fn new(path: impl Into<String>, change_frequency: ChangeFrequency, priority: Priority) -> Self {
        Self {
            path: path.into(),
            change_frequency,
            priority,
        }
    }

    /// Stamp with a modification time
    pub fn at(&self, last_modified: DateTime<Utc>) -> RouteDescriptor {
        RouteDescriptor {
            path: self.path.clone(),
            last_modified,
            change_frequency: self.change_frequency,
            priority: self.priority,
        }
    }
}

/// One `<url>` entry of the sitemap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteDescriptor {
    pub path: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: Priority,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_priority_display() {
        assert_eq!(Priority::MAX.to_string(), "1.0");
        assert_eq!(Priority::tenths(8).to_string(), "0.8");
        assert_eq!(Priority::MIN.to_string(), "0.0");
    }

    #[test]
    fn test_priority_saturates() {
        assert_eq!(Priority::tenths(42), Priority::MAX);
    }

    #[test]
    fn test_priority_parse() {
        assert_eq!("0.7".parse::<Priority>().unwrap(), Priority::tenths(7));
        assert_eq!("1".parse::<Priority>().unwrap(), Priority::MAX);
        assert!(matches!("1.5".parse::<Priority>(), Err(SharedError::InvalidPriority { .. })));
        assert!(matches!("-0.1".parse::<Priority>(), Err(SharedError::InvalidPriority { .. })));
        assert!("high".parse::<Priority>().is_err());
    }

    #[test]
    fn test_priority_rejects_values_between_tenths() {
        assert!(matches!("0.85".parse::<Priority>(), Err(SharedError::InvalidPriority { .. })));
        assert!(matches!(Priority::new(0.64), Err(SharedError::InvalidPriority { .. })));
        assert!(serde_json::from_str::<Priority>("0.64").is_err());

        assert_eq!(Priority::new(0.3).unwrap(), Priority::tenths(3));
        assert_eq!(serde_json::from_str::<Priority>("0.7").unwrap(), Priority::tenths(7));
    }

    #[test]
    fn test_change_frequency_parse() {
        for freq in ChangeFrequency::ALL {
            assert_eq!(freq.as_str().parse::<ChangeFrequency>().unwrap(), freq);
        }
        assert!(matches!(
            "fortnightly".parse::<ChangeFrequency>(),
            Err(SharedError::InvalidChangeFrequency { .. })
        ));
    }

    #[test]
    fn test_route_spec_stamp() {
        let spec = RouteSpec::new("/about", ChangeFrequency::Monthly, Priority::tenths(5));
        let when = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let descriptor = spec.at(when);

        assert_eq!(descriptor.path, "/about");
        assert_eq!(descriptor.last_modified, when);
        assert_eq!(descriptor.change_frequency, ChangeFrequency::Monthly);
        assert_eq!(descriptor.priority, Priority::tenths(5));
    }

    #[test]
    fn test_descriptor_serializes_lowercase_frequency() {
        let when = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let descriptor = RouteSpec::new("/", ChangeFrequency::Weekly, Priority::MAX).at(when);
        let json = serde_json::to_value(&descriptor).unwrap();

        assert_eq!(json["change_frequency"], "weekly");
        assert_eq!(json["priority"], 1.0);
    }
}
