//! City selector for localized pages and schema

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::SharedError;

/// Cities with a dedicated landing page. `Option<City>::None` is the national variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum City {
    Boston,
    Nyc,
    Miami,
}

impl City {
    pub const ALL: [City; 3] = [City::Boston, City::Nyc, City::Miami];

    /// URL slug, also the value accepted by `FromStr`
    pub fn slug(&self) -> &'static str {
        match self {
            City::Boston => "boston",
            City::Nyc => "nyc",
            City::Miami => "miami",
        }
    }

    /// Path of the landing page for this city
    pub fn landing_path(&self) -> String {
        format!("/locations/{}", self.slug())
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for City {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "boston" => Ok(City::Boston),
            "nyc" | "new-york" => Ok(City::Nyc),
            "miami" => Ok(City::Miami),
            _ => Err(SharedError::InvalidCity { input: s.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_city() {
        assert_eq!("boston".parse::<City>().unwrap(), City::Boston);
        assert_eq!("NYC".parse::<City>().unwrap(), City::Nyc);
        assert_eq!("new-york".parse::<City>().unwrap(), City::Nyc);
        assert_eq!(" Miami ".parse::<City>().unwrap(), City::Miami);
        assert!(matches!(
            "chicago".parse::<City>(),
            Err(SharedError::InvalidCity { .. })
        ));
    }

    #[test]
    fn test_slug_round_trips_through_from_str() {
        for city in City::ALL {
            assert_eq!(city.slug().parse::<City>().unwrap(), city);
        }
    }

    #[test]
    fn test_landing_path() {
        assert_eq!(City::Nyc.landing_path(), "/locations/nyc");
    }
}
