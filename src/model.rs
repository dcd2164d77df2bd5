// Core structs: CoolSpot, FilterOptions, and the closed enumerations they use.
use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Semantic category of a spot. Closed set; transformers always pick one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpotType {
    Park,
    Fountain,
    Activity,
    Pool,
    Library,
    Museum,
}

/// Price bucket. Classification always lands in one of these; there is no
/// "unknown" arm on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PriceRange {
    #[serde(rename = "free")]
    Free,
    #[serde(rename = "under5")]
    Under5,
    #[serde(rename = "5to15")]
    FiveToFifteen,
    #[serde(rename = "15to30")]
    FifteenToThirty,
    #[serde(rename = "over30")]
    Over30,
}

/// One of the 20 Paris arrondissements. The inner number is guaranteed to be
/// in 1..=20 by every constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Arrondissement(u8);

impl Arrondissement {
    pub const FIRST: Arrondissement = Arrondissement(1);

    /// Out-of-range numbers fall back to the 1st arrondissement, matching the
    /// resolver's default for unrecognized input.
    pub fn from_number(n: u32) -> Self {
        if (1..=20).contains(&n) {
            Arrondissement(n as u8)
        } else {
            Arrondissement::FIRST
        }
    }

    pub fn number(&self) -> u8 {
        self.0
    }

    /// Ordinal display label: "1st", "2nd", "3rd", "4th" .. "20th".
    pub fn label(&self) -> String {
        match self.0 {
            1 => "1st".to_string(),
            2 => "2nd".to_string(),
            3 => "3rd".to_string(),
            n => format!("{}th", n),
        }
    }

    pub fn all() -> impl Iterator<Item = Arrondissement> {
        (1..=20).map(Arrondissement)
    }
}

impl fmt::Display for Arrondissement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for Arrondissement {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Unified entity produced by the record transformers. Immutable once built;
/// rebuilt from scratch on every refetch.
#[derive(Debug, Clone, Serialize)]
pub struct CoolSpot {
    pub id: String,
    pub name: String,
    pub spot_type: SpotType,
    pub arrondissement: Arrondissement,
    pub address: String,
    pub description: String,
    pub price_range: PriceRange,
    pub is_open: bool,
    pub opening_hours: String,
    pub rating: f64,
    pub features: Vec<String>,
    pub accessibility: bool,
    pub has_shade: bool,
    pub has_water: bool,
    pub coordinates: Coordinates,
}

/// Filter criteria. `Default` passes every spot: empty lists, cleared flags,
/// empty query.
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    pub types: Vec<SpotType>,
    pub arrondissements: Vec<Arrondissement>,
    pub price_ranges: Vec<PriceRange>,
    pub open_only: bool,
    pub accessible_only: bool,
    pub with_shade: bool,
    pub with_water: bool,
    pub search_query: String,
}

/// Aggregate counts shown alongside a filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpotStats {
    pub total_spots: usize,
    pub open_spots: usize,
    pub free_spots: usize,
    pub accessible_spots: usize,
}

/// The three upstream datasets, in aggregation precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    GreenSpaces,
    Fountains,
    Activities,
}

impl Dataset {
    /// Dataset identifier as used by the open-data API.
    pub fn id(&self) -> &'static str {
        match self {
            Dataset::GreenSpaces => "espaces_verts",
            Dataset::Fountains => "fontaines-a-boire",
            Dataset::Activities => "que-faire-a-paris-",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dataset::GreenSpaces => "green spaces",
            Dataset::Fountains => "fountains",
            Dataset::Activities => "activities",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{dataset} request failed: {source}")]
    Http {
        dataset: Dataset,
        #[source]
        source: reqwest::Error,
    },
    #[error("{dataset} request returned HTTP {status}")]
    Status {
        dataset: Dataset,
        status: reqwest::StatusCode,
    },
}

impl FetchError {
    pub fn dataset(&self) -> Dataset {
        match self {
            FetchError::Http { dataset, .. } => *dataset,
            FetchError::Status { dataset, .. } => *dataset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrondissement_labels_are_ordinal() {
        assert_eq!(Arrondissement::from_number(1).label(), "1st");
        assert_eq!(Arrondissement::from_number(2).label(), "2nd");
        assert_eq!(Arrondissement::from_number(3).label(), "3rd");
        assert_eq!(Arrondissement::from_number(4).label(), "4th");
        assert_eq!(Arrondissement::from_number(20).label(), "20th");
    }

    #[test]
    fn arrondissement_out_of_range_defaults_to_first() {
        assert_eq!(Arrondissement::from_number(0), Arrondissement::FIRST);
        assert_eq!(Arrondissement::from_number(21), Arrondissement::FIRST);
        assert_eq!(Arrondissement::from_number(75), Arrondissement::FIRST);
    }

    #[test]
    fn all_yields_twenty_districts() {
        let all: Vec<_> = Arrondissement::all().collect();
        assert_eq!(all.len(), 20);
        assert_eq!(all[0].label(), "1st");
        assert_eq!(all[19].label(), "20th");
    }
}
