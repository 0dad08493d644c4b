// Location registry module
//
// Holds the static, ordered list of government offices rendered as nodes on
// the network map. The registry is validated once at load time and is
// read-only afterwards.

use std::collections::HashSet;
use thiserror::Error;

/// Side length of the normalized coordinate plane (0-100)
pub const PLANE_EXTENT: f64 = 100.0;

/// Office category, used for node styling and connection derivation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// The single distinguished node all regional connections radiate from
    Headquarters,
    Ministry,
    Agency,
    Commission,
    /// Regional office, connected to headquarters
    Regional,
}

impl Category {
    /// Short display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Headquarters => "Headquarters",
            Self::Ministry => "Ministry",
            Self::Agency => "Agency",
            Self::Commission => "Commission",
            Self::Regional => "Regional Office",
        }
    }
}

/// Normalized position in the 0-100 plane (y grows downwards)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn in_plane(&self) -> bool {
        (0.0..=PLANE_EXTENT).contains(&self.x) && (0.0..=PLANE_EXTENT).contains(&self.y)
    }
}

/// One government office rendered as a node
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    /// Unique identifier across the registry
    pub name: String,
    /// Display label for the city
    pub city: String,
    pub position: Position,
    pub category: Category,
}

impl Location {
    pub fn new(name: &str, city: &str, x: f64, y: f64, category: Category) -> Self {
        Self {
            name: name.to_string(),
            city: city.to_string(),
            position: Position::new(x, y),
            category,
        }
    }

    pub fn is_headquarters(&self) -> bool {
        self.category == Category::Headquarters
    }

    pub fn is_regional(&self) -> bool {
        self.category == Category::Regional
    }
}

/// Malformed static registry, detected before the first render
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("location registry is empty")]
    Empty,

    #[error("location registry has no headquarters")]
    MissingHeadquarters,

    #[error("location registry has {} headquarters: {}", .names.len(), .names.join(", "))]
    MultipleHeadquarters { names: Vec<String> },

    #[error("duplicate location name '{name}'")]
    DuplicateName { name: String },

    #[error("location '{name}' at ({x}, {y}) lies outside the 0-100 plane")]
    PositionOutOfRange { name: String, x: f64, y: f64 },
}

/// Validated, immutable list of locations
#[derive(Debug, Clone)]
pub struct LocationRegistry {
    locations: Vec<Location>,
    headquarters_idx: usize,
}

impl LocationRegistry {
    /// Validate and build a registry
    ///
    /// Rejects empty registries, duplicate names, out-of-plane positions and
    /// any headquarters count other than exactly one.
    pub fn new(locations: Vec<Location>) -> Result<Self, ConfigurationError> {
        if locations.is_empty() {
            return Err(ConfigurationError::Empty);
        }

        let mut seen = HashSet::new();
        for loc in &locations {
            if !seen.insert(loc.name.as_str()) {
                return Err(ConfigurationError::DuplicateName {
                    name: loc.name.clone(),
                });
            }
            if !loc.position.in_plane() {
                return Err(ConfigurationError::PositionOutOfRange {
                    name: loc.name.clone(),
                    x: loc.position.x,
                    y: loc.position.y,
                });
            }
        }

        let hq: Vec<usize> = locations
            .iter()
            .enumerate()
            .filter(|(_, loc)| loc.is_headquarters())
            .map(|(idx, _)| idx)
            .collect();

        let headquarters_idx = match hq.as_slice() {
            [] => return Err(ConfigurationError::MissingHeadquarters),
            [idx] => *idx,
            _ => {
                return Err(ConfigurationError::MultipleHeadquarters {
                    names: hq.iter().map(|&i| locations[i].name.clone()).collect(),
                })
            }
        };

        Ok(Self {
            locations,
            headquarters_idx,
        })
    }

    /// The compiled-in OHCS network
    pub fn ghana() -> Result<Self, ConfigurationError> {
        use Category::*;

        Self::new(vec![
            Location::new("OHCS Headquarters", "Accra", 62.0, 80.0, Headquarters),
            Location::new("Ministry of Finance", "Accra", 70.0, 76.0, Ministry),
            Location::new("Ministry of Education", "Accra", 55.0, 77.0, Ministry),
            Location::new("Ministry of Communications", "Accra", 68.0, 86.0, Ministry),
            Location::new("National Information Technology Agency", "Accra", 75.0, 82.0, Agency),
            Location::new("Civil Service Training Centre", "Accra", 56.0, 85.0, Agency),
            Location::new("Public Services Commission", "Accra", 63.0, 90.0, Commission),
            Location::new("Ashanti Regional Office", "Kumasi", 42.0, 62.0, Regional),
            Location::new("Northern Regional Office", "Tamale", 52.0, 28.0, Regional),
            Location::new("Western Regional Office", "Takoradi", 32.0, 90.0, Regional),
            Location::new("Central Regional Office", "Cape Coast", 46.0, 91.0, Regional),
            Location::new("Volta Regional Office", "Ho", 78.0, 66.0, Regional),
            Location::new("Eastern Regional Office", "Koforidua", 60.0, 68.0, Regional),
            Location::new("Bono Regional Office", "Sunyani", 30.0, 52.0, Regional),
            Location::new("Upper East Regional Office", "Bolgatanga", 58.0, 10.0, Regional),
            Location::new("Upper West Regional Office", "Wa", 24.0, 14.0, Regional),
        ])
    }

    /// The unique headquarters location
    pub fn headquarters(&self) -> &Location {
        &self.locations[self.headquarters_idx]
    }

    /// Regional offices in registry order
    pub fn regional_offices(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter().filter(|loc| loc.is_regional())
    }

    /// Derived (headquarters, regional office) pairs
    pub fn connections(&self) -> impl Iterator<Item = (&Location, &Location)> {
        let hq = self.headquarters();
        self.regional_offices().map(move |region| (hq, region))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Always false for a validated registry
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Location> {
        self.locations.iter().find(|loc| loc.name == name)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.locations.iter().position(|loc| loc.name == name)
    }

    pub fn by_index(&self, idx: usize) -> Option<&Location> {
        self.locations.get(idx)
    }
}
