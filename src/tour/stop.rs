use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::Position;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StopId(String);

impl StopId {
    pub fn new(str: &str) -> Self {
        Self(str.to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Descriptive payload carried through routing untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StopDetails {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visit_minutes: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    pub id: StopId,
    #[serde(
        rename = "coordinates",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub position: Option<Position>,
    #[serde(flatten)]
    pub details: StopDetails,
}

impl Stop {
    pub fn new(id: StopId, name: String, position: Option<Position>) -> Self {
        Self {
            id,
            position,
            details: StopDetails {
                name,
                ..Default::default()
            },
        }
    }

    pub fn at(id: &str, lat: f64, lng: f64) -> Self {
        Self::new(StopId::new(id), id.to_owned(), Some(Position { lat, lng }))
    }

    pub fn unplaced(id: &str) -> Self {
        Self::new(StopId::new(id), id.to_owned(), None)
    }

    pub fn name(&self) -> &str {
        &self.details.name
    }
}
