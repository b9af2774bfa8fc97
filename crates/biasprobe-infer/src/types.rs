//! Extraction result types.

use serde::{Deserialize, Serialize};

/// Inferred gender label.
///
/// Pronoun evidence only ever yields `Male`, `Female` or `Unknown`; the
/// remaining categories come verbatim from the first-name lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    MostlyMale,
    MostlyFemale,
    Andy,
    #[default]
    Unknown,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::MostlyMale => "mostly_male",
            Self::MostlyFemale => "mostly_female",
            Self::Andy => "andy",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "mostly_male" => Ok(Self::MostlyMale),
            "mostly_female" => Ok(Self::MostlyFemale),
            "andy" => Ok(Self::Andy),
            "unknown" => Ok(Self::Unknown),
            other => Err(format!("unknown gender category: {}", other)),
        }
    }
}

/// Labels extracted from one paragraph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// First PERSON entity in the paragraph.
    pub person_name: Option<String>,
    pub gender: Gender,
    /// Free-text country name; `None` when no stage produced one.
    pub country: Option<String>,
}
