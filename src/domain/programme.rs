//! Programme value object - the academic track a student is admitted into.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

use crate::errors::AppError;

/// Enumerated academic programmes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Programme {
    Science,
    #[serde(rename = "General Arts")]
    GeneralArts,
    #[serde(rename = "Visual Arts")]
    VisualArts,
    Business,
    #[serde(rename = "Home Economics")]
    HomeEconomics,
}

impl Programme {
    /// Every programme, in display order
    pub const ALL: [Programme; 5] = [
        Programme::Science,
        Programme::GeneralArts,
        Programme::VisualArts,
        Programme::Business,
        Programme::HomeEconomics,
    ];

    /// Human-readable label, also the stored and serialized value
    pub fn label(&self) -> &'static str {
        match self {
            Programme::Science => "Science",
            Programme::GeneralArts => "General Arts",
            Programme::VisualArts => "Visual Arts",
            Programme::Business => "Business",
            Programme::HomeEconomics => "Home Economics",
        }
    }

    /// Comma separated list of labels for error messages
    pub fn labels() -> String {
        Self::ALL
            .iter()
            .map(Programme::label)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for Programme {
    type Err = AppError;

    /// Parse a label, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                AppError::validation(format!(
                    "Programme must be one of: {}",
                    Self::labels()
                ))
            })
    }
}

impl std::fmt::Display for Programme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl From<Programme> for String {
    fn from(programme: Programme) -> Self {
        programme.label().to_string()
    }
}
