//! Per-programme enrolment counts.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Programme;

/// Student counts keyed by programme label.
///
/// Every programme is always present, zero counts included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProgrammeSummary {
    #[serde(rename = "Science")]
    pub science: u64,
    #[serde(rename = "General Arts")]
    pub general_arts: u64,
    #[serde(rename = "Visual Arts")]
    pub visual_arts: u64,
    #[serde(rename = "Business")]
    pub business: u64,
    #[serde(rename = "Home Economics")]
    pub home_economics: u64,
}

impl ProgrammeSummary {
    /// Build a summary from grouped counts; missing programmes count as zero.
    pub fn from_counts(counts: impl IntoIterator<Item = (Programme, u64)>) -> Self {
        let mut summary = Self::default();
        for (programme, count) in counts {
            *summary.slot(programme) += count;
        }
        summary
    }

    /// Count for one programme
    pub fn get(&self, programme: Programme) -> u64 {
        match programme {
            Programme::Science => self.science,
            Programme::GeneralArts => self.general_arts,
            Programme::VisualArts => self.visual_arts,
            Programme::Business => self.business,
            Programme::HomeEconomics => self.home_economics,
        }
    }

    /// Sum over all programmes
    pub fn total(&self) -> u64 {
        Programme::ALL.iter().map(|p| self.get(*p)).sum()
    }

    fn slot(&mut self, programme: Programme) -> &mut u64 {
        match programme {
            Programme::Science => &mut self.science,
            Programme::GeneralArts => &mut self.general_arts,
            Programme::VisualArts => &mut self.visual_arts,
            Programme::Business => &mut self.business,
            Programme::HomeEconomics => &mut self.home_economics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_programmes_are_zero() {
        let summary = ProgrammeSummary::from_counts([(Programme::Business, 4)]);
        assert_eq!(summary.get(Programme::Business), 4);
        assert_eq!(summary.get(Programme::Science), 0);
        assert_eq!(summary.total(), 4);
    }

    #[test]
    fn test_serializes_all_five_labels() {
        let summary = ProgrammeSummary::from_counts([
            (Programme::Science, 2),
            (Programme::HomeEconomics, 1),
        ]);
        let json = serde_json::to_value(summary).unwrap();
        let map = json.as_object().unwrap();

        assert_eq!(map.len(), 5);
        for programme in Programme::ALL {
            assert!(map.contains_key(programme.label()), "{}", programme);
        }
        assert_eq!(map["Science"], 2);
        assert_eq!(map["General Arts"], 0);
        assert_eq!(map["Home Economics"], 1);
    }
}
