use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// Verbosity preset. Each tier renders every section of the tiers before it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportTier {
    Minimal,
    #[default]
    Standard,
    Extensive,
    ActionPlan,
}

impl ReportTier {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ReportTier::Minimal => "minimal",
            ReportTier::Standard => "standard",
            ReportTier::Extensive => "extensive",
            ReportTier::ActionPlan => "action-plan",
        }
    }
}

impl std::fmt::Display for ReportTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportTier {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimal" | "executive" => Ok(ReportTier::Minimal),
            "standard" => Ok(ReportTier::Standard),
            "extensive" => Ok(ReportTier::Extensive),
            "action-plan" | "action_plan" => Ok(ReportTier::ActionPlan),
            _ => Err(ReportError::UnknownTier(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("minimal".parse(), Ok(ReportTier::Minimal));
        assert_eq!("Executive".parse(), Ok(ReportTier::Minimal));
        assert_eq!("standard".parse(), Ok(ReportTier::Standard));
        assert_eq!("extensive".parse(), Ok(ReportTier::Extensive));
        assert_eq!("action_plan".parse(), Ok(ReportTier::ActionPlan));
        assert_eq!("action-plan".parse(), Ok(ReportTier::ActionPlan));
    }

    #[test]
    fn rejects_unknown_tier() {
        assert_eq!(
            "verbose".parse::<ReportTier>(),
            Err(ReportError::UnknownTier("verbose".to_string()))
        );
    }

    #[test]
    fn tiers_are_ordered_by_verbosity() {
        assert!(ReportTier::Minimal < ReportTier::Standard);
        assert!(ReportTier::Standard < ReportTier::Extensive);
        assert!(ReportTier::Extensive < ReportTier::ActionPlan);
    }
}
