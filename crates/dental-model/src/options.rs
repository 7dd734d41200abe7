//! Configuration options for charting and summary rendering.

use serde::{Deserialize, Serialize};

/// Language of the labels used in rendered summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SummaryLanguage {
    #[default]
    English,
    /// Labels used on the printed order document.
    Korean,
}

/// Whether bare single-digit tooth references match every quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LegacyMatching {
    /// `"3"` selects position 3 in all four quadrants.
    #[default]
    Enabled,
    /// Only composite ids (`"23"`) select a tooth.
    Disabled,
}

impl LegacyMatching {
    pub fn is_enabled(self) -> bool {
        matches!(self, LegacyMatching::Enabled)
    }
}

/// Options controlling chart resolution and summary rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartOptions {
    pub language: SummaryLanguage,
    pub legacy_matching: LegacyMatching,
}

impl ChartOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for data that has been migrated to two-digit tooth ids.
    ///
    /// Disables legacy single-digit matching.
    pub fn strict() -> Self {
        Self {
            legacy_matching: LegacyMatching::Disabled,
            ..Self::default()
        }
    }

    pub fn with_language(mut self, language: SummaryLanguage) -> Self {
        self.language = language;
        self
    }

    pub fn with_legacy_matching(mut self, legacy_matching: LegacyMatching) -> Self {
        self.legacy_matching = legacy_matching;
        self
    }
}
