//! Label sets for rendered summaries.

use dental_model::SummaryLanguage;

/// Placeholder for a missing prosthesis type, material or summary.
pub const MISSING_VALUE: &str = "-";

/// Implant brand value meaning "no implant", regardless of summary language.
pub const NO_IMPLANT: &str = "없음";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub implant: &'static str,
    pub pontic: &'static str,
    pub single: &'static str,
    pub bridge: &'static str,
}

impl Labels {
    pub const ENGLISH: Labels = Labels {
        implant: "Implant",
        pontic: "pontic",
        single: "Single",
        bridge: "Bridge",
    };

    pub const KOREAN: Labels = Labels {
        implant: "임플란트",
        pontic: "폰틱",
        single: "싱글",
        bridge: "브릿지",
    };

    pub fn for_language(language: SummaryLanguage) -> &'static Labels {
        match language {
            SummaryLanguage::English => &Self::ENGLISH,
            SummaryLanguage::Korean => &Self::KOREAN,
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::ENGLISH
    }
}
