pub mod error;
pub mod options;
pub mod order;
pub mod tooth;

pub use error::{ModelError, Result};
pub use options::{ChartOptions, LegacyMatching, SummaryLanguage};
pub use order::{
    BridgeGroup, ImplantGroup, OrderItem, OrderRecord, PonticGroup, ProsthesisGroup,
};
pub use tooth::{LEGACY_QUADRANT, ToothPosition, ToothRef, composite_id};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_options_disable_legacy_matching() {
        let options = ChartOptions::strict();
        assert!(!options.legacy_matching.is_enabled());
        assert_eq!(options.language, SummaryLanguage::English);
        assert!(ChartOptions::default().legacy_matching.is_enabled());
    }

    #[test]
    fn options_serialize() {
        let options = ChartOptions::new().with_language(SummaryLanguage::Korean);
        let json = serde_json::to_string(&options).expect("serialize options");
        let round: ChartOptions = serde_json::from_str(&json).expect("deserialize options");
        assert_eq!(round, options);
    }
}
