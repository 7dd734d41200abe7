//! Display grouping of order items.
//!
//! Items are scanned once in order. Each item resolves to a display text and
//! material; items sharing both land in the same [`DisplayGroup`]. Groups are
//! returned in first-encounter order.

use std::collections::HashMap;

use dental_model::{OrderRecord, ToothPosition};
use serde::Serialize;
use tracing::{debug, trace};

use crate::labels::{Labels, MISSING_VALUE, NO_IMPLANT};
use crate::normalize::normalize;
use crate::resolve::{IMPLANT_CHAIN, MATERIAL_CHAIN, OverrideMaps, PROSTHESIS_CHAIN, resolve};

/// Teeth sharing one resolved prosthesis description and material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayGroup {
    pub display_text: String,
    pub material: String,
    /// Member teeth in first-encounter order.
    pub teeth: Vec<ToothPosition>,
    /// Members that are bridge fillers. Always a subset of `teeth`.
    pub pontic_teeth: Vec<ToothPosition>,
    pub is_implant: bool,
}

impl DisplayGroup {
    fn new(display_text: String, material: String, is_implant: bool) -> Self {
        Self {
            display_text,
            material,
            teeth: Vec::new(),
            pontic_teeth: Vec::new(),
            is_implant,
        }
    }

    pub fn key(&self) -> String {
        group_key(&self.display_text, &self.material)
    }

    /// Whether `tooth` is a member. `legacy` also accepts quadrant-0 members
    /// at the same position.
    pub fn contains(&self, tooth: &ToothPosition, legacy: bool) -> bool {
        self.teeth.iter().any(|member| {
            if legacy {
                member.matches_legacy(tooth)
            } else {
                member == tooth
            }
        })
    }
}

fn group_key(display_text: &str, material: &str) -> String {
    format!("{display_text}|{material}")
}

/// Prosthesis description shown for a tooth, annotated with the implant brand.
pub fn display_text(prosthesis_type: &str, implant_brand: Option<&str>, labels: &Labels) -> String {
    match implant_brand {
        Some(brand) if prosthesis_type == MISSING_VALUE => format!("{} {brand}", labels.implant),
        Some(brand) => format!("{prosthesis_type} ({} {brand})", labels.implant),
        None => prosthesis_type.to_string(),
    }
}

/// Group the record's items by resolved `(display text, material)`.
pub fn build_display_groups(record: &OrderRecord, labels: &Labels) -> Vec<DisplayGroup> {
    let maps = OverrideMaps::from_record(record);
    let mut groups: Vec<DisplayGroup> = Vec::new();
    let mut index_by_key: HashMap<String, usize> = HashMap::new();

    for (row, item) in record.items.iter().enumerate() {
        let tooth = item.tooth_number.as_ref().and_then(normalize);
        if tooth.is_none() {
            trace!(row, "order item has no resolvable tooth number");
        }

        let prosthesis_type =
            resolve(PROSTHESIS_CHAIN, &maps, item, tooth).unwrap_or(MISSING_VALUE);
        let material = resolve(MATERIAL_CHAIN, &maps, item, tooth).unwrap_or(MISSING_VALUE);
        let implant_brand =
            resolve(IMPLANT_CHAIN, &maps, item, tooth).filter(|brand| *brand != NO_IMPLANT);

        let text = display_text(prosthesis_type, implant_brand, labels);
        let key = group_key(&text, material);
        let index = *index_by_key.entry(key).or_insert_with(|| {
            debug!(display_text = %text, material, "new display group");
            groups.push(DisplayGroup::new(
                text.clone(),
                material.to_string(),
                implant_brand.is_some(),
            ));
            groups.len() - 1
        });

        if let Some(tooth) = tooth {
            let group = &mut groups[index];
            group.teeth.push(tooth);
            if maps.is_pontic(&tooth) {
                group.pontic_teeth.push(tooth);
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use dental_model::{ImplantGroup, OrderItem, ProsthesisGroup, ToothRef};

    use super::*;

    fn ids(teeth: &[ToothPosition]) -> Vec<u16> {
        teeth.iter().map(ToothPosition::composite_id).collect()
    }

    #[test]
    fn implant_annotation_formats() {
        let labels = Labels::ENGLISH;
        assert_eq!(display_text("-", Some("Osstem"), &labels), "Implant Osstem");
        assert_eq!(
            display_text("Crown", Some("Osstem"), &labels),
            "Crown (Implant Osstem)"
        );
        assert_eq!(display_text("Crown", None, &labels), "Crown");
        assert_eq!(
            display_text("-", Some("Osstem"), &Labels::KOREAN),
            "임플란트 Osstem"
        );
    }

    #[test]
    fn no_implant_sentinel_is_not_an_implant() {
        let record = OrderRecord::new(vec![
            OrderItem::new(11).with_prosthesis("Crown").with_implant("없음"),
            OrderItem::new(12).with_prosthesis("Crown").with_implant(""),
        ]);
        let groups = build_display_groups(&record, &Labels::ENGLISH);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].display_text, "Crown");
        assert_eq!(groups[0].material, "-");
        assert!(!groups[0].is_implant);
    }

    #[test]
    fn overrides_merge_items_into_one_group() {
        let record = OrderRecord {
            items: vec![
                OrderItem::new(21).with_prosthesis("Crown").with_material("PFM"),
                OrderItem::new(22).with_prosthesis("Inlay").with_material("Gold"),
                OrderItem::new(23).with_prosthesis("Crown").with_material("PFM"),
            ],
            prosthesis_groups: vec![ProsthesisGroup {
                teeth: vec![ToothRef::from(22)],
                prosthesis_type: Some("Crown".to_string()),
                material: Some("PFM".to_string()),
            }],
            ..OrderRecord::default()
        };
        let groups = build_display_groups(&record, &Labels::ENGLISH);
        assert_eq!(groups.len(), 1);
        assert_eq!(ids(&groups[0].teeth), vec![21, 22, 23]);
    }

    #[test]
    fn implant_group_overrides_item_brand() {
        let record = OrderRecord {
            items: vec![
                OrderItem::new(36).with_prosthesis("Crown").with_implant("Dentium"),
                OrderItem::new(37).with_prosthesis("Crown"),
            ],
            implant_groups: vec![ImplantGroup {
                teeth: vec![ToothRef::from(36), ToothRef::from(37)],
                brand: "Straumann".to_string(),
            }],
            ..OrderRecord::default()
        };
        let groups = build_display_groups(&record, &Labels::ENGLISH);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].display_text, "Crown (Implant Straumann)");
        assert!(groups[0].is_implant);
    }

    #[test]
    fn groups_keep_first_encounter_order() {
        let record = OrderRecord::new(vec![
            OrderItem::new(31).with_prosthesis("Onlay"),
            OrderItem::new(11).with_prosthesis("Crown"),
            OrderItem::new(32).with_prosthesis("Onlay"),
        ]);
        let groups = build_display_groups(&record, &Labels::ENGLISH);
        let texts: Vec<&str> = groups.iter().map(|g| g.display_text.as_str()).collect();
        assert_eq!(texts, vec!["Onlay", "Crown"]);
        assert_eq!(ids(&groups[0].teeth), vec![31, 32]);
    }

    #[test]
    fn pontic_members_are_tracked() {
        let record = OrderRecord::new(vec![
            OrderItem::new(14).with_prosthesis("Bridge"),
            OrderItem::new(15).with_prosthesis("Bridge").pontic(),
            OrderItem::new(16).with_prosthesis("Bridge"),
        ]);
        let groups = build_display_groups(&record, &Labels::ENGLISH);
        assert_eq!(ids(&groups[0].teeth), vec![14, 15, 16]);
        assert_eq!(ids(&groups[0].pontic_teeth), vec![15]);
    }

    #[test]
    fn item_without_tooth_still_creates_group() {
        let mut item = OrderItem::default().with_prosthesis("Denture");
        item.tooth_number = Some(ToothRef::from("n/a"));
        let record = OrderRecord::new(vec![item]);
        let groups = build_display_groups(&record, &Labels::ENGLISH);
        assert_eq!(groups.len(), 1);
        assert!(groups[0].teeth.is_empty());
    }

    #[test]
    fn contains_honours_legacy_flag() {
        let record = OrderRecord::new(vec![OrderItem::new("4").with_prosthesis("Crown")]);
        let groups = build_display_groups(&record, &Labels::ENGLISH);
        let tooth: ToothPosition = "24".parse().unwrap();
        assert!(groups[0].contains(&tooth, true));
        assert!(!groups[0].contains(&tooth, false));
    }
}
