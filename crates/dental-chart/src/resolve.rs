//! Effective per-tooth attributes.
//!
//! Each attribute is resolved through an ordered chain of sources; the first
//! source returning a non-blank value wins. Override collections are folded
//! into [`OverrideMaps`] once per call.

use std::collections::{HashMap, HashSet};

use dental_model::{OrderItem, OrderRecord, ToothPosition};
use tracing::debug;

use crate::normalize::normalize;

/// Prosthesis type and material declared by a prosthesis group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProsthesisOverride {
    pub prosthesis_type: Option<String>,
    pub material: Option<String>,
}

/// Per-tooth lookups built from a record's override collections.
///
/// When a tooth appears in several groups of the same kind, the later group
/// wins.
#[derive(Debug, Clone, Default)]
pub struct OverrideMaps {
    implant_brands: HashMap<ToothPosition, String>,
    prosthesis: HashMap<ToothPosition, ProsthesisOverride>,
    pontics: HashSet<ToothPosition>,
}

impl OverrideMaps {
    pub fn from_record(record: &OrderRecord) -> Self {
        let mut implant_brands = HashMap::new();
        for group in &record.implant_groups {
            for tooth in group.teeth.iter().filter_map(normalize) {
                if let Some(previous) = implant_brands.insert(tooth, group.brand.clone())
                    && previous != group.brand
                {
                    debug!(%tooth, %previous, brand = %group.brand, "implant brand replaced by later group");
                }
            }
        }

        let mut prosthesis = HashMap::new();
        for group in &record.prosthesis_groups {
            let entry = ProsthesisOverride {
                prosthesis_type: group.prosthesis_type.clone(),
                material: group.material.clone(),
            };
            for tooth in group.teeth.iter().filter_map(normalize) {
                if let Some(previous) = prosthesis.insert(tooth, entry.clone())
                    && previous != entry
                {
                    debug!(%tooth, "prosthesis override replaced by later group");
                }
            }
        }

        let pontics = record
            .pontic_groups
            .iter()
            .flat_map(|group| group.teeth.iter())
            .filter_map(normalize)
            .chain(
                record
                    .items
                    .iter()
                    .filter(|item| item.is_pontic == Some(true))
                    .filter_map(|item| item.tooth_number.as_ref())
                    .filter_map(normalize),
            )
            .collect();

        Self {
            implant_brands,
            prosthesis,
            pontics,
        }
    }

    pub fn implant_brand(&self, tooth: &ToothPosition) -> Option<&str> {
        self.implant_brands.get(tooth).map(String::as_str)
    }

    pub fn prosthesis(&self, tooth: &ToothPosition) -> Option<&ProsthesisOverride> {
        self.prosthesis.get(tooth)
    }

    pub fn is_pontic(&self, tooth: &ToothPosition) -> bool {
        self.pontics.contains(tooth)
    }
}

/// One step of a precedence chain.
pub type AttributeSource =
    for<'a> fn(&'a OverrideMaps, &'a OrderItem, Option<ToothPosition>) -> Option<&'a str>;

/// Prosthesis group, then the item's own field.
pub const PROSTHESIS_CHAIN: &[AttributeSource] = &[prosthesis_from_group, prosthesis_from_item];

/// Prosthesis group, then the item's own field.
pub const MATERIAL_CHAIN: &[AttributeSource] = &[material_from_group, material_from_item];

/// Implant group, then the item's own brand.
pub const IMPLANT_CHAIN: &[AttributeSource] = &[implant_from_group, implant_from_item];

/// First non-blank value produced by `chain`.
pub fn resolve<'a>(
    chain: &[AttributeSource],
    maps: &'a OverrideMaps,
    item: &'a OrderItem,
    tooth: Option<ToothPosition>,
) -> Option<&'a str> {
    chain.iter().find_map(|source| source(maps, item, tooth))
}

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.trim().is_empty())
}

fn prosthesis_from_group<'a>(
    maps: &'a OverrideMaps,
    _item: &'a OrderItem,
    tooth: Option<ToothPosition>,
) -> Option<&'a str> {
    non_blank(maps.prosthesis(&tooth?)?.prosthesis_type.as_ref())
}

fn prosthesis_from_item<'a>(
    _maps: &'a OverrideMaps,
    item: &'a OrderItem,
    _tooth: Option<ToothPosition>,
) -> Option<&'a str> {
    non_blank(item.prosthesis_type.as_ref())
}

fn material_from_group<'a>(
    maps: &'a OverrideMaps,
    _item: &'a OrderItem,
    tooth: Option<ToothPosition>,
) -> Option<&'a str> {
    non_blank(maps.prosthesis(&tooth?)?.material.as_ref())
}

fn material_from_item<'a>(
    _maps: &'a OverrideMaps,
    item: &'a OrderItem,
    _tooth: Option<ToothPosition>,
) -> Option<&'a str> {
    non_blank(item.material.as_ref())
}

fn implant_from_group<'a>(
    maps: &'a OverrideMaps,
    _item: &'a OrderItem,
    tooth: Option<ToothPosition>,
) -> Option<&'a str> {
    maps.implant_brand(&tooth?).filter(|v| !v.trim().is_empty())
}

fn implant_from_item<'a>(
    _maps: &'a OverrideMaps,
    item: &'a OrderItem,
    _tooth: Option<ToothPosition>,
) -> Option<&'a str> {
    non_blank(item.implant_brand.as_ref())
}
