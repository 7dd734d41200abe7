//! Order record shapes as supplied by the ordering application.

use serde::{Deserialize, Serialize};

use crate::tooth::ToothRef;

/// One line of clinical work on a single tooth.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderItem {
    pub tooth_number: Option<ToothRef>,
    pub prosthesis_type: Option<String>,
    pub material: Option<String>,
    /// Absent, empty or `"없음"` means no implant.
    pub implant_brand: Option<String>,
    pub is_pontic: Option<bool>,
    pub shade: Option<String>,
}

impl OrderItem {
    pub fn new(tooth: impl Into<ToothRef>) -> Self {
        Self {
            tooth_number: Some(tooth.into()),
            ..Self::default()
        }
    }

    pub fn with_prosthesis(mut self, prosthesis_type: impl Into<String>) -> Self {
        self.prosthesis_type = Some(prosthesis_type.into());
        self
    }

    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material = Some(material.into());
        self
    }

    pub fn with_implant(mut self, brand: impl Into<String>) -> Self {
        self.implant_brand = Some(brand.into());
        self
    }

    pub fn with_shade(mut self, shade: impl Into<String>) -> Self {
        self.shade = Some(shade.into());
        self
    }

    pub fn pontic(mut self) -> Self {
        self.is_pontic = Some(true);
        self
    }
}

/// Teeth forming one structural bridge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeGroup {
    pub teeth: Vec<ToothRef>,
}

/// Implant brand declared for a set of teeth. Wins over per-item brands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImplantGroup {
    pub teeth: Vec<ToothRef>,
    pub brand: String,
}

/// Prosthesis type and material declared for a set of teeth. Wins over per-item fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProsthesisGroup {
    pub teeth: Vec<ToothRef>,
    pub prosthesis_type: Option<String>,
    pub material: Option<String>,
}

/// Non-abutment filler teeth within a bridge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PonticGroup {
    pub teeth: Vec<ToothRef>,
}

/// The slice of a persisted order that charting and summaries read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderRecord {
    pub items: Vec<OrderItem>,
    pub bridge_groups: Vec<BridgeGroup>,
    pub implant_groups: Vec<ImplantGroup>,
    pub prosthesis_groups: Vec<ProsthesisGroup>,
    pub pontic_groups: Vec<PonticGroup>,
}

impl OrderRecord {
    pub fn new(items: Vec<OrderItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Raw tooth references of every item, in item order.
    pub fn tooth_refs(&self) -> Vec<ToothRef> {
        self.items
            .iter()
            .filter_map(|item| item.tooth_number.clone())
            .collect()
    }
}
