//! Text summaries for the printed order document.

use std::collections::HashSet;

use dental_model::{BridgeGroup, ChartOptions, OrderItem, OrderRecord, ToothPosition};
use serde::Serialize;

use crate::grouping::{DisplayGroup, build_display_groups};
use crate::labels::{Labels, MISSING_VALUE};
use crate::normalize::{normalize, normalize_all};

fn join_ids(teeth: &[ToothPosition]) -> String {
    teeth
        .iter()
        .map(ToothPosition::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

fn join_positions(teeth: &[ToothPosition], separator: &str) -> String {
    teeth
        .iter()
        .map(|tooth| tooth.position().to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

/// `#11,12 Crown Zirconia`, with `(pontic: #12)` appended when the group has pontics.
pub fn format_display_group(group: &DisplayGroup, labels: &Labels) -> String {
    let mut line = format!(
        "#{} {} {}",
        join_ids(&group.teeth),
        group.display_text,
        group.material
    );
    if !group.pontic_teeth.is_empty() {
        line.push_str(&format!(
            " ({}: #{})",
            labels.pontic,
            join_ids(&group.pontic_teeth)
        ));
    }
    line
}

/// `Single: 1, 6 / Bridge: 4-5-6` using quadrant-relative positions.
///
/// Only bridges sharing at least one tooth with `all_teeth` are listed.
pub fn format_single_and_bridge_summary(
    all_teeth: &[ToothPosition],
    bridge_groups: &[BridgeGroup],
    labels: &Labels,
) -> String {
    if all_teeth.is_empty() {
        return MISSING_VALUE.to_string();
    }

    let ordered_teeth: HashSet<ToothPosition> = all_teeth.iter().copied().collect();
    let bridges: Vec<Vec<ToothPosition>> = bridge_groups
        .iter()
        .map(|group| normalize_all(&group.teeth))
        .filter(|teeth| teeth.iter().any(|tooth| ordered_teeth.contains(tooth)))
        .collect();
    let bridge_teeth: HashSet<ToothPosition> = bridges.iter().flatten().copied().collect();

    let mut seen = HashSet::new();
    let singles: Vec<ToothPosition> = all_teeth
        .iter()
        .copied()
        .filter(|tooth| !bridge_teeth.contains(tooth) && seen.insert(*tooth))
        .collect();

    let mut clauses = Vec::with_capacity(2);
    if !singles.is_empty() {
        clauses.push(format!("{}: {}", labels.single, join_positions(&singles, ", ")));
    }
    if !bridges.is_empty() {
        let spans: Vec<String> = bridges
            .iter()
            .map(|teeth| join_positions(teeth, "-"))
            .collect();
        clauses.push(format!("{}: {}", labels.bridge, spans.join(", ")));
    }
    clauses.join(" / ")
}

/// Distinct shades in first-occurrence order, or `-` when none are recorded.
pub fn format_shade_summary(items: &[OrderItem]) -> String {
    let mut seen = HashSet::new();
    let shades: Vec<&str> = items
        .iter()
        .filter_map(|item| item.shade.as_deref())
        .map(str::trim)
        .filter(|shade| !shade.is_empty() && *shade != MISSING_VALUE)
        .filter(|shade| seen.insert(*shade))
        .collect();
    if shades.is_empty() {
        MISSING_VALUE.to_string()
    } else {
        shades.join(", ")
    }
}

/// Every derived text field of the printed order document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderDocument {
    pub groups: Vec<DisplayGroup>,
    pub group_lines: Vec<String>,
    pub teeth_summary: String,
    pub shade_summary: String,
}

impl OrderDocument {
    pub fn assemble(record: &OrderRecord, options: &ChartOptions) -> Self {
        let labels = Labels::for_language(options.language);
        let groups = build_display_groups(record, labels);
        let group_lines = groups
            .iter()
            .map(|group| format_display_group(group, labels))
            .collect();
        let all_teeth: Vec<ToothPosition> = record
            .items
            .iter()
            .filter_map(|item| item.tooth_number.as_ref())
            .filter_map(normalize)
            .collect();
        Self {
            groups,
            group_lines,
            teeth_summary: format_single_and_bridge_summary(
                &all_teeth,
                &record.bridge_groups,
                labels,
            ),
            shade_summary: format_shade_summary(&record.items),
        }
    }

    /// Plain-text rendering: one line per group, then the tooth and shade summaries.
    pub fn to_text(&self) -> String {
        let mut lines = self.group_lines.clone();
        lines.push(self.teeth_summary.clone());
        lines.push(self.shade_summary.clone());
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use dental_model::ToothRef;

    use super::*;

    fn teeth(ids: &[&str]) -> Vec<ToothPosition> {
        ids.iter().map(|id| id.parse().unwrap()).collect()
    }

    #[test]
    fn group_line_lists_teeth_and_pontics() {
        let group = DisplayGroup {
            display_text: "Bridge".to_string(),
            material: "Zirconia".to_string(),
            teeth: teeth(&["14", "15", "16"]),
            pontic_teeth: teeth(&["15"]),
            is_implant: false,
        };
        assert_eq!(
            format_display_group(&group, &Labels::ENGLISH),
            "#14,15,16 Bridge Zirconia (pontic: #15)"
        );
        assert_eq!(
            format_display_group(&group, &Labels::KOREAN),
            "#14,15,16 Bridge Zirconia (폰틱: #15)"
        );
    }

    #[test]
    fn summary_is_dash_without_teeth() {
        assert_eq!(format_single_and_bridge_summary(&[], &[], &Labels::ENGLISH), "-");
    }

    #[test]
    fn summary_splits_single_and_bridge_teeth() {
        let bridges = vec![BridgeGroup {
            teeth: vec![ToothRef::from(24), ToothRef::from(25), ToothRef::from(26)],
        }];
        let summary = format_single_and_bridge_summary(
            &teeth(&["11", "24", "25", "26", "36"]),
            &bridges,
            &Labels::ENGLISH,
        );
        assert_eq!(summary, "Single: 1, 6 / Bridge: 4-5-6");
    }

    #[test]
    fn summary_skips_bridges_outside_the_order() {
        let bridges = vec![BridgeGroup {
            teeth: vec![ToothRef::from(44), ToothRef::from(45)],
        }];
        let summary =
            format_single_and_bridge_summary(&teeth(&["11"]), &bridges, &Labels::KOREAN);
        assert_eq!(summary, "싱글: 1");
    }

    #[test]
    fn shade_summary_ignores_blank_and_dash() {
        let items = vec![
            OrderItem::new(11).with_shade("-"),
            OrderItem::new(12).with_shade(" "),
            OrderItem::new(13),
        ];
        assert_eq!(format_shade_summary(&items), "-");
    }
}
