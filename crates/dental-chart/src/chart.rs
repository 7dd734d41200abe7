//! Chart models for the compact and detailed tooth charts.
//!
//! Both charts render the same 32 fixed slots. Layout order, viewer-facing:
//! upper right 8→1, upper left 1→8, lower right 8→1, lower left 1→8.

use dental_model::{ChartOptions, OrderRecord, ToothPosition, ToothRef};
use serde::Serialize;

use crate::grouping::{DisplayGroup, build_display_groups};
use crate::labels::Labels;
use crate::selection::SelectionSet;

/// Quadrants in layout order, with whether positions run distal-first.
const QUADRANT_LAYOUT: [(u8, bool); 4] = [(1, true), (2, false), (4, true), (3, false)];

pub const SLOTS_PER_ROW: usize = 16;

/// One fixed tooth position on the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartSlot {
    pub quadrant: u8,
    pub position: u8,
}

impl ChartSlot {
    pub fn tooth(&self) -> ToothPosition {
        ToothPosition::lenient(self.quadrant, self.position)
    }

    pub fn is_upper(&self) -> bool {
        matches!(self.quadrant, 1 | 2)
    }
}

/// The 32 slots in layout order.
pub fn chart_layout() -> Vec<ChartSlot> {
    QUADRANT_LAYOUT
        .iter()
        .flat_map(|&(quadrant, distal_first)| {
            let positions: Vec<u8> = if distal_first {
                (1..=8).rev().collect()
            } else {
                (1..=8).collect()
            };
            positions
                .into_iter()
                .map(move |position| ChartSlot { quadrant, position })
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlotState {
    pub slot: ChartSlot,
    pub selected: bool,
}

/// Selection flags only; slots are labelled by position number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompactChart {
    pub slots: Vec<SlotState>,
}

impl CompactChart {
    pub fn new(selected_refs: &[ToothRef], options: &ChartOptions) -> Self {
        let selection = SelectionSet::new(selected_refs, options.legacy_matching);
        let slots = chart_layout()
            .into_iter()
            .map(|slot| SlotState {
                slot,
                selected: selection.contains(slot.quadrant, slot.position),
            })
            .collect();
        Self { slots }
    }

    pub fn selected_count(&self) -> usize {
        self.slots.iter().filter(|state| state.selected).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailedSlot {
    pub slot: ChartSlot,
    pub selected: bool,
    /// Indices into [`DetailedChart::groups`] whose teeth include this slot.
    pub group_indices: Vec<usize>,
}

/// Selection plus the display groups behind each selected tooth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailedChart {
    pub groups: Vec<DisplayGroup>,
    pub slots: Vec<DetailedSlot>,
    /// Number of distinct selected slots.
    pub selected_count: usize,
}

impl DetailedChart {
    pub fn new(record: &OrderRecord, options: &ChartOptions) -> Self {
        let labels = Labels::for_language(options.language);
        let groups = build_display_groups(record, labels);
        let legacy = options.legacy_matching.is_enabled();
        let compact = CompactChart::new(&record.tooth_refs(), options);

        let slots: Vec<DetailedSlot> = compact
            .slots
            .iter()
            .map(|state| {
                let group_indices = if state.selected {
                    let tooth = state.slot.tooth();
                    groups
                        .iter()
                        .enumerate()
                        .filter(|(_, group)| group.contains(&tooth, legacy))
                        .map(|(index, _)| index)
                        .collect()
                } else {
                    Vec::new()
                };
                DetailedSlot {
                    slot: state.slot,
                    selected: state.selected,
                    group_indices,
                }
            })
            .collect();

        Self {
            selected_count: compact.selected_count(),
            groups,
            slots,
        }
    }

    /// Display groups covering `slot`.
    pub fn groups_for(&self, slot: &DetailedSlot) -> Vec<&DisplayGroup> {
        slot.group_indices
            .iter()
            .filter_map(|&index| self.groups.get(index))
            .collect()
    }
}
