//! Chart slot selection.
//!
//! A slot is selected when the reference list names its composite id
//! (`"23"` or `23`). With [`LegacyMatching::Enabled`] a bare position
//! (`"3"` or `3`) also selects that position in every quadrant.
//! Text references must spell the id exactly: `"07"` and `" 23 "` name
//! nothing.

use std::collections::HashSet;

use dental_model::{LegacyMatching, ToothRef, composite_id};

/// Lookup sets built once from a list of raw references.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    texts: HashSet<String>,
    numbers: HashSet<i64>,
    legacy: LegacyMatching,
}

impl SelectionSet {
    pub fn new(selected_refs: &[ToothRef], legacy: LegacyMatching) -> Self {
        let mut texts = HashSet::with_capacity(selected_refs.len());
        let mut numbers = HashSet::with_capacity(selected_refs.len());
        for raw in selected_refs {
            match raw {
                ToothRef::Number(value) => {
                    numbers.insert(*value);
                }
                ToothRef::Text(value) => {
                    texts.insert(value.clone());
                }
                ToothRef::Unresolved => {}
            }
        }
        Self {
            texts,
            numbers,
            legacy,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty() && self.numbers.is_empty()
    }

    /// Composite id first, then the bare position when legacy matching is on.
    pub fn contains(&self, quadrant: u8, position: u8) -> bool {
        if self.names(composite_id(quadrant, position)) {
            return true;
        }
        self.legacy.is_enabled() && self.names(u16::from(position))
    }

    fn names(&self, id: u16) -> bool {
        self.texts.contains(&id.to_string()) || self.numbers.contains(&i64::from(id))
    }
}

/// Whether the tooth at `quadrant`/`position` is named by `selected_refs`,
/// accepting legacy bare positions.
pub fn is_selected(position: u8, quadrant: u8, selected_refs: &[ToothRef]) -> bool {
    SelectionSet::new(selected_refs, LegacyMatching::Enabled).contains(quadrant, position)
}
