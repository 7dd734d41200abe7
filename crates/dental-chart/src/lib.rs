//! Dental prosthesis charting and grouping.
//!
//! This crate turns an order record into the data shown on tooth charts and
//! the printed order document:
//!
//! - **normalize**: raw tooth references to canonical quadrant/position
//! - **selection**: which of the 32 chart slots a reference list selects
//! - **resolve**: override collections and per-item fallbacks per tooth
//! - **grouping**: teeth clustered by resolved prosthesis and material
//! - **document**: summary lines for the printed order
//! - **chart**: compact and detailed chart models
//!
//! Everything here is pure and synchronous; no function performs I/O.

pub mod chart;
pub mod document;
pub mod grouping;
pub mod labels;
pub mod normalize;
pub mod resolve;
pub mod selection;

pub use chart::{
    ChartSlot, CompactChart, DetailedChart, DetailedSlot, SLOTS_PER_ROW, SlotState, chart_layout,
};
pub use document::{
    OrderDocument, format_display_group, format_shade_summary, format_single_and_bridge_summary,
};
pub use grouping::{DisplayGroup, build_display_groups, display_text};
pub use labels::{Labels, MISSING_VALUE, NO_IMPLANT};
pub use normalize::{normalize, normalize_all};
pub use resolve::{OverrideMaps, ProsthesisOverride};
pub use selection::{SelectionSet, is_selected};
