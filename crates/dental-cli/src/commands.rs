use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use dental_chart::{DetailedChart, OrderDocument, SelectionSet};
use dental_model::{ChartOptions, OrderRecord, ToothPosition, ToothRef};

/// Read and parse an order record from a JSON file.
pub fn load_order(path: &Path) -> Result<OrderRecord> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read order record {}", path.display()))?;
    let record: OrderRecord = serde_json::from_str(&text)
        .with_context(|| format!("parse order record {}", path.display()))?;
    info!(
        path = %path.display(),
        items = record.items.len(),
        bridges = record.bridge_groups.len(),
        "loaded order record"
    );
    let missing = record
        .items
        .iter()
        .filter(|item| matches!(item.tooth_number, None | Some(ToothRef::Unresolved)))
        .count();
    if missing > 0 {
        warn!(missing, "order items without a tooth number");
    }
    Ok(record)
}

pub fn run_document(path: &Path, options: &ChartOptions) -> Result<OrderDocument> {
    let record = load_order(path)?;
    let document = OrderDocument::assemble(&record, options);
    debug!(groups = document.groups.len(), "assembled order document");
    Ok(document)
}

pub fn run_chart(path: &Path, options: &ChartOptions) -> Result<DetailedChart> {
    let record = load_order(path)?;
    let chart = DetailedChart::new(&record, options);
    debug!(selected = chart.selected_count, "built chart");
    Ok(chart)
}

/// Whether `tooth` (a strict two-digit id) is selected by `refs`.
pub fn run_select(tooth: &str, refs: &[String], options: &ChartOptions) -> Result<bool> {
    let tooth: ToothPosition = tooth
        .parse()
        .with_context(|| format!("invalid --tooth value '{tooth}'"))?;
    let refs: Vec<ToothRef> = refs.iter().map(|raw| ToothRef::from(raw.as_str())).collect();
    let selection = SelectionSet::new(&refs, options.legacy_matching);
    if selection.is_empty() {
        warn!("no references to select from");
    }
    Ok(selection.contains(tooth.quadrant(), tooth.position()))
}
