//! Integration tests for the CLI commands.

use std::fs;
use std::path::PathBuf;

use dental_cli::commands::{load_order, run_chart, run_document, run_select};
use dental_cli::render::document_json;
use dental_model::{ChartOptions, SummaryLanguage};

const ORDER_JSON: &str = r#"{
    "items": [
        { "toothNumber": 11, "prosthesisType": "Crown", "material": "Zirconia", "shade": "A2" },
        { "toothNumber": "12", "prosthesisType": "Crown", "material": "Zirconia", "shade": "A2" },
        { "toothNumber": 21, "implantBrand": "Straumann", "shade": "B1" }
    ]
}"#;

fn write_order(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("dental-cli-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("create temp dir");
    let path = dir.join(name);
    fs::write(&path, contents).expect("write order");
    path
}

#[test]
fn load_order_reads_json_record() {
    let path = write_order("load.json", ORDER_JSON);
    let record = load_order(&path).expect("load order");
    assert_eq!(record.items.len(), 3);
}

#[test]
fn load_order_reports_missing_file() {
    let path = std::env::temp_dir().join("dental-cli-does-not-exist.json");
    let error = load_order(&path).expect_err("missing file");
    assert!(format!("{error:#}").contains("read order record"));
}

#[test]
fn load_order_reports_invalid_json() {
    let path = write_order("invalid.json", "{ \"items\": [ ");
    let error = load_order(&path).expect_err("invalid json");
    assert!(format!("{error:#}").contains("parse order record"));
}

#[test]
fn document_command_renders_text() {
    let path = write_order("document.json", ORDER_JSON);
    let document = run_document(&path, &ChartOptions::default()).expect("document");
    insta::assert_snapshot!(document.to_text(), @r"
    #11,12 Crown Zirconia
    #21 Implant Straumann -
    Single: 1, 2, 1
    A2, B1
    ");
}

#[test]
fn document_json_lists_groups() {
    let path = write_order("document-json.json", ORDER_JSON);
    let options = ChartOptions::new().with_language(SummaryLanguage::Korean);
    let document = run_document(&path, &options).expect("document");
    let json: serde_json::Value =
        serde_json::from_str(&document_json(&document).expect("serialize")).expect("parse");
    assert_eq!(json["groups"][0]["teeth"], serde_json::json!([11, 12]));
    assert_eq!(json["groups"][1]["display_text"], "임플란트 Straumann");
    assert_eq!(json["shade_summary"], "A2, B1");
}

#[test]
fn chart_command_counts_selected_teeth() {
    let path = write_order("chart.json", ORDER_JSON);
    let chart = run_chart(&path, &ChartOptions::default()).expect("chart");
    assert_eq!(chart.selected_count, 3);
}

#[test]
fn select_command_validates_tooth() {
    let refs = vec!["3".to_string()];
    assert!(run_select("23", &refs, &ChartOptions::default()).expect("select"));
    assert!(!run_select("23", &refs, &ChartOptions::strict()).expect("select"));
    assert!(run_select("9", &refs, &ChartOptions::default()).is_err());
}
