//! End-to-end pipeline: JSON records in, rollup payload out.

use indoc::indoc;
use pretty_assertions::assert_eq;
use serde_json::json;
use statusroll::{build_breakdown, format_breakdown, ChildRecord, Locale, StatusRollup};

const RECORDS: &str = indoc! {r##"
    [
      { "id": "proc-ana",
        "status": { "id": "st-review", "name": "Em análise", "name_en": "In review", "color": "#f59e0b" } },
      { "id": "proc-joao",
        "status": { "id": "st-review", "name": "Em análise", "name_en": "In review", "color": "#f59e0b" } },
      { "id": "proc-marta",
        "status": { "id": "st-approved", "name": "Aprovado", "name_en": "Approved", "color": "#16a34a" } },
      { "id": "proc-lee" },
      { "id": "proc-sofia", "status": "st-archived" }
    ]
"##};

fn records() -> Vec<ChildRecord> {
    serde_json::from_str(RECORDS).unwrap()
}

#[test]
fn listing_payload_in_default_locale() {
    let rollup = StatusRollup::from_records(&records(), Locale::Pt);

    assert_eq!(rollup.text, "2 Em análise, 1 Aprovado");
    assert_eq!(
        serde_json::to_value(&rollup).unwrap(),
        json!({
            "text": "2 Em análise, 1 Aprovado",
            "locale": "pt",
            "breakdown": [
                { "status_id": "st-review", "name": "Em análise",
                  "name_en": "In review", "color": "#f59e0b", "count": 2 },
                { "status_id": "st-approved", "name": "Aprovado",
                  "name_en": "Approved", "color": "#16a34a", "count": 1 }
            ],
            "uniform": false,
            "color": "#f59e0b"
        })
    );
}

#[test]
fn detail_payload_in_english() {
    let rollup = StatusRollup::from_records(&records(), Locale::En);
    assert_eq!(rollup.text, "2 In review, 1 Approved");
    assert_eq!(rollup.color.as_deref(), Some("#f59e0b"));
}

#[test]
fn rollup_payload_round_trips() {
    let rollup = StatusRollup::from_records(&records(), Locale::En);
    let json = serde_json::to_string(&rollup).unwrap();
    let back: StatusRollup = serde_json::from_str(&json).unwrap();
    assert_eq!(back, rollup);
}

#[test]
fn formatter_matches_breakdown_order_for_both_locales() {
    let breakdown = build_breakdown(&records());
    assert_eq!(
        format_breakdown(&breakdown, Locale::Pt),
        "2 Em análise, 1 Aprovado"
    );
    assert_eq!(
        format_breakdown(&breakdown, Locale::En),
        "2 In review, 1 Approved"
    );
}

#[test]
fn single_remaining_child_collapses_to_the_bare_name() {
    let records = records();
    let only_marta: Vec<ChildRecord> = records
        .into_iter()
        .filter(|r| r.id == "proc-marta")
        .collect();

    let rollup = StatusRollup::from_records(&only_marta, Locale::En);
    assert_eq!(rollup.text, "Approved");
    assert!(rollup.uniform);
    assert_eq!(rollup.color.as_deref(), Some("#16a34a"));
}
