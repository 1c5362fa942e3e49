//! End-to-end search scenarios over small, hand-checked catalogs.

use super::common::{
    amazon_catalog, assert_ranked, ids, make_full_item, scores, AMAZON_CATALOG_JSON,
};
use sift::{explain, parse_catalog, rank, search, to_json, FieldKind, Item};

#[test]
fn floresta_ranks_only_the_forest() {
    let catalog = amazon_catalog();
    let results = rank(&catalog, "floresta");

    // title exact 30 + description exact 5 + tag exact 25
    assert_eq!(scores(&results), vec![("1", 60)]);
}

#[test]
fn floresta_from_json_serializes_flat_records() {
    let catalog = parse_catalog(AMAZON_CATALOG_JSON).unwrap();
    let results = rank(&catalog, "floresta");
    let json = to_json(&results, false).unwrap();

    assert_eq!(
        json,
        r#"[{"id":"1","title":"Floresta Amazônica","description":"grande floresta tropical","tags":["natureza","floresta"],"relevance":60}]"#
    );
}

#[test]
fn shared_tag_matches_both_items() {
    let catalog = amazon_catalog();
    let results = rank(&catalog, "natureza");

    // Tag exact on both; neither title nor description mentions it
    assert_eq!(scores(&results), vec![("1", 25), ("2", 25)]);
    assert_ranked(&results, &catalog);
}

#[test]
fn accented_query_matches_unaccented_text() {
    let catalog = amazon_catalog();
    let results = rank(&catalog, "AMAZÔNICA");
    assert_eq!(scores(&results), vec![("1", 30)]);

    let results = rank(&catalog, "amazonica");
    assert_eq!(scores(&results), vec![("1", 30)]);
}

#[test]
fn prefix_query_scores_contains_weights() {
    let catalog = amazon_catalog();
    let results = rank(&catalog, "flor");

    // title contains 25 + description contains 2 + tag contains 20
    assert_eq!(scores(&results), vec![("1", 47)]);
}

#[test]
fn longer_query_token_scores_contained_weights() {
    let catalog = amazon_catalog();
    let results = rank(&catalog, "florestas");

    // title contained 20 + description contained 1 + tag contained 15
    assert_eq!(scores(&results), vec![("1", 36)]);
}

#[test]
fn multi_token_query_ranks_by_total_overlap() {
    let catalog = vec![
        make_full_item("rio", "Rio Negro", "aguas escuras", &["rio"]),
        make_full_item("mata", "Mata Atlântica", "floresta costeira", &["floresta"]),
        make_full_item("amazonia", "Floresta Amazônica", "rio com floresta", &["floresta", "rio"]),
    ];

    let results = rank(&catalog, "floresta rio");

    // amazonia: floresta (30 + 5 + 25) + rio (5 + 25) = 90
    // rio:      rio (30 + 25) = 55
    // mata:     floresta (5 + 25) = 30
    assert_eq!(
        scores(&results),
        vec![("amazonia", 90), ("rio", 55), ("mata", 30)]
    );
    assert_ranked(&results, &catalog);
}

#[test]
fn search_is_unsorted_and_rank_is_sorted() {
    let catalog = vec![
        make_full_item("weak", "", "floresta", &[]),
        make_full_item("strong", "floresta", "", &[]),
    ];

    assert_eq!(ids(&search(&catalog, "floresta")), vec!["weak", "strong"]);
    assert_eq!(ids(&rank(&catalog, "floresta")), vec!["strong", "weak"]);
}

#[test]
fn explain_accounts_for_every_point() {
    let catalog = vec![make_full_item(
        "1",
        "Floresta Amazônica",
        "grande floresta tropical",
        &["natureza", "floresta"],
    )];

    for query in ["floresta", "flor", "floresta amazonia", "natural", "grande mata"] {
        let expected = search(&catalog, query)
            .first()
            .map(|r| r.relevance)
            .unwrap_or(0);
        let total: u64 = explain(&catalog[0], query).iter().map(|c| u64::from(c.weight)).sum();
        assert_eq!(total, expected, "query {:?}", query);
    }
}

#[test]
fn explain_reports_fields_in_scan_order() {
    let item = Item {
        id: "1".to_string(),
        title: "rio".to_string(),
        description: "rio".to_string(),
        tags: vec!["rio".to_string(), "mar".to_string()],
    };

    let fields: Vec<FieldKind> = explain(&item, "rio").iter().map(|c| c.field).collect();
    assert_eq!(
        fields,
        vec![FieldKind::Title, FieldKind::Description, FieldKind::Tag]
    );
}
