//! Integration tests for decoding, grid assembly, annotations, layout and
//! descriptions, driven by the shared JSON fixtures.

use heatmap_common::{
    describe, Annotations, Grid, HeatmapError, Layout, ObservationDocument, Profile,
};
use test_utils::{assert_approx_eq, fixtures, generate_day_document, generate_week_document};

// ============================================================================
// Helper functions
// ============================================================================

fn day_grid(json: &str) -> Grid {
    Grid::build(&ObservationDocument::from_json(Profile::Day, json).unwrap()).unwrap()
}

fn week_grid(json: &str) -> Grid {
    Grid::build(&ObservationDocument::from_json(Profile::Week, json).unwrap()).unwrap()
}

fn build_err(profile: Profile, json: &str) -> HeatmapError {
    ObservationDocument::from_json(profile, json)
        .and_then(|doc| Grid::build(&doc))
        .unwrap_err()
}

// ============================================================================
// Grid shape
// ============================================================================

#[test]
fn test_sparse_day_example() {
    let grid = day_grid(fixtures::day::SPARSE);

    assert_eq!(grid.row_labels(), &["A".to_string(), "B".to_string()]);
    assert_eq!(grid.n_cols(), 24);
    assert!(grid.mask().row(0).iter().all(|m| *m));

    assert_eq!(grid.value(1, 3), Some(5.0));
    for col in (0..24).filter(|c| *c != 3) {
        assert_eq!(grid.value(1, col), None);
    }

    let annotations = Annotations::from_grid(&grid);
    assert_eq!(annotations.get(1, 3), "5");
    assert_eq!(annotations.non_empty().count(), 1);
}

#[test]
fn test_columns_fixed_regardless_of_sparsity() {
    for seed in 0..5 {
        let grid = day_grid(&generate_day_document(seed, 6));
        assert_eq!(grid.n_cols(), 24);
        assert_eq!(grid.n_rows(), 6);

        let grid = week_grid(&generate_week_document(seed, 4));
        assert_eq!(grid.n_cols(), 7);
        assert_eq!(grid.column_labels()[0], "Sun");
    }
}

#[test]
fn test_rows_sorted_by_code_point() {
    let grid = day_grid(fixtures::day::FULL);
    assert_eq!(grid.row_labels(), &["Agricola", "South Park", "Vernon"]);

    let grid = day_grid(&generate_day_document(9, 12));
    assert!(grid.row_labels().windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_explicit_zero_is_present() {
    let grid = week_grid(fixtures::week::PARTIAL);
    let windsor = grid.row_index("Windsor").unwrap();

    assert_eq!(grid.value(windsor, 2), Some(0.0));
    assert!(!grid.mask().is_masked(windsor, 2));
    assert_eq!(Annotations::from_grid(&grid).get(windsor, 2), "");

    // Sunday was never reported.
    assert!(grid.mask().is_masked(windsor, 0));
}

#[test]
fn test_missing_counter_excluded_from_value_range() {
    let grid = week_grid(fixtures::week::PARTIAL);
    let hollis = grid.row_index("Hollis").unwrap();
    assert!(grid.mask().row(hollis).iter().all(|m| *m));
    assert_eq!(grid.value_range(), Some((0.0, 410.0)));
}

#[test]
fn test_empty_document_builds_empty_grid() {
    let grid = day_grid(fixtures::day::EMPTY);
    assert!(grid.is_empty());
    assert_eq!(grid.n_cols(), 24);
    assert!(grid.value_range().is_none());
    assert!(describe(&grid).is_none());

    assert!(matches!(
        Layout::for_grid(&grid),
        Err(HeatmapError::EmptyGrid)
    ));
}

// ============================================================================
// Malformed input
// ============================================================================

#[test]
fn test_malformed_documents() {
    for json in [
        fixtures::invalid::NOT_JSON,
        fixtures::invalid::TRUNCATED,
        fixtures::invalid::NOT_AN_OBJECT,
        fixtures::invalid::NAME_MISSING,
    ] {
        let err = build_err(Profile::Day, json);
        assert!(err.is_malformed_input(), "{}: {}", json, err);
        assert_eq!(err.exit_code(), 65);
    }
}

#[test]
fn test_out_of_range_buckets() {
    let err = build_err(Profile::Day, fixtures::day::HOUR_OUT_OF_RANGE);
    assert!(matches!(err, HeatmapError::BucketOutOfRange { ref bucket, .. } if bucket == "24"));

    let err = build_err(Profile::Week, fixtures::week::BAD_WEEKDAY);
    assert!(matches!(err, HeatmapError::BucketOutOfRange { axis: "weekday", .. }));
}

#[test]
fn test_conflicting_counter() {
    let err = build_err(Profile::Day, fixtures::day::CONFLICTING);
    assert!(matches!(err, HeatmapError::ConflictingCounter(ref name) if name == "A"));
}

#[test]
fn test_duplicate_bucket_across_records() {
    let json = r#"{"day":"d","counters":[
        {"name":"A","hours":[{"hour":1,"count":1}]},
        {"name":"A","hours":[{"hour":2,"count":2},{"hour":1,"count":3}]}
    ]}"#;
    let err = build_err(Profile::Day, json);
    assert!(matches!(err, HeatmapError::DuplicateBucket { ref bucket, .. } if bucket == "01"));
}

#[test]
fn test_repeated_name_merges() {
    let json = r#"{"day":"d","counters":[
        {"name":"A","hours":[{"hour":1,"count":1}]},
        {"name":"A","hours":[{"hour":2,"count":2}]}
    ]}"#;
    let grid = day_grid(json);
    assert_eq!(grid.n_rows(), 1);
    assert_eq!(grid.value(0, 1), Some(1.0));
    assert_eq!(grid.value(0, 2), Some(2.0));
}

// ============================================================================
// Layout
// ============================================================================

#[test]
fn test_layout_follows_grid() {
    let layout = Layout::for_grid(&day_grid(fixtures::day::FULL)).unwrap();
    assert_eq!((layout.rows, layout.cols), (3, 24));
    assert_approx_eq!(layout.width, 14.4, 1e-4);
    assert_approx_eq!(layout.height, 1.8, 1e-4);
    assert_eq!(layout.width_px(), 4320);

    let layout = Layout::for_grid(&week_grid(fixtures::week::PARTIAL)).unwrap();
    assert_approx_eq!(layout.width, 5.6, 1e-4);
    assert_approx_eq!(layout.height, 2.4, 1e-4);
}

// ============================================================================
// Descriptions
// ============================================================================

#[test]
fn test_describe_day_single_peak() {
    let alt = describe(&day_grid(fixtures::day::FULL)).unwrap();
    assert_eq!(
        alt,
        "Heatmap of counts by hour from the Agricola, South Park, and Vernon counters. \
         The highest hourly count was 61 during the 4 PM hour from the Vernon counter."
    );
}

#[test]
fn test_describe_week_single_peak() {
    let alt = describe(&week_grid(fixtures::week::PARTIAL)).unwrap();
    assert_eq!(
        alt,
        "Heatmap of counts by day from the Barrington, Hollis, and Windsor counters. \
         The highest daily count was 410 on Mon from the Windsor counter."
    );
}

#[test]
fn test_describe_shared_peak() {
    let json = r#"{"week":"w","counters":[
        {"name":"B","days":[{"day":"Mon","count":7}]},
        {"name":"A","days":[{"day":"Tue","count":7},{"day":"Wed","count":2}]}
    ]}"#;
    let alt = describe(&week_grid(json)).unwrap();
    assert!(alt.ends_with("The highest daily count was 7 from the A and B counters."));
}

#[test]
fn test_describe_huge_count_is_exact() {
    let json = r#"{"day":"d","counters":[{"name":"A","hours":[{"hour":0,"count":1e19}]}]}"#;
    let alt = describe(&day_grid(json)).unwrap();
    assert!(alt.contains("The highest hourly count was 10000000000000000000 during"));
}

#[test]
fn test_describe_all_zero() {
    assert!(describe(&day_grid(fixtures::day::ZERO_ONLY)).is_none());
}
