use dumbbell_chart::api::DataView;
use dumbbell_chart::core::DataPoint;

#[test]
fn extracts_first_category_and_two_measures() {
    let view = DataView::new()
        .with_category("Region", ["North", "South"])
        .with_measure("2019", [10.0, 20.0])
        .with_measure("2024", [15.0, 12.5])
        .with_measure("ignored", [0.0, 0.0]);

    let points = view.to_data_points().expect("required fields present");
    assert_eq!(
        points,
        vec![
            DataPoint::new("North", 10.0, 15.0),
            DataPoint::new("South", 20.0, 12.5),
        ]
    );
}

#[test]
fn missing_fields_are_a_no_op() {
    assert!(DataView::new().to_data_points().is_none());

    let no_category = DataView::new()
        .with_measure("a", [1.0])
        .with_measure("b", [2.0]);
    assert!(no_category.to_data_points().is_none());

    let one_measure = DataView::new()
        .with_category("c", ["x"])
        .with_measure("a", [1.0]);
    assert!(!one_measure.has_required_fields());
    assert!(one_measure.to_data_points().is_none());
}

#[test]
fn rows_stop_at_shortest_column() {
    let view = DataView::new()
        .with_category("c", ["a", "b", "c"])
        .with_measure("m1", [1.0, 2.0])
        .with_measure("m2", [3.0, 4.0, 5.0]);
    assert_eq!(view.to_data_points().expect("points").len(), 2);
}

#[test]
fn parses_host_json_with_mixed_cells() {
    let view = DataView::from_json_str(
        r#"{
            "categories": [{"name": "Team", "values": ["Alpha", 7, null]}],
            "measures": [
                {"name": "before", "values": [1, "2.5", 3]},
                {"name": "after", "values": ["n/a", 4, 5]}
            ]
        }"#,
    )
    .expect("valid json");

    let points = view.to_data_points().expect("points");
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].category, "Alpha");
    assert_eq!(points[0].value_a, 1.0);
    assert!(points[0].value_b.is_nan());
    assert_eq!(points[1].category, "7");
    assert_eq!(points[1].value_a, 2.5);
    assert_eq!(points[1].value_b, 4.0);
}

#[test]
fn malformed_json_is_an_error() {
    assert!(DataView::from_json_str("{\"categories\": 3}").is_err());
}
