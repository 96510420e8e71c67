use jiff::civil::datetime;
use repricing_core::error::CoreError;
use repricing_core::frame::{CellValue, SUMMARY_COLUMNS, SummaryFrame, is_two_decimal_column};

fn columns() -> Vec<String> {
    SUMMARY_COLUMNS.iter().map(|c| c.to_string()).collect()
}

fn row(day: i8, profit: f64) -> Vec<CellValue> {
    vec![
        datetime(2024, 1, day, 0, 0, 0, 0).into(),
        datetime(2024, 1, day + 6, 0, 0, 0, 0).into(),
        12.345.into(),
        12.0.into(),
        99.999.into(),
        100.0.into(),
        0.25.into(),
        0.5.into(),
        profit.into(),
        (profit / 7.0).into(),
        1i64.into(),
    ]
}

#[test]
fn shape_counts_rows_and_columns() {
    let frame = SummaryFrame::with_default_index(columns(), vec![row(1, 70.0), row(8, 35.0)]).unwrap();
    assert_eq!(frame.shape(), (2, 11));
    assert_eq!(frame.index(), ["0", "1"]);
    assert_eq!(frame.column_position("profit"), Some(8));
    assert_eq!(frame.value(1, 8), Some(&CellValue::Float(35.0)));
    assert_eq!(frame.value(2, 0), None);
}

#[test]
fn ragged_rows_are_rejected() {
    let mut short = row(1, 1.0);
    short.pop();
    let err = SummaryFrame::with_default_index(columns(), vec![row(1, 1.0), short]).unwrap_err();
    assert!(matches!(err, CoreError::Shape(_)));
}

#[test]
fn index_must_match_rows() {
    let err = SummaryFrame::new(vec!["a".into()], columns(), vec![]).unwrap_err();
    assert!(matches!(err, CoreError::Shape(_)));
}

#[test]
fn map_column_rewrites_only_that_column() {
    let mut frame = SummaryFrame::with_default_index(columns(), vec![row(1, 70.0)]).unwrap();
    frame
        .map_column("interval", |_| CellValue::Text("w1".into()))
        .unwrap();
    assert_eq!(frame.value(0, 10), Some(&CellValue::Text("w1".into())));
    assert_eq!(frame.value(0, 8), Some(&CellValue::Float(70.0)));
}

#[test]
fn map_column_unknown_name_fails() {
    let mut frame = SummaryFrame::with_default_index(columns(), vec![]).unwrap();
    let err = frame.map_column("nope", |v| v.clone()).unwrap_err();
    assert!(matches!(err, CoreError::MissingColumn(name) if name == "nope"));
}

#[test]
fn display_matches_engine_printing() {
    assert_eq!(CellValue::Float(3.0).to_string(), "3.0");
    assert_eq!(CellValue::Float(0.125).to_string(), "0.125");
    assert_eq!(CellValue::Float(f64::NAN).to_string(), "nan");
    assert_eq!(CellValue::Int(7).to_string(), "7");
    assert_eq!(
        CellValue::DateTime(datetime(2024, 3, 9, 0, 0, 0, 0)).to_string(),
        "2024-03-09 00:00:00"
    );
}

#[test]
fn two_decimal_columns_exclude_dates_and_interval() {
    assert!(is_two_decimal_column("profit_mean"));
    assert!(is_two_decimal_column("median_proportion"));
    assert!(!is_two_decimal_column("from"));
    assert!(!is_two_decimal_column("interval"));
}

#[test]
fn deserializing_validates_shape() {
    let ok = r#"{"index":["0"],"columns":["interval"],"rows":[[{"type":"int","value":3}]]}"#;
    let frame: SummaryFrame = serde_json::from_str(ok).unwrap();
    assert_eq!(frame.value(0, 0), Some(&CellValue::Int(3)));

    let ragged = r#"{"index":["0"],"columns":["interval","profit"],"rows":[[{"type":"int","value":3}]]}"#;
    assert!(serde_json::from_str::<SummaryFrame>(ragged).is_err());
}
