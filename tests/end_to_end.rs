mod common;

use excel_labels::{Error, LayoutConfig, convert_xlsx_to_labels};

#[test]
fn five_records_fill_one_page() {
    let dir = common::output_dir("five_records");
    let input = dir.join("input.xlsx");
    let output = dir.join("labels.pdf");

    common::write_workbook(
        &input,
        &["Name", "Batch", "Date"],
        &[
            &["Aspirin", "B-100", "2026-01-01"],
            &["Ibuprofen", "B-101", "2026-02-01"],
            &["Paracetamol", "B-102", "2026-03-01"],
            &["Naproxen", "B-103", "2026-04-01"],
            &["Diclofenac", "B-104", "2026-05-01"],
        ],
    );

    let summary = convert_xlsx_to_labels(&input, &output, &LayoutConfig::default()).unwrap();
    assert_eq!(summary.labels, 5);
    assert_eq!(summary.pages, 1);

    let bytes = std::fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
    assert!(bytes.windows(b"Helvetica-Bold".len()).any(|w| w == b"Helvetica-Bold"));
}

#[test]
fn print_marker_and_comment_columns_filter_rows() {
    let dir = common::output_dir("print_marker");
    let input = dir.join("input.xlsx");
    let output = dir.join("labels.pdf");

    common::write_workbook(
        &input,
        &["Name", "Print?", "Comment"],
        &[
            &["keep me", "x", "first"],
            &["skip me", "", "second"],
            &["", "", ""],
            &["keep me too", "yes", ""],
        ],
    );

    let summary = convert_xlsx_to_labels(&input, &output, &LayoutConfig::default()).unwrap();
    assert_eq!(summary.labels, 2);
    assert_eq!(summary.pages, 1);
}

#[test]
fn fifty_three_labels_need_two_pages() {
    let dir = common::output_dir("two_pages");
    let input = dir.join("input.xlsx");
    let output = dir.join("labels.pdf");

    let names: Vec<String> = (0..53).map(|i| format!("label {i}")).collect();
    let rows: Vec<Vec<&str>> = names.iter().map(|n| vec![n.as_str()]).collect();
    let rows: Vec<&[&str]> = rows.iter().map(|r| r.as_slice()).collect();
    common::write_workbook(&input, &["Name"], &rows);

    let summary = convert_xlsx_to_labels(&input, &output, &LayoutConfig::default()).unwrap();
    assert_eq!(summary.labels, 53);
    assert_eq!(summary.pages, 2);

    // Two page objects in the document.
    let bytes = std::fs::read(&output).unwrap();
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("/Count 2"));
}

#[test]
fn all_rows_filtered_still_emits_one_blank_page() {
    let dir = common::output_dir("all_filtered");
    let input = dir.join("input.xlsx");
    let output = dir.join("labels.pdf");

    common::write_workbook(
        &input,
        &["Name", "Print?"],
        &[&["nope", ""], &["also nope", ""]],
    );

    let summary = convert_xlsx_to_labels(&input, &output, &LayoutConfig::default()).unwrap();
    assert_eq!(summary.labels, 0);
    assert_eq!(summary.pages, 1);
    assert!(output.is_file());
}

#[test]
fn missing_input_reports_not_found() {
    let dir = common::output_dir("missing_input");
    let input = dir.join("does-not-exist.xlsx");
    let output = dir.join("labels.pdf");

    let err = convert_xlsx_to_labels(&input, &output, &LayoutConfig::default()).unwrap_err();
    assert!(matches!(err, Error::InputNotFound(_)));
    assert!(!output.exists());
}

#[test]
fn degenerate_layout_leaves_no_output_file() {
    let dir = common::output_dir("degenerate");
    let input = dir.join("input.xlsx");
    let output = dir.join("labels.pdf");

    common::write_workbook(&input, &["Name"], &[&["too big to place"]]);

    let config = LayoutConfig {
        cell_width: 500.0,
        ..LayoutConfig::default()
    };
    let err = convert_xlsx_to_labels(&input, &output, &config).unwrap_err();
    assert!(matches!(err, Error::DegenerateLayout { .. }));
    assert!(!output.exists());
}

#[test]
fn frame_flag_changes_page_content() {
    let dir = common::output_dir("frames");
    let input = dir.join("input.xlsx");
    common::write_workbook(&input, &["Name"], &[&["framed"]]);

    let with_frame = dir.join("framed.pdf");
    let without_frame = dir.join("frameless.pdf");

    convert_xlsx_to_labels(&input, &with_frame, &LayoutConfig::default()).unwrap();
    let config = LayoutConfig {
        draw_border: false,
        ..LayoutConfig::default()
    };
    convert_xlsx_to_labels(&input, &without_frame, &config).unwrap();

    let framed = std::fs::read(&with_frame).unwrap();
    let frameless = std::fs::read(&without_frame).unwrap();
    // Same text, fewer drawing operators: the frameless content stream shrinks.
    assert!(frameless.len() < framed.len());
}
