mod common;

use docx_rs::{BuildXML, Run};
use repricing_export::document::{
    add_page_number, create_document, header_paragraph, normal_paragraph, report_footer,
};
use repricing_export::styles::{ReportStyles, inches_to_emu, inches_to_twips};
use repricing_export::table::ReportTable;

use common::pixel_chart;

fn has_bold(xml: &str) -> bool {
    xml.contains("<w:b ") || xml.contains("<w:b/>") || xml.contains("<w:b>")
}

#[test]
fn page_number_is_a_page_field() {
    let xml = String::from_utf8(add_page_number(Run::new()).build()).unwrap();
    let begin = xml.find(r#"w:fldCharType="begin""#).unwrap();
    let instr = xml.find("PAGE").unwrap();
    let end = xml.find(r#"w:fldCharType="end""#).unwrap();
    assert!(begin < instr && instr < end);
}

#[test]
fn header_paragraph_is_bold_without_spacing() {
    let xml = String::from_utf8(header_paragraph("Weekly repricing").build()).unwrap();
    assert!(xml.contains("Weekly repricing"));
    assert!(has_bold(&xml));
    assert!(xml.contains(r#"w:before="0""#));
    assert!(xml.contains(r#"w:after="0""#));
}

#[test]
fn normal_paragraph_is_not_bold() {
    let para = normal_paragraph().add_run(Run::new().add_text("plain"));
    let xml = String::from_utf8(para.build()).unwrap();
    assert!(!has_bold(&xml));
    assert!(xml.contains(r#"w:before="0""#));
}

#[test]
fn footer_holds_header_then_right_aligned_page_number() {
    let xml = String::from_utf8(report_footer("Weekly repricing").build()).unwrap();
    assert_eq!(xml.matches("</w:p>").count(), 2);

    let header = xml.find("Weekly repricing").unwrap();
    let second = header + xml[header..].find("</w:p>").unwrap();
    let right = xml.find(r#"w:val="right""#).unwrap();
    let page = xml.find("PAGE").unwrap();
    assert!(header < second && second < right && right < page);
    assert!(!xml[..second].contains("PAGE"));
}

#[test]
fn new_document_has_header_and_spacer() {
    let doc = create_document("Weekly repricing", &ReportStyles::default());
    assert_eq!(doc.paragraph_count(), 2);
    assert_eq!(doc.table_count(), 0);
    assert_eq!(doc.chart_count(), 0);
}

#[test]
fn charts_are_preceded_by_a_spacer() {
    let doc = create_document("h", &ReportStyles::default())
        .add_table(&ReportTable::new(2, 2))
        .add_chart(&pixel_chart())
        .add_chart(&pixel_chart());

    assert_eq!(doc.table_count(), 1);
    assert_eq!(doc.chart_count(), 2);
    assert_eq!(doc.paragraph_count(), 6);
}

#[test]
fn packed_document_is_a_zip_archive() {
    let bytes = create_document("h", &ReportStyles::default())
        .add_text("body")
        .add_chart(&pixel_chart())
        .to_bytes()
        .unwrap();
    assert_eq!(&bytes[..4], b"PK\x03\x04");
}

#[test]
fn save_writes_the_packed_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.docx");
    create_document("h", &ReportStyles::default())
        .save(&path)
        .unwrap();
    assert!(std::fs::metadata(&path).unwrap().len() > 0);
}

#[test]
fn unit_conversions() {
    assert_eq!(inches_to_twips(1.0), 1440);
    assert_eq!(inches_to_twips(0.6), 864);
    assert_eq!(inches_to_emu(6.4), 5_852_160);
    assert_eq!(inches_to_emu(2.25), 2_057_400);
}
