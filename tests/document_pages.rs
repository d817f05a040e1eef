use bijoy2uni::document::Document;

#[test]
fn page_markers_become_page_tags() {
    let text = "--- Page 1 ---\nfirst line\nsecond line\n--- Page 2 ---\nthird line";
    let doc = Document::from_text("case", text);

    assert_eq!(doc.lines.len(), 3);
    assert_eq!(doc.lines[0].page, 1);
    assert_eq!(doc.lines[1].page, 1);
    assert_eq!(doc.lines[2].page, 2);
    assert_eq!(doc.page_count(), 2);
    assert!(doc.is_paginated());
}

#[test]
fn render_round_trips_markers() {
    let text = "--- Page 1 ---\nfirst line\n--- Page 2 ---\nsecond line";
    let doc = Document::from_text("case", text);
    assert_eq!(doc.to_text(), text);
}

#[test]
fn unpaginated_text_stays_unpaginated() {
    let text = "alpha\nbeta";
    let doc = Document::from_text("case", text);
    assert!(!doc.is_paginated());
    assert_eq!(doc.to_text(), text);
    assert_eq!(doc.page_count(), 1);
}

#[test]
fn malformed_marker_is_ordinary_content() {
    let text = "--- Page x ---\nreal line";
    let doc = Document::from_text("case", text);
    assert_eq!(doc.lines.len(), 2);
    assert_eq!(doc.lines[0].content, "--- Page x ---");
}

#[test]
fn empty_input_is_empty_document() {
    let doc = Document::from_text("case", "");
    assert!(doc.lines.is_empty());
    assert_eq!(doc.page_count(), 0);
    assert_eq!(doc.to_text(), "");
}
