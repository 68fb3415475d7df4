use super::*;

fn parse(raw: &str) -> ProjectInfo {
    serde_json::from_str(raw).unwrap()
}

// =============================================================
// ProjectInfo
// =============================================================

#[test]
fn minimal_document_fills_defaults() {
    let info = parse(r#"{"title":"X"}"#);
    assert_eq!(info.title, "X");
    assert_eq!(info.description, "");
    assert!(info.technologies.is_empty());
    assert_eq!(info.github, None);
    assert_eq!(info.media, None);
}

#[test]
fn missing_title_is_rejected() {
    assert!(serde_json::from_str::<ProjectInfo>(r#"{"description":"no title"}"#).is_err());
}

#[test]
fn media_array_keeps_declared_order() {
    let info = parse(r#"{"title":"X","media":["b.png","a.png","c.gif"]}"#);
    assert_eq!(info.media, Some(vec!["b.png".to_owned(), "a.png".to_owned(), "c.gif".to_owned()]));
}

#[test]
fn non_array_media_is_treated_as_absent() {
    assert_eq!(parse(r#"{"title":"X","media":"shot.png"}"#).media, None);
    assert_eq!(parse(r#"{"title":"X","media":null}"#).media, None);
}

#[test]
fn non_string_media_entries_are_stringified() {
    let info = parse(r#"{"title":"X","media":[1,"two.png"]}"#);
    assert_eq!(info.media, Some(vec!["1".to_owned(), "two.png".to_owned()]));
}

#[test]
fn live_demo_uses_camel_case_key() {
    let info = parse(r#"{"title":"X","liveDemo":"https://demo.example"}"#);
    assert_eq!(info.live_demo.as_deref(), Some("https://demo.example"));
}

// =============================================================
// ProjectRecord
// =============================================================

#[test]
fn from_info_merges_screenshots_and_folder() {
    let info = parse(r#"{"title":"X","description":"d","technologies":["A","B"],"github":"https://g"}"#);
    let record = ProjectRecord::from_info(info, "web-app", vec!["s.png".to_owned()]);
    assert_eq!(record.title, "X");
    assert_eq!(record.technologies, ["A", "B"]);
    assert_eq!(record.github.as_deref(), Some("https://g"));
    assert_eq!(record.screenshots, ["s.png"]);
    assert_eq!(record.folder, "web-app");
}

#[test]
fn empty_links_are_dropped() {
    let info = parse(r#"{"title":"X","github":"","liveDemo":"  "}"#);
    let record = ProjectRecord::from_info(info, "p", Vec::new());
    assert_eq!(record.github, None);
    assert_eq!(record.live_demo, None);
}

#[test]
fn placeholder_is_the_sample_project() {
    let record = ProjectRecord::placeholder();
    assert_eq!(record.title, "Sample Project");
    assert_eq!(record.technologies, ["HTML", "CSS", "JavaScript"]);
    assert!(record.screenshots.is_empty());
}

// =============================================================
// ProjectList
// =============================================================

#[test]
fn empty_records_fall_back_to_single_placeholder() {
    let list = ProjectList::from_records(Vec::new());
    assert!(list.is_placeholder());
    assert_eq!(list.len(), 1);
    assert_eq!(list.records()[0].title, "Sample Project");
}

#[test]
fn discovered_records_never_include_placeholder() {
    let record = ProjectRecord::from_info(parse(r#"{"title":"Real"}"#), "app1", Vec::new());
    let list = ProjectList::from_records(vec![record.clone()]);
    assert!(!list.is_placeholder());
    assert!(!list.is_empty());
    assert_eq!(list.records(), [record]);
}
