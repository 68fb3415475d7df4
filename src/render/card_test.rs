use super::*;
use crate::project::ProjectInfo;

fn record(raw: &str, screenshots: &[&str]) -> ProjectRecord {
    let info: ProjectInfo = serde_json::from_str(raw).unwrap();
    ProjectRecord::from_info(info, "web-app", screenshots.iter().map(|s| (*s).to_owned()).collect())
}

fn fixed_ids() -> impl FnMut() -> String {
    let mut next = 0;
    move || {
        next += 1;
        format!("carousel-test{next}")
    }
}

// =============================================================
// CardMedia
// =============================================================

#[test]
fn media_kind_follows_screenshot_count() {
    let none: Vec<String> = Vec::new();
    let one = vec!["a.png".to_owned()];
    let two = vec!["a.png".to_owned(), "b.png".to_owned()];
    assert_eq!(CardMedia::for_screenshots(&none), CardMedia::Placeholder);
    assert_eq!(CardMedia::for_screenshots(&one), CardMedia::Single("a.png"));
    assert_eq!(CardMedia::for_screenshots(&two), CardMedia::Carousel(&two));
}

// =============================================================
// project_card
// =============================================================

#[test]
fn two_media_entries_render_a_two_slide_carousel_without_code_link() {
    let project = record(
        r#"{"title":"X","technologies":["A","B"],"media":["a.png","b.png"]}"#,
        &["./content/projects/web-app/media/a.png", "./content/projects/web-app/media/b.png"],
    );
    let card = project_card(&project, &mut fixed_ids());

    let slides = card.find_all("carousel-item");
    assert_eq!(slides.len(), 2);
    assert!(slides[0].has_class("active"));
    assert!(!slides[1].has_class("active"));

    let tags: Vec<String> = card.find_all("tech-tag").iter().map(|t| t.text_content()).collect();
    assert_eq!(tags, ["A", "B"]);
    assert!(card.find("project-link").is_none());
}

#[test]
fn carousel_controls_target_the_carousel_id() {
    let project = record(r#"{"title":"X"}"#, &["a.png", "b.png", "c.png"]);
    let card = project_card(&project, &mut fixed_ids());

    let carousel = card.find("carousel").unwrap();
    assert_eq!(carousel.get_attr("id"), Some("carousel-test1"));
    assert_eq!(carousel.get_attr("data-bs-ride"), Some("carousel"));
    let prev = card.find("carousel-control-prev").unwrap();
    let next = card.find("carousel-control-next").unwrap();
    assert_eq!(prev.get_attr("data-bs-target"), Some("#carousel-test1"));
    assert_eq!(next.get_attr("data-bs-slide"), Some("next"));
    assert_eq!(prev.text_content(), "Previous");
}

#[test]
fn carousel_images_hide_themselves_on_error_and_number_their_alt_text() {
    let project = record(r#"{"title":"Shots"}"#, &["a.png", "b.png"]);
    let html = project_card(&project, &mut fixed_ids()).to_html();
    assert!(html.contains(r#"alt="Shots - Image 1""#));
    assert!(html.contains(r#"alt="Shots - Image 2""#));
    assert_eq!(html.matches("this.style.display=&#39;none&#39;").count(), 2);
}

#[test]
fn single_screenshot_renders_plain_image_with_fallback() {
    let project = record(r#"{"title":"Solo"}"#, &["./media/screenshot.jpg"]);
    let card = project_card(&project, &mut fixed_ids());
    assert!(card.find("carousel").is_none());

    let image_area = card.find("project-image").unwrap();
    let Some(img) = image_area.children[0].as_element() else {
        panic!("expected an img element");
    };
    assert_eq!(img.tag, "img");
    assert_eq!(img.get_attr("src"), Some("./media/screenshot.jpg"));
    assert_eq!(img.get_attr("alt"), Some("Solo"));
    assert!(img.get_attr("onerror").unwrap().contains("image-placeholder"));
}

#[test]
fn no_screenshots_render_placeholder_glyph() {
    let project = record(r#"{"title":"Bare"}"#, &[]);
    let card = project_card(&project, &mut fixed_ids());
    let placeholder = card.find("image-placeholder").unwrap();
    assert!(placeholder.has_class("project-image"));
    assert_eq!(placeholder.text_content(), "Project Screenshot");
    assert!(placeholder.find("fa-code").is_some());
}

#[test]
fn body_lists_title_description_and_links() {
    let project = record(
        r#"{"title":"T","description":"D","github":"https://github.com/x/y","liveDemo":"https://y.test"}"#,
        &[],
    );
    let card = project_card(&project, &mut fixed_ids());
    assert_eq!(card.find("project-title").unwrap().text_content(), "T");
    assert_eq!(card.find("project-description").unwrap().text_content(), "D");

    let links = card.find_all("project-link");
    assert_eq!(links.len(), 2);
    assert_eq!(links[0].get_attr("href"), Some("https://github.com/x/y"));
    assert_eq!(links[0].get_attr("target"), Some("_blank"));
    assert_eq!(links[0].text_content(), " Code");
    assert_eq!(links[1].text_content(), " Live Demo");
}

#[test]
fn card_carries_hover_transforms() {
    let card = project_card(&record(r#"{"title":"H"}"#, &[]), &mut fixed_ids());
    assert!(card.get_attr("onmouseenter").unwrap().contains("translateY(-10px) scale(1.02)"));
    assert!(card.get_attr("onmouseleave").unwrap().contains("translateY(0) scale(1)"));
}

#[test]
fn metadata_text_is_escaped() {
    let project = record(r#"{"title":"<script>alert(1)</script>"}"#, &[]);
    let html = project_card(&project, &mut fixed_ids()).to_html();
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

// =============================================================
// RandomIds
// =============================================================

#[test]
fn random_ids_have_prefix_and_nine_chars() {
    let id = RandomIds.carousel_id();
    let suffix = id.strip_prefix("carousel-").unwrap();
    assert_eq!(suffix.len(), 9);
    assert!(suffix.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[test]
fn random_ids_differ_between_calls() {
    let mut ids = RandomIds;
    assert_ne!(ids.carousel_id(), ids.carousel_id());
}
