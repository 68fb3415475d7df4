//! Project card templates.
//!
//! A card is an image area followed by the project body. The image area
//! depends on how many screenshots the project has: none shows the code
//! glyph placeholder, one shows a plain image, two or more show a carousel
//! driven by the page's carousel script through `data-bs-*` attributes.

use super::node::Element;
use crate::project::ProjectRecord;

#[cfg(test)]
#[path = "card_test.rs"]
mod card_test;

const HOVER_ENTER: &str = "this.style.transform='translateY(-10px) scale(1.02)'";
const HOVER_LEAVE: &str = "this.style.transform='translateY(0) scale(1)'";
const HIDE_ON_ERROR: &str = "this.style.display='none'";
const PLACEHOLDER_ON_ERROR: &str = "this.parentElement.innerHTML='<div class=\"image-placeholder\"><i class=\"fas fa-code\"></i><span>Project Screenshot</span></div>'";

/// Supplies carousel element ids. Each call must return a fresh id.
pub trait IdSource {
    fn carousel_id(&mut self) -> String;
}

impl<F: FnMut() -> String> IdSource for F {
    fn carousel_id(&mut self) -> String {
        self()
    }
}

/// `carousel-` followed by nine random characters. Collisions are possible
/// and ignored; a page renders at most a few dozen carousels.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn carousel_id(&mut self) -> String {
        let simple = uuid::Uuid::new_v4().simple().to_string();
        format!("carousel-{}", &simple[..9])
    }
}

/// What the card's image area shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardMedia<'a> {
    Placeholder,
    Single(&'a str),
    Carousel(&'a [String]),
}

impl<'a> CardMedia<'a> {
    #[must_use]
    pub fn for_screenshots(screenshots: &'a [String]) -> Self {
        match screenshots {
            [] => Self::Placeholder,
            [only] => Self::Single(only),
            many => Self::Carousel(many),
        }
    }
}

/// Build the full card for one project.
pub fn project_card(project: &ProjectRecord, ids: &mut dyn IdSource) -> Element {
    let image_content = match CardMedia::for_screenshots(&project.screenshots) {
        CardMedia::Placeholder => image_placeholder().class("image-placeholder project-image"),
        CardMedia::Single(src) => Element::new("img")
            .attr("src", src)
            .attr("alt", project.title.as_str())
            .attr("onerror", PLACEHOLDER_ON_ERROR),
        CardMedia::Carousel(images) => image_carousel(&ids.carousel_id(), images, &project.title),
    };

    Element::new("div")
        .class("project-card")
        .attr("onmouseenter", HOVER_ENTER)
        .attr("onmouseleave", HOVER_LEAVE)
        .child(Element::new("div").class("project-image").child(image_content))
        .child(project_content(project))
}

/// Carousel of `images`, first slide active. Failed images hide themselves.
#[must_use]
pub fn image_carousel(id: &str, images: &[String], title: &str) -> Element {
    let slides = images.iter().enumerate().map(|(index, src)| {
        let class = if index == 0 { "carousel-item active" } else { "carousel-item" };
        Element::new("div").class(class).child(
            Element::new("img")
                .attr("src", src.as_str())
                .class("d-block w-100")
                .attr("alt", format!("{title} - Image {}", index + 1))
                .attr("onerror", HIDE_ON_ERROR),
        )
    });

    Element::new("div")
        .attr("id", id)
        .class("carousel slide")
        .attr("data-bs-ride", "carousel")
        .child(Element::new("div").class("carousel-inner").children(slides))
        .child(carousel_control(id, "prev", "Previous"))
        .child(carousel_control(id, "next", "Next"))
}

fn carousel_control(id: &str, direction: &str, label: &str) -> Element {
    Element::new("button")
        .class(format!("carousel-control-{direction}"))
        .attr("type", "button")
        .attr("data-bs-target", format!("#{id}"))
        .attr("data-bs-slide", direction)
        .child(
            Element::new("span")
                .class(format!("carousel-control-{direction}-icon"))
                .attr("aria-hidden", "true"),
        )
        .child(Element::new("span").class("visually-hidden").child(label))
}

fn image_placeholder() -> Element {
    Element::new("div")
        .child(Element::new("i").class("fas fa-code"))
        .child(Element::new("span").child("Project Screenshot"))
}

fn project_content(project: &ProjectRecord) -> Element {
    let tags = project
        .technologies
        .iter()
        .map(|tech| Element::new("span").class("tech-tag").child(tech.as_str()));

    let mut links = Element::new("div").class("project-links");
    if let Some(github) = &project.github {
        links = links.child(external_link(github, "fab fa-github", " Code"));
    }
    if let Some(demo) = &project.live_demo {
        links = links.child(external_link(demo, "fas fa-external-link-alt", " Live Demo"));
    }

    Element::new("div")
        .class("project-content")
        .child(Element::new("h3").class("project-title").child(project.title.as_str()))
        .child(Element::new("p").class("project-description").child(project.description.as_str()))
        .child(Element::new("div").class("project-tech").children(tags))
        .child(links)
}

fn external_link(href: &str, icon: &str, label: &str) -> Element {
    Element::new("a")
        .attr("href", href)
        .class("project-link")
        .attr("target", "_blank")
        .child(Element::new("i").class(icon))
        .child(label)
}
