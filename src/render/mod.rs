//! Rendering of the project grid as a node tree.
//!
//! SYSTEM CONTEXT
//! ==============
//! `node` is the tree, `card` holds the card templates. The grid container
//! is modeled as a node whose children are replaced on every render, which
//! is what the browser front end mirrors into `.projects-grid`.

pub mod card;
pub mod node;


pub use card::{IdSource, RandomIds, project_card};
pub use node::{Element, Node};

use crate::project::ProjectRecord;

/// Class of the container the cards are rendered into.
pub const GRID_CLASS: &str = "projects-grid";

/// The grid element; a fresh one is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridContainer {
    root: Element,
}

impl Default for GridContainer {
    fn default() -> Self {
        Self { root: Element::new("div").class(GRID_CLASS) }
    }
}

impl GridContainer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn element(&self) -> &Element {
        &self.root
    }

    #[must_use]
    pub fn cards(&self) -> &[Node] {
        &self.root.children
    }

    /// Markup of the cards only, for mounting into an existing container.
    #[must_use]
    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        for card in &self.root.children {
            card.write_html(&mut out);
        }
        out
    }

    fn clear(&mut self) {
        self.root.children.clear();
    }

    fn append(&mut self, card: Element) {
        self.root.children.push(Node::Element(card));
    }
}

/// Clear `container` and append one card per project, in order.
pub fn render_projects(container: &mut GridContainer, projects: &[ProjectRecord], ids: &mut dyn IdSource) {
    container.clear();
    for project in projects {
        container.append(project_card(project, ids));
    }
}

/// Render `projects` into a fresh grid and return the card markup.
pub fn render_grid_html(projects: &[ProjectRecord], ids: &mut dyn IdSource) -> String {
    let mut container = GridContainer::new();
    render_projects(&mut container, projects, ids);
    container.inner_html()
}
