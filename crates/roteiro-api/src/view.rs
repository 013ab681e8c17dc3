//! Presentational view tree.
//!
//! A page body, the navigation bar, and the previous/next pager are all
//! projected into this node tree. Nodes are plain data: no callbacks, no
//! styling, no layout. Whatever a frontend does with a `Columns` node on a
//! narrow viewport is its business; the tree only states structure.
//!
//! Everything derives `serde` so a tree can cross any boundary (file,
//! snapshot test, IPC) unchanged.

use serde::{Deserialize, Serialize};

/// A hyperlink, internal or external.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkView {
    /// Target: an absolute route path, or a full URL when `external`.
    pub to: String,

    /// Visible label.
    pub label: String,

    /// Marked when the link's path equals the currently resolved route.
    /// At most one link of a navigation projection is active.
    #[serde(default)]
    pub active: bool,

    /// External links open in a new browsing context and never take part
    /// in routing.
    #[serde(default)]
    pub external: bool,
}

impl LinkView {
    pub fn internal(to: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            label: label.into(),
            active: false,
            external: false,
        }
    }

    pub fn external(to: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            label: label.into(),
            active: false,
            external: true,
        }
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

/// A titled card with an optional one-line description and a body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub children: Vec<ViewNode>,
}

/// A titled vertical grouping of nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionView {
    pub title: String,
    pub children: Vec<ViewNode>,
}

/// Previous/next traversal controls for one page position.
///
/// Both sides are derived from Route Table adjacency; the first page has
/// no `previous`, the last no `next`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagerView {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<LinkView>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<LinkView>,
}

/// One node of the presentational tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewNode {
    /// Heading, level 1..=4.
    Heading { level: u8, text: String },

    /// Paragraph of plain text. `muted` is a secondary-emphasis hint.
    Text { text: String, muted: bool },

    /// Flat bullet list of plain-text items.
    Bullets { items: Vec<String> },

    /// Small inline label (technology tags and the like).
    Badge { label: String },

    /// Source listing.
    Code {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        language: Option<String>,
        source: String,
    },

    Link(LinkView),

    Card(CardView),

    Section(SectionView),

    /// Children laid out side by side when space allows.
    Columns { children: Vec<ViewNode> },

    /// Plain vertical stack.
    Group { children: Vec<ViewNode> },

    Pager(PagerView),
}

impl ViewNode {
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        ViewNode::Heading {
            level,
            text: text.into(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        ViewNode::Text {
            text: text.into(),
            muted: false,
        }
    }

    pub fn muted(text: impl Into<String>) -> Self {
        ViewNode::Text {
            text: text.into(),
            muted: true,
        }
    }

    pub fn bullets<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ViewNode::Bullets {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    pub fn badge(label: impl Into<String>) -> Self {
        ViewNode::Badge {
            label: label.into(),
        }
    }

    pub fn code(language: impl Into<String>, source: impl Into<String>) -> Self {
        ViewNode::Code {
            language: Some(language.into()),
            source: source.into(),
        }
    }

    pub fn section(title: impl Into<String>) -> Self {
        ViewNode::Section(SectionView {
            title: title.into(),
            children: Vec::new(),
        })
    }

    pub fn card(title: impl Into<String>) -> Self {
        ViewNode::Card(CardView {
            title: title.into(),
            description: None,
            children: Vec::new(),
        })
    }

    pub fn columns(children: Vec<ViewNode>) -> Self {
        ViewNode::Columns { children }
    }

    pub fn group(children: Vec<ViewNode>) -> Self {
        ViewNode::Group { children }
    }

    /// Append a child to a container node (`Section`, `Card`, `Columns`,
    /// `Group`). On leaf nodes this is a no-op; containers are the only
    /// nodes built incrementally.
    pub fn child(mut self, node: ViewNode) -> Self {
        match &mut self {
            ViewNode::Section(s) => s.children.push(node),
            ViewNode::Card(c) => c.children.push(node),
            ViewNode::Columns { children } | ViewNode::Group { children } => children.push(node),
            _ => {}
        }
        self
    }

    /// Set the description of a `Card`; no-op elsewhere.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        if let ViewNode::Card(c) = &mut self {
            c.description = Some(description.into());
        }
        self
    }

    /// Depth-first collection of every link in the subtree, in document
    /// order. Used by tests and by frontends that build link indexes.
    pub fn links(&self) -> Vec<&LinkView> {
        let mut out = Vec::new();
        self.collect_links(&mut out);
        out
    }

    fn collect_links<'a>(&'a self, out: &mut Vec<&'a LinkView>) {
        match self {
            ViewNode::Link(link) => out.push(link),
            ViewNode::Section(s) => s.children.iter().for_each(|c| c.collect_links(out)),
            ViewNode::Card(c) => c.children.iter().for_each(|c| c.collect_links(out)),
            ViewNode::Columns { children } | ViewNode::Group { children } => {
                children.iter().for_each(|c| c.collect_links(out))
            }
            ViewNode::Pager(p) => {
                if let Some(prev) = &p.previous {
                    out.push(prev);
                }
                if let Some(next) = &p.next {
                    out.push(next);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_builders_append_children() {
        let node = ViewNode::section("Mensageria")
            .child(ViewNode::text("Kafka"))
            .child(ViewNode::bullets(["payment-events", "fraud-alerts"]));
        match node {
            ViewNode::Section(s) => {
                assert_eq!(s.title, "Mensageria");
                assert_eq!(s.children.len(), 2);
            }
            other => panic!("expected section, got {other:?}"),
        }
    }

    #[test]
    fn child_on_leaf_is_noop() {
        let node = ViewNode::text("a").child(ViewNode::text("b"));
        assert_eq!(
            node,
            ViewNode::Text {
                text: "a".into(),
                muted: false
            }
        );
    }

    #[test]
    fn links_walks_nested_containers_in_order() {
        let tree = ViewNode::group(vec![
            ViewNode::card("Hero").child(ViewNode::Link(LinkView::internal("/deploy", "Deploy"))),
            ViewNode::Pager(PagerView {
                previous: Some(LinkView::internal("/", "Introdução")),
                next: None,
            }),
        ]);
        let targets: Vec<&str> = tree.links().iter().map(|l| l.to.as_str()).collect();
        assert_eq!(targets, vec!["/deploy", "/"]);
    }

    #[test]
    fn view_nodes_serialize_with_type_tag() {
        let json = serde_json::to_value(ViewNode::badge("Kafka")).unwrap();
        assert_eq!(json["type"], "badge");
        assert_eq!(json["label"], "Kafka");
    }
}
