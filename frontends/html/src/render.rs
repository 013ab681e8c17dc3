//! View tree → HTML.
//!
//! A recursive string-building walk, one function per concern. The frontend
//! owns all markup decisions; the view tree only states structure. Internal
//! links become plain hrefs; the external repository link opens in a new
//! browsing context. All text content is escaped.

use roteiro_api::{LinkView, PagerView, ViewNode};
use roteiro_core::{NavBarView, PageView};

/// Render a composed page as a complete HTML document.
pub fn render_page(page: &PageView, title: &str) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"pt-BR\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    out.push_str("<title>");
    push_escaped(&mut out, title);
    out.push_str("</title>\n</head>\n<body>\n");

    render_navbar(&page.navbar, &mut out);

    out.push_str("<main>\n");
    render_node(&page.body, &mut out);
    if let Some(pager) = &page.pager {
        render_pager(pager, &mut out);
    }
    out.push_str("</main>\n</body>\n</html>\n");
    out
}

fn render_navbar(bar: &NavBarView, out: &mut String) {
    out.push_str("<nav class=\"navbar\">\n");
    out.push_str("<span class=\"brand\">");
    render_link(&bar.brand, out);
    out.push_str("</span>\n<div class=\"condensed\">\n");
    for link in &bar.condensed {
        render_link(link, out);
        out.push('\n');
    }
    render_link(&bar.external, out);
    out.push_str("\n</div>\n");
    if let Some(panel) = &bar.panel {
        out.push_str("<div class=\"panel\">\n");
        for link in panel {
            render_link(link, out);
            out.push('\n');
        }
        render_link(&bar.external, out);
        out.push_str("\n</div>\n");
    }
    out.push_str("</nav>\n");
}

fn render_pager(pager: &PagerView, out: &mut String) {
    out.push_str("<nav class=\"pager\">\n");
    if let Some(previous) = &pager.previous {
        out.push_str("<span class=\"prev\">");
        render_link(previous, out);
        out.push_str("</span>\n");
    }
    if let Some(next) = &pager.next {
        out.push_str("<span class=\"next\">");
        render_link(next, out);
        out.push_str("</span>\n");
    }
    out.push_str("</nav>\n");
}

fn render_link(link: &LinkView, out: &mut String) {
    out.push_str("<a href=\"");
    push_escaped(out, &link.to);
    out.push('"');
    if link.active {
        out.push_str(" class=\"active\"");
    }
    if link.external {
        out.push_str(" target=\"_blank\" rel=\"noopener noreferrer\"");
    }
    out.push('>');
    push_escaped(out, &link.label);
    out.push_str("</a>");
}

fn render_node(node: &ViewNode, out: &mut String) {
    match node {
        ViewNode::Heading { level, text } => {
            // Clamp to the heading levels HTML actually has.
            let level = (*level).clamp(1, 6);
            out.push_str(&format!("<h{level}>"));
            push_escaped(out, text);
            out.push_str(&format!("</h{level}>\n"));
        }
        ViewNode::Text { text, muted } => {
            out.push_str(if *muted { "<p class=\"muted\">" } else { "<p>" });
            push_escaped(out, text);
            out.push_str("</p>\n");
        }
        ViewNode::Bullets { items } => {
            out.push_str("<ul>\n");
            for item in items {
                out.push_str("<li>");
                push_escaped(out, item);
                out.push_str("</li>\n");
            }
            out.push_str("</ul>\n");
        }
        ViewNode::Badge { label } => {
            out.push_str("<span class=\"badge\">");
            push_escaped(out, label);
            out.push_str("</span>\n");
        }
        ViewNode::Code { language, source } => {
            out.push_str("<pre><code");
            if let Some(language) = language {
                out.push_str(" class=\"language-");
                push_escaped(out, language);
                out.push('"');
            }
            out.push('>');
            push_escaped(out, source);
            out.push_str("</code></pre>\n");
        }
        ViewNode::Link(link) => {
            render_link(link, out);
            out.push('\n');
        }
        ViewNode::Card(card) => {
            out.push_str("<div class=\"card\">\n<h3>");
            push_escaped(out, &card.title);
            out.push_str("</h3>\n");
            if let Some(description) = &card.description {
                out.push_str("<p class=\"muted\">");
                push_escaped(out, description);
                out.push_str("</p>\n");
            }
            for child in &card.children {
                render_node(child, out);
            }
            out.push_str("</div>\n");
        }
        ViewNode::Section(section) => {
            out.push_str("<section>\n<h2>");
            push_escaped(out, &section.title);
            out.push_str("</h2>\n");
            for child in &section.children {
                render_node(child, out);
            }
            out.push_str("</section>\n");
        }
        ViewNode::Columns { children } => {
            out.push_str("<div class=\"columns\">\n");
            for child in children {
                render_node(child, out);
            }
            out.push_str("</div>\n");
        }
        ViewNode::Group { children } => {
            for child in children {
                render_node(child, out);
            }
        }
        ViewNode::Pager(pager) => render_pager(pager, out),
    }
}

fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roteiro_core::NavUiState;

    fn sample_page() -> PageView {
        roteiro_pages::document()
            .unwrap()
            .view("/mensageria", &NavUiState::default())
    }

    #[test]
    fn document_has_doctype_and_title() {
        let html = render_page(&sample_page(), "Mensageria — Sistema de Pagamentos");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Mensageria — Sistema de Pagamentos</title>"));
    }

    #[test]
    fn condensed_strip_has_six_route_links() {
        let html = render_page(&sample_page(), "t");
        let condensed = html
            .split("<div class=\"condensed\">")
            .nth(1)
            .unwrap()
            .split("</div>")
            .next()
            .unwrap();
        // Six route links plus the external repository link.
        assert_eq!(condensed.matches("<a href=").count(), 7);
    }

    #[test]
    fn only_external_link_opens_new_context() {
        let html = render_page(&sample_page(), "t");
        assert_eq!(html.matches("target=\"_blank\"").count(), 1);
        assert!(html.contains("rel=\"noopener noreferrer\""));
    }

    #[test]
    fn active_class_marks_current_route_only() {
        let html = render_page(&sample_page(), "t");
        assert!(html.contains("<a href=\"/mensageria\" class=\"active\">"));
        assert_eq!(html.matches("class=\"active\"").count(), 1);
    }

    #[test]
    fn pager_targets_table_neighbors() {
        let html = render_page(&sample_page(), "t");
        assert!(html.contains("<span class=\"prev\"><a href=\"/observabilidade\">"));
        assert!(html.contains("<span class=\"next\"><a href=\"/resiliencia\">"));
    }

    #[test]
    fn text_content_is_escaped() {
        let page = PageView {
            navbar: roteiro_core::navbar::navbar(
                roteiro_pages::document().unwrap().table(),
                "/",
                &NavUiState::default(),
            ),
            body: ViewNode::text("a < b & \"c\""),
            pager: None,
        };
        let html = render_page(&page, "<t>");
        assert!(html.contains("<title>&lt;t&gt;</title>"));
        assert!(html.contains("<p>a &lt; b &amp; &quot;c&quot;</p>"));
    }
}
