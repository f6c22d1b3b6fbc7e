use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

static CONTENT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h1, h2, h3, h4, p, ul, ol, table").unwrap());

/// Subtrees whose text never counts as page content.
const STRIPPED_TAGS: &[&str] = &["script", "style", "nav", "footer", "header", "aside", "form"];
const HEADING_TAGS: &[&str] = &["h1", "h2", "h3", "h4"];
const BODY_TAGS: &[&str] = &["p", "ul", "ol", "table"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Heading(String),
    Body(String),
}

/// Walk the document in source order and keep headings (h1–h4) and body elements.
///
/// Body elements nested inside another body element (a `<p>` in a list item,
/// a list in a table cell) are covered by their outer element's text.
pub fn classify_elements(html: &str) -> Vec<Element> {
    let document = Html::parse_document(html);
    let mut elements = Vec::new();

    for el in document.select(&CONTENT_SELECTOR) {
        if has_ancestor(&el, STRIPPED_TAGS) {
            continue;
        }

        if HEADING_TAGS.contains(&el.value().name()) {
            let text = element_text(&el);
            elements.push(Element::Heading(text.split_whitespace().collect::<Vec<_>>().join(" ")));
        } else if !has_ancestor(&el, BODY_TAGS) {
            elements.push(Element::Body(element_text(&el)));
        }
    }

    elements
}

fn has_ancestor(el: &ElementRef, tags: &[&str]) -> bool {
    el.ancestors()
        .filter_map(|node| node.value().as_element())
        .any(|e| tags.contains(&e.name()))
}

/// Visible text of an element. Text nodes are trimmed and joined with single
/// spaces; line breaks inside a node survive, other whitespace runs collapse.
fn element_text(el: &ElementRef) -> String {
    let mut parts: Vec<String> = Vec::new();
    for node in el.descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let hidden = node
            .ancestors()
            .filter_map(|a| a.value().as_element())
            .any(|e| STRIPPED_TAGS.contains(&e.name()));
        if hidden {
            continue;
        }
        let normalized = normalize_lines(text);
        if !normalized.is_empty() {
            parts.push(normalized);
        }
    }
    parts.join(" ")
}

fn normalize_lines(text: &str) -> String {
    text.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_texts(html: &str) -> Vec<String> {
        classify_elements(html)
            .into_iter()
            .filter_map(|e| match e {
                Element::Body(text) => Some(text),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn headings_and_body_in_source_order() {
        let html = "<h1>Title</h1><p>First para</p><h2>Sub</h2><ul><li>one</li><li>two</li></ul>\
                    <h5>ignored level</h5><table><tr><td>cell</td></tr></table>";
        let elements = classify_elements(html);
        assert_eq!(
            elements,
            vec![
                Element::Heading("Title".into()),
                Element::Body("First para".into()),
                Element::Heading("Sub".into()),
                Element::Body("one two".into()),
                Element::Body("cell".into()),
            ]
        );
    }

    #[test]
    fn stripped_regions_are_skipped() {
        let html = "<header><h1>Site</h1><p>Header blurb</p></header>\
                    <nav><ul><li>Home</li></ul></nav>\
                    <p>Visible <script>var x = 1;</script>text</p>\
                    <aside><p>Sidebar</p></aside>\
                    <form><p>Sign up</p></form>\
                    <footer><p>Copyright</p></footer>";
        let elements = classify_elements(html);
        assert_eq!(elements, vec![Element::Body("Visible text".into())]);
    }

    #[test]
    fn inline_markup_and_whitespace_are_normalized() {
        let html = "<p>  Hello\n   <b>bold</b>   <a href='#'>link</a>&amp; more </p>";
        assert_eq!(body_texts(html), vec!["Hello bold link & more"]);
    }

    #[test]
    fn wrapped_source_lines_keep_their_break() {
        let html = "<p>Answer engines quote   passages\n      so that readers\r\n\n  get context</p>\n\
                    <ul>\n  <li>one</li>\n  <li>two</li>\n</ul>";
        assert_eq!(
            body_texts(html),
            vec!["Answer engines quote passages\nso that readers\nget context", "one two"]
        );
    }

    #[test]
    fn headings_stay_on_one_line() {
        let html = "<h2>What is\n   GEO?</h2>";
        assert_eq!(classify_elements(html), vec![Element::Heading("What is GEO?".into())]);
    }

    #[test]
    fn nested_body_elements_counted_once() {
        let html = "<ul><li><p>inside list</p></li></ul><p>after</p>";
        assert_eq!(body_texts(html), vec!["inside list", "after"]);
    }

    #[test]
    fn malformed_markup_is_tolerated() {
        let html = "<p>unclosed paragraph <h2>Heading<p>next <div><p>deep";
        let elements = classify_elements(html);
        assert!(elements.iter().any(|e| matches!(e, Element::Heading(text) if text == "Heading")));
        assert!(!body_texts(html).is_empty());
    }

    #[test]
    fn empty_document() {
        assert!(classify_elements("").is_empty());
    }
}
