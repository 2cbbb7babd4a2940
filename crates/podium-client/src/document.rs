//! Queryable HTML document tree.
//!
//! A thin layer over [`scraper::Html`] exposing the handful of lookups the
//! extractors need: descendant search by CSS selector, exact class-set
//! lookup, text and attribute access, and "next matching element in
//! document order".

use std::collections::BTreeSet;

use scraper::{ElementRef, Html, Selector};

/// Compile a selector literal.
///
/// # Panics
///
/// Panics if `css` is not a valid selector.
pub fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector `{css}`: {e}"))
}

/// A parsed HTML page.
///
/// Parsing never fails: malformed or partial markup yields a best-effort tree.
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// The `<html>` element.
    pub fn root(&self) -> Node<'_> {
        Node::new(self.html.root_element())
    }

    /// First element matching `selector`, in document order.
    pub fn find(&self, selector: &Selector) -> Option<Node<'_>> {
        self.html.select(selector).next().map(Node::new)
    }

    /// Every element matching `selector`, in document order.
    pub fn find_all(&self, selector: &Selector) -> Vec<Node<'_>> {
        self.html.select(selector).map(Node::new).collect()
    }

    /// First element with tag `tag` whose class set is exactly `classes`.
    pub fn find_with_classes(&self, tag: &str, classes: &[&str]) -> Option<Node<'_>> {
        self.root().find_with_classes_inclusive(tag, classes)
    }
}

/// An element of a [`Document`].
#[derive(Debug, Clone, Copy)]
pub struct Node<'a> {
    el: ElementRef<'a>,
}

impl<'a> Node<'a> {
    fn new(el: ElementRef<'a>) -> Self {
        Self { el }
    }

    pub fn tag_name(&self) -> &'a str {
        self.el.value().name()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.el.value().classes().any(|c| c == class)
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.el.value().attr(name)
    }

    /// All descendant text concatenated, then trimmed.
    pub fn text(&self) -> String {
        self.el.text().collect::<String>().trim().to_string()
    }

    /// Each descendant text node trimmed, empty ones dropped, then concatenated
    /// without separator.
    pub fn stripped_text(&self) -> String {
        self.el
            .text()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// First descendant (excluding `self`) matching `selector`.
    pub fn find(&self, selector: &Selector) -> Option<Node<'a>> {
        self.el.select(selector).next().map(Node::new)
    }

    /// Every descendant (excluding `self`) matching `selector`, in document order.
    pub fn find_all(&self, selector: &Selector) -> Vec<Node<'a>> {
        self.el.select(selector).map(Node::new).collect()
    }

    /// First descendant with tag `tag` whose class set is exactly `classes`.
    ///
    /// CSS has no "these classes and no others" selector, so this walks the
    /// subtree itself.
    pub fn find_with_classes(&self, tag: &str, classes: &[&str]) -> Option<Node<'a>> {
        let wanted: BTreeSet<&str> = classes.iter().copied().collect();
        self.el
            .descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .find(|el| el.value().name() == tag && class_set(el) == wanted)
            .map(Node::new)
    }

    fn find_with_classes_inclusive(&self, tag: &str, classes: &[&str]) -> Option<Node<'a>> {
        let wanted: BTreeSet<&str> = classes.iter().copied().collect();
        if self.tag_name() == tag && class_set(&self.el) == wanted {
            return Some(*self);
        }
        self.find_with_classes(tag, classes)
    }

    /// First element matching `selector` that starts after this element's
    /// start tag in document order, at any nesting level. This element's own
    /// descendants come first, then whatever follows it.
    pub fn find_next(&self, selector: &Selector) -> Option<Node<'a>> {
        let start = self.el.id();
        let top = self.el.ancestors().last()?;
        top.descendants()
            .skip_while(|node| node.id() != start)
            .skip(1)
            .filter_map(ElementRef::wrap)
            .find(|el| selector.matches(el))
            .map(Node::new)
    }
}

fn class_set<'a>(el: &ElementRef<'a>) -> BTreeSet<&'a str> {
    el.value().classes().collect()
}
