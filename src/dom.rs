//! DOM Operations Adapter
//!
//! Thin layer over the `dom_query` arena. A [`Document`] owns every node;
//! a [`NodeRef`] is a copyable handle (node id plus a borrow of the arena),
//! so parent and sibling links are indices rather than owning pointers.
//!
//! Removal always happens in two phases: a walk collects handles, then
//! [`detach_all`] unlinks them. Nothing in this crate mutates links while a
//! walk is still following them.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

// Re-export core types for external use
pub use dom_query::{Document, NodeId, NodeRef};

/// A tag opener: `<` directly followed by a name, an end-tag slash, `!` or `?`.
#[allow(clippy::expect_used)]
static TAG_OPEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<[A-Za-z/!?]").expect("valid regex")
});

// === Parsing ===

/// Reject input that holds no markup at all: an empty or whitespace-only
/// string, or text containing no tag opener.
///
/// html5ever recovers from any byte sequence, so this is the only way input
/// can fail to parse.
pub fn ensure_markup(html: &str) -> Result<()> {
    if html.trim().is_empty() {
        return Err(Error::ParseFailure("input is empty".to_string()));
    }
    if !TAG_OPEN_RE.is_match(html) {
        return Err(Error::ParseFailure("input contains no markup".to_string()));
    }
    Ok(())
}

/// Parse an HTML string into a document tree after [`ensure_markup`].
pub fn parse(html: &str) -> Result<Document> {
    ensure_markup(html)?;
    Ok(build(html))
}

/// Build a document tree from any string, the empty string included.
///
/// An empty string yields a document with empty `head` and `body`.
#[must_use]
pub fn build(html: &str) -> Document {
    Document::from(html)
}

// === Tag/Node Information ===

/// Lowercase tag name of an element node, `None` for every other node kind.
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<String> {
    if !node.is_element() {
        return None;
    }
    node.node_name().map(|t| t.to_string())
}

/// Whether `node` is an element whose tag is in `tags`.
#[must_use]
pub fn has_tag_in(node: &NodeRef, tags: &HashSet<String>) -> bool {
    tag_name(node).is_some_and(|t| tags.contains(&t))
}

/// Whether `node` is an element with exactly this tag.
#[must_use]
pub fn has_tag(node: &NodeRef, tag: &str) -> bool {
    tag_name(node).is_some_and(|t| t == tag)
}

/// Whether `node` is a text node holding only whitespace (or nothing).
#[must_use]
pub fn is_whitespace_text(node: &NodeRef) -> bool {
    node.is_text() && node.text().chars().all(char::is_whitespace)
}

/// All attributes of an element as ordered key-value pairs.
///
/// Repeated keys are reported as often as they occur.
#[must_use]
pub fn attributes(node: &NodeRef) -> Vec<(String, String)> {
    if !node.is_element() {
        return Vec::new();
    }
    node.attrs()
        .iter()
        .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
        .collect()
}

// === Tree Navigation ===

/// Direct children of `node` in document order, all node kinds included.
///
/// A `<template>` holds its content in a separate fragment; that fragment's
/// children are reported first, in the order the serializer writes them.
#[must_use]
pub fn children<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    let mut out = Vec::new();
    if let Some(contents) = template_contents(node) {
        push_siblings(contents.first_child(), &mut out);
    }
    push_siblings(node.first_child(), &mut out);
    out
}

fn push_siblings<'a>(mut child: Option<NodeRef<'a>>, out: &mut Vec<NodeRef<'a>>) {
    while let Some(c) = child {
        child = c.next_sibling();
        out.push(c);
    }
}

/// Root of a `<template>` element's contents fragment.
///
/// The fragment has no parent link back to the template.
#[must_use]
pub fn template_contents<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    let id = node.element_ref().and_then(|el| el.template_contents)?;
    Some(NodeRef::new(id, node.tree))
}

/// Decision taken for each node during [`collect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// Not collected; keep walking into its children.
    Descend,
    /// Collected; its subtree goes with it and is not walked.
    Take,
}

/// Phase one of a two-phase detach: walk `root` in pre-order and gather the
/// handles the visitor asks for.
///
/// The walk uses an explicit stack, so nesting depth is bounded by memory
/// rather than by the call stack. A taken node's descendants are never
/// visited, which keeps every collected handle disjoint from the others.
pub fn collect<'a, F>(root: &NodeRef<'a>, mut visit: F) -> Vec<NodeRef<'a>>
where
    F: FnMut(&NodeRef<'a>) -> Visit,
{
    let mut taken = Vec::new();
    let mut stack = vec![*root];

    while let Some(node) = stack.pop() {
        match visit(&node) {
            Visit::Take => taken.push(node),
            Visit::Descend => {
                // Reversed so the first child is popped first.
                stack.extend(children(&node).into_iter().rev());
            }
        }
    }

    taken
}

/// Every node under `root` (inclusive) in document pre-order.
#[must_use]
pub fn preorder<'a>(root: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    let mut nodes = Vec::new();
    let mut stack = vec![*root];

    while let Some(node) = stack.pop() {
        stack.extend(children(&node).into_iter().rev());
        nodes.push(node);
    }

    nodes
}

/// First node under `root` (inclusive, pre-order) matching `pred`.
#[must_use]
pub fn find_first<'a, F>(root: &NodeRef<'a>, pred: F) -> Option<NodeRef<'a>>
where
    F: Fn(&NodeRef<'a>) -> bool,
{
    let mut stack = vec![*root];

    while let Some(node) = stack.pop() {
        if pred(&node) {
            return Some(node);
        }
        stack.extend(children(&node).into_iter().rev());
    }

    None
}

// === Tree Manipulation ===

/// Phase two of a two-phase detach: unlink every collected node from its parent.
///
/// Handles must come from one [`collect`] call, so none of them lies inside
/// another one's subtree. Returns the number of detached subtrees.
pub fn detach_all(nodes: Vec<NodeRef<'_>>) -> usize {
    let count = nodes.len();
    for node in nodes {
        node.remove_from_parent();
    }
    count
}

// === Serialization ===

/// Outer HTML of a node.
#[must_use]
pub fn outer_html(node: &NodeRef) -> String {
    node.html().to_string()
}
