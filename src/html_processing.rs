//! HTML Processing and Pruning
//!
//! The tree passes of the sanitizer. Each pass is total over any parsed
//! document, works in place, and reports how much it changed.
//!
//! Removal passes follow the collect-then-detach discipline from [`crate::dom`]:
//! handles are gathered by one complete walk, and only then unlinked.

use std::collections::HashSet;

use crate::dom::{self, Document, NodeId, NodeRef, Visit};
use crate::tags::{ANCHOR_TAG, BODY_TAG, HREF_ATTR, REL_ATTR, TARGET_ATTR};

// === Element Pruning ===

/// Remove every element whose tag is in `denylist`, subtree included.
///
/// Denylisted elements nested inside other denylisted elements leave with
/// their outermost ancestor. Returns the number of detached subtrees.
pub fn prune_elements(doc: &Document, denylist: &HashSet<String>) -> usize {
    if denylist.is_empty() {
        return 0;
    }

    let doomed = dom::collect(&doc.root(), |node| {
        if dom::has_tag_in(node, denylist) {
            Visit::Take
        } else {
            Visit::Descend
        }
    });

    dom::detach_all(doomed)
}

// === Empty Element Pruning ===

/// Ids of every element under `root` (inclusive) that is recursively empty.
///
/// An element is empty when each child is whitespace-only text or an empty
/// element. Reverse pre-order visits every child before its parent, so one
/// sweep settles the whole subtree without recursion.
fn empty_elements(root: &NodeRef) -> HashSet<NodeId> {
    let mut empty = HashSet::new();

    for node in dom::preorder(root).iter().rev() {
        if !node.is_element() {
            continue;
        }
        let all_blank = dom::children(node).iter().all(|child| {
            dom::is_whitespace_text(child) || (child.is_element() && empty.contains(&child.id))
        });
        if all_blank {
            empty.insert(node.id);
        }
    }

    empty
}

/// Whether an element holds nothing but whitespace, recursively.
///
/// Comments and other non-element, non-text children make it non-empty.
#[must_use]
pub fn is_element_empty(node: &NodeRef) -> bool {
    node.is_element() && empty_elements(node).contains(&node.id)
}

/// Remove elements tagged in `prunable` that are recursively empty.
///
/// Tags outside `prunable` are never removed by this pass, even when empty,
/// though they leave along with an empty prunable ancestor. Returns the number
/// of detached subtrees.
pub fn prune_empty_elements(doc: &Document, prunable: &HashSet<String>) -> usize {
    if prunable.is_empty() {
        return 0;
    }

    let root = doc.root();
    let empty = empty_elements(&root);

    // Only the outermost empty prunable element is taken; everything under
    // it is empty as well and goes with it.
    let doomed = dom::collect(&root, |node| {
        if empty.contains(&node.id) && dom::has_tag_in(node, prunable) {
            Visit::Take
        } else {
            Visit::Descend
        }
    });

    dom::detach_all(doomed)
}

// === Attribute Sanitizing ===

/// Strip every attribute whose key is in `denylist` from every element.
///
/// Repeated keys are all removed; the remaining attributes keep their order.
/// Returns the number of attributes removed.
pub fn strip_attributes(doc: &Document, denylist: &HashSet<String>) -> usize {
    if denylist.is_empty() {
        return 0;
    }

    let mut removed = 0;

    for node in dom::preorder(&doc.root()) {
        if !node.is_element() {
            continue;
        }

        let mut keys: Vec<String> = dom::attributes(&node)
            .into_iter()
            .map(|(key, _)| key)
            .filter(|key| denylist.contains(key))
            .collect();
        removed += keys.len();

        keys.dedup();
        for key in keys {
            node.remove_attr(&key);
        }
    }

    removed
}

// === Anchor Normalization ===

/// Whether an anchor already carries exactly the canonical `target`/`rel` pair.
fn has_canonical_link_attrs(attrs: &[(String, String)]) -> bool {
    let values = |wanted: &str| -> Vec<&str> {
        attrs
            .iter()
            .filter(|(key, _)| key == wanted)
            .map(|(_, value)| value.as_str())
            .collect()
    };

    values(TARGET_ATTR.0) == [TARGET_ATTR.1] && values(REL_ATTR.0) == [REL_ATTR.1]
}

/// Give every `<a href>` exactly one `target="_blank"` and one
/// `rel="noopener noreferrer"`.
///
/// Anchors that are not already canonical lose every `target` and `rel` and get
/// the pair appended after their other attributes. Anchors without `href` are
/// left alone. Returns the number of anchors rewritten.
pub fn normalize_anchors(doc: &Document) -> usize {
    let mut rewritten = 0;

    for node in dom::preorder(&doc.root()) {
        if !dom::has_tag(&node, ANCHOR_TAG) {
            continue;
        }

        let attrs = dom::attributes(&node);
        if !attrs.iter().any(|(key, _)| key == HREF_ATTR) {
            continue;
        }
        if has_canonical_link_attrs(&attrs) {
            continue;
        }

        node.remove_attr(TARGET_ATTR.0);
        node.remove_attr(REL_ATTR.0);
        node.set_attr(TARGET_ATTR.0, TARGET_ATTR.1);
        node.set_attr(REL_ATTR.0, REL_ATTR.1);
        rewritten += 1;
    }

    rewritten
}

// === Comment Stripping ===

/// Remove every comment node at any depth. Returns the number removed.
pub fn strip_comments(doc: &Document) -> usize {
    let comments = dom::collect(&doc.root(), |node| {
        if node.is_comment() {
            Visit::Take
        } else {
            Visit::Descend
        }
    });

    dom::detach_all(comments)
}

// === Body Extraction ===

/// Serialize what should be emitted for this document.
///
/// With a `body` element (first one in pre-order), its direct children are
/// serialized one after another and the `body` tag itself is dropped. Without
/// one, the whole document is serialized. The tree is not modified.
#[must_use]
pub fn extract_body(doc: &Document) -> String {
    match find_body(doc) {
        Some(body) => dom::children(&body).iter().map(dom::outer_html).collect(),
        None => doc.html().to_string(),
    }
}

/// First `body` element in pre-order.
#[must_use]
pub fn find_body(doc: &Document) -> Option<NodeRef<'_>> {
    dom::find_first(&doc.root(), |node| dom::has_tag(node, BODY_TAG))
}
