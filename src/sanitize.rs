//! The sanitizing pipeline.
//!
//! `normalize → parse → prune elements → prune empty → strip attributes →
//! normalize anchors → strip comments → extract body → unescape → normalize`,
//! strictly in that order, one fresh tree per call.

use tracing::debug;

use crate::dom;
use crate::error::Result;
use crate::html_processing::{
    extract_body, find_body, normalize_anchors, prune_elements, prune_empty_elements,
    strip_attributes, strip_comments,
};
use crate::options::Options;
use crate::result::{CleanResult, PassStats};
use crate::text_normalize::normalize;

/// Main entry point for sanitizing.
pub(crate) fn sanitize(html: &str, options: &Options) -> Result<CleanResult> {
    if let Err(err) = dom::ensure_markup(html) {
        debug!(input_len = html.len(), error = %err, "input rejected by parser");
        return Err(err);
    }

    // Trimming may leave nothing behind; that still parses, to an empty body.
    let prepared = normalize(html);
    let doc = dom::build(&prepared);

    let mut stats = PassStats {
        elements_removed: prune_elements(&doc, &options.element_denylist),
        ..PassStats::default()
    };
    // Runs after element pruning so containers emptied by it are caught.
    stats.empty_removed = prune_empty_elements(&doc, &options.prunable_empty_tags);
    stats.attributes_removed = strip_attributes(&doc, &options.attribute_denylist);
    stats.anchors_normalized = normalize_anchors(&doc);
    stats.comments_removed = strip_comments(&doc);
    stats.body_found = find_body(&doc).is_some();

    let serialized = extract_body(&doc);
    let unescaped = if options.unescape_entities {
        html_escape::decode_html_entities(&serialized).into_owned()
    } else {
        serialized
    };
    let content = normalize(&unescaped);

    debug!(
        input_len = html.len(),
        output_len = content.len(),
        elements_removed = stats.elements_removed,
        empty_removed = stats.empty_removed,
        attributes_removed = stats.attributes_removed,
        anchors_normalized = stats.anchors_normalized,
        comments_removed = stats.comments_removed,
        body_found = stats.body_found,
        "sanitized document"
    );

    Ok(CleanResult { content, stats })
}
