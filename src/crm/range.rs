//! Paragraph discovery around the caret.

use super::{CleanRightMargin, Paragraph};
use crate::style::Style;

impl<S: Style> CleanRightMargin<'_, S> {
    /// Find the paragraph containing `caret`.
    ///
    /// The search first walks backward until it meets a blank line, a blank
    /// continuation line or (unless `coerce`) a line whose prefix could not
    /// have produced the prefix of the line below it. It then walks forward
    /// until a blank line or (unless `coerce`) a change from the continuation
    /// prefix.
    ///
    /// A caret past the end of the document is in no paragraph.
    pub(super) fn find_range(&self, caret: usize, coerce: bool) -> Option<Paragraph> {
        let doc = self.doc;
        if caret > doc.len() {
            return None;
        }
        let mut range = doc.line_start(caret)..doc.line_end(caret);
        if range.is_empty() {
            return None;
        }

        let current = self.line_prefix(range.clone(), None);
        if !current.has_text || self.line_matches_rest(range.clone()) {
            return None;
        }

        let mut next_prefix = current.prefix;
        while range.start >= 2 {
            let prev_end = range.start - 1;
            let prev_start = doc.line_start(prev_end);
            if prev_start >= prev_end {
                break;
            }
            let prev = self.line_prefix(prev_start..prev_end, None);
            if !prev.has_text
                || self.line_matches_rest(prev_start..prev_end)
                || (!coerce
                    && self.build_rest_prefix(&prev.prefix.text, prev.rule).text
                        != next_prefix.text)
            {
                break;
            }
            range.start = prev_start;
            next_prefix = prev.prefix;
        }

        let first = self.line_prefix(range.start..doc.line_end(range.start), None);
        debug_assert!(first.has_text, "paragraph start must hold text");
        let rest_prefix = self.build_rest_prefix(&first.prefix.text, first.rule);

        while range.end + 1 < doc.len() {
            let next_start = range.end + 1;
            let next_end = doc.line_end(next_start);
            if next_end <= next_start {
                break;
            }
            let next = self.line_prefix(next_start..next_end, first.rule);
            if !next.has_text || (!coerce && next.prefix.text != rest_prefix.text) {
                break;
            }
            range.end = next_end;
        }

        Some(Paragraph {
            range,
            text_start: first.text_start,
            first_prefix: first.prefix,
            rest_prefix,
            rule: first.rule,
        })
    }
}
