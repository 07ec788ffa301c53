//! Greedy line packing.
//!
//! [`Output`] accumulates the reformatted text and its styles append-only,
//! keeping the character count alongside so caret offsets never need a
//! rescan of the text.

use log::trace;

use super::scanner::{ScanCursor, Word};
use crate::{runs::RunArray, style::Style, tabs::LinePrefix};

pub(super) struct Output<S> {
    text: String,
    len: usize,
    styles: RunArray<S>,
}

impl<S: Style> Output<S> {
    pub(super) fn new() -> Self {
        Self {
            text: String::new(),
            len: 0,
            styles: RunArray::new(),
        }
    }

    pub(super) fn text(&self) -> &str { &self.text }

    /// Length in characters.
    pub(super) fn len(&self) -> usize { self.len }

    pub(super) fn is_empty(&self) -> bool { self.len == 0 }

    fn push_uniform(&mut self, text: &str, style: S) {
        let n = text.chars().count();
        self.text.push_str(text);
        self.len += n;
        self.styles.push_n(style, n);
    }

    fn push_styled(&mut self, text: &str, styles: &RunArray<S>) {
        self.text.push_str(text);
        self.len += styles.len();
        self.styles.extend_from(styles);
    }

    pub(super) fn into_parts(self) -> (String, RunArray<S>) { (self.text, self.styles) }
}

/// Append `word` to the output, starting a new line when it does not fit.
///
/// Returns the caret's offset into the output when the word carried it.
pub(super) fn append_word<S: Style>(
    out: &mut Output<S>,
    cursor: &mut ScanCursor,
    word: Word<S>,
    prefix: &LinePrefix,
    target_width: usize,
) -> Option<usize> {
    let new_width = cursor.line_width + word.space_width + word.width;
    let lead = word
        .styles
        .first()
        .cloned()
        .expect("scanned words are never empty");

    if cursor.line_width == 0 || new_width > target_width {
        trace!("break before {:?} at column {}", word.text, cursor.line_width);
        let prefix_style = lead.clear_formatting();
        if !out.is_empty() {
            out.push_uniform("\n", prefix_style.clone());
        }
        out.push_uniform(&prefix.text, prefix_style);

        // The leading whitespace is dropped, so a caret inside it lands on
        // the word.
        let space_len = word.space_len();
        let caret = word.caret.map(|c| out.len() + c.saturating_sub(space_len));

        out.push_styled(&word.text, &word.styles);
        cursor.line_width = prefix.width + word.width;
        caret
    } else {
        let caret = word.caret.map(|c| out.len() + c);
        let space_style = out
            .styles
            .last()
            .map_or_else(|| lead.clone(), |last| S::blend_for_whitespace(last, &lead));
        out.push_uniform(&word.space, space_style);
        out.push_styled(&word.text, &word.styles);

        // An exactly full line leaves no room to detect overflow, so the next
        // word starts a new line.
        cursor.line_width = if new_width < target_width { new_width } else { 0 };
        caret
    }
}
