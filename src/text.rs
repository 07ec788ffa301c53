//! A minimal styled text buffer hosting the reflow engine.
//!
//! Indices are 0-based character positions. A caret is an insertion point in
//! `0..=len`; ranges are half-open.

use std::ops::Range;

use crate::{runs::RunArray, style::Style};

/// Text plus one style per character and the current selection.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledText<S> {
    chars: Vec<char>,
    styles: RunArray<S>,
    selection: Range<usize>,
}

impl StyledText<()> {
    /// Unstyled text with the caret at the start.
    #[must_use]
    pub fn plain(text: &str) -> Self { Self::uniform(text, ()) }
}

impl<S: Style> StyledText<S> {
    /// Build a buffer from text and matching styles.
    ///
    /// # Panics
    /// Panics if `styles` does not hold exactly one element per character.
    #[must_use]
    pub fn new(text: &str, styles: RunArray<S>) -> Self {
        let chars: Vec<char> = text.chars().collect();
        assert_eq!(
            chars.len(),
            styles.len(),
            "style runs must cover the text exactly"
        );
        Self {
            chars,
            styles,
            selection: 0..0,
        }
    }

    /// Text where every character shares `style`.
    #[must_use]
    pub fn uniform(text: &str, style: S) -> Self {
        let count = text.chars().count();
        Self::new(text, RunArray::filled(style, count))
    }

    #[must_use]
    pub fn len(&self) -> usize { self.chars.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.chars.is_empty() }

    #[must_use]
    pub fn text(&self) -> String { self.chars.iter().collect() }

    #[must_use]
    pub fn styles(&self) -> &RunArray<S> { &self.styles }

    #[must_use]
    pub fn char_at(&self, index: usize) -> Option<char> { self.chars.get(index).copied() }

    /// Text in `range`, clamped to the buffer.
    #[must_use]
    pub fn substring(&self, range: Range<usize>) -> String {
        let end = range.end.min(self.len());
        let start = range.start.min(end);
        self.chars[start..end].iter().collect()
    }

    #[must_use]
    pub fn ends_with_newline(&self) -> bool { self.chars.last() == Some(&'\n') }

    /// First index of the line containing `index`.
    #[must_use]
    pub fn line_start(&self, index: usize) -> usize {
        let index = index.min(self.len());
        self.chars[..index]
            .iter()
            .rposition(|&c| c == '\n')
            .map_or(0, |p| p + 1)
    }

    /// Index of the newline ending the line that contains `index`, or the
    /// buffer length for the last line.
    #[must_use]
    pub fn line_end(&self, index: usize) -> usize {
        let index = index.min(self.len());
        self.chars[index..]
            .iter()
            .position(|&c| c == '\n')
            .map_or(self.len(), |p| index + p)
    }

    /// Start index of the 0-based line `line`.
    #[must_use]
    pub fn line_offset(&self, line: usize) -> Option<usize> {
        if line == 0 {
            return Some(0);
        }
        self.chars
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == '\n')
            .nth(line - 1)
            .map(|(i, _)| i + 1)
    }

    /// Insertion point; the start of the selection when one exists.
    #[must_use]
    pub fn caret(&self) -> usize { self.selection.start }

    #[must_use]
    pub fn selection(&self) -> Range<usize> { self.selection.clone() }

    /// Collapse the selection to a caret at `index` (clamped).
    pub fn set_caret(&mut self, index: usize) {
        let index = index.min(self.len());
        self.selection = index..index;
    }

    /// Select `range` (clamped).
    pub fn set_selection(&mut self, range: Range<usize>) {
        let end = range.end.min(self.len());
        self.selection = range.start.min(end)..end;
    }

    /// Replace `range` with `text` styled by `styles` and put the caret after
    /// the inserted text.
    ///
    /// # Panics
    /// Panics if `range` is out of bounds or `styles` does not match `text`.
    pub fn replace(&mut self, range: Range<usize>, text: &str, styles: &RunArray<S>) {
        let inserted: Vec<char> = text.chars().collect();
        assert_eq!(
            inserted.len(),
            styles.len(),
            "style runs must cover the inserted text exactly"
        );
        self.styles.splice(range.clone(), styles);
        let caret = range.start + inserted.len();
        self.chars.splice(range, inserted);
        self.set_caret(caret);
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::style::{Font, FontStyle};

    #[rstest]
    #[case(0, 0, 3)]
    #[case(2, 0, 3)]
    #[case(3, 0, 3)]
    #[case(4, 4, 4)]
    #[case(5, 5, 8)]
    #[case(8, 5, 8)]
    fn line_bounds(#[case] index: usize, #[case] start: usize, #[case] end: usize) {
        let doc = StyledText::plain("abc\n\ndef");
        assert_eq!(doc.line_start(index), start);
        assert_eq!(doc.line_end(index), end);
    }

    #[test]
    fn line_offsets() {
        let doc = StyledText::plain("abc\n\ndef\n");
        assert_eq!(doc.line_offset(0), Some(0));
        assert_eq!(doc.line_offset(1), Some(4));
        assert_eq!(doc.line_offset(2), Some(5));
        assert_eq!(doc.line_offset(3), Some(9));
        assert_eq!(doc.line_offset(4), None);
    }

    #[test]
    fn replace_keeps_styles_in_step() {
        let bold = Font::default().with_style(FontStyle {
            bold: true,
            ..FontStyle::default()
        });
        let mut doc = StyledText::uniform("one two", Font::default());
        doc.replace(4..7, "three", &RunArray::filled(bold.clone(), 5));
        assert_eq!(doc.text(), "one three");
        assert_eq!(doc.styles().len(), 9);
        assert_eq!(doc.styles().get(3), Some(&Font::default()));
        assert_eq!(doc.styles().get(4), Some(&bold));
        assert_eq!(doc.caret(), 9);
    }

    #[test]
    #[should_panic(expected = "cover the text")]
    fn new_rejects_mismatched_styles() {
        let _ = StyledText::new("abc", RunArray::filled((), 2));
    }
}
