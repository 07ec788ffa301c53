//! Splitting the paragraph into whitespace and words.

use super::{CleanRightMargin, packer::Output};
use crate::{runs::RunArray, style::Style, tabs::text_width};

/// Position in the source plus the width of the output line being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct ScanCursor {
    pub(super) index: usize,
    pub(super) line_width: usize,
}

impl ScanCursor {
    pub(super) fn new(index: usize) -> Self {
        Self {
            index,
            line_width: 0,
        }
    }
}

/// Whitespace followed by a word, ready to be packed.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Word<S> {
    pub(super) space: String,
    pub(super) space_width: usize,
    pub(super) text: String,
    pub(super) width: usize,
    pub(super) styles: RunArray<S>,
    /// Caret offset into `space` followed by `text`, in characters.
    pub(super) caret: Option<usize>,
}

impl<S> Word<S> {
    pub(super) fn space_len(&self) -> usize { self.space.chars().count() }
}

#[derive(Debug, Clone, PartialEq)]
pub(super) enum Scan<S> {
    /// Only whitespace was left before the end of the range.
    Finished,
    /// A newline ended the whitespace; the cursor is past it.
    Newline,
    Word(Word<S>),
}

#[inline]
fn is_sentence_end(c: char) -> bool { matches!(c, '.' | '?' | '!') }

/// Whether the output ends a sentence: a terminator, optionally followed by a
/// closing double quote.
fn ends_sentence(text: &str) -> bool {
    let mut tail = text.chars().rev();
    match (tail.next(), tail.next()) {
        (Some(c1), _) if is_sentence_end(c1) => true,
        (Some('"'), Some(c2)) => is_sentence_end(c2),
        _ => false,
    }
}

impl<S: Style> CleanRightMargin<'_, S> {
    /// Read the whitespace and word starting at the cursor.
    ///
    /// Whitespace that ends in a newline is dropped. When a word follows no
    /// whitespace at all (its spaces went with a discarded prefix) and
    /// `require_space` is set, one space is synthesised, or two after the end
    /// of a sentence unless the word starts in lower case.
    pub(super) fn read_next_word(
        &self,
        cursor: &mut ScanCursor,
        end: usize,
        caret: usize,
        out: &Output<S>,
        require_space: bool,
    ) -> Scan<S> {
        let policy = self.config.tab_policy();
        let mut space = String::new();
        let mut space_width = 0;
        let mut space_len = 0;
        let mut local_caret = None;

        while cursor.index < end {
            if cursor.index == caret {
                local_caret = Some(space_len);
            }
            match self.doc.char_at(cursor.index) {
                Some(' ') => {
                    space.push(' ');
                    space_width += 1;
                    space_len += 1;
                }
                Some('\t') => {
                    policy.convert_tab(&mut space, &mut space_width, cursor.line_width);
                    space_len = space.chars().count();
                }
                Some('\n') => {
                    cursor.index += 1;
                    return Scan::Newline;
                }
                _ => break,
            }
            cursor.index += 1;
        }

        if cursor.index == end {
            return Scan::Finished;
        }

        let word_start = cursor.index;
        let mut text = String::new();
        let mut word_len = 0;
        while cursor.index < end {
            if cursor.index == caret {
                local_caret = Some(space_len + word_len);
            }
            match self.doc.char_at(cursor.index) {
                Some(c) if !matches!(c, ' ' | '\t' | '\n') => {
                    text.push(c);
                    word_len += 1;
                    cursor.index += 1;
                }
                _ => break,
            }
        }

        if space.is_empty() && require_space {
            let n = if ends_sentence(out.text()) && !text.starts_with(char::is_lowercase) {
                2
            } else {
                1
            };
            space = " ".repeat(n);
            space_width = n;
            if let Some(offset) = local_caret.as_mut() {
                *offset += n;
            }
        }

        Scan::Word(Word {
            space,
            space_width,
            width: text_width(&text),
            text,
            styles: self.doc.styles().slice(word_start..word_start + word_len),
            caret: local_caret,
        })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("", false)]
    #[case("end.", true)]
    #[case("what?", true)]
    #[case("stop!", true)]
    #[case("said \"no.\"", true)]
    #[case("quote\"", false)]
    #[case("e.g", false)]
    #[case("x.)", false)]
    fn sentence_ends(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(ends_sentence(text), expected);
    }
}
