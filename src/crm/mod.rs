//! Clean Right Margin: reflow the paragraph around the caret.
//!
//! A paragraph is a run of non-blank lines whose prefixes agree. The engine
//! strips each line's prefix, greedily packs the words into lines no wider
//! than the configured width, and writes the first line's prefix on the first
//! output line and the derived continuation prefix on every other line.
//! Whitespace inside an output line is kept as typed; whitespace at a line
//! break is dropped and re-synthesised (two spaces after a sentence).
//!
//! The result describes an edit: the original range to replace, the new text
//! with its styles, and where the caret goes afterwards. Applying it is left
//! to the host, see [`StyledText::apply_clean_right_margin`].

mod packer;
mod prefix;
mod range;
mod scanner;

use std::ops::Range;

use log::debug;

use self::{
    packer::{Output, append_word},
    scanner::{Scan, ScanCursor},
};
use crate::{config::CrmConfig, runs::RunArray, style::Style, tabs::LinePrefix, text::StyledText};

/// The paragraph selected for reformatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    /// Lines to rewrite, without the final newline.
    pub range: Range<usize>,
    /// First character after the first line's prefix.
    pub text_start: usize,
    pub first_prefix: LinePrefix,
    pub rest_prefix: LinePrefix,
    /// Rule that produced `first_prefix`; `None` for plain indentation.
    pub rule: Option<usize>,
}

/// Replacement produced by one reformatting pass.
#[derive(Debug, Clone, PartialEq)]
pub struct CrmResult<S> {
    /// Range of the original text that `text` replaces.
    pub replaced: Range<usize>,
    pub text: String,
    pub styles: RunArray<S>,
    /// Caret position in the document after the replacement.
    pub caret: usize,
}

/// One reformatting pass over a borrowed document.
pub struct CleanRightMargin<'a, S> {
    doc: &'a StyledText<S>,
    config: &'a CrmConfig,
}

impl<'a, S: Style> CleanRightMargin<'a, S> {
    #[must_use]
    pub fn new(doc: &'a StyledText<S>, config: &'a CrmConfig) -> Self { Self { doc, config } }

    /// Locate the paragraph containing `caret` without rewriting it.
    #[must_use]
    pub fn paragraph(&self, caret: usize, coerce: bool) -> Option<Paragraph> {
        self.find_range(caret, coerce)
    }

    /// Reformat the paragraph containing `caret`.
    ///
    /// With `coerce` unset, only lines whose prefixes already agree are
    /// merged, so no prefix changes. With `coerce` set, every non-blank line
    /// between blank lines is absorbed and given the paragraph's prefixes.
    ///
    /// Returns `None` when the caret is not inside a paragraph, including a
    /// caret past the end of the document.
    ///
    /// # Panics
    /// Panics if the internal bookkeeping loses the caret or lets the styles
    /// drift from the text; either would corrupt the document on apply.
    #[must_use]
    pub fn run(&self, caret: usize, coerce: bool) -> Option<CrmResult<S>> {
        let doc = self.doc;
        if doc.is_empty() || (caret == doc.len() && doc.ends_with_newline()) {
            return None;
        }

        let para = self.find_range(caret, coerce)?;
        debug!(
            "reformatting {:?} (rule {:?}, prefixes {:?} / {:?})",
            para.range, para.rule, para.first_prefix.text, para.rest_prefix.text
        );

        let end = para.range.end;
        let width = self.config.line_width();
        let mut new_caret = (caret <= para.text_start).then_some(caret);
        let mut carry_caret = false;
        let mut out = Output::new();
        let mut cursor = ScanCursor::new(para.text_start);
        let mut require_space = false;

        while cursor.index < end {
            let scan = self.read_next_word(&mut cursor, end, caret, &out, require_space);
            require_space = true;

            match scan {
                Scan::Finished => {
                    debug_assert_eq!(cursor.index, end);
                    // caret sat in whitespace trailing the last word
                    if new_caret.is_none() && caret < cursor.index {
                        new_caret = Some(para.range.start + out.len());
                    }
                    break;
                }
                Scan::Word(mut word) => {
                    if std::mem::take(&mut carry_caret) && word.caret.is_none() {
                        word.caret = Some(0);
                    }
                    let prefix = if out.is_empty() {
                        &para.first_prefix
                    } else {
                        &para.rest_prefix
                    };
                    if let Some(offset) = append_word(&mut out, &mut cursor, word, prefix, width) {
                        new_caret = Some(para.range.start + offset);
                    }
                }
                Scan::Newline => {
                    self.toss_line_prefix(&mut cursor, end, para.rule);
                    // A caret inside the discarded prefix joins the next word.
                    if new_caret.is_none() && caret < cursor.index {
                        carry_caret = true;
                    }
                }
            }
        }

        if caret == end || (carry_caret && new_caret.is_none()) {
            new_caret = Some(para.range.start + out.len());
        }

        let Some(new_caret) = new_caret else {
            panic!("caret {caret} was never placed while reformatting {:?}", para.range);
        };
        let (text, styles) = out.into_parts();
        assert_eq!(
            text.chars().count(),
            styles.len(),
            "style runs out of step with reformatted text"
        );

        Some(CrmResult {
            replaced: para.range,
            text,
            styles,
            caret: new_caret,
        })
    }
}

impl<S: Style> StyledText<S> {
    /// Reformat the paragraph at this document's caret without modifying it.
    #[must_use]
    pub fn clean_right_margin(&self, config: &CrmConfig, coerce: bool) -> Option<CrmResult<S>> {
        CleanRightMargin::new(self, config).run(self.caret(), coerce)
    }
}
