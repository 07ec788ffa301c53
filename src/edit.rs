//! Applying Clean Right Margin to a document.

use std::ops::Range;

use log::debug;

use crate::{
    config::CrmConfig,
    crm::CleanRightMargin,
    runs::RunArray,
    style::Style,
    text::StyledText,
};

impl<S: Style> StyledText<S> {
    /// Reformat and replace text in place.
    ///
    /// Without a selection the paragraph at the caret is reformatted and the
    /// caret follows its text. With a selection every paragraph touched by it
    /// is reformatted; lines that are not part of a paragraph are kept as they
    /// are. Everything is replaced in a single edit.
    ///
    /// Returns the range now holding the reformatted text, or `None` when
    /// nothing changed.
    pub fn apply_clean_right_margin(
        &mut self,
        config: &CrmConfig,
        coerce: bool,
    ) -> Option<Range<usize>> {
        let (replaced, text, styles, caret) = if self.selection().is_empty() {
            let result = self.clean_right_margin(config, coerce)?;
            (result.replaced, result.text, result.styles, result.caret)
        } else {
            self.clean_selection(config, coerce)
        };

        let start = replaced.start;
        let len = text.chars().count();
        self.replace(replaced, &text, &styles);
        self.set_caret(caret);
        Some(start..start + len)
    }

    fn clean_selection(
        &self,
        config: &CrmConfig,
        coerce: bool,
    ) -> (Range<usize>, String, RunArray<S>, usize) {
        let engine = CleanRightMargin::new(self, config);
        let selection = self.selection();
        let stop = self.line_end(selection.end - 1);

        let mut caret = selection.start;
        let mut replaced: Option<Range<usize>> = None;
        let mut text = String::new();
        let mut styles = RunArray::new();
        let mut first_caret = None;

        loop {
            let consumed = replaced.as_ref().map_or(0, |r| r.end);
            let result = engine
                .run(caret, coerce)
                .filter(|r| replaced.is_none() || r.replaced.start >= consumed);

            let (range, new_caret) = if let Some(result) = result {
                let mut range = result.replaced;
                text.push_str(&result.text);
                styles.extend_from(&result.styles);
                if range.end < stop {
                    range.end += 1;
                    text.push('\n');
                    if let Some(last) = styles.last().cloned() {
                        styles.push(last);
                    }
                }
                (range, result.caret)
            } else {
                let start = self.line_start(caret);
                let end = (self.line_end(caret) + 1).min(self.len());
                text.push_str(&self.substring(start..end));
                styles.extend_from(&self.styles().slice(start..end));
                (start..end, caret)
            };

            debug!("selection pass covered {range:?}");
            first_caret.get_or_insert(new_caret);
            replaced = Some(match replaced {
                Some(r) => r.start.min(range.start)..r.end.max(range.end),
                None => range.clone(),
            });

            if range.end < stop && range.end < self.len() {
                caret = range.end;
            } else {
                break;
            }
        }

        let replaced = replaced.unwrap_or(selection.start..selection.start);
        let caret = first_caret.unwrap_or(selection.start);
        (replaced, text, styles, caret)
    }
}
