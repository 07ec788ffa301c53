//! Prefix matching against the configured rules.

use std::{ops::Range, sync::LazyLock};

use log::debug;
use regex::Regex;

use super::{CleanRightMargin, scanner::ScanCursor};
use crate::{style::Style, tabs::LinePrefix};

/// Implicit rule tried after every configured rule.
static DEFAULT_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]*").expect("valid default prefix regex"));

/// Prefix found at the start of a line.
#[derive(Debug, Clone)]
pub(super) struct LineMatch {
    pub(super) prefix: LinePrefix,
    pub(super) rule: Option<usize>,
    /// First character after the prefix.
    pub(super) text_start: usize,
    /// Whether anything but prefix remains on the line.
    pub(super) has_text: bool,
}

impl<S: Style> CleanRightMargin<'_, S> {
    /// Longest prefix at `range.start`, never extending past that line.
    ///
    /// A known rule's continuation pattern is tried first and wins outright.
    /// Otherwise the longest first-line match wins, earlier rules on ties,
    /// and plain indentation wins unless a rule matched strictly more.
    pub(super) fn match_prefix(
        &self,
        range: Range<usize>,
        known: Option<usize>,
    ) -> (Range<usize>, Option<usize>) {
        let end = range.end.min(self.doc.line_end(range.start));
        let line = self.doc.substring(range.start..end);
        let span = |bytes: usize| range.start..range.start + line[..bytes].chars().count();
        let rules = self.config.rules();

        if let Some(i) = known
            && let Some(len) = rules.get(i).and_then(|r| r.match_rest(&line))
        {
            return (span(len), known);
        }

        let mut best: Option<(usize, usize)> = None;
        for (i, rule) in rules.iter().enumerate() {
            if let Some(len) = rule.match_first(&line)
                && best.is_none_or(|(longest, _)| len > longest)
            {
                best = Some((len, i));
            }
        }

        let default_len = DEFAULT_PREFIX_RE.find(&line).map_or(0, |m| m.end());
        match best {
            Some((len, i)) if len > default_len => (span(len), Some(i)),
            _ => (span(default_len), None),
        }
    }

    /// Match the prefix of the line `range` and measure it.
    pub(super) fn line_prefix(&self, range: Range<usize>, known: Option<usize>) -> LineMatch {
        let (matched, rule) = self.match_prefix(range.clone(), known);
        let raw = self.doc.substring(matched.clone());
        LineMatch {
            prefix: self.config.tab_policy().measure(&raw),
            rule,
            text_start: matched.end,
            has_text: matched.end < range.end,
        }
    }

    /// Whether some rule's continuation pattern covers the whole line, which
    /// makes it a blank line for paragraph purposes.
    pub(super) fn line_matches_rest(&self, range: Range<usize>) -> bool {
        let line = self.doc.substring(range);
        self.config
            .rules()
            .iter()
            .any(|rule| rule.rest_matches_whole(&line))
    }

    /// Prefix for the lines after the first.
    pub(super) fn build_rest_prefix(&self, first: &str, rule: Option<usize>) -> LinePrefix {
        let derived = rule.and_then(|i| self.config.rules().get(i)).and_then(|r| {
            let rest = r.derive_rest(first);
            if rest.is_none() && r.replace_template().is_some() {
                debug!("rule {:?} does not cover prefix {first:?}; reusing it", r.first_pattern());
            }
            rest
        });
        let text = derived.as_deref().unwrap_or(first);
        self.config.tab_policy().measure(text)
    }

    /// Move the cursor past the old prefix of the line it starts.
    pub(super) fn toss_line_prefix(&self, cursor: &mut ScanCursor, end: usize, rule: Option<usize>) {
        let (prefix, _) = self.match_prefix(cursor.index..end, rule);
        cursor.index = prefix.end;
    }
}
