//! Tab expansion and prefix measurement.
//!
//! Column arithmetic follows the "display column" model: a tab advances to the
//! next multiple of the tab size, every other character advances by its
//! Unicode display width as reported by `unicode-width`.

use std::fmt::Debug;

use unicode_width::UnicodeWidthChar;

/// Tab size used by traditional UNIX tools.
pub const DEFAULT_TAB_SIZE: usize = 8;

/// A line prefix together with the number of columns it occupies.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LinePrefix {
    pub text: String,
    pub width: usize,
}

impl LinePrefix {
    /// Length of the prefix text in characters.
    #[must_use]
    pub fn char_len(&self) -> usize { self.text.chars().count() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.text.is_empty() }
}

/// Strategy deciding how a tab is written and how many columns it covers.
///
/// `convert_tab` is called both for prefixes, where `line_width` is zero, and
/// while scanning the whitespace between words, where `line_width` is the
/// width of the output line so far. `width` is the width already accumulated
/// in `buffer`.
pub trait TabPolicy: Debug + Send + Sync {
    fn tab_size(&self) -> usize;

    /// Columns covered by a tab that starts at `column`.
    fn tab_width(&self, column: usize) -> usize {
        let size = self.tab_size();
        size - column % size
    }

    fn convert_tab(&self, buffer: &mut String, width: &mut usize, line_width: usize);

    /// Canonicalise `prefix` and compute its width in columns.
    fn measure(&self, prefix: &str) -> LinePrefix {
        let mut out = LinePrefix::default();
        for c in prefix.chars() {
            if c == '\t' {
                self.convert_tab(&mut out.text, &mut out.width, 0);
            } else {
                out.text.push(c);
                out.width += char_width(c);
            }
        }
        out
    }
}

/// Keep literal tabs; count them up to the next tab stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabStops {
    pub size: usize,
}

impl Default for TabStops {
    fn default() -> Self {
        Self {
            size: DEFAULT_TAB_SIZE,
        }
    }
}

impl TabPolicy for TabStops {
    fn tab_size(&self) -> usize { self.size }

    fn convert_tab(&self, buffer: &mut String, width: &mut usize, line_width: usize) {
        buffer.push('\t');
        *width += self.tab_width(line_width + *width);
    }
}

/// Replace every tab with the spaces it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpandTabs {
    pub size: usize,
}

impl Default for ExpandTabs {
    fn default() -> Self {
        Self {
            size: DEFAULT_TAB_SIZE,
        }
    }
}

impl TabPolicy for ExpandTabs {
    fn tab_size(&self) -> usize { self.size }

    fn convert_tab(&self, buffer: &mut String, width: &mut usize, line_width: usize) {
        let n = self.tab_width(line_width + *width);
        buffer.extend(std::iter::repeat_n(' ', n));
        *width += n;
    }
}

#[inline]
pub(crate) fn char_width(c: char) -> usize { UnicodeWidthChar::width(c).unwrap_or(0) }

/// Display width of a run of non-tab characters.
#[inline]
pub(crate) fn text_width(text: &str) -> usize { text.chars().map(char_width).sum() }

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("", "", 0)]
    #[case("// ", "// ", 3)]
    #[case("\t", "\t", 8)]
    #[case("ab\t", "ab\t", 8)]
    #[case("\t# ", "\t# ", 10)]
    #[case("abcdefgh\t", "abcdefgh\t", 16)]
    fn tab_stops_measure(#[case] input: &str, #[case] text: &str, #[case] width: usize) {
        let prefix = TabStops::default().measure(input);
        assert_eq!(prefix.text, text);
        assert_eq!(prefix.width, width);
    }

    #[test]
    fn expand_tabs_writes_spaces() {
        let prefix = ExpandTabs { size: 4 }.measure("a\tb\t");
        assert_eq!(prefix.text, "a   b   ");
        assert_eq!(prefix.width, 8);
        assert_eq!(prefix.char_len(), 8);
    }

    #[test]
    fn running_column_offsets_tab_stops() {
        let mut buffer = String::from(" ");
        let mut width = 1;
        TabStops::default().convert_tab(&mut buffer, &mut width, 5);
        assert_eq!(buffer, " \t");
        assert_eq!(width, 3);
    }

    #[test]
    fn wide_characters_count_two_columns() {
        let prefix = TabStops::default().measure("「 ");
        assert_eq!(prefix.width, 3);
    }
}
