//! Whole-text processing used by the command-line tool.

use std::borrow::Cow;

use log::info;

use crate::{config::CrmConfig, text::StyledText};

/// Which part of a text to reformat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// The paragraph containing the 0-based line.
    Line(usize),
    /// Every paragraph in the text.
    All,
}

/// Errors raised while processing a text or file.
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("line {} is past the end of the input ({lines} lines)", line + 1)]
    LineOutOfRange { line: usize, lines: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Reformat `text` and return the result.
///
/// Text outside the targeted paragraphs is returned unchanged. CRLF line
/// endings are read as plain newlines and written back as CRLF.
///
/// # Errors
/// Returns [`ProcessError::LineOutOfRange`] when `target` names a line the
/// text does not have.
pub fn clean_text(
    text: &str,
    config: &CrmConfig,
    target: Target,
    coerce: bool,
) -> Result<String, ProcessError> {
    let crlf = text.contains("\r\n");
    let text = if crlf {
        Cow::Owned(text.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(text)
    };
    let mut doc = StyledText::plain(&text);
    match target {
        Target::Line(line) => {
            let lines = text.lines().count();
            let offset = doc
                .line_offset(line)
                .filter(|_| line < lines)
                .ok_or(ProcessError::LineOutOfRange { line, lines })?;
            doc.set_caret(offset);
        }
        Target::All => doc.set_selection(0..doc.len()),
    }

    if doc.is_empty() {
        return Ok(String::new());
    }
    match doc.apply_clean_right_margin(config, coerce) {
        Some(range) => info!("reformatted characters {range:?}"),
        None => info!("caret is not inside a paragraph; nothing to do"),
    }
    let out = doc.text();
    Ok(if crlf { out.replace('\n', "\r\n") } else { out })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_target_only_touches_its_paragraph() {
        let config = CrmConfig::new(10).unwrap();
        let input = "alpha beta gamma\n\ndelta epsilon zeta\n";
        let out = clean_text(input, &config, Target::Line(2), false).unwrap();
        assert_eq!(out, "alpha beta gamma\n\ndelta\nepsilon\nzeta\n");
    }

    #[test]
    fn all_target_touches_every_paragraph() {
        let config = CrmConfig::new(10).unwrap();
        let input = "alpha beta gamma\n\ndelta epsilon zeta\n";
        let out = clean_text(input, &config, Target::All, false).unwrap();
        assert_eq!(out, "alpha beta\ngamma\n\ndelta\nepsilon\nzeta\n");
    }

    #[test]
    fn missing_line_is_an_error() {
        let config = CrmConfig::default();
        let err = clean_text("one\ntwo\n", &config, Target::Line(2), false).unwrap_err();
        assert_eq!(err.to_string(), "line 3 is past the end of the input (2 lines)");
    }

    #[test]
    fn crlf_line_endings_survive_joining() {
        let config = CrmConfig::new(20).unwrap();
        let out = clean_text("aa\r\nbb\r\n\r\ncc\r\n", &config, Target::All, false).unwrap();
        assert_eq!(out, "aa bb\r\n\r\ncc\r\n");
    }

    #[test]
    fn empty_input_stays_empty() {
        let config = CrmConfig::default();
        assert_eq!(clean_text("", &config, Target::All, false).unwrap(), "");
    }
}
