//! Prefix rules describing the structural text at the start of a line.
//!
//! A rule pairs the pattern that recognises a paragraph's first line prefix
//! with an optional pattern for its continuation lines and an optional
//! template that turns the first-line prefix into the continuation prefix.
//! For a numbered list the first pattern matches `"3. "`, the rest pattern
//! matches the indentation of the following lines, and the template turns
//! `"3. "` into `"   "`.

pub mod presets;

use regex::Regex;

/// Errors raised while compiling a [`PrefixRule`].
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// The first-line pattern is empty.
    #[error("first-line pattern must not be empty")]
    EmptyPattern,

    /// One of the patterns failed to compile.
    #[error("invalid {which} pattern `{pattern}`: {source}")]
    InvalidPattern {
        which: &'static str,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// One structural prefix rule.
#[derive(Debug, Clone)]
pub struct PrefixRule {
    first: Regex,
    rest: Option<Regex>,
    replace: Option<String>,
}

fn compile(which: &'static str, pattern: &str) -> Result<Regex, RuleError> {
    Regex::new(pattern).map_err(|source| RuleError::InvalidPattern {
        which,
        pattern: pattern.to_string(),
        source,
    })
}

impl PrefixRule {
    /// Compile a rule.
    ///
    /// `replace` uses the `regex` crate's expansion syntax (`$0`, `$1`,
    /// `${name}`) over the captures of `first`. Expansion copies captured
    /// text and literals only; it cannot turn a capture into spaces of the
    /// same width, so a blank continuation for markers of varying width
    /// (`"9. "`, `"10. "`) needs one rule per marker width.
    ///
    /// # Errors
    /// Returns [`RuleError`] if `first` is empty or a pattern does not
    /// compile.
    pub fn new(first: &str, rest: Option<&str>, replace: Option<&str>) -> Result<Self, RuleError> {
        if first.is_empty() {
            return Err(RuleError::EmptyPattern);
        }
        Ok(Self {
            first: compile("first-line", first)?,
            rest: rest.map(|p| compile("continuation", p)).transpose()?,
            replace: replace.map(str::to_string),
        })
    }

    /// Rule whose prefix is the same on every line, e.g. `"// "`.
    ///
    /// # Errors
    /// See [`PrefixRule::new`].
    pub fn repeating(pattern: &str) -> Result<Self, RuleError> {
        Self::new(pattern, Some(pattern), None)
    }

    #[must_use]
    pub fn first_pattern(&self) -> &str { self.first.as_str() }

    #[must_use]
    pub fn rest_pattern(&self) -> Option<&str> { self.rest.as_ref().map(Regex::as_str) }

    #[must_use]
    pub fn replace_template(&self) -> Option<&str> { self.replace.as_deref() }

    /// Byte length of the first-line match anchored at the start of `line`.
    pub(crate) fn match_first(&self, line: &str) -> Option<usize> { anchored(&self.first, line) }

    /// Byte length of the continuation match anchored at the start of `line`.
    pub(crate) fn match_rest(&self, line: &str) -> Option<usize> {
        self.rest.as_ref().and_then(|re| anchored(re, line))
    }

    /// Whether the continuation pattern matches all of `line`.
    pub(crate) fn rest_matches_whole(&self, line: &str) -> bool {
        self.match_rest(line) == Some(line.len())
    }

    /// Continuation prefix derived from `prefix` by the replace template.
    ///
    /// Returns `None` when the rule has no template or when the first-line
    /// pattern does not cover the whole prefix.
    pub(crate) fn derive_rest(&self, prefix: &str) -> Option<String> {
        let template = self.replace.as_deref()?;
        let caps = self.first.captures(prefix)?;
        let whole = caps.get(0)?;
        if whole.start() != 0 || whole.end() != prefix.len() {
            return None;
        }
        let mut out = String::new();
        caps.expand(template, &mut out);
        Some(out)
    }
}

fn anchored(re: &Regex, line: &str) -> Option<usize> {
    re.find(line).filter(|m| m.start() == 0).map(|m| m.end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_patterns() {
        assert!(matches!(
            PrefixRule::new("", None, None),
            Err(RuleError::EmptyPattern)
        ));
        let err = PrefixRule::new("//", Some("(unclosed"), None).unwrap_err();
        assert!(err.to_string().contains("continuation"));
    }

    #[test]
    fn matches_only_at_line_start() {
        let rule = PrefixRule::repeating(r"[ \t]*//[ \t]*").unwrap();
        assert_eq!(rule.match_first("// text"), Some(3));
        assert_eq!(rule.match_first("text // more"), None);
        assert_eq!(rule.match_rest("  //  x"), Some(6));
    }

    #[test]
    fn whole_line_rest_match() {
        let rule = PrefixRule::repeating(r"[[:space:]]*(>+[[:space:]]*)+").unwrap();
        assert!(rule.rest_matches_whole("> "));
        assert!(rule.rest_matches_whole("> >"));
        assert!(!rule.rest_matches_whole("> quoted"));
    }

    #[test]
    fn numbered_list_template_blanks_marker() {
        let rule = PrefixRule::new(r"([0-9]+\. )", Some(" +"), Some("   ")).unwrap();
        assert_eq!(rule.derive_rest("1. ").as_deref(), Some("   "));
        assert_eq!(rule.derive_rest("1. x"), None);
        // The template is a fixed literal, so wider markers get the same blank.
        assert_eq!(rule.derive_rest("10. ").as_deref(), Some("   "));
    }

    #[test]
    fn wider_markers_need_their_own_rule() {
        let two_digits = PrefixRule::new(r"[0-9]{2}\. ", Some(" +"), Some("    ")).unwrap();
        assert_eq!(two_digits.derive_rest("10. ").as_deref(), Some("    "));
        assert_eq!(two_digits.derive_rest("1. "), None);
    }

    #[test]
    fn template_expands_groups() {
        let rule = PrefixRule::new(
            r"([[:space:]]*)/((\*+[[:space:]]*)+)",
            Some(r"[[:space:]]*(\*+/?[[:space:]]*)+"),
            Some("$1 *"),
        )
        .unwrap();
        assert_eq!(rule.derive_rest("  /* ").as_deref(), Some("   *"));
    }

    #[test]
    fn rule_without_template_has_no_derivation() {
        let rule = PrefixRule::repeating("# ").unwrap();
        assert_eq!(rule.derive_rest("# "), None);
    }
}
