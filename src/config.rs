//! Per-document reflow settings.

use crate::{
    rules::PrefixRule,
    tabs::{TabPolicy, TabStops},
};

/// Line width used by traditional UNIX mail and news tools.
pub const DEFAULT_LINE_WIDTH: usize = 75;

/// Errors raised when building a [`CrmConfig`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("line width must be at least one column")]
    ZeroLineWidth,

    #[error("tab size must be at least one column")]
    ZeroTabSize,
}

/// Target width, tab policy and prefix rules for one document.
#[derive(Debug)]
pub struct CrmConfig {
    line_width: usize,
    tab_policy: Box<dyn TabPolicy>,
    rules: Vec<PrefixRule>,
}

impl Default for CrmConfig {
    fn default() -> Self {
        Self {
            line_width: DEFAULT_LINE_WIDTH,
            tab_policy: Box::new(TabStops::default()),
            rules: Vec::new(),
        }
    }
}

impl CrmConfig {
    /// Configuration wrapping at `line_width` columns with 8-column tab stops
    /// and no prefix rules beyond leading whitespace.
    ///
    /// # Errors
    /// Returns [`ConfigError::ZeroLineWidth`] if `line_width` is zero.
    pub fn new(line_width: usize) -> Result<Self, ConfigError> {
        if line_width == 0 {
            return Err(ConfigError::ZeroLineWidth);
        }
        Ok(Self {
            line_width,
            ..Self::default()
        })
    }

    /// Keep literal tabs, with stops every `size` columns.
    ///
    /// # Errors
    /// Returns [`ConfigError::ZeroTabSize`] if `size` is zero.
    pub fn with_tab_size(self, size: usize) -> Result<Self, ConfigError> {
        self.with_tab_policy(TabStops { size })
    }

    /// Replace the tab policy.
    ///
    /// # Errors
    /// Returns [`ConfigError::ZeroTabSize`] if the policy's tab size is zero.
    pub fn with_tab_policy(mut self, policy: impl TabPolicy + 'static) -> Result<Self, ConfigError> {
        if policy.tab_size() == 0 {
            return Err(ConfigError::ZeroTabSize);
        }
        self.tab_policy = Box::new(policy);
        Ok(self)
    }

    #[must_use]
    pub fn with_rules(mut self, rules: Vec<PrefixRule>) -> Self {
        self.rules = rules;
        self
    }

    #[must_use]
    pub fn with_rule(mut self, rule: PrefixRule) -> Self {
        self.rules.push(rule);
        self
    }

    #[must_use]
    pub fn line_width(&self) -> usize { self.line_width }

    #[must_use]
    pub fn tab_policy(&self) -> &dyn TabPolicy { self.tab_policy.as_ref() }

    #[must_use]
    pub fn rules(&self) -> &[PrefixRule] { &self.rules }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabs::ExpandTabs;

    #[test]
    fn defaults_follow_unix_conventions() {
        let config = CrmConfig::default();
        assert_eq!(config.line_width(), 75);
        assert_eq!(config.tab_policy().tab_size(), 8);
        assert!(config.rules().is_empty());
    }

    #[test]
    fn rejects_zero_sizes() {
        assert_eq!(CrmConfig::new(0).unwrap_err(), ConfigError::ZeroLineWidth);
        let err = CrmConfig::new(40).unwrap().with_tab_size(0).unwrap_err();
        assert_eq!(err, ConfigError::ZeroTabSize);
        let err = CrmConfig::default()
            .with_tab_policy(ExpandTabs { size: 0 })
            .unwrap_err();
        assert_eq!(err, ConfigError::ZeroTabSize);
    }

    #[test]
    fn rules_accumulate() {
        let config = CrmConfig::default()
            .with_rule(PrefixRule::repeating("// ").unwrap())
            .with_rule(PrefixRule::repeating("# ").unwrap());
        assert_eq!(config.rules().len(), 2);
        assert_eq!(config.rules()[1].first_pattern(), "# ");
    }
}
