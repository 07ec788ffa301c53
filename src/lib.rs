//! Clean Right Margin paragraph reflow for styled text.
//!
//! The crate re-wraps the paragraph around a caret to a fixed column width.
//! Structural line prefixes such as comment leaders, quote markers and list
//! numbers are recognised by configurable [`PrefixRule`]s, stripped before
//! wrapping and written back afterwards, with continuation lines getting a
//! prefix derived from the first line's. A run-length encoded style array is
//! kept in step with every character, and the caret is moved to the matching
//! spot in the new text.
//!
//! ```
//! use crmfix::{CrmConfig, PrefixRule, StyledText};
//!
//! let config = CrmConfig::new(20)
//!     .unwrap()
//!     .with_rule(PrefixRule::repeating("// ").unwrap());
//! let mut doc = StyledText::plain("// one two\n// three four five six\n");
//! doc.apply_clean_right_margin(&config, false);
//! assert_eq!(doc.text(), "// one two three\n// four five six\n");
//! ```

pub mod config;
pub mod crm;
mod edit;
pub mod io;
pub mod process;
pub mod rules;
pub mod runs;
pub mod style;
pub mod tabs;
pub mod text;

pub use config::{ConfigError, CrmConfig, DEFAULT_LINE_WIDTH};
pub use crm::{CleanRightMargin, CrmResult, Paragraph};
pub use io::rewrite;
pub use process::{ProcessError, Target, clean_text};
pub use rules::{PrefixRule, RuleError, presets};
pub use runs::RunArray;
pub use style::{Font, FontStyle, Style};
pub use tabs::{DEFAULT_TAB_SIZE, ExpandTabs, LinePrefix, TabPolicy, TabStops};
pub use text::StyledText;
