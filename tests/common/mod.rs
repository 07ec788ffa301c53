//! Utility helpers shared across integration tests.
#![allow(dead_code, unused_macros, reason = "each test crate uses a subset")]

use std::{fs, path::Path};

/// Join string slices into newline-terminated text.
///
/// Keeps multi-line inputs readable in tests without escaped `\n` runs.
macro_rules! text {
    ($($line:expr),* $(,)?) => {{
        let mut out = String::new();
        $(
            out.push_str($line);
            out.push('\n');
        )*
        out
    }};
}

/// Write `contents` to `name` inside `dir` and return the full path.
pub fn write_file(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("failed to write test file");
    path
}

/// Assert every line is at most `width` columns or holds a single word.
pub fn assert_within_width(text: &str, width: usize) {
    for line in text.lines() {
        assert!(
            line.chars().count() <= width || line.split_whitespace().count() == 1,
            "line {line:?} is wider than {width} columns"
        );
    }
}
