//! File helpers for reformatting text files in place.

use std::{fs, path::Path};

use crate::{
    config::CrmConfig,
    process::{ProcessError, Target, clean_text},
};

/// Rewrite a file in place with the targeted paragraphs reformatted.
///
/// # Errors
/// Returns an error if reading or writing the file fails, or if `target`
/// names a line the file does not have.
pub fn rewrite(
    path: &Path,
    config: &CrmConfig,
    target: Target,
    coerce: bool,
) -> Result<(), ProcessError> {
    let text = fs::read_to_string(path)?;
    let fixed = clean_text(&text, config, target, coerce)?;
    if fixed != text {
        fs::write(path, fixed)?;
    }
    Ok(())
}
