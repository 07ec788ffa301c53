//! Built-in rule sets for common comment and quoting conventions.

use super::PrefixRule;

/// `(first, rest, replace)` triples.
type RawRule = (&'static str, &'static str, &'static str);

const C_BLOCK: RawRule = (
    r"([[:space:]]*)/((\*+[[:space:]]*)+)",
    r"[[:space:]]*(\*+/?[[:space:]]*)+",
    "$1 * ",
);
const C_STAR: RawRule = (
    r"[[:space:]]*(\*+[[:space:]]*)+",
    r"[[:space:]]*(\*+/?[[:space:]]*)+",
    "$0",
);
const SLASHES: RawRule = (r"[[:space:]]*//[[:space:]]*", r"[[:space:]]*//[[:space:]]*", "$0");
const DASHES: RawRule = (r"[[:space:]]*--[[:space:]]*", r"[[:space:]]*--[[:space:]]*", "$0");
const HASHES: RawRule = (
    r"[[:space:]]*(#+[[:space:]]*)+",
    r"[[:space:]]*(#+[[:space:]]*)+",
    "$0",
);

const PRESETS: &[(&str, &[RawRule])] = &[
    (
        "ASP",
        &[(r"[[:space:]]*('+[[:space:]]*)+", r"[[:space:]]*('+[[:space:]]*)+", "$0")],
    ),
    (
        "Beta",
        &[
            (
                r"([[:space:]]*)\(((\*+[[:space:]]*)+)",
                r"[[:space:]]*(\*+\)?[[:space:]]*)+",
                "$1 $2",
            ),
            (
                r"[[:space:]]*(\*+[[:space:]]*)+",
                r"[[:space:]]*(\*+\)?[[:space:]]*)+",
                "$0",
            ),
        ],
    ),
    ("C", &[C_BLOCK, C_STAR]),
    ("C++", &[C_BLOCK, C_STAR, SLASHES]),
    (
        "C#",
        &[
            C_BLOCK,
            C_STAR,
            (r"[[:space:]]*///?[[:space:]]*", r"[[:space:]]*///?[[:space:]]*", "$0"),
        ],
    ),
    ("Eiffel", &[DASHES]),
    (
        "E-mail",
        &[(r"[[:space:]]*(>+[[:space:]]*)+", r"[[:space:]]*(>+[[:space:]]*)+", "$0")],
    ),
    ("FORTRAN", &[("[Cc][[:space:]]*", "[Cc][[:space:]]*", "$0")]),
    (
        "INI",
        &[(r"[[:space:]]*(;+[[:space:]]*)+", r"[[:space:]]*(;+[[:space:]]*)+", "$0")],
    ),
    ("Java", &[C_BLOCK, C_STAR, SLASHES]),
    ("JSP", &[C_BLOCK, C_STAR, SLASHES]),
    (
        "Lisp",
        &[(r"[[:space:]]*;(;+[[:space:]]*)+", r"[[:space:]]*;(;+[[:space:]]*)+", "$0")],
    ),
    ("Lua", &[DASHES]),
    (
        "Outline",
        &[
            (r"(\t*)\*(\t*)", "[[:space:]]*", "$1$2"),
            (r"([[:space:]]*)\*([[:space:]]*)", "[[:space:]]*", "$1 $2"),
        ],
    ),
    ("PHP", &[C_BLOCK, C_STAR, SLASHES, HASHES]),
    ("SQL", &[C_BLOCK, C_STAR, DASHES, HASHES]),
    ("UNIX script", &[HASHES]),
    ("Vera", &[SLASHES]),
];

/// Names of the built-in rule sets, in display order.
pub fn names() -> impl Iterator<Item = &'static str> { PRESETS.iter().map(|(name, _)| *name) }

/// Compile the built-in rule set called `name` (case-insensitive).
///
/// # Panics
/// Panics if a built-in pattern fails to compile.
#[must_use]
pub fn rule_set(name: &str) -> Option<Vec<PrefixRule>> {
    let (_, raw) = PRESETS
        .iter()
        .find(|(preset, _)| preset.eq_ignore_ascii_case(name))?;
    Some(
        raw.iter()
            .map(|(first, rest, replace)| {
                PrefixRule::new(first, Some(rest), Some(replace))
                    .expect("built-in rule should compile")
            })
            .collect(),
    )
}
