//! Character styles carried alongside the text.
//!
//! The reflow engine never inspects a style. It only needs to derive the
//! style of characters it invents: newlines and prefixes get the neighbouring
//! word's style with formatting cleared, and whitespace between two words gets
//! a blend of the styles on either side.

use std::fmt::Debug;

/// Operations the reflow engine needs from a character style.
pub trait Style: Clone + PartialEq + Debug {
    /// Return the same face with every decoration removed.
    #[must_use]
    fn clear_formatting(&self) -> Self;

    /// Style for whitespace inserted between a character styled `prev` and one
    /// styled `next`.
    #[must_use]
    fn blend_for_whitespace(prev: &Self, next: &Self) -> Self;
}

/// Plain text has exactly one style.
impl Style for () {
    fn clear_formatting(&self) -> Self {}

    fn blend_for_whitespace((): &Self, (): &Self) -> Self {}
}

/// Decorations that can be toggled independently of the face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct FontStyle {
    pub bold: bool,
    pub italic: bool,
    /// Number of underlines (0 = none, 2 = double underline).
    pub underline: u8,
    pub strike: bool,
    /// Packed `0xRRGGBB`; black by default.
    pub color: u32,
}

/// A font face plus its decorations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Font {
    pub family: String,
    pub size: u16,
    pub style: FontStyle,
}

impl Font {
    /// Create an undecorated font.
    #[must_use]
    pub fn new(family: impl Into<String>, size: u16) -> Self {
        Self {
            family: family.into(),
            size,
            style: FontStyle::default(),
        }
    }

    /// Replace the decorations, keeping the face.
    #[must_use]
    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    fn without_underline(&self) -> Self {
        let mut f = self.clone();
        f.style.underline = 0;
        f
    }
}

impl Default for Font {
    fn default() -> Self { Self::new("Courier", 12) }
}

impl Style for Font {
    fn clear_formatting(&self) -> Self {
        Self {
            family: self.family.clone(),
            size: self.size,
            style: FontStyle::default(),
        }
    }

    /// Only underline and strike are visible on whitespace, so only those
    /// decide. A decoration is kept across the gap when both neighbours share
    /// it; otherwise the plainer neighbour wins.
    fn blend_for_whitespace(prev: &Self, next: &Self) -> Self {
        let (p, n) = (&prev.style, &next.style);
        let underline_match = p.underline == n.underline;
        let strike_match = p.strike == n.strike;

        match (underline_match, strike_match) {
            (false, false) if p.underline == 0 && !p.strike => prev.clone(),
            (false, false) if n.underline == 0 && !n.strike => next.clone(),
            (false, false) => {
                let mut f = next.without_underline();
                f.style.strike = false;
                f
            }
            (false, true) if p.underline == 0 => prev.clone(),
            (false, true) if n.underline == 0 => next.clone(),
            (false, true) => next.without_underline(),
            (true, false) if !p.strike => prev.clone(),
            _ => next.clone(),
        }
    }
}
