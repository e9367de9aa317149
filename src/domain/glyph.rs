//! Completeness glyphs and their icon-library references

use std::fmt;

use serde::Serialize;

/// Icon variant signaling aggregate completeness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Glyph {
    FullCircle,
    HalfCircle,
}

/// Icon reference as understood by the presentation layer: `prefix` + `name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GlyphSpec {
    pub prefix: &'static str,
    pub name: &'static str,
}

const ICON_PREFIX: &str = "fas";

impl Glyph {
    pub fn spec(self) -> GlyphSpec {
        let name = match self {
            Glyph::FullCircle => "circle",
            Glyph::HalfCircle => "adjust",
        };
        GlyphSpec {
            prefix: ICON_PREFIX,
            name,
        }
    }

    /// Single-character form for terminal output.
    pub fn symbol(self) -> &'static str {
        match self {
            Glyph::FullCircle => "●",
            Glyph::HalfCircle => "◐",
        }
    }

    pub fn is_full(self) -> bool {
        matches!(self, Glyph::FullCircle)
    }
}

impl fmt::Display for GlyphSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.prefix, self.name)
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.spec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_full_circle_when_spec_then_fas_circle() {
        assert_eq!(Glyph::FullCircle.spec().to_string(), "fas circle");
    }

    #[test]
    fn given_half_circle_when_spec_then_fas_adjust() {
        let spec = Glyph::HalfCircle.spec();
        assert_eq!(spec.prefix, "fas");
        assert_eq!(spec.name, "adjust");
    }
}
