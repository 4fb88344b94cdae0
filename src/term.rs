use serde::{Deserialize, Serialize};

/// A single Cantor Normal Form term ω^exponent ⋅ coefficient.
///
/// A normalized ordinal never stores a term with coefficient 0; the
/// coefficient is unsigned because normalization drops non-positive input.
#[derive(Debug, Hash, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
pub struct Term {
    pub exponent: u32,
    pub coefficient: u64,
}

impl Term {
    pub fn new(exponent: u32, coefficient: u64) -> Self {
        Self {
            exponent,
            coefficient,
        }
    }

    pub fn bump(self) -> Self {
        Term {
            exponent: self.exponent,
            coefficient: self.coefficient + 1,
        }
    }
}

impl PartialOrd for Term {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Term {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.exponent
            .cmp(&other.exponent)
            .then(self.coefficient.cmp(&other.coefficient))
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.exponent, self.coefficient) {
            (0, coefficient) => write!(f, "{}", coefficient),
            (1, 1) => write!(f, "ω"),
            (1, coefficient) => write!(f, "ω⋅{}", coefficient),
            // Only the square gets the superscript glyph. Everything above
            // renders in caret form regardless of magnitude.
            (2, 1) => write!(f, "ω²"),
            (2, coefficient) => write!(f, "ω²⋅{}", coefficient),
            (exponent, 1) => write!(f, "ω^{}", exponent),
            (exponent, coefficient) => write!(f, "ω^{}⋅{}", exponent, coefficient),
        }
    }
}
