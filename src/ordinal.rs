use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::term::Term;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrdinalError {
    #[error("duplicate exponent {0} in term list")]
    DuplicateExponent(u32),
}

/// An ordinal in Cantor Normal Form: Σ ω^e_i ⋅ c_i with strictly descending
/// exponents and positive coefficients. The empty term list is 0.
///
/// Values are immutable once constructed; `successor` and `limit_successor`
/// return new ordinals.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Ordinal {
    terms: Vec<Term>,
}

impl Ordinal {
    /// Builds an ordinal from raw `(exponent, coefficient)` pairs.
    ///
    /// Terms with coefficient ≤ 0 are dropped and the rest are sorted by
    /// descending exponent. Two kept terms sharing an exponent are rejected
    /// rather than merged.
    pub fn new(terms: impl IntoIterator<Item = (u32, i64)>) -> Result<Self, OrdinalError> {
        let mut kept = terms
            .into_iter()
            .filter(|(_, coefficient)| *coefficient > 0)
            .map(|(exponent, coefficient)| Term::new(exponent, coefficient as u64))
            .collect::<Vec<_>>();

        kept.sort_by(|a, b| b.exponent.cmp(&a.exponent));

        for pair in kept.windows(2) {
            if pair[0].exponent == pair[1].exponent {
                return Err(OrdinalError::DuplicateExponent(pair[0].exponent));
            }
        }

        Ok(Self { terms: kept })
    }

    /// Internal constructor for term lists that already carry positive
    /// coefficients and unique exponents.
    pub(crate) fn from_terms(mut terms: Vec<Term>) -> Self {
        terms.sort_by(|a, b| b.exponent.cmp(&a.exponent));
        Self { terms }
    }

    pub fn zero() -> Self {
        Self { terms: Vec::new() }
    }

    pub fn omega() -> Self {
        Self {
            terms: vec![Term::new(1, 1)],
        }
    }

    /// The finite ordinal n.
    pub fn natural(n: u64) -> Self {
        if n == 0 {
            Self::zero()
        } else {
            Self {
                terms: vec![Term::new(0, n)],
            }
        }
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// The ordinal immediately following this one.
    ///
    /// A limit ordinal (or 0) gains a constant term `(0, 1)`; otherwise the
    /// existing constant term's coefficient goes up by one.
    pub fn successor(&self) -> Self {
        let mut terms = self.terms.clone();
        match terms.last_mut() {
            Some(last) if last.exponent == 0 => *last = last.bump(),
            _ => terms.push(Term::new(0, 1)),
        }
        Self::from_terms(terms)
    }

    /// The next limit-style ordinal: the leading term's coefficient goes up
    /// by one, lower terms are untouched. From 0 this is ω.
    pub fn limit_successor(&self) -> Self {
        let mut terms = self.terms.clone();
        match terms.first_mut() {
            Some(leading) => *leading = leading.bump(),
            None => return Self::omega(),
        }
        Self::from_terms(terms)
    }
}

impl PartialOrd for Ordinal {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ordinal {
    /// Standard CNF order: compare termwise from the most significant term,
    /// then the ordinal with remaining terms is the larger one.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        for (a, b) in self.terms.iter().zip(other.terms.iter()) {
            match a.cmp(b) {
                std::cmp::Ordering::Equal => continue,
                ord => return ord,
            }
        }
        self.terms.len().cmp(&other.terms.len())
    }
}

impl std::fmt::Display for Ordinal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, "+")?;
            }
            write!(f, "{}", term)?;
        }
        Ok(())
    }
}
