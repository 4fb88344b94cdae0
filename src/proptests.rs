//! Property-based tests for the Cantor Normal Form invariants.

#[cfg(test)]
mod tests {
    use proptest::collection::btree_map;
    use proptest::prelude::*;

    use crate::{ordinal::Ordinal, term::Term};

    // Unique exponents, positive coefficients: always a valid term list.
    fn valid_terms() -> impl Strategy<Value = Vec<(u32, i64)>> {
        btree_map(0u32..8, 1i64..100, 0..5).prop_map(|terms| terms.into_iter().collect())
    }

    fn ordinal() -> impl Strategy<Value = Ordinal> {
        valid_terms().prop_map(|terms| Ordinal::new(terms).unwrap())
    }

    fn non_constant_terms(ordinal: &Ordinal) -> Vec<Term> {
        ordinal
            .terms()
            .iter()
            .filter(|term| term.exponent > 0)
            .copied()
            .collect()
    }

    fn constant_part(ordinal: &Ordinal) -> u64 {
        ordinal
            .terms()
            .last()
            .filter(|term| term.exponent == 0)
            .map(|term| term.coefficient)
            .unwrap_or(0)
    }

    proptest! {
        #[test]
        fn normalization_keeps_exactly_the_positive_terms(
            terms in btree_map(0u32..8, -50i64..50, 0..6)
        ) {
            let positive = terms.values().filter(|coefficient| **coefficient > 0).count();
            let ordinal = Ordinal::new(terms).unwrap();
            prop_assert_eq!(ordinal.terms().len(), positive);
            prop_assert!(ordinal
                .terms()
                .windows(2)
                .all(|pair| pair[0].exponent > pair[1].exponent));
            prop_assert!(ordinal.terms().iter().all(|term| term.coefficient > 0));
        }

        #[test]
        fn successor_is_strictly_larger(ordinal in ordinal()) {
            prop_assert!(ordinal.successor() > ordinal);
        }

        #[test]
        fn successor_touches_only_the_constant_term(ordinal in ordinal()) {
            let next = ordinal.successor();
            prop_assert_eq!(non_constant_terms(&ordinal), non_constant_terms(&next));
            prop_assert_eq!(constant_part(&next), constant_part(&ordinal) + 1);
        }

        #[test]
        fn limit_successor_bumps_the_leading_term(ordinal in ordinal()) {
            let next = ordinal.limit_successor();
            if ordinal.is_zero() {
                prop_assert_eq!(next, Ordinal::omega());
            } else {
                prop_assert_eq!(next.terms().len(), ordinal.terms().len());
                prop_assert_eq!(next.terms()[0], ordinal.terms()[0].bump());
                prop_assert_eq!(&next.terms()[1..], &ordinal.terms()[1..]);
            }
        }

        #[test]
        fn renders_zero_exactly_when_empty(ordinal in ordinal()) {
            prop_assert_eq!(ordinal.to_string() == "0", ordinal.is_zero());
        }
    }
}
