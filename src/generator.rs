use crate::{ordinal::Ordinal, term::Term};

/// Steps at which the sequence jumps to a fixed limit ordinal instead of
/// following the range rules. An exact hit always wins.
const LIMIT_TRANSITIONS: [(u64, Term); 4] = [
    (
        1000,
        Term {
            exponent: 1,
            coefficient: 1,
        },
    ),
    (
        2000,
        Term {
            exponent: 1,
            coefficient: 2,
        },
    ),
    (
        3000,
        Term {
            exponent: 3,
            coefficient: 1,
        },
    ),
    (
        10000,
        Term {
            exponent: 10,
            coefficient: 1,
        },
    ),
];

/// Walks the ordinal sequence one step at a time, starting from 0.
///
/// Not reentrant-safe: all calls on one generator must be serialized by the
/// caller. The sequence actor owns exactly one of these.
pub struct SequenceGenerator {
    step: u64,
    current: Ordinal,
}

impl SequenceGenerator {
    pub fn new() -> Self {
        Self {
            step: 0,
            current: Ordinal::zero(),
        }
    }

    /// Advances the sequence by exactly one step and returns the new value.
    pub fn next(&mut self) -> Ordinal {
        self.step += 1;

        if let Some((_, term)) = LIMIT_TRANSITIONS
            .iter()
            .find(|(step, _)| *step == self.step)
        {
            self.current = Ordinal::from_terms(vec![*term]);
            return self.current.clone();
        }

        self.current = match self.step {
            1..=999 => Ordinal::natural(self.step),
            1000..=1999 => Self::limit_plus_offset(Term::new(1, 1), self.step - 1000),
            2000..=2999 => Self::limit_plus_offset(Term::new(1, 2), self.step - 2000),
            _ => self.current.successor(),
        };

        self.current.clone()
    }

    fn limit_plus_offset(base: Term, offset: u64) -> Ordinal {
        if offset == 0 {
            Ordinal::from_terms(vec![base])
        } else {
            Ordinal::from_terms(vec![base, Term::new(0, offset)])
        }
    }

    /// The current value, untouched. Before the first `next` this is 0.
    pub fn current(&self) -> &Ordinal {
        &self.current
    }

    pub fn step(&self) -> u64 {
        self.step
    }
}

impl Default for SequenceGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Advances `generator` until its step counter reaches `step` and returns
    /// the rendering of the value produced at that step.
    fn advance_to(generator: &mut SequenceGenerator, step: u64) -> String {
        assert!(step > generator.step());
        let mut rendered = String::new();
        while generator.step() < step {
            rendered = generator.next().to_string();
        }
        rendered
    }

    #[test]
    fn starts_at_zero() {
        let generator = SequenceGenerator::new();
        assert_eq!(generator.step(), 0);
        assert_eq!(generator.current().to_string(), "0");
    }

    #[test]
    fn counts_through_the_naturals() {
        let mut generator = SequenceGenerator::new();
        assert_eq!(generator.next().to_string(), "1");
        assert_eq!(generator.next().to_string(), "2");
        assert_eq!(advance_to(&mut generator, 999), "999");
    }

    #[test]
    fn reaches_omega_at_step_1000() {
        let mut generator = SequenceGenerator::new();
        assert_eq!(advance_to(&mut generator, 1000), "ω");
        assert_eq!(generator.next().to_string(), "ω+1");
        assert_eq!(advance_to(&mut generator, 1999), "ω+999");
    }

    #[test]
    fn reaches_omega_times_two_at_step_2000() {
        let mut generator = SequenceGenerator::new();
        assert_eq!(advance_to(&mut generator, 2000), "ω⋅2");
        assert_eq!(generator.next().to_string(), "ω⋅2+1");
        assert_eq!(advance_to(&mut generator, 2999), "ω⋅2+999");
    }

    #[test]
    fn reaches_omega_cubed_then_takes_successors() {
        let mut generator = SequenceGenerator::new();
        assert_eq!(advance_to(&mut generator, 3000), "ω^3");
        assert_eq!(generator.next().to_string(), "ω^3+1");
        assert_eq!(generator.next().to_string(), "ω^3+2");
    }

    /// The table always wins: whatever the successor rule accumulated between
    /// steps 3001 and 9999 is discarded when step 10000 hits the table. This
    /// jump is deliberate, inherited behavior.
    #[test]
    fn table_overrides_accumulated_successor_progression() {
        let mut generator = SequenceGenerator::new();
        assert_eq!(advance_to(&mut generator, 9999), "ω^3+6999");
        assert_eq!(generator.next().to_string(), "ω^10");
    }

    #[test]
    fn current_is_idempotent_and_matches_the_last_advance() {
        let mut generator = SequenceGenerator::new();
        let produced = advance_to(&mut generator, 1234);
        assert_eq!(generator.current().to_string(), produced);
        assert_eq!(generator.current(), generator.current());
        assert_eq!(generator.step(), 1234);
    }

    #[test]
    fn sequence_is_strictly_increasing_through_step_10000() {
        let mut generator = SequenceGenerator::new();
        let mut previous = generator.current().clone();
        for step in 1..=10000u64 {
            let next = generator.next();
            assert!(
                next > previous,
                "step {}: {} is not above {}",
                step,
                next,
                previous
            );
            previous = next;
        }
    }
}
