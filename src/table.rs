//! This module defines the `TransitionTable`: a deterministic partial mapping
//! from (state, symbol-under-head) to a transition rule.

use crate::types::{State, TransitionKey, TransitionRule};
use std::collections::HashMap;

/// A deterministic partial transition function.
///
/// Lookups are pure and total over the declared keys only. A missing key is
/// not an error; it is the halting condition of the machine that owns this
/// table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransitionTable {
    rules: HashMap<TransitionKey, TransitionRule>,
}

impl TransitionTable {
    pub fn new(rules: HashMap<TransitionKey, TransitionRule>) -> Self {
        Self { rules }
    }

    /// Finds the rule for the given state and the symbol under the head.
    ///
    /// Returns `None` when no rule is declared for the pair, which the engine
    /// treats as the signal to halt.
    pub fn lookup(&self, state: &State, symbol: char) -> Option<&TransitionRule> {
        self.rules.get(&TransitionKey {
            state: state.label.clone(),
            symbol,
        })
    }

    /// The number of declared rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Direction, StateKind};

    fn sample_table() -> TransitionTable {
        let mut rules = HashMap::new();
        rules.insert(
            TransitionKey::new("q0", 'a'),
            TransitionRule {
                next_state: State::new("q1", StateKind::InProgress),
                write: 'x',
                direction: Direction::Right,
            },
        );
        TransitionTable::new(rules)
    }

    #[test]
    fn test_lookup_declared_key() {
        let table = sample_table();
        let q0 = State::new("q0", StateKind::Initial);

        let rule = table.lookup(&q0, 'a').unwrap();
        assert_eq!(rule.next_state.label, "q1");
        assert_eq!(rule.write, 'x');
        assert_eq!(rule.direction, Direction::Right);
    }

    #[test]
    fn test_lookup_missing_key_is_none() {
        let table = sample_table();
        let q0 = State::new("q0", StateKind::Initial);
        let q1 = State::new("q1", StateKind::InProgress);

        assert!(table.lookup(&q0, 'b').is_none());
        assert!(table.lookup(&q1, 'a').is_none());
    }

    #[test]
    fn test_lookup_keys_by_label_not_kind() {
        let table = sample_table();
        // Kind is irrelevant to the lookup; labels are unique per machine.
        let q0 = State::new("q0", StateKind::InProgress);

        assert!(table.lookup(&q0, 'a').is_some());
    }
}
