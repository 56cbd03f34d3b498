//! This module defines the `MachineBuilder`, which validates a state set,
//! alphabets, and transition rules, and assembles a ready-to-run
//! [`ExecutionEngine`].

use crate::engine::ExecutionEngine;
use crate::table::TransitionTable;
use crate::tape::Tape;
use crate::types::{
    Direction, MachineError, State, StateKind, TapeHead, TransitionKey, TransitionRule,
    DEFAULT_BLANK_SYMBOL, DEFAULT_TAPE_CAPACITY,
};
use std::collections::{BTreeSet, HashMap};

/// An unresolved rule as declared: state labels instead of states.
#[derive(Debug, Clone)]
struct RuleSpec {
    from: String,
    read: char,
    to: String,
    write: char,
    direction: Direction,
}

/// Builds and validates machine configurations.
///
/// The builder is the sole constructor of engines and performs every
/// construction-time check; once `build` succeeds, nothing during execution
/// can fail except the fixed-tape overrun policy. A builder can be kept
/// around and `build` called again to reset: each call produces a completely
/// fresh engine.
#[derive(Debug, Clone)]
pub struct MachineBuilder {
    states: Vec<State>,
    input_alphabet: BTreeSet<char>,
    tape_alphabet: BTreeSet<char>,
    rules: Vec<RuleSpec>,
    blank: char,
    tape_capacity: usize,
}

impl MachineBuilder {
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            input_alphabet: BTreeSet::new(),
            tape_alphabet: BTreeSet::new(),
            rules: Vec::new(),
            blank: DEFAULT_BLANK_SYMBOL,
            tape_capacity: DEFAULT_TAPE_CAPACITY,
        }
    }

    /// Declares a state. Labels must be unique across the machine.
    pub fn state(&mut self, label: impl Into<String>, kind: StateKind) -> &mut Self {
        self.states.push(State::new(label, kind));
        self
    }

    /// Adds symbols to the input alphabet.
    pub fn input_symbols(&mut self, symbols: impl IntoIterator<Item = char>) -> &mut Self {
        self.input_alphabet.extend(symbols);
        self
    }

    /// Adds working symbols to the tape alphabet. The blank symbol and the
    /// input alphabet are unioned in automatically at build time.
    pub fn tape_symbols(&mut self, symbols: impl IntoIterator<Item = char>) -> &mut Self {
        self.tape_alphabet.extend(symbols);
        self
    }

    /// Declares a transition rule by state label.
    pub fn rule(
        &mut self,
        from: &str,
        read: char,
        to: &str,
        write: char,
        direction: Direction,
    ) -> &mut Self {
        self.rules.push(RuleSpec {
            from: from.to_string(),
            read,
            to: to.to_string(),
            write,
            direction,
        });
        self
    }

    /// Shorthand for a rule that writes back the symbol it read.
    pub fn copy(&mut self, from: &str, read: char, to: &str, direction: Direction) -> &mut Self {
        self.rule(from, read, to, read, direction)
    }

    /// Overrides the blank symbol (default [`DEFAULT_BLANK_SYMBOL`]).
    pub fn blank(&mut self, blank: char) -> &mut Self {
        self.blank = blank;
        self
    }

    /// Overrides the tape capacity (default [`DEFAULT_TAPE_CAPACITY`]).
    /// The head starts at the middle of the tape.
    pub fn tape_capacity(&mut self, capacity: usize) -> &mut Self {
        self.tape_capacity = capacity;
        self
    }

    /// Validates the configuration and assembles an engine.
    ///
    /// On success the engine is in the ingesting phase, positioned at the
    /// unique initial state, with an all-blank tape and the head at the
    /// starting offset.
    pub fn build(&self) -> Result<ExecutionEngine, MachineError> {
        if self.states.len() < 2 {
            return Err(MachineError::TooFewStates(self.states.len()));
        }

        let mut by_label: HashMap<&str, &State> = HashMap::new();
        for state in &self.states {
            if by_label.insert(&state.label, state).is_some() {
                return Err(MachineError::DuplicateState(state.label.clone()));
            }
        }

        let mut initials = self.states.iter().filter(|s| s.is_initial());
        let initial = initials.next().ok_or(MachineError::NoInitialState)?;
        if initials.next().is_some() {
            return Err(MachineError::MultipleInitialStates);
        }

        if self.input_alphabet.is_empty() {
            return Err(MachineError::EmptyInputAlphabet);
        }
        if self.input_alphabet.contains(&self.blank) {
            return Err(MachineError::BlankInInputAlphabet(self.blank));
        }
        if self.tape_alphabet.is_empty() {
            return Err(MachineError::EmptyTapeAlphabet);
        }

        // Effective tape alphabet: {blank} ∪ declared ∪ input.
        let mut tape_alphabet = self.tape_alphabet.clone();
        tape_alphabet.insert(self.blank);
        tape_alphabet.extend(&self.input_alphabet);

        let mut rules = HashMap::new();
        for spec in &self.rules {
            if !by_label.contains_key(spec.from.as_str()) {
                return Err(MachineError::UndefinedState(spec.from.clone()));
            }
            let next_state = *by_label
                .get(spec.to.as_str())
                .ok_or_else(|| MachineError::UndefinedState(spec.to.clone()))?;
            for symbol in [spec.read, spec.write] {
                if !tape_alphabet.contains(&symbol) {
                    return Err(MachineError::SymbolOutsideTapeAlphabet {
                        state: spec.from.clone(),
                        symbol,
                    });
                }
            }

            let key = TransitionKey::new(spec.from.clone(), spec.read);
            let rule = TransitionRule {
                next_state: next_state.clone(),
                write: spec.write,
                direction: spec.direction,
            };
            if rules.insert(key, rule).is_some() {
                return Err(MachineError::DuplicateRule {
                    state: spec.from.clone(),
                    symbol: spec.read,
                });
            }
        }

        let start = self.tape_capacity / 2;
        let head = TapeHead {
            symbol: self.blank,
            position: start,
            previous_position: start,
            direction: Direction::Stay,
        };

        Ok(ExecutionEngine::new(
            TransitionTable::new(rules),
            Tape::new(self.tape_capacity, self.blank),
            tape_alphabet,
            initial.clone(),
            head,
        ))
    }
}

impl Default for MachineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Phase;

    fn minimal_builder() -> MachineBuilder {
        let mut b = MachineBuilder::new();
        b.state("q0", StateKind::Initial);
        b.state("q1", StateKind::Accept);
        b.input_symbols(['a']);
        b.tape_symbols(['x']);
        b.rule("q0", 'a', "q1", 'x', Direction::Right);
        b
    }

    #[test]
    fn test_build_succeeds_for_minimal_machine() {
        let engine = minimal_builder().build().unwrap();

        assert_eq!(engine.phase(), Phase::Ingesting);
        assert!(engine.state().is_initial());
        assert_eq!(engine.state().label, "q0");
        assert_eq!(engine.tape().len(), DEFAULT_TAPE_CAPACITY);
        assert!(engine
            .tape()
            .symbols()
            .iter()
            .all(|&c| c == DEFAULT_BLANK_SYMBOL));

        let head = engine.head();
        assert_eq!(head.position, DEFAULT_TAPE_CAPACITY / 2);
        assert_eq!(head.previous_position, head.position);
        assert_eq!(head.symbol, DEFAULT_BLANK_SYMBOL);
        assert!(engine.events().is_empty());
    }

    #[test]
    fn test_build_fails_with_too_few_states() {
        let mut b = MachineBuilder::new();
        b.state("only", StateKind::Initial);
        b.input_symbols(['a']);
        b.tape_symbols(['x']);

        assert_eq!(b.build().unwrap_err(), MachineError::TooFewStates(1));
    }

    #[test]
    fn test_build_fails_with_duplicate_labels() {
        let mut b = minimal_builder();
        b.state("q0", StateKind::InProgress);

        assert_eq!(
            b.build().unwrap_err(),
            MachineError::DuplicateState("q0".to_string())
        );
    }

    #[test]
    fn test_build_fails_without_initial_state() {
        let mut b = MachineBuilder::new();
        b.state("q0", StateKind::InProgress);
        b.state("q1", StateKind::Accept);
        b.input_symbols(['a']);
        b.tape_symbols(['x']);

        assert_eq!(b.build().unwrap_err(), MachineError::NoInitialState);
    }

    #[test]
    fn test_build_fails_with_two_initial_states() {
        let mut b = minimal_builder();
        b.state("q2", StateKind::Initial);

        assert_eq!(b.build().unwrap_err(), MachineError::MultipleInitialStates);
    }

    #[test]
    fn test_build_fails_with_empty_input_alphabet() {
        let mut b = MachineBuilder::new();
        b.state("q0", StateKind::Initial);
        b.state("q1", StateKind::Accept);
        b.tape_symbols(['x']);

        assert_eq!(b.build().unwrap_err(), MachineError::EmptyInputAlphabet);
    }

    #[test]
    fn test_build_fails_with_blank_in_input_alphabet() {
        let mut b = minimal_builder();
        b.input_symbols([DEFAULT_BLANK_SYMBOL]);

        assert_eq!(
            b.build().unwrap_err(),
            MachineError::BlankInInputAlphabet(DEFAULT_BLANK_SYMBOL)
        );
    }

    #[test]
    fn test_build_fails_with_empty_tape_alphabet() {
        let mut b = MachineBuilder::new();
        b.state("q0", StateKind::Initial);
        b.state("q1", StateKind::Accept);
        b.input_symbols(['a']);

        assert_eq!(b.build().unwrap_err(), MachineError::EmptyTapeAlphabet);
    }

    #[test]
    fn test_build_fails_when_rule_references_undeclared_state() {
        let mut b = minimal_builder();
        b.rule("q0", 'x', "ghost", 'x', Direction::Stay);

        assert_eq!(
            b.build().unwrap_err(),
            MachineError::UndefinedState("ghost".to_string())
        );
    }

    #[test]
    fn test_build_fails_when_rule_uses_foreign_symbol() {
        let mut b = minimal_builder();
        b.rule("q1", '?', "q0", '?', Direction::Stay);

        assert_eq!(
            b.build().unwrap_err(),
            MachineError::SymbolOutsideTapeAlphabet {
                state: "q1".to_string(),
                symbol: '?',
            }
        );
    }

    #[test]
    fn test_build_fails_on_duplicate_rule_key() {
        let mut b = minimal_builder();
        b.rule("q0", 'a', "q0", 'a', Direction::Stay);

        assert_eq!(
            b.build().unwrap_err(),
            MachineError::DuplicateRule {
                state: "q0".to_string(),
                symbol: 'a',
            }
        );
    }

    #[test]
    fn test_custom_blank_and_capacity() {
        let mut b = minimal_builder();
        b.blank('-');
        b.tape_capacity(8);
        let engine = b.build().unwrap();

        assert_eq!(engine.blank(), '-');
        assert_eq!(engine.tape().len(), 8);
        assert_eq!(engine.head().position, 4);
        assert!(engine.tape().symbols().iter().all(|&c| c == '-'));
    }

    #[test]
    fn test_input_alphabet_is_part_of_tape_alphabet() {
        // Rules may read and write input symbols without declaring them as
        // working symbols: the effective alphabet unions them in.
        let mut b = MachineBuilder::new();
        b.state("q0", StateKind::Initial);
        b.state("q1", StateKind::Accept);
        b.input_symbols(['a']);
        b.tape_symbols(['x']);
        b.copy("q0", 'a', "q1", Direction::Right);

        assert!(b.build().is_ok());
    }
}
