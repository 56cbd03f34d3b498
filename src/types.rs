//! This module defines the core data structures and types used throughout the
//! execution engine, including states, transition rules, tape events, machine
//! output, and error types.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The distinguished blank symbol used to fill the tape.
///
/// The blank is never a member of the input alphabet; during ingestion it
/// doubles as the end-of-input marker injected by
/// [`submit_end_of_input`](crate::engine::ExecutionEngine::submit_end_of_input).
pub const DEFAULT_BLANK_SYMBOL: char = 'ϵ';
/// The default number of tape cells allocated at construction.
pub const DEFAULT_TAPE_CAPACITY: usize = 100;

/// Classifies a machine state.
///
/// `Reject` is reserved for states that are explicit non-accepting terminals;
/// ordinary working states carry `InProgress`. A run that halts in any
/// non-`Accept` state is rejected, whatever the kind of that state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StateKind {
    /// The unique starting state of a machine.
    Initial,
    /// A working state passed through mid-computation.
    InProgress,
    /// A terminal state whose reachability means the input is accepted.
    Accept,
    /// A terminal state that explicitly rejects the input.
    Reject,
}

/// A logical state of the automaton, unique by label within a machine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct State {
    /// The state's unique label, e.g. `"q0"`.
    pub label: String,
    /// What reaching this state means.
    pub kind: StateKind,
}

impl State {
    pub fn new(label: impl Into<String>, kind: StateKind) -> Self {
        Self {
            label: label.into(),
            kind,
        }
    }

    /// Whether this is the machine's starting state.
    pub fn is_initial(&self) -> bool {
        self.kind == StateKind::Initial
    }

    /// Whether halting here accepts the input.
    pub fn is_accept(&self) -> bool {
        self.kind == StateKind::Accept
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Represents the possible directions a tape head can move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Move the head one position to the left.
    Left,
    /// Move the head one position to the right.
    Right,
    /// Keep the head in the same position.
    Stay,
}

impl Direction {
    /// The position delta this direction applies to the head.
    pub fn delta(self) -> isize {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
            Direction::Stay => 0,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Direction::Left => 'L',
            Direction::Right => 'R',
            Direction::Stay => 'S',
        };
        write!(f, "{c}")
    }
}

/// The lookup key into a transition table: a state label and the symbol under
/// the head. States are unique by label, so the label alone identifies one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransitionKey {
    pub state: String,
    pub symbol: char,
}

impl TransitionKey {
    pub fn new(state: impl Into<String>, symbol: char) -> Self {
        Self {
            state: state.into(),
            symbol,
        }
    }
}

/// The outcome of one transition: the state to enter, the symbol to write at
/// the head's position, and the direction the head moves afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRule {
    pub next_state: State,
    pub write: char,
    pub direction: Direction,
}

/// The engine's read/write cursor into the tape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TapeHead {
    /// The symbol currently under the head.
    pub symbol: char,
    /// The head's current cell index.
    pub position: usize,
    /// The cell index before the last move.
    pub previous_position: usize,
    /// The direction of the last move.
    pub direction: Direction,
}

/// An immutable record of one executed step.
///
/// The ordered sequence of these events is the replayable history of a run and
/// the explanation trail for its accept/reject classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TapeEvent {
    /// The symbol the step consumed (externally supplied while ingesting, read
    /// from under the head while autonomous).
    pub consumed: char,
    /// The symbol written at the head's position.
    pub written: char,
    /// The direction the head moved.
    pub direction: Direction,
    /// The head as it was before the step executed.
    pub head_before: TapeHead,
    /// The state the step transitioned from.
    pub from_state: State,
    /// The state the step transitioned to.
    pub to_state: State,
}

impl fmt::Display for TapeEvent {
    /// Renders the transition in the conventional notation, e.g.
    /// `(q0, r) → (q1 | r, R)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) → ({} | {}, {})",
            self.from_state, self.consumed, self.to_state, self.written, self.direction
        )
    }
}

/// The engine-level execution phase, distinct from the automaton's own states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Steps are driven by externally supplied characters.
    Ingesting,
    /// Steps are self-driven from whatever is under the head.
    Autonomous,
    /// No transition applies; the run is finished.
    Halted,
}

/// The result of offering one character to an ingesting engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ingest {
    /// A rule matched; the character was processed and recorded.
    Accepted,
    /// No rule matched (or the engine is past ingestion); nothing was written.
    Rejected,
}

/// The outcome of a single autonomous step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// A rule matched and was applied.
    Stepped,
    /// No rule matches the current (state, symbol) pair. This is the normal
    /// end of a computation, not a failure.
    Halted,
}

/// The outcome of driving an engine to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The machine halted; the snapshot taken at that instant.
    Halted(MachineOutput),
    /// The cancellation token was triggered between steps.
    Cancelled,
}

/// A snapshot produced when the machine halts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineOutput {
    /// The original input, reconstructed from the ingestion stream.
    pub input: String,
    /// The final tape content, filtered to meaningful (non-blank, in-alphabet)
    /// symbols in tape order.
    pub tape: String,
    /// The final logical state.
    pub state: State,
}

impl MachineOutput {
    /// Whether the run accepted the input, read directly off the final state.
    pub fn is_accepted(&self) -> bool {
        self.state.is_accept()
    }

    pub fn verdict(&self) -> &'static str {
        if self.is_accepted() {
            "ACCEPTED"
        } else {
            "REJECTED"
        }
    }
}

/// Represents the errors that can occur while building or driving a machine.
///
/// Halting is deliberately absent here: a missing transition rule is the
/// designed way for a computation to finish and is reported through
/// [`StepOutcome::Halted`], never as an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MachineError {
    /// A machine needs at least two states.
    #[error("a machine requires at least 2 states, got {0}")]
    TooFewStates(usize),
    /// Two declared states share a label.
    #[error("duplicate state label: {0}")]
    DuplicateState(String),
    /// No declared state has the `Initial` kind.
    #[error("no initial state declared")]
    NoInitialState,
    /// More than one declared state has the `Initial` kind.
    #[error("more than one initial state declared")]
    MultipleInitialStates,
    /// The input alphabet is empty.
    #[error("a machine requires at least 1 input symbol")]
    EmptyInputAlphabet,
    /// The blank symbol may not appear in the input alphabet.
    #[error("the input alphabet must not contain the blank symbol {0:?}")]
    BlankInInputAlphabet(char),
    /// The declared tape alphabet is empty.
    #[error("a machine requires at least 1 tape symbol")]
    EmptyTapeAlphabet,
    /// A rule references a state that was never declared.
    #[error("rule references undeclared state: {0}")]
    UndefinedState(String),
    /// A rule reads or writes a symbol outside the effective tape alphabet.
    #[error("rule for state {state} uses symbol {symbol:?} outside the tape alphabet")]
    SymbolOutsideTapeAlphabet { state: String, symbol: char },
    /// Two rules share the same (state, symbol) key, which would make the
    /// machine non-deterministic.
    #[error("duplicate rule for state {state} and symbol {symbol:?}")]
    DuplicateRule { state: String, symbol: char },
    /// A head move would leave the tape's allocated range. The tape is
    /// fixed-size; running off either end is fatal to the run.
    #[error("head moved {direction} out of the tape range at position {position}")]
    TapeOverrun { position: usize, direction: Direction },
    /// `step`/`run` was called before end-of-input was submitted.
    #[error("engine is still ingesting; submit end of input first")]
    StillIngesting,
}
