//! This crate provides the core logic for a single-tape deterministic
//! automaton simulator. It includes the tape storage, the state/transition
//! model, the execution engine with its ingestion-then-autonomous protocol,
//! the builder that validates machine configurations, and a collection of
//! built-in machines.

pub mod builder;
pub mod engine;
pub mod machines;
pub mod table;
pub mod tape;
pub mod types;

/// Re-exports the `MachineBuilder` struct from the builder module.
pub use builder::MachineBuilder;
/// Re-exports the `ExecutionEngine` struct and `CancelToken` from the engine module.
pub use engine::{CancelToken, ExecutionEngine};
/// Re-exports the built-in machine registry functions from the machines module.
pub use machines::{builtin, builtin_names, racecar};
/// Re-exports the `TransitionTable` struct from the table module.
pub use table::TransitionTable;
/// Re-exports the `Tape` struct from the tape module.
pub use tape::Tape;
/// Re-exports various types related to machine definition and execution from the types module.
pub use types::{
    Direction, Ingest, MachineError, MachineOutput, Phase, RunOutcome, State, StateKind,
    StepOutcome, TapeEvent, TapeHead, TransitionKey, TransitionRule, DEFAULT_BLANK_SYMBOL,
    DEFAULT_TAPE_CAPACITY,
};
