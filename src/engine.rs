//! This module defines the `ExecutionEngine`, which drives a single-tape
//! deterministic machine through its three phases: ingesting externally fed
//! characters, autonomously processing the tape, and halting.

use crate::table::TransitionTable;
use crate::tape::Tape;
use crate::types::{
    Ingest, MachineError, MachineOutput, Phase, RunOutcome, State, StepOutcome, TapeEvent,
    TapeHead, TransitionRule,
};
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A cooperative cancellation token checked between autonomous steps.
///
/// A misconfigured transition table can loop without ever halting; cancelling
/// the token is the only way to bound such a run. Cloning shares the token, so
/// one handle can be kept by the caller while another is passed to
/// [`ExecutionEngine::run`].
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. The engine notices before its next step.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// A single-tape deterministic execution engine.
///
/// The engine owns its tape, transition table, head, and event log outright;
/// nothing else mutates them. One instance serves exactly one run — resetting
/// means rebuilding a fresh engine from the same
/// [`MachineBuilder`](crate::builder::MachineBuilder), which guarantees no
/// residual tape or state leaks between runs.
#[derive(Debug, Clone)]
pub struct ExecutionEngine {
    table: TransitionTable,
    tape: Tape,
    tape_alphabet: BTreeSet<char>,
    current: State,
    head: TapeHead,
    phase: Phase,
    ingested: String,
    events: Vec<TapeEvent>,
}

impl ExecutionEngine {
    pub(crate) fn new(
        table: TransitionTable,
        tape: Tape,
        tape_alphabet: BTreeSet<char>,
        initial: State,
        head: TapeHead,
    ) -> Self {
        Self {
            table,
            tape,
            tape_alphabet,
            current: initial,
            head,
            phase: Phase::Ingesting,
            ingested: String::new(),
            events: Vec::new(),
        }
    }

    /// Offers one externally supplied character to the ingesting engine.
    ///
    /// The character is lower-cased and looked up against the current state.
    /// If a rule exists the engine performs one step, records the character in
    /// the reconstructed input, and reports [`Ingest::Accepted`]. If no rule
    /// exists — or the engine is past ingestion — nothing is written and the
    /// character is [`Ingest::Rejected`].
    pub fn ingest(&mut self, character: char) -> Result<Ingest, MachineError> {
        if self.phase != Phase::Ingesting {
            return Ok(Ingest::Rejected);
        }

        let character = character.to_lowercase().next().unwrap_or(character);
        let rule = match self.table.lookup(&self.current, character).cloned() {
            Some(rule) => rule,
            None => return Ok(Ingest::Rejected),
        };

        self.apply(character, rule)?;
        self.ingested.push(character);
        Ok(Ingest::Accepted)
    }

    /// Signals end of input.
    ///
    /// The reconstructed input is fixed at this point, the blank symbol is
    /// injected as the end-of-input marker (stepping once if a rule matches
    /// it), and the engine moves to the autonomous phase. Calling this outside
    /// the ingesting phase does nothing.
    pub fn submit_end_of_input(&mut self) -> Result<(), MachineError> {
        if self.phase != Phase::Ingesting {
            return Ok(());
        }

        let blank = self.tape.blank();
        if let Some(rule) = self.table.lookup(&self.current, blank).cloned() {
            self.apply(blank, rule)?;
        }

        self.phase = Phase::Autonomous;
        Ok(())
    }

    /// Executes one autonomous step from whatever symbol is under the head.
    ///
    /// A missing rule is the normal end of the computation and is reported as
    /// [`StepOutcome::Halted`], never as an error. Stepping a halted engine is
    /// a no-op that reports `Halted` again; stepping before end of input was
    /// submitted is a misuse error.
    pub fn step(&mut self) -> Result<StepOutcome, MachineError> {
        match self.phase {
            Phase::Ingesting => Err(MachineError::StillIngesting),
            Phase::Halted => Ok(StepOutcome::Halted),
            Phase::Autonomous => {
                let symbol = self.head.symbol;
                match self.table.lookup(&self.current, symbol).cloned() {
                    None => {
                        self.phase = Phase::Halted;
                        Ok(StepOutcome::Halted)
                    }
                    Some(rule) => {
                        self.apply(symbol, rule)?;
                        Ok(StepOutcome::Stepped)
                    }
                }
            }
        }
    }

    /// Drives the engine until it halts or the token is cancelled.
    ///
    /// `observe` is invoked synchronously after each successful step, before
    /// the next one begins, and receives a shared reference only — the hook
    /// can inspect post-step state but cannot step or mutate the engine.
    pub fn run<F>(&mut self, cancel: &CancelToken, mut observe: F) -> Result<RunOutcome, MachineError>
    where
        F: FnMut(&ExecutionEngine),
    {
        loop {
            if cancel.is_cancelled() {
                return Ok(RunOutcome::Cancelled);
            }

            match self.step()? {
                StepOutcome::Stepped => observe(&*self),
                StepOutcome::Halted => return Ok(RunOutcome::Halted(self.output())),
            }
        }
    }

    /// Applies one transition rule for `consumed`: writes the rule's symbol at
    /// the head, logs the event, moves the head, and enters the next state.
    ///
    /// The destination cell is bounds-checked before anything happens, so a
    /// failing step leaves the tape, head, and event log untouched.
    fn apply(&mut self, consumed: char, rule: TransitionRule) -> Result<(), MachineError> {
        let position = self.head.position;
        let next = self.tape.offset(position, rule.direction)?;

        self.tape.write(position, rule.write);
        self.events.push(TapeEvent {
            consumed,
            written: rule.write,
            direction: rule.direction,
            head_before: self.head.clone(),
            from_state: self.current.clone(),
            to_state: rule.next_state.clone(),
        });
        self.head = TapeHead {
            symbol: self.tape.read(next),
            position: next,
            previous_position: position,
            direction: rule.direction,
        };
        self.current = rule.next_state;
        Ok(())
    }

    /// Snapshots the run: the reconstructed input, the tape filtered to
    /// meaningful symbols of the tape alphabet in tape order, and the current
    /// logical state.
    pub fn output(&self) -> MachineOutput {
        let blank = self.tape.blank();
        let tape = self
            .tape
            .symbols()
            .iter()
            .filter(|&&c| c != blank && self.tape_alphabet.contains(&c))
            .collect();

        MachineOutput {
            input: self.ingested.clone(),
            tape,
            state: self.current.clone(),
        }
    }

    /// The engine-level execution phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The automaton's current logical state.
    pub fn state(&self) -> &State {
        &self.current
    }

    /// The read/write head.
    pub fn head(&self) -> &TapeHead {
        &self.head
    }

    /// The tape, blanks included.
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// The append-only event log, in step order.
    pub fn events(&self) -> &[TapeEvent] {
        &self.events
    }

    /// The most recent event, if any step has executed.
    pub fn last_event(&self) -> Option<&TapeEvent> {
        self.events.last()
    }

    /// The number of steps executed so far.
    pub fn step_count(&self) -> usize {
        self.events.len()
    }

    /// The blank symbol of this machine.
    pub fn blank(&self) -> char {
        self.tape.blank()
    }
}
