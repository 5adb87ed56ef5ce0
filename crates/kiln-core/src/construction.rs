//! Stepwise construction (builder)
//!
//! [`Assembly`] wraps one assembler for one construction episode and
//! enforces the step order. [`Director`] holds no state of its own; it
//! only knows the sequence and is the only driver of an assembly.
//! Assemblers can only be reached through here, since every assembler
//! method takes a [`StepPermit`] and nothing outside this crate can make one.

use crate::contracts::{Assembler, Step, StepPermit};
use crate::errors::{KilnError, Result};

/// Progress of a construction episode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssemblyState {
    /// No step applied yet
    NotStarted,
    /// Some steps applied; `last` is the most recent
    InProgress {
        /// Most recently applied step
        last: Step,
    },
    /// Every step applied
    Complete,
}

impl AssemblyState {
    /// The step that may be applied next
    pub fn expected(self) -> Option<Step> {
        match self {
            AssemblyState::NotStarted => Some(Step::Foundation),
            AssemblyState::InProgress { last } => last.next(),
            AssemblyState::Complete => None,
        }
    }

    /// Number of steps applied
    pub fn completed_steps(self) -> usize {
        match self {
            AssemblyState::NotStarted => 0,
            AssemblyState::InProgress { last } => usize::from(last.ordinal()),
            AssemblyState::Complete => Step::SEQUENCE.len(),
        }
    }
}

/// One construction episode over assembler `A`
#[derive(Debug)]
pub struct Assembly<A> {
    assembler: A,
    state: AssemblyState,
}

impl<A: Assembler> Assembly<A> {
    /// Start an episode with a fresh assembler
    pub fn new(assembler: A) -> Self {
        Self {
            assembler,
            state: AssemblyState::NotStarted,
        }
    }

    /// Current progress
    pub fn state(&self) -> AssemblyState {
        self.state
    }

    /// Number of steps applied
    pub fn completed_steps(&self) -> usize {
        self.state.completed_steps()
    }

    /// Apply `step`; the assembler is left untouched on error
    pub(crate) fn apply(&mut self, step: Step) -> Result<()> {
        let expected = self.state.expected();
        if expected != Some(step) {
            tracing::warn!(%step, ?expected, "step applied out of order");
            return Err(KilnError::OutOfOrderStep {
                expected,
                actual: step,
            });
        }
        self.assembler.apply(step, &StepPermit::new());
        self.state = match step.next() {
            Some(_) => AssemblyState::InProgress { last: step },
            None => AssemblyState::Complete,
        };
        tracing::debug!(step = ?step, "step applied");
        Ok(())
    }

    /// Retrieve the result
    ///
    /// Repeated calls return the same value.
    ///
    /// # Errors
    ///
    /// [`KilnError::IncompleteConstruction`] until a [`Director`] has
    /// applied every step.
    pub fn result(&self) -> Result<A::Output> {
        match self.state {
            AssemblyState::Complete => Ok(self.assembler.output(&StepPermit::new())),
            state => Err(KilnError::IncompleteConstruction {
                completed: state.completed_steps(),
                required: Step::SEQUENCE.len(),
            }),
        }
    }
}

/// Drives assemblies through the fixed step sequence
#[derive(Debug, Default, Clone, Copy)]
pub struct Director;

impl Director {
    /// Create a director
    pub fn new() -> Self {
        Self
    }

    /// Apply every remaining step, in order, to `assembly`
    pub fn construct<A: Assembler>(&self, assembly: &mut Assembly<A>) -> Result<()> {
        while let Some(step) = assembly.state().expected() {
            assembly.apply(step)?;
        }
        Ok(())
    }

    /// Run a full episode over `assembler` and return its result
    pub fn build<A: Assembler>(&self, assembler: A) -> Result<A::Output> {
        let mut assembly = Assembly::new(assembler);
        self.construct(&mut assembly)?;
        tracing::debug!(steps = assembly.completed_steps(), "construction complete");
        assembly.result()
    }
}
