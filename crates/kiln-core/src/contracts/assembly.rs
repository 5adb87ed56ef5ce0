//! Stepwise assembler contract
//!
//! The step sequence is fixed here; which effect each step has is up to
//! the assembler variant.

use std::fmt;

/// One construction step
///
/// Steps always run in [`Step::SEQUENCE`] order, each exactly once per
/// construction episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Step {
    /// First step
    Foundation,
    /// Second step
    Frame,
    /// Final step
    Finish,
}

impl Step {
    /// The fixed construction order
    pub const SEQUENCE: [Step; 3] = [Step::Foundation, Step::Frame, Step::Finish];

    /// 1-based position in [`Step::SEQUENCE`]
    pub const fn ordinal(self) -> u8 {
        match self {
            Step::Foundation => 1,
            Step::Frame => 2,
            Step::Finish => 3,
        }
    }

    /// The step that follows this one, `None` for the final step
    pub const fn next(self) -> Option<Step> {
        match self {
            Step::Foundation => Some(Step::Frame),
            Step::Frame => Some(Step::Finish),
            Step::Finish => None,
        }
    }

    /// Step name
    pub const fn name(self) -> &'static str {
        match self {
            Step::Foundation => "foundation",
            Step::Frame => "frame",
            Step::Finish => "finish",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Proof that a call comes from the order-enforcing driver
///
/// Only [`Assembly`](crate::construction::Assembly) can produce one, so an
/// assembler's methods are unreachable except through a guarded episode.
///
/// ```compile_fail
/// let permit = kiln_core::StepPermit { _sealed: () };
/// ```
#[derive(Debug)]
pub struct StepPermit {
    _sealed: (),
}

impl StepPermit {
    pub(crate) const fn new() -> Self {
        Self { _sealed: () }
    }
}

/// Accumulates a result one step at a time
///
/// The output type is chosen by the variant. Both methods require a
/// [`StepPermit`]; step order and completeness are enforced by
/// [`Assembly`](crate::construction::Assembly), which a
/// [`Director`](crate::construction::Director) drives.
pub trait Assembler {
    /// Value produced at the end of the sequence
    type Output;

    /// Apply one step's effect
    fn apply(&mut self, step: Step, permit: &StepPermit);

    /// Materialize the accumulated value without changing it
    fn output(&self, permit: &StepPermit) -> Self::Output;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_is_linked_by_next() {
        let mut walked = vec![Step::SEQUENCE[0]];
        while let Some(next) = walked.last().and_then(|s| s.next()) {
            walked.push(next);
        }
        assert_eq!(walked, Step::SEQUENCE.to_vec());
    }

    #[test]
    fn test_ordinals_follow_sequence() {
        let ordinals: Vec<u8> = Step::SEQUENCE.iter().map(|s| s.ordinal()).collect();
        assert_eq!(ordinals, vec![1, 2, 3]);
    }
}
