//! Assembler variants
//!
//! The same step sequence produces a different output type in each variant.

use kiln_core::{Assembler, Step, StepPermit};
use serde::Serialize;

/// Appends each step's ordinal as a digit
#[derive(Debug, Default, Clone)]
pub struct DigitAssembler {
    digits: String,
}

impl Assembler for DigitAssembler {
    type Output = String;

    fn apply(&mut self, step: Step, _permit: &StepPermit) {
        self.digits.push(char::from(b'0' + step.ordinal()));
    }

    fn output(&self, _permit: &StepPermit) -> String {
        self.digits.clone()
    }
}

/// Adds each step's ordinal
#[derive(Debug, Default, Clone)]
pub struct SumAssembler {
    total: u64,
}

impl Assembler for SumAssembler {
    type Output = u64;

    fn apply(&mut self, step: Step, _permit: &StepPermit) {
        self.total += u64::from(step.ordinal());
    }

    fn output(&self, _permit: &StepPermit) -> u64 {
        self.total
    }
}

/// One recorded step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestEntry {
    /// Step name
    pub step: &'static str,
    /// Step ordinal
    pub ordinal: u8,
}

/// Structured record of a construction episode
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Manifest {
    /// Entries in the order the steps were applied
    pub entries: Vec<ManifestEntry>,
}

/// Records each step as a manifest entry
#[derive(Debug, Default, Clone)]
pub struct ManifestAssembler {
    manifest: Manifest,
}

impl Assembler for ManifestAssembler {
    type Output = Manifest;

    fn apply(&mut self, step: Step, _permit: &StepPermit) {
        self.manifest.entries.push(ManifestEntry {
            step: step.name(),
            ordinal: step.ordinal(),
        });
    }

    fn output(&self, _permit: &StepPermit) -> Manifest {
        self.manifest.clone()
    }
}
