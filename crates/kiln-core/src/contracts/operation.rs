//! Two-operand operation contract

use std::fmt;

/// Base state shared by every operation variant
///
/// Variants embed this by value and expose it through
/// [`Operation::operands`]; there is no base type to inherit from.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Operands {
    /// Left operand
    pub a: f64,
    /// Right operand
    pub b: f64,
}

impl Operands {
    /// Create operands from two values
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// Whether both operands are finite numbers
    pub fn is_finite(&self) -> bool {
        self.a.is_finite() && self.b.is_finite()
    }
}

/// Contract for a binary operation product
///
/// Operands are set through the contract's own mutators before
/// [`Operation::result`] is read.
pub trait Operation: Send + fmt::Debug {
    /// Discriminator of the variant that produced this product
    fn kind(&self) -> &'static str;

    /// Shared operand state
    fn operands(&self) -> &Operands;

    /// Mutable access to the shared operand state
    fn operands_mut(&mut self) -> &mut Operands;

    /// Apply the operation to the current operands
    fn result(&self) -> f64;

    /// Set the left operand
    fn set_operand_a(&mut self, value: f64) {
        self.operands_mut().a = value;
    }

    /// Set the right operand
    fn set_operand_b(&mut self, value: f64) {
        self.operands_mut().b = value;
    }

    /// Return to the freshly-constructed state
    fn reset(&mut self) {
        *self.operands_mut() = Operands::default();
    }
}
