//! Operation variants
//!
//! Each variant embeds [`Operands`] and differs only in how it combines
//! them. Every variant has a zero-argument factory that can be held
//! directly or registered under the variant's discriminator.

use kiln_core::{Factory, KilnError, Operands, Operation, Result};

macro_rules! operation_variant {
    (
        $(#[$doc:meta])*
        $name:ident, $factory:ident, $kind:literal, |$a:ident, $b:ident| $body:expr
    ) => {
        $(#[$doc])*
        #[derive(Debug, Default)]
        pub struct $name {
            operands: Operands,
        }

        impl $name {
            /// Discriminator this variant registers under
            pub const KIND: &'static str = $kind;
        }

        impl Operation for $name {
            fn kind(&self) -> &'static str {
                Self::KIND
            }

            fn operands(&self) -> &Operands {
                &self.operands
            }

            fn operands_mut(&mut self) -> &mut Operands {
                &mut self.operands
            }

            fn result(&self) -> f64 {
                let Operands { a: $a, b: $b } = self.operands;
                $body
            }
        }

        #[doc = concat!("Factory for [`", stringify!($name), "`]")]
        #[derive(Debug, Default, Clone, Copy)]
        pub struct $factory;

        impl Factory for $factory {
            type Product = Box<dyn Operation>;

            fn create(&self) -> Result<Self::Product> {
                tracing::trace!(kind = $kind, "creating operation");
                Ok(Box::new($name::default()))
            }
        }
    };
}

operation_variant!(
    /// `a + b`
    Plus, PlusFactory, "plus", |a, b| a + b
);

operation_variant!(
    /// `a - b`
    Minus, MinusFactory, "minus", |a, b| a - b
);

operation_variant!(
    /// `a * b`
    Multiply, MultiplyFactory, "multiply", |a, b| a * b
);

/// Factory that hands out operations with operands already loaded
///
/// The operands are validated before the wrapped factory runs, and the
/// product is only returned once it is fully loaded.
#[derive(Debug, Clone)]
pub struct PresetOperandsFactory<F> {
    inner: F,
    operands: Operands,
}

impl<F> PresetOperandsFactory<F>
where
    F: Factory<Product = Box<dyn Operation>>,
{
    /// Wrap `inner`, presetting `operands` on every product
    pub fn new(inner: F, operands: Operands) -> Self {
        Self { inner, operands }
    }
}

impl<F> Factory for PresetOperandsFactory<F>
where
    F: Factory<Product = Box<dyn Operation>>,
{
    type Product = Box<dyn Operation>;

    fn create(&self) -> Result<Self::Product> {
        if !self.operands.is_finite() {
            return Err(KilnError::initialization(
                "preset operation",
                format!(
                    "operands must be finite (a = {}, b = {})",
                    self.operands.a, self.operands.b
                ),
            ));
        }
        let mut product = self.inner.create()?;
        *product.operands_mut() = self.operands;
        Ok(product)
    }
}
