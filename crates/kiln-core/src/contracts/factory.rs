//! Factory contract
//!
//! A factory is a value whose only job is producing products behind a
//! contract. Callers may hold a factory directly (direct-instance form) or
//! reach it through a registry lookup.

use crate::errors::Result;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Producer of independent products
///
/// Every call to [`Factory::create`] yields a new product owned solely by
/// the caller. Any initialization happens inside `create` and either
/// completes or fails the whole call; a partially initialized product is
/// never returned.
pub trait Factory: Send + Sync {
    /// Product handed to the caller
    type Product;

    /// Produce a new product
    fn create(&self) -> Result<Self::Product>;
}

impl<F: Factory + ?Sized> Factory for Arc<F> {
    type Product = F::Product;

    fn create(&self) -> Result<Self::Product> {
        (**self).create()
    }
}

impl<F: Factory + ?Sized> Factory for &F {
    type Product = F::Product;

    fn create(&self) -> Result<Self::Product> {
        (**self).create()
    }
}

impl<F: Factory + ?Sized> Factory for Box<F> {
    type Product = F::Product;

    fn create(&self) -> Result<Self::Product> {
        (**self).create()
    }
}

/// Factory backed by a constructor closure
pub struct FnFactory<F, P> {
    constructor: F,
    _product: PhantomData<fn() -> P>,
}

impl<F, P> FnFactory<F, P>
where
    F: Fn() -> Result<P> + Send + Sync,
{
    /// Wrap a constructor closure
    pub fn new(constructor: F) -> Self {
        Self {
            constructor,
            _product: PhantomData,
        }
    }
}

impl<F, P> Factory for FnFactory<F, P>
where
    F: Fn() -> Result<P> + Send + Sync,
{
    type Product = P;

    fn create(&self) -> Result<P> {
        (self.constructor)()
    }
}

impl<F, P> fmt::Debug for FnFactory<F, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnFactory").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::KilnError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_fn_factory_yields_independent_products() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let factory = FnFactory::new(move || Ok(vec![counter.fetch_add(1, Ordering::SeqCst)]));

        let mut first = factory.create().unwrap();
        let second = factory.create().unwrap();
        first.push(99);

        assert_eq!(first, vec![0, 99]);
        assert_eq!(second, vec![1]);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_shared_factory_delegates() {
        let factory: Arc<dyn Factory<Product = u8>> =
            Arc::new(FnFactory::new(|| -> Result<u8> {
                Err(KilnError::initialization("byte", "no entropy"))
            }));
        assert!(factory.create().is_err());
    }
}
