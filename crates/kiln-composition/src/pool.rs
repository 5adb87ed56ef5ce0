//! Reuse pool in front of a factory
//!
//! `create` hands out an idle product when there is one and falls back to
//! the wrapped factory otherwise. Released products are reset before they
//! go back to the idle list, and a product is owned by exactly one caller
//! while it is out of the pool. No eviction beyond the idle cap.

use kiln_core::{Factory, Operation, Result};
use parking_lot::Mutex;

/// Product that can be returned to a freshly-constructed state
pub trait Reusable {
    /// Clear all state set since construction
    fn reset(&mut self);
}

impl Reusable for Box<dyn Operation> {
    fn reset(&mut self) {
        (**self).reset();
    }
}

/// Pooling wrapper around a factory
pub struct PooledFactory<F: Factory> {
    inner: F,
    idle: Mutex<Vec<F::Product>>,
    max_idle: usize,
}

impl<F> PooledFactory<F>
where
    F: Factory,
    F::Product: Reusable + Send,
{
    /// Pool products of `inner`, keeping at most `max_idle` of them idle
    pub fn new(inner: F, max_idle: usize) -> Self {
        Self {
            inner,
            idle: Mutex::new(Vec::with_capacity(max_idle)),
            max_idle,
        }
    }

    /// Return a product to the pool
    ///
    /// The product is reset first. It is dropped instead when the idle
    /// list is already full.
    pub fn release(&self, mut product: F::Product) {
        product.reset();
        let mut idle = self.idle.lock();
        if idle.len() < self.max_idle {
            idle.push(product);
        } else {
            tracing::trace!(max_idle = self.max_idle, "pool full; dropping released product");
        }
    }

    /// Products currently idle
    pub fn idle_len(&self) -> usize {
        self.idle.lock().len()
    }

    /// Idle cap
    pub fn max_idle(&self) -> usize {
        self.max_idle
    }
}

impl<F> Factory for PooledFactory<F>
where
    F: Factory,
    F::Product: Reusable + Send,
{
    type Product = F::Product;

    fn create(&self) -> Result<Self::Product> {
        // Pop under the lock, construct outside it.
        let reused = self.idle.lock().pop();
        match reused {
            Some(product) => {
                tracing::debug!("reusing pooled product");
                Ok(product)
            }
            None => {
                tracing::debug!("pool empty; allocating");
                self.inner.create()
            }
        }
    }
}

impl<F: Factory> std::fmt::Debug for PooledFactory<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PooledFactory")
            .field("idle", &self.idle.lock().len())
            .field("max_idle", &self.max_idle)
            .finish()
    }
}
