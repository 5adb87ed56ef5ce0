//! Capability registry (factory method, lookup form)
//!
//! Maps a discriminator to a factory. The mapping is assembled once with
//! [`FactoryRegistryBuilder`] and cannot change afterwards, so a built
//! registry can be shared between threads and every `create` call sees
//! the same table.

use crate::table::RegistrationTable;
use kiln_core::{Discriminator, Factory, FnFactory, KilnError, Result};

type BoxedFactory<P> = Box<dyn Factory<Product = P>>;

/// Registry mapping discriminators to factories of one product contract
pub struct FactoryRegistry<P> {
    factories: RegistrationTable<BoxedFactory<P>>,
}

impl<P> std::fmt::Debug for FactoryRegistry<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FactoryRegistry")
            .field("discriminators", &self.discriminators())
            .finish()
    }
}

impl<P> FactoryRegistry<P> {
    /// Start building a registry
    pub fn builder() -> FactoryRegistryBuilder<P> {
        FactoryRegistryBuilder::new()
    }

    /// Create a product with the factory registered under `discriminator`
    ///
    /// # Errors
    ///
    /// [`KilnError::UnknownVariant`] when nothing is registered under the
    /// key; otherwise whatever the factory itself reports.
    pub fn create(&self, discriminator: &str) -> Result<P> {
        let factory = self.factory(discriminator)?;
        tracing::debug!(discriminator, "creating product");
        factory.create()
    }

    /// Direct handle to the factory registered under `discriminator`
    pub fn factory(&self, discriminator: &str) -> Result<&dyn Factory<Product = P>> {
        match self.factories.get(discriminator) {
            Some(factory) => Ok(factory.as_ref()),
            None => {
                tracing::warn!(discriminator, "no factory registered");
                Err(KilnError::unknown_variant(discriminator))
            }
        }
    }

    /// Check if a factory is registered under `discriminator`
    pub fn contains(&self, discriminator: &str) -> bool {
        self.factories.contains(discriminator)
    }

    /// Registered discriminators, sorted
    pub fn discriminators(&self) -> Vec<&Discriminator> {
        self.factories.keys().collect()
    }

    /// Number of registered factories
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Whether nothing is registered
    pub fn is_empty(&self) -> bool {
        self.factories.len() == 0
    }
}

/// Builder for [`FactoryRegistry`]
pub struct FactoryRegistryBuilder<P> {
    factories: RegistrationTable<BoxedFactory<P>>,
}

impl<P> FactoryRegistryBuilder<P> {
    /// Create an empty builder
    pub fn new() -> Self {
        Self {
            factories: RegistrationTable::new(),
        }
    }

    /// Register a factory
    ///
    /// # Errors
    ///
    /// [`KilnError::DuplicateRegistration`] if the key is already taken.
    pub fn register<F>(
        mut self,
        discriminator: impl Into<Discriminator>,
        factory: F,
    ) -> Result<Self>
    where
        F: Factory<Product = P> + 'static,
    {
        let discriminator = discriminator.into();
        tracing::debug!(discriminator = %discriminator, "registering factory");
        self.factories.insert(discriminator, Box::new(factory))?;
        Ok(self)
    }

    /// Register a constructor closure
    pub fn register_fn<C>(
        self,
        discriminator: impl Into<Discriminator>,
        constructor: C,
    ) -> Result<Self>
    where
        C: Fn() -> Result<P> + Send + Sync + 'static,
        P: 'static,
    {
        self.register(discriminator, FnFactory::new(constructor))
    }

    /// Freeze the table
    pub fn build(self) -> FactoryRegistry<P> {
        FactoryRegistry {
            factories: self.factories,
        }
    }
}

impl<P> Default for FactoryRegistryBuilder<P> {
    fn default() -> Self {
        Self::new()
    }
}
