//! Family registry (abstract factory)
//!
//! A family is chosen once by discriminator. Every DAO obtained from the
//! chosen family uses the same storage technology. [`TechnologyFamily`]
//! gets that from the type system; hand-written [`DaoFamily`]
//! implementations are checked when a [`DaoSet`] is opened.

use crate::table::RegistrationTable;
use kiln_core::{
    Backend, DaoFamily, DetailRecordDao, Discriminator, KilnError, MainRecordDao, RecordRole,
    Result, StorageTechnology,
};
use std::marker::PhantomData;
use std::sync::Arc;

/// Family built from a single [`StorageTechnology`]
///
/// Both roles come from `T`, so they cannot disagree on the backend.
pub struct TechnologyFamily<T> {
    _technology: PhantomData<fn() -> T>,
}

impl<T: StorageTechnology> TechnologyFamily<T> {
    /// Family for technology `T`
    pub fn new() -> Self {
        Self {
            _technology: PhantomData,
        }
    }
}

impl<T: StorageTechnology> Default for TechnologyFamily<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StorageTechnology> std::fmt::Debug for TechnologyFamily<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TechnologyFamily")
            .field("backend", &T::BACKEND)
            .finish()
    }
}

impl<T: StorageTechnology> DaoFamily for TechnologyFamily<T> {
    fn backend(&self) -> Backend {
        T::BACKEND
    }

    fn create_main_record_dao(&self) -> Box<dyn MainRecordDao> {
        Box::new(T::main_dao())
    }

    fn create_detail_record_dao(&self) -> Box<dyn DetailRecordDao> {
        Box::new(T::detail_dao())
    }
}

/// Every role's DAO from one family, checked for consistency
pub struct DaoSet {
    backend: Backend,
    main: Box<dyn MainRecordDao>,
    detail: Box<dyn DetailRecordDao>,
}

impl DaoSet {
    /// Obtain one DAO per role from `family`
    ///
    /// # Errors
    ///
    /// [`KilnError::FamilyMismatch`] if any role reports a backend other
    /// than the family's own.
    pub fn open(family: &dyn DaoFamily) -> Result<Self> {
        let backend = family.backend();
        let main = family.create_main_record_dao();
        ensure_role(backend, RecordRole::Main, main.backend())?;
        let detail = family.create_detail_record_dao();
        ensure_role(backend, RecordRole::Detail, detail.backend())?;
        Ok(Self {
            backend,
            main,
            detail,
        })
    }

    /// Backend shared by every DAO in the set
    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Main-record DAO
    pub fn main(&self) -> &dyn MainRecordDao {
        self.main.as_ref()
    }

    /// Detail-record DAO
    pub fn detail(&self) -> &dyn DetailRecordDao {
        self.detail.as_ref()
    }

    /// Split into the owned DAOs
    pub fn into_parts(self) -> (Box<dyn MainRecordDao>, Box<dyn DetailRecordDao>) {
        (self.main, self.detail)
    }
}

impl std::fmt::Debug for DaoSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DaoSet").field("backend", &self.backend).finish()
    }
}

fn ensure_role(family: Backend, role: RecordRole, actual: Backend) -> Result<()> {
    if family == actual {
        Ok(())
    } else {
        tracing::warn!(%family, %role, %actual, "family produced a DAO for another backend");
        Err(KilnError::FamilyMismatch {
            family,
            role,
            actual,
        })
    }
}

/// Registry mapping discriminators to DAO families
pub struct FamilyRegistry {
    families: RegistrationTable<Arc<dyn DaoFamily>>,
}

impl FamilyRegistry {
    /// Start building a registry
    pub fn builder() -> FamilyRegistryBuilder {
        FamilyRegistryBuilder::new()
    }

    /// Select the family registered under `discriminator`
    ///
    /// Unknown keys fail here, before any DAO is requested.
    pub fn select(&self, discriminator: &str) -> Result<Arc<dyn DaoFamily>> {
        match self.families.get(discriminator) {
            Some(family) => {
                tracing::debug!(discriminator, backend = %family.backend(), "selected family");
                Ok(Arc::clone(family))
            }
            None => {
                tracing::warn!(discriminator, "unsupported family");
                Err(KilnError::unsupported_family(discriminator))
            }
        }
    }

    /// Select a family and open one DAO per role from it
    pub fn open(&self, discriminator: &str) -> Result<DaoSet> {
        let family = self.select(discriminator)?;
        DaoSet::open(family.as_ref())
    }

    /// Check if a family is registered under `discriminator`
    pub fn contains(&self, discriminator: &str) -> bool {
        self.families.contains(discriminator)
    }

    /// Registered discriminators, sorted
    pub fn discriminators(&self) -> Vec<&Discriminator> {
        self.families.keys().collect()
    }

    /// Number of registered families
    pub fn len(&self) -> usize {
        self.families.len()
    }

    /// Whether nothing is registered
    pub fn is_empty(&self) -> bool {
        self.families.len() == 0
    }
}

impl std::fmt::Debug for FamilyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FamilyRegistry")
            .field("discriminators", &self.discriminators())
            .finish()
    }
}

/// Builder for [`FamilyRegistry`]
pub struct FamilyRegistryBuilder {
    families: RegistrationTable<Arc<dyn DaoFamily>>,
}

impl FamilyRegistryBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self {
            families: RegistrationTable::new(),
        }
    }

    /// Register a family value
    pub fn register<F>(mut self, discriminator: impl Into<Discriminator>, family: F) -> Result<Self>
    where
        F: DaoFamily + 'static,
    {
        let discriminator = discriminator.into();
        tracing::debug!(
            discriminator = %discriminator,
            backend = %family.backend(),
            "registering family"
        );
        self.families.insert(discriminator, Arc::new(family))?;
        Ok(self)
    }

    /// Register the family of storage technology `T`
    pub fn register_technology<T: StorageTechnology>(
        self,
        discriminator: impl Into<Discriminator>,
    ) -> Result<Self> {
        self.register(discriminator, TechnologyFamily::<T>::new())
    }

    /// Freeze the table
    pub fn build(self) -> FamilyRegistry {
        FamilyRegistry {
            families: self.families,
        }
    }
}

impl Default for FamilyRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
