//! Startup tables
//!
//! Builds the registries a process runs with from its configuration.
//! New variants are added to the tables here; calling code only sees the
//! discriminators.

use crate::adapters::PaymentRoute;
use crate::family::FamilyRegistry;
use crate::pool::PooledFactory;
use crate::registry::FactoryRegistry;
use kiln_core::{Factory, KilnConfig, KilnError, Operation, Result};
use kiln_products::{
    Minus, MinusFactory, Multiply, MultiplyFactory, Plus, PlusFactory, RdbTechnology,
    XmlTechnology,
};

/// Factory of boxed operations
pub type OperationFactory = Box<dyn Factory<Product = Box<dyn Operation>>>;

/// Pool in front of one registered operator
pub type OperatorPool<'a> = PooledFactory<&'a dyn Factory<Product = Box<dyn Operation>>>;

type OperatorEntry = (&'static str, fn() -> OperationFactory);

const OPERATORS: &[OperatorEntry] = &[
    (Plus::KIND, boxed::<PlusFactory>),
    (Minus::KIND, boxed::<MinusFactory>),
    (Multiply::KIND, boxed::<MultiplyFactory>),
];

fn boxed<F>() -> OperationFactory
where
    F: Factory<Product = Box<dyn Operation>> + Default + 'static,
{
    Box::new(F::default())
}

/// Every operation discriminator this build knows about
pub fn known_operators() -> impl Iterator<Item = &'static str> {
    OPERATORS.iter().map(|(name, _)| *name)
}

/// Registry holding exactly the named operators
///
/// # Errors
///
/// [`KilnError::UnknownVariant`] for a name with no known variant, and
/// [`KilnError::DuplicateRegistration`] for a repeated name.
pub fn operator_registry<S: AsRef<str>>(
    names: &[S],
) -> Result<FactoryRegistry<Box<dyn Operation>>> {
    let mut builder = FactoryRegistry::builder();
    for name in names {
        let name = name.as_ref();
        let (_, make) = OPERATORS
            .iter()
            .find(|(known, _)| *known == name)
            .ok_or_else(|| KilnError::unknown_variant(name))?;
        builder = builder.register(name, make())?;
    }
    Ok(builder.build())
}

/// Registry of every storage technology this build knows about
pub fn family_registry() -> Result<FamilyRegistry> {
    Ok(FamilyRegistry::builder()
        .register_technology::<RdbTechnology>("rdb")?
        .register_technology::<XmlTechnology>("xml")?
        .build())
}

/// Registries and settings resolved from a validated configuration
#[derive(Debug)]
pub struct Catalog {
    /// Operators named in `[registry]`
    pub operators: FactoryRegistry<Box<dyn Operation>>,
    /// Every known storage family
    pub families: FamilyRegistry,
    /// Family named in `[family]`
    pub family: String,
    /// Route named in `[payment]`
    pub route: PaymentRoute,
    /// Idle cap from `[pool]`
    pub max_idle: usize,
}

impl Catalog {
    /// Resolve `config`
    ///
    /// Validates first, then checks every discriminator against the
    /// registries so an unknown family or route fails at startup.
    pub fn from_config(config: &KilnConfig) -> Result<Self> {
        config.validate()?;
        let operators = operator_registry(config.registry.operators.as_slice())?;
        let families = family_registry()?;
        families.select(&config.family.selected)?;
        let route: PaymentRoute = config.payment.route.parse()?;
        tracing::debug!(
            operators = operators.len(),
            family = %config.family.selected,
            %route,
            "catalog resolved"
        );
        Ok(Self {
            operators,
            families,
            family: config.family.selected.clone(),
            route,
            max_idle: config.pool.max_idle,
        })
    }

    /// Pool in front of the operator registered under `name`
    ///
    /// Keeps at most `[pool] max_idle` released operations idle.
    ///
    /// # Errors
    ///
    /// [`KilnError::UnknownVariant`] when `name` is not a configured
    /// operator.
    pub fn pooled_operator(&self, name: &str) -> Result<OperatorPool<'_>> {
        let factory = self.operators.factory(name)?;
        tracing::debug!(operator = name, max_idle = self.max_idle, "pooling operator");
        Ok(PooledFactory::new(factory, self.max_idle))
    }
}
