//! Order façade
//!
//! One coarse operation across three injected sub-capabilities. The call
//! order is fixed: save the main record, save each detail record in line
//! order, then take the payment. The first failure stops the sequence and
//! is reported with the name of the sub-capability that produced it.

use crate::family::DaoSet;
use kiln_core::{
    Amount, DetailRecord, DetailRecordDao, KilnError, MainRecord, MainRecordDao, PaymentProcessor,
    PaymentReceipt, Result, SaveReceipt,
};

/// Sub-capability name of the main-record DAO
pub const MAIN_RECORD_DAO: &str = "main-record-dao";
/// Sub-capability name of the detail-record DAO
pub const DETAIL_RECORD_DAO: &str = "detail-record-dao";
/// Sub-capability name of the payment processor
pub const PAYMENT: &str = "payment";

/// Everything needed to place one order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    /// Header record
    pub main: MainRecord,
    /// Line items, saved in this order
    pub details: Vec<DetailRecord>,
    /// Amount to charge
    pub amount: Amount,
}

impl Order {
    /// Order with no line items yet
    pub fn new(main: MainRecord, amount: Amount) -> Self {
        Self {
            main,
            details: Vec::new(),
            amount,
        }
    }

    /// Append a line item, numbered after the existing ones
    pub fn with_item(mut self, item: impl Into<String>, quantity: u32) -> Self {
        let line = self.details.len() as u32 + 1;
        self.details
            .push(DetailRecord::new(self.main.id.clone(), line, item, quantity));
        self
    }
}

/// Combined result of a placed order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderConfirmation {
    /// Main record save
    pub main: SaveReceipt,
    /// Detail record saves, in line order
    pub details: Vec<SaveReceipt>,
    /// Settled payment
    pub payment: PaymentReceipt,
}

/// Places orders across storage and payment
pub struct OrderFacade<'a> {
    main_dao: Box<dyn MainRecordDao + 'a>,
    detail_dao: Box<dyn DetailRecordDao + 'a>,
    payments: Box<dyn PaymentProcessor + 'a>,
}

impl<'a> OrderFacade<'a> {
    /// Assemble a façade from injected sub-capabilities
    pub fn new(
        main_dao: impl MainRecordDao + 'a,
        detail_dao: impl DetailRecordDao + 'a,
        payments: impl PaymentProcessor + 'a,
    ) -> Self {
        Self {
            main_dao: Box::new(main_dao),
            detail_dao: Box::new(detail_dao),
            payments: Box::new(payments),
        }
    }

    /// Take both DAOs from an opened family
    pub fn from_family(daos: DaoSet, payments: impl PaymentProcessor + 'a) -> Self {
        let (main_dao, detail_dao) = daos.into_parts();
        Self {
            main_dao,
            detail_dao,
            payments: Box::new(payments),
        }
    }

    /// Save the order's records and charge its amount
    ///
    /// # Errors
    ///
    /// [`KilnError::SubCapabilityFailure`] naming the first sub-capability
    /// that failed. Nothing after it is invoked.
    pub fn place_order(&self, order: &Order) -> Result<OrderConfirmation> {
        tracing::debug!(stage = MAIN_RECORD_DAO, id = %order.main.id, "placing order");
        let main = self
            .main_dao
            .save(&order.main)
            .map_err(|e| fail(MAIN_RECORD_DAO, e))?;

        tracing::debug!(
            stage = DETAIL_RECORD_DAO,
            lines = order.details.len(),
            "saving details"
        );
        let details = order
            .details
            .iter()
            .map(|detail| self.detail_dao.save(detail))
            .collect::<Result<Vec<_>>>()
            .map_err(|e| fail(DETAIL_RECORD_DAO, e))?;

        tracing::debug!(stage = PAYMENT, amount = %order.amount, "taking payment");
        let payment = self
            .payments
            .pay(&order.amount)
            .map_err(|e| fail(PAYMENT, e))?;

        tracing::info!(
            id = %order.main.id,
            lines = details.len(),
            reference = %payment.reference,
            "order placed"
        );
        Ok(OrderConfirmation {
            main,
            details,
            payment,
        })
    }
}

impl std::fmt::Debug for OrderFacade<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderFacade")
            .field("main_backend", &self.main_dao.backend())
            .field("detail_backend", &self.detail_dao.backend())
            .finish_non_exhaustive()
    }
}

fn fail(capability: &'static str, source: KilnError) -> KilnError {
    tracing::warn!(capability, error = %source, "order aborted");
    KilnError::sub_capability(capability, source)
}
