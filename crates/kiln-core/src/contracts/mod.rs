//! Product contracts and construction contracts
//!
//! Calling code holds these traits, never the concrete variants behind
//! them. Contracts are declared explicitly; a type qualifies only through
//! an `impl`, never by happening to have matching methods.

mod assembly;
mod factory;
mod operation;
mod payment;
mod storage;

pub use assembly::{Assembler, Step, StepPermit};
pub use factory::{Factory, FnFactory};
pub use operation::{Operands, Operation};
pub use payment::{PaymentProcessor, PaymentReceipt};
pub use storage::{
    Backend, DaoFamily, DetailRecord, DetailRecordDao, MainRecord, MainRecordDao, RecordRole,
    SaveReceipt, StorageTechnology,
};
