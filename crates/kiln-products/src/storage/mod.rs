//! Storage technologies
//!
//! Each technology provides one DAO per record role and renders saved
//! records in its own format. Nothing is written anywhere; the receipt
//! carries the rendering.

mod rdb;
mod xml;

pub use rdb::{RdbDetailRecordDao, RdbMainRecordDao, RdbTechnology, RDB};
pub use xml::{XmlDetailRecordDao, XmlMainRecordDao, XmlTechnology, XML};

use kiln_core::{DetailRecord, KilnError, MainRecord, Result};

pub(crate) const MAIN_DAO: &str = "main-record-dao";
pub(crate) const DETAIL_DAO: &str = "detail-record-dao";

/// Records must identify themselves before any technology accepts them
pub(crate) fn check_main(record: &MainRecord) -> Result<()> {
    if record.id.trim().is_empty() {
        return Err(KilnError::rejected(MAIN_DAO, "record id is empty"));
    }
    Ok(())
}

pub(crate) fn check_detail(record: &DetailRecord) -> Result<()> {
    if record.main_id.trim().is_empty() {
        return Err(KilnError::rejected(DETAIL_DAO, "main record id is empty"));
    }
    if record.quantity == 0 {
        return Err(KilnError::rejected(
            DETAIL_DAO,
            format!("line {} has zero quantity", record.line),
        ));
    }
    Ok(())
}
