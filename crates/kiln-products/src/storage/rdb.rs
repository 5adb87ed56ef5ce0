//! Relational technology: records render as SQL `INSERT` statements

use super::{check_detail, check_main};
use kiln_core::{
    Backend, DetailRecord, DetailRecordDao, MainRecord, MainRecordDao, RecordRole, Result,
    SaveReceipt, StorageTechnology,
};

/// Relational backend
pub const RDB: Backend = Backend::new("rdb");

fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Relational main-record DAO
#[derive(Debug, Default, Clone, Copy)]
pub struct RdbMainRecordDao;

impl MainRecordDao for RdbMainRecordDao {
    fn backend(&self) -> Backend {
        RDB
    }

    fn save(&self, record: &MainRecord) -> Result<SaveReceipt> {
        check_main(record)?;
        let rendered = format!(
            "INSERT INTO main_records (id, customer) VALUES ({}, {});",
            quote(&record.id),
            quote(&record.customer)
        );
        tracing::debug!(backend = %RDB, id = %record.id, "saved main record");
        Ok(SaveReceipt {
            backend: RDB,
            role: RecordRole::Main,
            rendered,
        })
    }
}

/// Relational detail-record DAO
#[derive(Debug, Default, Clone, Copy)]
pub struct RdbDetailRecordDao;

impl DetailRecordDao for RdbDetailRecordDao {
    fn backend(&self) -> Backend {
        RDB
    }

    fn save(&self, record: &DetailRecord) -> Result<SaveReceipt> {
        check_detail(record)?;
        let rendered = format!(
            "INSERT INTO detail_records (main_id, line, item, quantity) VALUES ({}, {}, {}, {});",
            quote(&record.main_id),
            record.line,
            quote(&record.item),
            record.quantity
        );
        tracing::debug!(
            backend = %RDB,
            main_id = %record.main_id,
            line = record.line,
            "saved detail record"
        );
        Ok(SaveReceipt {
            backend: RDB,
            role: RecordRole::Detail,
            rendered,
        })
    }
}

/// Relational storage technology
#[derive(Debug, Default, Clone, Copy)]
pub struct RdbTechnology;

impl StorageTechnology for RdbTechnology {
    const BACKEND: Backend = RDB;
    type MainDao = RdbMainRecordDao;
    type DetailDao = RdbDetailRecordDao;

    fn main_dao() -> Self::MainDao {
        RdbMainRecordDao
    }

    fn detail_dao() -> Self::DetailDao {
        RdbDetailRecordDao
    }
}
