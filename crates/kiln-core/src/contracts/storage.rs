//! Record persistence contracts and the family contract
//!
//! A family produces one DAO per record role. All roles obtained from one
//! family value use the same storage technology; [`StorageTechnology`]
//! lets the type system carry that guarantee for generic families.

use crate::errors::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage technology backing a DAO
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Backend(&'static str);

impl Backend {
    /// Name a backend
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Backend name
    pub const fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Role a DAO plays inside a family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordRole {
    /// Header record
    Main,
    /// Line-item record belonging to a main record
    Detail,
}

impl fmt::Display for RecordRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordRole::Main => f.write_str("main"),
            RecordRole::Detail => f.write_str("detail"),
        }
    }
}

/// Header record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MainRecord {
    /// Record identifier
    pub id: String,
    /// Customer the record belongs to
    pub customer: String,
}

impl MainRecord {
    /// Create a main record
    pub fn new(id: impl Into<String>, customer: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            customer: customer.into(),
        }
    }
}

/// Line-item record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailRecord {
    /// Identifier of the owning main record
    pub main_id: String,
    /// 1-based line number
    pub line: u32,
    /// Item name
    pub item: String,
    /// Quantity ordered
    pub quantity: u32,
}

impl DetailRecord {
    /// Create a detail record
    pub fn new(
        main_id: impl Into<String>,
        line: u32,
        item: impl Into<String>,
        quantity: u32,
    ) -> Self {
        Self {
            main_id: main_id.into(),
            line,
            item: item.into(),
            quantity,
        }
    }
}

/// Outcome of a save call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReceipt {
    /// Backend that handled the save
    pub backend: Backend,
    /// Role of the DAO that handled the save
    pub role: RecordRole,
    /// Technology-specific rendering of the saved record
    pub rendered: String,
}

/// DAO for main records
pub trait MainRecordDao: Send + Sync {
    /// Backend this DAO writes to
    fn backend(&self) -> Backend;

    /// Save a main record
    fn save(&self, record: &MainRecord) -> Result<SaveReceipt>;
}

/// DAO for detail records
pub trait DetailRecordDao: Send + Sync {
    /// Backend this DAO writes to
    fn backend(&self) -> Backend;

    /// Save a detail record
    fn save(&self, record: &DetailRecord) -> Result<SaveReceipt>;
}

/// Family of record DAOs (abstract factory)
///
/// One creation operation per role. An implementation must wire every role
/// to the backend it reports from [`DaoFamily::backend`].
pub trait DaoFamily: Send + Sync {
    /// Backend shared by every role
    fn backend(&self) -> Backend;

    /// Create the main-record DAO
    fn create_main_record_dao(&self) -> Box<dyn MainRecordDao>;

    /// Create the detail-record DAO
    fn create_detail_record_dao(&self) -> Box<dyn DetailRecordDao>;
}

/// One storage technology and the DAO type it provides for each role
///
/// Adding a technology means implementing this trait and registering it;
/// existing technologies and calling code stay untouched.
pub trait StorageTechnology: Send + Sync + 'static {
    /// Backend both DAOs report
    const BACKEND: Backend;

    /// Main-record DAO of this technology
    type MainDao: MainRecordDao + 'static;

    /// Detail-record DAO of this technology
    type DetailDao: DetailRecordDao + 'static;

    /// Construct the main-record DAO
    fn main_dao() -> Self::MainDao;

    /// Construct the detail-record DAO
    fn detail_dao() -> Self::DetailDao;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_display() {
        const LEDGER: Backend = Backend::new("ledger");
        assert_eq!(LEDGER.to_string(), "ledger");
        assert_eq!(LEDGER.name(), "ledger");
        assert_eq!(LEDGER, Backend::new("ledger"));
    }

    #[test]
    fn test_role_display() {
        assert_eq!(RecordRole::Main.to_string(), "main");
        assert_eq!(RecordRole::Detail.to_string(), "detail");
    }
}
