//! Legacy payment backends
//!
//! Neither backend speaks the `PaymentProcessor` contract. The cents
//! gateway takes integer hundredths; the ledger takes integer thousandths
//! plus a memo and answers with an entry number. Each has its own error
//! type. The sandbox implementations keep a record of what they accepted.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;
use uuid::Uuid;

/// Failure reported by a cents gateway
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayFault {
    /// The charge exceeds the per-payment limit
    #[error("charge of {requested} cents exceeds limit of {limit} cents")]
    LimitExceeded {
        /// Cents requested
        requested: u64,
        /// Per-payment limit in cents
        limit: u64,
    },
    /// Zero-value charges are refused
    #[error("zero-value charge refused")]
    ZeroCharge,
}

/// Failure reported by a milli-unit ledger
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerFault {
    /// The ledger is closed for posting
    #[error("ledger is closed")]
    Closed,
    /// The memo was rejected
    #[error("memo must not be empty")]
    EmptyMemo,
}

/// Gateway charging in hundredths of a major unit
pub trait CentsGateway: Send + Sync {
    /// Submit a charge; returns the gateway's reference
    fn submit_cents(&self, cents: u64) -> Result<String, GatewayFault>;
}

/// Ledger posting in thousandths of a major unit
pub trait MilliLedger: Send + Sync {
    /// Post an entry; returns the entry number
    fn post_millis(&self, millis: u64, memo: &str) -> Result<u64, LedgerFault>;
}

/// In-process cents gateway with a per-payment limit
#[derive(Debug)]
pub struct SandboxCentsGateway {
    limit: u64,
    accepted: Mutex<Vec<u64>>,
}

impl SandboxCentsGateway {
    /// Gateway refusing charges above `limit` cents
    pub fn new(limit: u64) -> Self {
        Self {
            limit,
            accepted: Mutex::new(Vec::new()),
        }
    }

    /// Charges accepted so far, in cents
    pub fn accepted(&self) -> Vec<u64> {
        self.accepted.lock().clone()
    }
}

impl Default for SandboxCentsGateway {
    fn default() -> Self {
        Self::new(1_000_000)
    }
}

impl CentsGateway for SandboxCentsGateway {
    fn submit_cents(&self, cents: u64) -> Result<String, GatewayFault> {
        if cents == 0 {
            return Err(GatewayFault::ZeroCharge);
        }
        if cents > self.limit {
            return Err(GatewayFault::LimitExceeded {
                requested: cents,
                limit: self.limit,
            });
        }
        self.accepted.lock().push(cents);
        Ok(format!("chg-{}", Uuid::new_v4()))
    }
}

/// In-process ledger numbering entries from 1
#[derive(Debug)]
pub struct SandboxMilliLedger {
    next_entry: AtomicU64,
    open: bool,
    posted: Mutex<Vec<(u64, String)>>,
}

impl SandboxMilliLedger {
    /// Open ledger
    pub fn new() -> Self {
        Self {
            next_entry: AtomicU64::new(1),
            open: true,
            posted: Mutex::new(Vec::new()),
        }
    }

    /// Ledger refusing every post
    pub fn closed() -> Self {
        Self {
            open: false,
            ..Self::new()
        }
    }

    /// Entries posted so far, as (millis, memo)
    pub fn posted(&self) -> Vec<(u64, String)> {
        self.posted.lock().clone()
    }
}

impl Default for SandboxMilliLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl MilliLedger for SandboxMilliLedger {
    fn post_millis(&self, millis: u64, memo: &str) -> Result<u64, LedgerFault> {
        if !self.open {
            return Err(LedgerFault::Closed);
        }
        if memo.trim().is_empty() {
            return Err(LedgerFault::EmptyMemo);
        }
        self.posted.lock().push((millis, memo.to_string()));
        Ok(self.next_entry.fetch_add(1, Ordering::SeqCst))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cents_gateway_limits() {
        let gateway = SandboxCentsGateway::new(500);
        let reference = gateway.submit_cents(499).unwrap();
        assert!(reference.starts_with("chg-"));
        assert_eq!(
            gateway.submit_cents(501),
            Err(GatewayFault::LimitExceeded {
                requested: 501,
                limit: 500
            })
        );
        assert_eq!(gateway.submit_cents(0), Err(GatewayFault::ZeroCharge));
        assert_eq!(gateway.accepted(), vec![499]);
    }

    #[test]
    fn test_ledger_numbers_entries() {
        let ledger = SandboxMilliLedger::new();
        assert_eq!(ledger.post_millis(1_500, "first").unwrap(), 1);
        assert_eq!(ledger.post_millis(0, "second").unwrap(), 2);
        assert_eq!(ledger.post_millis(10, " "), Err(LedgerFault::EmptyMemo));
        assert_eq!(ledger.posted().len(), 2);

        assert_eq!(
            SandboxMilliLedger::closed().post_millis(1, "x"),
            Err(LedgerFault::Closed)
        );
    }
}
