//! Append-only event log
//!
//! Deposits and withdrawals emit events for external observers. The log is
//! write-only from the core's perspective: the ledger never reads it back.

use chrono::{DateTime, Utc};
use ledgerpay_wallet_core::Address;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use uuid::Uuid;

/// Event kinds emitted by the wallet rule-set
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum EventKind {
    Deposit,
    Withdrawal,
}

/// An immutable event record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub sequence: u64,
    pub kind: EventKind,
    pub amount: u128,
    pub counterparty: Address,
    pub timestamp: DateTime<Utc>,
}

/// Append-only, externally observable event stream
pub struct EventLog {
    events: Mutex<Vec<Event>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    /// Append an event and return the stored record
    pub fn append(&self, kind: EventKind, amount: u128, counterparty: &str) -> Event {
        let mut events = self.events.lock().unwrap();
        let event = Event {
            id: Uuid::new_v4().to_string(),
            sequence: events.len() as u64,
            kind,
            amount,
            counterparty: counterparty.to_string(),
            timestamp: Utc::now(),
        };
        tracing::info!(
            sequence = event.sequence,
            kind = ?event.kind,
            amount = event.amount,
            counterparty = %event.counterparty,
            "ledger event emitted"
        );
        events.push(event.clone());
        event
    }

    /// Snapshot of the full event sequence
    pub fn snapshot(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_append_in_order() {
        let log = EventLog::new();
        log.append(EventKind::Deposit, 100, "0xaaa");
        log.append(EventKind::Withdrawal, 40, "0xbbb");

        let events = log.snapshot();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].sequence, 0);
        assert_eq!(events[1].sequence, 1);
        assert_eq!(events[0].kind, EventKind::Deposit);
        assert_eq!(events[1].kind, EventKind::Withdrawal);
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let log = EventLog::new();
        log.append(EventKind::Deposit, 100, "0xaaa");

        let snapshot = log.snapshot();
        log.append(EventKind::Deposit, 200, "0xaaa");

        assert_eq!(snapshot.len(), 1);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_empty_log() {
        let log = EventLog::new();
        assert!(log.is_empty());
        assert!(log.snapshot().is_empty());
    }
}
