//! Contract record: an agreement with a client.
//!
//! Amounts are integer minor currency units (cents). The owning Sales
//! employee is derived through the parent client and never stored here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use fieldbook_core::{ClientId, ContractId, DomainError, DomainResult, Entity};

/// A contract attached to a client.
///
/// # Invariants
/// - `total_amount > 0` and `0 ≤ remaining_amount ≤ total_amount`.
/// - `signed` transitions false→true exactly once and never reverses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    id: ContractId,
    client: ClientId,
    total_amount: i64,
    remaining_amount: i64,
    signed: bool,
    created_at: DateTime<Utc>,
}

impl Contract {
    pub fn new(
        id: ContractId,
        client: ClientId,
        total_amount: i64,
        remaining_amount: i64,
        now: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if total_amount <= 0 {
            return Err(DomainError::validation("total amount must be positive"));
        }
        if remaining_amount < 0 || remaining_amount > total_amount {
            return Err(DomainError::validation(
                "remaining amount must be between zero and the total amount",
            ));
        }
        Ok(Self {
            id,
            client,
            total_amount,
            remaining_amount,
            signed: false,
            created_at: now,
        })
    }

    pub fn id(&self) -> ContractId {
        self.id
    }

    /// Parent client (the ownership chain goes through it).
    pub fn client(&self) -> ClientId {
        self.client
    }

    pub fn total_amount(&self) -> i64 {
        self.total_amount
    }

    pub fn remaining_amount(&self) -> i64 {
        self.remaining_amount
    }

    pub fn is_signed(&self) -> bool {
        self.signed
    }

    pub fn is_fully_paid(&self) -> bool {
        self.remaining_amount == 0
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Flip the one-way `signed` flag.
    ///
    /// The policy layer already refuses a second Sales `sign` request; this
    /// is the record-level backstop for every other path.
    pub fn sign(&mut self) -> DomainResult<()> {
        if self.signed {
            return Err(DomainError::invariant("contract is already signed"));
        }
        self.signed = true;
        Ok(())
    }

    /// Record a payment against the remaining amount.
    pub fn record_payment(&mut self, amount: i64) -> DomainResult<()> {
        if amount <= 0 {
            return Err(DomainError::validation("payment amount must be positive"));
        }
        if amount > self.remaining_amount {
            return Err(DomainError::validation("payment exceeds the remaining amount"));
        }
        self.remaining_amount -= amount;
        Ok(())
    }
}

impl Entity for Contract {
    type Id = ContractId;

    fn id(&self) -> &ContractId {
        &self.id
    }
}
