//! Event record: a scheduled engagement under a signed contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use fieldbook_auth::Role;
use fieldbook_core::{ContractId, DomainError, DomainResult, EmployeeId, Entity, EventId};

use crate::contact::normalize_name;
use crate::employee::Employee;

/// An event attached to a signed contract.
///
/// The support assignment is the 0..1 relation that narrows
/// `event.read`/`event.update` access for Support actors. It may only be set
/// or changed while the event is not yet completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    id: EventId,
    contract: ContractId,
    name: String,
    attendees: u32,
    starts_at: DateTime<Utc>,
    ends_at: DateTime<Utc>,
    location: Option<String>,
    notes: Option<String>,
    assigned_support: Option<EmployeeId>,
}

impl Event {
    /// Create an event. The caller (the [`crate::Directory`]) is responsible
    /// for checking that `contract` exists and is signed.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: EventId,
        contract: ContractId,
        name: &str,
        attendees: u32,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
        location: Option<&str>,
        notes: Option<&str>,
    ) -> DomainResult<Self> {
        if ends_at < starts_at {
            return Err(DomainError::validation("event must end at or after its start"));
        }
        Ok(Self {
            id,
            contract,
            name: normalize_name(name, "event name")?,
            attendees,
            starts_at,
            ends_at,
            location: location.map(|l| l.trim().to_string()).filter(|l| !l.is_empty()),
            notes: notes.map(|n| n.trim().to_string()).filter(|n| !n.is_empty()),
            assigned_support: None,
        })
    }

    pub fn id(&self) -> EventId {
        self.id
    }

    /// Parent contract (the ownership chain goes through it).
    pub fn contract(&self) -> ContractId {
        self.contract
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attendees(&self) -> u32 {
        self.attendees
    }

    pub fn starts_at(&self) -> DateTime<Utc> {
        self.starts_at
    }

    pub fn ends_at(&self) -> DateTime<Utc> {
        self.ends_at
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// The assigned Support contact, if any.
    pub fn assigned_support(&self) -> Option<EmployeeId> {
        self.assigned_support
    }

    /// An event is completed once its window has closed.
    pub fn is_completed(&self, now: DateTime<Utc>) -> bool {
        self.ends_at <= now
    }

    /// Set or change the assigned Support contact.
    ///
    /// `support` must hold the Support role, and the assignment may not
    /// change on a completed event.
    pub fn assign_support(&mut self, support: &Employee, now: DateTime<Utc>) -> DomainResult<()> {
        if self.is_completed(now) {
            return Err(DomainError::invariant(
                "support assignment cannot change on a completed event",
            ));
        }
        if support.role() != Role::Support {
            return Err(DomainError::validation(
                "assigned contact must hold the support role",
            ));
        }
        self.assigned_support = Some(support.id());
        Ok(())
    }

    pub fn update_notes(&mut self, notes: &str) {
        let trimmed = notes.trim();
        self.notes = (!trimmed.is_empty()).then(|| trimmed.to_string());
    }
}

impl Entity for Event {
    type Id = EventId;

    fn id(&self) -> &EventId {
        &self.id
    }
}
