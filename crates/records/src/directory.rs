//! In-memory record store.
//!
//! Intended for tests/dev and as the reference [`RelationSource`]
//! implementation; a persistent store would implement the same surface.
//! Not synchronized: the caller owns snapshot consistency around
//! read-then-decide sequences.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use fieldbook_auth::{
    Actor, ClientRelations, ContractRelations, EventRelations, RelationSource, Role,
};
use fieldbook_core::{
    ClientId, ContractId, DomainError, DomainResult, EmployeeId, EventId,
};

use crate::client::Client;
use crate::contract::Contract;
use crate::employee::Employee;
use crate::event::Event;

/// Profile of an employee to onboard.
#[derive(Debug, Clone, Copy)]
pub struct NewEmployee<'a> {
    pub full_name: &'a str,
    pub email: &'a str,
    pub phone: Option<&'a str>,
    pub role: Role,
}

/// HashMap-backed store of the four record types.
#[derive(Debug, Default)]
pub struct Directory {
    employees: HashMap<EmployeeId, Employee>,
    clients: HashMap<ClientId, Client>,
    contracts: HashMap<ContractId, Contract>,
    events: HashMap<EventId, Event>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_employees(&self) -> bool {
        !self.employees.is_empty()
    }

    // ── Onboarding ───────────────────────────────────────────────────────

    /// Onboard an employee.
    ///
    /// The very first employee in an empty store is the bootstrap path: no
    /// actor is required and the role is auto-assigned Management, whatever
    /// was requested. Every later onboarding requires a Management actor.
    pub fn onboard_employee(
        &mut self,
        actor: Option<&Actor>,
        profile: NewEmployee<'_>,
    ) -> DomainResult<EmployeeId> {
        let role = if self.employees.is_empty() {
            Role::Management
        } else {
            match actor {
                Some(actor) if actor.role == Role::Management => profile.role,
                _ => return Err(DomainError::Unauthorized),
            }
        };

        let employee = Employee::new(
            EmployeeId::new(),
            profile.full_name,
            profile.email,
            profile.phone,
            role,
        )?;

        if self.employees.values().any(|e| e.email() == employee.email()) {
            return Err(DomainError::conflict("an employee with this email already exists"));
        }

        let id = employee.id();
        self.employees.insert(id, employee);
        Ok(id)
    }

    // ── Creation ─────────────────────────────────────────────────────────

    /// Create a client owned by `owner` (must exist and hold Sales).
    pub fn create_client(
        &mut self,
        owner: EmployeeId,
        full_name: &str,
        email: &str,
        phone: Option<&str>,
        company_name: Option<&str>,
        now: DateTime<Utc>,
    ) -> DomainResult<ClientId> {
        let owner = self.employees.get(&owner).ok_or(DomainError::NotFound)?;
        let client = Client::new(ClientId::new(), full_name, email, phone, company_name, owner, now)?;
        let id = client.id();
        self.clients.insert(id, client);
        Ok(id)
    }

    /// Create a contract under an existing client.
    pub fn create_contract(
        &mut self,
        client: ClientId,
        total_amount: i64,
        remaining_amount: i64,
        now: DateTime<Utc>,
    ) -> DomainResult<ContractId> {
        if !self.clients.contains_key(&client) {
            return Err(DomainError::NotFound);
        }
        let contract = Contract::new(ContractId::new(), client, total_amount, remaining_amount, now)?;
        let id = contract.id();
        self.contracts.insert(id, contract);
        Ok(id)
    }

    /// Create an event under an existing, signed contract.
    #[allow(clippy::too_many_arguments)]
    pub fn create_event(
        &mut self,
        contract: ContractId,
        name: &str,
        attendees: u32,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
        location: Option<&str>,
        notes: Option<&str>,
    ) -> DomainResult<EventId> {
        let parent = self.contracts.get(&contract).ok_or(DomainError::NotFound)?;
        if !parent.is_signed() {
            return Err(DomainError::invariant("events require a signed contract"));
        }
        let event = Event::new(EventId::new(), contract, name, attendees, starts_at, ends_at, location, notes)?;
        let id = event.id();
        self.events.insert(id, event);
        Ok(id)
    }

    // ── Lookup ───────────────────────────────────────────────────────────

    pub fn employee(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.get(&id)
    }

    pub fn client(&self, id: ClientId) -> Option<&Client> {
        self.clients.get(&id)
    }

    pub fn contract(&self, id: ContractId) -> Option<&Contract> {
        self.contracts.get(&id)
    }

    pub fn event(&self, id: EventId) -> Option<&Event> {
        self.events.get(&id)
    }

    // ── Gated mutations (authorize at the call site first) ───────────────

    pub fn update_client_contact(
        &mut self,
        id: ClientId,
        full_name: Option<&str>,
        email: Option<&str>,
        phone: Option<&str>,
        company_name: Option<&str>,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        let client = self.clients.get_mut(&id).ok_or(DomainError::NotFound)?;
        client.update_contact(full_name, email, phone, company_name, now)
    }

    /// Reassign a client to a different Sales owner.
    pub fn reassign_client_owner(
        &mut self,
        id: ClientId,
        new_owner: EmployeeId,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        let new_owner = self
            .employees
            .get(&new_owner)
            .cloned()
            .ok_or(DomainError::NotFound)?;
        let client = self.clients.get_mut(&id).ok_or(DomainError::NotFound)?;
        client.reassign_owner(&new_owner, now)
    }

    /// Flip a contract's one-way `signed` flag.
    pub fn sign_contract(&mut self, id: ContractId) -> DomainResult<&Contract> {
        let contract = self.contracts.get_mut(&id).ok_or(DomainError::NotFound)?;
        contract.sign()?;
        Ok(contract)
    }

    pub fn record_payment(&mut self, id: ContractId, amount: i64) -> DomainResult<()> {
        let contract = self.contracts.get_mut(&id).ok_or(DomainError::NotFound)?;
        contract.record_payment(amount)
    }

    /// Set or change an event's Support contact.
    pub fn assign_event_support(
        &mut self,
        id: EventId,
        support: EmployeeId,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        let support = self
            .employees
            .get(&support)
            .cloned()
            .ok_or(DomainError::NotFound)?;
        let event = self.events.get_mut(&id).ok_or(DomainError::NotFound)?;
        event.assign_support(&support, now)
    }

    pub fn update_event_notes(&mut self, id: EventId, notes: &str) -> DomainResult<()> {
        let event = self.events.get_mut(&id).ok_or(DomainError::NotFound)?;
        event.update_notes(notes);
        Ok(())
    }

    // ── Relation accessors (UI-gating and engine lookups alike) ──────────

    /// Owning Sales employee of a client.
    pub fn client_owner(&self, id: ClientId) -> Option<EmployeeId> {
        let owner = self.clients.get(&id)?.owner();
        self.employees.contains_key(&owner).then_some(owner)
    }

    /// Owning Sales employee of a contract, derived through its client.
    pub fn contract_owner(&self, id: ContractId) -> Option<EmployeeId> {
        self.client_owner(self.contracts.get(&id)?.client())
    }

    /// Owning Sales employee of an event, derived through its contract.
    pub fn event_owner(&self, id: EventId) -> Option<EmployeeId> {
        self.contract_owner(self.events.get(&id)?.contract())
    }

    /// Assigned Support contact of an event.
    pub fn assigned_support_of(&self, id: EventId) -> Option<EmployeeId> {
        let support = self.events.get(&id)?.assigned_support()?;
        self.employees.contains_key(&support).then_some(support)
    }
}

impl RelationSource for Directory {
    fn client(&self, id: ClientId) -> Option<ClientRelations> {
        let client = self.clients.get(&id)?;
        // A dangling owner reference reads as an unresolved relation.
        let owner = client.owner();
        Some(ClientRelations {
            owner: self.employees.contains_key(&owner).then_some(owner),
        })
    }

    fn contract(&self, id: ContractId) -> Option<ContractRelations> {
        let contract = self.contracts.get(&id)?;
        Some(ContractRelations {
            client: contract.client(),
            signed: contract.is_signed(),
        })
    }

    fn event(&self, id: EventId) -> Option<EventRelations> {
        let event = self.events.get(&id)?;
        Some(EventRelations {
            contract: event.contract(),
            assigned_support: self.assigned_support_of(id),
        })
    }
}
