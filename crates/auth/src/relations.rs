//! Relation lookup seam between the engine and the entity store.

use fieldbook_core::{ClientId, ContractId, EmployeeId, EventId};

/// Relation facts of a client record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientRelations {
    /// Owning Sales employee, if the reference resolves.
    pub owner: Option<EmployeeId>,
}

/// Relation facts of a contract record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractRelations {
    pub client: ClientId,
    pub signed: bool,
}

/// Relation facts of an event record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventRelations {
    pub contract: ContractId,
    /// Assigned Support employee, if any.
    pub assigned_support: Option<EmployeeId>,
}

/// Read-only relation lookups used to evaluate conditional verdicts.
///
/// Implemented by the entity store. Returning `None` from a method means the
/// record itself does not exist; an existing record whose *link* cannot be
/// resolved (e.g. a client whose owner reference dangles) reports that through
/// the `Option` fields of the returned facts instead. The engine turns the
/// former into a loud caller error for the request target and the latter into
/// a denial.
pub trait RelationSource {
    fn client(&self, id: ClientId) -> Option<ClientRelations>;
    fn contract(&self, id: ContractId) -> Option<ContractRelations>;
    fn event(&self, id: EventId) -> Option<EventRelations>;
}
