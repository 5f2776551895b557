//! Request vocabulary: actions, record kinds, and targets.
//!
//! An action is always tagged with the record type it operates on, so a
//! `(role, action)` pair fully keys the policy table and a malformed
//! action/target pairing can be rejected loudly instead of mis-evaluated.

use serde::{Deserialize, Serialize};

use fieldbook_core::{ClientId, ContractId, EventId};

/// The record types governed by the policy table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Client,
    Contract,
    Event,
}

/// Operations on client records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientAction {
    Create,
    Read,
    Update,
    /// Hand the client to a different Sales owner.
    ReassignOwner,
}

/// Operations on contract records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractAction {
    Create,
    Read,
    Update,
    /// Flip the one-way `signed` flag.
    Sign,
}

/// Operations on event records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    Create,
    Read,
    Update,
    /// Set or change the assigned Support contact.
    AssignSupport,
}

/// A requested operation, tagged by the record type it applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Client(ClientAction),
    Contract(ContractAction),
    Event(EventAction),
}

impl Action {
    pub const fn entity_kind(self) -> EntityKind {
        match self {
            Action::Client(_) => EntityKind::Client,
            Action::Contract(_) => EntityKind::Contract,
            Action::Event(_) => EntityKind::Event,
        }
    }

    /// The target kind `authorize` expects for this action.
    ///
    /// Creation has no instance of its own kind yet, so creation requests
    /// target the governing parent record: contract creation targets the
    /// parent client, event creation the parent contract. Client creation has
    /// no governing record at all.
    pub const fn governing_target(self) -> TargetKind {
        match self {
            Action::Client(ClientAction::Create) => TargetKind::Unattached,
            Action::Client(_) => TargetKind::Client,
            Action::Contract(ContractAction::Create) => TargetKind::Client,
            Action::Contract(_) => TargetKind::Contract,
            Action::Event(EventAction::Create) => TargetKind::Contract,
            Action::Event(_) => TargetKind::Event,
        }
    }

    /// Stable dotted name (`"contract.sign"`), used in reasons and logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Action::Client(ClientAction::Create) => "client.create",
            Action::Client(ClientAction::Read) => "client.read",
            Action::Client(ClientAction::Update) => "client.update",
            Action::Client(ClientAction::ReassignOwner) => "client.reassign_owner",
            Action::Contract(ContractAction::Create) => "contract.create",
            Action::Contract(ContractAction::Read) => "contract.read",
            Action::Contract(ContractAction::Update) => "contract.update",
            Action::Contract(ContractAction::Sign) => "contract.sign",
            Action::Event(EventAction::Create) => "event.create",
            Action::Event(EventAction::Read) => "event.read",
            Action::Event(EventAction::Update) => "event.update",
            Action::Event(EventAction::AssignSupport) => "event.assign_support",
        }
    }

    /// Every action in the table, for exhaustive tests.
    pub const ALL: [Action; 12] = [
        Action::Client(ClientAction::Create),
        Action::Client(ClientAction::Read),
        Action::Client(ClientAction::Update),
        Action::Client(ClientAction::ReassignOwner),
        Action::Contract(ContractAction::Create),
        Action::Contract(ContractAction::Read),
        Action::Contract(ContractAction::Update),
        Action::Contract(ContractAction::Sign),
        Action::Event(EventAction::Create),
        Action::Event(EventAction::Read),
        Action::Event(EventAction::Update),
        Action::Event(EventAction::AssignSupport),
    ];
}

impl core::fmt::Display for Action {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The record instance an action is requested against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// Creation request with no governing parent record (`client.create`).
    Unattached,
    Client(ClientId),
    Contract(ContractId),
    Event(EventId),
}

impl Target {
    pub const fn kind(self) -> TargetKind {
        match self {
            Target::Unattached => TargetKind::Unattached,
            Target::Client(_) => TargetKind::Client,
            Target::Contract(_) => TargetKind::Contract,
            Target::Event(_) => TargetKind::Event,
        }
    }
}

impl core::fmt::Display for Target {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Target::Unattached => f.write_str("(unattached)"),
            Target::Client(id) => write!(f, "client {id}"),
            Target::Contract(id) => write!(f, "contract {id}"),
            Target::Event(id) => write!(f, "event {id}"),
        }
    }
}

/// Kind of a [`Target`], for contract checks and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    Unattached,
    Client,
    Contract,
    Event,
}

impl core::fmt::Display for TargetKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TargetKind::Unattached => f.write_str("unattached"),
            TargetKind::Client => f.write_str("client"),
            TargetKind::Contract => f.write_str("contract"),
            TargetKind::Event => f.write_str("event"),
        }
    }
}
