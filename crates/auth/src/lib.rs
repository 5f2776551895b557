//! `fieldbook-auth` — pure authorization core for departmental records.
//!
//! This crate decides, for a requested `(actor, action, target)` triple,
//! whether the acting employee may perform the operation. It is intentionally
//! decoupled from storage and transport: relation facts (ownership chains,
//! support assignment, signed state) are read through the [`RelationSource`]
//! seam the entity store implements.

pub mod actions;
pub mod authorize;
pub mod policy;
pub mod relations;
pub mod roles;

pub use actions::{Action, ClientAction, ContractAction, EntityKind, EventAction, Target, TargetKind};
pub use authorize::{Actor, AuthzError, Decision, DenialReason, authorize};
pub use policy::{Condition, Verdict, verdict};
pub use relations::{ClientRelations, ContractRelations, EventRelations, RelationSource};
pub use roles::Role;
