//! The authorization engine.
//!
//! `authorize` is the single synchronous decision point every gated mutation
//! passes through. It is pure: no IO, no mutation, safe to call speculatively
//! (e.g. to decide whether to render a menu option) and safe to call
//! concurrently — it only reads the snapshot behind the [`RelationSource`]
//! the caller hands in.

use serde::Serialize;
use thiserror::Error;

use fieldbook_core::EmployeeId;

use crate::actions::{Action, Target, TargetKind};
use crate::policy::{Condition, Verdict, verdict};
use crate::relations::RelationSource;
use crate::roles::Role;

/// A fully resolved actor for authorization decisions.
///
/// Construction is the identity layer's job: it resolves "who is calling"
/// into a live employee record and builds this from it. The engine trusts
/// that identity without re-verifying credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Actor {
    pub id: EmployeeId,
    pub role: Role,
}

/// Outcome of an authorization request.
///
/// A denial is a normal, expected outcome — a control-flow branch for the
/// caller, never an error. Caller bugs surface as [`AuthzError`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Decision {
    Approved,
    Denied(DenialReason),
}

impl Decision {
    pub fn is_approved(&self) -> bool {
        matches!(self, Decision::Approved)
    }
}

/// Why a request was denied.
///
/// Reasons name the rule or condition that failed. They exist for diagnostic
/// surfacing only and must never steer caller behavior.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
pub enum DenialReason {
    /// The policy table refuses this action for the role outright.
    #[error("role '{role}' may not perform '{action}'")]
    RoleForbidden { role: Role, action: Action },

    /// Ownership condition failed: another employee owns the client chain.
    #[error("actor is not the owning sales contact")]
    NotOwner,

    /// Assignment condition failed: another employee (or nobody) is the
    /// assigned support contact.
    #[error("actor is not the assigned support contact")]
    NotAssigned,

    /// Assignment conditions only ever grant access to Support actors.
    #[error("assignment-based access applies to support actors only")]
    NotSupportRole,

    /// The governing contract is already signed.
    #[error("contract is already signed")]
    ContractSigned,

    /// The governing contract is not signed yet.
    #[error("contract is not signed")]
    ContractUnsigned,

    /// A link in the relation chain could not be resolved.
    #[error("unresolved relation: {0}")]
    UnresolvedRelation(&'static str),
}

/// Caller-contract violation.
///
/// These indicate a bug in the caller (malformed action/target pairing, a
/// target that was never persisted) and must fail loudly. They are never
/// presented as a permission denial and never recovered locally.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("action '{action}' expects a {expected} target, got {actual}")]
    TargetMismatch {
        action: Action,
        expected: TargetKind,
        actual: TargetKind,
    },

    #[error("target record does not exist: {target}")]
    UnknownTarget { target: Target },
}

/// Decide whether `actor` may perform `action` on `target`.
///
/// Blanket verdicts (`Allow`/`Deny`) return without touching `relations` at
/// all. Conditional verdicts resolve the ownership/assignment chain for the
/// target and require every condition to hold, short-circuiting on the first
/// failure. An unresolved link beyond the target itself is a denial, never an
/// error; a missing target record is a caller bug.
pub fn authorize(
    actor: &Actor,
    action: Action,
    target: Target,
    relations: &dyn RelationSource,
) -> Result<Decision, AuthzError> {
    let expected = action.governing_target();
    if target.kind() != expected {
        return Err(AuthzError::TargetMismatch {
            action,
            expected,
            actual: target.kind(),
        });
    }

    let decision = match verdict(actor.role, action) {
        Verdict::Allow => Decision::Approved,
        Verdict::Deny => Decision::Denied(DenialReason::RoleForbidden {
            role: actor.role,
            action,
        }),
        Verdict::AllowIf(conditions) => {
            let mut decision = Decision::Approved;
            for condition in conditions {
                if let Some(reason) = check(actor, action, target, *condition, relations)? {
                    decision = Decision::Denied(reason);
                    break;
                }
            }
            decision
        }
    };

    tracing::debug!(
        actor = %actor.id,
        role = %actor.role,
        %action,
        %target,
        approved = decision.is_approved(),
        "authorization decision"
    );
    Ok(decision)
}

/// Evaluate a single condition. `Ok(None)` means the condition holds.
fn check(
    actor: &Actor,
    action: Action,
    target: Target,
    condition: Condition,
    relations: &dyn RelationSource,
) -> Result<Option<DenialReason>, AuthzError> {
    match condition {
        Condition::Owner => {
            let owner = resolve_owner(action, target, relations)?;
            Ok(match owner {
                Resolved::Found(id) if id == actor.id => None,
                Resolved::Found(_) => Some(DenialReason::NotOwner),
                Resolved::Broken(link) => Some(DenialReason::UnresolvedRelation(link)),
            })
        }

        Condition::Assigned => {
            let Target::Event(id) = target else {
                return Err(mismatch(action, target));
            };
            let event = relations
                .event(id)
                .ok_or(AuthzError::UnknownTarget { target })?;
            if actor.role != Role::Support {
                return Ok(Some(DenialReason::NotSupportRole));
            }
            Ok(match event.assigned_support {
                Some(support) if support == actor.id => None,
                _ => Some(DenialReason::NotAssigned),
            })
        }

        Condition::Unsigned | Condition::Signed => {
            let Target::Contract(id) = target else {
                return Err(mismatch(action, target));
            };
            let contract = relations
                .contract(id)
                .ok_or(AuthzError::UnknownTarget { target })?;
            Ok(match (condition, contract.signed) {
                (Condition::Unsigned, true) => Some(DenialReason::ContractSigned),
                (Condition::Signed, false) => Some(DenialReason::ContractUnsigned),
                _ => None,
            })
        }
    }
}

/// Outcome of walking an ownership chain.
enum Resolved {
    Found(EmployeeId),
    /// The chain broke at the named link.
    Broken(&'static str),
}

/// Walk the ownership chain for the target's kind:
/// Client→owner, Contract→client→owner, Event→contract→client→owner.
///
/// The target record itself must exist (caller contract); any broken link
/// further up the chain is reported as `Broken`, which the engine turns into
/// a denial.
fn resolve_owner(
    action: Action,
    target: Target,
    relations: &dyn RelationSource,
) -> Result<Resolved, AuthzError> {
    let client_id = match target {
        Target::Client(id) => {
            let client = relations
                .client(id)
                .ok_or(AuthzError::UnknownTarget { target })?;
            return Ok(match client.owner {
                Some(owner) => Resolved::Found(owner),
                None => Resolved::Broken("client owner"),
            });
        }
        Target::Contract(id) => {
            relations
                .contract(id)
                .ok_or(AuthzError::UnknownTarget { target })?
                .client
        }
        Target::Event(id) => {
            let event = relations
                .event(id)
                .ok_or(AuthzError::UnknownTarget { target })?;
            match relations.contract(event.contract) {
                Some(contract) => contract.client,
                None => return Ok(Resolved::Broken("event parent contract")),
            }
        }
        Target::Unattached => return Err(mismatch(action, target)),
    };

    Ok(match relations.client(client_id) {
        Some(client) => match client.owner {
            Some(owner) => Resolved::Found(owner),
            None => Resolved::Broken("client owner"),
        },
        None => Resolved::Broken("contract parent client"),
    })
}

fn mismatch(action: Action, target: Target) -> AuthzError {
    AuthzError::TargetMismatch {
        action,
        expected: action.governing_target(),
        actual: target.kind(),
    }
}
