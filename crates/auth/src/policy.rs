//! The policy rule table.
//!
//! A fixed mapping from `(role, action)` to a base [`Verdict`]. The table is
//! declarative and instance-free: relation facts (who owns what, what is
//! signed) are resolved by the engine in [`crate::authorize`], never here.

use crate::actions::{Action, ClientAction, ContractAction, EventAction};
use crate::roles::Role;

/// A relation-dependent requirement attached to a conditional verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// Actor must be the owning Sales employee at the end of the target's
    /// client chain (Client→owner, Contract→client→owner,
    /// Event→contract→client→owner).
    Owner,
    /// Actor must be the Support employee assigned to the target event.
    Assigned,
    /// The governing contract must not be signed yet.
    Unsigned,
    /// The governing contract must already be signed.
    Signed,
}

/// Base verdict for a `(role, action)` cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Blanket grant: approved without consulting relation data.
    Allow,
    /// Blanket refusal: denied without consulting relation data.
    Deny,
    /// Conditional grant: every listed condition must hold.
    ///
    /// Conditions are evaluated left to right with short-circuit on the first
    /// failure; ownership is always listed first.
    AllowIf(&'static [Condition]),
}

/// Look up the base verdict for `(role, action)`.
///
/// Pure function of its inputs; no state, no side effects.
pub const fn verdict(role: Role, action: Action) -> Verdict {
    use Condition::{Assigned, Owner, Signed, Unsigned};

    match (role, action) {
        // Management holds a blanket grant on every action, including
        // reassign_owner, sign and assign_support.
        (Role::Management, _) => Verdict::Allow,

        // Sales: full read access; writes narrowed to the records they own.
        (Role::Sales, Action::Client(ClientAction::Create)) => Verdict::Allow,
        (Role::Sales, Action::Client(ClientAction::Read)) => Verdict::Allow,
        (Role::Sales, Action::Client(ClientAction::Update)) => Verdict::AllowIf(&[Owner]),
        (Role::Sales, Action::Client(ClientAction::ReassignOwner)) => Verdict::Deny,
        (Role::Sales, Action::Contract(ContractAction::Create)) => Verdict::Deny,
        (Role::Sales, Action::Contract(ContractAction::Read)) => Verdict::Allow,
        (Role::Sales, Action::Contract(ContractAction::Update)) => {
            Verdict::AllowIf(&[Owner, Unsigned])
        }
        // Signing is owner-gated, and re-signing an already-signed contract
        // is refused at this layer rather than left to the record invariant.
        (Role::Sales, Action::Contract(ContractAction::Sign)) => {
            Verdict::AllowIf(&[Owner, Unsigned])
        }
        // Event creation targets the parent contract: it must be owned by the
        // actor and already signed.
        (Role::Sales, Action::Event(EventAction::Create)) => Verdict::AllowIf(&[Owner, Signed]),
        (Role::Sales, Action::Event(EventAction::Read)) => Verdict::Allow,
        (Role::Sales, Action::Event(EventAction::Update)) => Verdict::Deny,
        (Role::Sales, Action::Event(EventAction::AssignSupport)) => Verdict::Deny,

        // Support: read access to clients/contracts; event work narrowed to
        // the events they are assigned to.
        (Role::Support, Action::Client(ClientAction::Read)) => Verdict::Allow,
        (Role::Support, Action::Client(_)) => Verdict::Deny,
        (Role::Support, Action::Contract(ContractAction::Read)) => Verdict::Allow,
        (Role::Support, Action::Contract(_)) => Verdict::Deny,
        (Role::Support, Action::Event(EventAction::Read)) => Verdict::AllowIf(&[Assigned]),
        (Role::Support, Action::Event(EventAction::Update)) => Verdict::AllowIf(&[Assigned]),
        (Role::Support, Action::Event(_)) => Verdict::Deny,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::Action as A;

    #[test]
    fn management_is_blanket_allow_everywhere() {
        for action in Action::ALL {
            assert_eq!(verdict(Role::Management, action), Verdict::Allow, "{action}");
        }
    }

    #[test]
    fn sales_client_rules() {
        assert_eq!(verdict(Role::Sales, A::Client(ClientAction::Create)), Verdict::Allow);
        assert_eq!(verdict(Role::Sales, A::Client(ClientAction::Read)), Verdict::Allow);
        assert_eq!(
            verdict(Role::Sales, A::Client(ClientAction::Update)),
            Verdict::AllowIf(&[Condition::Owner])
        );
        assert_eq!(verdict(Role::Sales, A::Client(ClientAction::ReassignOwner)), Verdict::Deny);
    }

    #[test]
    fn sales_contract_rules() {
        assert_eq!(verdict(Role::Sales, A::Contract(ContractAction::Create)), Verdict::Deny);
        assert_eq!(verdict(Role::Sales, A::Contract(ContractAction::Read)), Verdict::Allow);
        assert_eq!(
            verdict(Role::Sales, A::Contract(ContractAction::Update)),
            Verdict::AllowIf(&[Condition::Owner, Condition::Unsigned])
        );
        assert_eq!(
            verdict(Role::Sales, A::Contract(ContractAction::Sign)),
            Verdict::AllowIf(&[Condition::Owner, Condition::Unsigned])
        );
    }

    #[test]
    fn sales_event_rules() {
        assert_eq!(
            verdict(Role::Sales, A::Event(EventAction::Create)),
            Verdict::AllowIf(&[Condition::Owner, Condition::Signed])
        );
        assert_eq!(verdict(Role::Sales, A::Event(EventAction::Read)), Verdict::Allow);
        assert_eq!(verdict(Role::Sales, A::Event(EventAction::Update)), Verdict::Deny);
        assert_eq!(verdict(Role::Sales, A::Event(EventAction::AssignSupport)), Verdict::Deny);
    }

    #[test]
    fn support_rules() {
        assert_eq!(verdict(Role::Support, A::Client(ClientAction::Read)), Verdict::Allow);
        assert_eq!(verdict(Role::Support, A::Client(ClientAction::Create)), Verdict::Deny);
        assert_eq!(verdict(Role::Support, A::Client(ClientAction::Update)), Verdict::Deny);
        assert_eq!(verdict(Role::Support, A::Client(ClientAction::ReassignOwner)), Verdict::Deny);

        assert_eq!(verdict(Role::Support, A::Contract(ContractAction::Read)), Verdict::Allow);
        assert_eq!(verdict(Role::Support, A::Contract(ContractAction::Create)), Verdict::Deny);
        assert_eq!(verdict(Role::Support, A::Contract(ContractAction::Update)), Verdict::Deny);
        assert_eq!(verdict(Role::Support, A::Contract(ContractAction::Sign)), Verdict::Deny);

        assert_eq!(
            verdict(Role::Support, A::Event(EventAction::Read)),
            Verdict::AllowIf(&[Condition::Assigned])
        );
        assert_eq!(
            verdict(Role::Support, A::Event(EventAction::Update)),
            Verdict::AllowIf(&[Condition::Assigned])
        );
        assert_eq!(verdict(Role::Support, A::Event(EventAction::Create)), Verdict::Deny);
        assert_eq!(verdict(Role::Support, A::Event(EventAction::AssignSupport)), Verdict::Deny);
    }

    #[test]
    fn conditional_verdicts_check_ownership_first() {
        for role in Role::ALL {
            for action in Action::ALL {
                if let Verdict::AllowIf(conditions) = verdict(role, action) {
                    assert!(!conditions.is_empty());
                    if conditions.contains(&Condition::Owner) {
                        assert_eq!(conditions[0], Condition::Owner, "{role} {action}");
                    }
                }
            }
        }
    }
}
