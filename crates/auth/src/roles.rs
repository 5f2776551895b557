//! Department roles.

use serde::{Deserialize, Serialize};

/// Department role of an employee.
///
/// This is a closed set: the policy table is keyed by it, so adding a role
/// means revisiting every rule. Role→permission mapping lives in
/// [`crate::policy`], never on the employee record itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Back-office management: blanket grant on every record type.
    Management,
    /// Sales staff: own a portfolio of clients and their contracts.
    Sales,
    /// Support staff: work the events they are assigned to.
    Support,
}

impl Role {
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Management => "management",
            Role::Sales => "sales",
            Role::Support => "support",
        }
    }

    /// All roles, in table order. Handy for exhaustive tests.
    pub const ALL: [Role; 3] = [Role::Management, Role::Sales, Role::Support];
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
