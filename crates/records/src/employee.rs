//! Employee record: the acting staff member.

use serde::{Deserialize, Serialize};

use fieldbook_auth::{Actor, Role};
use fieldbook_core::{DomainResult, EmployeeId, Entity};

use crate::contact::{normalize_email, normalize_name, normalize_phone};

/// A staff member of the department.
///
/// The role is immutable once onboarded; if role reassignment is ever
/// supported it happens outside this core. Credentials live in the identity
/// layer, never on this record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    id: EmployeeId,
    full_name: String,
    email: String,
    phone: Option<String>,
    role: Role,
}

impl Employee {
    pub fn new(
        id: EmployeeId,
        full_name: &str,
        email: &str,
        phone: Option<&str>,
        role: Role,
    ) -> DomainResult<Self> {
        Ok(Self {
            id,
            full_name: normalize_name(full_name, "full name")?,
            email: normalize_email(email)?,
            phone: phone.map(normalize_phone).transpose()?,
            role,
        })
    }

    pub fn id(&self) -> EmployeeId {
        self.id
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// The resolved identity handed to `authorize`.
    pub fn actor(&self) -> Actor {
        Actor { id: self.id, role: self.role }
    }
}

impl Entity for Employee {
    type Id = EmployeeId;

    fn id(&self) -> &EmployeeId {
        &self.id
    }
}
