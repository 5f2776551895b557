//! Client record: a business contact owned by a Sales employee.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use fieldbook_auth::Role;
use fieldbook_core::{ClientId, DomainError, DomainResult, EmployeeId, Entity};

use crate::contact::{normalize_email, normalize_name, normalize_phone};
use crate::employee::Employee;

/// A client of the department.
///
/// Every client has exactly one owning Sales employee at any time. Ownership
/// changes only through [`Client::reassign_owner`], which is gated by the
/// `client.reassign_owner` action (Management only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    id: ClientId,
    full_name: String,
    email: String,
    phone: Option<String>,
    company_name: Option<String>,
    owner: EmployeeId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Client {
    /// Create a client owned by `owner`, who must hold the Sales role at
    /// assignment time.
    pub fn new(
        id: ClientId,
        full_name: &str,
        email: &str,
        phone: Option<&str>,
        company_name: Option<&str>,
        owner: &Employee,
        now: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if owner.role() != Role::Sales {
            return Err(DomainError::validation("client owner must hold the sales role"));
        }
        Ok(Self {
            id,
            full_name: normalize_name(full_name, "full name")?,
            email: normalize_email(email)?,
            phone: phone.map(normalize_phone).transpose()?,
            company_name: company_name.map(|c| c.trim().to_string()).filter(|c| !c.is_empty()),
            owner: owner.id(),
            created_at: now,
            updated_at: now,
        })
    }

    pub fn id(&self) -> ClientId {
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

    pub fn company_name(&self) -> Option<&str> {
        self.company_name.as_deref()
    }

    /// The owning Sales employee.
    pub fn owner(&self) -> EmployeeId {
        self.owner
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Update contact fields. `None` keeps the existing value.
    pub fn update_contact(
        &mut self,
        full_name: Option<&str>,
        email: Option<&str>,
        phone: Option<&str>,
        company_name: Option<&str>,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        if let Some(full_name) = full_name {
            self.full_name = normalize_name(full_name, "full name")?;
        }
        if let Some(email) = email {
            self.email = normalize_email(email)?;
        }
        if let Some(phone) = phone {
            self.phone = Some(normalize_phone(phone)?);
        }
        if let Some(company_name) = company_name {
            let trimmed = company_name.trim();
            self.company_name = (!trimmed.is_empty()).then(|| trimmed.to_string());
        }
        self.updated_at = now;
        Ok(())
    }

    /// Hand the client to a different owner, who must hold the Sales role.
    pub fn reassign_owner(&mut self, new_owner: &Employee, now: DateTime<Utc>) -> DomainResult<()> {
        if new_owner.role() != Role::Sales {
            return Err(DomainError::validation("client owner must hold the sales role"));
        }
        self.owner = new_owner.id();
        self.updated_at = now;
        Ok(())
    }
}

impl Entity for Client {
    type Id = ClientId;

    fn id(&self) -> &ClientId {
        &self.id
    }
}
