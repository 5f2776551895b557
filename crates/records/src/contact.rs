//! Contact-field validation shared by employee and client records.

use fieldbook_core::{DomainError, DomainResult};

/// Normalize and validate an email address (trimmed, lowercased).
///
/// Deliberately loose: format policing beyond "has a local part and a domain"
/// belongs to whatever captures the address, not the domain layer.
pub fn normalize_email(email: &str) -> DomainResult<String> {
    let email = email.trim().to_lowercase();
    let valid = matches!(email.split_once('@'), Some((local, domain)) if !local.is_empty() && domain.contains('.'));
    if !valid {
        return Err(DomainError::validation("invalid email format"));
    }
    Ok(email)
}

/// Normalize and validate a phone number (digits, spaces and hyphens).
pub fn normalize_phone(phone: &str) -> DomainResult<String> {
    let phone = phone.trim();
    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    let well_formed = phone
        .chars()
        .all(|c| c.is_ascii_digit() || c == ' ' || c == '-' || c == '+');
    if !well_formed || !(5..=20).contains(&digits) {
        return Err(DomainError::validation("invalid phone number format"));
    }
    Ok(phone.to_string())
}

/// Validate a display name (non-empty after trimming).
pub fn normalize_name(name: &str, field: &str) -> DomainResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DomainError::validation(format!("{field} cannot be empty")));
    }
    Ok(name.to_string())
}
