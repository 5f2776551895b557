//! `fieldbook-records` — the entity model behind the authorization core.
//!
//! Employees, clients, contracts and events, plus the in-memory [`Directory`]
//! that stores them and serves relation lookups to the engine. Mutations of
//! privilege-relevant state (`signed`, ownership, support assignment) are
//! expected to be gated by `fieldbook_auth::authorize` at the call site; the
//! record types enforce their own invariants as the backstop.

pub mod client;
pub mod contact;
pub mod contract;
pub mod directory;
pub mod employee;
pub mod event;
pub mod notifier;

pub use client::Client;
pub use contract::Contract;
pub use directory::{Directory, NewEmployee};
pub use employee::Employee;
pub use event::Event;
pub use notifier::{NullNotifier, RecordNotifier, TracingNotifier};
