//! Side-effect notifier for privilege-relevant transitions.

use crate::contract::Contract;
use crate::employee::Employee;

/// Sink for privilege-relevant state transitions.
///
/// The caller reports a transition *after* the engine approved it and the
/// mutation was applied; the engine itself never invokes this. Downstream
/// transport (telemetry, audit log shipping) lives behind implementations of
/// this trait, outside the core.
pub trait RecordNotifier {
    fn employee_onboarded(&self, employee: &Employee);
    fn contract_signed(&self, contract: &Contract);
}

/// Notifier that emits structured tracing events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl RecordNotifier for TracingNotifier {
    fn employee_onboarded(&self, employee: &Employee) {
        tracing::info!(
            employee = %employee.id(),
            role = %employee.role(),
            "employee onboarded"
        );
    }

    fn contract_signed(&self, contract: &Contract) {
        tracing::info!(
            contract = %contract.id(),
            client = %contract.client(),
            remaining_amount = contract.remaining_amount(),
            "contract signed"
        );
    }
}

/// No-op notifier for tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNotifier;

impl RecordNotifier for NullNotifier {
    fn employee_onboarded(&self, _employee: &Employee) {}

    fn contract_signed(&self, _contract: &Contract) {}
}
