//! End-to-end caller flow: bootstrap the directory, run every mutation
//! through `authorize`, apply it, and report privilege-relevant transitions
//! to the notifier.

use chrono::{Duration, Utc};

use fieldbook_auth::{
    Action, ClientAction, ContractAction, Decision, DenialReason, EventAction, Role, Target,
    authorize,
};
use fieldbook_records::{Directory, NewEmployee, RecordNotifier, TracingNotifier};

#[test]
fn department_lifecycle_is_gated_end_to_end() {
    fieldbook_observability::init();
    let notifier = TracingNotifier;
    let mut directory = Directory::new();
    let now = Utc::now();

    // Bootstrap: the first employee becomes Management, no actor needed.
    let boss_id = directory
        .onboard_employee(
            None,
            NewEmployee {
                full_name: "Faye Founder",
                email: "faye@fieldbook.example",
                phone: None,
                role: Role::Sales, // requested role is overridden
            },
        )
        .unwrap();
    let boss = directory.employee(boss_id).unwrap().clone();
    assert_eq!(boss.role(), Role::Management);
    notifier.employee_onboarded(&boss);
    let boss = boss.actor();

    // Staff the department.
    let seller_id = directory
        .onboard_employee(
            Some(&boss),
            NewEmployee {
                full_name: "Ada Seller",
                email: "ada@fieldbook.example",
                phone: Some("06 11 22 33 44"),
                role: Role::Sales,
            },
        )
        .unwrap();
    let rival_id = directory
        .onboard_employee(
            Some(&boss),
            NewEmployee {
                full_name: "Rob Rival",
                email: "rob@fieldbook.example",
                phone: None,
                role: Role::Sales,
            },
        )
        .unwrap();
    let support_id = directory
        .onboard_employee(
            Some(&boss),
            NewEmployee {
                full_name: "Sam Support",
                email: "sam@fieldbook.example",
                phone: None,
                role: Role::Support,
            },
        )
        .unwrap();
    let seller = directory.employee(seller_id).unwrap().actor();
    let rival = directory.employee(rival_id).unwrap().actor();
    let support = directory.employee(support_id).unwrap().actor();

    // Sales create their own clients.
    let create_client = Action::Client(ClientAction::Create);
    assert_eq!(
        authorize(&seller, create_client, Target::Unattached, &directory).unwrap(),
        Decision::Approved
    );
    let client_id = directory
        .create_client(seller_id, "Kay Client", "kay@client.example", None, Some("Kay & Co"), now)
        .unwrap();

    // Contract creation is Management-only; it targets the parent client.
    let create_contract = Action::Contract(ContractAction::Create);
    assert!(matches!(
        authorize(&seller, create_contract, Target::Client(client_id), &directory).unwrap(),
        Decision::Denied(DenialReason::RoleForbidden { .. })
    ));
    assert_eq!(
        authorize(&boss, create_contract, Target::Client(client_id), &directory).unwrap(),
        Decision::Approved
    );
    let contract_id = directory.create_contract(client_id, 500_000, 500_000, now).unwrap();

    // The owning seller may update the unsigned contract; a rival may not.
    let update_contract = Action::Contract(ContractAction::Update);
    let contract_target = Target::Contract(contract_id);
    assert_eq!(
        authorize(&seller, update_contract, contract_target, &directory).unwrap(),
        Decision::Approved
    );
    assert_eq!(
        authorize(&rival, update_contract, contract_target, &directory).unwrap(),
        Decision::Denied(DenialReason::NotOwner)
    );
    directory.record_payment(contract_id, 200_000).unwrap();

    // Event creation against the unsigned contract is refused for the owner,
    // while Management's blanket grant bypasses the policy check entirely.
    let create_event = Action::Event(EventAction::Create);
    assert_eq!(
        authorize(&seller, create_event, contract_target, &directory).unwrap(),
        Decision::Denied(DenialReason::ContractUnsigned)
    );
    assert_eq!(
        authorize(&boss, create_event, contract_target, &directory).unwrap(),
        Decision::Approved
    );
    // The record invariant still backstops the blanket grant.
    assert!(
        directory
            .create_event(contract_id, "Early party", 10, now, now + Duration::hours(2), None, None)
            .is_err()
    );

    // Sign the contract (owner-gated), then report the transition.
    let sign = Action::Contract(ContractAction::Sign);
    assert_eq!(
        authorize(&seller, sign, contract_target, &directory).unwrap(),
        Decision::Approved
    );
    let signed = directory.sign_contract(contract_id).unwrap().clone();
    notifier.contract_signed(&signed);

    // Signing forecloses further Sales updates and re-signing.
    assert_eq!(
        authorize(&seller, update_contract, contract_target, &directory).unwrap(),
        Decision::Denied(DenialReason::ContractSigned)
    );
    assert_eq!(
        authorize(&seller, sign, contract_target, &directory).unwrap(),
        Decision::Denied(DenialReason::ContractSigned)
    );

    // Now the owner may create the event.
    assert_eq!(
        authorize(&seller, create_event, contract_target, &directory).unwrap(),
        Decision::Approved
    );
    let event_id = directory
        .create_event(
            contract_id,
            "Launch party",
            120,
            now + Duration::days(7),
            now + Duration::days(7) + Duration::hours(5),
            Some("Main hall"),
            None,
        )
        .unwrap();
    let event_target = Target::Event(event_id);

    // Support cannot touch the event until assigned.
    let read_event = Action::Event(EventAction::Read);
    let update_event = Action::Event(EventAction::Update);
    assert_eq!(
        authorize(&support, read_event, event_target, &directory).unwrap(),
        Decision::Denied(DenialReason::NotAssigned)
    );

    // Assignment is Management-only.
    let assign = Action::Event(EventAction::AssignSupport);
    assert!(matches!(
        authorize(&support, assign, event_target, &directory).unwrap(),
        Decision::Denied(DenialReason::RoleForbidden { .. })
    ));
    assert_eq!(
        authorize(&boss, assign, event_target, &directory).unwrap(),
        Decision::Approved
    );
    directory.assign_event_support(event_id, support_id, now).unwrap();

    assert_eq!(
        authorize(&support, read_event, event_target, &directory).unwrap(),
        Decision::Approved
    );
    assert_eq!(
        authorize(&support, update_event, event_target, &directory).unwrap(),
        Decision::Approved
    );
    directory.update_event_notes(event_id, "Bring spare badges").unwrap();

    // Reassigning the client flips subsequent ownership decisions: no stale
    // verdicts survive a relation change.
    let reassign = Action::Client(ClientAction::ReassignOwner);
    let client_target = Target::Client(client_id);
    assert!(matches!(
        authorize(&seller, reassign, client_target, &directory).unwrap(),
        Decision::Denied(DenialReason::RoleForbidden { .. })
    ));
    assert_eq!(
        authorize(&boss, reassign, client_target, &directory).unwrap(),
        Decision::Approved
    );
    directory.reassign_client_owner(client_id, rival_id, now).unwrap();

    let update_client = Action::Client(ClientAction::Update);
    assert_eq!(
        authorize(&seller, update_client, client_target, &directory).unwrap(),
        Decision::Denied(DenialReason::NotOwner)
    );
    assert_eq!(
        authorize(&rival, update_client, client_target, &directory).unwrap(),
        Decision::Approved
    );
}
