#![cfg(test)]

use soroban_sdk::{testutils::Address as _, Address, Symbol};

use rentals_lib::LedgerError;

use crate::test::{setup, SCALE};

#[test]
fn test_withdraw_deposit_once() {
    let s = setup();
    let room_id = s.add_room("101", 1, 2);
    let tenant = s.funded_account(3);
    s.client.sign_agreement(&tenant, &room_id, &(3 * SCALE));

    let refund = s.client.withdraw_security_deposit(&tenant, &room_id);
    let (name, _, _) = s.last_event().unwrap();
    assert_eq!(name, Symbol::new(&s.env, "DepositWithdrawn"));

    assert_eq!(refund, 2 * SCALE);
    assert_eq!(s.token.balance(&tenant), 2 * SCALE);
    assert_eq!(s.client.custody_balance(), SCALE);
    assert!(s.room(room_id).deposit_withdrawn);

    assert_eq!(
        s.client.try_withdraw_security_deposit(&tenant, &room_id),
        Err(Ok(LedgerError::DepositAlreadyWithdrawn))
    );
    assert_eq!(s.token.balance(&tenant), 2 * SCALE);
}

#[test]
fn test_withdraw_deposit_requires_current_tenant() {
    let s = setup();
    let room_id = s.add_room("101", 1, 2);
    let tenant = s.funded_account(3);
    let stranger = Address::generate(&s.env);

    assert_eq!(
        s.client.try_withdraw_security_deposit(&tenant, &room_id),
        Err(Ok(LedgerError::NotCurrentTenant))
    );

    s.client.sign_agreement(&tenant, &room_id, &(3 * SCALE));
    for caller in [stranger, s.owner.clone()] {
        assert_eq!(
            s.client.try_withdraw_security_deposit(&caller, &room_id),
            Err(Ok(LedgerError::NotCurrentTenant))
        );
    }
    assert!(!s.room(room_id).deposit_withdrawn);
}

#[test]
fn test_former_tenant_cannot_withdraw_after_completion() {
    let s = setup();
    let room_id = s.add_room("101", 1, 2);
    let tenant = s.funded_account(3);
    s.client.sign_agreement(&tenant, &room_id, &(3 * SCALE));
    s.client.agreement_completed(&s.owner, &room_id);

    // the tenant link is cleared on completion, so the deposit stays in custody
    assert_eq!(
        s.client.try_withdraw_security_deposit(&tenant, &room_id),
        Err(Ok(LedgerError::NotCurrentTenant))
    );
    assert_eq!(s.client.custody_balance(), 3 * SCALE);
}

#[test]
fn test_withdrawn_flag_is_per_room_and_permanent() {
    let s = setup();
    let room_id = s.add_room("101", 1, 2);
    let other_room = s.add_room("102", 1, 2);
    let first = s.funded_account(3);
    let second = s.funded_account(6);

    s.client.sign_agreement(&first, &room_id, &(3 * SCALE));
    s.client.withdraw_security_deposit(&first, &room_id);
    s.client.agreement_completed(&s.owner, &room_id);

    s.client.sign_agreement(&second, &room_id, &(3 * SCALE));
    assert_eq!(
        s.client.try_withdraw_security_deposit(&second, &room_id),
        Err(Ok(LedgerError::DepositAlreadyWithdrawn))
    );

    s.client.sign_agreement(&second, &other_room, &(3 * SCALE));
    assert_eq!(s.client.withdraw_security_deposit(&second, &other_room), 2 * SCALE);
}

#[test]
fn test_failed_penalty_transfer_rolls_back_termination() {
    let s = setup();
    let room_id = s.add_room("101", 0, 10);
    let tenant = s.funded_account(10);
    s.client.sign_agreement(&tenant, &room_id, &(10 * SCALE));

    // custody is drained by the refund, leaving nothing for the penalty
    s.client.withdraw_security_deposit(&tenant, &room_id);
    assert_eq!(s.client.custody_balance(), 0);

    assert_eq!(
        s.client.try_agreement_terminated(&s.owner, &room_id),
        Err(Ok(LedgerError::TransferFailed))
    );

    let room = s.room(room_id);
    assert!(!room.vacant);
    assert_eq!(room.current_tenant, Some(tenant));
    assert_eq!(room.agreement_id, 1);
    assert_eq!(s.client.get_number_of_rooms_available(), 0);
    assert_eq!(s.token.balance(&s.owner), 0);

    // completion moves no funds and still works
    s.client.agreement_completed(&s.owner, &room_id);
    assert!(s.room(room_id).vacant);
}

#[test]
fn test_unfunded_signing_leaves_room_vacant() {
    let s = setup();
    let room_id = s.add_room("101", 1, 2);
    let broke = Address::generate(&s.env);

    assert_eq!(
        s.client.try_sign_agreement(&broke, &room_id, &(3 * SCALE)),
        Err(Ok(LedgerError::TransferFailed))
    );
    assert!(s.room(room_id).vacant);
    assert_eq!(s.client.get_total_agreements(), 0);
    assert_eq!(s.client.get_room_agreements(&room_id).len(), 0);
    assert_eq!(s.client.get_number_of_rooms_available(), 1);
}

#[test]
fn test_custody_tracks_collections_and_payouts() {
    let s = setup();
    let room_id = s.add_room("101", 1, 20);
    let tenant = s.funded_account(40);

    assert_eq!(s.client.custody_balance(), 0);
    s.client.sign_agreement(&tenant, &room_id, &(21 * SCALE));
    assert_eq!(s.client.custody_balance(), 21 * SCALE);

    s.client.agreement_terminated(&s.owner, &room_id);
    assert_eq!(s.client.custody_balance(), 19 * SCALE);
    assert_eq!(
        s.token.balance(&s.owner) + s.token.balance(&tenant) + s.client.custody_balance(),
        40 * SCALE
    );
}
