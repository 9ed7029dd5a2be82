#![cfg(test)]

extern crate std;

use proptest::prelude::*;
use soroban_sdk::Address;

use crate::registry;
use crate::test::{setup, Setup, MONTH, SCALE};

/// Occupancy fields agree for every room, and the vacancy counter matches a full scan.
fn assert_registry_consistent(s: &Setup) {
    let total = s.client.get_total_number_of_rooms();
    for room_id in 1..=total {
        let room = s.room(room_id);
        assert_eq!(room.vacant, room.agreement_id == 0, "room {}", room_id);
        assert_eq!(room.vacant, room.current_tenant.is_none(), "room {}", room_id);
        if room.vacant {
            continue;
        }
        let agreement = s.client.get_agreement(&room.agreement_id).unwrap();
        assert_eq!(agreement.room_id, room_id);
        assert_eq!(Some(agreement.tenant), room.current_tenant);
    }

    let scanned = s
        .env
        .as_contract(&s.contract_id, || registry::count_vacant_by_scan(&s.env));
    assert_eq!(s.client.get_number_of_rooms_available(), scanned);
}

#[derive(Clone, Copy, Debug)]
enum Op {
    AddRoom,
    Sign,
    PayRent,
    Complete,
    Terminate,
    Withdraw,
}

fn any_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::AddRoom),
        Just(Op::Sign),
        Just(Op::PayRent),
        Just(Op::Complete),
        Just(Op::Terminate),
        Just(Op::Withdraw),
    ]
}

fn apply(s: &Setup, actors: &[Address], op: Op, room_id: u64, actor: usize) {
    let caller = &actors[actor];
    match op {
        Op::AddRoom => {
            s.add_room("unit", 1, 2);
        }
        Op::Sign => {
            let _ = s.client.try_sign_agreement(caller, &room_id, &(3 * SCALE));
        }
        Op::PayRent => {
            s.advance(MONTH);
            let _ = s.client.try_pay_rent(caller, &room_id, &SCALE);
        }
        Op::Complete => {
            let _ = s.client.try_agreement_completed(caller, &room_id);
        }
        Op::Terminate => {
            let _ = s.client.try_agreement_terminated(caller, &room_id);
        }
        Op::Withdraw => {
            let _ = s.client.try_withdraw_security_deposit(caller, &room_id);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_occupancy_stays_consistent(
        ops in prop::collection::vec((any_op(), 1u64..5, 0usize..3), 1..40)
    ) {
        let s = setup();
        let actors = [s.funded_account(1_000), s.funded_account(1_000), s.owner.clone()];
        s.add_room("seed", 1, 2);

        for (op, room_id, actor) in ops {
            apply(&s, &actors, op, room_id, actor);
            assert_registry_consistent(&s);
        }
    }

    #[test]
    fn prop_agreement_ids_follow_successful_signings(signings in 1usize..12) {
        let s = setup();
        let tenant = s.funded_account(1_000);
        let room_id = s.add_room("101", 1, 2);

        for expected in 1..=signings as u64 {
            prop_assert_eq!(s.client.sign_agreement(&tenant, &room_id, &(3 * SCALE)), expected);
            // a second signing on the occupied room never allocates an id
            prop_assert!(s.client.try_sign_agreement(&tenant, &room_id, &(3 * SCALE)).is_err());
            s.client.agreement_completed(&s.owner, &room_id);
        }
        prop_assert_eq!(s.client.get_total_agreements(), signings as u64);
        prop_assert_eq!(s.client.get_room_agreements(&room_id).len(), signings as u32);
    }
}

#[test]
fn test_vacancy_counter_matches_scan_through_lifecycle() {
    let s = setup();
    let tenant = s.funded_account(100);
    let rooms: std::vec::Vec<u64> = (0..4).map(|_| s.add_room("unit", 1, 2)).collect();
    assert_registry_consistent(&s);

    s.client.sign_agreement(&tenant, &rooms[0], &(3 * SCALE));
    s.client.sign_agreement(&tenant, &rooms[2], &(3 * SCALE));
    assert_eq!(s.client.get_number_of_rooms_available(), 2);
    assert_registry_consistent(&s);

    s.client.agreement_terminated(&s.owner, &rooms[0]);
    s.client.agreement_completed(&s.owner, &rooms[2]);
    assert_eq!(s.client.get_number_of_rooms_available(), 4);
    assert_registry_consistent(&s);
}
