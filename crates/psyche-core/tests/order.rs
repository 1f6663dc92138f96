use psyche_core::{order_for_tick, TickSlot};

#[test]
fn player_goes_first_then_registration_order() {
    let mut agents = vec![
        (TickSlot::Npc(3), 30u64),
        (TickSlot::Npc(1), 50u64),
        (TickSlot::Player, 99u64),
        (TickSlot::Npc(2), 10u64),
    ];

    order_for_tick(&mut agents, |&(slot, id)| (slot, id));

    let ids: Vec<u64> = agents.iter().map(|&(_, id)| id).collect();
    assert_eq!(ids, vec![99, 50, 10, 30]);
}

#[test]
fn equal_slots_tie_break_by_stable_id() {
    let mut agents = vec![(TickSlot::Npc(1), 8u32), (TickSlot::Npc(1), 4u32)];

    order_for_tick(&mut agents, |&(slot, id)| (slot, id));

    assert_eq!(agents[0].1, 4);
    assert_eq!(agents[1].1, 8);
}
