use crate::AgentId;

/// Position of an agent in the per-tick processing order.
///
/// The player always goes first, then NPCs in registration order. The derived `Ord` encodes this:
/// `Player < Npc(_)`, and NPCs compare by their registration sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TickSlot {
    Player,
    Npc(u64),
}

/// Sorts `items` into the reproducible tick order.
///
/// Ties on slot fall back to the agent's stable id; the sort is stable so fully equal keys keep
/// their input order.
pub fn order_for_tick<T, A: AgentId>(items: &mut [T], slot: impl Fn(&T) -> (TickSlot, A)) {
    items.sort_by_key(|item| {
        let (slot, agent) = slot(item);
        (slot, agent.stable_id())
    });
}
