/// Anything a host uses to name an agent.
///
/// `stable_id` feeds [`DecisionKey`](crate::DecisionKey) and the tick order, so it must not change
/// for the lifetime of the agent, across saves included.
pub trait AgentId: Copy + Ord {
    fn stable_id(self) -> u64;
}

macro_rules! widening_agent_id {
    ($($t:ty),*) => {
        $(impl AgentId for $t {
            fn stable_id(self) -> u64 {
                u64::from(self)
            }
        })*
    };
}

widening_agent_id!(u64, u32, u16);
