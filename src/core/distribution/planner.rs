//! Round-robin assignment planning

use crate::utils::error::{DispatchError, Result};
use tracing::debug;

/// Agent index for every row: row `i` goes to agent `i mod agent_count`.
///
/// Each agent ends up with either `floor(rows / agents)` or
/// `ceil(rows / agents)` rows.
pub fn assign_round_robin(row_count: usize, agent_count: usize) -> Result<Vec<usize>> {
    if agent_count == 0 {
        return Err(DispatchError::NoAgents);
    }

    let plan: Vec<usize> = (0..row_count).map(|row| row % agent_count).collect();
    debug!(
        "Planned {} rows across {} agents (max {} per agent)",
        row_count,
        agent_count,
        row_count.div_ceil(agent_count)
    );
    Ok(plan)
}
