//! X-axis tick placement.
//!
//! Tick density adapts to the longest series so large runs stay readable:
//! above 100 points roughly 20 ticks, above 20 points roughly 10 ticks,
//! otherwise one tick per run.

use crate::utils::config::{
    DENSE_RUN_THRESHOLD, DENSE_TICK_COUNT, MEDIUM_RUN_THRESHOLD, MEDIUM_TICK_COUNT,
};

/// Distance between ticks for a given maximum series length
pub fn tick_step(max_runs: usize) -> usize {
    let step = if max_runs > DENSE_RUN_THRESHOLD {
        max_runs / DENSE_TICK_COUNT
    } else if max_runs > MEDIUM_RUN_THRESHOLD {
        max_runs / MEDIUM_TICK_COUNT
    } else {
        1
    };
    step.max(1)
}

/// Tick positions from 0 through `max_runs`, `tick_step` apart
pub fn x_ticks(max_runs: usize) -> Vec<i32> {
    (0..=max_runs)
        .step_by(tick_step(max_runs))
        .map(|t| t as i32)
        .collect()
}
