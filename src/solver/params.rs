//! Parameter types configuring the solver.
//!
//! None of the knobs change the answer; they only affect scheduling and how
//! much detail ends up in the diagnostics report.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverParams {
    /// Run per-block matching on the rayon pool.
    pub parallel: bool,
    /// Minimum number of blocks before the parallel path is taken.
    pub min_parallel_blocks: usize,
    /// Recover the actual covering lines of every block (König cover).
    pub collect_cover: bool,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            parallel: true,
            min_parallel_blocks: 64,
            collect_cover: false,
        }
    }
}

impl SolverParams {
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    pub fn with_cover(mut self) -> Self {
        self.collect_cover = true;
        self
    }
}
