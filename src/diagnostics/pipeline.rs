use crate::diagnostics::{BlockReport, TimingBreakdown};
use crate::types::CoverResult;
use serde::Serialize;

/// Result produced by [`LineCoverSolver::solve_with_diagnostics`](crate::LineCoverSolver).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverReport {
    pub result: CoverResult,
    pub trace: PipelineTrace,
}

/// End-to-end trace describing the internal execution of the solver.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    pub parallel: bool,
    pub blocks: Vec<BlockReport>,
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub rectangles: usize,
    pub degenerate_rectangles: usize,
    pub points: usize,
}

impl PipelineTrace {
    pub fn largest_block(&self) -> Option<&BlockReport> {
        self.blocks.iter().max_by_key(|b| b.points)
    }
}
