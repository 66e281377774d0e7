//! Solver pipeline driving the line cover end-to-end.
//!
//! Typical usage:
//! ```
//! use grid_line_cover::{LineCoverSolver, Rect, SolverParams};
//!
//! let solver = LineCoverSolver::new(SolverParams::default());
//! let report = solver.solve_with_diagnostics(&[Rect::new(0, 0, 2, 2)]);
//! assert_eq!(report.result.total_lines, 2);
//! ```
use super::params::SolverParams;
use crate::blocks::{partition_blocks, Block};
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{
    BlockReport, CoverLine, CoverReport, InputDescriptor, PipelineTrace, TimingBreakdown,
};
use crate::graph::{BipartiteGraph, LineGraph};
use crate::matching::hopcroft_karp;
use crate::points::rasterize;
use crate::types::{CoverResult, Rect};
use log::debug;
use rayon::prelude::*;
use std::time::Instant;

/// Minimum line cover of `rects` with default parameters.
pub fn min_line_cover(rects: &[Rect]) -> usize {
    LineCoverSolver::default().solve(rects)
}

/// Computes the minimum number of horizontal/vertical lines covering every
/// grid point of a batch of rectangles.
#[derive(Clone, Debug, Default)]
pub struct LineCoverSolver {
    params: SolverParams,
}

impl LineCoverSolver {
    pub fn new(params: SolverParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &SolverParams {
        &self.params
    }

    /// Run the solver and return the total line count only.
    pub fn solve(&self, rects: &[Rect]) -> usize {
        self.solve_with_diagnostics(rects).result.total_lines
    }

    /// Run the solver and return both the result and a detailed report.
    pub fn solve_with_diagnostics(&self, rects: &[Rect]) -> CoverReport {
        debug!(
            "LineCoverSolver::solve start rects={} parallel={}",
            rects.len(),
            self.params.parallel
        );
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();

        let mut map = timings.measure("rasterize", || rasterize(rects));
        let input = InputDescriptor {
            rectangles: rects.len(),
            degenerate_rectangles: rects.iter().filter(|r| r.is_empty()).count(),
            points: map.len(),
        };

        let blocks = timings.measure("partition", || partition_blocks(&mut map));
        drop(map);

        let parallel = self.params.parallel && blocks.len() >= self.params.min_parallel_blocks;
        let collect_cover = self.params.collect_cover;
        let reports: Vec<BlockReport> = timings.measure("matching", || {
            if parallel {
                blocks
                    .par_iter()
                    .map(|block| solve_block(block, collect_cover))
                    .collect()
            } else {
                blocks
                    .iter()
                    .map(|block| solve_block(block, collect_cover))
                    .collect()
            }
        });

        let total_lines: usize = reports.iter().map(|r| r.matching).sum();
        timings.total_ms = elapsed_ms(total_start);
        debug!(
            "LineCoverSolver::solve done points={} blocks={} total_lines={} latency_ms={:.3}",
            input.points,
            reports.len(),
            total_lines,
            timings.total_ms
        );

        CoverReport {
            result: CoverResult {
                total_lines,
                blocks: reports.len(),
                points: input.points,
                latency_ms: timings.total_ms,
            },
            trace: PipelineTrace {
                input,
                timings,
                parallel,
                blocks: reports,
            },
        }
    }
}

/// Line graph, bipartition and maximum matching of a single block.
fn solve_block(block: &Block, collect_cover: bool) -> BlockReport {
    let graph = LineGraph::from_block(block);
    let bipartite = BipartiteGraph::from_line_graph(&graph);
    let matching = hopcroft_karp(&bipartite);

    let cover = collect_cover.then(|| {
        let cover = matching.vertex_cover(&bipartite);
        let u_lines = cover.u.iter().map(|&u| bipartite.u_nodes[u]);
        let v_lines = cover.v.iter().map(|&v| bipartite.v_nodes[v]);
        u_lines
            .chain(v_lines)
            .map(|node| CoverLine::from(&block.lines[node]))
            .collect::<Vec<_>>()
    });

    BlockReport {
        id: block.id,
        points: block.point_count(),
        lines: graph.node_count(),
        edges: graph.edge_count(),
        u_size: bipartite.u_len(),
        v_size: bipartite.v_len(),
        matching: matching.size,
        phases: matching.phases(),
        cover,
    }
}
