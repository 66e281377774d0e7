#![doc = include_str!("../README.md")]

// Pipeline stages.
pub mod blocks;
pub mod graph;
pub mod matching;
pub mod points;
pub mod solver;
pub mod types;

// Reporting and glue around the solver.
pub mod config;
pub mod diagnostics;
pub mod input;
pub mod io;

// --- High-level re-exports -------------------------------------------------

pub use crate::diagnostics::{CoverReport, PipelineTrace};
pub use crate::solver::{min_line_cover, LineCoverSolver, SolverParams};
pub use crate::types::{CoverResult, Point, Rect};

// --- Stage-level API (for tools & tests) -----------------------------------

pub mod stages {
    pub use crate::blocks::{partition_blocks, Block, BlockId};
    pub use crate::graph::{BipartiteGraph, LineGraph, Side};
    pub use crate::matching::{hopcroft_karp, Matching, VertexCover};
    pub use crate::points::{rasterize, Axis, Line, PointId, PointMap, PointRecord};
}
