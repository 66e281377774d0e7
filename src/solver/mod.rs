//! Line cover solver orchestrating the rasterize → partition → match pipeline.
//!
//! Overview
//! - Rasterizes the rectangles into a deduplicated point map.
//! - Partitions the points into blocks, each covered by maximal horizontal and
//!   vertical lines such that every point lies on exactly one line per axis.
//! - Per block, links lines sharing a point, two-colors the resulting graph
//!   and runs Hopcroft–Karp. The matching size is the block's minimum number
//!   of covering lines (König).
//! - Sums the per-block results.
//!
//! Blocks share no points, so the per-block work is independent and runs on
//! the rayon pool when enough blocks are present.
//!
//! Modules
//! - [`params`] – configuration types used by the solver and CLI.
//! - `pipeline` – the [`LineCoverSolver`] implementation.

pub mod params;
mod pipeline;

pub use params::SolverParams;
pub use pipeline::{min_line_cover, LineCoverSolver};
