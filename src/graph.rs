//! Line-sharing graphs built per block.
//!
//! - [`LineGraph`]: nodes are the lines of one block, an edge joins two lines
//!   that share a point.
//! - [`BipartiteGraph`]: the same graph split into two color classes `U` and
//!   `V` by a BFS two-coloring, with adjacency from `U` into `V`.
//!
//! Two lines sharing a point always have different axes, so every path
//! alternates horizontal/vertical and every cycle has even length. The
//! two-coloring therefore always exists.

mod bipartite;
mod line_graph;

pub use bipartite::{BipartiteGraph, Side};
pub use line_graph::LineGraph;
