//! Maximum cardinality matching on bipartite line graphs (Hopcroft–Karp).
//!
//! Each phase first layers the graph by BFS from every free `U` node, then
//! searches vertex-disjoint shortest augmenting paths by DFS restricted to
//! edges that advance exactly one layer. The number of phases is bounded by
//! O(√V), giving O(E·√V) overall.
//!
//! By König's theorem the size of a maximum matching equals the size of a
//! minimum vertex cover; [`Matching::vertex_cover`] recovers one such cover.
//!
//! "No partner" is `None` rather than a reserved index, and the DFS runs on
//! an explicit stack so deep augmenting paths cannot exhaust the call stack.

mod cover;
mod hopcroft_karp;

pub use cover::VertexCover;
pub use hopcroft_karp::{hopcroft_karp, Matching};
