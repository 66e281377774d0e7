use super::hopcroft_karp::Matching;
use crate::graph::BipartiteGraph;
use std::collections::VecDeque;

/// Minimum vertex cover of a bipartite graph, as `U` and `V` indices.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VertexCover {
    pub u: Vec<usize>,
    pub v: Vec<usize>,
}

impl VertexCover {
    pub fn len(&self) -> usize {
        self.u.len() + self.v.len()
    }

    pub fn is_empty(&self) -> bool {
        self.u.is_empty() && self.v.is_empty()
    }

    /// True when every edge of `graph` has an endpoint in the cover.
    pub fn covers(&self, graph: &BipartiteGraph) -> bool {
        let mut in_u = vec![false; graph.u_len()];
        let mut in_v = vec![false; graph.v_len()];
        self.u.iter().for_each(|&u| in_u[u] = true);
        self.v.iter().for_each(|&v| in_v[v] = true);
        graph
            .adj
            .iter()
            .enumerate()
            .all(|(u, list)| in_u[u] || list.iter().all(|&v| in_v[v]))
    }
}

impl Matching {
    /// König construction: walk alternating paths from every free `U` node
    /// (any edge into `V`, matched edge back into `U`). The cover is the
    /// unreached `U` nodes plus the reached `V` nodes.
    ///
    /// `self` must be a maximum matching of `graph`; the cover then has
    /// exactly `self.size` nodes.
    pub fn vertex_cover(&self, graph: &BipartiteGraph) -> VertexCover {
        let mut seen_u = vec![false; graph.u_len()];
        let mut seen_v = vec![false; graph.v_len()];
        let mut queue: VecDeque<usize> = (0..graph.u_len())
            .filter(|&u| self.pair_u[u].is_none())
            .collect();
        for &u in &queue {
            seen_u[u] = true;
        }

        while let Some(u) = queue.pop_front() {
            for &v in &graph.adj[u] {
                if seen_v[v] {
                    continue;
                }
                seen_v[v] = true;
                if let Some(w) = self.pair_v[v] {
                    if !seen_u[w] {
                        seen_u[w] = true;
                        queue.push_back(w);
                    }
                }
            }
        }

        VertexCover {
            u: (0..graph.u_len()).filter(|&u| !seen_u[u]).collect(),
            v: (0..graph.v_len()).filter(|&v| seen_v[v]).collect(),
        }
    }
}
