use super::line_graph::LineGraph;
use std::collections::VecDeque;

/// Color class of a line-graph node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    U,
    V,
}

impl Side {
    fn flip(self) -> Self {
        match self {
            Side::U => Side::V,
            Side::V => Side::U,
        }
    }
}

/// Line graph split into two independent sets with edges only from `U` to `V`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BipartiteGraph {
    /// `adj[u]` lists the `V` indices adjacent to `U` node `u`.
    pub adj: Vec<Vec<usize>>,
    /// Line-graph node behind each `U` index.
    pub u_nodes: Vec<usize>,
    /// Line-graph node behind each `V` index.
    pub v_nodes: Vec<usize>,
}

impl BipartiteGraph {
    /// Two-color `graph` by BFS and re-index the classes.
    ///
    /// Traversal starts at node 0 in `U`; every uncolored neighbour of a node
    /// receives the opposite class. A node left uncolored afterwards (only for
    /// disconnected graphs) seeds another traversal in `U`. The input must be
    /// two-colorable, which holds for every line graph.
    pub fn from_line_graph(graph: &LineGraph) -> Self {
        let n = graph.node_count();
        let mut sides: Vec<Option<Side>> = vec![None; n];
        let mut queue = VecDeque::new();

        for root in 0..n {
            if sides[root].is_some() {
                continue;
            }
            sides[root] = Some(Side::U);
            queue.push_back(root);
            while let Some(node) = queue.pop_front() {
                let Some(side) = sides[node] else {
                    continue;
                };
                for &next in graph.neighbors(node) {
                    match sides[next] {
                        None => {
                            sides[next] = Some(side.flip());
                            queue.push_back(next);
                        }
                        Some(other) => {
                            debug_assert_ne!(other, side, "line graph is not bipartite");
                        }
                    }
                }
            }
        }

        let mut u_nodes = Vec::new();
        let mut v_nodes = Vec::new();
        let mut v_index = vec![usize::MAX; n];
        for (node, side) in sides.iter().enumerate() {
            match side {
                Some(Side::V) => {
                    v_index[node] = v_nodes.len();
                    v_nodes.push(node);
                }
                _ => u_nodes.push(node),
            }
        }

        let adj: Vec<Vec<usize>> = u_nodes
            .iter()
            .map(|&node| {
                graph
                    .neighbors(node)
                    .iter()
                    .map(|&next| v_index[next])
                    .filter(|&v| v != usize::MAX)
                    .collect::<Vec<_>>()
            })
            .collect();

        Self {
            adj,
            u_nodes,
            v_nodes,
        }
    }

    pub fn u_len(&self) -> usize {
        self.u_nodes.len()
    }

    pub fn v_len(&self) -> usize {
        self.v_nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(Vec::len).sum()
    }

    /// Class of every line-graph node, indexed by line-graph node.
    pub fn sides(&self) -> Vec<Side> {
        let mut sides = vec![Side::U; self.u_len() + self.v_len()];
        for &node in &self.v_nodes {
            sides[node] = Side::V;
        }
        sides
    }
}
