use crate::graph::BipartiteGraph;
use log::debug;
use std::collections::VecDeque;

const INF: u32 = u32::MAX;

/// Maximum matching produced by [`hopcroft_karp`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Matching {
    /// Matched `V` partner of each `U` node.
    pub pair_u: Vec<Option<usize>>,
    /// Matched `U` partner of each `V` node.
    pub pair_v: Vec<Option<usize>>,
    /// Number of matched pairs.
    pub size: usize,
    /// Matching size after each completed phase.
    pub phase_sizes: Vec<usize>,
}

impl Matching {
    pub fn phases(&self) -> usize {
        self.phase_sizes.len()
    }

    /// Matched `(u, v)` pairs in `U` order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.pair_u
            .iter()
            .enumerate()
            .filter_map(|(u, v)| v.map(|v| (u, v)))
    }
}

struct Frame {
    u: usize,
    /// Next adjacency slot to try; the slot before it is the edge in use.
    edge: usize,
}

/// Mutable state of one run. Never shared between runs.
struct HopcroftKarp<'a> {
    graph: &'a BipartiteGraph,
    pair_u: Vec<Option<usize>>,
    pair_v: Vec<Option<usize>>,
    dist: Vec<u32>,
    /// Layer at which a free `V` node was reached in the current phase.
    free_dist: u32,
    queue: VecDeque<usize>,
    stack: Vec<Frame>,
}

/// Compute a maximum cardinality matching of `graph`.
pub fn hopcroft_karp(graph: &BipartiteGraph) -> Matching {
    HopcroftKarp::new(graph).run()
}

impl<'a> HopcroftKarp<'a> {
    fn new(graph: &'a BipartiteGraph) -> Self {
        let nu = graph.u_len();
        Self {
            graph,
            pair_u: vec![None; nu],
            pair_v: vec![None; graph.v_len()],
            dist: vec![INF; nu],
            free_dist: INF,
            queue: VecDeque::with_capacity(nu),
            stack: Vec::new(),
        }
    }

    fn run(mut self) -> Matching {
        let mut size = 0usize;
        let mut phase_sizes = Vec::new();
        while self.layer() {
            for u in 0..self.graph.u_len() {
                if self.pair_u[u].is_none() && self.augment(u) {
                    size += 1;
                }
            }
            phase_sizes.push(size);
        }
        debug!(
            "hopcroft_karp: |U|={} |V|={} edges={} matching={} phases={}",
            self.graph.u_len(),
            self.graph.v_len(),
            self.graph.edge_count(),
            size,
            phase_sizes.len()
        );
        Matching {
            pair_u: self.pair_u,
            pair_v: self.pair_v,
            size,
            phase_sizes,
        }
    }

    /// BFS layering from every free `U` node. Returns true when some free `V`
    /// node is reachable, i.e. an augmenting path exists.
    fn layer(&mut self) -> bool {
        self.queue.clear();
        for u in 0..self.graph.u_len() {
            if self.pair_u[u].is_none() {
                self.dist[u] = 0;
                self.queue.push_back(u);
            } else {
                self.dist[u] = INF;
            }
        }
        self.free_dist = INF;

        while let Some(u) = self.queue.pop_front() {
            if self.dist[u] >= self.free_dist {
                continue;
            }
            let next = self.dist[u] + 1;
            for &v in &self.graph.adj[u] {
                match self.pair_v[v] {
                    None => {
                        if self.free_dist == INF {
                            self.free_dist = next;
                        }
                    }
                    Some(w) => {
                        if self.dist[w] == INF {
                            self.dist[w] = next;
                            self.queue.push_back(w);
                        }
                    }
                }
            }
        }
        self.free_dist != INF
    }

    /// Layered DFS from the free node `root`. On success flips the pairs along
    /// the path; dead ends get their distance reset to infinity.
    fn augment(&mut self, root: usize) -> bool {
        let graph = self.graph;
        self.stack.clear();
        self.stack.push(Frame { u: root, edge: 0 });

        while let Some(top) = self.stack.last_mut() {
            let u = top.u;
            let adj = &graph.adj[u];
            if top.edge == adj.len() {
                self.dist[u] = INF;
                self.stack.pop();
                continue;
            }
            let v = adj[top.edge];
            top.edge += 1;

            let next = self.dist[u] + 1;
            match self.pair_v[v] {
                None if self.free_dist == next => {
                    for frame in &self.stack {
                        let v = graph.adj[frame.u][frame.edge - 1];
                        self.pair_u[frame.u] = Some(v);
                        self.pair_v[v] = Some(frame.u);
                    }
                    return true;
                }
                Some(w) if self.dist[w] == next => {
                    self.stack.push(Frame { u: w, edge: 0 });
                }
                _ => {}
            }
        }
        false
    }
}
