use crate::blocks::Block;
use crate::points::{Axis, PointId};
use std::collections::HashMap;

/// Undirected simple graph over the lines of a block.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineGraph {
    /// `adj[i]` lists the lines sharing a point with line `i`, ascending.
    pub adj: Vec<Vec<usize>>,
}

#[derive(Default)]
struct Crossing {
    horizontal: Option<usize>,
    vertical: Option<usize>,
}

impl LineGraph {
    /// Link every pair of lines sharing at least one point id.
    ///
    /// Within a block each point lies on at most one line per axis, so the
    /// pairs sharing a point are exactly the (horizontal, vertical) pairs
    /// recorded per point id.
    pub fn from_block(block: &Block) -> Self {
        let mut crossings: HashMap<PointId, Crossing> = HashMap::new();
        for (index, line) in block.lines.iter().enumerate() {
            for &id in &line.points {
                let slot = crossings.entry(id).or_default();
                let target = match line.axis {
                    Axis::Horizontal => &mut slot.horizontal,
                    Axis::Vertical => &mut slot.vertical,
                };
                debug_assert!(target.is_none(), "point {:?} on two parallel lines", id);
                *target = Some(index);
            }
        }

        let mut adj = vec![Vec::new(); block.lines.len()];
        for crossing in crossings.values() {
            if let (Some(h), Some(v)) = (crossing.horizontal, crossing.vertical) {
                adj[h].push(v);
                adj[v].push(h);
            }
        }
        for list in &mut adj {
            list.sort_unstable();
            list.dedup();
        }
        Self { adj }
    }

    pub fn node_count(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(Vec::len).sum::<usize>() / 2
    }

    pub fn neighbors(&self, node: usize) -> &[usize] {
        &self.adj[node]
    }

    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        self.adj
            .get(a)
            .is_some_and(|list| list.binary_search(&b).is_ok())
    }
}
