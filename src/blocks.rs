//! Partition of the point set into blocks of lines.
//!
//! A block is a connected component of points reachable through shared lines.
//! Seeding a block draws the vertical and horizontal lines through an
//! unexplored point; every point touched by a line then gets the line it is
//! still missing, until each point of the block lies on exactly one horizontal
//! and one vertical line. The pending points are kept in a work queue, so the
//! partition is a single pass over the map rather than repeated scans.
use crate::points::{Axis, Line, PointId, PointMap};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Instant;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(pub u32);

/// Connected component of points together with the lines covering it.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub id: BlockId,
    pub lines: Vec<Line>,
}

impl Block {
    /// Number of distinct points in the block.
    ///
    /// Each point lies on exactly one horizontal line of its block.
    pub fn point_count(&self) -> usize {
        self.lines_along(Axis::Horizontal).map(Line::len).sum()
    }

    pub fn lines_along(&self, axis: Axis) -> impl Iterator<Item = &Line> + '_ {
        self.lines.iter().filter(move |l| l.axis == axis)
    }

    /// Ids of all points in the block, ascending.
    pub fn point_ids(&self) -> Vec<PointId> {
        let mut ids: Vec<PointId> = self
            .lines_along(Axis::Horizontal)
            .flat_map(|l| l.points.iter().copied())
            .collect();
        ids.sort_unstable();
        ids
    }
}

/// Split every point of `map` into blocks, setting both flags on all points.
pub fn partition_blocks(map: &mut PointMap) -> Vec<Block> {
    let start = Instant::now();
    let mut blocks = Vec::new();
    let mut queue: VecDeque<PointId> = VecDeque::new();

    for index in 0..map.len() {
        let id = PointId(index as u32);
        let Some(seed) = map.point(id) else {
            continue;
        };
        let Some(record) = map.record(id) else {
            continue;
        };
        if record.horizontal || record.vertical {
            continue;
        }

        let mut lines = Vec::new();
        for axis in [Axis::Vertical, Axis::Horizontal] {
            let line = map.extract_line(seed, axis);
            queue.extend(line.points.iter().copied());
            lines.push(line);
        }

        while let Some(pending) = queue.pop_front() {
            let Some(axis) = map.record(pending).and_then(|r| r.missing_axis()) else {
                continue;
            };
            let Some(p) = map.point(pending) else {
                continue;
            };
            let line = map.extract_line(p, axis);
            queue.extend(line.points.iter().copied());
            lines.push(line);
        }

        blocks.push(Block {
            id: BlockId(blocks.len() as u32),
            lines,
        });
    }

    debug!(
        "partition_blocks: points={} blocks={} lines={} elapsed_ms={:.3}",
        map.len(),
        blocks.len(),
        blocks.iter().map(|b| b.lines.len()).sum::<usize>(),
        start.elapsed().as_secs_f64() * 1000.0
    );
    blocks
}
