use super::map::{PointId, PointMap};
use crate::types::Point;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn other(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// Unit step along the axis.
    fn step(self) -> (i64, i64) {
        match self {
            Axis::Horizontal => (1, 0),
            Axis::Vertical => (0, 1),
        }
    }
}

/// Maximal contiguous run of existing points along one axis.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    pub axis: Axis,
    /// Lowest-coordinate point of the run.
    pub start: Point,
    pub points: Vec<PointId>,
}

impl Line {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Highest-coordinate point of the run.
    pub fn end(&self) -> Point {
        let (dx, dy) = self.axis.step();
        let n = self.points.len().saturating_sub(1) as i64;
        Point::new(self.start.x + dx * n, self.start.y + dy * n)
    }

    pub fn contains(&self, id: PointId) -> bool {
        self.points.contains(&id)
    }
}

impl PointMap {
    /// Extend a maximal run through `start` along `axis`, marking every
    /// visited point's flag for that axis.
    ///
    /// Walks down from `start` (inclusive) then up from the next point, so the
    /// ids come out as the lower half in descending order followed by the
    /// upper half ascending. Downstream users treat the run as a set.
    pub fn extract_line(&mut self, start: Point, axis: Axis) -> Line {
        let (dx, dy) = axis.step();
        let mut points = Vec::new();

        let mut lowest = start;
        let mut p = start;
        while let Some(id) = self.mark(p, axis) {
            points.push(id);
            lowest = p;
            p = Point::new(p.x - dx, p.y - dy);
        }

        if !points.is_empty() {
            p = Point::new(start.x + dx, start.y + dy);
            while let Some(id) = self.mark(p, axis) {
                points.push(id);
                p = Point::new(p.x + dx, p.y + dy);
            }
        }

        Line {
            axis,
            start: lowest,
            points,
        }
    }
}
