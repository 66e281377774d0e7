use super::line::Axis;
use crate::types::Point;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Dense identifier of a rasterized point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointId(pub u32);

impl PointId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Per-point bookkeeping: id plus one exploration flag per axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointRecord {
    pub id: PointId,
    pub horizontal: bool,
    pub vertical: bool,
}

impl PointRecord {
    fn new(id: PointId) -> Self {
        Self {
            id,
            horizontal: false,
            vertical: false,
        }
    }

    pub fn is_explored(&self, axis: Axis) -> bool {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
        }
    }

    /// Axis still missing a line when exactly one flag is set.
    pub fn missing_axis(&self) -> Option<Axis> {
        match (self.horizontal, self.vertical) {
            (true, false) => Some(Axis::Vertical),
            (false, true) => Some(Axis::Horizontal),
            _ => None,
        }
    }

    fn mark(&mut self, axis: Axis) {
        match axis {
            Axis::Horizontal => self.horizontal = true,
            Axis::Vertical => self.vertical = true,
        }
    }
}

/// Shared mutable index from coordinates to point records.
#[derive(Clone, Debug, Default)]
pub struct PointMap {
    records: HashMap<Point, PointRecord>,
    coords: Vec<Point>,
}

impl PointMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: HashMap::with_capacity(capacity),
            coords: Vec::with_capacity(capacity),
        }
    }

    /// Insert `p` if absent, returning its id either way.
    pub fn insert(&mut self, p: Point) -> PointId {
        let next = PointId(self.coords.len() as u32);
        let record = self.records.entry(p).or_insert_with(|| PointRecord::new(next));
        if record.id == next {
            self.coords.push(p);
        }
        record.id
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn get(&self, p: Point) -> Option<&PointRecord> {
        self.records.get(&p)
    }

    pub fn contains(&self, p: Point) -> bool {
        self.records.contains_key(&p)
    }

    /// Coordinates of the point with the given id.
    pub fn point(&self, id: PointId) -> Option<Point> {
        self.coords.get(id.index()).copied()
    }

    /// Record of the point with the given id.
    pub fn record(&self, id: PointId) -> Option<&PointRecord> {
        self.point(id).and_then(|p| self.records.get(&p))
    }

    /// Points in id order.
    pub fn points(&self) -> &[Point] {
        &self.coords
    }

    /// Sets the axis flag of `p`. Returns the id if the point exists.
    pub(super) fn mark(&mut self, p: Point, axis: Axis) -> Option<PointId> {
        let record = self.records.get_mut(&p)?;
        debug_assert!(
            !record.is_explored(axis),
            "point {:?} already explored along {:?}",
            p,
            axis
        );
        record.mark(axis);
        Some(record.id)
    }

    /// Number of points with both flags set.
    pub fn fully_explored(&self) -> usize {
        self.records
            .values()
            .filter(|r| r.horizontal && r.vertical)
            .count()
    }
}
