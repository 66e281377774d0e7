use crate::blocks::BlockId;
use crate::points::{Axis, Line};
use crate::types::Point;
use serde::Serialize;

/// Line chosen for the minimum cover, described by its end points.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLine {
    pub axis: Axis,
    pub from: Point,
    pub to: Point,
}

impl From<&Line> for CoverLine {
    fn from(line: &Line) -> Self {
        Self {
            axis: line.axis,
            from: line.start,
            to: line.end(),
        }
    }
}

/// Sizes and matching outcome of one block.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockReport {
    pub id: BlockId,
    pub points: usize,
    pub lines: usize,
    pub edges: usize,
    pub u_size: usize,
    pub v_size: usize,
    /// Maximum matching size, equal to the block's minimum line count.
    pub matching: usize,
    pub phases: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<Vec<CoverLine>>,
}

impl BlockReport {
    pub fn count_along(&self, axis: Axis) -> Option<usize> {
        self.cover
            .as_ref()
            .map(|lines| lines.iter().filter(|l| l.axis == axis).count())
    }
}
