//! Rasterized point set and maximal line extraction.
//!
//! Rectangles are expanded into a deduplicated set of integer points held by a
//! [`PointMap`]. Every point carries a dense [`PointId`] assigned in first-seen
//! order and two exploration flags recording whether a horizontal and a
//! vertical line through it have already been extracted.
//!
//! - [`rasterize`] builds the map from a batch of rectangles.
//! - [`PointMap::extract_line`] grows a maximal contiguous run of existing
//!   points along one axis and marks the visited points.
//!
//! Flags only ever go from unset to set. Once partitioning is done the map is
//! no longer needed and can be dropped.

mod line;
mod map;
mod raster;

pub use line::{Axis, Line};
pub use map::{PointId, PointMap, PointRecord};
pub use raster::rasterize;
