use super::map::PointMap;
use crate::types::{Point, Rect};
use log::{debug, warn};

/// Expand rectangles into a deduplicated point map.
///
/// Ids are assigned in first-seen order: rectangles in input order, each
/// scanned column by column (`x` outer, `y` inner). Degenerate rectangles
/// contribute nothing.
pub fn rasterize(rects: &[Rect]) -> PointMap {
    let hint: u64 = rects.iter().map(Rect::area).sum();
    let mut map = PointMap::with_capacity(hint.min(1 << 20) as usize);
    let mut degenerate = 0usize;
    for rect in rects {
        if rect.is_empty() {
            degenerate += 1;
            continue;
        }
        for x in rect.x0..rect.x1 {
            for y in rect.y0..rect.y1 {
                map.insert(Point::new(x, y));
            }
        }
    }
    if degenerate > 0 {
        warn!("rasterize: skipped {} degenerate rectangles", degenerate);
    }
    debug!(
        "rasterize: rects={} points={} (area sum {})",
        rects.len(),
        map.len(),
        hint
    );
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::points::PointId;

    #[test]
    fn overlapping_rectangles_do_not_duplicate_points() {
        let map = rasterize(&[Rect::new(0, 0, 3, 3), Rect::new(1, 1, 4, 4)]);
        assert_eq!(map.len(), 9 + 9 - 4);
    }

    #[test]
    fn ids_follow_first_seen_order() {
        let map = rasterize(&[Rect::new(0, 0, 2, 1), Rect::new(0, 0, 1, 2)]);
        assert_eq!(map.get(Point::new(0, 0)).unwrap().id, PointId(0));
        assert_eq!(map.get(Point::new(1, 0)).unwrap().id, PointId(1));
        assert_eq!(map.get(Point::new(0, 1)).unwrap().id, PointId(2));
        assert_eq!(map.points()[2], Point::new(0, 1));
    }

    #[test]
    fn degenerate_rectangles_are_ignored() {
        let map = rasterize(&[
            Rect::new(2, 2, 2, 5),
            Rect::new(3, 4, 1, 6),
            Rect::new(0, 0, 1, 1),
        ]);
        assert_eq!(map.len(), 1);
        assert!(map.contains(Point::new(0, 0)));
    }

    #[test]
    fn fresh_points_are_unexplored() {
        let map = rasterize(&[Rect::new(0, 0, 2, 2)]);
        for &p in map.points() {
            let rec = map.get(p).unwrap();
            assert!(!rec.horizontal && !rec.vertical);
        }
    }
}
