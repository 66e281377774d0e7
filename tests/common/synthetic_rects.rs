#![allow(dead_code)]

use grid_line_cover::Rect;
use std::collections::HashSet;

/// `n` squares of side `size`, spaced far enough apart to stay disjoint.
pub fn scattered_squares(n: usize, size: i64) -> Vec<Rect> {
    assert!(size > 0, "square size must be positive");
    let pitch = size + 2;
    (0..n as i64)
        .map(|i| {
            let x = (i % 16) * pitch;
            let y = (i / 16) * pitch;
            Rect::new(x, y, x + size, y + size)
        })
        .collect()
}

/// Occupancy grid of `rects` clipped to `width x height`, indexed `[y][x]`.
pub fn occupancy(rects: &[Rect], width: usize, height: usize) -> Vec<Vec<bool>> {
    let mut grid = vec![vec![false; width]; height];
    for r in rects {
        for y in r.y0.max(0)..r.y1.min(height as i64) {
            for x in r.x0.max(0)..r.x1.min(width as i64) {
                grid[y as usize][x as usize] = true;
            }
        }
    }
    grid
}

/// Maximal runs of occupied cells, as lists of `(x, y)` cells.
fn runs(grid: &[Vec<bool>], horizontal: bool) -> Vec<Vec<(usize, usize)>> {
    let height = grid.len();
    let width = grid.first().map_or(0, Vec::len);
    let (outer, inner) = if horizontal {
        (height, width)
    } else {
        (width, height)
    };
    let mut out = Vec::new();
    for a in 0..outer {
        let mut current = Vec::new();
        for b in 0..inner {
            let (x, y) = if horizontal { (b, a) } else { (a, b) };
            if grid[y][x] {
                current.push((x, y));
            } else if !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            out.push(current);
        }
    }
    out
}

/// Exhaustive minimum line cover: try every subset of horizontal runs and
/// add the vertical runs forced by the cells left uncovered.
pub fn brute_force_cover(grid: &[Vec<bool>]) -> usize {
    let horizontal = runs(grid, true);
    let vertical = runs(grid, false);
    assert!(horizontal.len() <= 16, "grid too large for brute force");

    let mut best = usize::MAX;
    for mask in 0u32..(1 << horizontal.len()) {
        let mut covered = HashSet::new();
        for (i, run) in horizontal.iter().enumerate() {
            if mask & (1 << i) != 0 {
                covered.extend(run.iter().copied());
            }
        }
        let forced = vertical
            .iter()
            .filter(|run| run.iter().any(|cell| !covered.contains(cell)))
            .count();
        best = best.min(mask.count_ones() as usize + forced);
    }
    best
}
