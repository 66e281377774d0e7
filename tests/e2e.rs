mod common;

use common::synthetic_rects::{brute_force_cover, occupancy, scattered_squares};
use grid_line_cover::stages::Axis;
use grid_line_cover::{min_line_cover, LineCoverSolver, Point, Rect, SolverParams};
use std::collections::HashSet;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn single_square_block_needs_two_lines() {
    init_logger();
    let report = LineCoverSolver::default().solve_with_diagnostics(&[Rect::new(0, 0, 2, 2)]);
    assert_eq!(report.result.points, 4);
    assert_eq!(report.result.blocks, 1);
    assert_eq!(report.result.total_lines, 2);
}

#[test]
fn two_far_apart_points_need_two_lines() {
    init_logger();
    let report = LineCoverSolver::default()
        .solve_with_diagnostics(&[Rect::new(0, 0, 1, 1), Rect::new(50, 70, 51, 71)]);
    assert_eq!(report.result.blocks, 2);
    assert!(report.trace.blocks.iter().all(|b| b.matching == 1));
    assert_eq!(report.result.total_lines, 2);
}

#[test]
fn isolated_point_needs_one_line() {
    let report = LineCoverSolver::default().solve_with_diagnostics(&[Rect::new(3, 4, 4, 5)]);
    assert_eq!(report.result.blocks, 1);
    assert_eq!(report.trace.blocks[0].points, 1);
    assert_eq!(report.result.total_lines, 1);
}

#[test]
fn l_shape_sharing_a_corner_needs_two_lines() {
    // Bottom bar (0,0)-(2,0) and right column (2,0)-(2,2) share (2,0): the
    // bar plus the column cover all five points, and no single line can.
    let rects = [Rect::new(0, 0, 3, 1), Rect::new(2, 0, 3, 3)];
    let report = LineCoverSolver::new(SolverParams::sequential().with_cover())
        .solve_with_diagnostics(&rects);
    assert_eq!(report.result.points, 5);
    assert_eq!(report.result.blocks, 1);
    assert_eq!(report.result.total_lines, 2);
    assert_eq!(
        report.result.total_lines,
        brute_force_cover(&occupancy(&rects, 4, 4))
    );

    let block = &report.trace.blocks[0];
    assert_eq!(block.count_along(Axis::Horizontal), Some(1));
    assert_eq!(block.count_along(Axis::Vertical), Some(1));
}

#[test]
fn plus_sign_needs_two_lines() {
    let rects = [Rect::new(0, 2, 5, 3), Rect::new(2, 0, 3, 5)];
    assert_eq!(min_line_cover(&rects), 2);
}

#[test]
fn comb_needs_spine_plus_teeth() {
    // A spine row with four teeth hanging off alternating columns.
    let rects = [
        Rect::new(0, 0, 7, 1),
        Rect::new(0, 1, 1, 4),
        Rect::new(2, 1, 3, 4),
        Rect::new(4, 1, 5, 4),
        Rect::new(6, 1, 7, 4),
    ];
    let expected = brute_force_cover(&occupancy(&rects, 8, 5));
    assert_eq!(expected, 5);
    assert_eq!(min_line_cover(&rects), expected);
}

#[test]
fn rectangle_order_does_not_change_the_answer() {
    let mut rects = vec![
        Rect::new(0, 0, 4, 2),
        Rect::new(3, 1, 6, 5),
        Rect::new(10, 10, 12, 11),
        Rect::new(1, 4, 3, 7),
    ];
    let forward = min_line_cover(&rects);
    rects.reverse();
    assert_eq!(min_line_cover(&rects), forward);
    rects.rotate_left(1);
    assert_eq!(min_line_cover(&rects), forward);
    assert_eq!(min_line_cover(&rects), forward);
}

#[test]
fn parallel_and_sequential_agree() {
    init_logger();
    let rects = scattered_squares(300, 3);
    let parallel = LineCoverSolver::new(SolverParams {
        parallel: true,
        min_parallel_blocks: 1,
        collect_cover: false,
    })
    .solve_with_diagnostics(&rects);
    let sequential =
        LineCoverSolver::new(SolverParams::sequential()).solve_with_diagnostics(&rects);

    assert!(parallel.trace.parallel);
    assert!(!sequential.trace.parallel);
    assert_eq!(parallel.result.blocks, 300);
    assert_eq!(parallel.result.total_lines, 300 * 3);
    assert_eq!(parallel.result.total_lines, sequential.result.total_lines);
}

#[test]
fn reported_cover_touches_every_point() {
    let rects = [
        Rect::new(0, 0, 5, 2),
        Rect::new(4, 0, 6, 6),
        Rect::new(0, 5, 5, 6),
        Rect::new(8, 8, 11, 9),
    ];
    let report = LineCoverSolver::new(SolverParams::sequential().with_cover())
        .solve_with_diagnostics(&rects);

    let mut covered: HashSet<Point> = HashSet::new();
    let mut lines = 0;
    for block in &report.trace.blocks {
        let cover = block.cover.as_ref().expect("cover requested");
        assert_eq!(cover.len(), block.matching);
        for line in cover {
            lines += 1;
            for x in line.from.x..=line.to.x {
                for y in line.from.y..=line.to.y {
                    covered.insert(Point::new(x, y));
                }
            }
        }
    }
    assert_eq!(lines, report.result.total_lines);

    for r in &rects {
        for x in r.x0..r.x1 {
            for y in r.y0..r.y1 {
                assert!(covered.contains(&Point::new(x, y)), "({x},{y}) uncovered");
            }
        }
    }
}

#[test]
fn report_serializes_to_camel_case_json() {
    let report = LineCoverSolver::new(SolverParams::default().with_cover())
        .solve_with_diagnostics(&[Rect::new(0, 0, 2, 1)]);
    let json = serde_json::to_value(&report).expect("report serializes");
    assert_eq!(json["result"]["totalLines"], 1);
    assert_eq!(json["trace"]["input"]["rectangles"], 1);
    assert!(json["trace"]["blocks"][0]["cover"].is_array());
    assert_eq!(json["trace"]["blocks"][0]["cover"][0]["axis"], "horizontal");
}

#[test]
fn parsed_text_input_solves_end_to_end() {
    let text = "20\n20\n3\n0 0 3 1\n2 0 3 3\n10 10 12 12\n";
    let problem = grid_line_cover::input::parse_problem(text).expect("valid input");
    assert_eq!(problem.rects.len(), 3);
    assert_eq!(min_line_cover(&problem.rects), 2 + 2);
}
