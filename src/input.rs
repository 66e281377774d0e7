//! Text input format.
//!
//! ```text
//! <map width>
//! <map height>
//! <rectangle count n>
//! x0 y0 x1 y1      (n lines, half-open, non-negative)
//! ```
//!
//! The map size is parsed and kept but the solver does not use it. Blank lines
//! after the last rectangle are ignored.
use crate::types::Rect;
use log::debug;
use serde::Serialize;

/// Parsed input batch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    pub width: u64,
    pub height: u64,
    pub rects: Vec<Rect>,
}

/// Parse the text format; errors name the offending (1-based) line.
pub fn parse_problem(text: &str) -> Result<Problem, String> {
    let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l.trim()));

    let width = parse_header(lines.next(), "map width")?;
    let height = parse_header(lines.next(), "map height")?;
    let count = parse_header(lines.next(), "rectangle count")?;
    let count = usize::try_from(count).map_err(|e| format!("Rectangle count too large: {e}"))?;

    let mut rects = Vec::with_capacity(count.min(1 << 20));
    for index in 0..count {
        let (line_no, line) = lines.next().ok_or_else(|| {
            format!("Expected {count} rectangles, input ended after {index}")
        })?;
        rects.push(parse_rect(line_no, line)?);
    }

    if let Some((line_no, extra)) = lines.find(|(_, l)| !l.is_empty()) {
        return Err(format!(
            "Unexpected content on line {line_no} after {count} rectangles: {extra:?}"
        ));
    }

    debug!(
        "parse_problem: width={} height={} rects={}",
        width,
        height,
        rects.len()
    );
    Ok(Problem {
        width,
        height,
        rects,
    })
}

fn parse_header(line: Option<(usize, &str)>, what: &str) -> Result<u64, String> {
    let (line_no, text) = line.ok_or_else(|| format!("Missing {what}"))?;
    text.parse::<u64>()
        .map_err(|e| format!("Failed to parse {what} on line {line_no} ({text:?}): {e}"))
}

fn parse_rect(line_no: usize, line: &str) -> Result<Rect, String> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 4 {
        return Err(format!(
            "Expected 4 coordinates on line {line_no}, found {}: {line:?}",
            fields.len()
        ));
    }
    let mut coords = [0i64; 4];
    for (slot, field) in coords.iter_mut().zip(&fields) {
        let value = field
            .parse::<u32>()
            .map_err(|e| format!("Failed to parse coordinate {field:?} on line {line_no}: {e}"))?;
        *slot = i64::from(value);
    }
    let [x0, y0, x1, y1] = coords;
    let rect = Rect::new(x0, y0, x1, y1);
    if rect.is_empty() {
        return Err(format!(
            "Empty rectangle on line {line_no}: need x0 < x1 and y0 < y1, got {line:?}"
        ));
    }
    Ok(rect)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_header_and_rectangles() {
        let text = "10\n8\n2\n0 0 2 2\n5 5 6 7\n";
        let problem = parse_problem(text).unwrap();
        assert_eq!(problem.width, 10);
        assert_eq!(problem.height, 8);
        assert_eq!(
            problem.rects,
            vec![Rect::new(0, 0, 2, 2), Rect::new(5, 5, 6, 7)]
        );
    }

    #[test]
    fn tolerates_windows_line_endings_and_trailing_blank_lines() {
        let text = "4\r\n4\r\n1\r\n1 1 3 2\r\n\r\n\n";
        let problem = parse_problem(text).unwrap();
        assert_eq!(problem.rects, vec![Rect::new(1, 1, 3, 2)]);
    }

    #[test]
    fn zero_rectangles_is_valid() {
        let problem = parse_problem("3\n3\n0\n").unwrap();
        assert!(problem.rects.is_empty());
    }

    #[test]
    fn rejects_truncated_input() {
        let err = parse_problem("5\n5\n3\n0 0 1 1\n").unwrap_err();
        assert!(err.contains("ended after 1"), "{err}");
        assert!(parse_problem("5\n").unwrap_err().contains("map height"));
    }

    #[test]
    fn rejects_malformed_rectangles() {
        let bad = [
            ("5\n5\n1\n0 0 1\n", "Expected 4"),
            ("5\n5\n1\n0 0 1 x\n", "line 4"),
            ("5\n5\n1\n-1 0 1 1\n", "coordinate \"-1\""),
            ("5\n5\n1\n2 0 2 1\n", "Empty rectangle"),
            ("5\n5\n1\n0 0 1 1\n9 9 9 9\n", "Unexpected content on line 5"),
        ];
        for (text, needle) in bad {
            let err = parse_problem(text).unwrap_err();
            assert!(err.contains(needle), "{needle:?} not in {err:?}");
        }
    }
}
