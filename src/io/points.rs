// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Landmark point-file decoding.
//!
//! A point file looks like:
//!
//! ```text
//! version: 1
//! n_points: 68
//! {
//! 212.5 301.0
//! ...
//! }
//! ```
//!
//! The first three lines are a header and the last line is a footer. Every
//! line in between holds one X, Y pair separated by whitespace or a comma.

use crate::error::{BrowserError, Result};
use crate::models::frame::Point;
use std::path::Path;

const HEADER_LINES: usize = 3;

/// Read and decode the landmark file at `path`.
pub fn load_points(path: &Path) -> Result<Vec<Point>> {
    let text = std::fs::read_to_string(path).map_err(|e| BrowserError::io(path, e))?;
    parse_points(&text, path)
}

/// Decode the contents of a point file. `path` is only used in errors.
pub fn parse_points(text: &str, path: &Path) -> Result<Vec<Point>> {
    let malformed = |line: usize, reason: String| BrowserError::MalformedPoints {
        path: path.to_path_buf(),
        line,
        reason,
    };

    let lines: Vec<&str> = text.lines().collect();
    let end = lines
        .iter()
        .rposition(|l| !l.trim().is_empty())
        .map_or(0, |i| i + 1);
    if end < HEADER_LINES + 1 {
        return Err(malformed(end, "missing header or footer".to_string()));
    }

    let declared = lines[..HEADER_LINES].iter().find_map(|l| declared_count(l));

    let mut points = Vec::new();
    for (offset, raw) in lines[HEADER_LINES..end - 1].iter().enumerate() {
        let line_no = HEADER_LINES + offset + 1;
        let fields: Vec<&str> = raw
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|f| !f.is_empty())
            .collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() != 2 {
            return Err(malformed(
                line_no,
                format!("expected 2 coordinates, found {}", fields.len()),
            ));
        }
        let x = parse_coordinate(fields[0]).map_err(|r| malformed(line_no, r))?;
        let y = parse_coordinate(fields[1]).map_err(|r| malformed(line_no, r))?;
        points.push(Point::new(x, y));
    }

    if let Some(n) = declared {
        if n != points.len() {
            return Err(malformed(
                2,
                format!("header declares {} points, found {}", n, points.len()),
            ));
        }
    }

    Ok(points)
}

/// Parse an `n_points: N` header line.
fn declared_count(line: &str) -> Option<usize> {
    let (key, value) = line.split_once(':')?;
    if key.trim() != "n_points" {
        return None;
    }
    value.trim().parse().ok()
}

fn parse_coordinate(field: &str) -> std::result::Result<f64, String> {
    match field.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        Ok(_) => Err(format!("non-finite coordinate '{}'", field)),
        Err(_) => Err(format!("invalid coordinate '{}'", field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Vec<Point>> {
        parse_points(text, Path::new("test.pts"))
    }

    #[test]
    fn test_parse_standard_file() {
        let text = "version: 1\nn_points: 3\n{\n1.5 2.0\n3 4\n-5.25 6e1\n}\n";
        let points = parse(text).unwrap();

        assert_eq!(
            points,
            vec![
                Point::new(1.5, 2.0),
                Point::new(3.0, 4.0),
                Point::new(-5.25, 60.0),
            ]
        );
    }

    #[test]
    fn test_comma_separators_and_blank_lines() {
        let text = "version: 1\nn_points: 2\n{\n1,2\n\n 3.0 ,\t4.0 \n}\n\n\n";
        let points = parse(text).unwrap();

        assert_eq!(points, vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]);
    }

    #[test]
    fn test_header_without_count_is_accepted() {
        let text = "a\nb\nc\n7 8\n}";
        assert_eq!(parse(text).unwrap(), vec![Point::new(7.0, 8.0)]);
    }

    #[test]
    fn test_zero_points() {
        let text = "version: 1\nn_points: 0\n{\n}\n";
        assert!(parse(text).unwrap().is_empty());
    }

    #[test]
    fn test_count_mismatch_is_rejected() {
        let text = "version: 1\nn_points: 3\n{\n1 2\n}\n";
        let err = parse(text).unwrap_err();
        assert!(matches!(err, BrowserError::MalformedPoints { line: 2, .. }));
    }

    #[test]
    fn test_bad_coordinate_reports_line() {
        let text = "version: 1\nn_points: 2\n{\n1 2\n3 abc\n}\n";
        match parse(text).unwrap_err() {
            BrowserError::MalformedPoints { line, reason, .. } => {
                assert_eq!(line, 5);
                assert!(reason.contains("abc"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_wrong_arity_is_rejected() {
        let text = "h\nh\nh\n1 2 3\n}\n";
        assert!(matches!(
            parse(text),
            Err(BrowserError::MalformedPoints { line: 4, .. })
        ));
    }

    #[test]
    fn test_truncated_file_is_rejected() {
        assert!(parse("version: 1\nn_points: 0\n").is_err());
        assert!(parse("").is_err());
    }

    #[test]
    fn test_missing_file_is_io_failure() {
        let err = load_points(Path::new("/definitely/not/here.pts")).unwrap_err();
        assert!(matches!(err, BrowserError::Io { .. }));
    }
}
