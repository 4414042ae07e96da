use std::io::BufRead;

use crate::error::{ParseError, RasterError};
use crate::point2d::Point2D;
use crate::triangle::Triangle;

/// Parses an `x,y` token.
pub fn parse_point(token: &str) -> Result<Point2D, ParseError> {
    let token = token.trim();
    let (x, rest) = token
        .split_once(',')
        .ok_or_else(|| ParseError::MissingComma(token.to_string()))?;
    if rest.contains(',') {
        return Err(ParseError::TooManyCoordinates(token.to_string()));
    }
    Ok(Point2D { x: parse_coord(x)?, y: parse_coord(rest)? })
}

fn parse_coord(s: &str) -> Result<i32, ParseError> {
    let s = s.trim();
    s.parse().map_err(|_| ParseError::NotAnInteger(s.to_string()))
}

pub fn parse_triangle<S: AsRef<str>>(tokens: &[S]) -> Result<Triangle, ParseError> {
    if tokens.len() != 3 {
        return Err(ParseError::VertexCount(tokens.len()));
    }
    let a = parse_point(tokens[0].as_ref())?;
    let b = parse_point(tokens[1].as_ref())?;
    let c = parse_point(tokens[2].as_ref())?;
    Ok(Triangle { a, b, c })
}

/// One triangle per line, vertices separated by whitespace. Blank lines and
/// `#` comments are skipped.
pub fn parse_triangles<R: BufRead>(reader: R) -> Result<Vec<Triangle>, RasterError> {
    let mut triangles = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() || tokens[0].starts_with('#') {
            continue;
        }
        let triangle = parse_triangle(&tokens)
            .map_err(|e| ParseError::AtLine { line: i + 1, source: Box::new(e) })?;
        triangles.push(triangle);
    }
    Ok(triangles)
}
