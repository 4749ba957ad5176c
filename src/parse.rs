//! Text encodings for stroke paths.
//!
//! Two formats are read:
//!
//! - **legacy**: `"x,y"` tokens separated by spaces or tabs, e.g.
//!   `"0,0 10,0 10,10"`. Coordinates are floating literals truncated to
//!   integers. Lenient decoding stops at the first token that does not match.
//! - **svg**: a one-character command marker followed by `L`-separated
//!   `"x y"` integer pairs, e.g. `"M0 0L10 0L10 10"`. Lenient decoding
//!   skips segments that do not match and carries on.
//!
//! The strict variants report the first offending token or segment instead.

use kurbo::Point;

use crate::error::PathError;
use crate::path::Path;

/// Token separators of the legacy format.
const BLANKS: [char; 2] = [' ', '\t'];

/// Decode the legacy format, stopping at the first unparsable token.
pub fn parse_legacy(s: &str) -> Path {
    let mut path = Path::new();
    let mut rest = s.trim_start_matches(&BLANKS[..]);
    while let Some((point, _)) = scan_pair(rest) {
        path.push(point);
        let token_end = rest.find(&BLANKS[..]).unwrap_or(rest.len());
        rest = rest[token_end..].trim_start_matches(&BLANKS[..]);
    }
    if !rest.trim().is_empty() {
        log::debug!(
            "legacy path: stopped after {} points at {:?}",
            path.len(),
            rest
        );
    }
    path
}

/// Decode the legacy format, rejecting any token that is not exactly `x,y`.
pub fn parse_legacy_strict(s: &str) -> Result<Path, PathError> {
    let mut path = Path::new();
    for (offset, token) in blank_separated(s) {
        match scan_pair(token) {
            Some((point, used)) if used == token.len() => path.push(point),
            _ => {
                return Err(PathError::InvalidToken {
                    offset,
                    token: token.to_string(),
                })
            }
        }
    }
    Ok(path)
}

/// Decode the svg-like format, dropping segments that are not `x y`.
pub fn parse_svg(s: &str) -> Path {
    let mut path = Path::new();
    for (index, segment) in svg_segments(s) {
        match scan_int_pair(segment) {
            Some(point) => path.push(point),
            None => log::debug!("svg path: skipping segment {} {:?}", index, segment),
        }
    }
    path
}

/// Decode the svg-like format, rejecting any segment that is not exactly
/// two whitespace-separated integers.
pub fn parse_svg_strict(s: &str) -> Result<Path, PathError> {
    let mut path = Path::new();
    if body(s).is_empty() {
        return Ok(path);
    }
    for (index, segment) in svg_segments(s) {
        let mut fields = segment.split_whitespace().map(str::parse::<i32>);
        match (fields.next(), fields.next(), fields.next()) {
            (Some(Ok(x)), Some(Ok(y)), None) => path.push(Point::new(x as f64, y as f64)),
            _ => {
                return Err(PathError::InvalidSegment {
                    index,
                    segment: segment.to_string(),
                })
            }
        }
    }
    Ok(path)
}

/// Encode as legacy tokens. Coordinates are truncated to integers.
pub fn to_legacy(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x as i32, p.y as i32))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Encode as an svg-like `M..L..` string. Coordinates are truncated to integers.
pub fn to_svg(points: &[Point]) -> String {
    let pairs = points
        .iter()
        .map(|p| format!("{} {}", p.x as i32, p.y as i32))
        .collect::<Vec<_>>()
        .join("L");
    format!("M{}", pairs)
}

// ── Helpers ──────────────────────────────────────────────

/// Tokens between runs of blanks, with their byte offsets.
fn blank_separated(s: &str) -> impl Iterator<Item = (usize, &str)> {
    s.split(&BLANKS[..])
        .scan(0, |pos, token| {
            let start = *pos;
            *pos += token.len() + 1;
            Some((start, token))
        })
        .filter(|(_, token)| !token.is_empty())
}

/// Everything after the leading command marker.
fn body(s: &str) -> &str {
    let mut chars = s.chars();
    chars.next();
    chars.as_str()
}

fn svg_segments(s: &str) -> impl Iterator<Item = (usize, &str)> {
    body(s).split('L').enumerate()
}

/// `%f,%f`: returns the truncated point and the bytes consumed.
fn scan_pair(s: &str) -> Option<(Point, usize)> {
    let (x, n) = scan_float(s)?;
    let rest = s[n..].strip_prefix(',')?;
    let (y, m) = scan_float(rest)?;
    Some((Point::new(truncate(x), truncate(y)), n + 1 + m))
}

/// `%d %d`.
fn scan_int_pair(s: &str) -> Option<Point> {
    let (x, n) = scan_int(s)?;
    let (y, _) = scan_int(&s[n..])?;
    Some(Point::new(x as f64, y as f64))
}

/// Truncate toward zero, as integer coordinates are stored.
fn truncate(v: f64) -> f64 {
    v as i32 as f64
}

fn is_c_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Leading whitespace, optional sign, then the longest decimal float
/// literal (or `inf`/`infinity`/`nan`). Returns the value and bytes consumed.
fn scan_float(s: &str) -> Option<(f64, usize)> {
    let bytes = s.as_bytes();
    let start = bytes.iter().take_while(|b| is_c_space(**b)).count();
    let mut end = start;
    if matches!(bytes.get(end), Some(b'+' | b'-')) {
        end += 1;
    }

    for word in ["infinity", "inf", "nan"] {
        let matched = bytes
            .get(end..end + word.len())
            .is_some_and(|b| b.eq_ignore_ascii_case(word.as_bytes()));
        if matched {
            end += word.len();
            return s[start..end].parse().ok().map(|v| (v, end));
        }
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(&bytes[exp.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    s[start..end].parse().ok().map(|v| (v, end))
}

/// Leading whitespace, optional sign, then decimal digits.
fn scan_int(s: &str) -> Option<(i32, usize)> {
    let bytes = s.as_bytes();
    let start = bytes.iter().take_while(|b| is_c_space(**b)).count();
    let mut end = start;
    if matches!(bytes.get(end), Some(b'+' | b'-')) {
        end += 1;
    }
    let digits = count_digits(&bytes[end..]);
    if digits == 0 {
        return None;
    }
    end += digits;
    s[start..end].parse().ok().map(|v| (v, end))
}
