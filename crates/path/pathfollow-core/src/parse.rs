//! Line-oriented path config parser.
//!
//! Layout (blank lines and comment lines are skipped and do not count as records):
//!
//! ```text
//! <path count>
//! <control point count>     # per path
//! <span>
//! <x,y,z>                   # position, once per control point
//! <ex,ey,ez>                # Euler angles
//! ```
//!
//! Parsing is all-or-nothing: any malformed or missing record fails the whole load.

use crate::config::Config;
use crate::data::{ControlPoint, Path, PathSet, MIN_ARTISTIC_POINTS};
use crate::error::PathError;
use crate::interp::euler_to_quat;

/// Parse a path config using default settings (degrees, `#` comments).
pub fn parse_path_config(text: &str) -> Result<PathSet, PathError> {
    parse_path_lines(text.lines(), &Config::default())
}

/// Parse a path config with explicit settings.
pub fn parse_path_config_with(text: &str, cfg: &Config) -> Result<PathSet, PathError> {
    parse_path_lines(text.lines(), cfg)
}

/// Parse an ordered sequence of raw lines into a `PathSet`.
pub fn parse_path_lines<'a, I>(lines: I, cfg: &Config) -> Result<PathSet, PathError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut records = Records::new(lines, cfg.comment_marker);

    let (line, raw) = records.next("path count")?;
    let path_count = parse_count(line, raw, "path count")?;

    // Declared counts are untrusted; never reserve beyond the records present.
    let mut paths = Vec::with_capacity(path_count.min(records.remaining()));
    for path_idx in 0..path_count {
        let (line, raw) = records.next("control point count")?;
        let point_count = parse_count(line, raw, "control point count")?;
        if point_count < 1 {
            return Err(PathError::malformed(
                line,
                format!("path {path_idx} declares no control points"),
            ));
        }
        let count_line = line;

        let (line, raw) = records.next("span")?;
        let span = parse_float(line, raw, "span")?;
        if span <= 0.0 {
            return Err(PathError::malformed(
                line,
                format!("span must be > 0, got {span}"),
            ));
        }

        let mut points = Vec::with_capacity(point_count.min(records.remaining() / 2));
        for _ in 0..point_count {
            let (line, raw) = records.next("control point position")?;
            let position = parse_triple(line, raw)?;
            let (line, raw) = records.next("control point rotation")?;
            let euler = parse_triple(line, raw)?;
            points.push(ControlPoint {
                position,
                orientation: euler_to_quat(euler, cfg.angle_unit),
            });
        }

        if point_count < MIN_ARTISTIC_POINTS {
            log::warn!(
                "path {path_idx} has {point_count} control points; curves repeat neighbours below {MIN_ARTISTIC_POINTS}"
            );
        }

        let path = Path::new(points, span)
            .map_err(|e| PathError::malformed(count_line, e.to_string()))?;
        paths.push(path);
    }

    let trailing = records.remaining();
    if trailing > 0 {
        log::warn!("ignoring {trailing} record(s) after the last declared path");
    }
    log::debug!("parsed {} path(s)", paths.len());

    Ok(PathSet::new(paths))
}

/// Meaningful records with their 1-based source line numbers.
struct Records<'a> {
    items: Vec<(usize, &'a str)>,
    pos: usize,
    end_line: usize,
}

impl<'a> Records<'a> {
    fn new<I>(lines: I, marker: char) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut items = Vec::new();
        let mut total = 0;
        for (idx, raw) in lines.into_iter().enumerate() {
            total = idx + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with(marker) {
                continue;
            }
            items.push((idx + 1, trimmed));
        }
        Self {
            items,
            pos: 0,
            end_line: total + 1,
        }
    }

    fn next(&mut self, expected: &str) -> Result<(usize, &'a str), PathError> {
        match self.items.get(self.pos) {
            Some(&item) => {
                self.pos += 1;
                Ok(item)
            }
            None => Err(PathError::malformed(
                self.end_line,
                format!("unexpected end of input, expected {expected}"),
            )),
        }
    }

    fn remaining(&self) -> usize {
        self.items.len() - self.pos
    }
}

fn parse_count(line: usize, raw: &str, what: &str) -> Result<usize, PathError> {
    raw.parse::<usize>()
        .map_err(|e| PathError::malformed(line, format!("invalid {what} '{raw}': {e}")))
}

fn parse_float(line: usize, raw: &str, what: &str) -> Result<f32, PathError> {
    let v = raw
        .trim()
        .parse::<f32>()
        .map_err(|e| PathError::malformed(line, format!("invalid {what} '{raw}': {e}")))?;
    if !v.is_finite() {
        return Err(PathError::malformed(
            line,
            format!("{what} must be finite, got '{raw}'"),
        ));
    }
    Ok(v)
}

fn parse_triple(line: usize, raw: &str) -> Result<[f32; 3], PathError> {
    let fields: Vec<&str> = raw.split(',').collect();
    if fields.len() != 3 {
        return Err(PathError::malformed(
            line,
            format!(
                "expected 3 comma-separated values, found {} in '{raw}'",
                fields.len()
            ),
        ));
    }
    Ok([
        parse_float(line, fields[0], "component")?,
        parse_float(line, fields[1], "component")?,
        parse_float(line, fields[2], "component")?,
    ])
}
