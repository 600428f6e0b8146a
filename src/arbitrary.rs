//! Utilities for fuzz and/or property testing using `arbitrary`.
//!
//! Uniformly random segments almost never touch, overlap, or degenerate,
//! which are exactly the cases we care most about. So the generators here
//! are biased: [`another_segment`] likes to share endpoints with its
//! reference segment, to lie on the same line, or to be almost parallel to it.

use arbitrary::Unstructured;

use crate::geom::{Point, Segment};

/// Generate an arbitrary float in some range.
pub fn float_in_range(
    start: f64,
    end: f64,
    u: &mut Unstructured<'_>,
) -> Result<f64, arbitrary::Error> {
    let num: u32 = u.arbitrary()?;
    let t = num as f64 / u32::MAX as f64;
    Ok((1.0 - t) * start + t * end)
}

fn float(u: &mut Unstructured<'_>) -> Result<f64, arbitrary::Error> {
    float_in_range(-1e6, 1e6, u)
}

/// Generate a float in some range, but give it a chance to be close to another float.
fn another_float_in_range(
    orig: f64,
    start: f64,
    end: f64,
    u: &mut Unstructured<'_>,
) -> Result<f64, arbitrary::Error> {
    let close: bool = u.arbitrary()?;
    if close {
        let ulps: i32 = u.int_in_range(-32..=32)?;
        let scale = 1.0f64 + ulps as f64 * f64::EPSILON;
        Ok((orig * scale).clamp(start, end))
    } else {
        float_in_range(start, end, u)
    }
}

// Small integer coordinates, so that coincidences are likely.
fn grid_point(u: &mut Unstructured<'_>) -> Result<Point<f64>, arbitrary::Error> {
    let x: i8 = u.int_in_range(-8..=8)?;
    let y: i8 = u.int_in_range(-8..=8)?;
    Ok(Point::new(x.into(), y.into()))
}

fn point(u: &mut Unstructured<'_>) -> Result<Point<f64>, arbitrary::Error> {
    if u.arbitrary()? {
        grid_point(u)
    } else {
        Ok(Point::new(float(u)?, float(u)?))
    }
}

/// Generate an arbitrary segment.
///
/// It has a chance to be degenerate, and a good chance to have small integer coordinates.
pub fn segment(u: &mut Unstructured<'_>) -> Result<Segment<f64>, arbitrary::Error> {
    let start = point(u)?;
    let degenerate = u.ratio(1, 8)?;
    let end = if degenerate { start } else { point(u)? };
    Ok(Segment { start, end })
}

/// Generate an arbitrary segment that has a good chance of being related to `first`.
pub fn another_segment(
    u: &mut Unstructured<'_>,
    first: &Segment<f64>,
) -> Result<Segment<f64>, arbitrary::Error> {
    let dx = first.end.x - first.start.x;
    let dy = first.end.y - first.start.y;
    // A point on first's line, at some multiple of half its length.
    let on_line = |u: &mut Unstructured<'_>| -> Result<Point<f64>, arbitrary::Error> {
        let halves: i8 = u.int_in_range(-4..=6)?;
        let t = f64::from(halves) / 2.0;
        Ok(Point::new(first.start.x + t * dx, first.start.y + t * dy))
    };

    match u.choose_index(6)? {
        0 => segment(u),
        1 => Ok(Segment {
            start: first.start,
            end: point(u)?,
        }),
        2 => Ok(Segment {
            start: point(u)?,
            end: first.end,
        }),
        3 => {
            let p = on_line(u)?;
            Ok(Segment { start: p, end: p })
        }
        4 => Ok(Segment {
            start: on_line(u)?,
            end: on_line(u)?,
        }),
        _ => {
            // Nearly parallel, and nearby.
            let offset = float_in_range(-1.0, 1.0, u)?;
            let start = Point::new(first.start.x, first.start.y + offset);
            let end = Point::new(
                another_float_in_range(first.end.x, -2e6, 2e6, u)?,
                another_float_in_range(first.end.y + offset, -2e6, 2e6, u)?,
            );
            Ok(Segment { start, end })
        }
    }
}
