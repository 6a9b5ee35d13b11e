//! Document coordinates of an element.

use dpi::LogicalPosition;

use crate::host::{ClientRect, ScrollMetrics};

/// Offset of `rect` from the top-left corner of the document, rounded to whole pixels.
///
/// Scroll and border offsets are taken from the first source that reports a non-zero value:
/// the page offset, then the root element, then the body.
pub fn document_coords(rect: &ClientRect, metrics: &ScrollMetrics) -> LogicalPosition<i32> {
    let body = metrics.body.unwrap_or_default();

    let scroll_top =
        first_set(&[metrics.page_offset.y, metrics.root.scroll.y, body.scroll.y]);
    let scroll_left =
        first_set(&[metrics.page_offset.x, metrics.root.scroll.x, body.scroll.x]);

    let client_top = first_set(&[metrics.root.client.y, body.client.y, 0.0]);
    let client_left = first_set(&[metrics.root.client.x, body.client.x, 0.0]);

    let top = rect.origin.y + scroll_top - client_top;
    let left = rect.origin.x + scroll_left - client_left;

    LogicalPosition::new(round_half_up(left), round_half_up(top))
}

/// The first value that is neither zero nor NaN, or the last one if none is.
fn first_set(values: &[f64]) -> f64 {
    values
        .iter()
        .copied()
        .find(|v| *v != 0.0 && !v.is_nan())
        .or_else(|| values.last().copied())
        .unwrap_or(0.0)
}

/// Round to the nearest integer, halves toward positive infinity.
fn round_half_up(value: f64) -> i32 {
    let rounded = value.round();
    // `f64::round` sends negative halves away from zero.
    if value - rounded == 0.5 {
        (rounded + 1.0) as i32
    } else {
        rounded as i32
    }
}
