#![cfg(feature = "serde")]

use scroll_watch::dpi::{LogicalPosition, LogicalSize};
use scroll_watch::{VisibleBy, WatchConfig};
use serde::{Deserialize, Serialize};

#[allow(dead_code)]
fn needs_serde<S: Serialize + Deserialize<'static>>() {}

#[test]
fn config_serde() {
    needs_serde::<WatchConfig>();
    needs_serde::<VisibleBy>();
}

#[test]
fn dpi_serde() {
    needs_serde::<LogicalPosition<f64>>();
    needs_serde::<LogicalPosition<i32>>();
    needs_serde::<LogicalSize<f64>>();
}
