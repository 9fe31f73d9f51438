// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A resolved tooltip: the nearest meaningful datum under the cursor.
///
/// For nearest-distance kinds the pixel position snaps to the hit data
/// point; grid and pie kinds keep the cursor position and report the cell
/// value or wedge value through `label`. Quiver reports the vector
/// components through `x`/`y` with `x_label`/`y_label` set to `u`/`v`.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    /// Device-pixel x of the hit.
    pub x_px: i32,
    /// Device-pixel y of the hit.
    pub y_px: i32,
    /// World x of the hit datum (or the first vector component for quiver).
    pub x: f64,
    /// World y of the hit datum (or the second vector component for quiver).
    pub y: f64,
    /// X axis label, defaulting to `"x"`.
    pub x_label: String,
    /// Y axis label, defaulting to `"y"`.
    pub y_label: String,
    /// Series label from the legend, or a formatted cell/wedge value.
    /// Empty when neither applies.
    pub label: String,
}
