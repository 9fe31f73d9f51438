// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pie-sector lookup: one circular hit target with angular sub-selection.

use kurbo::Point;
use smallvec::SmallVec;

use crate::pick::Lookup;
use crate::tooltip::Tooltip;

/// Hit-tests the pie circle and resolves the wedge under the cursor.
///
/// The pie fills the fixed `0.05..0.95` box of its window; the box corners
/// pushed to device pixels give the circle's center and radius. A cursor
/// within the radius always hits (the center included, at distance zero).
/// Wedges start at 12 o'clock and run clockwise, each spanning its value's
/// fraction of the data total; boundaries are inclusive on both ends, so a
/// cursor exactly on a shared boundary reports the later wedge.
pub(crate) fn lookup(ctx: &Lookup<'_>) -> Option<Tooltip> {
    let bottom_right = ctx.frame.world_to_device(&ctx.map, Point::new(0.95, 0.05));
    let top_left = ctx.frame.world_to_device(&ctx.map, Point::new(0.05, 0.95));
    let radius = (bottom_right.x - top_left.x) / 2.0;
    let center = Point::new(bottom_right.x - radius, bottom_right.y - radius);

    let offset = ctx.cursor_px - center;
    if offset.hypot() > radius {
        return None;
    }

    // Cursor angle in the same range the sector boundaries walk through:
    // 90° is 12 o'clock and values decrease clockwise down to -270°.
    let mut angle = (-offset.y).atan2(offset.x).to_degrees();
    if angle > 90.0 {
        angle -= 360.0;
    }

    let mut label = String::new();
    let values = ctx
        .subplot
        .series
        .first()
        .and_then(|series| ctx.store.get(series.x?));
    if let Some(values) = values {
        let total: f64 = values.iter().sum();
        if total > 0.0 {
            let fractions: SmallVec<[f64; 16]> =
                values.iter().map(|value| value / total).collect();
            let mut start = 90.0;
            for (&value, fraction) in values.iter().zip(fractions) {
                let end = start - fraction * 360.0;
                if start >= angle && angle >= end {
                    label = value.to_string();
                }
                start = end;
            }
        }
    }

    Some(Tooltip {
        x_px: ctx.cursor_px.x as i32,
        y_px: ctx.cursor_px.y as i32,
        x: 0.0,
        y: 0.0,
        x_label: ctx.x_label.clone(),
        y_label: ctx.y_label.clone(),
        label,
    })
}
