// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nearest-datum lookup for point-per-point kinds (line, scatter, stem,
//! stairs, hexbin, shade).

use arbor_scene::Orientation;
use kurbo::Point;

use crate::pick::{Lookup, PICK_RADIUS_PX};
use crate::tooltip::Tooltip;

/// Scans every point of every series for the closest qualifying candidate.
///
/// Points outside the world-space search window are skipped before the
/// distance computation; a candidate replaces the current best only when it
/// is strictly closer and within the hit radius in device pixels. Series
/// with missing roles or stale data keys contribute nothing but still count
/// toward the legend label order.
pub(crate) fn lookup(ctx: &Lookup<'_>) -> Option<Tooltip> {
    let vertical = ctx.subplot.orientation == Orientation::Vertical;
    let labels = ctx
        .subplot
        .legend
        .as_ref()
        .map_or(&[][..], |legend| legend.labels.as_slice());
    let window = ctx.search_window;

    let mut min_diff = f64::INFINITY;
    let mut hit = None;
    for (series_index, series) in ctx.subplot.series.iter().enumerate() {
        let (x_role, y_role) = if vertical {
            (series.y, series.x)
        } else {
            (series.x, series.y)
        };
        let Some(xs) = x_role.and_then(|key| ctx.store.get(key)) else {
            continue;
        };
        let Some(ys) = y_role.and_then(|key| ctx.store.get(key)) else {
            continue;
        };

        for (&wx, &wy) in xs.iter().zip(ys) {
            if wx < window.x0 || wx > window.x1 || wy < window.y0 || wy > window.y1 {
                continue;
            }
            let device = ctx.frame.world_to_device(&ctx.map, Point::new(wx, wy));
            let diff = device.distance(ctx.cursor_px);
            if diff < min_diff && diff <= PICK_RADIUS_PX {
                min_diff = diff;
                hit = Some(Tooltip {
                    x_px: device.x as i32,
                    y_px: device.y as i32,
                    x: wx,
                    y: wy,
                    x_label: ctx.x_label.clone(),
                    y_label: ctx.y_label.clone(),
                    label: labels.get(series_index).cloned().unwrap_or_default(),
                });
            }
        }
    }
    hit
}
