// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid-cell lookup for regularly sampled kinds (heatmap, marginal heatmap,
//! contour, contourf, imshow, quiver).

use arbor_coords::grid;
use arbor_scene::{PlotKind, Series};
use kurbo::Point;

use crate::pick::Lookup;
use crate::tooltip::Tooltip;

/// Maps the cursor to a grid cell of the first series that resolves.
///
/// The cell index interpolates between the device positions of the first and
/// last sample along each axis; imshow has no meaningful sample coordinates
/// and substitutes the cached axis limits. A cursor off the grid on either
/// axis is a miss.
pub(crate) fn lookup(ctx: &Lookup<'_>) -> Option<Tooltip> {
    ctx.subplot
        .series
        .iter()
        .find_map(|series| cell_tooltip(ctx, series))
}

fn cell_tooltip(ctx: &Lookup<'_>, series: &Series) -> Option<Tooltip> {
    let kind = ctx.subplot.kind;
    let (x_role, y_role, z_role) = if kind.uses_resampled_roles() {
        (series.px, series.py, series.pz)
    } else {
        (series.x, series.y, series.z)
    };
    let xs = ctx.store.get(x_role?)?;
    let ys = ctx.store.get(y_role?)?;
    let (&x_first, &x_last) = (xs.first()?, xs.last()?);
    let (&y_first, &y_last) = (ys.first()?, ys.last()?);
    let (x_first, x_last, y_first, y_last) = if kind == PlotKind::Imshow {
        let limits = ctx.subplot.limits?;
        (limits.x0, limits.x1, limits.y0, limits.y1)
    } else {
        (x_first, x_last, y_first, y_last)
    };

    let origin = ctx
        .frame
        .world_to_device(&ctx.map, Point::new(x_first, y_first));
    let end = ctx
        .frame
        .world_to_device(&ctx.map, Point::new(x_last, y_last));
    let xind = grid::axis_cell(ctx.cursor_px.x, origin.x, end.x, xs.len())?;
    let yind = grid::axis_cell(ctx.cursor_px.y, origin.y, end.y, ys.len())?;
    let cell = yind * xs.len() + xind;

    let (x, y, x_label, y_label, label) = if kind == PlotKind::Quiver {
        let us = ctx.store.get(series.u?)?;
        let vs = ctx.store.get(series.v?)?;
        (
            *us.get(cell)?,
            *vs.get(cell)?,
            String::from("u"),
            String::from("v"),
            String::new(),
        )
    } else {
        let zs = ctx.store.get(z_role?)?;
        let value = *zs.get(cell)?;
        (
            xs[xind],
            ys[yind],
            ctx.x_label.clone(),
            ctx.y_label.clone(),
            value.to_string(),
        )
    };

    Some(Tooltip {
        x_px: ctx.cursor_px.x as i32,
        y_px: ctx.cursor_px.y as i32,
        x,
        y,
        x_label,
        y_label,
        label,
    })
}
