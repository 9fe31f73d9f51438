// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use arbor_coords::{grid, DeviceMap, Frame};
use arbor_scene::{DataStore, Figure, Panzoom, PlotKind, SubplotId};
use kurbo::Point;
use tracing::debug;

use crate::box_zoom::focus_and_factor_from_box;
use crate::event::{InputEvent, Modifiers};

/// Wheel sensitivity: zoom factor is `1 - SENSITIVITY * angle_delta`, with
/// the delta in eighths of a degree.
const WHEEL_ZOOM_SENSITIVITY: f64 = 1e-3;

/// Degrees of 3D pose rotation per pixel of drag shift.
const DEGREES_PER_PIXEL: f64 = 0.2;

/// What [`apply`] did with an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputOutcome {
    /// The scene was mutated.
    Applied,
    /// The gesture was recognized but the target kind cannot honor it
    /// (wheel/factor zoom and SHIFT-translate on 3D kinds). Nothing was
    /// mutated.
    Unsupported,
    /// No gesture matched, or no subplot was hit. Nothing was mutated.
    Ignored,
}

impl InputOutcome {
    /// Returns true when the event mutated the scene.
    #[must_use]
    pub fn is_applied(self) -> bool {
        self == Self::Applied
    }
}

/// Applies an input event to a figure.
///
/// Payload shapes are tested in priority order (reset key, wheel zoom,
/// explicit-factor zoom, shift, box zoom); the first match wins and the
/// call returns. See the [crate docs](crate) for the full dispatch rules.
///
/// A pointer position over a marginal-heatmap subplot additionally updates
/// that subplot's highlight cell as a side effect, whatever the gesture; a
/// bare pointer move that matches no gesture still reports
/// [`InputOutcome::Ignored`].
pub fn apply(figure: &mut Figure, store: &DataStore, event: &InputEvent) -> InputOutcome {
    let map = DeviceMap::new(figure.width(), figure.height());

    if let Some((x, y)) = event.pos {
        let ndc = map.device_to_ndc(Point::new(f64::from(x), f64::from(y)));
        let resolved = figure.subplot_at_ndc(ndc);
        debug!(x, y, ndc_x = ndc.x, ndc_y = ndc.y, "processing pointer input");

        if let Some(key) = event.key.as_deref() {
            // Key events are terminal whether or not the key is handled.
            debug!(key, "got key");
            return match key {
                "r" => {
                    match resolved {
                        Some(id) => {
                            debug!("reset single subplot coordinate ranges");
                            if let Some(subplot) = figure.subplot_mut(id) {
                                subplot.reset_ranges = true;
                            }
                        }
                        None => {
                            debug!("reset all subplot coordinate ranges");
                            figure.reset_ranges_all();
                        }
                    }
                    InputOutcome::Applied
                }
                _ => InputOutcome::Ignored,
            };
        }

        if let Some(id) = resolved {
            let Some(kind) = figure.subplot(id).map(|s| s.kind) else {
                return InputOutcome::Ignored;
            };

            if kind == PlotKind::MarginalHeatmap {
                update_marginal_index(figure, store, id, &map, f64::from(x), f64::from(y));
            }

            if let Some(angle_delta) = event.angle_delta {
                if kind.is_3d() {
                    // Zoom is not defined for 3D projections.
                    return InputOutcome::Unsupported;
                }
                let factor = 1.0 - WHEEL_ZOOM_SENSITIVITY * angle_delta;
                debug!(angle_delta, factor, "wheel zoom");
                return attach_zoom(figure, id, ndc, factor);
            }
            if let Some(factor) = event.factor {
                if kind.is_3d() {
                    return InputOutcome::Unsupported;
                }
                debug!(factor, "explicit-factor zoom");
                return attach_zoom(figure, id, ndc, factor);
            }

            if let Some((xshift, yshift)) = event.shift {
                if kind.is_3d() {
                    if event.modifiers.contains(Modifiers::SHIFT) {
                        // Reserved for a 3D translate mode.
                        return InputOutcome::Unsupported;
                    }
                    return rotate_pose(figure, id, xshift, yshift);
                }
                // The window moves against the drag on x and with it on y
                // (device y points down, NDC y points up).
                let shift = -map.device_shift_to_ndc(f64::from(xshift), f64::from(yshift));
                debug!(
                    ndc_xshift = shift.x,
                    ndc_yshift = shift.y,
                    "translate by ndc shift"
                );
                let Some(subplot) = figure.subplot_mut(id) else {
                    return InputOutcome::Ignored;
                };
                subplot.attach_panzoom(Panzoom::pan(shift));
                return InputOutcome::Applied;
            }
        }
    }

    if let Some((x1, y1, x2, y2)) = event.box_corners {
        // The subplot is re-resolved from the box itself, independent of any
        // earlier single-point resolution.
        let Some(zoom) =
            focus_and_factor_from_box(figure, x1, y1, x2, y2, event.keep_aspect_ratio)
        else {
            return InputOutcome::Ignored;
        };
        debug!(
            focus_x = zoom.focus.x,
            focus_y = zoom.focus.y,
            factor_x = zoom.factor_x,
            factor_y = zoom.factor_y,
            "box zoom"
        );
        let Some(subplot) = figure.subplot_mut(zoom.subplot) else {
            return InputOutcome::Ignored;
        };
        subplot.attach_panzoom(Panzoom {
            focus: zoom.focus,
            factor_x: zoom.factor_x,
            factor_y: zoom.factor_y,
        });
        return InputOutcome::Applied;
    }

    InputOutcome::Ignored
}

/// Returns true when the subplot under the device pixel has a 3D kind.
///
/// Hosts use this to decide gesture handling before dispatching, for
/// example to draw a rotation cursor instead of a pan cursor.
#[must_use]
pub fn is_view3d(figure: &Figure, x: i32, y: i32) -> bool {
    let map = DeviceMap::new(figure.width(), figure.height());
    let ndc = map.device_to_ndc(Point::new(f64::from(x), f64::from(y)));
    figure
        .subplot_at_ndc(ndc)
        .and_then(|id| figure.subplot(id))
        .is_some_and(|s| s.kind.is_3d())
}

fn attach_zoom(figure: &mut Figure, id: SubplotId, ndc: Point, factor: f64) -> InputOutcome {
    let Some(subplot) = figure.subplot_mut(id) else {
        return InputOutcome::Ignored;
    };
    let focus = ndc - subplot.viewport_center();
    debug!(focus_x = focus.x, focus_y = focus.y, factor, "zoom to ndc focus point");
    subplot.attach_panzoom(Panzoom::zoom(focus, factor));
    InputOutcome::Applied
}

fn rotate_pose(figure: &mut Figure, id: SubplotId, xshift: i32, yshift: i32) -> InputOutcome {
    let Some(subplot) = figure.subplot_mut(id) else {
        return InputOutcome::Ignored;
    };
    let pose = subplot.pose.get_or_insert_default();
    pose.phi += f64::from(xshift) * DEGREES_PER_PIXEL;
    pose.theta = (pose.theta - f64::from(yshift) * DEGREES_PER_PIXEL).clamp(0.0, 180.0);
    debug!(phi = pose.phi, theta = pose.theta, "rotate 3d pose");
    InputOutcome::Applied
}

/// Recomputes the marginal-heatmap highlight cell from a pointer position.
///
/// The cell indices come from the grid lookup over the backing heatmap
/// series; a cursor off the grid clears the highlight.
fn update_marginal_index(
    figure: &mut Figure,
    store: &DataStore,
    id: SubplotId,
    map: &DeviceMap,
    x_px: f64,
    y_px: f64,
) {
    let index = (|| {
        let subplot = figure.subplot(id)?;
        let series = subplot.series.first()?;
        let frame = Frame::from_rects(subplot.viewport, subplot.window)?;
        let xs = store.get(series.x?)?;
        let ys = store.get(series.y?)?;
        let (&x_first, &x_last) = (xs.first()?, xs.last()?);
        let (&y_first, &y_last) = (ys.first()?, ys.last()?);
        let origin = frame.world_to_device(map, Point::new(x_first, y_first));
        let end = frame.world_to_device(map, Point::new(x_last, y_last));
        let xind = grid::axis_cell(x_px, origin.x, end.x, xs.len())?;
        let yind = grid::axis_cell(y_px, origin.y, end.y, ys.len())?;
        Some((xind, yind))
    })();
    if let Some(subplot) = figure.subplot_mut(id) {
        subplot.marginal_index = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_scene::{Series, Subplot};
    use kurbo::Rect;

    fn line_figure() -> Figure {
        let mut figure = Figure::new(800.0, 600.0);
        figure.add_subplot(Subplot::new(
            PlotKind::Line,
            Rect::new(0.1, 0.1, 0.9, 0.7),
            Rect::new(0.0, 0.0, 10.0, 10.0),
        ));
        figure
    }

    fn surface_figure() -> Figure {
        let mut figure = Figure::new(800.0, 600.0);
        figure.add_subplot(Subplot::new(
            PlotKind::Surface,
            Rect::new(0.1, 0.1, 0.9, 0.7),
            Rect::new(0.0, 0.0, 10.0, 10.0),
        ));
        figure
    }

    #[test]
    fn reset_on_resolved_subplot_is_targeted() {
        let mut figure = line_figure();
        figure.add_subplot(Subplot::new(
            PlotKind::Scatter,
            Rect::new(0.1, 0.72, 0.9, 0.75),
            Rect::new(0.0, 0.0, 1.0, 1.0),
        ));
        let store = DataStore::default();
        // (400, 300) is ndc (0.5, 0.375), inside the first subplot.
        let outcome = apply(&mut figure, &store, &InputEvent::key_press(400, 300, "r"));
        assert_eq!(outcome, InputOutcome::Applied);
        assert!(figure.subplots()[0].reset_ranges);
        assert!(!figure.subplots()[1].reset_ranges);
    }

    #[test]
    fn reset_on_background_is_broadcast() {
        let mut figure = line_figure();
        figure.add_subplot(Subplot::new(
            PlotKind::Scatter,
            Rect::new(0.1, 0.72, 0.9, 0.75),
            Rect::new(0.0, 0.0, 1.0, 1.0),
        ));
        let store = DataStore::default();
        // (790, 590) is ndc (0.9875, 0.0125), on the figure background.
        let outcome = apply(&mut figure, &store, &InputEvent::key_press(790, 590, "r"));
        assert_eq!(outcome, InputOutcome::Applied);
        assert!(figure.subplots().iter().all(|s| s.reset_ranges));
    }

    #[test]
    fn unhandled_key_is_terminal_and_ignored() {
        let mut figure = line_figure();
        let store = DataStore::default();
        let event = InputEvent {
            angle_delta: Some(120.0),
            ..InputEvent::key_press(400, 300, "q")
        };
        // The key consumes the event before the wheel payload is looked at.
        assert_eq!(apply(&mut figure, &store, &event), InputOutcome::Ignored);
        assert!(figure.subplots()[0].panzoom.is_none());
    }

    #[test]
    fn wheel_zoom_attaches_descriptor_with_cursor_focus() {
        let mut figure = line_figure();
        let store = DataStore::default();
        let outcome = apply(&mut figure, &store, &InputEvent::wheel(400, 300, 120.0));
        assert_eq!(outcome, InputOutcome::Applied);
        let pz = figure.subplots()[0].panzoom.unwrap();
        assert_eq!(pz.factor_x, pz.factor_y);
        assert!((pz.factor_x - (1.0 - 0.001 * 120.0)).abs() < 1e-12);
        // ndc (0.5, 0.375) minus the viewport midpoint (0.5, 0.4).
        assert!(pz.focus.x.abs() < 1e-12);
        assert!((pz.focus.y + 0.025).abs() < 1e-12);
    }

    #[test]
    fn zero_angle_delta_yields_identity_factor() {
        let mut figure = line_figure();
        let store = DataStore::default();
        assert!(apply(&mut figure, &store, &InputEvent::wheel(400, 300, 0.0)).is_applied());
        let pz = figure.subplots()[0].panzoom.unwrap();
        assert_eq!(pz.factor_x, 1.0);
        assert_eq!(pz.factor_y, 1.0);
    }

    #[test]
    fn wheel_takes_precedence_over_explicit_factor() {
        let mut figure = line_figure();
        let store = DataStore::default();
        let event = InputEvent {
            factor: Some(5.0),
            ..InputEvent::wheel(400, 300, 0.0)
        };
        assert!(apply(&mut figure, &store, &event).is_applied());
        let pz = figure.subplots()[0].panzoom.unwrap();
        assert_eq!(pz.factor_x, 1.0);
    }

    #[test]
    fn explicit_factor_is_taken_verbatim() {
        let mut figure = line_figure();
        let store = DataStore::default();
        assert!(apply(&mut figure, &store, &InputEvent::zoom(400, 300, 0.25)).is_applied());
        let pz = figure.subplots()[0].panzoom.unwrap();
        assert_eq!(pz.factor_x, 0.25);
        assert_eq!(pz.factor_y, 0.25);
    }

    #[test]
    fn wheel_zoom_on_3d_kind_is_unsupported_and_inert() {
        let mut figure = surface_figure();
        let store = DataStore::default();
        let outcome = apply(&mut figure, &store, &InputEvent::wheel(400, 300, 120.0));
        assert_eq!(outcome, InputOutcome::Unsupported);
        assert!(figure.subplots()[0].panzoom.is_none());
    }

    #[test]
    fn pan_attaches_shift_descriptor_with_zero_factors() {
        let mut figure = line_figure();
        let store = DataStore::default();
        let outcome = apply(&mut figure, &store, &InputEvent::pan(400, 300, 10, 0));
        assert_eq!(outcome, InputOutcome::Applied);
        let pz = figure.subplots()[0].panzoom.unwrap();
        assert_eq!(pz.factor_x, 0.0);
        assert_eq!(pz.factor_y, 0.0);
        assert!((pz.focus.x + 10.0 / 800.0).abs() < 1e-12);
        assert!(pz.focus.y.abs() < 1e-12);
    }

    #[test]
    fn shift_rotates_3d_pose() {
        let mut figure = surface_figure();
        let store = DataStore::default();
        let outcome = apply(&mut figure, &store, &InputEvent::pan(400, 300, 10, 5));
        assert_eq!(outcome, InputOutcome::Applied);
        let pose = figure.subplots()[0].pose.unwrap();
        assert!((pose.phi - 42.0).abs() < 1e-12);
        assert!((pose.theta - 69.0).abs() < 1e-12);
        assert!(figure.subplots()[0].panzoom.is_none());
    }

    #[test]
    fn elevation_saturates_exactly_at_bounds() {
        let mut figure = surface_figure();
        let store = DataStore::default();
        // Default theta is 70; a drag of +400px would drive it to -10.
        apply(&mut figure, &store, &InputEvent::pan(400, 300, 0, 400));
        assert_eq!(figure.subplots()[0].pose.unwrap().theta, 0.0);
        // From 0, a drag of -1000px would drive it to 200.
        apply(&mut figure, &store, &InputEvent::pan(400, 300, 0, -1000));
        assert_eq!(figure.subplots()[0].pose.unwrap().theta, 180.0);
    }

    #[test]
    fn shift_translate_on_3d_kind_is_unsupported() {
        let mut figure = surface_figure();
        let store = DataStore::default();
        let event = InputEvent::pan(400, 300, 10, 5).with_modifiers(Modifiers::SHIFT);
        assert_eq!(apply(&mut figure, &store, &event), InputOutcome::Unsupported);
        let pose = figure.subplots()[0].pose.unwrap();
        assert_eq!(pose.phi, 40.0);
        assert_eq!(pose.theta, 70.0);
    }

    #[test]
    fn box_zoom_resolves_subplot_from_the_box() {
        let mut figure = line_figure();
        let store = DataStore::default();
        // No pointer position at all; the box alone picks the subplot.
        let outcome = apply(&mut figure, &store, &InputEvent::box_zoom(200, 200, 400, 300));
        assert_eq!(outcome, InputOutcome::Applied);
        let pz = figure.subplots()[0].panzoom.unwrap();
        assert_eq!(pz.factor_x, pz.factor_y);
    }

    #[test]
    fn box_outside_subplots_is_ignored() {
        let mut figure = line_figure();
        let store = DataStore::default();
        let outcome = apply(&mut figure, &store, &InputEvent::box_zoom(740, 20, 790, 60));
        assert_eq!(outcome, InputOutcome::Ignored);
        assert!(figure.subplots()[0].panzoom.is_none());
    }

    #[test]
    fn gestureless_event_is_ignored() {
        let mut figure = line_figure();
        let store = DataStore::default();
        assert_eq!(
            apply(&mut figure, &store, &InputEvent::pointer_move(400, 300)),
            InputOutcome::Ignored
        );
        assert_eq!(
            apply(&mut figure, &store, &InputEvent::new()),
            InputOutcome::Ignored
        );
    }

    #[test]
    fn wheel_outside_every_subplot_is_ignored() {
        let mut figure = line_figure();
        let store = DataStore::default();
        let outcome = apply(&mut figure, &store, &InputEvent::wheel(790, 590, 120.0));
        assert_eq!(outcome, InputOutcome::Ignored);
        assert!(figure.subplots()[0].panzoom.is_none());
    }

    #[test]
    fn is_view3d_reports_kind_under_cursor() {
        let mut figure = line_figure();
        figure.add_subplot(Subplot::new(
            PlotKind::Surface,
            Rect::new(0.1, 0.72, 0.9, 0.75),
            Rect::new(0.0, 0.0, 1.0, 1.0),
        ));
        // ndc (0.5, 0.375): the line subplot.
        assert!(!is_view3d(&figure, 400, 300));
        // ndc (0.5, 0.735): the surface subplot. Device y = 600 - 0.735 * 800.
        assert!(is_view3d(&figure, 400, 12));
        // Background.
        assert!(!is_view3d(&figure, 790, 590));
    }

    fn marginal_figure(store: &mut DataStore) -> Figure {
        let mut figure = Figure::new(600.0, 600.0);
        let x = store.insert("mh_x", vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        let y = store.insert("mh_y", vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        let mut subplot = Subplot::new(
            PlotKind::MarginalHeatmap,
            Rect::new(0.0, 0.0, 1.0, 1.0),
            Rect::new(0.0, 0.0, 10.0, 10.0),
        );
        subplot.series.push(Series {
            x: Some(x),
            y: Some(y),
            ..Series::default()
        });
        figure.add_subplot(subplot);
        figure
    }

    #[test]
    fn pointer_over_marginal_heatmap_updates_highlight_cell() {
        let mut store = DataStore::default();
        let mut figure = marginal_figure(&mut store);
        // World spans [0, 10] over 600px; sample 0 is at device x 0, sample 5
        // at device x 600. The y axis runs top-down in device space.
        let outcome = apply(&mut figure, &store, &InputEvent::pointer_move(300, 300));
        assert_eq!(outcome, InputOutcome::Ignored);
        assert_eq!(figure.subplots()[0].marginal_index, Some((3, 3)));
    }

    #[test]
    fn pointer_off_the_grid_clears_highlight_cell() {
        let mut store = DataStore::default();
        let mut figure = marginal_figure(&mut store);
        apply(&mut figure, &store, &InputEvent::pointer_move(300, 300));
        assert!(figure.subplots()[0].marginal_index.is_some());
        // Shrink the sampled x range to world [5, 10] (device [300, 600]);
        // a cursor at device x 100 is before the first sample.
        store.insert("mh_x", vec![5.0, 6.0, 7.0, 8.0, 9.0, 10.0]);
        apply(&mut figure, &store, &InputEvent::pointer_move(100, 300));
        assert_eq!(figure.subplots()[0].marginal_index, None);
    }
}
