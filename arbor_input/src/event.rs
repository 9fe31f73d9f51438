// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

bitflags::bitflags! {
    /// Keyboard modifiers carried on an input event.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub struct Modifiers: u8 {
        /// SHIFT is held. Reserves the 3D shift gesture for translation.
        const SHIFT = 0b0000_0001;
    }
}

/// A decoded input event.
///
/// Every field is optional; which gesture the event encodes is decided by
/// which combinations are present, in the priority order documented on
/// [`apply`](crate::apply). Positions and shifts are device pixels with the
/// origin at the top-left of the figure.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputEvent {
    /// Cursor position `(x, y)`.
    pub pos: Option<(i32, i32)>,
    /// Pressed key, as a string (`"r"` resets coordinate ranges).
    pub key: Option<String>,
    /// Mouse wheel rotation in eighths of a degree.
    pub angle_delta: Option<f64>,
    /// Explicit zoom factor, an alternative to `angle_delta`.
    pub factor: Option<f64>,
    /// Drag shift `(xshift, yshift)`.
    pub shift: Option<(i32, i32)>,
    /// Keyboard modifiers.
    pub modifiers: Modifiers,
    /// Box selection corners `(x1, y1, x2, y2)`; `(x1, y1)` is the fixed
    /// corner.
    pub box_corners: Option<(i32, i32, i32, i32)>,
    /// Whether box zoom preserves the window aspect ratio. Defaults to
    /// `true`.
    pub keep_aspect_ratio: bool,
}

impl InputEvent {
    /// An empty event with the default aspect-ratio policy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            keep_aspect_ratio: true,
            ..Self::default()
        }
    }

    /// A key press at a cursor position.
    #[must_use]
    pub fn key_press(x: i32, y: i32, key: impl Into<String>) -> Self {
        Self {
            pos: Some((x, y)),
            key: Some(key.into()),
            ..Self::new()
        }
    }

    /// A wheel rotation at a cursor position.
    #[must_use]
    pub fn wheel(x: i32, y: i32, angle_delta: f64) -> Self {
        Self {
            pos: Some((x, y)),
            angle_delta: Some(angle_delta),
            ..Self::new()
        }
    }

    /// An explicit-factor zoom at a cursor position.
    #[must_use]
    pub fn zoom(x: i32, y: i32, factor: f64) -> Self {
        Self {
            pos: Some((x, y)),
            factor: Some(factor),
            ..Self::new()
        }
    }

    /// A drag shift starting at a cursor position.
    #[must_use]
    pub fn pan(x: i32, y: i32, xshift: i32, yshift: i32) -> Self {
        Self {
            pos: Some((x, y)),
            shift: Some((xshift, yshift)),
            ..Self::new()
        }
    }

    /// A pointer move to a cursor position with no gesture payload.
    ///
    /// Still useful on marginal-heatmap subplots, where it updates the
    /// highlight cell.
    #[must_use]
    pub fn pointer_move(x: i32, y: i32) -> Self {
        Self {
            pos: Some((x, y)),
            ..Self::new()
        }
    }

    /// A box selection; `(x1, y1)` is the fixed corner.
    #[must_use]
    pub fn box_zoom(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self {
            box_corners: Some((x1, y1, x2, y2)),
            ..Self::new()
        }
    }

    /// Sets the keyboard modifiers.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Overrides the box-zoom aspect-ratio policy.
    #[must_use]
    pub fn with_keep_aspect_ratio(mut self, keep: bool) -> Self {
        self.keep_aspect_ratio = keep;
        self
    }
}
