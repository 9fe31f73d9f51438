// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// The plot kind of a subplot.
///
/// The kind governs which interaction rules apply: whether wheel and box
/// zoom mutate the viewport or are rejected, whether pointer shifts pan the
/// window or rotate a 3D pose, and which inverse mapping the tooltip lookup
/// uses. This is a closed enumeration so kind dispatch in those places is an
/// exhaustive match, and adding a kind is a compile-time-checked change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlotKind {
    /// Connected line plot.
    Line,
    /// Scatter plot.
    Scatter,
    /// Stem plot.
    Stem,
    /// Step/stairs plot.
    Stairs,
    /// Regular-grid heatmap.
    Heatmap,
    /// Heatmap with marginal histograms.
    MarginalHeatmap,
    /// Contour lines over a regular grid.
    Contour,
    /// Filled contours over a regular grid.
    Contourf,
    /// Image display over the axis limits.
    Imshow,
    /// Pie chart.
    Pie,
    /// Hexagonal binning plot.
    Hexbin,
    /// Density shading plot.
    Shade,
    /// Vector field of arrows over a regular grid.
    Quiver,
    /// 3D wireframe surface.
    Wireframe,
    /// 3D shaded surface.
    Surface,
    /// 3D line plot.
    Plot3,
    /// 3D scatter plot.
    Scatter3,
    /// Triangulated 3D surface.
    Trisurf,
    /// Volume rendering.
    Volume,
    /// Isosurface rendering.
    Isosurface,
}

impl PlotKind {
    /// Whether this kind draws into a 3D projection with an orientable pose.
    ///
    /// 3D kinds rotate on pointer shift instead of panning, and wheel/factor
    /// zoom is not available for them.
    #[must_use]
    pub fn is_3d(self) -> bool {
        matches!(
            self,
            Self::Wireframe
                | Self::Surface
                | Self::Plot3
                | Self::Scatter3
                | Self::Trisurf
                | Self::Volume
                | Self::Isosurface
        )
    }

    /// Whether tooltip lookups map the cursor to a regular grid cell instead
    /// of searching individual data points.
    #[must_use]
    pub fn grid_sampled(self) -> bool {
        matches!(
            self,
            Self::Heatmap
                | Self::MarginalHeatmap
                | Self::Contour
                | Self::Contourf
                | Self::Imshow
                | Self::Quiver
        )
    }

    /// Whether tooltip lookups are supported for this kind at all.
    #[must_use]
    pub fn supports_picking(self) -> bool {
        matches!(
            self,
            Self::Line
                | Self::Scatter
                | Self::Stem
                | Self::Stairs
                | Self::Heatmap
                | Self::MarginalHeatmap
                | Self::Contour
                | Self::Contourf
                | Self::Imshow
                | Self::Pie
                | Self::Hexbin
                | Self::Shade
                | Self::Quiver
        )
    }

    /// Whether tooltip lookups read the contour-resampled `px`/`py`/`pz`
    /// series roles instead of the raw `x`/`y`/`z` ones.
    #[must_use]
    pub fn uses_resampled_roles(self) -> bool {
        matches!(self, Self::Contour | Self::Contourf)
    }

    /// The canonical lowercase name of this kind.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Scatter => "scatter",
            Self::Stem => "stem",
            Self::Stairs => "stairs",
            Self::Heatmap => "heatmap",
            Self::MarginalHeatmap => "marginalheatmap",
            Self::Contour => "contour",
            Self::Contourf => "contourf",
            Self::Imshow => "imshow",
            Self::Pie => "pie",
            Self::Hexbin => "hexbin",
            Self::Shade => "shade",
            Self::Quiver => "quiver",
            Self::Wireframe => "wireframe",
            Self::Surface => "surface",
            Self::Plot3 => "plot3",
            Self::Scatter3 => "scatter3",
            Self::Trisurf => "trisurf",
            Self::Volume => "volume",
            Self::Isosurface => "isosurface",
        }
    }

    /// Parses a canonical kind name. Returns `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "line" => Self::Line,
            "scatter" => Self::Scatter,
            "stem" => Self::Stem,
            "stairs" => Self::Stairs,
            "heatmap" => Self::Heatmap,
            "marginalheatmap" => Self::MarginalHeatmap,
            "contour" => Self::Contour,
            "contourf" => Self::Contourf,
            "imshow" => Self::Imshow,
            "pie" => Self::Pie,
            "hexbin" => Self::Hexbin,
            "shade" => Self::Shade,
            "quiver" => Self::Quiver,
            "wireframe" => Self::Wireframe,
            "surface" => Self::Surface,
            "plot3" => Self::Plot3,
            "scatter3" => Self::Scatter3,
            "trisurf" => Self::Trisurf,
            "volume" => Self::Volume,
            "isosurface" => Self::Isosurface,
            _ => return None,
        })
    }
}

/// Orientation of a subplot's data axes.
///
/// Vertical orientation swaps the x/y roles of series data, so for example a
/// horizontal histogram draws its bars along x. Tooltip lookups honor the
/// swap when computing distances.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Data x maps to the horizontal axis (the default).
    #[default]
    Horizontal,
    /// Data x maps to the vertical axis.
    Vertical,
}
