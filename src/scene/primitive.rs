use kurbo::{BezPath, Point, Rect, Shape};

use crate::color::rgba::Rgba8;

/// Flattening tolerance used when curves are converted to paths.
pub(crate) const PATH_TOLERANCE: f64 = 0.1;

/// Shape of a primitive, in absolute canvas pixels.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Geometry {
    /// Closed polygon through `points`.
    Polygon {
        /// Vertices in drawing order.
        points: Vec<Point>,
    },
    /// Full circle.
    Circle {
        /// Center.
        center: Point,
        /// Radius.
        radius: f64,
    },
    /// Axis-aligned rectangle.
    Rect {
        /// Bounds.
        rect: Rect,
    },
    /// Axis-aligned rectangle with uniformly rounded corners.
    RoundedRect {
        /// Bounds.
        rect: Rect,
        /// Corner radius, clamped to half the shorter side when drawn.
        radius: f64,
    },
    /// Open or closed polyline, normally stroked.
    Polyline {
        /// Vertices in drawing order.
        points: Vec<Point>,
        /// Whether the last vertex connects back to the first.
        closed: bool,
    },
}

impl Geometry {
    /// Closed polygon.
    pub fn polygon(points: impl IntoIterator<Item = Point>) -> Self {
        Self::Polygon {
            points: points.into_iter().collect(),
        }
    }

    /// Open polyline.
    pub fn polyline(points: impl IntoIterator<Item = Point>) -> Self {
        Self::Polyline {
            points: points.into_iter().collect(),
            closed: false,
        }
    }

    /// Circle.
    pub fn circle(center: Point, radius: f64) -> Self {
        Self::Circle { center, radius }
    }

    /// Rectangle from origin and size; negative sizes are normalized.
    pub fn rect(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self::Rect {
            rect: Rect::new(x, y, x + w, y + h).abs(),
        }
    }

    /// Rounded rectangle from origin and size.
    pub fn rounded_rect(x: f64, y: f64, w: f64, h: f64, radius: f64) -> Self {
        Self::RoundedRect {
            rect: Rect::new(x, y, x + w, y + h).abs(),
            radius,
        }
    }

    /// Path outline. Empty for degenerate shapes.
    pub fn to_bezpath(&self) -> BezPath {
        match self {
            Self::Polygon { points } => poly_path(points, true),
            Self::Polyline { points, closed } => poly_path(points, *closed),
            Self::Circle { center, radius } => {
                if *radius > 0.0 {
                    kurbo::Circle::new(*center, *radius).to_path(PATH_TOLERANCE)
                } else {
                    BezPath::new()
                }
            }
            Self::Rect { rect } => rect.to_path(PATH_TOLERANCE),
            Self::RoundedRect { rect, radius } => {
                let r = radius.max(0.0).min(rect.width().min(rect.height()) / 2.0);
                kurbo::RoundedRect::from_rect(*rect, r).to_path(PATH_TOLERANCE)
            }
        }
    }

    /// Axis-aligned bounds.
    pub fn bounding_box(&self) -> Rect {
        match self {
            Self::Polygon { points } | Self::Polyline { points, .. } => {
                let mut it = points.iter();
                let Some(first) = it.next() else {
                    return Rect::ZERO;
                };
                it.fold(Rect::from_points(*first, *first), |r, p| {
                    r.union_pt(*p)
                })
            }
            Self::Circle { center, radius } => {
                let r = radius.max(0.0);
                Rect::new(center.x - r, center.y - r, center.x + r, center.y + r)
            }
            Self::Rect { rect } | Self::RoundedRect { rect, .. } => *rect,
        }
    }

    /// Whether every coordinate and length is finite.
    pub fn is_finite(&self) -> bool {
        let pt = |p: &Point| p.x.is_finite() && p.y.is_finite();
        match self {
            Self::Polygon { points } | Self::Polyline { points, .. } => points.iter().all(pt),
            Self::Circle { center, radius } => pt(center) && radius.is_finite(),
            Self::Rect { rect } => rect.is_finite(),
            Self::RoundedRect { rect, radius } => rect.is_finite() && radius.is_finite(),
        }
    }

    /// Nonzero-winding containment test against the filled outline.
    pub fn contains(&self, p: Point) -> bool {
        match self {
            Self::Circle { center, radius } => center.distance(p) <= *radius,
            Self::Rect { rect } => rect.contains(p),
            _ => self.to_bezpath().contains(p),
        }
    }
}

fn poly_path(points: &[Point], closed: bool) -> BezPath {
    let mut path = BezPath::new();
    let mut it = points.iter();
    let Some(first) = it.next() else {
        return path;
    };
    path.move_to(*first);
    for p in it {
        path.line_to(*p);
    }
    if closed {
        path.close_path();
    }
    path
}

/// One color stop of a gradient.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GradientStop {
    /// Position along the gradient in `[0, 1]`.
    pub offset: f64,
    /// Stop color (straight alpha).
    pub color: Rgba8,
}

/// How a primitive is colored.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Paint {
    /// Single color.
    Solid {
        /// Fill color.
        color: Rgba8,
    },
    /// Linear gradient between two points, padded outside the segment.
    Linear {
        /// Offset 0 position.
        start: Point,
        /// Offset 1 position.
        end: Point,
        /// Ordered stops.
        stops: Vec<GradientStop>,
    },
    /// Two-circle radial gradient, padded outside the interpolated cone.
    Radial {
        /// Center of the offset 0 circle.
        start: Point,
        /// Radius of the offset 0 circle.
        start_radius: f64,
        /// Center of the offset 1 circle.
        end: Point,
        /// Radius of the offset 1 circle.
        end_radius: f64,
        /// Ordered stops.
        stops: Vec<GradientStop>,
    },
}

impl Paint {
    /// Solid color.
    pub fn solid(color: Rgba8) -> Self {
        Self::Solid { color }
    }

    /// Linear gradient with `colors` spread evenly from `start` to `end`.
    pub fn linear(start: Point, end: Point, colors: &[Rgba8]) -> Self {
        Self::Linear {
            start,
            end,
            stops: even_stops(colors),
        }
    }

    /// Linear gradient with explicit stops.
    pub fn linear_stops(start: Point, end: Point, stops: &[(f64, Rgba8)]) -> Self {
        Self::Linear {
            start,
            end,
            stops: explicit_stops(stops),
        }
    }

    /// Radial gradient with explicit stops.
    pub fn radial(
        start: Point,
        start_radius: f64,
        end: Point,
        end_radius: f64,
        stops: &[(f64, Rgba8)],
    ) -> Self {
        Self::Radial {
            start,
            start_radius,
            end,
            end_radius,
            stops: explicit_stops(stops),
        }
    }

    /// Linear gradient when `use_gradient`, otherwise `solid`.
    pub fn linear_or_solid(
        use_gradient: bool,
        start: Point,
        end: Point,
        colors: &[Rgba8],
        solid: Rgba8,
    ) -> Self {
        if use_gradient {
            Self::linear(start, end, colors)
        } else {
            Self::solid(solid)
        }
    }

    /// Stops of a gradient paint; empty for solid paints.
    pub fn stops(&self) -> &[GradientStop] {
        match self {
            Self::Solid { .. } => &[],
            Self::Linear { stops, .. } | Self::Radial { stops, .. } => stops,
        }
    }

    /// Color at offset 0: the solid color or the first stop.
    pub fn primary_color(&self) -> Rgba8 {
        match self {
            Self::Solid { color } => *color,
            _ => self.stops().first().map_or(Rgba8::BLACK, |s| s.color),
        }
    }
}

fn even_stops(colors: &[Rgba8]) -> Vec<GradientStop> {
    match colors.len() {
        0 => Vec::new(),
        1 => vec![GradientStop {
            offset: 0.0,
            color: colors[0],
        }],
        n => {
            let step = 1.0 / (n - 1) as f64;
            colors
                .iter()
                .enumerate()
                .map(|(i, c)| GradientStop {
                    offset: i as f64 * step,
                    color: *c,
                })
                .collect()
        }
    }
}

fn explicit_stops(stops: &[(f64, Rgba8)]) -> Vec<GradientStop> {
    stops
        .iter()
        .map(|(offset, color)| GradientStop {
            offset: offset.clamp(0.0, 1.0),
            color: *color,
        })
        .collect()
}

/// Outline stroking parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StrokeStyle {
    /// Line width in pixels.
    pub width: f64,
    /// Round caps and joins instead of butt caps and miter joins.
    pub round_cap: bool,
}

/// One drawable element of a composition.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Primitive {
    /// Shape.
    pub geometry: Geometry,
    /// Coloring.
    pub paint: Paint,
    /// Layer opacity in `[0, 1]`.
    pub alpha: f64,
    /// Stroke the outline instead of filling when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<StrokeStyle>,
}

impl Primitive {
    /// Opaque filled primitive.
    pub fn fill(geometry: Geometry, paint: Paint) -> Self {
        Self {
            geometry,
            paint,
            alpha: 1.0,
            stroke: None,
        }
    }

    /// Opaque stroked primitive.
    pub fn stroke(geometry: Geometry, paint: Paint, width: f64, round_cap: bool) -> Self {
        Self {
            geometry,
            paint,
            alpha: 1.0,
            stroke: Some(StrokeStyle { width, round_cap }),
        }
    }

    /// Replace the layer opacity (clamped to `[0, 1]`).
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    /// Whether geometry, paint positions and alpha are all finite.
    pub fn is_finite(&self) -> bool {
        let paint_ok = match &self.paint {
            Paint::Solid { .. } => true,
            Paint::Linear { start, end, .. } => {
                start.x.is_finite() && start.y.is_finite() && end.x.is_finite() && end.y.is_finite()
            }
            Paint::Radial {
                start,
                start_radius,
                end,
                end_radius,
                ..
            } => {
                start.x.is_finite()
                    && start.y.is_finite()
                    && end.x.is_finite()
                    && end.y.is_finite()
                    && start_radius.is_finite()
                    && end_radius.is_finite()
            }
        };
        self.geometry.is_finite()
            && paint_ok
            && self.alpha.is_finite()
            && self.stroke.is_none_or(|s| s.width.is_finite())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/primitive.rs"]
mod tests;
