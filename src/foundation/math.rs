use kurbo::{Point, Vec2};

/// Determinant threshold below which three points are treated as collinear.
pub(crate) const COLLINEAR_EPSILON: f64 = 1e-6;

#[derive(Clone, Copy, Debug)]
pub(crate) struct Fnv1a64(u64);

impl Fnv1a64 {
    pub(crate) const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01B3;

    pub(crate) fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub(crate) fn new_default() -> Self {
        Self(Self::OFFSET_BASIS)
    }

    pub(crate) fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    pub(crate) fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    pub(crate) fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    pub(crate) fn write_bytes(&mut self, bytes: &[u8]) {
        let mut h = self.0;
        for &b in bytes {
            h ^= u64::from(b);
            h = h.wrapping_mul(Self::PRIME);
        }
        self.0 = h;
    }

    pub(crate) fn finish(self) -> u64 {
        self.0
    }
}

pub(crate) fn clamp01(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}

/// A circle through three points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circumcircle {
    /// Circle center.
    pub center: Point,
    /// Circle radius.
    pub radius: f64,
}

/// Circle passing through `a`, `b` and `c`.
///
/// Returns `None` when the points are (numerically) collinear.
pub fn circle_from_three_points(a: Point, b: Point, c: Point) -> Option<Circumcircle> {
    let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
    if !d.is_finite() || d.abs() < COLLINEAR_EPSILON {
        return None;
    }
    let a2 = a.x * a.x + a.y * a.y;
    let b2 = b.x * b.x + b.y * b.y;
    let c2 = c.x * c.x + c.y * c.y;
    let cx = (a2 * (b.y - c.y) + b2 * (c.y - a.y) + c2 * (a.y - b.y)) / d;
    let cy = (a2 * (c.x - b.x) + b2 * (a.x - c.x) + c2 * (b.x - a.x)) / d;
    let center = Point::new(cx, cy);
    Some(Circumcircle {
        center,
        radius: center.distance(a),
    })
}

/// Cubic bezier position for one axis.
pub(crate) fn cubic_at(t: f64, p0: f64, p1: f64, p2: f64, p3: f64) -> f64 {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}

/// Cubic bezier derivative for one axis.
pub(crate) fn cubic_deriv_at(t: f64, p0: f64, p1: f64, p2: f64, p3: f64) -> f64 {
    let u = 1.0 - t;
    -3.0 * u * u * p0 + (3.0 * u * u - 6.0 * u * t) * p1 + (6.0 * u * t - 3.0 * t * t) * p2
        + 3.0 * t * t * p3
}

/// Rotate `p` around `pivot` by `angle` radians.
pub(crate) fn rotate_about(p: Point, pivot: Point, angle: f64) -> Point {
    let (s, c) = angle.sin_cos();
    let v = p - pivot;
    pivot + Vec2::new(v.x * c - v.y * s, v.x * s + v.y * c)
}

/// JavaScript-style remainder: the sign follows the dividend.
pub(crate) fn js_rem(a: i64, b: i64) -> i64 {
    a % b
}

/// Euclidean index into a slice of length `len` (never negative).
pub(crate) fn wrap_index(i: i64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    i.rem_euclid(len as i64) as usize
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
