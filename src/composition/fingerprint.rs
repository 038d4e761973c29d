use crate::color::rgba::Rgba8;
use crate::composition::pipeline::Composition;
use crate::foundation::math::Fnv1a64;
use crate::scene::primitive::{Geometry, GradientStop, Paint, Primitive};

/// 128-bit content hash of a [`Composition`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CompositionFingerprint {
    /// First stream.
    pub hi: u64,
    /// Second stream.
    pub lo: u64,
}

impl std::fmt::Display for CompositionFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

/// Hash every coordinate bit pattern, color and alpha of `comp` with two seeded FNV-1a streams.
pub fn fingerprint(comp: &Composition) -> CompositionFingerprint {
    let mut h = Pair {
        a: Fnv1a64::new_default(),
        b: Fnv1a64::new(0x9ae1_6a3b_2f90_404f),
    };

    h.u64(u64::from(comp.dims.width));
    h.u64(u64::from(comp.dims.height));
    h.u64(comp.primitives.len() as u64);
    for p in &comp.primitives {
        primitive(&mut h, p);
    }

    CompositionFingerprint {
        hi: h.a.finish(),
        lo: h.b.finish(),
    }
}

struct Pair {
    a: Fnv1a64,
    b: Fnv1a64,
}

impl Pair {
    fn u8(&mut self, v: u8) {
        self.a.write_u8(v);
        self.b.write_u8(v);
    }

    fn u64(&mut self, v: u64) {
        self.a.write_u64(v);
        self.b.write_u64(v);
    }

    fn f64(&mut self, v: f64) {
        self.a.write_f64(v);
        self.b.write_f64(v);
    }

    fn point(&mut self, p: kurbo::Point) {
        self.f64(p.x);
        self.f64(p.y);
    }

    fn rect(&mut self, r: kurbo::Rect) {
        for v in [r.x0, r.y0, r.x1, r.y1] {
            self.f64(v);
        }
    }

    fn color(&mut self, c: Rgba8) {
        let bytes = [c.r, c.g, c.b, c.a];
        self.a.write_bytes(&bytes);
        self.b.write_bytes(&bytes);
    }

    fn points(&mut self, pts: &[kurbo::Point]) {
        self.u64(pts.len() as u64);
        for p in pts {
            self.point(*p);
        }
    }

    fn stops(&mut self, stops: &[GradientStop]) {
        self.u64(stops.len() as u64);
        for s in stops {
            self.f64(s.offset);
            self.color(s.color);
        }
    }
}

fn primitive(h: &mut Pair, p: &Primitive) {
    match &p.geometry {
        Geometry::Polygon { points } => {
            h.u8(0);
            h.points(points);
        }
        Geometry::Circle { center, radius } => {
            h.u8(1);
            h.point(*center);
            h.f64(*radius);
        }
        Geometry::Rect { rect } => {
            h.u8(2);
            h.rect(*rect);
        }
        Geometry::RoundedRect { rect, radius } => {
            h.u8(3);
            h.rect(*rect);
            h.f64(*radius);
        }
        Geometry::Polyline { points, closed } => {
            h.u8(4);
            h.points(points);
            h.u8(u8::from(*closed));
        }
    }

    match &p.paint {
        Paint::Solid { color } => {
            h.u8(0);
            h.color(*color);
        }
        Paint::Linear { start, end, stops } => {
            h.u8(1);
            h.point(*start);
            h.point(*end);
            h.stops(stops);
        }
        Paint::Radial {
            start,
            start_radius,
            end,
            end_radius,
            stops,
        } => {
            h.u8(2);
            h.point(*start);
            h.f64(*start_radius);
            h.point(*end);
            h.f64(*end_radius);
            h.stops(stops);
        }
    }

    h.f64(p.alpha);
    match p.stroke {
        Some(s) => {
            h.u8(1);
            h.f64(s.width);
            h.u8(u8::from(s.round_cap));
        }
        None => h.u8(0),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/fingerprint.rs"]
mod tests;
