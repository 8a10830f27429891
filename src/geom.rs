// Copyright 2025 Lars Brubaker
// License: MIT
//
// Pure geometric functions over UV coordinates.
//
// Everything here is a free function of its inputs: orientation, barycentric
// weights for the point-in-triangle test, and the clamped point-to-segment
// distance used by the boundary fallback.

pub type Real = f64;

/// A 2D coordinate in UV space.
pub type Uv = [Real; 2];

/// An ordered pair of vertex indices.
pub type Edge = [u32; 2];

/// Twice the signed area of (a, b, c). Positive when the triple is CCW.
#[inline]
pub fn orient(a: Uv, b: Uv, c: Uv) -> Real {
    (b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0])
}

/// Barycentric weights of `p` with respect to (a, b, c).
///
/// Returns `None` for a zero-area triangle. The weights always sum to 1;
/// the third is derived from the first two so that holds exactly.
pub fn barycentric(p: Uv, a: Uv, b: Uv, c: Uv) -> Option<[Real; 3]> {
    let area = orient(a, b, c);
    if area == 0.0 || !area.is_finite() {
        return None;
    }
    let w0 = orient(p, b, c) / area;
    let w1 = orient(a, p, c) / area;
    Some([w0, w1, 1.0 - w0 - w1])
}

/// Squared distance from `p` to the segment `start + t * dir`, `t` in [0, 1].
///
/// `len2` is the squared length of `dir`. A zero-length segment divides by
/// zero and yields NaN, which never compares less than a real distance.
#[inline]
pub fn segment_dist2(p: Uv, start: Uv, dir: Uv, len2: Real) -> Real {
    let lerp = ((p[0] - start[0]) * dir[0] + (p[1] - start[1]) * dir[1]) / len2;
    let lerp = if lerp < 0.0 {
        0.0
    } else if lerp > 1.0 {
        1.0
    } else {
        lerp
    };
    let c0 = dir[0] * lerp + start[0] - p[0];
    let c1 = dir[1] * lerp + start[1] - p[1];
    c0 * c0 + c1 * c1
}

/// The exact containment test run against each candidate triangle.
///
/// Implementations return the barycentric weights of `p` when it lies inside
/// or on the boundary of (a, b, c), and `None` otherwise.
pub trait TrianglePredicate {
    fn barycentric(&self, p: Uv, a: Uv, b: Uv, c: Uv) -> Option<[Real; 3]>;
}

impl<F> TrianglePredicate for F
where
    F: Fn(Uv, Uv, Uv, Uv) -> Option<[Real; 3]>,
{
    fn barycentric(&self, p: Uv, a: Uv, b: Uv, c: Uv) -> Option<[Real; 3]> {
        self(p, a, b, c)
    }
}

/// Default predicate: accepts a point when every weight is >= -epsilon.
/// Works for either winding; rejects degenerate triangles.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BarycentricTest {
    pub epsilon: Real,
}

pub const DEFAULT_EPSILON: Real = 1e-12;

impl Default for BarycentricTest {
    fn default() -> Self {
        BarycentricTest {
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl TrianglePredicate for BarycentricTest {
    fn barycentric(&self, p: Uv, a: Uv, b: Uv, c: Uv) -> Option<[Real; 3]> {
        let w = barycentric(p, a, b, c)?;
        if w.iter().all(|&x| x >= -self.epsilon) {
            Some(w)
        } else {
            None
        }
    }
}
